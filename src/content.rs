//! Hero content records and the simulated content fetch.
//!
//! The real deployment would pull this record from a CMS endpoint; the serde
//! contract on the types (camelCase field names) is that seam. For now the
//! fetch resolves a fixed record after a short delay and never fails.

use gloo_timers::future::TimeoutFuture;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadOption {
    pub id: String,
    pub label: String,
    pub url: String,
    pub version: String,
}

/// Per-platform download links. Only Windows ships today; the optional slots
/// keep the contract ready for the other builds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Downloads {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macos: Option<DownloadOption>,
    pub windows: DownloadOption,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linux: Option<DownloadOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub vision_tag: String,
    pub headline: String,
    pub subhead: String,
    pub description: String,
    pub downloads: Downloads,
}

/// Simulated network latency for the content fetch.
pub const FETCH_DELAY_MS: u32 = 100;

fn hero_content() -> HeroContent {
    HeroContent {
        vision_tag: "VISION".into(),
        headline: "Millions of Agents. One Voice.".into(),
        subhead: "Run your AI agents in a secured environment and connect them \
                  with your Agentic Vault"
            .into(),
        description: "Download an open-source platform where locally-run agents \
                      collaborate through shared context with unlimited personal \
                      memory."
            .into(),
        downloads: Downloads {
            macos: None,
            windows: DownloadOption {
                id: "windows".into(),
                label: "Download for Windows".into(),
                url: "#".into(),
                version: "v0.0.1-beta (x64)".into(),
            },
            linux: None,
        },
    }
}

/// Resolves exactly once per call, after a fixed delay.
pub async fn fetch_hero_content() -> HeroContent {
    TimeoutFuture::new(FETCH_DELAY_MS).await;
    hero_content()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_with_camel_case_contract() {
        let value = serde_json::to_value(hero_content()).unwrap();
        assert_eq!(value["visionTag"], "VISION");
        assert!(value["downloads"]["windows"]["version"]
            .as_str()
            .unwrap()
            .starts_with("v0.0.1"));
        // Unpopulated platforms are omitted, not serialized as null.
        assert!(value["downloads"].get("macos").is_none());
        assert!(value["downloads"].get("linux").is_none());
    }

    #[test]
    fn record_round_trips_from_cms_shaped_json() {
        let json = r##"{
            "visionTag": "VISION",
            "headline": "h",
            "subhead": "s",
            "description": "d",
            "downloads": {
                "windows": {
                    "id": "windows",
                    "label": "Download for Windows",
                    "url": "#",
                    "version": "v0.0.1-beta (x64)"
                },
                "linux": {
                    "id": "linux",
                    "label": "Download for Linux",
                    "url": "#",
                    "version": "v0.0.1-beta (.deb/rpm)"
                }
            }
        }"##;
        let content: HeroContent = serde_json::from_str(json).unwrap();
        assert_eq!(content.headline, "h");
        assert!(content.downloads.macos.is_none());
        assert_eq!(content.downloads.linux.unwrap().id, "linux");
    }
}
