//! Per-platform download buttons fed by the fetched hero content. Platforms
//! without a populated entry simply do not render.

use yew::prelude::*;

use crate::content::{DownloadOption, Downloads};

#[derive(Properties, PartialEq)]
pub struct DownloadWidgetProps {
    pub downloads: Downloads,
}

fn download_button(option: &DownloadOption, primary: bool) -> Html {
    let class = if primary {
        "download-button download-button-primary"
    } else {
        "download-button"
    };
    html! {
        <a class={class} href={option.url.clone()} key={option.id.clone()}>
            <span class="download-label">{ &option.label }</span>
            <span class="download-version">{ &option.version }</span>
        </a>
    }
}

#[function_component(DownloadWidget)]
pub fn download_widget(props: &DownloadWidgetProps) -> Html {
    let downloads = &props.downloads;
    html! {
        <div class="download-widget">
            <style>
                {r#"
                    .download-widget {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        margin: 2rem 0 1rem 0;
                    }
                    .download-button {
                        display: flex;
                        flex-direction: column;
                        padding: 0.9rem 1.6rem;
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        border-radius: 4px;
                        background: rgba(255, 255, 255, 0.03);
                        transition: border-color 0.3s, background 0.3s;
                    }
                    .download-button:hover {
                        border-color: rgba(255, 85, 0, 0.6);
                        background: rgba(255, 85, 0, 0.08);
                    }
                    .download-button-primary {
                        background: #fff;
                        color: #000;
                        border-color: #fff;
                    }
                    .download-button-primary:hover {
                        background: #e8e8e8;
                    }
                    .download-label {
                        font-size: 0.8rem;
                        font-weight: 700;
                        letter-spacing: 0.15em;
                        text-transform: uppercase;
                    }
                    .download-version {
                        font-family: monospace;
                        font-size: 0.7rem;
                        opacity: 0.6;
                        margin-top: 0.3rem;
                    }
                "#}
            </style>
            { for downloads.macos.as_ref().map(|option| download_button(option, false)) }
            { download_button(&downloads.windows, true) }
            { for downloads.linux.as_ref().map(|option| download_button(option, false)) }
        </div>
    }
}
