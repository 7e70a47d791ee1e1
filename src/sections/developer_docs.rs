//! Developer docs section: three external documentation cards.

use yew::prelude::*;

use crate::components::icons::{ArrowUpRightIcon, Icon};
use crate::components::tech_frame::TechFrame;
use crate::config;

const DOC_CARDS: &[(&str, &str, Icon)] = &[
    (
        "Quickstart Guide",
        "Get up and running with Uplift in minutes. Deploy your first agent container.",
        Icon::Terminal,
    ),
    (
        "Core Concepts",
        "Deep dive into the architecture, session tokens, and security vaults.",
        Icon::Kanban,
    ),
    (
        "API Reference",
        "Complete reference for the Agent Store API and Runtime SDKs.",
        Icon::Globe,
    ),
];

#[function_component(DeveloperDocs)]
pub fn developer_docs() -> Html {
    html! {
        <section class="dev-docs">
            <style>{ DOCS_CSS }</style>
            <div class="section-divider">
                <div class="divider-line">
                    <div class="divider-notch"><span class="divider-dot"></span></div>
                </div>
            </div>
            <div class="dev-docs-inner">
                <div class="dev-docs-header">
                    <div class="dev-docs-kicker">{"BUILD WITH US"}</div>
                    <h2>{"Developer Docs"}</h2>
                    <p>
                        {"Everything you need to integrate Uplift agents into your \
                          infrastructure. Explore our guides, samples, and API references."}
                    </p>
                </div>
                <div class="dev-docs-grid">
                    { for DOC_CARDS.iter().map(|(title, description, icon)| html! {
                        <TechFrame key={*title}>
                            <a class="doc-card" href={config::docs_url()} target="_blank" rel="noreferrer">
                                <div class="doc-card-icon">{ icon.render("doc-icon") }</div>
                                <div class="doc-card-head">
                                    <h3>{ *title }</h3>
                                    <ArrowUpRightIcon class="doc-card-arrow" />
                                </div>
                                <p>{ *description }</p>
                            </a>
                        </TechFrame>
                    }) }
                </div>
            </div>
        </section>
    }
}

const DOCS_CSS: &str = r#"
    .dev-docs {
        width: 100%;
        padding: 0 2rem 6rem 2rem;
        display: flex;
        flex-direction: column;
        align-items: center;
    }
    .divider-dot {
        width: 6px;
        height: 6px;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.3);
        box-shadow: 0 0 8px rgba(255, 255, 255, 0.4);
    }
    .dev-docs-inner {
        width: 100%;
        max-width: 1200px;
        display: flex;
        flex-direction: column;
        align-items: center;
    }
    .dev-docs-header { text-align: center; margin-bottom: 4rem; max-width: 40rem; }
    .dev-docs-kicker {
        font-size: 0.75rem;
        font-weight: 700;
        letter-spacing: 0.2em;
        color: #888;
        text-transform: uppercase;
        margin-bottom: 1.5rem;
    }
    .dev-docs-header h2 {
        font-size: clamp(2.2rem, 5vw, 3.6rem);
        font-weight: 500;
        letter-spacing: -0.02em;
        margin: 0 0 1.5rem 0;
    }
    .dev-docs-header p {
        font-size: 1.05rem;
        color: #8a8a8a;
        line-height: 1.6;
        margin: 0;
    }
    .dev-docs-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1.5rem;
        width: 100%;
    }
    .doc-card {
        display: flex;
        flex-direction: column;
        padding: 2rem;
        height: 100%;
        transition: background 0.3s;
    }
    .doc-card:hover { background: rgba(255, 255, 255, 0.02); }
    .doc-card-icon {
        width: 48px;
        height: 48px;
        border-radius: 8px;
        background: rgba(255, 255, 255, 0.05);
        display: flex;
        align-items: center;
        justify-content: center;
        color: #c4c4c4;
        margin-bottom: 1.5rem;
        transition: color 0.3s, background 0.3s;
    }
    .doc-card:hover .doc-card-icon {
        color: #ff5500;
        background: rgba(255, 85, 0, 0.1);
    }
    .doc-icon { width: 24px; height: 24px; }
    .doc-card-head {
        display: flex;
        align-items: center;
        justify-content: space-between;
        margin-bottom: 0.75rem;
    }
    .doc-card-head h3 {
        font-size: 1.25rem;
        font-weight: 500;
        margin: 0;
        transition: color 0.3s;
    }
    .doc-card:hover h3 { color: #ff5500; }
    .doc-card-arrow {
        width: 16px;
        height: 16px;
        color: #777;
        opacity: 0;
        transform: translateY(6px);
        transition: all 0.3s;
    }
    .doc-card:hover .doc-card-arrow {
        color: #ff5500;
        opacity: 1;
        transform: translateY(0);
    }
    .doc-card p {
        font-family: monospace;
        font-size: 0.85rem;
        color: #777;
        line-height: 1.6;
        margin: 0;
    }
    @media (max-width: 900px) {
        .dev-docs-grid { grid-template-columns: 1fr; }
    }
"#;
