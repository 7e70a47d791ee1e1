//! Light call-to-action panel at the bottom of the home page.

use yew::prelude::*;

use crate::components::icons::{ChevronRightIcon, LayersIcon};
use crate::config;

#[function_component(BuildWithUs)]
pub fn build_with_us() -> Html {
    html! {
        <section class="build-cta">
            <style>
                {r#"
                    .build-cta {
                        width: 100%;
                        padding: 0 2rem 6rem 2rem;
                        display: flex;
                        justify-content: center;
                    }
                    .build-cta-panel {
                        width: 100%;
                        max-width: 1200px;
                        background: #f2f2f2;
                        color: #000;
                        border-radius: 24px;
                        padding: 3rem;
                        position: relative;
                        overflow: hidden;
                    }
                    .build-cta-top {
                        display: flex;
                        justify-content: space-between;
                        align-items: flex-start;
                        margin-bottom: 10rem;
                    }
                    .build-cta-tag {
                        display: flex;
                        align-items: center;
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.2em;
                        color: #666;
                        text-transform: uppercase;
                    }
                    .build-cta-tag .glow-dot { box-shadow: none; }
                    .build-cta-glyph { width: 48px; height: 48px; color: #000; margin-bottom: 1.5rem; }
                    .build-cta-panel h2 {
                        font-size: clamp(2.2rem, 5vw, 3.6rem);
                        font-weight: 500;
                        letter-spacing: -0.02em;
                        line-height: 1.1;
                        max-width: 24ch;
                        margin: 0 0 2rem 0;
                    }
                    .build-cta-button {
                        display: inline-flex;
                        align-items: center;
                        background: #1a1a1a;
                        color: #fff;
                        padding: 0.8rem 1.5rem;
                        border-radius: 2px;
                        font-size: 0.7rem;
                        font-weight: 700;
                        letter-spacing: 0.15em;
                        text-transform: uppercase;
                        transition: background 0.3s;
                    }
                    .build-cta-button:hover { background: #ff5500; }
                    .build-cta-chevron { width: 12px; height: 12px; margin-left: 0.5rem; }
                "#}
            </style>
            <div class="build-cta-panel">
                <div class="build-cta-top">
                    <div class="build-cta-tag">
                        <span class="glow-dot"></span>
                        {"BUILD WITH US"}
                    </div>
                    <div class="build-cta-tag">{"START BUILDING"}</div>
                </div>
                <LayersIcon class="build-cta-glyph" />
                <h2>{"Ready to build the software of the future?"}</h2>
                <a class="build-cta-button" href={config::docs_url()} target="_blank" rel="noreferrer">
                    {"Start Building"}
                    <ChevronRightIcon class="build-cta-chevron" />
                </a>
            </div>
        </section>
    }
}
