//! Landing hero: fetched content into state, with a loading placeholder until
//! the record resolves.

use yew::prelude::*;

use crate::components::download_widget::DownloadWidget;
use crate::components::hero_animation::HeroAnimation;
use crate::components::trusted_by::TrustedBy;
use crate::content::{fetch_hero_content, HeroContent};

#[function_component(Hero)]
pub fn hero() -> Html {
    let content = use_state(|| None::<HeroContent>);

    {
        let content = content.clone();
        use_effect_with_deps(
            move |_| {
                wasm_bindgen_futures::spawn_local(async move {
                    content.set(Some(fetch_hero_content().await));
                });
                || ()
            },
            (),
        );
    }

    let Some(data) = (*content).clone() else {
        return html! {
            <div class="hero hero-loading">{"Loading..."}</div>
        };
    };

    html! {
        <div class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        width: 100%;
                        display: flex;
                        flex-direction: column;
                        overflow: hidden;
                    }
                    .hero-loading {
                        align-items: center;
                        justify-content: center;
                        color: #888;
                        font-family: monospace;
                    }
                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        opacity: 0.6;
                        mix-blend-mode: screen;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        max-width: 1600px;
                        margin: 0 auto;
                        padding: 9rem 2rem 3rem 2rem;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        flex: 1;
                        width: 100%;
                    }
                    .hero-vision-tag {
                        display: flex;
                        align-items: center;
                        margin-bottom: 2rem;
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        animation: fade-in 0.8s ease-out;
                    }
                    .hero-headline {
                        font-size: clamp(3rem, 8vw, 6rem);
                        font-weight: 500;
                        letter-spacing: -0.02em;
                        line-height: 1.05;
                        margin: 0 0 2rem 0;
                        max-width: 18ch;
                        animation: slide-up 0.8s ease-out;
                    }
                    .hero-subhead {
                        font-family: monospace;
                        font-size: 1.15rem;
                        color: #999;
                        max-width: 42rem;
                        margin: 0 0 1rem 0;
                        animation: slide-up 0.8s ease-out 0.2s backwards;
                    }
                    .hero-description {
                        font-size: 1.05rem;
                        color: #8a8a8a;
                        line-height: 1.6;
                        max-width: 36rem;
                        margin: 0;
                        animation: slide-up 0.8s ease-out 0.3s backwards;
                    }
                "#}
            </style>
            <div class="hero-backdrop">
                <HeroAnimation />
            </div>
            <div class="hero-content">
                <div class="hero-vision-tag">
                    <span class="glow-dot"></span>
                    { &data.vision_tag }
                </div>
                <h1 class="hero-headline">{ &data.headline }</h1>
                <p class="hero-subhead">{ &data.subhead }</p>
                <p class="hero-description">{ &data.description }</p>
                <DownloadWidget downloads={data.downloads.clone()} />
                <TrustedBy />
            </div>
        </div>
    }
}
