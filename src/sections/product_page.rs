//! Long-form product page reached from the stepper's "Explore" button.
//! Walks the same feature table as the home-page stepper, one alternating
//! section per feature.

use yew::prelude::*;

use crate::components::icons::ChevronRightIcon;
use crate::config;
use crate::sections::product::FEATURES;

#[function_component(ProductPage)]
pub fn product_page() -> Html {
    html! {
        <div class="product-page">
            <style>{ PRODUCT_PAGE_CSS }</style>
            <section class="product-page-hero">
                <div class="section-tag">
                    <span class="glow-dot"></span>
                    {"PRODUCT"}
                </div>
                <h1>{"Self-Contained AI Environment"}</h1>
                <p>
                    {"A new compute layer with containerized agents, user controlled \
                      data and a marketplace for agents. Every capability below ships \
                      in the desktop client today."}
                </p>
            </section>

            { for FEATURES.iter().enumerate().map(|(i, feature)| {
                let alternate = i % 2 == 1;
                html! {
                    <section key={feature.id}
                        class={classes!("product-page-section", alternate.then_some("alternate"))}>
                        <div class="product-page-body">
                            <div class="product-page-icon">{ feature.icon.render("feature-icon") }</div>
                            <div class="product-page-text">
                                <h2>{ feature.card_title }</h2>
                                <p>{ feature.description }</p>
                            </div>
                        </div>
                    </section>
                }
            }) }

            <section class="product-page-cta">
                <h2>{"See it in your own environment"}</h2>
                <a class="product-page-button" href={config::docs_url()} target="_blank" rel="noreferrer">
                    {"Read the docs"}
                    <ChevronRightIcon class="product-page-chevron" />
                </a>
            </section>
        </div>
    }
}

const PRODUCT_PAGE_CSS: &str = r#"
    .product-page { width: 100%; padding-bottom: 6rem; }
    .product-page-hero {
        max-width: 56rem;
        margin: 0 auto;
        padding: 9rem 2rem 4rem 2rem;
        text-align: center;
        display: flex;
        flex-direction: column;
        align-items: center;
    }
    .product-page-hero h1 {
        font-size: clamp(2.6rem, 6vw, 4.4rem);
        font-weight: 500;
        letter-spacing: -0.02em;
        margin: 1.5rem 0;
    }
    .product-page-hero p {
        font-size: 1.1rem;
        color: #8a8a8a;
        line-height: 1.7;
        max-width: 40rem;
        margin: 0;
    }
    .product-page-section { padding: 2rem; }
    .product-page-section.alternate { background: rgba(255, 255, 255, 0.02); }
    .product-page-body {
        max-width: 56rem;
        margin: 0 auto;
        display: flex;
        align-items: flex-start;
        gap: 2rem;
        padding: 2rem 0;
    }
    .product-page-section.alternate .product-page-body { flex-direction: row-reverse; }
    .product-page-icon {
        flex-shrink: 0;
        width: 56px;
        height: 56px;
        border-radius: 12px;
        border: 1px solid rgba(255, 85, 0, 0.3);
        background: rgba(255, 85, 0, 0.08);
        color: #ff5500;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .product-page-text h2 {
        font-size: 1.6rem;
        font-weight: 500;
        letter-spacing: -0.01em;
        margin: 0 0 0.8rem 0;
    }
    .product-page-text p {
        font-size: 1.05rem;
        color: #999;
        line-height: 1.7;
        margin: 0;
        max-width: 44rem;
    }
    .product-page-cta {
        max-width: 56rem;
        margin: 0 auto;
        padding: 5rem 2rem 0 2rem;
        text-align: center;
    }
    .product-page-cta h2 {
        font-size: 2rem;
        font-weight: 500;
        letter-spacing: -0.01em;
        margin: 0 0 2rem 0;
    }
    .product-page-button {
        display: inline-flex;
        align-items: center;
        background: #fff;
        color: #000;
        padding: 0.9rem 1.8rem;
        border-radius: 2px;
        font-size: 0.7rem;
        font-weight: 700;
        letter-spacing: 0.15em;
        text-transform: uppercase;
        transition: background 0.3s;
    }
    .product-page-button:hover { background: #d8d8d8; }
    .product-page-chevron { width: 12px; height: 12px; margin-left: 0.5rem; }
"#;
