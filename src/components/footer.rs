//! Site footer: resources/company/legal link columns inside the corner-marker
//! frame, plus the socials row.

use yew::prelude::*;

use crate::components::icons::Logo;
use crate::components::tech_frame::TechFrame;
use crate::{config, scroll_section_into_view, Page};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let page_link = |page: Page, label: &'static str| {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(page);
        });
        html! {
            <a class="footer-link" href="#" {onclick}>{ label }</a>
        }
    };

    // Switches back to home, then scrolls the anchor into view once the home
    // sections have mounted.
    let section_link = |id: &'static str, label: &'static str| {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Page::Home);
            scroll_section_into_view(id);
        });
        html! {
            <a class="footer-link" href={format!("#{id}")} {onclick}>{ label }</a>
        }
    };

    html! {
        <footer class="footer">
            <style>
                {r#"
                    .footer {
                        width: 100%;
                        padding: 0 2rem 3rem 2rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                    }
                    .footer-divider {
                        width: 100%;
                        max-width: 1600px;
                        height: 2px;
                        margin: 3rem 0;
                        background: linear-gradient(to right, transparent, rgba(255, 255, 255, 0.2), transparent);
                        opacity: 0.3;
                    }
                    .footer-frame {
                        width: 100%;
                        max-width: 1600px;
                    }
                    .footer-body {
                        min-height: 400px;
                        display: flex;
                        flex-direction: column;
                        padding: 3rem;
                    }
                    .footer-tag {
                        display: flex;
                        align-items: center;
                        margin-bottom: 3rem;
                        font-size: 0.85rem;
                        font-weight: 700;
                        letter-spacing: 0.2em;
                        color: #888;
                        text-transform: uppercase;
                    }
                    .footer-grid {
                        flex: 1;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                    }
                    .footer-brand {
                        display: flex;
                        align-items: flex-end;
                    }
                    .footer-logo {
                        width: 72px;
                        height: 72px;
                        color: #fff;
                        transition: color 0.3s;
                    }
                    .footer-brand:hover .footer-logo { color: #ff5500; }
                    .footer-columns {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2.5rem;
                    }
                    .footer-column h4 {
                        color: #fff;
                        font-size: 1.05rem;
                        font-weight: 500;
                        margin: 0 0 1.2rem 0;
                    }
                    .footer-link {
                        display: block;
                        color: #777;
                        margin-bottom: 0.9rem;
                        transition: color 0.3s;
                    }
                    .footer-link:hover { color: #fff; }
                    .footer-socials {
                        grid-column: 1 / -1;
                        display: flex;
                        flex-direction: column;
                        align-items: flex-end;
                        gap: 1rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                        padding-top: 2rem;
                        margin-top: 2rem;
                    }
                    .footer-social-row { display: flex; gap: 2rem; }
                    .footer-social-row a {
                        color: #999;
                        font-weight: 700;
                        transition: color 0.3s;
                    }
                    .footer-social-row a:hover { color: #fff; }
                    .footer-copyright {
                        color: #555;
                        font-family: monospace;
                        font-size: 0.9rem;
                    }
                    @media (max-width: 900px) {
                        .footer-grid { grid-template-columns: 1fr; }
                        .footer-columns { grid-template-columns: 1fr 1fr; }
                    }
                "#}
            </style>
            <div class="footer-divider"></div>
            <TechFrame class={classes!("footer-frame")}>
                <div class="footer-body">
                    <div class="footer-tag">
                        <span class="glow-dot"></span>
                        {"FOOTER"}
                    </div>
                    <div class="footer-grid">
                        <div class="footer-brand">
                            <Logo class="footer-logo" />
                        </div>
                        <div class="footer-columns">
                            <div class="footer-column">
                                <h4>{"Resources"}</h4>
                                <a class="footer-link" href={config::docs_url()} target="_blank" rel="noreferrer">{"Docs"}</a>
                                { page_link(Page::Contact, "Contact Sales") }
                            </div>
                            <div class="footer-column">
                                <h4>{"Company"}</h4>
                                <a class="footer-link" href={config::careers_url()} target="_blank" rel="noreferrer">{"Careers"}</a>
                                { section_link("security", "Enterprise") }
                            </div>
                            <div class="footer-column">
                                <h4>{"Legal"}</h4>
                                { page_link(Page::Privacy, "Privacy Policy") }
                                { page_link(Page::Terms, "Terms of Service") }
                            </div>
                            <div class="footer-socials">
                                <div class="footer-social-row">
                                    <a href={config::twitter_url()} target="_blank" rel="noreferrer">{"X (Twitter)"}</a>
                                    <a href={config::linkedin_url()} target="_blank" rel="noreferrer">{"LinkedIn"}</a>
                                    <a href={config::github_url()} target="_blank" rel="noreferrer">{"GitHub"}</a>
                                </div>
                                <p class="footer-copyright">{"@Factory 2025. All rights reserved."}</p>
                            </div>
                        </div>
                    </div>
                </div>
            </TechFrame>
        </footer>
    }
}
