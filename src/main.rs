use gloo_timers::callback::Timeout;
use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

mod config;
mod content;
mod motion;
mod stepper;
mod components {
    pub mod download_widget;
    pub mod footer;
    pub mod hero_animation;
    pub mod icons;
    pub mod tech_frame;
    pub mod trusted_by;
}
mod sections {
    pub mod build_with_us;
    pub mod contact;
    pub mod developer_docs;
    pub mod hero;
    pub mod privacy;
    pub mod product;
    pub mod product_page;
    pub mod security;
    pub mod terms;
}

use components::footer::Footer;
use sections::build_with_us::BuildWithUs;
use sections::contact::ContactPage;
use sections::developer_docs::DeveloperDocs;
use sections::hero::Hero;
use sections::privacy::PrivacyPage;
use sections::product::ProductSection;
use sections::product_page::ProductPage;
use sections::security::SecuritySection;
use sections::terms::TermsPage;

/// Closed set of top-level views. Transitions are in-page only; there is no
/// URL route per page and no deep-linking.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Page {
    Home,
    Contact,
    Terms,
    Privacy,
    Product,
}

/// Smooth-scrolls a home-page section anchor into view after a short defer,
/// giving a just-mounted home view time to render the target element.
pub fn scroll_section_into_view(id: &'static str) {
    Timeout::new(100, move || {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(element) = document.get_element_by_id(id) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    })
    .forget();
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub current: Page,
    pub on_navigate: Callback<Page>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let callback = Closure::<dyn Fn()>::new({
                    let is_scrolled = is_scrolled.clone();
                    move || {
                        if let Some(win) = web_sys::window() {
                            let scroll_y = win.scroll_y().unwrap_or(0.0);
                            is_scrolled.set(scroll_y > 40.0);
                        }
                    }
                });
                window
                    .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    .unwrap();
                move || {
                    if let Some(win) = web_sys::window() {
                        win.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    }
                }
            },
            (),
        );
    }

    let go_home = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Page::Home);
        })
    };
    let go_contact = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Page::Contact);
        })
    };
    let section_link = |id: &'static str, label: &'static str| {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Page::Home);
            scroll_section_into_view(id);
        });
        html! {
            <a class="nav-link" href={format!("#{id}")} {onclick}>{ label }</a>
        }
    };
    let download = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Page::Home);
            if let Some(win) = web_sys::window() {
                win.scroll_to_with_x_and_y(0.0, 0.0);
            }
        })
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <style>{ NAV_CSS }</style>
            <div class="nav-content">
                <a class="nav-logo" href="#" onclick={go_home}>{"UPLIFT"}</a>
                <div class="nav-right">
                    { section_link("product", "Product") }
                    { section_link("security", "Security") }
                    <a class="nav-link" href={config::docs_url()} target="_blank" rel="noreferrer">{"Docs"}</a>
                    <a class={classes!("nav-link", (props.current == Page::Contact).then_some("active"))}
                        href="#" onclick={go_contact}>{"Contact"}</a>
                    <a class="nav-cta" href="#" onclick={download}>{"Download"}</a>
                </div>
            </div>
        </nav>
    }
}

#[function_component(App)]
fn app() -> Html {
    let page = use_state(|| Page::Home);

    // A freshly opened panel never starts mid-scroll.
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            *page,
        );
    }

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |target: Page| page.set(target))
    };

    let content = match *page {
        Page::Home => {
            info!("Rendering home page");
            html! {
                <>
                    <Hero />
                    <ProductSection on_navigate={on_navigate.clone()} />
                    <SecuritySection />
                    <DeveloperDocs />
                    <BuildWithUs />
                </>
            }
        }
        Page::Contact => {
            info!("Rendering contact page");
            html! { <ContactPage /> }
        }
        Page::Terms => {
            info!("Rendering terms page");
            html! { <TermsPage on_navigate={on_navigate.clone()} /> }
        }
        Page::Privacy => {
            info!("Rendering privacy page");
            html! { <PrivacyPage on_navigate={on_navigate.clone()} /> }
        }
        Page::Product => {
            info!("Rendering product page");
            html! { <ProductPage /> }
        }
    };

    html! {
        <div class="site-root">
            <style>{ GLOBAL_CSS }</style>
            <Nav current={*page} on_navigate={on_navigate.clone()} />
            { content }
            <Footer on_navigate={on_navigate} />
        </div>
    }
}

const NAV_CSS: &str = r#"
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 100;
        transition: background 0.3s, border-color 0.3s;
        border-bottom: 1px solid transparent;
    }
    .top-nav.scrolled {
        background: rgba(12, 12, 12, 0.85);
        backdrop-filter: blur(12px);
        border-bottom-color: rgba(255, 255, 255, 0.06);
    }
    .nav-content {
        max-width: 1600px;
        margin: 0 auto;
        padding: 1.2rem 2rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        font-weight: 700;
        font-size: 1rem;
        letter-spacing: 0.25em;
    }
    .nav-right { display: flex; align-items: center; gap: 2rem; }
    .nav-link {
        font-size: 0.75rem;
        font-weight: 700;
        letter-spacing: 0.15em;
        text-transform: uppercase;
        color: #999;
        transition: color 0.3s;
    }
    .nav-link:hover, .nav-link.active { color: #fff; }
    .nav-cta {
        font-size: 0.7rem;
        font-weight: 700;
        letter-spacing: 0.15em;
        text-transform: uppercase;
        background: #fff;
        color: #000;
        padding: 0.6rem 1.2rem;
        border-radius: 2px;
        transition: background 0.3s;
    }
    .nav-cta:hover { background: #ff5500; color: #fff; }
    @media (max-width: 768px) {
        .nav-right { gap: 1rem; }
        .nav-link { display: none; }
    }
"#;

const GLOBAL_CSS: &str = r#"
    .site-root { width: 100%; background: #0c0c0c; }
    .glow-dot {
        width: 8px;
        height: 8px;
        border-radius: 50%;
        background: #ff5500;
        box-shadow: 0 0 8px rgba(255, 85, 0, 0.8);
        margin-right: 0.75rem;
        display: inline-block;
    }
    .section-tag {
        display: flex;
        align-items: center;
        font-size: 0.75rem;
        font-weight: 700;
        letter-spacing: 0.2em;
        text-transform: uppercase;
        margin-bottom: 1rem;
    }
    .section-divider {
        width: 100%;
        max-width: 1600px;
        padding: 6rem 0;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .divider-line {
        width: 100%;
        height: 2px;
        background: linear-gradient(to right, transparent, rgba(255, 255, 255, 0.15), transparent);
        position: relative;
    }
    .divider-notch {
        position: absolute;
        left: 50%;
        top: 50%;
        transform: translate(-50%, -50%);
        width: 48px;
        height: 4px;
        background: #0c0c0c;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .divider-notch .glow-dot { margin-right: 0; }
    .tech-frame {
        position: relative;
        padding: 8px;
        border: 1px dashed rgba(255, 255, 255, 0.1);
        border-radius: 16px;
        background: rgba(255, 255, 255, 0.01);
        display: flex;
        flex-direction: column;
    }
    .tech-corner {
        position: absolute;
        width: 16px;
        height: 16px;
        border-color: rgba(255, 255, 255, 0.3);
        border-style: solid;
        border-width: 0;
    }
    .tech-corner-tl { top: -1px; left: -1px; border-top-width: 1px; border-left-width: 1px; border-top-left-radius: 8px; }
    .tech-corner-tr { top: -1px; right: -1px; border-top-width: 1px; border-right-width: 1px; border-top-right-radius: 8px; }
    .tech-corner-bl { bottom: -1px; left: -1px; border-bottom-width: 1px; border-left-width: 1px; border-bottom-left-radius: 8px; }
    .tech-corner-br { bottom: -1px; right: -1px; border-bottom-width: 1px; border-right-width: 1px; border-bottom-right-radius: 8px; }
    .tech-frame-inner {
        flex: 1;
        background: #0c0c0c;
        border: 1px solid rgba(255, 255, 255, 0.05);
        border-radius: 10px;
        overflow: hidden;
        display: flex;
        flex-direction: column;
        transition: border-color 0.5s;
    }
    .tech-frame:hover .tech-frame-inner { border-color: rgba(255, 255, 255, 0.1); }
    @keyframes fade-in {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes slide-up {
        from { transform: translateY(16px); opacity: 0; }
        to { transform: translateY(0); opacity: 1; }
    }
"#;

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
