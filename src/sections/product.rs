//! Product stepper stage: a tall scroll section with a sticky viewport. The
//! scroll listener feeds [`ScrollStepper`] to pick the focused feature, a 2 s
//! interval cycles the vignette stage, and the progress nav offers
//! jump-to-feature via smooth scroll.

use gloo_timers::callback::Interval;
use log::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::components::icons::{ChevronRightIcon, GlobeIcon, Icon};
use crate::motion::{AnimationPhase, PHASE_TICK_MS};
use crate::stepper::{ScrollStepper, StepperConfig};
use crate::Page;

pub struct Feature {
    pub id: &'static str,
    pub nav_title: &'static str,
    pub card_title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

/// Order determines the stepper index mapping.
pub const FEATURES: &[Feature] = &[
    Feature {
        id: "isolated",
        nav_title: "ISOLATED ENV",
        card_title: "1. Isolated Environment",
        description: "A secure and high-speed sandbox where every agent runs \
            independently. Your data stays local, execution is fast, and each \
            agent operates inside a protected space built for safety and \
            performance.",
        icon: Icon::Kanban,
    },
    Feature {
        id: "store",
        nav_title: "AGENT STORE",
        card_title: "2. Agent Store",
        description: "A curated store where you can access, install, and deploy \
            agents with one click. Developers get a space for monetizing their \
            agents, and users get effortless setup and clear permissions.",
        icon: Icon::Globe,
    },
    Feature {
        id: "runtime",
        nav_title: "SESSION RUNTIME",
        card_title: "3. Session-Based Runtime",
        description: "Agents receive a temporary, secure workspace for each task \
            they perform. This plug-and-play mechanism ensures fast execution, \
            strict isolation, and no long-term access to your system once the \
            session ends.",
        icon: Icon::Terminal,
    },
    Feature {
        id: "tokens",
        nav_title: "SESSION TOKENS",
        card_title: "4. Session-Based Tokens",
        description: "Short-lived, context-aware tokens define exactly what an \
            agent can see or do. They unlock the Agentic Vault, ensuring that \
            permissions are precise, revocable, and always under your control.",
        icon: Icon::Message,
    },
    Feature {
        id: "permissions",
        nav_title: "PERMISSIONS",
        card_title: "5. Permission Actions",
        description: "Every outward action, whether file access, device control \
            or network calls, is governed by explicit permissions. No silent \
            behavior, no surprises. You define what agents can do, and Uplift \
            enforces those boundaries automatically.",
        icon: Icon::Check,
    },
];

#[derive(Properties, PartialEq)]
pub struct ProductProps {
    pub on_navigate: Callback<Page>,
}

fn viewport_height(window: &web_sys::Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[function_component(ProductSection)]
pub fn product_section(props: &ProductProps) -> Html {
    let section_ref = use_node_ref();
    let active_index = use_state(|| 0usize);
    let phase = use_state(AnimationPhase::default);

    let stepper = ScrollStepper::new(FEATURES.len(), StepperConfig::default());

    // Surface a misconfigured (empty) feature table once, at mount.
    {
        let ok = stepper.is_ok();
        use_effect_with_deps(
            move |_| {
                if !ok {
                    error!("product section disabled: empty feature table");
                }
                || ()
            },
            (),
        );
    }

    // Scroll listener. Re-registered when the active index changes so the
    // comparison inside the callback always sees the stored value.
    {
        let active_index = active_index.clone();
        let phase = phase.clone();
        let section_ref = section_ref.clone();
        let deps = *active_index;
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = match (stepper, web_sys::window()) {
                    (Ok(stepper), Some(window)) => {
                        let current = *active_index;
                        let callback = Closure::<dyn Fn()>::new(move || {
                            let Some(win) = web_sys::window() else { return };
                            let Some(section) = section_ref.cast::<HtmlElement>() else {
                                return;
                            };
                            let scroll_y = win.scroll_y().unwrap_or(0.0);
                            let top = section.offset_top() as f64;
                            if let Some(index) =
                                stepper.index_at(scroll_y, top, viewport_height(&win))
                            {
                                if index != current {
                                    active_index.set(index);
                                    // Each newly focused feature restarts its
                                    // vignette from the initial stage.
                                    phase.set(AnimationPhase::default());
                                }
                            }
                        });
                        window
                            .add_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        Box::new(move || {
                            if let Some(win) = web_sys::window() {
                                win.remove_event_listener_with_callback(
                                    "scroll",
                                    callback.as_ref().unchecked_ref(),
                                )
                                .unwrap();
                            }
                        })
                    }
                    _ => Box::new(|| ()),
                };
                move || destructor()
            },
            deps,
        );
    }

    // Vignette stage tick. The interval is re-armed whenever the phase or the
    // active index changes and dropped on teardown.
    {
        let setter = phase.setter();
        let next = (*phase).advance();
        let enabled = stepper.is_ok();
        use_effect_with_deps(
            move |_| {
                let interval = enabled.then(|| {
                    Interval::new(PHASE_TICK_MS, move || {
                        setter.set(next);
                    })
                });
                move || drop(interval)
            },
            (*active_index, *phase),
        );
    }

    let Ok(stepper) = stepper else {
        return html! {};
    };

    // Fire-and-forget: requests the smooth scroll and lets the resulting
    // scroll events drive the index update.
    let scroll_to_feature = {
        let section_ref = section_ref.clone();
        Callback::from(move |index: usize| {
            let Some(win) = web_sys::window() else { return };
            let Some(section) = section_ref.cast::<HtmlElement>() else {
                return;
            };
            let target =
                stepper.target_offset(index, section.offset_top() as f64, viewport_height(&win));
            let options = ScrollToOptions::new();
            options.set_top(target);
            options.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&options);
        })
    };

    let index = *active_index;
    let stage = (*phase).get();
    let feature = &FEATURES[index];
    let fill = format!("height: {}%;", stepper.progress_percent(index));

    let explore = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Product))
    };

    html! {
        <div id="product" class="product-stage" ref={section_ref}>
            <style>{ PRODUCT_CSS }</style>
            <div class="product-sticky">
                <div class="product-layout">
                    <div class="product-left">
                        <div class="product-heading">
                            <div class="section-tag">
                                <span class="glow-dot"></span>
                                {"PRODUCT"}
                            </div>
                            <h2>{"Self-Contained AI Environment"}</h2>
                            <p class="product-lede">
                                {"A new compute layer with containerized agents, \
                                  user controlled data and a marketplace for agents"}
                            </p>
                        </div>
                        <div class="step-nav">
                            <div class="step-track"></div>
                            <div class="step-track-fill" style={fill}></div>
                            { for FEATURES.iter().enumerate().map(|(i, f)| {
                                let is_active = i == index;
                                let is_past = i <= index;
                                let onclick = {
                                    let jump = scroll_to_feature.clone();
                                    Callback::from(move |_: MouseEvent| jump.emit(i))
                                };
                                html! {
                                    <button key={f.id} class={classes!("step-item", is_active.then_some("active"))} {onclick}>
                                        <span class={classes!(
                                            "step-node",
                                            is_active.then_some("active"),
                                            (is_past && !is_active).then_some("past"),
                                        )}></span>
                                        <span class="step-num">{ format!("0{}", i + 1) }</span>
                                        <span class="step-label">{ f.nav_title }</span>
                                    </button>
                                }
                            }) }
                        </div>
                    </div>
                    <div class="product-right">
                        <div class="product-card" key={index.to_string()}>
                            <div class="product-card-icon">{ feature.icon.render("feature-icon") }</div>
                            <h3>{ feature.card_title }</h3>
                            <p>{ feature.description }</p>
                            <button class="explore-button" onclick={explore}>
                                {"Explore"}
                                <ChevronRightIcon class="explore-chevron" />
                            </button>
                        </div>
                        <div class="product-visual">
                            <div class="visual-statusbar">
                                <div class="statusbar-dots">
                                    <span></span>
                                    <span></span>
                                </div>
                                <div class="statusbar-id">{ format!("{}.mod", feature.id) }</div>
                            </div>
                            <div class="visual-body">
                                <div class="visual-grid"></div>
                                { vignette(index, stage) }
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// One canned visual per feature, staged by the cyclic phase.
fn vignette(index: usize, stage: u8) -> Html {
    match index {
        0 => vignette_secure_box(stage),
        1 => vignette_store(stage),
        2 => vignette_terminal(stage),
        3 => vignette_tokens(stage),
        _ => vignette_permissions(stage),
    }
}

fn vignette_secure_box(stage: u8) -> Html {
    html! {
        <div class="vg vg-secure">
            <div class="vg-host">
                <span class="vg-host-label">{"HOST_SYSTEM"}</span>
                <div class={classes!("vg-box", (stage >= 1).then_some("armed"))}>
                    <span class="vg-box-label">{"SECURE_BOX"}</span>
                    if stage == 3 {
                        <div class="vg-box-bars">
                            { for (0..9).map(|i| html! {
                                <span class="vg-bar" style={format!("animation-delay: {}ms;", i * 100)}></span>
                            }) }
                        </div>
                    }
                </div>
            </div>
        </div>
    }
}

fn vignette_store(stage: u8) -> Html {
    html! {
        <div class="vg vg-store">
            { for (0..4).map(|i| {
                let selected = i == 1;
                html! {
                    <div class={classes!("vg-tile", (stage >= 1 && selected).then_some("selected"))}>
                        <div class="vg-tile-icon"></div>
                        <div class="vg-tile-line"></div>
                        if stage >= 2 && selected {
                            <div class="vg-tile-progress">
                                <div class={classes!("vg-tile-progress-fill", (stage == 3).then_some("done"))}></div>
                            </div>
                        }
                    </div>
                }
            }) }
        </div>
    }
}

fn vignette_terminal(stage: u8) -> Html {
    html! {
        <div class="vg vg-term">
            <div class="vg-term-bar">
                <span class="vg-term-dot red"></span>
                <span class="vg-term-dot yellow"></span>
                <span class="vg-term-dot green"></span>
                <span class="vg-term-title">{"TERM_SESSION_ID_492"}</span>
            </div>
            <div class="vg-term-body">
                if stage >= 1 {
                    <div class="vg-line ok">{"> Initializing environment..."}</div>
                }
                if stage >= 2 {
                    <div class="vg-line dim">{"> Allocating resources..."}</div>
                    <div class="vg-line">{"> Executing task.v2"}</div>
                }
                if stage == 3 {
                    <div class="vg-line info">{"> Task Complete."}</div>
                    <div class="vg-line warn">{"> TERMINATING SESSION..."}</div>
                    <div class="vg-line faint">{"> Cleanup done."}</div>
                }
            </div>
        </div>
    }
}

fn vignette_tokens(stage: u8) -> Html {
    let packet_class = match stage {
        1 => "vg-packet at-start",
        2 => "vg-packet at-end",
        _ => "vg-packet hidden",
    };
    html! {
        <div class="vg vg-tokens">
            <div class={classes!("vg-token-source", (stage >= 1).then_some("armed"))}>{"TOKEN"}</div>
            <div class="vg-wire">
                <span class={packet_class}></span>
            </div>
            <div class={classes!("vg-vault", (stage >= 2).then_some("open"))}>
                <span class={classes!("vg-vault-light", (stage >= 2).then_some("granted"))}></span>
            </div>
        </div>
    }
}

fn vignette_permissions(stage: u8) -> Html {
    html! {
        <div class="vg vg-perms">
            <div class="vg-perm-request">
                <div class="vg-perm-icon"><GlobeIcon class="feature-icon" /></div>
                <div>
                    <div class="vg-perm-title">{"External Network Request"}</div>
                    <div class="vg-perm-addr">{"192.168.1.1:8080"}</div>
                </div>
            </div>
            <div class="vg-perm-row">
                <span class="vg-perm-label">{"Permission"}</span>
                <div class={classes!("vg-toggle", (stage >= 2).then_some("on"))}>
                    <span class="vg-toggle-knob"></span>
                </div>
            </div>
        </div>
    }
}

const PRODUCT_CSS: &str = r#"
    .product-stage {
        position: relative;
        width: 100%;
        min-height: 500vh;
        background: #0c0c0c;
    }
    .product-sticky {
        position: sticky;
        top: 0;
        height: 100vh;
        width: 100%;
        display: flex;
        align-items: center;
        overflow: hidden;
    }
    .product-layout {
        max-width: 1600px;
        margin: 0 auto;
        padding: 3rem 2rem;
        width: 100%;
        height: 100%;
        display: grid;
        grid-template-columns: 5fr 7fr;
        gap: 2rem;
    }
    .product-left {
        display: flex;
        flex-direction: column;
        height: 100%;
    }
    .product-heading { margin-top: 3rem; }
    .product-heading h2 {
        font-size: clamp(2.2rem, 4vw, 3.6rem);
        font-weight: 500;
        letter-spacing: -0.02em;
        line-height: 1.15;
        margin: 0 0 1.5rem 0;
    }
    .product-lede {
        font-family: monospace;
        font-size: 1.1rem;
        color: #999;
        line-height: 1.6;
        max-width: 28rem;
        margin: 0;
    }
    .step-nav {
        margin-top: auto;
        margin-bottom: 5rem;
        position: relative;
        padding-left: 1rem;
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .step-track,
    .step-track-fill {
        position: absolute;
        left: 7px;
        top: 8px;
        width: 2px;
        border-radius: 2px;
    }
    .step-track { bottom: 8px; background: rgba(255, 255, 255, 0.1); }
    .step-track-fill {
        background: #ff5500;
        transition: height 0.5s ease-out;
        max-height: calc(100% - 16px);
    }
    .step-item {
        display: flex;
        align-items: center;
        background: none;
        border: none;
        padding: 0;
        text-align: left;
        position: relative;
        z-index: 1;
        transition: transform 0.3s;
    }
    .step-item.active { transform: translateX(8px); }
    .step-node {
        width: 8px;
        height: 8px;
        border-radius: 50%;
        background: #3a3a3a;
        margin-right: 1rem;
        transition: all 0.3s;
    }
    .step-item:hover .step-node { background: #666; }
    .step-node.past { background: #ff5500; }
    .step-node.active {
        background: #ff5500;
        box-shadow: 0 0 10px rgba(255, 85, 0, 0.8);
        transform: scale(1.25);
    }
    .step-num {
        font-family: monospace;
        font-size: 0.65rem;
        color: #555;
        margin-right: 0.6rem;
        transition: color 0.3s;
    }
    .step-item.active .step-num { color: #ff5500; }
    .step-label {
        font-size: 0.75rem;
        font-weight: 700;
        letter-spacing: 0.15em;
        text-transform: uppercase;
        color: #777;
        transition: color 0.3s;
    }
    .step-item:hover .step-label { color: #bbb; }
    .step-item.active .step-label { color: #fff; }
    .product-right {
        display: grid;
        grid-template-columns: 5fr 7fr;
        gap: 1.5rem;
        padding: 6rem 0 1.5rem 0;
        height: 100%;
    }
    .product-card {
        align-self: end;
        background: #080808;
        border: 1px solid rgba(255, 255, 255, 0.05);
        border-radius: 12px;
        padding: 2rem;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
        animation: slide-up 0.5s ease-out;
    }
    .product-card-icon { color: rgba(255, 85, 0, 0.7); margin-bottom: 1.5rem; }
    .feature-icon { width: 20px; height: 20px; }
    .product-card h3 {
        font-size: 1.8rem;
        font-weight: 500;
        letter-spacing: -0.01em;
        margin: 0 0 1rem 0;
    }
    .product-card p {
        font-size: 1.05rem;
        color: #c4c4c4;
        line-height: 1.6;
        margin: 0 0 2rem 0;
    }
    .explore-button {
        display: inline-flex;
        align-items: center;
        background: #fff;
        color: #000;
        border: none;
        padding: 0.8rem 1.5rem;
        border-radius: 2px;
        font-size: 0.7rem;
        font-weight: 700;
        letter-spacing: 0.15em;
        text-transform: uppercase;
        transition: background 0.3s;
    }
    .explore-button:hover { background: #d8d8d8; }
    .explore-chevron { width: 14px; height: 14px; margin-left: 0.5rem; }
    .product-visual {
        background: #080808;
        border: 1px solid rgba(255, 255, 255, 0.05);
        border-radius: 12px;
        overflow: hidden;
        display: flex;
        flex-direction: column;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
    }
    .visual-statusbar {
        height: 48px;
        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 0 1.5rem;
    }
    .statusbar-dots { display: flex; gap: 0.5rem; }
    .statusbar-dots span {
        width: 12px;
        height: 12px;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.1);
    }
    .statusbar-id {
        font-family: monospace;
        font-size: 0.75rem;
        color: rgba(255, 85, 0, 0.7);
        letter-spacing: 0.15em;
        text-transform: uppercase;
        border-left: 1px solid rgba(255, 255, 255, 0.1);
        padding-left: 1rem;
    }
    .visual-body {
        flex: 1;
        position: relative;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 2rem;
    }
    .visual-grid {
        position: absolute;
        inset: 0;
        background-image: radial-gradient(#fff 1px, transparent 1px);
        background-size: 24px 24px;
        opacity: 0.1;
    }
    .vg { position: relative; z-index: 1; }

    .vg-secure { width: 100%; max-width: 320px; height: 256px; }
    .vg-host {
        position: absolute;
        inset: 0;
        border: 1px solid rgba(255, 255, 255, 0.05);
        border-radius: 12px;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .vg-host-label {
        position: absolute;
        top: 1rem;
        left: 1rem;
        font-family: monospace;
        font-size: 0.7rem;
        color: #555;
    }
    .vg-box {
        position: relative;
        width: 192px;
        height: 192px;
        border: 2px solid #2a2a2a;
        border-radius: 12px;
        background: #000;
        opacity: 0;
        transform: scale(0.9);
        transition: all 0.7s;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
    }
    .vg-box.armed {
        border-color: #ff5500;
        box-shadow: 0 0 30px rgba(255, 85, 0, 0.15);
        opacity: 1;
        transform: scale(1);
    }
    .vg-box-label {
        position: absolute;
        top: 0.5rem;
        right: 0.5rem;
        font-family: monospace;
        font-size: 0.6rem;
        color: #ff5500;
    }
    .vg-box-bars {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 0.5rem;
        width: 100%;
        padding: 0 1rem;
        opacity: 0.5;
    }
    .vg-bar {
        height: 4px;
        background: #ff5500;
        border-radius: 2px;
        animation: pulse-bar 1.2s ease-in-out infinite;
    }
    @keyframes pulse-bar {
        0%, 100% { opacity: 0.4; }
        50% { opacity: 1; }
    }

    .vg-store {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1rem;
        width: 100%;
        max-width: 340px;
    }
    .vg-tile {
        height: 96px;
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 12px;
        background: rgba(255, 255, 255, 0.05);
        opacity: 0.5;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        position: relative;
        transition: all 0.5s;
    }
    .vg-tile.selected {
        border-color: #ff5500;
        background: rgba(255, 85, 0, 0.1);
        opacity: 1;
        transform: scale(1.05);
    }
    .vg-tile-icon {
        width: 32px;
        height: 32px;
        border-radius: 4px;
        background: rgba(255, 255, 255, 0.1);
        margin-bottom: 0.5rem;
    }
    .vg-tile-line {
        width: 48px;
        height: 6px;
        border-radius: 3px;
        background: rgba(255, 255, 255, 0.1);
    }
    .vg-tile-progress {
        position: absolute;
        bottom: 0.5rem;
        left: 0.75rem;
        right: 0.75rem;
        height: 4px;
        border-radius: 2px;
        background: #3a3a3a;
        overflow: hidden;
    }
    .vg-tile-progress-fill {
        height: 100%;
        width: 66%;
        background: #ff5500;
        transition: width 1s;
    }
    .vg-tile-progress-fill.done { width: 100%; }

    .vg-term {
        width: 100%;
        max-width: 320px;
        height: 224px;
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 12px;
        background: #050505;
        overflow: hidden;
        display: flex;
        flex-direction: column;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
    }
    .vg-term-bar {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.5rem 1rem;
        background: rgba(255, 255, 255, 0.05);
        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
    }
    .vg-term-dot { width: 8px; height: 8px; border-radius: 50%; }
    .vg-term-dot.red { background: rgba(239, 68, 68, 0.5); }
    .vg-term-dot.yellow { background: rgba(234, 179, 8, 0.5); }
    .vg-term-dot.green { background: rgba(34, 197, 94, 0.5); }
    .vg-term-title {
        margin-left: auto;
        font-family: monospace;
        font-size: 0.6rem;
        color: #777;
    }
    .vg-term-body {
        padding: 1rem;
        font-family: monospace;
        font-size: 0.75rem;
        line-height: 1.7;
        color: #c4c4c4;
    }
    .vg-line.ok { color: rgba(74, 222, 128, 0.8); }
    .vg-line.dim { opacity: 0.6; }
    .vg-line.info { color: #60a5fa; margin-top: 0.5rem; }
    .vg-line.warn { color: #f87171; animation: pulse-bar 1.2s ease-in-out infinite; }
    .vg-line.faint { color: #555; }

    .vg-tokens {
        display: flex;
        align-items: center;
        gap: 1.5rem;
    }
    .vg-token-source {
        width: 64px;
        height: 64px;
        border: 2px solid rgba(255, 255, 255, 0.1);
        border-radius: 12px;
        background: #000;
        display: flex;
        align-items: center;
        justify-content: center;
        font-family: monospace;
        font-size: 0.6rem;
        font-weight: 700;
        transition: all 0.5s;
    }
    .vg-token-source.armed {
        border-color: #ff5500;
        box-shadow: 0 0 15px rgba(255, 85, 0, 0.3);
    }
    .vg-wire {
        position: relative;
        width: 96px;
        height: 2px;
        background: rgba(255, 255, 255, 0.1);
    }
    .vg-packet {
        position: absolute;
        top: 50%;
        transform: translateY(-50%);
        width: 16px;
        height: 16px;
        border-radius: 50%;
        background: #ff5500;
        box-shadow: 0 0 10px rgba(255, 85, 0, 0.8);
        transition: all 1s ease-in-out;
    }
    .vg-packet.hidden { opacity: 0; }
    .vg-packet.at-start { left: 0; opacity: 1; }
    .vg-packet.at-end { left: calc(100% - 16px); opacity: 1; }
    .vg-vault {
        width: 64px;
        height: 80px;
        border: 2px solid #3a3a3a;
        border-radius: 32px 32px 8px 8px;
        background: #000;
        display: flex;
        align-items: center;
        justify-content: center;
        transition: border-color 0.5s;
    }
    .vg-vault.open { border-color: #ff5500; }
    .vg-vault-light {
        width: 12px;
        height: 12px;
        border-radius: 50%;
        background: #ef4444;
        transition: all 0.3s;
    }
    .vg-vault-light.granted {
        background: #22c55e;
        box-shadow: 0 0 10px rgba(0, 255, 0, 0.5);
    }

    .vg-perms {
        width: 100%;
        max-width: 280px;
        background: #111;
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 12px;
        padding: 1.5rem;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
    }
    .vg-perm-request {
        display: flex;
        align-items: center;
        gap: 1rem;
        margin-bottom: 1.5rem;
    }
    .vg-perm-icon {
        width: 40px;
        height: 40px;
        border-radius: 50%;
        border: 1px solid rgba(255, 255, 255, 0.05);
        background: rgba(255, 255, 255, 0.05);
        display: flex;
        align-items: center;
        justify-content: center;
        color: #c4c4c4;
    }
    .vg-perm-title { font-size: 0.75rem; font-weight: 700; margin-bottom: 0.2rem; }
    .vg-perm-addr { font-family: monospace; font-size: 0.6rem; color: #777; }
    .vg-perm-row {
        display: flex;
        align-items: center;
        justify-content: space-between;
        background: rgba(0, 0, 0, 0.5);
        border: 1px solid rgba(255, 255, 255, 0.05);
        border-radius: 8px;
        padding: 0.75rem;
    }
    .vg-perm-label {
        font-family: monospace;
        font-size: 0.6rem;
        color: #999;
        letter-spacing: 0.1em;
        text-transform: uppercase;
    }
    .vg-toggle {
        width: 40px;
        height: 20px;
        border-radius: 10px;
        background: #3a3a3a;
        position: relative;
        transition: background 0.5s;
    }
    .vg-toggle.on { background: #22c55e; }
    .vg-toggle-knob {
        position: absolute;
        top: 2px;
        left: 2px;
        width: 16px;
        height: 16px;
        border-radius: 50%;
        background: #fff;
        transition: left 0.5s;
    }
    .vg-toggle.on .vg-toggle-knob { left: 22px; }

    @media (max-width: 1024px) {
        .product-layout { grid-template-columns: 1fr; }
        .product-right { display: none; }
    }
"#;
