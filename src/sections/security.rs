//! Enterprise/security section. A free-running animation-frame loop advances
//! the ambient phase; the rings and orbiting satellites are pure transforms of
//! it. Teardown cancels the pending frame request so nothing keeps ticking
//! after unmount.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::icons::{ChevronRightIcon, LockIcon};
use crate::components::tech_frame::TechFrame;
use crate::config;
use crate::motion::{
    orbit_position, ring_angles, AMBIENT_STEP_PER_FRAME, ORBIT_RADIUS, ORBIT_SLOTS,
};

#[function_component(SecuritySection)]
pub fn security_section() -> Html {
    let phase = use_state(|| 0.0f64);

    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |_| {
                let closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                    Rc::new(RefCell::new(None));
                let frame_id = Rc::new(Cell::new(0i32));

                let inner = closure.clone();
                let inner_id = frame_id.clone();
                let mut t = 0.0f64;
                *closure.borrow_mut() = Some(Closure::new(move || {
                    t += AMBIENT_STEP_PER_FRAME;
                    phase.set(t);
                    if let Some(win) = web_sys::window() {
                        if let Some(cb) = inner.borrow().as_ref() {
                            if let Ok(id) =
                                win.request_animation_frame(cb.as_ref().unchecked_ref())
                            {
                                inner_id.set(id);
                            }
                        }
                    }
                }));

                if let Some(win) = web_sys::window() {
                    if let Some(cb) = closure.borrow().as_ref() {
                        if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                            frame_id.set(id);
                        }
                    }
                }

                move || {
                    if let Some(win) = web_sys::window() {
                        let _ = win.cancel_animation_frame(frame_id.get());
                    }
                    closure.borrow_mut().take();
                }
            },
            (),
        );
    }

    let t = *phase;
    let [inner_angle, middle_angle, outer_angle] = ring_angles(t);

    let satellites = (0..ORBIT_SLOTS).map(|slot| {
        let (x, y) = orbit_position(slot, ORBIT_SLOTS, t, ORBIT_RADIUS);
        html! {
            <>
                <svg class="orbit-spoke" key={format!("spoke-{slot}")}>
                    <line x1="0" y1="0" x2={x.to_string()} y2={y.to_string()}
                        stroke="rgba(255,255,255,0.1)" stroke-width="1" stroke-dasharray="4 4" />
                </svg>
                <div class={classes!("orbit-satellite", format!("orbit-satellite-{slot}"))}
                    key={format!("sat-{slot}")}
                    style={format!("transform: translate({x:.1}px, {y:.1}px);")}>
                    <span class="satellite-glyph"></span>
                </div>
            </>
        }
    });

    html! {
        <section id="security" class="security">
            <style>{ SECURITY_CSS }</style>
            <div class="section-divider">
                <div class="divider-line">
                    <div class="divider-notch"><span class="glow-dot"></span></div>
                </div>
            </div>
            <div class="security-inner">
                <div class="security-header">
                    <div class="section-tag">
                        <span class="glow-dot"></span>
                        {"ENTERPRISE"}
                    </div>
                    <h2>{"Uplift delivers an enterprise-grade agentic infrastructure"}</h2>
                    <h4>
                        {"With isolated runtimes for maximum security, a unified \
                          interface that minimizes learning curve, and seamless \
                          integration of private AI agents for scalable automation."}
                    </h4>
                </div>
                <div class="security-grid">
                    <TechFrame>
                        <div class="security-card">
                            <div class="card-kicker kicker-primary">{"SECURE AT EVERY LEVEL"}</div>
                            <h3>{"Local-first security and full compliance"}</h3>
                            <p>
                                {"Uplift runs agents in isolated sandboxes with encrypted \
                                  local memory and token based access, ensuring your data \
                                  never leaves your environment. Agents only receive \
                                  approved context for a limited time, preventing \
                                  oversharing and cloud leakage."}
                            </p>
                            <a class="card-link" href={config::docs_url()} target="_blank" rel="noreferrer">
                                {"Learn more about security"}
                                <ChevronRightIcon class="card-link-chevron" />
                            </a>
                        </div>
                        <div class="security-visual">
                            <div class="visual-dot-grid"></div>
                            <div class="vault">
                                <div class="vault-halo"></div>
                                <div class="vault-core">
                                    <LockIcon class="vault-lock" />
                                </div>
                                <div class="vault-ring vault-ring-inner"
                                    style={format!("transform: rotate({inner_angle:.1}deg);")}>
                                    <span class="ring-node ring-node-top"></span>
                                </div>
                                <div class="vault-ring vault-ring-middle"
                                    style={format!("transform: rotate({middle_angle:.1}deg);")}>
                                    <span class="ring-node ring-node-bottom"></span>
                                </div>
                                <div class="vault-ring vault-ring-outer"
                                    style={format!("transform: rotate({outer_angle:.1}deg);")}>
                                    <svg class="ring-segments" viewBox="0 0 100 100">
                                        <circle cx="50" cy="50" r="48" fill="none"
                                            stroke="currentColor" stroke-width="1"
                                            stroke-dasharray="60 30" />
                                    </svg>
                                </div>
                            </div>
                        </div>
                    </TechFrame>
                    <TechFrame>
                        <div class="security-card">
                            <div class="card-kicker kicker-blue">{"ACROSS YOUR DEVELOPMENT STACK"}</div>
                            <h3>{"Independent of interfaces and external vendors"}</h3>
                            <p>
                                {"Uplift integrates with any model provider, API or device. \
                                  Deploy agents through one interface and evolve them \
                                  without vendor lock-in, using shared memory, cross-device \
                                  sync and modular extensions."}
                            </p>
                            <a class="card-link card-link-blue" href={config::docs_url()} target="_blank" rel="noreferrer">
                                {"Learn more about enterprise"}
                                <ChevronRightIcon class="card-link-chevron" />
                            </a>
                        </div>
                        <div class="security-visual">
                            <div class="hub">
                                <div class="hub-glyph"></div>
                                <span class="hub-label">{"UPLIFT"}</span>
                            </div>
                            { for satellites }
                            <div class="orbit-pulse"></div>
                        </div>
                    </TechFrame>
                </div>
            </div>
        </section>
    }
}

const SECURITY_CSS: &str = r#"
    .security {
        width: 100%;
        padding: 0 2rem 6rem 2rem;
        display: flex;
        flex-direction: column;
        align-items: center;
    }
    .security-inner {
        width: 100%;
        max-width: 1600px;
        display: flex;
        flex-direction: column;
    }
    .security-header { margin-bottom: 5rem; max-width: 56rem; }
    .security-header h2 {
        font-size: clamp(2rem, 4vw, 3.2rem);
        font-weight: 500;
        letter-spacing: -0.02em;
        line-height: 1.15;
        margin: 0 0 1.5rem 0;
    }
    .security-header h4 {
        font-family: monospace;
        font-size: 1.1rem;
        font-weight: 400;
        color: #999;
        line-height: 1.6;
        margin: 0;
    }
    .security-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 2rem;
    }
    .security-card {
        padding: 3rem;
        display: flex;
        flex-direction: column;
    }
    .card-kicker {
        font-size: 0.75rem;
        font-weight: 700;
        letter-spacing: 0.2em;
        text-transform: uppercase;
        margin-bottom: 1rem;
    }
    .kicker-primary { color: #ff5500; }
    .kicker-blue { color: #60a5fa; }
    .security-card h3 {
        font-size: 1.8rem;
        font-weight: 500;
        letter-spacing: -0.01em;
        line-height: 1.25;
        margin: 0 0 1rem 0;
    }
    .security-card p {
        font-size: 1.05rem;
        color: #999;
        line-height: 1.6;
        max-width: 32rem;
        margin: 0 0 2rem 0;
    }
    .card-link {
        display: inline-flex;
        align-items: center;
        margin-top: auto;
        font-size: 0.7rem;
        font-weight: 700;
        letter-spacing: 0.15em;
        text-transform: uppercase;
        transition: color 0.3s;
    }
    .card-link:hover { color: #ff5500; }
    .card-link-blue:hover { color: #60a5fa; }
    .card-link-chevron { width: 12px; height: 12px; margin-left: 0.3rem; }
    .security-visual {
        height: 256px;
        position: relative;
        display: flex;
        align-items: center;
        justify-content: center;
        background: linear-gradient(to top, rgba(0, 0, 0, 0.5), transparent);
    }
    .visual-dot-grid {
        position: absolute;
        inset: 0;
        background-image: radial-gradient(#fff 1px, transparent 1px);
        background-size: 20px 20px;
        opacity: 0.1;
        mask-image: radial-gradient(circle at center, black 40%, transparent 100%);
        -webkit-mask-image: radial-gradient(circle at center, black 40%, transparent 100%);
    }
    .vault {
        position: relative;
        width: 256px;
        height: 256px;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .vault-halo {
        position: absolute;
        width: 64px;
        height: 64px;
        border-radius: 50%;
        background: rgba(255, 85, 0, 0.1);
        filter: blur(4px);
        animation: vault-pulse 2s ease-in-out infinite;
    }
    @keyframes vault-pulse {
        0%, 100% { opacity: 0.5; }
        50% { opacity: 1; }
    }
    .vault-core {
        position: absolute;
        width: 48px;
        height: 48px;
        border-radius: 50%;
        background: #ff5500;
        display: flex;
        align-items: center;
        justify-content: center;
        box-shadow: 0 0 30px rgba(255, 85, 0, 0.4);
    }
    .vault-lock { width: 24px; height: 24px; color: #fff; }
    .vault-ring { position: absolute; border-radius: 50%; }
    .vault-ring-inner {
        width: 128px;
        height: 128px;
        border: 1px solid rgba(255, 85, 0, 0.3);
    }
    .vault-ring-middle {
        width: 192px;
        height: 192px;
        border: 1px dashed rgba(255, 255, 255, 0.1);
    }
    .vault-ring-outer {
        width: 240px;
        height: 240px;
        border: 2px solid rgba(255, 255, 255, 0.05);
        color: rgba(255, 255, 255, 0.05);
    }
    .ring-segments { position: absolute; inset: 0; width: 100%; height: 100%; }
    .ring-node {
        position: absolute;
        left: 50%;
        width: 8px;
        height: 8px;
        border-radius: 50%;
    }
    .ring-node-top {
        top: 0;
        transform: translate(-50%, -50%);
        background: #ff5500;
    }
    .ring-node-bottom {
        bottom: 0;
        transform: translate(-50%, 50%);
        width: 12px;
        height: 12px;
        background: #666;
    }
    .hub {
        position: relative;
        z-index: 2;
        width: 80px;
        height: 80px;
        border: 1px solid rgba(59, 130, 246, 0.5);
        border-radius: 12px;
        background: rgba(59, 130, 246, 0.1);
        backdrop-filter: blur(8px);
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        box-shadow: 0 0 20px rgba(59, 130, 246, 0.2);
    }
    .hub-glyph {
        width: 32px;
        height: 32px;
        border: 2px solid #3b82f6;
        border-radius: 6px;
    }
    .hub-label {
        font-family: monospace;
        font-size: 0.5rem;
        color: #60a5fa;
        letter-spacing: 0.2em;
        margin-top: 0.5rem;
    }
    .orbit-spoke {
        position: absolute;
        top: 50%;
        left: 50%;
        width: 100%;
        height: 100%;
        transform: translate(-50%, -50%);
        overflow: visible;
        pointer-events: none;
    }
    .orbit-satellite {
        position: absolute;
        width: 48px;
        height: 48px;
        margin: -24px 0 0 -24px;
        top: 50%;
        left: 50%;
        background: #1a1a1a;
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 8px;
        display: flex;
        align-items: center;
        justify-content: center;
        box-shadow: 0 10px 20px rgba(0, 0, 0, 0.4);
    }
    .satellite-glyph { width: 16px; height: 16px; }
    .orbit-satellite-0 .satellite-glyph { border-radius: 50%; background: rgba(34, 197, 94, 0.5); }
    .orbit-satellite-1 .satellite-glyph { border: 1px solid rgba(168, 85, 247, 0.5); }
    .orbit-satellite-2 .satellite-glyph { background: rgba(249, 115, 22, 0.5); transform: rotate(45deg); }
    .orbit-satellite-3 .satellite-glyph { border-bottom: 2px solid rgba(239, 68, 68, 0.5); border-radius: 50%; }
    .orbit-satellite-4 .satellite-glyph { height: 4px; background: rgba(255, 255, 255, 0.5); }
    .orbit-pulse {
        position: absolute;
        width: 256px;
        height: 256px;
        border: 1px solid rgba(59, 130, 246, 0.05);
        border-radius: 50%;
        animation: orbit-ping 3s ease-out infinite;
        opacity: 0.2;
    }
    @keyframes orbit-ping {
        from { transform: scale(0.8); opacity: 0.4; }
        to { transform: scale(1.2); opacity: 0; }
    }
    @media (max-width: 1024px) {
        .security-grid { grid-template-columns: 1fr; }
    }
"#;
