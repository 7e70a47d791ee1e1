//! Decorative background layer behind the hero copy: concentric orbit rings
//! and drifting nodes, all pure CSS keyframes.

use yew::prelude::*;

#[function_component(HeroAnimation)]
pub fn hero_animation() -> Html {
    html! {
        <div class="hero-animation" aria-hidden="true">
            <style>
                {r#"
                    .hero-animation {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                    }
                    .hero-orbit {
                        position: absolute;
                        top: 50%;
                        left: 65%;
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        border-radius: 50%;
                        transform: translate(-50%, -50%);
                    }
                    .hero-orbit-1 { width: 320px; height: 320px; animation: hero-spin 40s linear infinite; }
                    .hero-orbit-2 { width: 520px; height: 520px; border-style: dashed; animation: hero-spin 70s linear infinite reverse; }
                    .hero-orbit-3 { width: 760px; height: 760px; animation: hero-spin 110s linear infinite; }
                    .hero-orbit .hero-node {
                        position: absolute;
                        top: -3px;
                        left: 50%;
                        width: 6px;
                        height: 6px;
                        border-radius: 50%;
                        background: #ff5500;
                        box-shadow: 0 0 10px rgba(255, 85, 0, 0.8);
                    }
                    .hero-orbit-2 .hero-node { background: rgba(255, 255, 255, 0.4); box-shadow: none; }
                    .hero-grid {
                        position: absolute;
                        inset: 0;
                        background-image: radial-gradient(rgba(255, 255, 255, 0.5) 1px, transparent 1px);
                        background-size: 28px 28px;
                        opacity: 0.06;
                        mask-image: radial-gradient(circle at 65% 50%, black 30%, transparent 75%);
                        -webkit-mask-image: radial-gradient(circle at 65% 50%, black 30%, transparent 75%);
                    }
                    .hero-core {
                        position: absolute;
                        top: 50%;
                        left: 65%;
                        width: 80px;
                        height: 80px;
                        border-radius: 50%;
                        background: rgba(255, 85, 0, 0.12);
                        transform: translate(-50%, -50%);
                        filter: blur(6px);
                        animation: hero-pulse 4s ease-in-out infinite;
                    }
                    @keyframes hero-spin {
                        from { transform: translate(-50%, -50%) rotate(0deg); }
                        to { transform: translate(-50%, -50%) rotate(360deg); }
                    }
                    @keyframes hero-pulse {
                        0%, 100% { opacity: 0.5; }
                        50% { opacity: 1; }
                    }
                "#}
            </style>
            <div class="hero-grid"></div>
            <div class="hero-core"></div>
            <div class="hero-orbit hero-orbit-1"><span class="hero-node"></span></div>
            <div class="hero-orbit hero-orbit-2"><span class="hero-node"></span></div>
            <div class="hero-orbit hero-orbit-3"><span class="hero-node"></span></div>
        </div>
    }
}
