//! "Powered by" marquee under the hero download widget.

use yew::prelude::*;

const PROVIDERS: &[&str] = &["GPT", "CLAUDE", "GEMINI", "LLAMA", "MISTRAL", "QWEN"];

#[function_component(TrustedBy)]
pub fn trusted_by() -> Html {
    // The track is rendered twice so the -50% translation loops seamlessly.
    let track = PROVIDERS.iter().map(|name| {
        html! {
            <span class="marquee-item" key={*name}>
                <span class="marquee-dot"></span>
                { *name }
            </span>
        }
    });
    html! {
        <div class="trusted-by">
            <style>
                {r#"
                    .trusted-by {
                        margin-top: 2.5rem;
                        max-width: 32rem;
                    }
                    .trusted-by-label {
                        font-size: 0.65rem;
                        font-weight: 700;
                        letter-spacing: 0.2em;
                        color: #666;
                        text-transform: uppercase;
                        margin-bottom: 1rem;
                    }
                    .marquee {
                        overflow: hidden;
                        mask-image: linear-gradient(to right, transparent, black 15%, black 85%, transparent);
                        -webkit-mask-image: linear-gradient(to right, transparent, black 15%, black 85%, transparent);
                    }
                    .marquee-track {
                        display: flex;
                        width: max-content;
                        animation: marquee-scroll 24s linear infinite;
                    }
                    .marquee-item {
                        display: flex;
                        align-items: center;
                        margin-right: 3rem;
                        font-family: monospace;
                        font-size: 0.8rem;
                        letter-spacing: 0.15em;
                        color: #777;
                        white-space: nowrap;
                    }
                    .marquee-dot {
                        width: 4px;
                        height: 4px;
                        border-radius: 50%;
                        background: rgba(255, 85, 0, 0.6);
                        margin-right: 0.7rem;
                    }
                    @keyframes marquee-scroll {
                        from { transform: translateX(0); }
                        to { transform: translateX(-50%); }
                    }
                "#}
            </style>
            <div class="trusted-by-label">{"Works with any model provider"}</div>
            <div class="marquee">
                <div class="marquee-track">
                    { for track.clone() }
                    { for track }
                </div>
            </div>
        </div>
    }
}
