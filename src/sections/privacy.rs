//! Privacy policy page.

use yew::prelude::*;

use crate::sections::terms::{LegalProps, LEGAL_CSS};
use crate::Page;

#[function_component(PrivacyPage)]
pub fn privacy_page(props: &LegalProps) -> Html {
    let to_terms = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Page::Terms);
        })
    };
    let to_privacy = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Page::Privacy);
        })
    };

    html! {
        <div class="legal-content">
            <style>{ LEGAL_CSS }</style>
            <h1>{"Privacy Policy"}</h1>
            <p class="legal-updated">{"Last updated: June 2025"}</p>

            <section>
                <h2>{"1. Local-First by Design"}</h2>
                <p>{"Uplift is built around local execution. Agent sessions, the Agentic Vault, and agent memory live on your device. We do not receive the contents of your vault, your files, or the context you share with agents."}</p>
            </section>

            <section>
                <h2>{"2. Information We Collect"}</h2>
                <p>{"We collect only what is needed to operate the website and distribute the application:"}</p>
                <ul>
                    <li>{"Contact details you choose to share with us through the channels on the contact page."}</li>
                    <li>{"Basic download statistics (platform and version of the installer requested)."}</li>
                    <li>{"Crash reports, only if you explicitly opt in from within the application."}</li>
                </ul>
            </section>

            <section>
                <h2>{"3. What We Do Not Collect"}</h2>
                <ul>
                    <li>{"Prompts, agent outputs, or session transcripts."}</li>
                    <li>{"Vault contents or session token material."}</li>
                    <li>{"Telemetry about which agents you install or run."}</li>
                </ul>
            </section>

            <section>
                <h2>{"4. Third-Party Services"}</h2>
                <p>{"The contact page links to external services (WhatsApp, Calendly, Discord, X, LinkedIn). If you reach us through one of them, your use of that service is governed by its own privacy policy. Agents you install may call third-party model providers under the permissions you grant; those calls go directly from your machine and are subject to the provider's terms."}</p>
            </section>

            <section>
                <h2>{"5. Data Retention"}</h2>
                <p>{"Correspondence is kept only as long as needed to handle your request. Opt-in crash reports are retained for ninety days. Everything stored by the application itself can be removed by deleting the application data directory."}</p>
            </section>

            <section>
                <h2>{"6. Your Rights"}</h2>
                <p>{"Depending on your jurisdiction you may have rights to access, correct, or delete personal data we hold about you. Since we hold very little, the fastest path is simply to email us."}</p>
            </section>

            <section>
                <h2>{"7. Contact"}</h2>
                <p>
                    {"Privacy questions can be sent to "}
                    <a href={format!("mailto:{}", crate::config::support_email())}>{ crate::config::support_email() }</a>
                </p>
            </section>

            <div class="legal-links">
                <a href="#" onclick={to_terms}>{"Terms of Service"}</a>
                {" | "}
                <a href="#" onclick={to_privacy}>{"Privacy Policy"}</a>
            </div>
        </div>
    }
}
