//! Terms of service page.

use yew::prelude::*;

use crate::Page;

#[derive(Properties, PartialEq)]
pub struct LegalProps {
    pub on_navigate: Callback<Page>,
}

pub const LEGAL_CSS: &str = r#"
    .legal-content {
        max-width: 56rem;
        margin: 0 auto;
        padding: 9rem 2rem 6rem 2rem;
        color: #c4c4c4;
        line-height: 1.7;
    }
    .legal-content h1 {
        color: #fff;
        font-size: 2.4rem;
        font-weight: 500;
        letter-spacing: -0.02em;
        margin: 0 0 0.5rem 0;
    }
    .legal-updated {
        font-family: monospace;
        font-size: 0.85rem;
        color: #666;
        margin-bottom: 3rem;
    }
    .legal-content section { margin-bottom: 2.5rem; }
    .legal-content h2 {
        color: #fff;
        font-size: 1.3rem;
        font-weight: 500;
        margin: 0 0 0.8rem 0;
    }
    .legal-content ul { padding-left: 1.4rem; }
    .legal-content li { margin-bottom: 0.4rem; }
    .legal-content a { color: #ff5500; }
    .legal-content a:hover { text-decoration: underline; }
    .legal-links {
        margin-top: 4rem;
        padding-top: 2rem;
        border-top: 1px solid rgba(255, 255, 255, 0.08);
        font-size: 0.9rem;
        color: #666;
    }
"#;

#[function_component(TermsPage)]
pub fn terms_page(props: &LegalProps) -> Html {
    let to_privacy = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Page::Privacy);
        })
    };
    let to_terms = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Page::Terms);
        })
    };

    html! {
        <div class="legal-content">
            <style>{ LEGAL_CSS }</style>
            <h1>{"Terms of Service"}</h1>
            <p class="legal-updated">{"Last updated: June 2025"}</p>

            <section>
                <h2>{"1. Acceptance of Terms"}</h2>
                <p>{"By downloading, installing, or using the Uplift desktop application and related services, you agree to be bound by these Terms of Service. If you do not agree to these Terms, do not use the Service."}</p>
            </section>

            <section>
                <h2>{"2. Description of the Service"}</h2>
                <p>{"Uplift provides a desktop platform for running AI agents in isolated, sandboxed environments on your own machine. The Service includes the Agent Store, the session-based runtime, the Agentic Vault, and related developer tooling. Agents execute locally; Uplift does not host or operate agents on your behalf."}</p>
            </section>

            <section>
                <h2>{"3. Licenses"}</h2>
                <p>{"The Uplift client is distributed under an open-source license available in the application repository. Agents obtained through the Agent Store are licensed to you by their respective developers under the terms shown at install time. These Terms do not grant you any rights to the Uplift name, logo, or trademarks."}</p>
            </section>

            <section>
                <h2>{"4. Your Responsibilities"}</h2>
                <p>{"You are responsible for the agents you choose to install and run, the permissions you grant them, and the outputs they produce. You agree not to:"}</p>
                <ul>
                    <li>{"Use the Service to develop or distribute malware or to attack third-party systems."}</li>
                    <li>{"Circumvent the permission and sandboxing mechanisms of the runtime."}</li>
                    <li>{"Misrepresent the origin or capabilities of agents you publish to the Agent Store."}</li>
                    <li>{"Use the Service in violation of applicable laws or regulations."}</li>
                </ul>
            </section>

            <section>
                <h2>{"5. Agent Store"}</h2>
                <p>{"Developers who publish agents to the Agent Store retain ownership of their work and are solely responsible for its behavior and documentation. Uplift may review, suspend, or remove listings that violate these Terms, but does not guarantee the quality, safety, or fitness of any third-party agent."}</p>
            </section>

            <section>
                <h2>{"6. Beta Software"}</h2>
                <p>{"The Service is currently offered as a beta release. Features may change, break, or be removed without notice, and session or vault data formats may not be stable between releases. You should not rely on beta builds for critical workloads."}</p>
            </section>

            <section>
                <h2>{"7. Disclaimer of Warranties"}</h2>
                <p>{"The Service is provided \"as is\" and \"as available\" without warranties of any kind, express or implied, including merchantability, fitness for a particular purpose, and non-infringement. AI agents can produce incorrect or unexpected results; you are responsible for reviewing their actions and outputs."}</p>
            </section>

            <section>
                <h2>{"8. Limitation of Liability"}</h2>
                <p>{"To the maximum extent permitted by law, Uplift and its contributors shall not be liable for any indirect, incidental, special, consequential, or punitive damages, or any loss of data, profits, or goodwill, arising from your use of the Service or any agent obtained through it."}</p>
            </section>

            <section>
                <h2>{"9. Changes to These Terms"}</h2>
                <p>{"We may update these Terms from time to time. Material changes will be announced in the application or on this site, and continued use of the Service after changes take effect constitutes acceptance of the revised Terms."}</p>
            </section>

            <section>
                <h2>{"10. Contact"}</h2>
                <p>
                    {"Questions about these Terms can be sent to "}
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
