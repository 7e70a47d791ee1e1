//! Contact page: a grid of outbound contact channels with a one-shot entrance
//! animation triggered shortly after mount.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::icons::{
    ArrowUpRightIcon, CalendarIcon, DiscordIcon, LinkedInIcon, MailIcon, TwitterIcon, WhatsAppIcon,
};
use crate::components::tech_frame::TechFrame;
use crate::config;

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                // One-shot: fires once and is forgotten; a set on an unmounted
                // handle is ignored by the framework.
                Timeout::new(100, move || visible.set(true)).forget();
                || ()
            },
            (),
        );
    }

    let email_description = config::support_email();
    let options: &[(&str, &str, &str, String, Html)] = &[
        (
            "whatsapp",
            "WhatsApp",
            "Chat with us instantly",
            config::whatsapp_url().to_string(),
            html! { <WhatsAppIcon class="contact-icon" /> },
        ),
        (
            "email",
            "Email",
            email_description,
            format!("mailto:{}", config::support_email()),
            html! { <MailIcon class="contact-icon" /> },
        ),
        (
            "meeting",
            "Book a Meeting",
            "Schedule a video call",
            config::meeting_url().to_string(),
            html! { <CalendarIcon class="contact-icon" /> },
        ),
        (
            "twitter",
            "X (Twitter)",
            "Follow and DM us",
            config::twitter_url().to_string(),
            html! { <TwitterIcon class="contact-icon" /> },
        ),
        (
            "discord",
            "Discord",
            "Join our community",
            config::discord_url().to_string(),
            html! { <DiscordIcon class="contact-icon" /> },
        ),
        (
            "linkedin",
            "LinkedIn",
            "Connect professionally",
            config::linkedin_url().to_string(),
            html! { <LinkedInIcon class="contact-icon" /> },
        ),
    ];

    html! {
        <section class="contact">
            <style>{ CONTACT_CSS }</style>
            <div class={classes!("contact-body", (*visible).then_some("visible"))}>
                <div class="contact-header">
                    <div class="contact-kicker">{"GET IN TOUCH"}</div>
                    <h1>{"Let's Connect"}</h1>
                    <p>
                        {"We know no one likes to fill forms, so just choose your way \
                          of communication and we'll come there, and if you're looking \
                          for a job follow us on "}
                        <a class="contact-careers" href={config::careers_url()} target="_blank" rel="noreferrer">
                            {"Wellfound"}
                        </a>
                    </p>
                </div>
                <div class="contact-grid">
                    { for options.iter().map(|(id, title, description, url, icon)| html! {
                        <TechFrame key={*id}>
                            <a class="contact-card" href={url.clone()} target="_blank" rel="noreferrer">
                                <div class="contact-card-icon">{ icon.clone() }</div>
                                <div class="contact-card-body">
                                    <div class="contact-card-head">
                                        <h3>{ *title }</h3>
                                        <ArrowUpRightIcon class="contact-card-arrow" />
                                    </div>
                                    <p>{ *description }</p>
                                </div>
                            </a>
                        </TechFrame>
                    }) }
                </div>
            </div>
        </section>
    }
}

const CONTACT_CSS: &str = r#"
    .contact {
        width: 100%;
        min-height: 100vh;
        padding: 9rem 2rem 6rem 2rem;
        display: flex;
        flex-direction: column;
        align-items: center;
        overflow: hidden;
    }
    .contact-body {
        width: 100%;
        max-width: 1200px;
        display: flex;
        flex-direction: column;
        align-items: center;
        opacity: 0;
        transform: translateY(3rem);
        transition: opacity 1s ease 0.1s, transform 1s ease 0.1s;
    }
    .contact-body.visible {
        opacity: 1;
        transform: translateY(0);
    }
    .contact-header { text-align: center; margin-bottom: 5rem; max-width: 42rem; }
    .contact-kicker {
        font-size: 0.75rem;
        font-weight: 700;
        letter-spacing: 0.2em;
        color: #888;
        text-transform: uppercase;
        margin-bottom: 1.5rem;
    }
    .contact-header h1 {
        font-size: clamp(3rem, 7vw, 4.8rem);
        font-weight: 500;
        letter-spacing: -0.02em;
        margin: 0 0 2rem 0;
    }
    .contact-header p {
        font-size: 1.05rem;
        color: #8a8a8a;
        line-height: 1.6;
        margin: 0;
    }
    .contact-careers {
        color: #ff5500;
        transition: color 0.3s;
    }
    .contact-careers:hover { color: #fff; text-decoration: underline; }
    .contact-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1.5rem;
        width: 100%;
    }
    .contact-card {
        display: flex;
        align-items: flex-start;
        padding: 1.5rem;
        height: 100%;
        transition: background 0.3s;
    }
    .contact-card:hover { background: rgba(255, 255, 255, 0.02); }
    .contact-card-icon {
        margin: 0.2rem 1.2rem 0 0;
        color: #c4c4c4;
        transition: color 0.3s;
    }
    .contact-card:hover .contact-card-icon { color: #ff5500; }
    .contact-icon { width: 24px; height: 24px; }
    .contact-card-body { flex: 1; }
    .contact-card-head {
        display: flex;
        align-items: center;
        justify-content: space-between;
        margin-bottom: 0.3rem;
    }
    .contact-card-head h3 {
        font-size: 1.1rem;
        font-weight: 500;
        margin: 0;
        transition: color 0.3s;
    }
    .contact-card:hover h3 { color: #ff5500; }
    .contact-card-arrow {
        width: 16px;
        height: 16px;
        color: #777;
        opacity: 0;
        transform: translateY(6px);
        transition: all 0.3s;
    }
    .contact-card:hover .contact-card-arrow {
        color: #ff5500;
        opacity: 1;
        transform: translateY(0);
    }
    .contact-card p {
        font-family: monospace;
        font-size: 0.85rem;
        color: #777;
        margin: 0;
        transition: color 0.3s;
    }
    .contact-card:hover p { color: #999; }
    @media (max-width: 1024px) {
        .contact-grid { grid-template-columns: 1fr 1fr; }
    }
    @media (max-width: 640px) {
        .contact-grid { grid-template-columns: 1fr; }
    }
"#;
