//! Inline SVG icon components, all stroke-based on `currentColor`.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or_default]
    pub class: &'static str,
}

/// Icon selector for static data tables, where a component type cannot be
/// stored directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Kanban,
    Globe,
    Terminal,
    Message,
    Check,
}

impl Icon {
    pub fn render(self, class: &'static str) -> Html {
        match self {
            Icon::Kanban => html! { <KanbanIcon {class} /> },
            Icon::Globe => html! { <GlobeIcon {class} /> },
            Icon::Terminal => html! { <TerminalIcon {class} /> },
            Icon::Message => html! { <MessageIcon {class} /> },
            Icon::Check => html! { <CheckIcon {class} /> },
        }
    }
}

#[function_component(KanbanIcon)]
pub fn kanban_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class} viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <rect x="3" y="3" width="18" height="18" rx="2" />
            <path d="M8 7v7" />
            <path d="M12 7v4" />
            <path d="M16 7v9" />
        </svg>
    }
}

#[function_component(GlobeIcon)]
pub fn globe_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class} viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <circle cx="12" cy="12" r="10" />
            <path d="M2 12h20" />
            <path d="M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z" />
        </svg>
    }
}

#[function_component(TerminalIcon)]
pub fn terminal_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class} viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <polyline points="4 17 10 11 4 5" />
            <line x1="12" y1="19" x2="20" y2="19" />
        </svg>
    }
}

#[function_component(MessageIcon)]
pub fn message_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class} viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" />
        </svg>
    }
}

#[function_component(CheckIcon)]
pub fn check_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class} viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <polyline points="20 6 9 17 4 12" />
        </svg>
    }
}

#[function_component(ChevronRightIcon)]
pub fn chevron_right_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class} viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <polyline points="9 18 15 12 9 6" />
        </svg>
    }
}

#[function_component(ArrowUpRightIcon)]
pub fn arrow_up_right_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class} viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <line x1="7" y1="17" x2="17" y2="7" />
            <polyline points="7 7 17 7 17 17" />
        </svg>
    }
}

#[function_component(LockIcon)]
pub fn lock_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class} viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M12 15v2m-6 4h12a2 2 0 0 0 2-2v-6a2 2 0 0 0-2-2H6a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2zm10-10V7a4 4 0 0 0-8 0v4h8z" />
        </svg>
    }
}

#[function_component(LayersIcon)]
pub fn layers_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class} viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M12 2L2 7l10 5 10-5-10-5z" />
            <path d="M2 17l10 5 10-5" />
            <path d="M2 12l10 5 10-5" />
        </svg>
    }
}

#[function_component(MailIcon)]
pub fn mail_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class} viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <rect x="2" y="4" width="20" height="16" rx="2" />
            <path d="M22 7l-10 6L2 7" />
        </svg>
    }
}

#[function_component(CalendarIcon)]
pub fn calendar_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class} viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <rect x="3" y="4" width="18" height="18" rx="2" />
            <line x1="16" y1="2" x2="16" y2="6" />
            <line x1="8" y1="2" x2="8" y2="6" />
            <line x1="3" y1="10" x2="21" y2="10" />
        </svg>
    }
}

#[function_component(WhatsAppIcon)]
pub fn whatsapp_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class} viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M21 11.5a8.38 8.38 0 0 1-.9 3.8 8.5 8.5 0 0 1-7.6 4.7 8.38 8.38 0 0 1-3.8-.9L3 21l1.9-5.7a8.38 8.38 0 0 1-.9-3.8 8.5 8.5 0 0 1 4.7-7.6 8.38 8.38 0 0 1 3.8-.9h.5a8.48 8.48 0 0 1 8 8z" />
        </svg>
    }
}

#[function_component(TwitterIcon)]
pub fn twitter_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class} viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M4 4l7.1 9.3L4.3 20h2.3l5.6-5.4L16.8 20H20l-7.4-9.7L18.9 4h-2.3l-5 4.9L7.2 4H4z" />
        </svg>
    }
}

#[function_component(DiscordIcon)]
pub fn discord_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class} viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M8 12a1 1 0 1 0 2 0 1 1 0 0 0-2 0z" />
            <path d="M14 12a1 1 0 1 0 2 0 1 1 0 0 0-2 0z" />
            <path d="M8.5 17c-2 0-3.5-1-4.5-2 .5-3.5 1.5-6.5 3-8.5C8.2 5.8 9.6 5.3 11 5.2l.5 1.2h1l.5-1.2c1.4.1 2.8.6 4 1.3 1.5 2 2.5 5 3 8.5-1 1-2.5 2-4.5 2l-.8-1.5c-.9.3-1.8.5-2.7.5s-1.8-.2-2.7-.5L8.5 17z" />
        </svg>
    }
}

#[function_component(LinkedInIcon)]
pub fn linkedin_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class} viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z" />
            <rect x="2" y="9" width="4" height="12" />
            <circle cx="4" cy="4" r="2" />
        </svg>
    }
}

/// Wordmark-style logo glyph used in the footer.
#[function_component(Logo)]
pub fn logo(props: &IconProps) -> Html {
    html! {
        <svg class={props.class} viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M5 4v9a7 7 0 0 0 14 0V4" />
            <path d="M12 20v-6" />
            <path d="M9 17l3-3 3 3" />
        </svg>
    }
}
