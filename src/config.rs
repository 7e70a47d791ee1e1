//! Fixed outbound link targets. Static configuration, never computed.

pub fn docs_url() -> &'static str {
    "https://help.operatoruplift.com"
}

pub fn careers_url() -> &'static str {
    "https://wellfound.com/company/uplift-os"
}

pub fn meeting_url() -> &'static str {
    "https://calendly.com/dhruv-helloaven/30min"
}

pub fn whatsapp_url() -> &'static str {
    "https://wa.me/18049311722"
}

pub fn support_email() -> &'static str {
    "dhruv@operatoruplift.com"
}

pub fn twitter_url() -> &'static str {
    "https://x.com/OperatorUplift"
}

pub fn discord_url() -> &'static str {
    "https://discord.gg/duvYhkW5"
}

pub fn linkedin_url() -> &'static str {
    "https://www.linkedin.com/company/operatoruplift"
}

pub fn github_url() -> &'static str {
    "https://github.com/uplift-labs"
}
