//! Widget configuration: webhook endpoint, support contact, and copy.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page configures the widget through `data-*` attributes on the
//! mount element. Every field has a built-in default so a bare
//! `<div id="root">` still produces a working widget.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Id of the DOM element the widget mounts into.
pub const MOUNT_ID: &str = "root";

pub const DEFAULT_WEBHOOK_URL: &str = "https://nuvaleoai.app.n8n.cloud/webhook/xoom-chatbot";
pub const DEFAULT_SUPPORT_EMAIL: &str = "info@xoommedia.co.uk";
pub const DEFAULT_BRAND_NAME: &str = "Xoom Media";
pub const DEFAULT_TAGLINE: &str = "Always here to help";
pub const DEFAULT_GREETING: &str = "Hi! 👋 I'm the Xoom Media virtual assistant. I'm here to help you learn about our digital services. What brings you here today?";
pub const DEFAULT_FOOTER: &str = "Powered by AI • Demo for Xoom Media";
pub const DEFAULT_QUICK_REPLIES: [&str; 4] = [
    "What services do you offer?",
    "I need a website",
    "SEO services",
    "Pricing information",
];

/// Separator for the `data-quick-replies` attribute.
const QUICK_REPLY_SEPARATOR: char = '|';

/// Errors produced while reading widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The webhook URL is not an absolute `http(s)` URL.
    #[error("invalid webhook url: {0}")]
    InvalidWebhookUrl(String),
}

/// Runtime configuration for a widget instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    pub webhook_url: String,
    pub support_email: String,
    pub brand_name: String,
    pub tagline: String,
    pub greeting: String,
    pub footer: String,
    pub quick_replies: Vec<String>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            webhook_url: DEFAULT_WEBHOOK_URL.to_owned(),
            support_email: DEFAULT_SUPPORT_EMAIL.to_owned(),
            brand_name: DEFAULT_BRAND_NAME.to_owned(),
            tagline: DEFAULT_TAGLINE.to_owned(),
            greeting: DEFAULT_GREETING.to_owned(),
            footer: DEFAULT_FOOTER.to_owned(),
            quick_replies: DEFAULT_QUICK_REPLIES.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

impl WidgetConfig {
    /// Build a config from attribute lookups, falling back to defaults.
    ///
    /// Each attribute falls back on its own: a rejected `webhook-url` keeps
    /// the default URL while every other attribute is still applied. The
    /// rejection is returned alongside the config for the caller to report.
    ///
    /// `attr` receives the attribute name without the `data-` prefix
    /// (e.g. `"webhook-url"`). Blank values count as absent.
    ///
    /// Recognised attributes:
    /// - `webhook-url`: must start with `http://` or `https://`
    /// - `support-email`
    /// - `brand-name`
    /// - `tagline`
    /// - `greeting`
    /// - `footer`
    /// - `quick-replies`: `|`-separated list
    pub fn from_attributes<F>(attr: F) -> (Self, Option<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| attr(name).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let mut config = Self::default();
        let mut rejected = None;

        if let Some(url) = lookup("webhook-url") {
            match validate_webhook_url(&url) {
                Ok(url) => config.webhook_url = url,
                Err(e) => rejected = Some(e),
            }
        }
        if let Some(email) = lookup("support-email") {
            config.support_email = email;
        }
        if let Some(name) = lookup("brand-name") {
            config.brand_name = name;
        }
        if let Some(tagline) = lookup("tagline") {
            config.tagline = tagline;
        }
        if let Some(greeting) = lookup("greeting") {
            config.greeting = greeting;
        }
        if let Some(footer) = lookup("footer") {
            config.footer = footer;
        }
        if let Some(raw) = lookup("quick-replies") {
            let replies = parse_quick_replies(&raw);
            if !replies.is_empty() {
                config.quick_replies = replies;
            }
        }

        (config, rejected)
    }

    /// Load config from the `data-*` attributes of the mount element.
    ///
    /// An invalid webhook URL is logged and replaced by the default URL; the
    /// remaining attributes are kept.
    #[cfg(feature = "csr")]
    pub fn from_mount_element(el: &web_sys::Element) -> Self {
        let (config, rejected) = Self::from_attributes(|name| el.get_attribute(&format!("data-{name}")));
        if let Some(e) = rejected {
            leptos::logging::warn!("chat widget config: {e}; using default webhook url");
        }
        config
    }
}

fn validate_webhook_url(url: &str) -> Result<String, ConfigError> {
    let lower = url.to_ascii_lowercase();
    let rest = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() => Ok(url.to_owned()),
        _ => Err(ConfigError::InvalidWebhookUrl(url.to_owned())),
    }
}

fn parse_quick_replies(raw: &str) -> Vec<String> {
    raw.split(QUICK_REPLY_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
