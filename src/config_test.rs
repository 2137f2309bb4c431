use super::*;
use std::collections::HashMap;

fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |name| map.get(name).cloned()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_config_uses_builtin_webhook_and_support_email() {
    let config = WidgetConfig::default();
    assert_eq!(config.webhook_url, DEFAULT_WEBHOOK_URL);
    assert_eq!(config.support_email, "info@xoommedia.co.uk");
}

#[test]
fn default_config_has_four_quick_replies() {
    let config = WidgetConfig::default();
    assert_eq!(
        config.quick_replies,
        vec!["What services do you offer?", "I need a website", "SEO services", "Pricing information"]
    );
}

#[test]
fn no_attributes_yields_default() {
    let (config, rejected) = WidgetConfig::from_attributes(|_| None);
    assert_eq!(config, WidgetConfig::default());
    assert_eq!(rejected, None);
}

// =============================================================
// Attribute overrides
// =============================================================

#[test]
fn attributes_override_defaults() {
    let (config, rejected) = WidgetConfig::from_attributes(attrs(&[
        ("webhook-url", "https://hooks.example.com/chat"),
        ("support-email", "help@example.com"),
        ("brand-name", "Example Co"),
        ("tagline", "We answer fast"),
    ]));
    assert_eq!(rejected, None);
    assert_eq!(config.webhook_url, "https://hooks.example.com/chat");
    assert_eq!(config.support_email, "help@example.com");
    assert_eq!(config.brand_name, "Example Co");
    assert_eq!(config.tagline, "We answer fast");
    assert_eq!(config.greeting, DEFAULT_GREETING);
}

#[test]
fn blank_attributes_keep_defaults() {
    let (config, _) = WidgetConfig::from_attributes(attrs(&[("support-email", "   "), ("greeting", "")]));
    assert_eq!(config.support_email, DEFAULT_SUPPORT_EMAIL);
    assert_eq!(config.greeting, DEFAULT_GREETING);
}

#[test]
fn quick_replies_split_on_pipe_and_trim() {
    let (config, _) = WidgetConfig::from_attributes(attrs(&[("quick-replies", " Hours | | Directions|Call me ")]));
    assert_eq!(config.quick_replies, vec!["Hours", "Directions", "Call me"]);
}

#[test]
fn quick_replies_of_only_separators_keep_defaults() {
    let (config, _) = WidgetConfig::from_attributes(attrs(&[("quick-replies", "| |")]));
    assert_eq!(config.quick_replies.len(), 4);
}

// =============================================================
// Webhook URL validation
// =============================================================

#[test]
fn webhook_url_accepts_http_and_https() {
    assert!(validate_webhook_url("http://localhost:5678/webhook").is_ok());
    assert!(validate_webhook_url("HTTPS://Example.com/x").is_ok());
}

#[test]
fn webhook_url_rejects_relative_and_other_schemes() {
    assert_eq!(
        validate_webhook_url("/webhook"),
        Err(ConfigError::InvalidWebhookUrl("/webhook".to_owned()))
    );
    assert!(validate_webhook_url("ftp://example.com").is_err());
    assert!(validate_webhook_url("https://").is_err());
}

#[test]
fn invalid_webhook_attribute_is_reported() {
    let (config, rejected) = WidgetConfig::from_attributes(attrs(&[("webhook-url", "not a url")]));
    assert_eq!(config.webhook_url, DEFAULT_WEBHOOK_URL);
    assert_eq!(
        rejected.map(|e| e.to_string()).as_deref(),
        Some("invalid webhook url: not a url")
    );
}

#[test]
fn invalid_webhook_url_keeps_other_attributes() {
    let (config, rejected) = WidgetConfig::from_attributes(attrs(&[
        ("webhook-url", "/relative"),
        ("support-email", "help@example.com"),
        ("brand-name", "Example Co"),
        ("quick-replies", "Hours|Directions"),
    ]));
    assert_eq!(rejected, Some(ConfigError::InvalidWebhookUrl("/relative".to_owned())));
    assert_eq!(config.webhook_url, DEFAULT_WEBHOOK_URL);
    assert_eq!(config.support_email, "help@example.com");
    assert_eq!(config.brand_name, "Example Co");
    assert_eq!(config.quick_replies, vec!["Hours", "Directions"]);
}
