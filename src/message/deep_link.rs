//! Messaging deep links.

use super::templates::OutboundMessage;
use serde::Serialize;
use std::fmt;

/// Default messaging host.
pub const DEFAULT_HOST: &str = "wa.me";

/// Default recipient the site forwards messages to.
pub const DEFAULT_RECIPIENT: &str = "2347040023236";

/// Where outbound messages are addressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLinkTarget {
    pub host: String,
    pub recipient: String,
}

impl Default for DeepLinkTarget {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            recipient: DEFAULT_RECIPIENT.to_string(),
        }
    }
}

impl DeepLinkTarget {
    pub fn new(host: impl Into<String>, recipient: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            recipient: recipient.into(),
        }
    }

    /// Build the link carrying `message` as its percent-encoded `text` parameter.
    pub fn link_for(&self, message: &OutboundMessage) -> DeepLink {
        DeepLink(format!(
            "https://{}/{}?text={}",
            self.host,
            self.recipient,
            urlencoding::encode(message.as_str())
        ))
    }
}

/// A URL that opens a chat pre-filled with a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DeepLink(String);

impl DeepLink {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the `text` parameter back into the message.
    pub fn text(&self) -> Option<String> {
        let (_, encoded) = self.0.split_once("?text=")?;
        urlencoding::decode(encoded).ok().map(|s| s.into_owned())
    }
}

impl fmt::Display for DeepLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::render_contact;
    use crate::models::ContactMessage;
    use crate::domain::EmailAddress;

    fn message() -> OutboundMessage {
        render_contact(&ContactMessage {
            name: "Ada & Co".to_string(),
            email: EmailAddress::new("ada@example.com").unwrap(),
            subject: "50% off?".to_string(),
            body: "Hi there".to_string(),
        })
    }

    #[test]
    fn test_default_target() {
        let link = DeepLinkTarget::default().link_for(&message());
        assert!(link
            .as_str()
            .starts_with("https://wa.me/2347040023236?text="));
    }

    #[test]
    fn test_text_is_percent_encoded() {
        let link = DeepLinkTarget::default().link_for(&message());
        let (_, query) = link.as_str().split_once('?').unwrap();
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
        assert!(!query["text=".len()..].contains('&'));
        assert!(query.contains("%0A"));
        assert!(query.contains("Ada%20%26%20Co"));
    }

    #[test]
    fn test_text_decodes_to_message() {
        let message = message();
        let link = DeepLinkTarget::new("wa.me", "15550001111").link_for(&message);
        assert!(link.as_str().starts_with("https://wa.me/15550001111?text="));
        assert_eq!(link.text().as_deref(), Some(message.as_str()));
    }
}
