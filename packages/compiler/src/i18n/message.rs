//! Message Model
//!
//! A message is either plain text or a translatable message carrying its
//! lookup metadata. Resolution logic pattern-matches on this sum type;
//! nothing probes a string for extra attributes at runtime.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered placeholder-name to substitution-value mapping.
pub type Mapping = IndexMap<String, serde_json::Value>;

/// A translatable message with optional catalog metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslatableMessage {
    pub id: String,
    pub domain: Option<String>,
    pub context: Option<String>,
    pub default: Option<String>,
    pub mapping: Option<Mapping>,
}

impl TranslatableMessage {
    pub fn new(id: impl Into<String>) -> Self {
        TranslatableMessage {
            id: id.into(),
            domain: None,
            context: None,
            default: None,
            mapping: None,
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_mapping(mut self, mapping: Mapping) -> Self {
        self.mapping = Some(mapping);
        self
    }
}

/// Either plain text or a [`TranslatableMessage`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Message {
    PlainText(String),
    Translatable(TranslatableMessage),
}

impl Message {
    /// The message id. Plain text doubles as its own id.
    pub fn id(&self) -> &str {
        match self {
            Message::PlainText(text) => text,
            Message::Translatable(message) => &message.id,
        }
    }

    pub fn default(&self) -> Option<&str> {
        match self {
            Message::PlainText(_) => None,
            Message::Translatable(message) => message.default.as_deref(),
        }
    }

    pub fn mapping(&self) -> Option<&Mapping> {
        match self {
            Message::PlainText(_) => None,
            Message::Translatable(message) => message.mapping.as_ref(),
        }
    }

    pub fn domain(&self) -> Option<&str> {
        match self {
            Message::PlainText(_) => None,
            Message::Translatable(message) => message.domain.as_deref(),
        }
    }

    pub fn context(&self) -> Option<&str> {
        match self {
            Message::PlainText(_) => None,
            Message::Translatable(message) => message.context.as_deref(),
        }
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::PlainText(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::PlainText(text)
    }
}

impl From<TranslatableMessage> for Message {
    fn from(message: TranslatableMessage) -> Self {
        Message::Translatable(message)
    }
}
