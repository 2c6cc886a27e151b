//! Nested message bundles: all user-facing text for one language.
//!
//! A bundle is a string-keyed tree whose leaves are strings. Lists are
//! allowed at any depth (skill lists, bullet points). Anything else
//! (numbers, booleans, `null`) is rejected when parsing, so a bundle that
//! deserializes is always renderable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One node of a [`MessageBundle`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Message {
    Text(String),
    List(Vec<Message>),
    Group(MessageBundle),
}

impl Message {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Message::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Same kind at this node and, recursively, the same keys and list lengths below it.
    pub fn same_shape(&self, other: &Message) -> bool {
        match (self, other) {
            (Message::Text(_), Message::Text(_)) => true,
            (Message::List(a), Message::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_shape(y))
            }
            (Message::Group(a), Message::Group(b)) => a.same_shape(b),
            _ => false,
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            Message::Text(_) => 1,
            Message::List(items) => items.iter().map(Message::leaf_count).sum(),
            Message::Group(group) => group.leaf_count(),
        }
    }

    fn child(&self, segment: &str) -> Option<&Message> {
        match self {
            Message::Group(group) => group.get(segment),
            Message::List(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            Message::Text(_) => None,
        }
    }
}

impl From<&str> for Message {
    fn from(value: &str) -> Self {
        Message::Text(value.to_string())
    }
}

impl From<MessageBundle> for Message {
    fn from(value: MessageBundle) -> Self {
        Message::Group(value)
    }
}

/// String-keyed tree of messages for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageBundle(BTreeMap<String, Message>);

impl MessageBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Builder-style insert, handy for literals in tests and fixtures.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Message>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Message> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Message)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolve a dotted path such as `hero.title` or `skills.items.0`.
    pub fn lookup(&self, path: &str) -> Option<&Message> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut node = self.0.get(first)?;
        for segment in segments {
            node = node.child(segment)?;
        }
        Some(node)
    }

    /// Text at `path`, or the path itself when it is missing or not a leaf.
    ///
    /// Rendering the key keeps a half-translated page usable instead of
    /// blanking the section.
    pub fn text(&self, path: &str) -> String {
        self.lookup(path)
            .and_then(Message::as_text)
            .map(str::to_string)
            .unwrap_or_else(|| path.to_string())
    }

    /// Text leaves of the list at `path`; empty when it is not a list.
    pub fn texts(&self, path: &str) -> Vec<String> {
        match self.lookup(path) {
            Some(Message::List(items)) => items
                .iter()
                .filter_map(Message::as_text)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Identical key sets at every depth, identical list lengths, matching leaf kinds.
    pub fn same_shape(&self, other: &MessageBundle) -> bool {
        self.0.len() == other.0.len()
            && self.0.iter().all(|(key, node)| {
                other
                    .0
                    .get(key)
                    .map(|theirs| node.same_shape(theirs))
                    .unwrap_or(false)
            })
    }

    /// Number of text leaves, i.e. the number of strings a translation touches.
    pub fn leaf_count(&self) -> usize {
        self.0.values().map(Message::leaf_count).sum()
    }
}

impl FromIterator<(String, Message)> for MessageBundle {
    fn from_iter<I: IntoIterator<Item = (String, Message)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
