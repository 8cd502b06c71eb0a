// ABOUTME: Inbound relay event model and tag tuples
// ABOUTME: Events carry an id, author key, creation time, kind, content, and labelled tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Number of pubkey characters shown in placeholder author names
const PLACEHOLDER_NAME_CHARS: usize = 8;

/// A labelled tag: `["label", "value", ...]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Tag {
    /// First element of the tuple
    pub label: String,
    /// Remaining elements
    pub values: Vec<String>,
}

impl Tag {
    /// Create a tag from a label and values
    #[must_use]
    pub fn new(label: impl Into<String>, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            label: label.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Value at `index` (0 is the first value after the label)
    #[must_use]
    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// First value after the label
    #[must_use]
    pub fn first_value(&self) -> Option<&str> {
        self.value(0)
    }
}

impl TryFrom<Vec<String>> for Tag {
    type Error = String;

    fn try_from(mut parts: Vec<String>) -> Result<Self, Self::Error> {
        if parts.is_empty() {
            return Err("tag must contain at least a label".to_owned());
        }
        let label = parts.remove(0);
        Ok(Self {
            label,
            values: parts,
        })
    }
}

impl From<Tag> for Vec<String> {
    fn from(tag: Tag) -> Self {
        let mut parts = Vec::with_capacity(tag.values.len() + 1);
        parts.push(tag.label);
        parts.extend(tag.values);
        parts
    }
}

/// A signed event as delivered by a relay subscription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundEvent {
    /// Unique event id
    pub id: String,
    /// Author public key
    pub pubkey: String,
    /// Creation time in unix seconds
    pub created_at: i64,
    /// Event kind
    pub kind: u32,
    /// Free-text content
    #[serde(default)]
    pub content: String,
    /// Labelled tags
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl InboundEvent {
    /// All tags with the given label, in order
    pub fn tags_labeled<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a Tag> + 'a {
        self.tags.iter().filter(move |tag| tag.label == label)
    }

    /// First tag with the given label
    #[must_use]
    pub fn first_tag(&self, label: &str) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.label == label)
    }
}

/// Author reference attached to stored records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRef {
    /// Author public key
    pub pubkey: String,
    /// Display name
    pub name: String,
}

impl AuthorRef {
    /// Placeholder author named after the first characters of the pubkey
    #[must_use]
    pub fn placeholder(pubkey: &str) -> Self {
        let prefix: String = pubkey.chars().take(PLACEHOLDER_NAME_CHARS).collect();
        Self {
            pubkey: pubkey.to_owned(),
            name: format!("{prefix}..."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trips_as_array() {
        let tag: Tag = serde_json::from_value(serde_json::json!(["distance", "5.2", "km"])).unwrap();
        assert_eq!(tag.label, "distance");
        assert_eq!(tag.value(1), Some("km"));
        assert_eq!(
            serde_json::to_value(&tag).unwrap(),
            serde_json::json!(["distance", "5.2", "km"])
        );
    }

    #[test]
    fn test_empty_tag_is_rejected() {
        let result: Result<Tag, _> = serde_json::from_value(serde_json::json!([]));
        assert!(result.is_err());
    }

    #[test]
    fn test_placeholder_author() {
        let author = AuthorRef::placeholder("abcdef0123456789");
        assert_eq!(author.name, "abcdef01...");
        assert_eq!(author.pubkey, "abcdef0123456789");
    }

    #[test]
    fn test_event_defaults_content_and_tags() {
        let event: InboundEvent = serde_json::from_value(serde_json::json!({
            "id": "e1", "pubkey": "pk", "created_at": 10, "kind": 1
        }))
        .unwrap();
        assert!(event.content.is_empty());
        assert!(event.tags.is_empty());
    }
}
