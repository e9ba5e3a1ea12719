//! Decoding of Reddit inbox listings (`/message/inbox.json`).

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use super::model::{InboxMessage, MessageKind};
use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct Thing<T> {
    kind: String,
    data: T,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    children: Vec<Thing<RawMessage>>,
}

#[derive(Debug, Deserialize)]
struct RawMessage {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    subject: String,
    #[serde(default)]
    parent_id: Option<String>,
    #[serde(default)]
    was_comment: bool,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    subreddit: Option<String>,
    #[serde(default)]
    body: String,
    #[serde(default)]
    created_utc: Option<f64>,
    #[serde(default)]
    new: bool,
}

impl RawMessage {
    fn into_message(self, thing_kind: &str) -> InboxMessage {
        // Every `t4` thing is a message, including subreddit-sent ones and
        // replies within a message thread. Comment-derived items are `t1`.
        let kind = if thing_kind == "t4" && !self.was_comment {
            MessageKind::Private
        } else {
            MessageKind::Thread
        };

        InboxMessage {
            kind,
            subject: self.subject,
            parent_id: self.parent_id.filter(|p| !p.is_empty()),
            name: self.name,
            author: self.author,
            subreddit: self.subreddit,
            body: self.body,
            created_utc: self.created_utc.and_then(timestamp_from_secs),
            unread: self.new,
        }
    }
}

#[allow(clippy::cast_possible_truncation)] // Reddit timestamps are whole seconds
fn timestamp_from_secs(secs: f64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs as i64, 0)
}

/// Decodes an inbox listing into messages, preserving order.
///
/// # Errors
///
/// Returns [`Error::Json`] for malformed JSON and
/// [`Error::UnexpectedListing`] when the top-level thing is not a `Listing`.
pub fn parse_listing(json: &str) -> Result<Vec<InboxMessage>> {
    let listing: Thing<ListingData> = serde_json::from_str(json)?;
    if listing.kind != "Listing" {
        return Err(Error::UnexpectedListing(format!(
            "expected kind \"Listing\", got {:?}",
            listing.kind
        )));
    }

    let messages: Vec<InboxMessage> = listing
        .data
        .children
        .into_iter()
        .map(|child| child.data.into_message(&child.kind))
        .collect();

    debug!(count = messages.len(), "Decoded inbox listing");
    Ok(messages)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::consistency::ConsistencyPolicy;
    use crate::inbox::{Classifier, InboxMessageType};

    const INBOX: &str = r#"{
        "kind": "Listing",
        "data": {
            "after": null,
            "children": [
                {"kind": "t1", "data": {
                    "name": "t1_c1", "subject": "comment reply", "parent_id": "t1_p1",
                    "was_comment": true, "author": "alice", "subreddit": "rust",
                    "body": "agreed", "created_utc": 1500000000.0, "new": true
                }},
                {"kind": "t1", "data": {
                    "name": "t1_c2", "subject": "post reply", "parent_id": "t3_s1",
                    "was_comment": true, "author": "bob", "subreddit": "rust",
                    "body": "nice post", "created_utc": 1500000100.0, "new": false
                }},
                {"kind": "t1", "data": {
                    "name": "t1_c3", "subject": "username mention", "parent_id": "t3_s2",
                    "was_comment": true, "author": "carol", "subreddit": "androiddev",
                    "body": "/u/saket", "created_utc": 1500000200.0, "new": false
                }},
                {"kind": "t4", "data": {
                    "name": "t4_m1", "subject": "hello", "parent_id": null,
                    "was_comment": false, "author": "dave", "subreddit": null,
                    "body": "hey", "created_utc": 1500000300.0, "new": true
                }},
                {"kind": "t4", "data": {
                    "name": "t4_m2", "subject": "you have been approved", "parent_id": null,
                    "was_comment": false, "author": null, "subreddit": "rust",
                    "body": "welcome", "created_utc": 1500000400.0, "new": false
                }}
            ]
        }
    }"#;

    #[test]
    fn decodes_children_in_order() {
        let messages = parse_listing(INBOX).unwrap();
        assert_eq!(messages.len(), 5);

        let first = &messages[0];
        assert_eq!(first.kind, MessageKind::Thread);
        assert_eq!(first.parent_id.as_deref(), Some("t1_p1"));
        assert_eq!(first.author.as_deref(), Some("alice"));
        assert!(first.unread);
        assert_eq!(first.created_utc.unwrap().timestamp(), 1_500_000_000);

        assert_eq!(messages[3].kind, MessageKind::Private);
        assert_eq!(messages[4].kind, MessageKind::Private);
    }

    #[test]
    fn decoded_listing_classifies() {
        let messages = parse_listing(INBOX).unwrap();
        let types = Classifier::new(ConsistencyPolicy::Strict).classify_all(&messages);
        assert_eq!(
            types,
            vec![
                InboxMessageType::CommentReply,
                InboxMessageType::PostReply,
                InboxMessageType::UsernameMention,
                InboxMessageType::PrivateMessage,
                InboxMessageType::PrivateMessage,
            ]
        );
    }

    #[test]
    fn subreddit_message_reply_is_private() {
        let json = r#"{"kind":"Listing","data":{"children":[
            {"kind":"t4","data":{
                "name":"t4_m2","subject":"re: you have been approved","parent_id":"t4_m1",
                "was_comment":false,"subreddit":"rust","body":"thanks"
            }}
        ]}}"#;
        let messages = parse_listing(json).unwrap();
        assert_eq!(messages[0].kind, MessageKind::Private);
        assert_eq!(
            crate::inbox::try_classify(&messages[0]),
            Ok(InboxMessageType::PrivateMessage)
        );
        assert_eq!(
            Classifier::new(ConsistencyPolicy::Strict).classify(&messages[0]),
            InboxMessageType::PrivateMessage
        );
    }

    #[test]
    fn parentless_comment_thing_is_subreddit_message() {
        let json = r#"{"kind":"Listing","data":{"children":[
            {"kind":"t1","data":{"subject":"notice","was_comment":true,"subreddit":"rust"}}
        ]}}"#;
        let messages = parse_listing(json).unwrap();
        assert_eq!(messages[0].kind, MessageKind::Thread);
        assert_eq!(
            Classifier::new(ConsistencyPolicy::Strict).classify(&messages[0]),
            InboxMessageType::SubredditMessage
        );
    }

    #[test]
    fn empty_parent_is_absent() {
        let json = r#"{"kind":"Listing","data":{"children":[
            {"kind":"t4","data":{"subject":"x","parent_id":"","subreddit":"rust"}}
        ]}}"#;
        let messages = parse_listing(json).unwrap();
        assert_eq!(messages[0].parent_id, None);
    }

    #[test]
    fn rejects_non_listing() {
        let json = r#"{"kind":"t3","data":{"children":[]}}"#;
        assert!(matches!(
            parse_listing(json),
            Err(Error::UnexpectedListing(_))
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(parse_listing("{not json"), Err(Error::Json(_))));
    }
}
