//! Inbox data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::fullname::FullNameType;

/// How a message was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// A direct message between users.
    Private,
    /// A notification tied to a subreddit thread or the subreddit itself.
    Thread,
}

/// A message as it appears in the user's inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboxMessage {
    /// Delivery kind.
    pub kind: MessageKind,
    /// Subject line.
    pub subject: String,
    /// Fullname of the thing this message replies to or is about.
    pub parent_id: Option<String>,
    /// Fullname of the message itself.
    pub name: Option<String>,
    /// Author username, absent for system messages.
    pub author: Option<String>,
    /// Subreddit the message originates from.
    pub subreddit: Option<String>,
    /// Markdown body.
    pub body: String,
    /// Creation time.
    pub created_utc: Option<DateTime<Utc>>,
    /// Whether the message is still unread.
    pub unread: bool,
}

impl InboxMessage {
    /// Creates a private message with the given subject.
    #[must_use]
    pub fn private(subject: &str) -> Self {
        Self::new(MessageKind::Private, subject, None)
    }

    /// Creates a thread notification with the given subject and parent.
    #[must_use]
    pub fn thread(subject: &str, parent_id: Option<&str>) -> Self {
        Self::new(MessageKind::Thread, subject, parent_id)
    }

    fn new(kind: MessageKind, subject: &str, parent_id: Option<&str>) -> Self {
        Self {
            kind,
            subject: subject.to_string(),
            parent_id: parent_id.map(ToString::to_string),
            name: None,
            author: None,
            subreddit: None,
            body: String::new(),
            created_utc: None,
            unread: false,
        }
    }

    /// Sets the parent fullname.
    #[must_use]
    pub fn with_parent(mut self, parent_id: &str) -> Self {
        self.parent_id = Some(parent_id.to_string());
        self
    }

    /// Check if this message was delivered privately.
    #[must_use]
    pub const fn is_private_message(&self) -> bool {
        matches!(self.kind, MessageKind::Private)
    }

    /// Decoded kind of the parent fullname, if there is one.
    #[must_use]
    pub fn parent_kind(&self) -> Option<FullNameType> {
        self.parent_id.as_deref().map(FullNameType::parse)
    }
}

/// Category an inbox message is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InboxMessageType {
    /// Someone replied to one of your comments.
    CommentReply,
    /// Someone mentioned `/u/you`.
    UsernameMention,
    /// Someone commented on one of your submissions.
    PostReply,
    /// A message sent by or on behalf of a subreddit.
    SubredditMessage,
    /// A direct message.
    PrivateMessage,
    /// Award notifications and anything we cannot place.
    Unknown,
}

impl InboxMessageType {
    /// All types in display order.
    pub const ALL: [Self; 6] = [
        Self::CommentReply,
        Self::UsernameMention,
        Self::PostReply,
        Self::SubredditMessage,
        Self::PrivateMessage,
        Self::Unknown,
    ];

    /// Parse from string representation.
    #[must_use]
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "comment_reply" => Some(Self::CommentReply),
            "username_mention" => Some(Self::UsernameMention),
            "post_reply" => Some(Self::PostReply),
            "subreddit_message" => Some(Self::SubredditMessage),
            "private_message" => Some(Self::PrivateMessage),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CommentReply => "comment_reply",
            Self::UsernameMention => "username_mention",
            Self::PostReply => "post_reply",
            Self::SubredditMessage => "subreddit_message",
            Self::PrivateMessage => "private_message",
            Self::Unknown => "unknown",
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::CommentReply => "Comment reply",
            Self::UsernameMention => "Username mention",
            Self::PostReply => "Post reply",
            Self::SubredditMessage => "Subreddit message",
            Self::PrivateMessage => "Private message",
            Self::Unknown => "Other",
        }
    }
}

impl std::fmt::Display for InboxMessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for InboxMessageType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown inbox message type: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_type_roundtrip() {
        for ty in InboxMessageType::ALL {
            assert_eq!(InboxMessageType::from_name(ty.as_str()), Some(ty));
        }
        assert_eq!(InboxMessageType::from_name("nope"), None);
    }

    #[test]
    fn test_constructors() {
        let dm = InboxMessage::private("hi");
        assert!(dm.is_private_message());
        assert_eq!(dm.parent_id, None);

        let reply = InboxMessage::thread("post reply", Some("t3_abc"));
        assert!(!reply.is_private_message());
        assert_eq!(reply.parent_kind(), Some(FullNameType::Submission));
    }

    #[test]
    fn test_with_parent() {
        let dm = InboxMessage::private("re: hi").with_parent("t4_xyz");
        assert_eq!(dm.parent_kind(), Some(FullNameType::Message));
    }
}
