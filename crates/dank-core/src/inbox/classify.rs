//! Classification rules.

use serde::Serialize;
use tracing::debug;

use super::model::{InboxMessage, InboxMessageType};
use crate::consistency::ConsistencyPolicy;
use crate::error::ConsistencyError;
use crate::fullname::FullNameType;

const USERNAME_MENTION_SUBJECT: &str = "username mention";
const COMMENT_REPLY_SUBJECT: &str = "comment reply";
const POST_REPLY_SUBJECT: &str = "post reply";

/// Classifies a message, reporting consistency violations as errors.
///
/// Rules, in order of precedence:
/// 1. private messages are [`InboxMessageType::PrivateMessage`]
/// 2. no parent means [`InboxMessageType::SubredditMessage`]
/// 3. a "username mention" subject (any case) is a mention
/// 4. otherwise the parent's fullname kind decides
///
/// # Errors
///
/// [`ConsistencyError::DataInconsistency`] when a comment or submission
/// parent comes with an unexpected subject, and
/// [`ConsistencyError::UnreachableState`] when a non-private message has a
/// message parent.
pub fn try_classify(message: &InboxMessage) -> Result<InboxMessageType, ConsistencyError> {
    if message.is_private_message() {
        return Ok(InboxMessageType::PrivateMessage);
    }

    let Some(parent_id) = message.parent_id.as_deref() else {
        return Ok(InboxMessageType::SubredditMessage);
    };

    if message.subject.eq_ignore_ascii_case(USERNAME_MENTION_SUBJECT) {
        return Ok(InboxMessageType::UsernameMention);
    }

    let parent_kind = FullNameType::parse(parent_id);
    match parent_kind {
        FullNameType::Comment => expect_subject(
            message,
            parent_kind,
            COMMENT_REPLY_SUBJECT,
            InboxMessageType::CommentReply,
        ),
        FullNameType::Submission => expect_subject(
            message,
            parent_kind,
            POST_REPLY_SUBJECT,
            InboxMessageType::PostReply,
        ),
        // Only private messages are expected to have message parents.
        FullNameType::Message => Err(ConsistencyError::UnreachableState {
            parent_id: parent_id.to_string(),
        }),
        FullNameType::Subreddit | FullNameType::Award | FullNameType::Unknown => {
            Ok(InboxMessageType::Unknown)
        }
    }
}

fn expect_subject(
    message: &InboxMessage,
    parent_kind: FullNameType,
    expected: &'static str,
    classified_as: InboxMessageType,
) -> Result<InboxMessageType, ConsistencyError> {
    if message.subject == expected {
        Ok(classified_as)
    } else {
        Err(ConsistencyError::DataInconsistency {
            parent_kind,
            expected,
            actual: message.subject.clone(),
            classified_as,
        })
    }
}

/// Inbox classifier with a configurable [`ConsistencyPolicy`].
///
/// Stateless and `Copy`; share it freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classifier {
    policy: ConsistencyPolicy,
}

impl Classifier {
    /// Creates a classifier with the given policy.
    #[must_use]
    pub const fn new(policy: ConsistencyPolicy) -> Self {
        Self { policy }
    }

    /// Returns the policy in use.
    #[must_use]
    pub const fn policy(&self) -> ConsistencyPolicy {
        self.policy
    }

    /// Classifies a single message.
    ///
    /// # Panics
    ///
    /// Panics on a consistency violation when the policy is
    /// [`ConsistencyPolicy::Strict`]. Under [`ConsistencyPolicy::Lenient`] the
    /// violation is logged and the designated type (or
    /// [`InboxMessageType::Unknown`]) is returned instead.
    #[must_use]
    pub fn classify(&self, message: &InboxMessage) -> InboxMessageType {
        let ty = self
            .policy
            .resolve(try_classify(message), ConsistencyError::fallback);
        debug!(name = ?message.name, kind = %ty, "Classified inbox message");
        ty
    }

    /// Classifies every message, preserving order.
    #[must_use]
    pub fn classify_all(&self, messages: &[InboxMessage]) -> Vec<InboxMessageType> {
        messages.iter().map(|m| self.classify(m)).collect()
    }

    /// Classifies every message and tallies the result.
    #[must_use]
    pub fn summarize(&self, messages: &[InboxMessage]) -> InboxSummary {
        let mut summary = InboxSummary::default();
        for message in messages {
            summary.record(self.classify(message), message.unread);
        }
        summary
    }
}

impl InboxMessageType {
    /// Classifies a message using the build-default policy.
    ///
    /// # Panics
    ///
    /// Panics on a consistency violation in builds with debug assertions.
    #[must_use]
    pub fn parse(message: &InboxMessage) -> Self {
        Classifier::default().classify(message)
    }
}

/// Per-type message counts for an inbox.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InboxSummary {
    /// Comment replies.
    pub comment_replies: usize,
    /// Username mentions.
    pub username_mentions: usize,
    /// Post replies.
    pub post_replies: usize,
    /// Subreddit messages.
    pub subreddit_messages: usize,
    /// Private messages.
    pub private_messages: usize,
    /// Everything else.
    pub unknown: usize,
    /// Messages still marked unread, across all types.
    pub unread: usize,
}

impl InboxSummary {
    /// Builds a summary from types already computed for `messages`.
    ///
    /// Pairs are taken in order; extra entries on either side are ignored.
    #[must_use]
    pub fn from_classified(messages: &[InboxMessage], types: &[InboxMessageType]) -> Self {
        let mut summary = Self::default();
        for (message, ty) in messages.iter().zip(types) {
            summary.record(*ty, message.unread);
        }
        summary
    }

    /// Counts one message of type `ty`.
    pub fn record(&mut self, ty: InboxMessageType, unread: bool) {
        let slot = match ty {
            InboxMessageType::CommentReply => &mut self.comment_replies,
            InboxMessageType::UsernameMention => &mut self.username_mentions,
            InboxMessageType::PostReply => &mut self.post_replies,
            InboxMessageType::SubredditMessage => &mut self.subreddit_messages,
            InboxMessageType::PrivateMessage => &mut self.private_messages,
            InboxMessageType::Unknown => &mut self.unknown,
        };
        *slot += 1;
        if unread {
            self.unread += 1;
        }
    }

    /// Count for a single type.
    #[must_use]
    pub const fn count(&self, ty: InboxMessageType) -> usize {
        match ty {
            InboxMessageType::CommentReply => self.comment_replies,
            InboxMessageType::UsernameMention => self.username_mentions,
            InboxMessageType::PostReply => self.post_replies,
            InboxMessageType::SubredditMessage => self.subreddit_messages,
            InboxMessageType::PrivateMessage => self.private_messages,
            InboxMessageType::Unknown => self.unknown,
        }
    }

    /// Total number of messages recorded.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.comment_replies
            + self.username_mentions
            + self.post_replies
            + self.subreddit_messages
            + self.private_messages
            + self.unknown
    }
}
