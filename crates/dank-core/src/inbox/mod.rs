//! Inbox message classification.
//!
//! Reddit's inbox mixes several kinds of items: replies to your comments,
//! replies to your posts, username mentions, messages from subreddits and
//! private messages. The API does not label them, so we infer the type from
//! the message kind, its parent fullname and its subject line.
//!
//! # Example
//!
//! ```
//! use dank_core::inbox::{InboxMessage, InboxMessageType};
//!
//! let reply = InboxMessage::thread("comment reply", Some("t1_c3v7f8u"));
//! assert_eq!(InboxMessageType::parse(&reply), InboxMessageType::CommentReply);
//!
//! let dm = InboxMessage::private("hello there");
//! assert_eq!(InboxMessageType::parse(&dm), InboxMessageType::PrivateMessage);
//! ```

mod classify;
mod listing;
mod model;

pub use classify::{Classifier, InboxSummary, try_classify};
pub use listing::parse_listing;
pub use model::{InboxMessage, InboxMessageType, MessageKind};
