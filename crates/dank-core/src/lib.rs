//! # dank-core
//!
//! Core logic for the Dank Reddit client.
//!
//! This crate provides:
//! - **Inbox classification** - sort inbox messages into comment replies,
//!   username mentions, post replies, subreddit messages and private messages
//! - **Fullname decoding** - recognise what a Reddit `t*_` identifier points at
//! - **Submission header state** - title line, byline and swipe actions shown
//!   above a comment list
//! - **List diff callbacks** - item/content comparison adapters for list
//!   differs
//! - **Settings** - user-tunable behaviour such as the consistency policy

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod config;
pub mod consistency;
pub mod diff;
mod error;
pub mod fullname;
pub mod inbox;
pub mod submission;

pub use config::Settings;
pub use consistency::ConsistencyPolicy;
pub use diff::{ItemDiffer, KeyedDiffer, ListDiff};
pub use error::{ConsistencyError, Error, Result};
pub use fullname::{FullName, FullNameType};
pub use inbox::{
    Classifier, InboxMessage, InboxMessageType, InboxSummary, MessageKind, parse_listing,
    try_classify,
};
pub use submission::{
    ParentThread, PendingVotes, StandardSwipeActions, Submission, SubmissionHeader, SwipeAction,
    SwipeActionsProvider, VoteDirection, VoteStateProvider,
};
