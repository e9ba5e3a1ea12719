//! Submission header shown above a comment list.
//!
//! This module computes *what* the header shows, not how it is drawn:
//! - title line with the vote-adjusted score
//! - byline with subreddit, author, age and comment count (including replies
//!   still waiting to sync)
//! - the swipe actions offered on the header
//!
//! Pending votes and swipe actions come from collaborators behind the
//! [`VoteStateProvider`] and [`SwipeActionsProvider`] traits.

mod format;
mod header;
mod model;
mod vote;

pub use format::{abbreviate_score, relative_timestamp, unescape_html};
pub use header::{StandardSwipeActions, SubmissionHeader, SwipeAction, SwipeActionsProvider};
pub use model::{ParentThread, Submission};
pub use vote::{PendingVotes, VoteDirection, VoteStateProvider};
