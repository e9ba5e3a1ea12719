//! Votes and pending-vote state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::model::Submission;
use crate::fullname::FullName;

/// Direction of a user's vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    /// Upvoted.
    Upvote,
    /// Downvoted.
    Downvote,
    /// Not voted.
    #[default]
    None,
}

impl VoteDirection {
    /// Contribution of this vote to a score.
    #[must_use]
    pub const fn delta(self) -> i64 {
        match self {
            Self::Upvote => 1,
            Self::Downvote => -1,
            Self::None => 0,
        }
    }
}

/// Source of vote state that may be ahead of what Reddit last reported.
pub trait VoteStateProvider {
    /// The user's vote on `submission`, preferring a vote not yet synced.
    fn pending_or_default_vote(&self, submission: &Submission) -> VoteDirection;

    /// `submission`'s score with any pending vote applied.
    fn score_after_pending_vote(&self, submission: &Submission) -> i64 {
        let pending = self.pending_or_default_vote(submission);
        submission
            .score
            .saturating_sub(submission.vote.delta())
            .saturating_add(pending.delta())
    }
}

/// In-memory record of votes cast locally but not yet synced.
#[derive(Debug, Clone, Default)]
pub struct PendingVotes {
    votes: HashMap<FullName, VoteDirection>,
}

impl PendingVotes {
    /// Creates an empty set of pending votes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a vote for the thing with the given fullname.
    pub fn record(&mut self, name: FullName, direction: VoteDirection) {
        self.votes.insert(name, direction);
    }

    /// Forgets a pending vote once it has been synced.
    pub fn clear(&mut self, name: &FullName) -> Option<VoteDirection> {
        self.votes.remove(name)
    }

    /// Number of votes waiting to sync.
    #[must_use]
    pub fn len(&self) -> usize {
        self.votes.len()
    }

    /// Check if nothing is waiting to sync.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }
}

impl VoteStateProvider for PendingVotes {
    fn pending_or_default_vote(&self, submission: &Submission) -> VoteDirection {
        self.votes
            .get(&submission.name)
            .copied()
            .unwrap_or(submission.vote)
    }
}
