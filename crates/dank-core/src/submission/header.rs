//! Header view state.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::format::{abbreviate_score, relative_timestamp, unescape_html};
use super::model::{ParentThread, Submission};
use super::vote::{VoteDirection, VoteStateProvider};

/// An action revealed by swiping the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeAction {
    /// Open the options menu.
    Options,
    /// Save the submission.
    Save,
    /// Unsave a saved submission.
    Unsave,
    /// Toggle an upvote.
    Upvote,
    /// Toggle a downvote.
    Downvote,
}

/// Supplies the swipe actions available for a submission.
pub trait SwipeActionsProvider {
    /// Actions to offer, in display order.
    fn swipe_actions(&self, submission: &Submission) -> Vec<SwipeAction>;
}

/// Options and save on one side, votes on the other.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardSwipeActions;

impl SwipeActionsProvider for StandardSwipeActions {
    fn swipe_actions(&self, submission: &Submission) -> Vec<SwipeAction> {
        let save = if submission.saved {
            SwipeAction::Unsave
        } else {
            SwipeAction::Save
        };
        vec![
            SwipeAction::Options,
            save,
            SwipeAction::Downvote,
            SwipeAction::Upvote,
        ]
    }
}

/// Everything the header displays for one submission.
///
/// Built once per bind; the byline is rebuilt with
/// [`SubmissionHeader::with_pending_replies`] whenever a new pending-reply
/// count arrives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionHeader {
    /// Vote the score should be tinted with.
    pub vote: VoteDirection,
    /// Abbreviated, vote-adjusted score.
    pub score: String,
    /// Score followed by the unescaped title.
    pub title_line: String,
    /// Subreddit, author, age and comment count.
    pub byline: String,
    /// Swipe actions offered on the header.
    pub swipe_actions: Vec<SwipeAction>,
    /// Replies posted locally that have not synced yet.
    pub pending_replies: usize,
    #[serde(skip)]
    parent_thread: ParentThread,
    #[serde(skip)]
    subreddit: String,
    #[serde(skip)]
    author: String,
    #[serde(skip)]
    age: String,
    #[serde(skip)]
    comment_count: u64,
}

impl SubmissionHeader {
    /// Binds a submission, starting with zero pending replies.
    #[must_use]
    pub fn bind(
        submission: &Submission,
        votes: &impl VoteStateProvider,
        swipe_actions: &impl SwipeActionsProvider,
        now: DateTime<Utc>,
    ) -> Self {
        let vote = votes.pending_or_default_vote(submission);
        let score = abbreviate_score(votes.score_after_pending_vote(submission));
        let title_line = format!("{score}  {}", unescape_html(&submission.title));

        let mut header = Self {
            vote,
            score,
            title_line,
            byline: String::new(),
            swipe_actions: swipe_actions.swipe_actions(submission),
            pending_replies: 0,
            parent_thread: ParentThread::of(submission),
            subreddit: submission.subreddit.clone(),
            author: submission.author.clone(),
            age: relative_timestamp(submission.created_utc, now),
            comment_count: submission.comment_count,
        };
        header.byline = header.render_byline();
        header
    }

    /// Returns the header with the byline recounted for `pending_replies`.
    #[must_use]
    pub fn with_pending_replies(mut self, pending_replies: usize) -> Self {
        self.pending_replies = pending_replies;
        self.byline = self.render_byline();
        self
    }

    /// Thread whose pending replies feed [`Self::with_pending_replies`].
    #[must_use]
    pub const fn parent_thread(&self) -> &ParentThread {
        &self.parent_thread
    }

    fn render_byline(&self) -> String {
        let comments = i64::try_from(self.comment_count)
            .unwrap_or(i64::MAX)
            .saturating_add(i64::try_from(self.pending_replies).unwrap_or(i64::MAX));
        format!(
            "r/{} · u/{} · {} · {} comments",
            self.subreddit,
            self.author,
            self.age,
            abbreviate_score(comments)
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::fullname::FullName;
    use crate::submission::vote::PendingVotes;

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default()
    }

    fn submission() -> Submission {
        Submission {
            name: FullName::new("t3_15bfi0"),
            title: "Rust &amp; Android".to_string(),
            author: "saket".to_string(),
            subreddit: "androiddev".to_string(),
            score: 1523,
            comment_count: 87,
            created_utc: now() - Duration::hours(3),
            vote: VoteDirection::None,
            saved: false,
        }
    }

    #[test]
    fn title_line_has_score_and_unescaped_title() {
        let header =
            SubmissionHeader::bind(&submission(), &PendingVotes::new(), &StandardSwipeActions, now());
        assert_eq!(header.vote, VoteDirection::None);
        assert_eq!(header.score, "1.5k");
        assert_eq!(header.title_line, "1.5k  Rust & Android");
    }

    #[test]
    fn byline_starts_with_zero_pending_replies() {
        let header =
            SubmissionHeader::bind(&submission(), &PendingVotes::new(), &StandardSwipeActions, now());
        assert_eq!(header.pending_replies, 0);
        assert_eq!(header.byline, "r/androiddev · u/saket · 3h ago · 87 comments");
    }

    #[test]
    fn pending_replies_are_added_to_comment_count() {
        let header =
            SubmissionHeader::bind(&submission(), &PendingVotes::new(), &StandardSwipeActions, now())
                .with_pending_replies(2);
        assert_eq!(header.byline, "r/androiddev · u/saket · 3h ago · 89 comments");

        let header = header.with_pending_replies(0);
        assert_eq!(header.byline, "r/androiddev · u/saket · 3h ago · 87 comments");
    }

    #[test]
    fn pending_vote_tints_and_adjusts_score() {
        let mut votes = PendingVotes::new();
        let mut s = submission();
        s.score = 999;
        votes.record(s.name.clone(), VoteDirection::Upvote);

        let header = SubmissionHeader::bind(&s, &votes, &StandardSwipeActions, now());
        assert_eq!(header.vote, VoteDirection::Upvote);
        assert_eq!(header.score, "1.0k");
    }

    #[test]
    fn swipe_actions_follow_saved_state() {
        let mut s = submission();
        let header = SubmissionHeader::bind(&s, &PendingVotes::new(), &StandardSwipeActions, now());
        assert!(header.swipe_actions.contains(&SwipeAction::Save));

        s.saved = true;
        let header = SubmissionHeader::bind(&s, &PendingVotes::new(), &StandardSwipeActions, now());
        assert!(header.swipe_actions.contains(&SwipeAction::Unsave));
        assert!(!header.swipe_actions.contains(&SwipeAction::Save));
    }

    #[test]
    fn parent_thread_matches_submission() {
        let s = submission();
        let header = SubmissionHeader::bind(&s, &PendingVotes::new(), &StandardSwipeActions, now());
        assert_eq!(header.parent_thread(), &ParentThread::of(&s));
    }
}
