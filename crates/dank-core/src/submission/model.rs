//! Submission data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::vote::VoteDirection;
use crate::error::{Error, Result};
use crate::fullname::FullName;

/// A Reddit submission (link or self post).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Fullname, e.g. `t3_15bfi0`.
    pub name: FullName,
    /// Title as sent by Reddit (HTML-escaped).
    pub title: String,
    /// Author username.
    pub author: String,
    /// Subreddit name without the `r/` prefix.
    pub subreddit: String,
    /// Score as last reported by Reddit.
    pub score: i64,
    /// Number of comments as last reported by Reddit.
    pub comment_count: u64,
    /// Creation time.
    pub created_utc: DateTime<Utc>,
    /// The user's vote as last reported by Reddit.
    pub vote: VoteDirection,
    /// Whether the user has saved this submission.
    pub saved: bool,
}

#[derive(Debug, Deserialize)]
struct RawThing {
    kind: String,
    data: Value,
}

#[derive(Debug, Deserialize)]
struct RawSubmission {
    name: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    subreddit: String,
    #[serde(default)]
    score: i64,
    #[serde(default)]
    num_comments: u64,
    #[serde(default)]
    created_utc: f64,
    #[serde(default)]
    likes: Option<bool>,
    #[serde(default)]
    saved: bool,
}

impl Submission {
    /// Decodes a submission from Reddit JSON.
    ///
    /// Accepts a bare `t3` thing, a `Listing` whose first child is a `t3`, or
    /// the two-listing array returned by the `/comments/<id>` endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] for malformed JSON and
    /// [`Error::UnexpectedListing`] when no submission can be found.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let thing = match value {
            Value::Array(mut listings) if !listings.is_empty() => {
                first_child(serde_json::from_value(listings.swap_remove(0))?)?
            }
            other => {
                let thing: RawThing = serde_json::from_value(other)?;
                if thing.kind == "Listing" {
                    first_child(thing)?
                } else {
                    thing
                }
            }
        };

        if thing.kind != "t3" {
            return Err(Error::UnexpectedListing(format!(
                "expected a t3 submission, got {:?}",
                thing.kind
            )));
        }

        let raw: RawSubmission = serde_json::from_value(thing.data)?;
        Ok(raw.into())
    }
}

fn first_child(listing: RawThing) -> Result<RawThing> {
    if listing.kind != "Listing" {
        return Err(Error::UnexpectedListing(format!(
            "expected kind \"Listing\", got {:?}",
            listing.kind
        )));
    }
    let first = listing
        .data
        .get("children")
        .and_then(Value::as_array)
        .and_then(|children| children.first())
        .cloned()
        .ok_or_else(|| Error::UnexpectedListing("listing has no children".to_string()))?;
    Ok(serde_json::from_value(first)?)
}

impl From<RawSubmission> for Submission {
    #[allow(clippy::cast_possible_truncation)] // Reddit timestamps are whole seconds
    fn from(raw: RawSubmission) -> Self {
        let vote = match raw.likes {
            Some(true) => VoteDirection::Upvote,
            Some(false) => VoteDirection::Downvote,
            None => VoteDirection::None,
        };
        Self {
            name: FullName::new(raw.name),
            title: raw.title,
            author: raw.author,
            subreddit: raw.subreddit,
            score: raw.score,
            comment_count: raw.num_comments,
            created_utc: DateTime::from_timestamp(raw.created_utc as i64, 0).unwrap_or_default(),
            vote,
            saved: raw.saved,
        }
    }
}

/// The thread a reply is posted into, used to look up pending replies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParentThread(FullName);

impl ParentThread {
    /// Thread rooted at the given submission.
    #[must_use]
    pub fn of(submission: &Submission) -> Self {
        Self(submission.name.clone())
    }

    /// Fullname of the root submission.
    #[must_use]
    pub const fn fullname(&self) -> &FullName {
        &self.0
    }
}
