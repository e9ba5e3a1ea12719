//! Reddit fullnames.
//!
//! Every Reddit object is addressed by a fullname of the form
//! `<type prefix>_<base36 id>`, e.g. `t1_c3v7f8u` for a comment. The prefix
//! tells us what kind of object the id points at.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a fullname refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FullNameType {
    /// `t1`: a comment.
    Comment,
    /// `t3`: a submission (link or self post).
    Submission,
    /// `t4`: a private message.
    Message,
    /// `t5`: a subreddit.
    Subreddit,
    /// `t6`: an award.
    Award,
    /// Anything else, including accounts (`t2`) and malformed ids.
    Unknown,
}

impl FullNameType {
    /// Decodes the kind of a raw fullname.
    ///
    /// Never fails: unrecognised prefixes, a missing `_` separator or an empty
    /// id all decode to [`FullNameType::Unknown`].
    #[must_use]
    pub fn parse(fullname: &str) -> Self {
        match fullname.split_once('_') {
            Some((prefix, id)) if !id.is_empty() => Self::from_prefix(prefix),
            _ => Self::Unknown,
        }
    }

    /// Maps a type prefix (`t1`, `t3`, ...) to its kind.
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Self {
        match prefix {
            "t1" => Self::Comment,
            "t3" => Self::Submission,
            "t4" => Self::Message,
            "t5" => Self::Subreddit,
            "t6" => Self::Award,
            _ => Self::Unknown,
        }
    }

    /// Returns the type prefix, or `None` for [`FullNameType::Unknown`].
    #[must_use]
    pub const fn prefix(self) -> Option<&'static str> {
        match self {
            Self::Comment => Some("t1"),
            Self::Submission => Some("t3"),
            Self::Message => Some("t4"),
            Self::Subreddit => Some("t5"),
            Self::Award => Some("t6"),
            Self::Unknown => None,
        }
    }

    /// Lowercase name used in logs and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::Submission => "submission",
            Self::Message => "message",
            Self::Subreddit => "subreddit",
            Self::Award => "award",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FullNameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Reddit fullname such as `t3_15bfi0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FullName(String);

impl FullName {
    /// Wraps a raw fullname. The value is not validated.
    #[must_use]
    pub fn new(fullname: impl Into<String>) -> Self {
        Self(fullname.into())
    }

    /// Builds a fullname from a kind and a bare id.
    ///
    /// Returns `None` for [`FullNameType::Unknown`], which has no prefix.
    #[must_use]
    pub fn from_parts(kind: FullNameType, id: &str) -> Option<Self> {
        kind.prefix().map(|prefix| Self(format!("{prefix}_{id}")))
    }

    /// Returns the kind this fullname refers to.
    #[must_use]
    pub fn kind(&self) -> FullNameType {
        FullNameType::parse(&self.0)
    }

    /// Returns the id without its type prefix.
    #[must_use]
    pub fn id(&self) -> &str {
        self.0.split_once('_').map_or(self.0.as_str(), |(_, id)| id)
    }

    /// Returns the fullname as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
