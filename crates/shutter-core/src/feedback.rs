//! Feedback types — the rating aggregate and paginated comment thread
//! attached to a single content item.
//!
//! All of these are read-only views of server truth: the client never
//! computes averages or counts itself, it replaces them wholesale from the
//! most recent fetch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Comments are fetched in fixed-size pages of five, numbered from 1.
pub const PAGE_SIZE: u32 = 5;

/// Soft input cap for comment text. A UX hint only — the server is the
/// authority and longer text is not rejected client-side.
pub const COMMENT_SOFT_CAP: usize = 500;

// ─── Rating ──────────────────────────────────────────────────────────────────

/// A discrete star rating, always one of the five levels 1–5.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
  pub fn new(level: u8) -> Result<Self> {
    if (1..=5).contains(&level) {
      Ok(Self(level))
    } else {
      Err(Error::Validation(format!(
        "rating must be between 1 and 5, got {level}"
      )))
    }
  }

  pub fn level(self) -> u8 {
    self.0
  }
}

impl TryFrom<u8> for Rating {
  type Error = Error;

  fn try_from(level: u8) -> Result<Self> {
    Self::new(level)
  }
}

impl From<Rating> for u8 {
  fn from(r: Rating) -> Self {
    r.0
  }
}

impl std::fmt::Display for Rating {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

// ─── Comments ────────────────────────────────────────────────────────────────

/// The author of a comment, as embedded in the comment payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentAuthor {
  pub id:       Uuid,
  pub username: String,
}

/// One comment on a content item. Immutable server truth; the only
/// client-side operation is deletion by its author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
  pub id:            Uuid,
  pub author:        CommentAuthor,
  /// The author's own rating of the item at the time they commented, shown
  /// alongside the text. Absent if they had not rated.
  pub author_rating: Option<Rating>,
  pub text:          String,
  pub posted_at:     DateTime<Utc>,
}

// ─── Pagination ──────────────────────────────────────────────────────────────

/// Pagination metadata, authoritative only as of the most recent fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
  /// Always ≥ 1, even for an item with no comments.
  pub total_pages:    u32,
  pub total_comments: u64,
}

impl Default for PageInfo {
  fn default() -> Self {
    Self { total_pages: 1, total_comments: 0 }
  }
}

// ─── Feedback page ───────────────────────────────────────────────────────────

/// One server response for a (content item, page) pair: the rating
/// aggregate plus exactly one page of comments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackPage {
  /// Server-computed mean of all ratings for the item.
  pub average_rating: f64,
  pub ratings_count:  u64,
  /// The caller's own rating. Only present when the fetch was
  /// authenticated; anonymous reads always see `None`.
  #[serde(default)]
  pub user_rating:    Option<Rating>,
  /// Exactly one server page, in server order (newest first). Never
  /// re-sorted or merged client-side.
  pub comments:       Vec<Comment>,
  pub pagination:     PageInfo,
}
