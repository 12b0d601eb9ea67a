//! Content types — posts as they appear in the feed, and creator profiles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Creator ─────────────────────────────────────────────────────────────────

/// The creator of a post, as embedded in the post payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
  pub id:       Uuid,
  pub username: String,
}

// ─── Media ───────────────────────────────────────────────────────────────────

/// Whether a post's media URL points at a photo or a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
  Image,
  Video,
}

// ─── Post ────────────────────────────────────────────────────────────────────

/// One uploaded photo or video post — the unit to which ratings and
/// comments attach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
  pub id:          Uuid,
  pub creator:     Creator,
  pub title:       String,
  #[serde(default)]
  pub caption:     Option<String>,
  pub media_url:   String,
  pub media_kind:  MediaKind,
  /// Human-readable place name, if the creator attached one.
  #[serde(default)]
  pub location:    Option<String>,
  /// Other users tagged in the post.
  #[serde(default)]
  pub people:      Vec<Creator>,
  pub uploaded_at: DateTime<Utc>,
}

/// Owner-side metadata edit. Media itself is immutable after upload; only
/// the title and caption can change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title:   Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub caption: Option<String>,
}

// ─── Profile ─────────────────────────────────────────────────────────────────

/// A user's public profile page data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
  pub id:        Uuid,
  pub username:  String,
  #[serde(default)]
  pub bio:       Option<String>,
  pub joined_at: DateTime<Utc>,
}
