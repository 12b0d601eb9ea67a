//! The transport traits and supporting types.
//!
//! Implemented by the HTTP layer in `shutter-client`; the feedback store
//! and the feed browser depend on these abstractions, not on any concrete
//! transport, so tests can substitute an in-memory stub.
//!
//! Credential transport is a per-call bearer token: `Option<&str>` on the
//! read paths (anonymous access is allowed there) and `&str` on the write
//! paths (callers reject missing credentials before the call is issued).

use std::future::Future;

use uuid::Uuid;

use crate::{
  Result,
  content::{Post, PostPatch, Profile},
  feedback::{FeedbackPage, Rating},
};

// ─── Feedback ────────────────────────────────────────────────────────────────

/// Remote operations on one content item's ratings and comments.
///
/// All methods return `Send` futures so implementations can be driven from
/// multi-threaded async runtimes.
pub trait FeedbackApi: Send + Sync {
  /// Fetch the rating aggregate and one page of comments. `user_rating`
  /// in the response is only populated when a token is supplied.
  fn fetch_feedback<'a>(
    &'a self,
    content_id: Uuid,
    page: u32,
    limit: u32,
    token: Option<&'a str>,
  ) -> impl Future<Output = Result<FeedbackPage>> + Send + 'a;

  /// Submit (or overwrite — the server upserts per user and item) the
  /// caller's rating.
  fn submit_rating<'a>(
    &'a self,
    content_id: Uuid,
    rating: Rating,
    token: &'a str,
  ) -> impl Future<Output = Result<()>> + Send + 'a;

  fn submit_comment<'a>(
    &'a self,
    content_id: Uuid,
    text: &'a str,
    token: &'a str,
  ) -> impl Future<Output = Result<()>> + Send + 'a;

  /// Delete a comment. The server enforces that only the author may do
  /// this; a rejection surfaces as [`crate::Error::Forbidden`].
  fn delete_comment<'a>(
    &'a self,
    comment_id: Uuid,
    token: &'a str,
  ) -> impl Future<Output = Result<()>> + Send + 'a;
}

// ─── Content ─────────────────────────────────────────────────────────────────

/// Remote operations on the feed, profiles, and the caller's own posts.
pub trait ContentApi: Send + Sync {
  /// The shared feed, in server order.
  fn list_feed<'a>(
    &'a self,
    token: Option<&'a str>,
  ) -> impl Future<Output = Result<Vec<Post>>> + Send + 'a;

  /// Feed entries whose title matches `title`.
  fn search_feed<'a>(
    &'a self,
    title: &'a str,
    token: Option<&'a str>,
  ) -> impl Future<Output = Result<Vec<Post>>> + Send + 'a;

  fn get_profile<'a>(
    &'a self,
    user_id: Uuid,
    token: Option<&'a str>,
  ) -> impl Future<Output = Result<Profile>> + Send + 'a;

  fn list_user_posts<'a>(
    &'a self,
    user_id: Uuid,
    token: Option<&'a str>,
  ) -> impl Future<Output = Result<Vec<Post>>> + Send + 'a;

  /// Edit the title/caption of one of the caller's own posts.
  fn update_post<'a>(
    &'a self,
    post_id: Uuid,
    patch: &'a PostPatch,
    token: &'a str,
  ) -> impl Future<Output = Result<Post>> + Send + 'a;

  /// Delete one of the caller's own posts.
  fn delete_post<'a>(
    &'a self,
    post_id: Uuid,
    token: &'a str,
  ) -> impl Future<Output = Result<()>> + Send + 'a;
}
