//! The paginated feedback store — per-content-item rating and comment
//! state.
//!
//! One [`FeedbackStore`] is created per content item on screen and
//! discarded when the item leaves it; nothing is persisted. The store is
//! the single source of truth for that item's aggregate rating and the
//! page of comments being viewed, and it mediates every read and write
//! against the remote API.
//!
//! Two rules shape everything here:
//!
//! - **Refetch after every mutation.** Ratings averages and comment counts
//!   are server-computed; the store never patches them locally. Each
//!   successful mutation delegates back to [`FeedbackStore::load`] for the
//!   page being viewed.
//! - **The last `load` issued wins.** Rapid page changes can leave several
//!   fetches in flight; completions carry the issue number they were
//!   started with and are discarded if a newer load has been issued since,
//!   so a stale page can never overwrite a fresher one.

use std::sync::{
  Mutex,
  atomic::{AtomicU64, Ordering},
};

use tracing::{debug, warn};
use uuid::Uuid;

use shutter_core::{
  Error, Result,
  api::FeedbackApi,
  feedback::{Comment, PAGE_SIZE, PageInfo, Rating},
  session::Session,
};

// ─── Snapshot ────────────────────────────────────────────────────────────────

/// Where the store is in its fetch cycle. Re-entered on every `load`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
  Idle,
  Loading(u32),
  Loaded,
  Errored,
}

/// A renderable snapshot of the store. Everything except `comment_draft`,
/// `phase`, and `last_error` mirrors the most recent successful server
/// response.
#[derive(Debug, Clone)]
pub struct FeedbackState {
  pub average_rating: f64,
  pub ratings_count:  u64,
  /// The caller's own rating; absent when anonymous or not yet rated.
  pub user_rating:    Option<Rating>,
  /// Exactly the page recorded in `current_page`, in server order.
  pub comments:       Vec<Comment>,
  /// 1-based page being displayed.
  pub current_page:   u32,
  pub pagination:     PageInfo,
  /// Local-only scratch text; cleared on successful submission.
  pub comment_draft:  String,
  pub phase:          Phase,
  /// Human-readable message for the most recent failure, if any.
  pub last_error:     Option<String>,
}

impl Default for FeedbackState {
  fn default() -> Self {
    Self {
      average_rating: 0.0,
      ratings_count:  0,
      user_rating:    None,
      comments:       Vec::new(),
      current_page:   1,
      pagination:     PageInfo::default(),
      comment_draft:  String::new(),
      phase:          Phase::Idle,
      last_error:     None,
    }
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// Rating/comment state for a single content item.
pub struct FeedbackStore<A> {
  api:        A,
  session:    Session,
  content_id: Uuid,
  state:      Mutex<FeedbackState>,
  /// Issue number of the most recently started `load`. A completion whose
  /// number no longer matches is stale and gets discarded.
  issued:     AtomicU64,
}

impl<A: FeedbackApi> FeedbackStore<A> {
  /// A store in the `Idle` phase; call [`FeedbackStore::load`] to populate
  /// it. Most callers want [`FeedbackStore::open`] instead.
  pub fn new(api: A, session: Session, content_id: Uuid) -> Self {
    Self {
      api,
      session,
      content_id,
      state: Mutex::new(FeedbackState::default()),
      issued: AtomicU64::new(0),
    }
  }

  /// Create the store for an item coming on screen and fetch page 1. A
  /// failed initial fetch is recorded in the state rather than propagated,
  /// so the surface still has something to render.
  pub async fn open(api: A, session: Session, content_id: Uuid) -> Self {
    let store = Self::new(api, session, content_id);
    if let Err(e) = store.load(1).await {
      warn!(%content_id, error = %e, "initial feedback load failed");
    }
    store
  }

  pub fn content_id(&self) -> Uuid {
    self.content_id
  }

  /// Clone of the current state, for rendering.
  pub fn snapshot(&self) -> FeedbackState {
    self.lock().clone()
  }

  /// Stage comment text typed by the user.
  pub fn set_draft(&self, text: impl Into<String>) {
    self.lock().comment_draft = text.into();
  }

  // ── Load ──────────────────────────────────────────────────────────────────

  /// Fetch ratings and comments for `page` and replace the snapshot
  /// wholesale. Authenticated when the session holds a token, anonymous
  /// otherwise. On failure the previous counters and comment list are left
  /// untouched; only the error message (and phase) change.
  ///
  /// This is the sole re-entry point after every mutation.
  pub async fn load(&self, page: u32) -> Result<()> {
    if page < 1 {
      return Err(self.record(Error::Validation(
        "page numbers start at 1".into(),
      )));
    }

    let issue = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
    self.lock().phase = Phase::Loading(page);

    let token = self.session.token();
    let fetched = self
      .api
      .fetch_feedback(self.content_id, page, PAGE_SIZE, token.as_deref())
      .await;

    let mut st = self.lock();
    if self.issued.load(Ordering::SeqCst) != issue {
      // A newer load was issued while this one was in flight.
      debug!(page, "discarding superseded feedback load");
      return Ok(());
    }

    match fetched {
      Ok(feedback) => {
        st.average_rating = feedback.average_rating;
        st.ratings_count = feedback.ratings_count;
        st.user_rating = feedback.user_rating;
        st.comments = feedback.comments;
        st.pagination = feedback.pagination;
        st.current_page = page;
        st.phase = Phase::Loaded;
        st.last_error = None;
        Ok(())
      }
      Err(e) => {
        st.phase = Phase::Errored;
        drop(st);
        Err(self.absorb(e))
      }
    }
  }

  /// Navigate to `new_page`. Out-of-range requests are ignored, with no
  /// state change and no network call, so user-driven paging can never
  /// violate the page bounds.
  pub async fn change_page(&self, new_page: u32) -> Result<()> {
    let total = self.lock().pagination.total_pages;
    if new_page < 1 || new_page > total {
      debug!(new_page, total, "ignoring out-of-range page change");
      return Ok(());
    }
    self.load(new_page).await
  }

  // ── Mutations ─────────────────────────────────────────────────────────────

  /// Submit the caller's rating for this item. The server keeps one rating
  /// per (user, item) pair, so repeating the call overwrites rather than
  /// accumulates.
  pub async fn rate(&self, level: u8) -> Result<()> {
    let rating = match Rating::new(level) {
      Ok(r) => r,
      Err(e) => return Err(self.record(e)),
    };
    let Some(token) = self.session.token() else {
      return Err(self.record_with(
        Error::Unauthenticated,
        "Please sign in to rate this content.",
      ));
    };

    if let Err(e) = self.api.submit_rating(self.content_id, rating, &token).await
    {
      return Err(self.absorb(e));
    }
    self.load(self.current_page()).await
  }

  /// Post a comment. Empty or whitespace-only text is rejected locally
  /// before any network call. On success the draft is cleared and the page
  /// being viewed is refreshed. The refresh target is *not* page 1 (where
  /// the new comment lands): the user keeps their scroll context.
  pub async fn submit_comment(&self, text: &str) -> Result<()> {
    let text = text.trim();
    if text.is_empty() {
      return Err(
        self.record(Error::Validation("Comment cannot be empty.".into())),
      );
    }
    let Some(token) = self.session.token() else {
      return Err(self.record_with(
        Error::Unauthenticated,
        "Please sign in to comment on this content.",
      ));
    };

    if let Err(e) = self.api.submit_comment(self.content_id, text, &token).await
    {
      return Err(self.absorb(e));
    }
    self.lock().comment_draft.clear();
    self.load(self.current_page()).await
  }

  /// Delete a comment. The server is the ownership authority; a rejection
  /// (someone else's comment, already gone) comes back as a recoverable
  /// error with the list untouched.
  pub async fn delete_comment(&self, comment_id: Uuid) -> Result<()> {
    let Some(token) = self.session.token() else {
      return Err(self.record_with(
        Error::Unauthenticated,
        "Please sign in to delete a comment.",
      ));
    };

    if let Err(e) = self.api.delete_comment(comment_id, &token).await {
      return Err(self.absorb(e));
    }
    self.load(self.current_page()).await?;

    // Deleting the last comment of a trailing page can leave the viewed
    // page past the end; step back to the last page that still exists.
    let (page, total) = {
      let st = self.lock();
      (st.current_page, st.pagination.total_pages)
    };
    if page > total {
      return self.load(total.max(1)).await;
    }
    Ok(())
  }

  // ── Failure recording ─────────────────────────────────────────────────────

  fn lock(&self) -> std::sync::MutexGuard<'_, FeedbackState> {
    self.state.lock().expect("feedback state lock poisoned")
  }

  fn current_page(&self) -> u32 {
    self.lock().current_page
  }

  /// Record `error`'s display form as the visible error message.
  fn record(&self, error: Error) -> Error {
    self.lock().last_error = Some(error.to_string());
    error
  }

  /// Record a custom user-facing message for `error`.
  fn record_with(&self, error: Error, message: &str) -> Error {
    self.lock().last_error = Some(message.into());
    error
  }

  /// Handle a failure reported by the server. A 401 means the held token
  /// is expired or invalid: the credential is cleared through the shared
  /// session so every surface sees the sign-out.
  fn absorb(&self, error: Error) -> Error {
    if error.is_auth_failure() {
      self.session.clear();
      self.record_with(
        error,
        "Session expired or invalid token. Please sign in again.",
      )
    } else {
      self.record(error)
    }
  }
}
