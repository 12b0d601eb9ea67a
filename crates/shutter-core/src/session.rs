//! The session handle — who is signed in, and with what token.
//!
//! A [`Session`] is created once at startup and passed explicitly to every
//! store and browser; nothing reads ambient global state. The handle is
//! cheap to clone and internally shared, so when a 401 response forces the
//! credential to be cleared, every surface holding a clone observes it.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Identity ────────────────────────────────────────────────────────────────

/// The signed-in user, as returned by the sign-in endpoint alongside the
/// token. Used by surfaces to label the caller's own comments and posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
  pub id:       Uuid,
  pub username: String,
}

/// A bearer token plus the identity it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
  pub token: String,
  pub user:  UserIdentity,
}

// ─── Session ─────────────────────────────────────────────────────────────────

/// Shared handle to the caller's credential state.
#[derive(Debug, Clone, Default)]
pub struct Session {
  inner: Arc<RwLock<Option<Credential>>>,
}

impl Session {
  /// A session with no credential — reads go out anonymous, writes are
  /// rejected before any network call.
  pub fn anonymous() -> Self {
    Self::default()
  }

  pub fn signed_in(credential: Credential) -> Self {
    Self { inner: Arc::new(RwLock::new(Some(credential))) }
  }

  pub fn is_signed_in(&self) -> bool {
    self.inner.read().expect("session lock poisoned").is_some()
  }

  /// The bearer token to attach to an authenticated call, if any.
  pub fn token(&self) -> Option<String> {
    self
      .inner
      .read()
      .expect("session lock poisoned")
      .as_ref()
      .map(|c| c.token.clone())
  }

  pub fn identity(&self) -> Option<UserIdentity> {
    self
      .inner
      .read()
      .expect("session lock poisoned")
      .as_ref()
      .map(|c| c.user.clone())
  }

  /// Drop the held credential. Called when any operation sees a 401; the
  /// user must sign in again to obtain a new token.
  pub fn clear(&self) {
    *self.inner.write().expect("session lock poisoned") = None;
  }
}
