//! Feed and profile browsing — stateless pass-throughs over the content
//! API.
//!
//! Unlike the feedback store there is no derived state here: the surfaces
//! render whatever a call returns. The [`Browser`] exists so these calls
//! share the session handle and the same 401 handling as everything else.

use tracing::debug;
use uuid::Uuid;

use shutter_core::{
  Error, Result,
  api::ContentApi,
  content::{Post, PostPatch, Profile},
  session::Session,
};

/// Read-mostly client for the feed, profiles, and the caller's own posts.
#[derive(Clone)]
pub struct Browser<A> {
  api:     A,
  session: Session,
}

impl<A: ContentApi> Browser<A> {
  pub fn new(api: A, session: Session) -> Self {
    Self { api, session }
  }

  /// The shared feed, newest first (server order).
  pub async fn feed(&self) -> Result<Vec<Post>> {
    let token = self.session.token();
    debug!(authenticated = token.is_some(), "fetching feed");
    self
      .api
      .list_feed(token.as_deref())
      .await
      .map_err(|e| self.intercept(e))
  }

  /// Feed entries with `title` in their title.
  pub async fn search(&self, title: &str) -> Result<Vec<Post>> {
    let token = self.session.token();
    self
      .api
      .search_feed(title, token.as_deref())
      .await
      .map_err(|e| self.intercept(e))
  }

  pub async fn profile(&self, user_id: Uuid) -> Result<Profile> {
    let token = self.session.token();
    self
      .api
      .get_profile(user_id, token.as_deref())
      .await
      .map_err(|e| self.intercept(e))
  }

  pub async fn posts_of(&self, user_id: Uuid) -> Result<Vec<Post>> {
    let token = self.session.token();
    self
      .api
      .list_user_posts(user_id, token.as_deref())
      .await
      .map_err(|e| self.intercept(e))
  }

  /// Edit the title/caption of one of the caller's own posts.
  pub async fn edit_post(&self, post_id: Uuid, patch: &PostPatch) -> Result<Post> {
    let Some(token) = self.session.token() else {
      return Err(Error::Unauthenticated);
    };
    self
      .api
      .update_post(post_id, patch, &token)
      .await
      .map_err(|e| self.intercept(e))
  }

  /// Delete one of the caller's own posts.
  pub async fn delete_post(&self, post_id: Uuid) -> Result<()> {
    let Some(token) = self.session.token() else {
      return Err(Error::Unauthenticated);
    };
    self
      .api
      .delete_post(post_id, &token)
      .await
      .map_err(|e| self.intercept(e))
  }

  /// A 401 from any call invalidates the shared credential.
  fn intercept(&self, error: Error) -> Error {
    if error.is_auth_failure() {
      self.session.clear();
    }
    error
  }
}
