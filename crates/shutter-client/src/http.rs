//! Async HTTP client wrapping the shutter JSON API.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;
use uuid::Uuid;

use shutter_core::{
  Error, Result,
  api::{ContentApi, FeedbackApi},
  content::{Post, PostPatch, Profile},
  feedback::{FeedbackPage, Rating},
};

// ─── Configuration ───────────────────────────────────────────────────────────

/// Connection settings for the shutter API.
#[derive(Debug, Clone)]
pub struct HttpConfig {
  pub base_url: String,
  /// Applied to every request. Expiry surfaces as [`Error::Timeout`].
  pub timeout:  Duration,
}

impl HttpConfig {
  pub fn new(base_url: impl Into<String>) -> Self {
    Self { base_url: base_url.into(), timeout: Duration::from_secs(30) }
  }
}

// ─── Client ──────────────────────────────────────────────────────────────────

/// Async HTTP client for the shutter JSON REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based. The
/// bearer token is supplied per call by the owning store or browser, never
/// held here.
#[derive(Clone)]
pub struct HttpApi {
  client: Client,
  config: HttpConfig,
}

impl HttpApi {
  pub fn new(config: HttpConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(config.timeout)
      .build()
      .map_err(|e| Error::Network(format!("failed to build HTTP client: {e}")))?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}/api{}", self.config.base_url.trim_end_matches('/'), path)
  }

  fn bearer(
    req: reqwest::RequestBuilder,
    token: Option<&str>,
  ) -> reqwest::RequestBuilder {
    match token {
      Some(token) => req.bearer_auth(token),
      None => req,
    }
  }

  /// Map a non-success status onto the error taxonomy, pulling the
  /// server's own explanation out of the body where present.
  async fn check(resp: reqwest::Response) -> Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
      return Ok(resp);
    }
    let message = error_message(resp).await;
    Err(match status.as_u16() {
      401 => Error::Unauthenticated,
      403 => Error::Forbidden(message),
      404 => Error::NotFound(message),
      400..=499 => Error::Validation(message),
      code => Error::Server { status: code, message },
    })
  }

  async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    resp
      .json()
      .await
      .map_err(|e| Error::Network(format!("decoding response: {e}")))
  }
}

/// Transport-level failures: timeouts are their own category, everything
/// else is a network error.
fn transport(e: reqwest::Error) -> Error {
  if e.is_timeout() {
    Error::Timeout
  } else {
    Error::Network(e.to_string())
  }
}

/// Best-effort extraction of `{"error": ...}` or `{"message": ...}` from an
/// error body, falling back to the status line.
async fn error_message(resp: reqwest::Response) -> String {
  let status = resp.status();
  let fallback = || {
    status
      .canonical_reason()
      .unwrap_or("request failed")
      .to_string()
  };
  match resp.json::<serde_json::Value>().await {
    Ok(body) => body
      .get("error")
      .or_else(|| body.get("message"))
      .and_then(|m| m.as_str())
      .map(str::to_owned)
      .unwrap_or_else(fallback),
    Err(_) => fallback(),
  }
}

// ─── FeedbackApi impl ────────────────────────────────────────────────────────

impl FeedbackApi for HttpApi {
  /// `GET /api/feedback/{content_id}?page=<n>&limit=<n>`
  async fn fetch_feedback(
    &self,
    content_id: Uuid,
    page: u32,
    limit: u32,
    token: Option<&str>,
  ) -> Result<FeedbackPage> {
    debug!(%content_id, page, "fetching feedback");
    let resp = Self::bearer(
      self.client.get(self.url(&format!("/feedback/{content_id}"))),
      token,
    )
    .query(&[("page", page), ("limit", limit)])
    .send()
    .await
    .map_err(transport)?;
    Self::decode(Self::check(resp).await?).await
  }

  /// `POST /api/ratings` — body `{"contentId": ..., "rating": 1..=5}`.
  async fn submit_rating(
    &self,
    content_id: Uuid,
    rating: Rating,
    token: &str,
  ) -> Result<()> {
    let resp = self
      .client
      .post(self.url("/ratings"))
      .bearer_auth(token)
      .json(&json!({ "contentId": content_id, "rating": rating }))
      .send()
      .await
      .map_err(transport)?;
    Self::check(resp).await.map(drop)
  }

  /// `POST /api/comments` — body `{"contentId": ..., "commentText": ...}`.
  async fn submit_comment(
    &self,
    content_id: Uuid,
    text: &str,
    token: &str,
  ) -> Result<()> {
    let resp = self
      .client
      .post(self.url("/comments"))
      .bearer_auth(token)
      .json(&json!({ "contentId": content_id, "commentText": text }))
      .send()
      .await
      .map_err(transport)?;
    Self::check(resp).await.map(drop)
  }

  /// `DELETE /api/comments/{comment_id}`
  async fn delete_comment(&self, comment_id: Uuid, token: &str) -> Result<()> {
    let resp = self
      .client
      .delete(self.url(&format!("/comments/{comment_id}")))
      .bearer_auth(token)
      .send()
      .await
      .map_err(transport)?;
    Self::check(resp).await.map(drop)
  }
}

// ─── ContentApi impl ─────────────────────────────────────────────────────────

impl ContentApi for HttpApi {
  /// `GET /api/content`
  async fn list_feed(&self, token: Option<&str>) -> Result<Vec<Post>> {
    let resp = Self::bearer(self.client.get(self.url("/content")), token)
      .send()
      .await
      .map_err(transport)?;
    Self::decode(Self::check(resp).await?).await
  }

  /// `GET /api/content/search?title=<term>`
  async fn search_feed(
    &self,
    title: &str,
    token: Option<&str>,
  ) -> Result<Vec<Post>> {
    let resp = Self::bearer(self.client.get(self.url("/content/search")), token)
      .query(&[("title", title)])
      .send()
      .await
      .map_err(transport)?;
    Self::decode(Self::check(resp).await?).await
  }

  /// `GET /api/users/{user_id}`
  async fn get_profile(
    &self,
    user_id: Uuid,
    token: Option<&str>,
  ) -> Result<Profile> {
    let resp = Self::bearer(
      self.client.get(self.url(&format!("/users/{user_id}"))),
      token,
    )
    .send()
    .await
    .map_err(transport)?;
    Self::decode(Self::check(resp).await?).await
  }

  /// `GET /api/users/{user_id}/posts`
  async fn list_user_posts(
    &self,
    user_id: Uuid,
    token: Option<&str>,
  ) -> Result<Vec<Post>> {
    let resp = Self::bearer(
      self.client.get(self.url(&format!("/users/{user_id}/posts"))),
      token,
    )
    .send()
    .await
    .map_err(transport)?;
    Self::decode(Self::check(resp).await?).await
  }

  /// `PUT /api/posts/{post_id}` — body is the patch; returns the updated post.
  async fn update_post(
    &self,
    post_id: Uuid,
    patch: &PostPatch,
    token: &str,
  ) -> Result<Post> {
    let resp = self
      .client
      .put(self.url(&format!("/posts/{post_id}")))
      .bearer_auth(token)
      .json(patch)
      .send()
      .await
      .map_err(transport)?;
    Self::decode(Self::check(resp).await?).await
  }

  /// `DELETE /api/posts/{post_id}`
  async fn delete_post(&self, post_id: Uuid, token: &str) -> Result<()> {
    let resp = self
      .client
      .delete(self.url(&format!("/posts/{post_id}")))
      .bearer_auth(token)
      .send()
      .await
      .map_err(transport)?;
    Self::check(resp).await.map(drop)
  }
}
