//! Plain-text rendering of posts, profiles, and feedback snapshots.
//!
//! Pure formatting. Every decision about *what* to show was already made
//! by the store or browser that produced the value.

use shutter_client::FeedbackState;
use shutter_core::{
  content::{MediaKind, Post, Profile},
  feedback::Rating,
  session::UserIdentity,
};

/// `★★★☆☆`-style bar for a whole-star level.
pub fn stars(level: u8) -> String {
  let filled = usize::from(level.min(5));
  format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

pub fn post(post: &Post) -> String {
  let mut out = String::new();
  let kind = match post.media_kind {
    MediaKind::Image => "photo",
    MediaKind::Video => "video",
  };
  out.push_str(&format!(
    "{} — {} ({kind}, {})\n",
    post.title,
    post.creator.username,
    post.uploaded_at.format("%Y-%m-%d"),
  ));
  if let Some(caption) = &post.caption {
    out.push_str(&format!("  {caption}\n"));
  }
  if let Some(location) = &post.location {
    out.push_str(&format!("  📍 {location}\n"));
  }
  if !post.people.is_empty() {
    let names: Vec<&str> =
      post.people.iter().map(|p| p.username.as_str()).collect();
    out.push_str(&format!("  👥 {}\n", names.join(", ")));
  }
  out.push_str(&format!("  {}\n  id: {}", post.media_url, post.id));
  out
}

pub fn profile(profile: &Profile) -> String {
  let mut out = format!(
    "{} — joined {}\n",
    profile.username,
    profile.joined_at.format("%Y-%m-%d"),
  );
  if let Some(bio) = &profile.bio {
    out.push_str(&format!("{bio}\n"));
  }
  out
}

/// The rating aggregate and the page of comments currently held by a
/// feedback store, with the viewer's own comments marked.
pub fn feedback(state: &FeedbackState, viewer: Option<&UserIdentity>) -> String {
  let mut out = String::new();

  let average = state.average_rating.round().clamp(0.0, 5.0) as u8;
  out.push_str(&format!(
    "Average: {} ({:.1} from {} ratings)\n",
    stars(average),
    state.average_rating,
    state.ratings_count,
  ));
  match state.user_rating {
    Some(rating) => out.push_str(&format!(
      "Your rating: {}\n",
      stars(rating.level())
    )),
    None => out.push_str("Your rating: none\n"),
  }

  let total = state.pagination.total_comments;
  let noun = if total == 1 { "comment" } else { "comments" };
  out.push_str(&format!("💬 {total} {noun}\n"));

  if state.comments.is_empty() {
    out.push_str("No comments yet.\n");
  }
  for comment in &state.comments {
    let own = viewer.is_some_and(|v| v.id == comment.author.id);
    let marker = if own { " (you)" } else { "" };
    let rated = comment
      .author_rating
      .map(|r: Rating| format!(" [{} ★]", r.level()))
      .unwrap_or_default();
    out.push_str(&format!(
      "  {}{marker}{rated}: {}\n    {} · id: {}\n",
      comment.author.username,
      comment.text,
      comment.posted_at.format("%Y-%m-%d %H:%M"),
      comment.id,
    ));
  }

  if state.pagination.total_pages > 1 {
    out.push_str(&format!(
      "Page {} of {}\n",
      state.current_page, state.pagination.total_pages,
    ));
  }
  if let Some(error) = &state.last_error {
    out.push_str(&format!("! {error}\n"));
  }
  out
}
