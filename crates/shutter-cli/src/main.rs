//! `shutter` — command-line surface for the shutter photo/video service.
//!
//! # Usage
//!
//! ```
//! shutter --url https://photos.example.net feed
//! shutter --config ~/.config/shutter/config.toml show 7cbe4a4c-... --page 2
//! shutter --token <jwt> --user-id <uuid> --username alice rate <post-id> 5
//! ```
//!
//! Every subcommand renders what the client library exposes and forwards
//! one user intent into it; there is no state kept between invocations.

mod render;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use shutter_client::{Browser, FeedbackStore, HttpApi, HttpConfig};
use shutter_core::{
  content::{Post, PostPatch},
  feedback::COMMENT_SOFT_CAP,
  session::{Credential, Session, UserIdentity},
};

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
  name = "shutter",
  about = "Command-line client for the shutter photo/video service"
)]
struct Args {
  /// Path to a TOML config file (url, token, user_id, username).
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Base URL of the shutter API.
  #[arg(long, env = "SHUTTER_URL")]
  url: Option<String>,

  /// Bearer token for authenticated calls. Reads work without one.
  #[arg(long, env = "SHUTTER_TOKEN")]
  token: Option<String>,

  /// Your user id; required alongside --token.
  #[arg(long, env = "SHUTTER_USER_ID")]
  user_id: Option<Uuid>,

  /// Your username; required alongside --token.
  #[arg(long, env = "SHUTTER_USERNAME")]
  username: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Browse the shared feed.
  Feed,
  /// Search feed posts by title.
  Search { title: String },
  /// Show a user's profile and their posts.
  Profile { user_id: Uuid },
  /// Show the ratings and comments of a post.
  Show {
    post_id: Uuid,
    /// Comment page to display, starting at 1.
    #[arg(long, default_value_t = 1)]
    page:    u32,
  },
  /// Rate a post from 1 to 5 stars.
  Rate { post_id: Uuid, stars: u8 },
  /// Comment on a post.
  Comment { post_id: Uuid, text: String },
  /// Delete one of your comments from a post.
  DeleteComment { post_id: Uuid, comment_id: Uuid },
  /// Edit the title or caption of one of your posts.
  EditPost {
    post_id: Uuid,
    #[arg(long)]
    title:   Option<String>,
    #[arg(long)]
    caption: Option<String>,
  },
  /// Delete one of your posts.
  DeletePost { post_id: Uuid },
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url:      String,
  #[serde(default)]
  token:    String,
  #[serde(default)]
  user_id:  Option<Uuid>,
  #[serde(default)]
  username: String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  // Load config file if provided.
  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides defaults.
  let base_url = args
    .url
    .clone()
    .or_else(|| (!file_cfg.url.is_empty()).then(|| file_cfg.url.clone()))
    .unwrap_or_else(|| "http://localhost:4000".to_string());

  let session = build_session(&args, &file_cfg)?;
  let api = HttpApi::new(HttpConfig::new(base_url))
    .context("building HTTP client")?;
  let browser = Browser::new(api.clone(), session.clone());

  match args.command {
    Command::Feed => {
      let posts = browser.feed().await.context("loading the feed")?;
      print_posts(&posts, "No content available to display.");
    }

    Command::Search { title } => {
      let posts =
        browser.search(&title).await.context("searching the feed")?;
      print_posts(&posts, "No matching posts found.");
    }

    Command::Profile { user_id } => {
      let profile =
        browser.profile(user_id).await.context("loading profile")?;
      print!("{}", render::profile(&profile));
      let posts =
        browser.posts_of(user_id).await.context("loading their posts")?;
      print_posts(&posts, "No posts yet.");
    }

    Command::Show { post_id, page } => {
      let store = FeedbackStore::open(api, session.clone(), post_id).await;
      if page > 1 {
        store.change_page(page).await.context("changing page")?;
        let shown = store.snapshot().current_page;
        if shown != page {
          eprintln!("Page {page} is out of range; showing page {shown}.");
        }
      }
      print!("{}", render::feedback(&store.snapshot(), session.identity().as_ref()));
    }

    Command::Rate { post_id, stars } => {
      let store = FeedbackStore::open(api, session.clone(), post_id).await;
      store.rate(stars).await.context("submitting rating")?;
      print!("{}", render::feedback(&store.snapshot(), session.identity().as_ref()));
    }

    Command::Comment { post_id, text } => {
      if text.chars().count() > COMMENT_SOFT_CAP {
        eprintln!(
          "Note: comment is longer than {COMMENT_SOFT_CAP} characters; the \
           server may reject it."
        );
      }
      let store = FeedbackStore::open(api, session.clone(), post_id).await;
      store.submit_comment(&text).await.context("posting comment")?;
      print!("{}", render::feedback(&store.snapshot(), session.identity().as_ref()));
    }

    Command::DeleteComment { post_id, comment_id } => {
      let store = FeedbackStore::open(api, session.clone(), post_id).await;
      store
        .delete_comment(comment_id)
        .await
        .context("deleting comment")?;
      print!("{}", render::feedback(&store.snapshot(), session.identity().as_ref()));
    }

    Command::EditPost { post_id, title, caption } => {
      if title.is_none() && caption.is_none() {
        bail!("nothing to change; pass --title and/or --caption");
      }
      let updated = browser
        .edit_post(post_id, &PostPatch { title, caption })
        .await
        .context("editing post")?;
      println!("{}", render::post(&updated));
    }

    Command::DeletePost { post_id } => {
      browser.delete_post(post_id).await.context("deleting post")?;
      println!("Post deleted.");
    }
  }

  Ok(())
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

/// Build the session from flags/file. A token without an identity is an
/// error rather than a guess; with no token at all the session is
/// anonymous and only reads are possible.
fn build_session(args: &Args, file_cfg: &ConfigFile) -> Result<Session> {
  let token = args
    .token
    .clone()
    .or_else(|| (!file_cfg.token.is_empty()).then(|| file_cfg.token.clone()));
  let Some(token) = token else {
    return Ok(Session::anonymous());
  };

  let id = args.user_id.or(file_cfg.user_id);
  let username = args.username.clone().or_else(|| {
    (!file_cfg.username.is_empty()).then(|| file_cfg.username.clone())
  });
  let (Some(id), Some(username)) = (id, username) else {
    bail!("--token requires --user-id and --username (or config entries)");
  };

  Ok(Session::signed_in(Credential {
    token,
    user: UserIdentity { id, username },
  }))
}

fn print_posts(posts: &[Post], empty_message: &str) {
  if posts.is_empty() {
    println!("{empty_message}");
    return;
  }
  for post in posts {
    println!("{}\n", render::post(post));
  }
}
