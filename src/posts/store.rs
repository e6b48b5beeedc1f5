use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::info;

use crate::error::{DashError, Result};
use crate::models::{Post, PostDraft};
use crate::posts::source::PostSource;

/// Load posts from a JSON file. A missing file is an empty list.
///
/// Deduplicates by id (last occurrence wins) and returns posts ordered by id.
pub fn load_posts<P: AsRef<Path>>(path: P) -> Result<Vec<Post>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let posts: Vec<Post> = serde_json::from_str(&content)?;

    let mut seen: BTreeMap<u64, Post> = BTreeMap::new();
    for post in posts {
        seen.insert(post.id, post);
    }

    Ok(seen.into_values().collect())
}

/// Save posts to a JSON file.
pub fn save_posts<P: AsRef<Path>>(path: P, posts: &[Post]) -> Result<()> {
    let json = serde_json::to_string_pretty(posts)?;
    fs::write(path, json)?;
    Ok(())
}

/// [`PostSource`] backed by a JSON file; every mutation is written through.
#[derive(Debug)]
pub struct JsonPostStore {
    path: PathBuf,
}

impl JsonPostStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PostSource for JsonPostStore {
    fn get_data(&self) -> Result<Vec<Post>> {
        load_posts(&self.path)
    }

    fn add_post(&mut self, draft: PostDraft) -> Result<Post> {
        let mut posts = load_posts(&self.path)?;
        let id = posts.iter().map(|p| p.id).max().map_or(1, |max| max + 1);

        let post = draft.into_post(id, Utc::now());
        posts.push(post.clone());
        save_posts(&self.path, &posts)?;

        info!(id, title = %post.title, "added post");
        Ok(post)
    }

    fn delete_post(&mut self, id: u64) -> Result<()> {
        let mut posts = load_posts(&self.path)?;
        let before = posts.len();
        posts.retain(|p| p.id != id);

        if posts.len() == before {
            return Err(DashError::PostNotFound(id));
        }

        save_posts(&self.path, &posts)?;
        info!(id, "deleted post");
        Ok(())
    }
}
