//! Content loader - discovers posts in the posts directory

use anyhow::Result;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::Post;
use crate::Folio;

/// Loads posts from the posts directory.
///
/// Every call rescans the directory; nothing is cached between calls.
pub struct ContentLoader<'a> {
    folio: &'a Folio,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(folio: &'a Folio) -> Self {
        Self { folio }
    }

    /// Load all posts, newest first.
    ///
    /// A missing posts directory yields no posts. Files that cannot be read
    /// are logged and skipped. Posts without a usable date sort last.
    pub fn load_posts(&self) -> Vec<Post> {
        let posts_dir = &self.folio.posts_dir;
        if !posts_dir.is_dir() {
            tracing::debug!("Posts directory {:?} does not exist", posts_dir);
            return Vec::new();
        }

        let mut posts = Vec::new();

        // Sorted discovery so equal dates keep a stable, file-name order
        for entry in WalkDir::new(posts_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry in {:?}: {}", posts_dir, e);
                    continue;
                }
            };
            let path = entry.path();
            if !path.is_file() || !self.is_post_file(path) {
                continue;
            }
            match self.load_post(path) {
                Ok(post) => posts.push(post),
                Err(e) => {
                    tracing::warn!("Failed to load post {:?}: {}", path, e);
                }
            }
        }

        // Sort by date descending (newest first)
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        tracing::debug!("Loaded {} posts from {:?}", posts.len(), posts_dir);
        posts
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<Post> {
        let content = fs::read_to_string(path)?;

        let slug = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "untitled".to_string());

        let mut post = Post::from_source(slug, &content, self.folio.config.words_per_minute);
        post.full_source = path.to_path_buf();

        let missing = post.front_matter.missing_fields();
        if !missing.is_empty() {
            tracing::warn!(
                "Post {:?} front-matter is missing or has invalid: {}",
                path,
                missing.join(", ")
            );
        }

        Ok(post)
    }

    /// Check if a file has one of the configured post extensions
    fn is_post_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.folio.config.is_post_extension(e))
            .unwrap_or(false)
    }
}
