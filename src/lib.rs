//! folio: content indexing for a markdown/MDX blog
//!
//! Discovers posts in a flat content directory, splits their YAML
//! front-matter from the body, orders them by date or by series, and derives
//! the table of contents and series navigation each post page needs.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::loader::ContentLoader;
use content::{series, Glossary, MarkdownRenderer, Post};

pub use error::FolioError;

/// The main Folio application
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Posts directory
    pub posts_dir: PathBuf,
    /// Glossary file
    pub glossary_path: PathBuf,
}

impl Folio {
    /// Create a new Folio instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a Folio instance with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let posts_dir = base_dir.join(&config.posts_dir);
        let glossary_path = base_dir.join(&config.glossary);

        Self {
            config,
            base_dir,
            posts_dir,
            glossary_path,
        }
    }

    /// All posts, newest first. Rescans the posts directory.
    pub fn list_all(&self) -> Vec<Post> {
        ContentLoader::new(self).load_posts()
    }

    /// The first post with `slug`, if any
    pub fn get_by_slug(&self, slug: &str) -> Option<Post> {
        self.list_all().into_iter().find(|p| p.slug == slug)
    }

    /// Distinct series names in the order they are first met in [`list_all`](Self::list_all)
    pub fn list_series_names(&self) -> Vec<String> {
        series::names(&self.list_all())
    }

    /// Posts of one series in reading order
    pub fn list_by_series(&self, name: &str) -> Vec<Post> {
        let posts = self.list_all();
        series::members(&posts, name).into_iter().cloned().collect()
    }

    /// Every series paired with its ordered posts
    pub fn series_groups(&self) -> Vec<(String, Vec<Post>)> {
        let posts = self.list_all();
        series::names(&posts)
            .into_iter()
            .map(|name| {
                let members = series::members(&posts, &name).into_iter().cloned().collect();
                (name, members)
            })
            .collect()
    }

    /// Posts that are not part of any series, newest first
    pub fn standalone_posts(&self) -> Vec<Post> {
        self.list_all()
            .into_iter()
            .filter(|p| p.series().is_none())
            .collect()
    }

    /// Load the configured glossary
    pub fn glossary(&self) -> Result<Glossary> {
        Ok(Glossary::load(&self.glossary_path)?)
    }

    /// Build a renderer using the configured highlight settings and glossary
    pub fn renderer(&self) -> Result<MarkdownRenderer> {
        let highlight = &self.config.highlight;
        Ok(
            MarkdownRenderer::with_options(&highlight.theme, highlight.line_number)
                .with_glossary(self.glossary()?),
        )
    }

    /// Create a new post
    pub fn new_post(&self, title: &str, series: Option<&str>, order: Option<i64>) -> Result<PathBuf> {
        commands::new::create_post(self, title, series, order)
    }
}
