//! Post model

use chrono::NaiveDateTime;
use serde::Serialize;
use std::path::PathBuf;

use super::toc::{self, Headings};
use super::FrontMatter;

/// A blog post
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    /// Slug (file name without extension)
    pub slug: String,

    /// Parsed front-matter
    pub front_matter: FrontMatter,

    /// Publication date, when the front-matter date parses
    pub date: Option<NaiveDateTime>,

    /// Raw markdown/MDX body, front-matter removed
    pub raw: String,

    /// Estimated reading time of the body
    pub reading_time: ReadingTime,

    /// Full source file path
    pub full_source: PathBuf,
}

impl Post {
    /// Create a post from a slug and the contents of its source file
    pub fn from_source(slug: String, source: &str, words_per_minute: usize) -> Self {
        let (front_matter, body) = FrontMatter::parse(source);
        let date = front_matter.parse_date();
        let reading_time = ReadingTime::estimate(body, words_per_minute);
        Self {
            slug,
            front_matter,
            date,
            raw: body.to_string(),
            reading_time,
            full_source: PathBuf::new(),
        }
    }

    /// Title for display
    pub fn title(&self) -> &str {
        self.front_matter.title.as_deref().unwrap_or("Untitled")
    }

    /// Series this post belongs to
    pub fn series(&self) -> Option<&str> {
        self.front_matter.series_name()
    }

    /// Table of contents of the body
    pub fn toc(&self) -> Headings<'_> {
        toc::headings(&self.raw)
    }
}

/// Words-per-minute reading estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingTime {
    pub words: usize,
    pub minutes: f64,
    pub time_ms: u64,
    /// Display string, e.g. "4 min read"
    pub text: String,
}

impl ReadingTime {
    /// Estimate reading time of `body` at `words_per_minute`
    pub fn estimate(body: &str, words_per_minute: usize) -> Self {
        let words = body.split_whitespace().count();
        let minutes = words as f64 / words_per_minute.max(1) as f64;
        // Round to two decimals before the ceiling so 2.001 reads as 2
        let displayed = ((minutes * 100.0).round() / 100.0).ceil() as u64;
        Self {
            words,
            minutes,
            time_ms: (minutes * 60_000.0).round() as u64,
            text: format!("{} min read", displayed),
        }
    }
}
