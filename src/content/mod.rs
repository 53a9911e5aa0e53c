//! Content module - handles posts, table of contents, series and glossary

mod frontmatter;
mod glossary;
pub mod loader;
mod markdown;
mod post;
pub mod series;
pub mod toc;

pub use frontmatter::{parse_date_string, FrontMatter};
pub use glossary::Glossary;
pub use markdown::MarkdownRenderer;
pub use post::{Post, ReadingTime};
pub use series::SeriesNav;
pub use toc::{anchor_id, TocEntry};
