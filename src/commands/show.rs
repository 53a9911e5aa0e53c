//! Show a single post: metadata, table of contents, series position, HTML

use anyhow::Result;
use serde_json::json;

use crate::content::{series, Post, SeriesNav, TocEntry};
use crate::error::FolioError;
use crate::helpers::full_date;
use crate::Folio;

fn find_post(folio: &Folio, slug: &str) -> Result<Post> {
    folio
        .get_by_slug(slug)
        .ok_or_else(|| FolioError::PostNotFound(slug.to_string()).into())
}

/// Print a post's metadata, series navigation and table of contents
pub fn run(folio: &Folio, slug: &str, as_json: bool) -> Result<()> {
    let posts = folio.list_all();
    let post = posts
        .iter()
        .find(|p| p.slug == slug)
        .ok_or_else(|| FolioError::PostNotFound(slug.to_string()))?;

    let toc: Vec<TocEntry> = post.toc().collect();
    let ordered = post
        .series()
        .map(|name| series::members(&posts, name))
        .unwrap_or_default();
    let nav = SeriesNav::locate(&post.slug, &ordered);

    if as_json {
        let value = json!({
            "slug": post.slug,
            "frontmatter": post.front_matter,
            "readingTime": post.reading_time,
            "toc": toc,
            "series": post.series().map(|name| json!({
                "name": name,
                "position": nav.position,
                "total": nav.total,
                "prev": nav.prev.map(|p| &p.slug),
                "next": nav.next.map(|p| &p.slug),
            })),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", post.title());
    let mut byline = vec![full_date(post.date.as_ref())];
    if let Some(author) = post.front_matter.author.as_deref() {
        byline.push(author.to_string());
    }
    byline.push(post.reading_time.text.clone());
    println!("{}", byline.join(" • "));

    if let Some(description) = post.front_matter.description.as_deref() {
        println!("\n{}", description);
    }
    if !post.front_matter.tags.is_empty() {
        println!("\nTags: {}", post.front_matter.tags.join(", "));
    }

    // Single-post series get no navigation
    if let (Some(name), Some(position)) = (post.series(), nav.position) {
        if nav.total > 1 {
            println!("\nPart {} of {} in {}", position, nav.total, name);
            if let Some(prev) = nav.prev {
                println!("  ← Previous: {} [{}]", prev.title(), prev.slug);
            }
            if let Some(next) = nav.next {
                println!("  Next →: {} [{}]", next.title(), next.slug);
            }
        }
    }

    if !toc.is_empty() {
        println!("\nContents:");
        print_toc(&toc);
    }

    Ok(())
}

/// Print only the table of contents
pub fn toc(folio: &Folio, slug: &str) -> Result<()> {
    let post = find_post(folio, slug)?;
    let toc: Vec<TocEntry> = post.toc().collect();
    print_toc(&toc);
    Ok(())
}

/// Print the rendered HTML body
pub fn render(folio: &Folio, slug: &str) -> Result<()> {
    let post = find_post(folio, slug)?;
    let html = folio.renderer()?.render(&post.raw)?;
    print!("{}", html);
    Ok(())
}

fn print_toc(toc: &[TocEntry]) {
    for entry in toc {
        let indent = if entry.level == 3 { "    " } else { "  " };
        println!("{}{} (#{})", indent, entry.title, entry.id);
    }
}
