//! List posts

use anyhow::Result;
use serde_json::json;

use crate::helpers::short_date;
use crate::Folio;

/// List all posts, newest first
pub fn run(folio: &Folio, as_json: bool) -> Result<()> {
    let posts = folio.list_all();

    if as_json {
        let summaries: Vec<_> = posts
            .iter()
            .map(|post| {
                json!({
                    "slug": post.slug,
                    "title": post.title(),
                    "date": post.front_matter.date,
                    "author": post.front_matter.author,
                    "description": post.front_matter.description,
                    "series": post.series(),
                    "seriesOrder": post.front_matter.series_order,
                    "tags": post.front_matter.tags,
                    "readingTime": post.reading_time.text,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!("Posts ({}):", posts.len());
    for post in &posts {
        println!(
            "  {} - {} ({}) [{}]",
            short_date(post.date.as_ref()),
            post.title(),
            post.reading_time.text,
            post.slug
        );
    }

    Ok(())
}
