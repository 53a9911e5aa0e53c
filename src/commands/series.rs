//! Show series and their reading order

use anyhow::Result;

use crate::content::Post;
use crate::Folio;

/// Print one series, or every series followed by standalone posts
pub fn run(folio: &Folio, name: Option<&str>) -> Result<()> {
    match name {
        Some(name) => {
            let members = folio.list_by_series(name);
            if members.is_empty() {
                anyhow::bail!("Unknown series: {}", name);
            }
            print_series(name, &members);
        }
        None => {
            let groups = folio.series_groups();
            if groups.is_empty() {
                println!("No series.");
            }
            for (name, members) in &groups {
                print_series(name, members);
                println!();
            }

            let standalone = folio.standalone_posts();
            println!("Standalone posts ({}):", standalone.len());
            for post in &standalone {
                println!("  {} [{}]", post.title(), post.slug);
            }
        }
    }

    Ok(())
}

fn print_series(name: &str, members: &[Post]) {
    let noun = if members.len() == 1 { "post" } else { "posts" };
    println!("{} ({} {} in this series):", name, members.len(), noun);
    for (i, post) in members.iter().enumerate() {
        println!("  Part {}: {} [{}]", i + 1, post.title(), post.slug);
    }
}
