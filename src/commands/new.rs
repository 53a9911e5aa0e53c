//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::Folio;

/// Create a new post file with front-matter and return its path
pub fn create_post(
    folio: &Folio,
    title: &str,
    series: Option<&str>,
    order: Option<i64>,
) -> Result<PathBuf> {
    let now = chrono::Local::now();

    fs::create_dir_all(&folio.posts_dir)?;

    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a file name from title: {:?}", title);
    }
    let extension = folio
        .config
        .extensions
        .first()
        .map(|e| e.trim_start_matches('.').to_string())
        .unwrap_or_else(|| "md".to_string());
    let file_path = folio.posts_dir.join(format!("{}.{}", slug, extension));

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let mut content = String::from("---\n");
    content.push_str(&format!("title: {}\n", yaml_string(title)));
    content.push_str(&format!("date: {}\n", now.format("%Y-%m-%d")));
    if !folio.config.author.is_empty() {
        content.push_str(&format!("author: {}\n", yaml_string(&folio.config.author)));
    }
    content.push_str("description: \"\"\n");
    if let Some(series) = series {
        content.push_str(&format!("series: {}\n", yaml_string(series)));
        if let Some(order) = order {
            content.push_str(&format!("seriesOrder: {}\n", order));
        }
    }
    content.push_str("tags: []\n---\n\n## Introduction\n");

    fs::write(&file_path, content)?;
    tracing::info!("Created post {:?}", file_path);

    Ok(file_path)
}

/// Quote a scalar so titles like `Why: Graphs` stay valid YAML
fn yaml_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("{:?}", value))
}
