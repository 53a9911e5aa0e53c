//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# Folio Configuration

# Site
title: Folio
description: ''
author: ''
url: http://localhost:3000

# Content
posts_dir: posts
extensions:
  - md
  - mdx
words_per_minute: 200
glossary: glossary.yml

# Code blocks
highlight:
  theme: base16-ocean.dark
  line_number: false
"#;

const DEFAULT_GLOSSARY: &str = r#"# Bold text in a post that matches a term below gets its definition as a tooltip.
# Exact matches win over case-insensitive ones.
Neo4j: A graph database management system that stores data as nodes and relationships.
"#;

const WELCOME_POST: &str = r#"---
title: Hello World
date: 2024-01-01
author: ''
description: Your first post.
tags:
  - meta
---

## Getting Started

Create posts with `folio new "My Post"`.

### Series

Give posts the same `series` and a `seriesOrder` to link them as parts.
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir.join("posts"))?;

    write_if_missing(&target_dir.join("_config.yml"), DEFAULT_CONFIG)?;
    write_if_missing(&target_dir.join("glossary.yml"), DEFAULT_GLOSSARY)?;
    write_if_missing(&target_dir.join("posts/hello-world.md"), WELCOME_POST)?;

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        tracing::debug!("Keeping existing {:?}", path);
        return Ok(());
    }
    fs::write(path, content)?;
    tracing::debug!("Created {:?}", path);
    Ok(())
}
