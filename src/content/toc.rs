//! Table of contents extraction
//!
//! Scans a raw markdown body for `##` and `###` headings and derives the
//! anchor identifier each one is linked by. The HTML renderer feeds the same
//! raw heading source through [`atx_heading_text`] and [`anchor_id`], so
//! table-of-contents links resolve.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref HEADING_RE: Regex =
        Regex::new(r"(?m)^(#{2,3})[ \t]+(.+)$").expect("valid heading pattern");
    // ASCII letters, digits and underscore are kept; other letters are dropped
    static ref NON_ANCHOR_RE: Regex =
        Regex::new(r"[^A-Za-z0-9_\s-]").expect("valid anchor pattern");
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").expect("valid whitespace pattern");
}

/// A single table of contents entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// Anchor identifier
    pub id: String,
    /// Heading text as written
    pub title: String,
    /// 2 or 3
    pub level: u8,
}

/// Derive the anchor identifier for a heading.
///
/// Lower-cases the text, drops every character that is not an ASCII word
/// character, whitespace or hyphen, then collapses whitespace runs into a
/// single hyphen. Identical headings get identical identifiers.
pub fn anchor_id(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_ANCHOR_RE.replace_all(&lowered, "");
    WHITESPACE_RE.replace_all(&stripped, "-").into_owned()
}

/// Text of an ATX heading line: `## Intro ##` → `Intro`.
///
/// Drops the opening hashes and an optional closing hash sequence. Inline
/// markup such as links is kept as written.
pub fn atx_heading_text(line: &str) -> &str {
    let rest = line.trim_start().trim_start_matches('#').trim();
    let without = rest.trim_end_matches('#');
    if without.len() == rest.len() {
        rest
    } else if without.is_empty() {
        ""
    } else if without.ends_with([' ', '\t']) {
        without.trim_end()
    } else {
        // `C#` ends in a hash that is part of the text
        rest
    }
}

/// Lazily iterate the level 2 and 3 headings of `body` in document order.
///
/// The iterator is `Clone`; a clone resumes from the same position.
pub fn headings(body: &str) -> Headings<'_> {
    Headings { body, pos: 0 }
}

/// Iterator returned by [`headings`]
#[derive(Debug, Clone)]
pub struct Headings<'a> {
    body: &'a str,
    pos: usize,
}

impl<'a> Iterator for Headings<'a> {
    type Item = TocEntry;

    fn next(&mut self) -> Option<TocEntry> {
        if self.pos > self.body.len() {
            return None;
        }
        let Some(caps) = HEADING_RE.captures_at(self.body, self.pos) else {
            self.pos = self.body.len() + 1;
            return None;
        };
        let whole = caps.get(0)?;
        self.pos = whole.end().max(whole.start() + 1);

        let level = caps[1].len() as u8;
        let title = atx_heading_text(whole.as_str()).to_string();
        Some(TocEntry {
            id: anchor_id(&title),
            title,
            level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intro_and_details() {
        let body = "Intro text\n\n## Intro\n\nSome words.\n\n### Details\n\nMore.\n";
        let toc: Vec<_> = headings(body).collect();
        assert_eq!(
            toc,
            vec![
                TocEntry {
                    id: "intro".to_string(),
                    title: "Intro".to_string(),
                    level: 2
                },
                TocEntry {
                    id: "details".to_string(),
                    title: "Details".to_string(),
                    level: 3
                },
            ]
        );
    }

    #[test]
    fn test_ignores_other_levels() {
        let body = "# Title\n## Kept\n#### Too deep\n##### Deeper\n###No space\n### Also kept";
        let titles: Vec<_> = headings(body).map(|e| e.title).collect();
        assert_eq!(titles, vec!["Kept", "Also kept"]);
    }

    #[test]
    fn test_heading_must_start_line() {
        let body = "text ## not a heading\n  ## indented is not either\n## Yes";
        let ids: Vec<_> = headings(body).map(|e| e.id).collect();
        assert_eq!(ids, vec!["yes"]);
    }

    #[test]
    fn test_anchor_id() {
        assert_eq!(anchor_id("Why Graphs?"), "why-graphs");
        assert_eq!(anchor_id("A* Search & STRIPS"), "a-search-strips");
        assert_eq!(anchor_id("Phase 2: CWM-G"), "phase-2-cwm-g");
        assert_eq!(anchor_id("snake_case stays"), "snake_case-stays");
        assert_eq!(anchor_id("Tabs\tand   spaces"), "tabs-and-spaces");
        assert_eq!(anchor_id("Café Über"), "caf-ber");
    }

    #[test]
    fn test_anchor_id_deterministic() {
        let text = "The Hybrid Causal Graph (HCG)";
        assert_eq!(anchor_id(text), anchor_id(text));
        assert_eq!(anchor_id(text), "the-hybrid-causal-graph-hcg");
    }

    #[test]
    fn test_duplicate_headings_collide() {
        let body = "## Summary\ntext\n## Summary\n";
        let ids: Vec<_> = headings(body).map(|e| e.id).collect();
        assert_eq!(ids, vec!["summary", "summary"]);
    }

    #[test]
    fn test_extraction_is_idempotent_and_restartable() {
        let body = "## One\n### Two\n## Three\n";
        let first: Vec<_> = headings(body).collect();
        let second: Vec<_> = headings(body).collect();
        assert_eq!(first, second);

        let mut iter = headings(body);
        iter.next();
        let rest: Vec<_> = iter.clone().map(|e| e.title).collect();
        assert_eq!(rest, vec!["Two", "Three"]);
        assert_eq!(iter.count(), 2);
    }

    #[test]
    fn test_crlf_and_trailing_space() {
        let body = "## Windows Heading  \r\nbody\r\n";
        let toc: Vec<_> = headings(body).collect();
        assert_eq!(toc.len(), 1);
        assert_eq!(toc[0].title, "Windows Heading");
        assert_eq!(toc[0].id, "windows-heading");
    }

    #[test]
    fn test_closing_hashes_dropped() {
        let body = "## Intro ##\n### C# Tips\n## Ends with # \n";
        let toc: Vec<_> = headings(body).map(|e| (e.title, e.id)).collect();
        assert_eq!(
            toc,
            vec![
                ("Intro".to_string(), "intro".to_string()),
                ("C# Tips".to_string(), "c-tips".to_string()),
                ("Ends with".to_string(), "ends-with".to_string()),
            ]
        );
    }

    #[test]
    fn test_atx_heading_text() {
        assert_eq!(atx_heading_text("## Title"), "Title");
        assert_eq!(atx_heading_text("  ### Title ###  "), "Title");
        assert_eq!(atx_heading_text("## C#"), "C#");
        assert_eq!(atx_heading_text("## ##"), "");
        assert_eq!(atx_heading_text("## #tag"), "#tag");
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(headings("").count(), 0);
    }
}
