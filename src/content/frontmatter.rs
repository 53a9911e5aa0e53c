//! Front-matter parsing

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserializer, Serialize};
use serde_yaml::{Mapping, Value};

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Accepts `seriesOrder: 2` as well as `seriesOrder: "2"`
fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct LenientI64;

    impl<'de> Visitor<'de> for LenientI64 {
        type Value = Option<i64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a numeric string")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            i64::try_from(value)
                .map(Some)
                .map_err(|_| E::custom(format!("series order out of range: {}", value)))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
                Ok(Some(value as i64))
            } else {
                Err(E::custom(format!("series order must be a whole number: {}", value)))
            }
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            value
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|_| E::custom(format!("invalid series order: {:?}", value)))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(LenientI64)
}

/// Accepts any scalar (`title: 2024` reads as "2024")
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct LenientString;

    impl<'de> Visitor<'de> for LenientString {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.to_string()))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(LenientString)
}

/// Front-matter data from a post
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
    pub series: Option<String>,
    #[serde(rename = "seriesOrder")]
    pub series_order: Option<i64>,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

impl FrontMatter {
    /// Parse front-matter from content string.
    /// Returns (front_matter, remaining_content).
    ///
    /// Never fails: without a well-formed leading `---` block the front-matter
    /// is empty and the whole input is returned as the body.
    pub fn parse(content: &str) -> (Self, &str) {
        let Some((yaml_content, remaining)) = split_block(content) else {
            return (FrontMatter::default(), content);
        };
        let remaining = remaining.trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return (FrontMatter::default(), remaining);
        }

        // A `---` thematic break followed by prose is not front-matter
        if !looks_like_yaml(yaml_content) {
            return (FrontMatter::default(), content);
        }

        match serde_yaml::from_str::<Mapping>(yaml_content) {
            Ok(mapping) => (Self::from_mapping(&mapping), remaining),
            Err(e) => {
                tracing::warn!(
                    "Failed to parse YAML front-matter, treating as content: {}",
                    e
                );
                (FrontMatter::default(), content)
            }
        }
    }

    /// Read each known key on its own, so one bad value only loses that field
    fn from_mapping(mapping: &Mapping) -> Self {
        Self {
            title: field(mapping, "title", lenient_string),
            date: field(mapping, "date", lenient_string),
            author: field(mapping, "author", lenient_string),
            series: field(mapping, "series", lenient_string),
            series_order: field(mapping, "seriesOrder", lenient_i64),
            description: field(mapping, "description", lenient_string),
            tags: field(mapping, "tags", string_or_vec),
        }
    }

    /// Parse the date string
    pub fn parse_date(&self) -> Option<NaiveDateTime> {
        self.date.as_deref().and_then(parse_date_string)
    }

    /// Series name, treating an empty string as no series
    pub fn series_name(&self) -> Option<&str> {
        self.series.as_deref().filter(|s| !s.is_empty())
    }

    /// Position within the series, 0 when unset
    pub fn order(&self) -> i64 {
        self.series_order.unwrap_or(0)
    }

    /// Names of required fields that are missing or unusable
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.as_deref().map_or(true, |t| t.trim().is_empty()) {
            missing.push("title");
        }
        if self.parse_date().is_none() {
            missing.push("date");
        }
        missing
    }
}

/// Deserialize `key` with `parse`, falling back to the default on a bad value
fn field<T: Default>(
    mapping: &Mapping,
    key: &str,
    parse: fn(Value) -> Result<T, serde_yaml::Error>,
) -> T {
    let Some(value) = mapping.get(key) else {
        return T::default();
    };
    parse(value.clone()).unwrap_or_else(|e| {
        tracing::warn!("Ignoring front-matter field `{}`: {}", key, e);
        T::default()
    })
}

/// Split a leading `---` ... `---` block from the rest of the text.
/// The fence must open the file; only a byte-order mark may precede it.
fn split_block(content: &str) -> Option<(&str, &str)> {
    let rest = content.trim_start_matches('\u{feff}');
    let rest = rest.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// At least one line must have the `key: value` shape
fn looks_like_yaml(block: &str) -> bool {
    block.lines().any(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return false;
        }
        let Some(colon_pos) = trimmed.find(':') else {
            return false;
        };
        let key = &trimmed[..colon_pos];
        let is_valid_key = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            && !matches!(key, "http" | "https" | "ftp");
        let after_colon = &trimmed[colon_pos + 1..];
        is_valid_key && (after_colon.is_empty() || after_colon.starts_with(' '))
    })
}

/// Parse a date string in various formats
pub fn parse_date_string(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    // RFC 3339 / ISO 8601 with offset, normalised to UTC
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: "Why Graphs?"
date: 2024-01-15
author: Ada
series: Foundations
seriesOrder: 2
description: On structure.
tags:
  - graphs
  - reasoning
  - graphs
---

This is the content.
"#;

        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm.title.as_deref(), Some("Why Graphs?"));
        assert_eq!(fm.date.as_deref(), Some("2024-01-15"));
        assert_eq!(fm.author.as_deref(), Some("Ada"));
        assert_eq!(fm.series_name(), Some("Foundations"));
        assert_eq!(fm.series_order, Some(2));
        assert_eq!(fm.description.as_deref(), Some("On structure."));
        assert_eq!(fm.tags, vec!["graphs", "reasoning", "graphs"]);
        assert_eq!(remaining, "This is the content.\n");
    }

    #[test]
    fn test_no_frontmatter_keeps_whole_body() {
        let content = "# Heading\n\nJust text.\n";
        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_unclosed_frontmatter_is_body() {
        let content = "---\ntitle: Oops\n\nNo closing fence.";
        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm.title, None);
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_empty_frontmatter_block() {
        let (fm, remaining) = FrontMatter::parse("---\n---\nBody");
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(remaining, "Body");
    }

    #[test]
    fn test_invalid_yaml_falls_back() {
        let content = "---\ntitle: [broken\n---\nBody";
        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm.title, None);
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_single_string_tags_and_string_order() {
        let content = r#"---
title: Single Tag Post
tags: Notes
seriesOrder: "3"
---
Content here.
"#;

        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.tags, vec!["Notes"]);
        assert_eq!(fm.series_order, Some(3));
        assert_eq!(fm.order(), 3);
    }

    #[test]
    fn test_markdown_separator_not_yaml() {
        let content = r#"
---

Some random text with markdown lists:
- Item 1
- Item 2

---
More content here.
"#;

        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm.title, None);
        assert!(remaining.contains("Some random text"));
    }

    #[test]
    fn test_content_with_url_not_yaml() {
        let content = "---\nCheck out https://example.com/path\n---\nMore content.\n";
        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm.title, None);
        assert!(remaining.contains("https://example.com"));
    }

    #[test]
    fn test_bad_field_keeps_the_rest() {
        let content = r#"---
title: Part One and a Half
date: 2024-03-01
series: Foundations
seriesOrder: 1.5
author:
  name: Ada
---
Body
"#;

        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm.title.as_deref(), Some("Part One and a Half"));
        assert!(fm.parse_date().is_some());
        assert_eq!(fm.series_name(), Some("Foundations"));
        assert_eq!(fm.series_order, None);
        assert_eq!(fm.author, None);
        assert_eq!(remaining, "Body\n");
    }

    #[test]
    fn test_lenient_scalars() {
        let content = "---\ntitle: 2024\nseriesOrder: 2.0\ntags: [rust, 7]\n---\nBody";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.title.as_deref(), Some("2024"));
        assert_eq!(fm.series_order, Some(2));
        // A non-string tag only drops the tags field
        assert!(fm.tags.is_empty());
    }

    #[test]
    fn test_fence_must_open_file() {
        let content = "\n\n---\ntitle: X\n---\nBody";
        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm.title, None);
        assert_eq!(remaining, content);

        let (fm, remaining) = FrontMatter::parse("\u{feff}---\ntitle: X\n---\nBody");
        assert_eq!(fm.title.as_deref(), Some("X"));
        assert_eq!(remaining, "Body");
    }

    #[test]
    fn test_crlf_frontmatter() {
        let content = "---\r\ntitle: Windows\r\n---\r\nBody\r\n";
        let (fm, remaining) = FrontMatter::parse(content);
        assert_eq!(fm.title.as_deref(), Some("Windows"));
        assert_eq!(remaining, "Body\r\n");
    }

    #[test]
    fn test_parse_date() {
        let fm = FrontMatter {
            date: Some("2024-01-15 10:30:00".to_string()),
            ..Default::default()
        };
        let dt = fm.parse_date().unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2024-01-15 10:30");

        assert!(parse_date_string("2024-06-01").is_some());
        assert!(parse_date_string("2024-06-01T12:00:00Z").is_some());
        assert!(parse_date_string("next tuesday").is_none());
    }

    #[test]
    fn test_missing_fields() {
        let fm = FrontMatter {
            title: Some("Has title".to_string()),
            date: Some("not a date".to_string()),
            ..Default::default()
        };
        assert_eq!(fm.missing_fields(), vec!["date"]);
        assert_eq!(FrontMatter::default().missing_fields(), vec!["title", "date"]);
    }

    #[test]
    fn test_empty_series_is_none() {
        let fm = FrontMatter {
            series: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(fm.series_name(), None);
        assert_eq!(fm.order(), 0);
    }
}
