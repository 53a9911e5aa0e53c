//! Markdown rendering with heading anchors, glossary terms and syntax highlighting

use anyhow::Result;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use super::toc::{anchor_id, atx_heading_text};
use super::Glossary;

/// Markdown renderer with syntax highlighting
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    line_numbers: bool,
    glossary: Glossary,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self::with_options("base16-ocean.dark", false)
    }

    /// Create with custom settings
    pub fn with_options(theme: &str, line_numbers: bool) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme.to_string(),
            line_numbers,
            glossary: Glossary::default(),
        }
    }

    /// Decorate bold terms that have a glossary definition
    pub fn with_glossary(mut self, glossary: Glossary) -> Self {
        self.glossary = glossary;
        self
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> Result<String> {
        // Front-matter is split off by FrontMatter::parse(), so no metadata blocks here
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_MATH
            | Options::ENABLE_GFM;

        // Ids come from the raw heading source, the same text the TOC scan sees
        let mut heading_ids = Parser::new_ext(markdown, options)
            .into_offset_iter()
            .filter_map(|(event, range)| match event {
                Event::Start(Tag::Heading { .. }) => {
                    Some(anchor_id(&heading_source_text(&markdown[range])))
                }
                _ => None,
            })
            .collect::<Vec<_>>()
            .into_iter();

        let parser = Parser::new_ext(markdown, options);
        let events = self.decorate_terms(parser);

        let mut output: Vec<Event> = Vec::new();
        let mut heading: Option<(usize, String, Vec<Event>)> = None;
        let mut code_block: Option<(Option<String>, String)> = None;

        for event in events {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                        _ => None,
                    };
                    code_block = Some((lang, String::new()));
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((lang, code)) = code_block.take() {
                        let highlighted = self.highlight_code(&code, lang.as_deref());
                        output.push(Event::Html(CowStr::from(highlighted)));
                    }
                }
                Event::Text(text) if code_block.is_some() => {
                    if let Some((_, code)) = code_block.as_mut() {
                        code.push_str(&text);
                    }
                }
                Event::Start(Tag::Heading { level, .. }) => {
                    let id = heading_ids.next().unwrap_or_default();
                    heading = Some((level as usize, id, Vec::new()));
                }
                Event::End(TagEnd::Heading(_)) => {
                    if let Some((level, id, inner)) = heading.take() {
                        output.push(Event::Html(CowStr::from(render_heading(level, id, inner))));
                    }
                }
                event => match heading.as_mut() {
                    Some((_, _, inner)) => inner.push(event),
                    None => output.push(event),
                },
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, output.into_iter());

        Ok(html_output)
    }

    /// Wrap `**term**` spans that the glossary defines
    fn decorate_terms<'a>(&self, events: impl Iterator<Item = Event<'a>>) -> Vec<Event<'a>> {
        let mut output = Vec::new();
        let mut strong: Vec<Event<'a>> = Vec::new();
        let mut depth = 0usize;

        for event in events {
            match event {
                Event::Start(Tag::Strong) => {
                    depth += 1;
                    strong.push(event);
                }
                Event::End(TagEnd::Strong) if depth > 0 => {
                    depth -= 1;
                    strong.push(event);
                    if depth == 0 {
                        let inner = &strong[1..strong.len() - 1];
                        let term = plain_text(inner);
                        match self.glossary.lookup(&term) {
                            Some(definition) => {
                                output.push(Event::InlineHtml(CowStr::from(format!(
                                    r#"<span class="glossary-term" data-term="{}" title="{}">"#,
                                    html_escape(&term),
                                    html_escape(definition)
                                ))));
                                output.append(&mut strong);
                                output.push(Event::InlineHtml(CowStr::from("</span>")));
                            }
                            None => output.append(&mut strong),
                        }
                    }
                }
                event if depth > 0 => strong.push(event),
                event => output.push(event),
            }
        }

        // Unbalanced input: flush whatever was buffered
        output.append(&mut strong);
        output
    }

    /// Highlight a code block
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next());

        let highlighted = theme.and_then(|theme| {
            highlighted_html_for_string(code, &self.syntax_set, syntax, theme).ok()
        });

        match highlighted {
            Some(highlighted) if self.line_numbers => self.add_line_numbers(&highlighted, lang),
            Some(highlighted) => format!(
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                lang, highlighted
            ),
            None => format!(
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                lang,
                html_escape(code)
            ),
        }
    }

    /// Add line numbers to highlighted code
    fn add_line_numbers(&self, code: &str, lang: &str) -> String {
        let lines: Vec<&str> = code.lines().collect();

        let gutter = (1..=lines.len())
            .map(|n| format!(r#"<span class="line-number">{}</span>"#, n))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"<figure class="highlight {}"><table><tr><td class="gutter"><pre>{}</pre></td><td class="code"><pre>{}</pre></td></tr></table></figure>"#,
            lang,
            gutter,
            lines.join("\n")
        )
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Heading text as written in the source, markup included.
///
/// ATX headings drop their hash fences; setext headings drop the underline
/// and join their lines with a space.
fn heading_source_text(source: &str) -> String {
    let line = source.trim_start().lines().next().unwrap_or_default();
    let after_hashes = line.trim_start_matches('#');
    let hashes = line.len() - after_hashes.len();
    if (1..=6).contains(&hashes)
        && (after_hashes.is_empty() || after_hashes.starts_with([' ', '\t']))
    {
        return atx_heading_text(line).to_string();
    }
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !is_setext_underline(line))
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_setext_underline(line: &str) -> bool {
    line.chars().all(|c| c == '=') || line.chars().all(|c| c == '-')
}

/// Render a heading wrapped in a self-link
fn render_heading(level: usize, id: String, inner: Vec<Event>) -> String {
    let mut content = String::new();
    html::push_html(&mut content, inner.into_iter());
    format!(
        r##"<h{level} id="{id}"><a class="anchor" href="#{id}">{content}</a></h{level}>"##,
        level = level,
        id = html_escape(&id),
        content = content
    ) + "\n"
}

/// Concatenated text of inline events
fn plain_text(events: &[Event]) -> String {
    events
        .iter()
        .filter_map(|e| match e {
            Event::Text(t) | Event::Code(t) => Some(t.as_ref()),
            _ => None,
        })
        .collect()
}

/// Simple HTML escaping
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
