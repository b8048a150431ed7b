//! Line-oriented parser for the structured-summary dialect.
//!
//! The dialect is a narrow subset of markdown: `##`/`###` headings, `-`/`*`
//! bullets nested at most one level deep, `**bold**` spans inside paragraph
//! lines, and blank separator lines. Parsing is total: anything that is not
//! recognised degrades to a paragraph.

const HEADING_MARKER: &str = "##";
const SUBHEADING_MARKER: &str = "###";
const BOLD_DELIMITER: &str = "**";
/// Leading whitespace characters at which a bullet counts as nested.
const NESTED_INDENT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H2,
    H3,
}

impl HeadingLevel {
    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

/// Binary nesting tier of a bullet item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    TopLevel,
    Nested,
}

impl Depth {
    pub fn as_u8(self) -> u8 {
        match self {
            Depth::TopLevel => 0,
            Depth::Nested => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Bold(String),
}

impl Span {
    pub fn text(&self) -> &str {
        match self {
            Span::Plain(text) | Span::Bold(text) => text,
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, Span::Bold(_))
    }
}

/// One typed, renderable unit of a structured summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// The document's single leading title.
    Title { text: String },
    Heading { level: HeadingLevel, text: String },
    BulletItem { text: String, depth: Depth },
    Paragraph { spans: Vec<Span> },
    /// A blank line.
    Separator,
}

impl Block {
    /// Textual content of the block with all markers and styling removed.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Title { text }
            | Block::Heading { text, .. }
            | Block::BulletItem { text, .. } => text.clone(),
            Block::Paragraph { spans } => spans.iter().map(Span::text).collect(),
            Block::Separator => String::new(),
        }
    }
}

/// Parse structured-summary text into blocks, one block per `\n`-separated
/// line (a trailing `\r` is dropped from each line).
///
/// Only the very first line may become a [`Block::Title`], and only when it
/// carries a `##` marker (not `###`) followed by some text. Every later `##`
/// line is a level-2 heading.
pub fn parse(text: &str) -> Vec<Block> {
    if text.is_empty() {
        return Vec::new();
    }

    text.split('\n')
        .enumerate()
        .map(|(index, line)| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let trimmed = line.trim();
            match title_text(trimmed) {
                Some(title) if index == 0 => Block::Title {
                    text: title.to_string(),
                },
                _ => classify_line(line, trimmed),
            }
        })
        .collect()
}

fn title_text(trimmed: &str) -> Option<&str> {
    if trimmed.starts_with(SUBHEADING_MARKER) {
        return None;
    }
    let text = trimmed.strip_prefix(HEADING_MARKER)?.trim();
    (!text.is_empty()).then_some(text)
}

fn classify_line(line: &str, trimmed: &str) -> Block {
    // `###` must be tested first: `##` is a prefix of it.
    if let Some(rest) = trimmed.strip_prefix(SUBHEADING_MARKER) {
        return Block::Heading {
            level: HeadingLevel::H3,
            text: rest.trim().to_string(),
        };
    }
    if let Some(rest) = trimmed.strip_prefix(HEADING_MARKER) {
        return Block::Heading {
            level: HeadingLevel::H2,
            text: rest.trim().to_string(),
        };
    }
    if let Some(text) = bullet_text(trimmed) {
        return Block::BulletItem {
            text: text.to_string(),
            depth: bullet_depth(line),
        };
    }
    if trimmed.is_empty() {
        return Block::Separator;
    }
    Block::Paragraph {
        spans: split_bold_spans(trimmed),
    }
}

/// A line starting with `-` or `*` is a bullet, except one opening with the
/// `**` bold delimiter.
fn bullet_text(trimmed: &str) -> Option<&str> {
    if trimmed.starts_with(BOLD_DELIMITER) {
        return None;
    }
    trimmed
        .strip_prefix(|c| c == '-' || c == '*')
        .map(str::trim_start)
}

/// Depth comes from the untrimmed line. A leading tab is an explicit nesting
/// marker on its own.
fn bullet_depth(line: &str) -> Depth {
    let mut indent = 0;
    for ch in line.chars().take_while(|c| c.is_whitespace()) {
        if ch == '\t' {
            return Depth::Nested;
        }
        indent += 1;
    }
    if indent >= NESTED_INDENT {
        Depth::Nested
    } else {
        Depth::TopLevel
    }
}

/// Split a paragraph line into alternating plain and bold spans.
///
/// An unmatched trailing delimiter is kept as literal text. Adjacent plain
/// text is merged and empty spans are dropped.
fn split_bold_spans(text: &str) -> Vec<Span> {
    let parts: Vec<&str> = text.split(BOLD_DELIMITER).collect();
    let delimiters = parts.len() - 1;

    let mut spans = Vec::new();
    let mut plain = String::new();
    for (index, part) in parts.iter().enumerate() {
        let opened = index % 2 == 1;
        if !opened {
            plain.push_str(part);
        } else if index < delimiters {
            flush_plain(&mut plain, &mut spans);
            if !part.is_empty() {
                spans.push(Span::Bold((*part).to_string()));
            }
        } else {
            plain.push_str(BOLD_DELIMITER);
            plain.push_str(part);
        }
    }
    flush_plain(&mut plain, &mut spans);

    spans
}

fn flush_plain(plain: &mut String, spans: &mut Vec<Span>) {
    if !plain.is_empty() {
        spans.push(Span::Plain(std::mem::take(plain)));
    }
}
