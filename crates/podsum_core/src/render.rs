//! Maps parsed blocks onto display units, one unit per block.

use crate::blocks::{parse, Block, Depth, HeadingLevel, Span};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListIndent {
    TopLevel,
    Indented,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub emphasized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayUnit {
    LargeHeading(String),
    MediumHeading(String),
    SmallHeading(String),
    ListItem { text: String, indent: ListIndent },
    InlineRun(Vec<TextRun>),
    VerticalSpace,
}

/// Pure 1:1 mapping from blocks to display units, preserving order.
pub fn render(blocks: &[Block]) -> Vec<DisplayUnit> {
    blocks.iter().map(render_block).collect()
}

/// Parse and render structured-summary text in one step.
pub fn render_structured(text: &str) -> Vec<DisplayUnit> {
    render(&parse(text))
}

fn render_block(block: &Block) -> DisplayUnit {
    match block {
        Block::Title { text } => DisplayUnit::LargeHeading(text.clone()),
        Block::Heading {
            level: HeadingLevel::H2,
            text,
        } => DisplayUnit::MediumHeading(text.clone()),
        Block::Heading {
            level: HeadingLevel::H3,
            text,
        } => DisplayUnit::SmallHeading(text.clone()),
        Block::BulletItem { text, depth } => DisplayUnit::ListItem {
            text: text.clone(),
            indent: match depth {
                Depth::TopLevel => ListIndent::TopLevel,
                Depth::Nested => ListIndent::Indented,
            },
        },
        Block::Paragraph { spans } => DisplayUnit::InlineRun(spans.iter().map(text_run).collect()),
        Block::Separator => DisplayUnit::VerticalSpace,
    }
}

fn text_run(span: &Span) -> TextRun {
    TextRun {
        text: span.text().to_string(),
        emphasized: span.is_bold(),
    }
}
