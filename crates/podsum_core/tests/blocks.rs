use podsum_core::{parse, render, Block, Depth, DisplayUnit, HeadingLevel, ListIndent, Span, TextRun};
use pretty_assertions::assert_eq;

fn title(text: &str) -> Block {
    Block::Title {
        text: text.to_string(),
    }
}

fn heading(level: HeadingLevel, text: &str) -> Block {
    Block::Heading {
        level,
        text: text.to_string(),
    }
}

fn bullet(text: &str, depth: Depth) -> Block {
    Block::BulletItem {
        text: text.to_string(),
        depth,
    }
}

fn paragraph(text: &str) -> Block {
    Block::Paragraph {
        spans: vec![Span::Plain(text.to_string())],
    }
}

#[test]
fn degenerate_inputs_never_fail() {
    assert_eq!(parse(""), Vec::<Block>::new());
    assert_eq!(parse("\n"), vec![Block::Separator, Block::Separator]);
    assert_eq!(
        parse("   \n\t"),
        vec![Block::Separator, Block::Separator]
    );
    for input in ["#", "##", "###", "-", "*", "**", "***", "\r\n", "- ", "  *  "] {
        let _ = parse(input);
    }
}

#[test]
fn title_wins_only_on_first_line() {
    let blocks = parse("## Episode 12\n## Intro\n### Details");
    assert_eq!(
        blocks,
        vec![
            title("Episode 12"),
            heading(HeadingLevel::H2, "Intro"),
            heading(HeadingLevel::H3, "Details"),
        ]
    );
}

#[test]
fn leading_blank_line_turns_title_into_heading() {
    assert_eq!(
        parse("\n## Episode"),
        vec![Block::Separator, heading(HeadingLevel::H2, "Episode")]
    );
    assert_eq!(
        parse("   \n  ## Episode"),
        vec![Block::Separator, heading(HeadingLevel::H2, "Episode")]
    );
}

#[test]
fn trailing_newlines_each_yield_a_separator() {
    assert_eq!(
        parse("a\n\n"),
        vec![paragraph("a"), Block::Separator, Block::Separator]
    );
}

#[test]
fn crlf_line_endings_are_stripped() {
    assert_eq!(
        parse("## T\r\n- a\r\n"),
        vec![title("T"), bullet("a", Depth::TopLevel), Block::Separator]
    );
}

#[test]
fn subheading_is_never_a_title() {
    assert_eq!(parse("### Sub"), vec![heading(HeadingLevel::H3, "Sub")]);
}

#[test]
fn non_heading_first_line_disables_title() {
    assert_eq!(
        parse("Intro text\n## Later"),
        vec![paragraph("Intro text"), heading(HeadingLevel::H2, "Later")]
    );
}

#[test]
fn marker_only_lines_keep_empty_heading_text() {
    assert_eq!(
        parse("##\n###\n##   "),
        vec![
            heading(HeadingLevel::H2, ""),
            heading(HeadingLevel::H3, ""),
            heading(HeadingLevel::H2, ""),
        ]
    );
}

#[test]
fn bullets_are_classified_by_indent() {
    assert_eq!(
        parse("- item\n  - item\n * item\n    * deep"),
        vec![
            bullet("item", Depth::TopLevel),
            bullet("item", Depth::Nested),
            bullet("item", Depth::TopLevel),
            bullet("deep", Depth::Nested),
        ]
    );
}

#[test]
fn bold_line_is_a_paragraph_not_a_bullet() {
    assert_eq!(
        parse("**Key:** value"),
        vec![Block::Paragraph {
            spans: vec![
                Span::Bold("Key:".to_string()),
                Span::Plain(" value".to_string()),
            ],
        }]
    );
}

#[test]
fn unspaced_markers_still_make_bullets() {
    assert_eq!(
        parse("-item\n  *nested\n**Key:** value"),
        vec![
            bullet("item", Depth::TopLevel),
            bullet("nested", Depth::Nested),
            Block::Paragraph {
                spans: vec![
                    Span::Bold("Key:".to_string()),
                    Span::Plain(" value".to_string()),
                ],
            },
        ]
    );
}

#[test]
fn paragraph_text_is_trimmed() {
    assert_eq!(parse("   spaced out   "), vec![paragraph("spaced out")]);
}

#[test]
fn block_text_reproduces_non_marker_content() {
    let input = "## Show\n\nIntro with **bold** words\n### Part\n- one\n  - two\n**A** and **B**";
    let text: Vec<String> = parse(input).iter().map(Block::plain_text).collect();
    assert_eq!(
        text,
        vec![
            "Show",
            "",
            "Intro with bold words",
            "Part",
            "one",
            "two",
            "A and B",
        ]
    );
}

#[test]
fn one_block_per_line() {
    let input = "## T\nline\n\n- a\n  - b\n### h\n**x** y";
    assert_eq!(parse(input).len(), input.split('\n').count());
}

#[test]
fn rendering_is_one_to_one_and_idempotent() {
    let text = "## Title\n- a\n  - b\n\n### Facts\n**Key:** value";
    let first = render(&parse(text));
    let second = render(&parse(text));
    assert_eq!(first, second);
    assert_eq!(
        first,
        vec![
            DisplayUnit::LargeHeading("Title".to_string()),
            DisplayUnit::ListItem {
                text: "a".to_string(),
                indent: ListIndent::TopLevel,
            },
            DisplayUnit::ListItem {
                text: "b".to_string(),
                indent: ListIndent::Indented,
            },
            DisplayUnit::VerticalSpace,
            DisplayUnit::SmallHeading("Facts".to_string()),
            DisplayUnit::InlineRun(vec![
                TextRun {
                    text: "Key:".to_string(),
                    emphasized: true,
                },
                TextRun {
                    text: " value".to_string(),
                    emphasized: false,
                },
            ]),
        ]
    );
}

#[test]
fn medium_heading_for_level_two() {
    assert_eq!(
        render(&parse("intro\n## Section")),
        vec![
            DisplayUnit::InlineRun(vec![TextRun {
                text: "intro".to_string(),
                emphasized: false,
            }]),
            DisplayUnit::MediumHeading("Section".to_string()),
        ]
    );
}
