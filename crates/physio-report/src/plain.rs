use crate::blocks::{Block, parse_blocks};

/// Render report markup as readable plain text: one line per paragraph,
/// `- ` before list items, and a blank line before every title after the
/// first. Used for clipboard copy and as the summarizer's input.
pub fn to_plain_text(markup: &str) -> String {
    let mut out = String::new();

    for block in parse_blocks(markup) {
        match &block {
            Block::Heading { .. } if !out.is_empty() => out.push('\n'),
            Block::Bullet(_) => out.push_str("- "),
            _ => {}
        }
        out.push_str(&block.text());
        out.push('\n');
    }

    out.trim_end().to_string()
}
