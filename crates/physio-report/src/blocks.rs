//! Reads compiled report markup back into a flat sequence of blocks.
//!
//! Only the tags the compiler emits are understood. A `<strong>` carrying a
//! `color` style is a section title or banner; a bare `<strong>` is bold
//! inline text. Everything else that opens or closes a block (`p`, `div`,
//! `ul`, `br`) ends the current paragraph.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub bold: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { text: String, color: Option<String> },
    Paragraph(Vec<Span>),
    Bullet(Vec<Span>),
}

impl Block {
    /// The block's text with inline formatting dropped.
    pub fn text(&self) -> String {
        match self {
            Block::Heading { text, .. } => text.clone(),
            Block::Paragraph(spans) | Block::Bullet(spans) => spans.iter().map(|s| s.text.as_str()).collect(),
        }
    }
}

pub fn parse_blocks(markup: &str) -> Vec<Block> {
    let mut reader = BlockReader::default();
    let mut rest = markup;

    while let Some(open) = rest.find('<') {
        reader.text(&rest[..open]);
        match rest[open..].find('>') {
            Some(len) => {
                reader.tag(&rest[open + 1..open + len]);
                rest = &rest[open + len + 1..];
            }
            None => {
                reader.text(&rest[open..]);
                rest = "";
            }
        }
    }
    reader.text(rest);

    reader.finish()
}

/// Undo HTML escaping.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&#x2F;", "/")
        .replace("&#47;", "/")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

#[derive(Debug, Default)]
struct BlockReader {
    blocks: Vec<Block>,
    spans: Vec<Span>,
    heading: Option<(String, Option<String>)>,
    bold: bool,
    in_item: bool,
}

impl BlockReader {
    fn text(&mut self, raw: &str) {
        if raw.is_empty() {
            return;
        }
        let text = decode_entities(raw);
        if let Some((heading, _)) = &mut self.heading {
            heading.push_str(&text);
        } else {
            self.spans.push(Span { text, bold: self.bold });
        }
    }

    fn tag(&mut self, tag: &str) {
        let tag = tag.trim().trim_end_matches('/').trim();
        let (name, attrs) = tag.split_once(char::is_whitespace).unwrap_or((tag, ""));

        match name.to_ascii_lowercase().as_str() {
            "strong" | "b" => match style_color(attrs) {
                Some(color) => {
                    self.flush();
                    self.heading = Some((String::new(), Some(color)));
                }
                None => self.bold = true,
            },
            "/strong" | "/b" => match self.heading.take() {
                Some((text, color)) => {
                    let text = text.trim().to_string();
                    if !text.is_empty() {
                        self.blocks.push(Block::Heading { text, color });
                    }
                }
                None => self.bold = false,
            },
            "li" => {
                self.flush();
                self.in_item = true;
            }
            "/li" => {
                self.flush();
                self.in_item = false;
            }
            "br" | "p" | "/p" | "div" | "/div" | "ul" | "/ul" => self.flush(),
            _ => {}
        }
    }

    fn flush(&mut self) {
        let mut spans = std::mem::take(&mut self.spans);
        spans.retain(|s| !s.text.is_empty());
        if spans.iter().all(|s| s.text.trim().is_empty()) {
            return;
        }

        if let Some(first) = spans.first_mut() {
            first.text = first.text.trim_start().to_string();
        }
        if let Some(last) = spans.last_mut() {
            last.text = last.text.trim_end().to_string();
        }

        self.blocks.push(if self.in_item {
            Block::Bullet(spans)
        } else {
            Block::Paragraph(spans)
        });
    }

    fn finish(mut self) -> Vec<Block> {
        // An unclosed title is kept as bold text.
        if let Some((text, _)) = self.heading.take() {
            self.spans.push(Span { text, bold: true });
        }
        self.flush();
        self.blocks
    }
}

/// The value of `color:` inside a `style="..."` attribute.
fn style_color(attrs: &str) -> Option<String> {
    let start = attrs.find("color:")? + "color:".len();
    let value: String = attrs[start..]
        .chars()
        .take_while(|c| *c != ';' && *c != '"' && *c != '\'')
        .collect();
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
