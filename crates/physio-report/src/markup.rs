//! Building blocks of the report markup.

use crate::list::{Conjunction, join_list};

/// HTML-escape user-supplied text before it is placed in markup.
pub fn escape(text: &str) -> String {
    tera::escape_html(text)
}

/// Escape a trimmed, lower-cased value for use mid-sentence.
pub fn lower(text: &str) -> String {
    escape(&text.trim().to_lowercase())
}

/// Escape a trimmed value, keeping its case.
pub fn verbatim(text: &str) -> String {
    escape(text.trim())
}

/// [`join_list`] with `and`, escaped.
pub fn joined<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    escape(&join_list(items, Conjunction::And))
}

pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// The ordered fragments of one section body. Blank fragments are skipped.
#[derive(Debug, Default)]
pub struct Fragments(Vec<String>);

impl Fragments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fragment: impl AsRef<str>) {
        let fragment = fragment.as_ref().trim();
        if !fragment.is_empty() {
            self.0.push(fragment.to_string());
        }
    }

    /// Push `prefix <list>.` when the list is non-empty.
    pub fn sentence<I, S>(&mut self, prefix: &str, items: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = joined(items);
        if !list.is_empty() {
            self.push(format!("{prefix} {list}."));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn join(&self, separator: &str) -> String {
        self.0.join(separator)
    }
}

/// `<strong>Label:</strong><ul><li>..</li></ul>`, or nothing when there
/// are no items. Items must already be escaped.
pub fn labeled_list(label: &str, items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut out = format!("<strong>{label}:</strong><ul>");
    for item in items {
        out.push_str("<li>");
        out.push_str(item);
        out.push_str("</li>");
    }
    out.push_str("</ul>");
    out
}

/// Wrap a section body under a colored title. Each line of `content`
/// becomes a paragraph; a blank body yields nothing.
pub fn section(title: &str, color: &str, content: &str) -> String {
    if is_blank(content) {
        return String::new();
    }
    let paragraphs: String = content
        .lines()
        .filter(|line| !is_blank(line))
        .map(|line| format!("<p>{}</p>", line.trim()))
        .collect();
    format!(
        "<div class=\"mb-4\"><strong style=\"color: {color};\">{title}:</strong><div class=\"pl-2\">{paragraphs}</div></div>"
    )
}

pub fn banner(text: &str, color: &str) -> String {
    format!("<div class=\"mb-4\"><strong style=\"color: {color};\">{text}</strong></div>")
}
