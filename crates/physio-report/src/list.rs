//! Grammatical list joining for narrative sentences.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Conjunction {
    #[default]
    And,
    Or,
}

impl Conjunction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Conjunction::And => "and",
            Conjunction::Or => "or",
        }
    }
}

/// Normalize and join multi-select values into a readable list.
///
/// Each value is trimmed and lower-cased; empty values are dropped and
/// duplicates keep their first position. Zero items give `""`, one gives
/// the item, two give `"a and b"`, more give `"a, b, and c"`.
pub fn join_list<I, S>(items: I, conjunction: Conjunction) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut unique: Vec<String> = Vec::new();
    for item in items {
        let cleaned = item.as_ref().trim().to_lowercase();
        if !cleaned.is_empty() && !unique.contains(&cleaned) {
            unique.push(cleaned);
        }
    }
    join_phrases(&unique, conjunction)
}

/// Join already-formed phrases with the same grammar as [`join_list`],
/// without touching their text.
pub fn join_phrases<S: AsRef<str>>(phrases: &[S], conjunction: Conjunction) -> String {
    let conj = conjunction.as_str();
    match phrases {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} {conj} {}", first.as_ref(), second.as_ref()),
        [rest @ .., last] => {
            let head: Vec<&str> = rest.iter().map(AsRef::as_ref).collect();
            format!("{}, {conj} {}", head.join(", "), last.as_ref())
        }
    }
}

/// A multi-select's values followed by its free-text "Other" entry.
pub fn with_other<'a>(values: &'a [String], other: &'a str) -> impl Iterator<Item = &'a str> {
    values.iter().map(String::as_str).chain(std::iter::once(other))
}
