//! Regex playground: sample texts and find-all matching.

use std::fmt;

use regex::{Regex, RegexBuilder};

pub const SAMPLE_TEXTS: [&str; 3] = [
    "Emails: alice@example.com, bob123@gmail.com, charlie.brown@company.co.uk",
    "Phone numbers: (555) 123-4567, +1-800-555-1234, 123.456.7890",
    "Dates: 2023-12-31, 01/15/2024, 15-Apr-2022",
];

/// Resolve a 1-based sample choice.
///
/// Zero and negative numbers count back from the end, so `0` is the last
/// sample and `-1` the one before it. Anything unparsable or still out of
/// range falls back to the first sample.
pub fn pick_sample(choice: &str) -> &'static str {
    let len = SAMPLE_TEXTS.len() as i64;
    choice
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .map(|i| if i < 0 { i + len } else { i })
        .and_then(|i| usize::try_from(i).ok())
        .and_then(|i| SAMPLE_TEXTS.get(i))
        .copied()
        .unwrap_or(SAMPLE_TEXTS[0])
}

/// Compile a user pattern with bounded program size and nesting.
pub fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .size_limit(1 << 20)
        .nest_limit(50)
        .build()
}

/// One find-all result item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    /// Whole match, or the only capture group.
    Text(String),
    /// One entry per capture group.
    Tuple(Vec<String>),
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Text(text) => write!(f, "'{text}'"),
            Found::Tuple(parts) => {
                let quoted: Vec<String> = parts.iter().map(|p| format!("'{p}'")).collect();
                write!(f, "({})", quoted.join(", "))
            }
        }
    }
}

/// All non-overlapping matches, left to right.
///
/// With no capture groups each item is the whole match; with one group it is
/// that group; with several it is a tuple. Groups that did not participate
/// contribute an empty string.
///
/// An empty match directly after a non-empty one is kept, so `a*` over
/// `baa` yields `''`, `'aa'`, `''`. Only a repeat empty match at the same
/// offset is skipped.
pub fn find_all(regex: &Regex, text: &str) -> Vec<Found> {
    let groups = regex.captures_len() - 1;
    let mut found = Vec::new();
    let mut pos = 0;
    let mut last_empty = None;

    while pos <= text.len() {
        let Some(caps) = regex.captures_at(text, pos) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };
        if whole.is_empty() && last_empty == Some(whole.start()) {
            pos = next_char(text, pos);
            continue;
        }

        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str()).to_owned();
        found.push(match groups {
            0 => Found::Text(group(0)),
            1 => Found::Text(group(1)),
            n => Found::Tuple((1..=n).map(group).collect()),
        });

        last_empty = whole.is_empty().then_some(whole.start());
        pos = whole.end();
    }
    found
}

/// Offset of the character after `pos`, or past the end.
fn next_char(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len() + 1, |c| pos + c.len_utf8())
}

/// Render matches as a bracketed list: `['a', 'b']`.
pub fn format_matches(matches: &[Found]) -> String {
    let items: Vec<String> = matches.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}
