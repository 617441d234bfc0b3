//! Helper functions for describing a fetch in the logs
//!
//! # Examples
//!
//! ```
//! use leetcode_fetcher::helpers::{preview, problem_name_from_url};
//!
//! let name = problem_name_from_url("https://leetcode.com/problems/two-sum/description/");
//! assert_eq!(name.as_deref(), Some("Two Sum"));
//!
//! assert_eq!(preview("héllo", 2), "hé");
//! ```

use regex::Regex;
use std::sync::OnceLock;

const PROBLEM_SLUG_PATTERN: &str = r"(?i)problems/([^/?#]+)(?:/description)?";

fn problem_slug_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PROBLEM_SLUG_PATTERN).expect("valid problem slug pattern"))
}

/// Human-readable problem title taken from the `problems/<slug>` part of a URL
pub fn problem_name_from_url(url: &str) -> Option<String> {
    let slug = problem_slug_regex().captures(url)?.get(1)?.as_str();

    let name = slug
        .split('-')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// First `max_chars` characters of `text`, cut on a char boundary
pub fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
