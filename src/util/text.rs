//! Text helpers shared by the segmentation engine and the normalizer.

use std::{cmp::Ordering, ops::Range, sync::LazyLock};

use regex::Regex;

static PARENTHESIZED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\([^)]*\)").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
// `2.0TSI` -> `2.0 TSI`, a single trailing letter (`2.0T`) stays attached
static DECIMAL_THEN_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+\.\d+)(\p{L}{2,})").unwrap());
// `TSI2.0` -> `TSI 2.0`
static LETTERS_THEN_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\p{L}{2,})(\d+\.\d+)").unwrap());

/// Characters stripped from both ends of a token before comparing it to a known value.
const TOKEN_PUNCTUATION: &[char] = &[',', ';', ':', '.', '!', '?', '"', '\''];

/// Finds `term` in `haystack` as a whole word, case-insensitively.
///
/// The term is matched literally and any run of whitespace inside it matches any run of
/// whitespace in the input. Edges that are word characters require a word boundary, so
/// `Sport` does not match inside `SportBack`; edges that are not word characters (`#1`,
/// `R/T.`) require whitespace or the string boundary instead.
///
/// Returns the byte range of the term itself within `haystack`.
pub fn find_word(haystack: &str, term: &str) -> Option<Range<usize>> {
    let parts: Vec<&str> = term.split_whitespace().collect();
    let first = parts.first()?.chars().next()?;
    let last = parts.last()?.chars().next_back()?;

    haystack
        .char_indices()
        .filter(|&(start, _)| opens_word(haystack, start, first))
        .find_map(|(start, _)| {
            let end = start + match_parts(&haystack[start..], &parts)?;
            closes_word(haystack, end, last).then_some(start..end)
        })
}

/// Matches `parts` at the start of `text`, separated by at least one whitespace character.
/// Returns the byte length matched.
fn match_parts(text: &str, parts: &[&str]) -> Option<usize> {
    let mut offset = 0;

    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            let rest = &text[offset..];
            let gap = rest.len() - rest.trim_start().len();
            if gap == 0 {
                return None;
            }
            offset += gap;
        }

        offset += match_ignore_case(&text[offset..], part)?;
    }

    Some(offset)
}

fn match_ignore_case(text: &str, part: &str) -> Option<usize> {
    let mut chars = text.char_indices();

    for expected in part.chars() {
        let (_, actual) = chars.next()?;
        if actual != expected && !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }

    Some(chars.next().map_or(text.len(), |(i, _)| i))
}

fn opens_word(haystack: &str, start: usize, first: char) -> bool {
    let before = haystack[..start].chars().next_back();
    if is_word_char(first) {
        !before.is_some_and(is_word_char)
    } else {
        before.is_none_or(char::is_whitespace)
    }
}

fn closes_word(haystack: &str, end: usize, last: char) -> bool {
    let after = haystack[end..].chars().next();
    if is_word_char(last) {
        !after.is_some_and(is_word_char)
    } else {
        after.is_none_or(char::is_whitespace)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Removes `range` from `text` and tidies the whitespace left behind.
pub fn remove_range(text: &str, range: Range<usize>) -> String {
    let mut result = String::with_capacity(text.len());
    result.push_str(&text[..range.start]);
    result.push(' ');
    result.push_str(&text[range.end..]);
    collapse_whitespace(&result)
}

/// Collapses runs of whitespace into single spaces and trims the ends.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

/// Removes parenthesized asides such as `(версия Ruiyi)`.
pub fn strip_parenthesized(text: &str) -> String {
    collapse_whitespace(&PARENTHESIZED.replace_all(text, " "))
}

/// Separates a decimal displacement from an engine family code glued to it.
///
/// `2.0TSI` becomes `2.0 TSI` and `TSI2.0` becomes `TSI 2.0`. Tokens without a decimal
/// number (`xDrive30d`, `P400e`, `CS75`) and single-letter suffixes (`2.0T`) are kept.
pub fn normalize_spacing(text: &str) -> String {
    let text = DECIMAL_THEN_LETTERS.replace_all(text, "$1 $2");
    let text = LETTERS_THEN_DECIMAL.replace_all(&text, "$1 $2");
    collapse_whitespace(&text)
}

/// Strips punctuation that commonly trails a token in listings (`Luxury,`).
pub fn trim_token_punctuation(token: &str) -> &str {
    token.trim_matches(TOKEN_PUNCTUATION)
}

/// Lowercases and collapses whitespace so two spellings can be compared.
pub fn comparison_key(text: &str) -> String {
    collapse_whitespace(trim_token_punctuation(text.trim())).to_lowercase()
}

/// URL slug for a brand name: lowercase, spaces become `-`.
pub fn slugify(name: &str) -> String {
    collapse_whitespace(name).to_lowercase().replace(' ', "-")
}

/// Returns true when `name` consists of more than one whitespace-separated word.
pub fn is_multi_word(name: &str) -> bool {
    name.split_whitespace().nth(1).is_some()
}

/// Orders candidates longest first; equal lengths break alphabetically (case-insensitive),
/// then by exact spelling, so the order never depends on database row order.
pub fn longest_first(a: &str, b: &str) -> Ordering {
    b.chars()
        .count()
        .cmp(&a.chars().count())
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Sorts `values` with [`longest_first`] and drops case-insensitive duplicates.
pub fn sort_longest_first(mut values: Vec<String>) -> Vec<String> {
    values.sort_by(|a, b| longest_first(a, b));
    values.dedup_by(|a, b| a.to_lowercase() == b.to_lowercase());
    values
}
