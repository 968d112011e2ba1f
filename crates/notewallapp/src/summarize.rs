//! # Extractive Summarizer
//!
//! Produces a bullet-point summary by selecting and reordering existing
//! sentences; no text is ever generated. The pipeline is a single pass with
//! internal stages:
//!
//! 1. **Pre-protect**: decimal points and the periods in a fixed
//!    abbreviation list are swapped for a private-use placeholder so the
//!    segmenter cannot mistake them for sentence boundaries.
//! 2. **Segment**: split on runs of `.`/`!`/`?` followed by whitespace,
//!    restore the placeholders, drop fragments of 15 characters or fewer.
//! 3. **Short-circuit**: no surviving sentences is a failure
//!    ([`NotewallError::EmptyInput`]); input under 200 characters is
//!    already concise and returned unchanged.
//! 4. **Score**: each sentence independently, on word-count sweet spot,
//!    document position, numeric content, importance keywords, boilerplate
//!    phrases, and repeated openings.
//! 5. **Select**: a count proportional to the input size, highest scores
//!    first.
//! 6. **Reorder**: back to document order, one bullet per line, terminal
//!    punctuation guaranteed.
//! 7. **Length guard**: a summary longer than 90% of the input is cut back
//!    to 60% at a sentence boundary.
//!
//! Blank input is the only caller-visible error; everything else yields
//! some summary.

use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Reverse;
use std::collections::HashSet;

use crate::error::{NotewallError, Result};

/// Inputs shorter than this are returned unchanged.
const PASSTHROUGH_CHARS: usize = 200;

/// Fragments at or below this length are discarded during segmentation.
const MIN_SENTENCE_CHARS: usize = 15;

/// Periods in these tokens never end a sentence.
const ABBREVIATIONS: [&str; 11] = [
    "Dr.", "Mr.", "Mrs.", "Ms.", "Prof.", "Sr.", "Jr.", "etc.", "vs.", "i.e.", "e.g.",
];

/// Any of these words marks a sentence as carrying a point worth keeping.
const IMPORTANCE_KEYWORDS: [&str; 15] = [
    "important",
    "key",
    "significant",
    "essential",
    "critical",
    "crucial",
    "main",
    "conclusion",
    "summary",
    "result",
    "finding",
    "therefore",
    "must",
    "remember",
    "note that",
];

/// Repetitive filler that drags a sentence down.
const BOILERPLATE_PHRASES: [&str; 7] = [
    "all rights reserved",
    "terms of service",
    "privacy policy",
    "subscribe to our",
    "sign up for",
    "follow us on",
    "share this",
];

/// Hard markers of page chrome rather than content.
const NOISE_MARKERS: [&str; 3] = ["copyright", "login", "click here"];

/// Placeholder for protected periods; private-use, so it cannot collide
/// with real input.
const DOT_GUARD: char = '\u{E000}';

static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+\s+").unwrap());
static DECIMAL_POINT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d)\.(\d)").unwrap());
static NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?%|\$\d+(?:\.\d+)?|\d+").unwrap());

/// Summarizes `text` into bullet points, or fails with
/// [`NotewallError::EmptyInput`] when nothing summarizable remains.
pub fn summarize(text: &str) -> Result<String> {
    if text.trim().is_empty() {
        return Err(NotewallError::EmptyInput);
    }

    let sentences = segment(text);
    if sentences.is_empty() {
        return Err(NotewallError::EmptyInput);
    }
    if text.chars().count() < PASSTHROUGH_CHARS {
        return Ok(text.to_string());
    }

    let scores = score_sentences(&sentences);
    let keep = select_count(sentences.len());

    let mut ranked: Vec<usize> = (0..sentences.len()).collect();
    ranked.sort_by_key(|&i| Reverse(scores[i]));
    let mut selected: Vec<usize> = ranked.into_iter().take(keep).collect();
    selected.sort_unstable();

    let bullets: Vec<String> = selected
        .into_iter()
        .map(|i| {
            let mut line = sentences[i].clone();
            if !line.ends_with(['.', '!', '?']) {
                line.push('.');
            }
            format!("• {}", line)
        })
        .collect();

    Ok(length_guard(text, bullets.join("\n")))
}

/// Splits `text` into sentences, shielding abbreviation periods and
/// decimal points from the boundary pattern.
fn segment(text: &str) -> Vec<String> {
    let replacement = format!("${{1}}{}${{2}}", DOT_GUARD);
    let mut protected = DECIMAL_POINT
        .replace_all(text, replacement.as_str())
        .into_owned();
    for abbr in ABBREVIATIONS {
        let guarded = abbr.replace('.', &DOT_GUARD.to_string());
        protected = protected.replace(abbr, &guarded);
    }

    SENTENCE_BOUNDARY
        .split(&protected)
        .map(|fragment| fragment.replace(DOT_GUARD, ".").trim().to_string())
        .filter(|fragment| fragment.chars().count() > MIN_SENTENCE_CHARS)
        .collect()
}

fn score_sentences(sentences: &[String]) -> Vec<i32> {
    let mut seen_prefixes: HashSet<String> = HashSet::new();
    let last = sentences.len() - 1;

    sentences
        .iter()
        .enumerate()
        .map(|(i, sentence)| {
            let lower = sentence.to_lowercase();
            let words: Vec<&str> = sentence.split_whitespace().collect();
            let mut score = 0i32;

            match words.len() {
                15..=35 => score += 3,
                10..=50 => score += 2,
                n if n > 50 => score += 1,
                _ => {}
            }

            if i < 3 {
                score += 4;
            }
            if i == last {
                score += 2;
            }

            if NUMERIC.is_match(sentence) {
                score += 4;
            }

            if IMPORTANCE_KEYWORDS.iter().any(|k| lower.contains(k)) {
                score += 2;
            }

            if BOILERPLATE_PHRASES.iter().any(|p| lower.contains(p)) {
                score -= 3;
            }

            if words.len() < 8 || NOISE_MARKERS.iter().any(|m| lower.contains(m)) {
                score -= 10;
            }

            let prefix = words
                .iter()
                .take(5)
                .map(|w| w.to_lowercase())
                .collect::<Vec<_>>()
                .join(" ");
            if !seen_prefixes.insert(prefix) {
                score -= 4;
            }

            score
        })
        .collect()
}

/// How many sentences to keep for an input of `n` sentences.
fn select_count(n: usize) -> usize {
    if n <= 5 {
        n.min(n.saturating_sub(2).max(2))
    } else if n <= 15 {
        // 30%, rounded up
        (n * 3).div_ceil(10).max(3)
    } else {
        (n / 4).clamp(4, 8)
    }
}

/// Caps a runaway summary: anything over 90% of the original is cut back
/// to 60%, preferring the nearest sentence boundary past half the target.
fn length_guard(original: &str, summary: String) -> String {
    let orig_len = original.chars().count();
    let sum_len = summary.chars().count();
    if sum_len * 10 <= orig_len * 9 {
        return summary;
    }

    let target = orig_len * 6 / 10;
    let chars: Vec<char> = summary.chars().collect();
    let cut = chars.len().min(target);
    let floor = target / 2;

    for i in (floor..cut).rev() {
        if matches!(chars[i], '.' | '!' | '?') {
            return chars[..=i].iter().collect();
        }
    }

    let truncated: String = chars[..cut].iter().collect();
    format!("{}...", truncated.trim_end())
}
