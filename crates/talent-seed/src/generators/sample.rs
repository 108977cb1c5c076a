//! Random selection helpers shared by the generators.

use fake::{Fake, faker::lorem::en::Sentence};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::warn;

/// Picks one entry uniformly at random.
///
/// Returns `None` for an empty table.
pub fn pick<'a, T>(table: &'a [T], rng: &mut impl Rng) -> Option<&'a T> {
    table.choose(rng)
}

/// Chooses between `min` and `max` (inclusive) distinct entries from `table`.
///
/// The count is drawn uniformly from the range. A table shorter than `min`
/// cannot satisfy the bounds; it yields the whole table and logs a warning.
pub fn choose_distinct(
    table: &[&'static str],
    min: usize,
    max: usize,
    rng: &mut impl Rng,
) -> Vec<String> {
    if table.is_empty() || max == 0 {
        return Vec::new();
    }

    if table.len() < min {
        warn!(
            "Table of {} entries cannot supply {min} distinct values; using all of them",
            table.len()
        );
    }

    let k = rng.gen_range(min.min(max)..=max).min(table.len());
    table
        .choose_multiple(rng, k)
        .map(|s| s.to_string())
        .collect()
}

/// Generates lorem prose of whole sentences, at most `max_chars` long.
///
/// Always returns at least one sentence; a first sentence longer than the
/// limit is cut at a word boundary and closed with a period.
pub fn text(max_chars: usize, rng: &mut impl Rng) -> String {
    let mut out = String::new();

    loop {
        let sentence: String = Sentence(4..12).fake_with_rng(rng);
        let needed = if out.is_empty() {
            sentence.len()
        } else {
            out.len() + 1 + sentence.len()
        };

        if needed > max_chars {
            if out.is_empty() {
                out = truncate_words(&sentence, max_chars.saturating_sub(1));
                out.push('.');
            }
            return out;
        }

        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&sentence);
    }
}

/// Cuts `s` to at most `max` bytes without splitting a word.
fn truncate_words(s: &str, max: usize) -> String {
    let mut out = String::new();
    for word in s.trim_end_matches('.').split_whitespace() {
        let needed = if out.is_empty() { word.len() } else { out.len() + 1 + word.len() };
        if needed > max {
            break;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
