//! Answer grading for typed review attempts.

use crate::error::{Result, ReviewError};

/// Normalize an answer before comparison.
///
/// Lower-cases the text, collapses every run of whitespace into a single
/// space and strips leading whitespace. Trailing whitespace survives as a
/// single space.
pub fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_space = false;

    for c in s.trim_start().chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.extend(c.to_lowercase());
            in_space = false;
        }
    }

    out
}

/// Grade a submitted answer against the expected one.
///
/// Returns the edit distance between the normalized operands.
pub fn grade(expected: &str, submitted: &str) -> usize {
    levenshtein_distance(&normalize(expected), &normalize(submitted))
}

/// Grade raw bytes, rejecting anything that is not UTF-8 text.
pub fn grade_utf8(expected: &[u8], submitted: &[u8]) -> Result<usize> {
    let expected = decode(expected, "expected")?;
    let submitted = decode(submitted, "submitted")?;
    Ok(grade(expected, submitted))
}

fn decode<'a>(bytes: &'a [u8], what: &str) -> Result<&'a str> {
    std::str::from_utf8(bytes)
        .map_err(|e| ReviewError::InvalidInput(format!("{} text is not valid UTF-8: {}", what, e)))
}

/// Calculate Levenshtein distance between two strings.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rolling rows are enough
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
