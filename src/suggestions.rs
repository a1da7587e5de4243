//! # Error Suggestions
//!
//! This module provides helper functions for generating helpful error
//! messages with hints and suggestions. Following CLI recommendations,
//! errors should tell users what went wrong AND how to fix it.

use crate::error::Error;
use crate::record::ProjectRecord;

/// Build an [`Error::UnknownService`] for `name`.
///
/// The hint is a did-you-mean suggestion when a registered service name is
/// close, the list of registered names when none is close, or a pointer to
/// `many create` when the record has no services at all.
pub fn unknown_service(name: &str, record: &ProjectRecord) -> Error {
    let registered: Vec<&str> = record.services.keys().map(String::as_str).collect();

    let hint = if let Some(similar) = find_similar(name, &registered) {
        format!("Did you mean '{}'?", similar)
    } else if registered.is_empty() {
        "No services are registered yet; use `many create` to add one".to_string()
    } else {
        format!("Registered services are: {}", registered.join(", "))
    };

    Error::UnknownService {
        name: name.to_string(),
        hint: Some(hint),
    }
}

/// Find a similar string from a list of candidates using edit distance.
///
/// Returns Some(candidate) if a close match is found (edit distance <= 2).
fn find_similar<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|&candidate| {
            let distance = edit_distance(input, candidate);
            if distance <= 2 && distance < input.len() {
                Some((candidate, distance))
            } else {
                None
            }
        })
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}

/// Calculate the Levenshtein edit distance between two strings.
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut matrix = vec![vec![0usize; b_len + 1]; a_len + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a_len {
        for j in 1..=b_len {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[a_len][b_len]
}
