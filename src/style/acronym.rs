//! Acronym-tolerant camelCase and PascalCase matchers.
//!
//! These conventions decide where an uppercase run ends by looking at the
//! characters after it (a capitalized word, a digit, or the end of the
//! name). The `regex` crate has no lookahead, so the boundaries are scanned
//! by hand here.

/// Acronym-tolerant camelCase.
///
/// The name must be ASCII alphanumeric. It may start with a lowercase run, a
/// digit, or an uppercase acronym whose end is followed by a digit, by the
/// end of the name, or by a lowercase letter when the acronym has at least
/// two capitals (`USPopulation`: `US` then `Population`).
pub fn is_camel_case(name: &str) -> bool {
    let bytes = name.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_alphanumeric) {
        return false;
    }

    let first = bytes[0];
    if first.is_ascii_lowercase() || first.is_ascii_digit() {
        return true;
    }

    let run = leading_upper_run(bytes);
    match bytes.get(run) {
        None => true,
        Some(next) if next.is_ascii_digit() => true,
        Some(next) => run >= 2 && next.is_ascii_lowercase(),
    }
}

/// Acronym-tolerant PascalCase.
///
/// The name must split into consecutive segments, each one of:
/// - a capitalized word: an uppercase letter then lowercase letters/digits
/// - a digit run
/// - an acronym: an uppercase run ending at a digit, at the end of the
///   name, or right before the capital that starts a capitalized word
pub fn is_pascal_case(name: &str) -> bool {
    let bytes = name.as_bytes();
    if bytes.is_empty() {
        return false;
    }

    // reachable[i]: some segmentation covers bytes[..i]
    let mut reachable = vec![false; bytes.len() + 1];
    reachable[0] = true;

    for start in 0..bytes.len() {
        if !reachable[start] {
            continue;
        }
        for end in segment_ends(bytes, start) {
            reachable[end] = true;
        }
    }

    reachable[bytes.len()]
}

fn leading_upper_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_uppercase()).count()
}

/// Every position a single segment starting at `start` can end at.
fn segment_ends(bytes: &[u8], start: usize) -> Vec<usize> {
    let mut ends = Vec::new();
    let first = bytes[start];

    if first.is_ascii_digit() {
        let mut end = start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            ends.push(end);
        }
        return ends;
    }

    if !first.is_ascii_uppercase() {
        return ends;
    }

    // Capitalized word
    let mut end = start + 1;
    while end < bytes.len() && (bytes[end].is_ascii_lowercase() || bytes[end].is_ascii_digit()) {
        end += 1;
        ends.push(end);
    }

    // Acronym
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_uppercase() {
        end += 1;
        if acronym_may_end_at(bytes, end) {
            ends.push(end);
        }
    }

    ends
}

fn acronym_may_end_at(bytes: &[u8], end: usize) -> bool {
    match bytes.get(end) {
        None => true,
        Some(b) if b.is_ascii_digit() => true,
        Some(b) if b.is_ascii_uppercase() => bytes
            .get(end + 1)
            .is_some_and(|next| next.is_ascii_lowercase()),
        // Non-word characters satisfy the boundary but cannot start a segment,
        // so the name is rejected further along.
        Some(b) => !b.is_ascii_alphanumeric() && *b != b'_',
    }
}
