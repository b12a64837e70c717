//! Fuzzy string scores on a 0-100 scale.
//!
//! `ratio` counts matched characters: `2 * lcs / (len_a + len_b)`, where
//! `lcs` is the longest common subsequence. Insertions and deletions cost
//! one each and a substitution costs two, so a near miss keeps most of its
//! score. `partial_ratio` compares the shorter string against windows of
//! the longer one and keeps the best window.

/// Length of the longest common subsequence, in chars.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; b.len() + 1];
    let mut row = vec![0usize; b.len() + 1];
    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            row[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                row[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut row);
    }
    prev[b.len()]
}

/// Similarity in `0.0..=1.0`. Two empty strings are identical.
fn similarity(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    (2 * lcs_len(a, b)) as f64 / total as f64
}

fn to_score(similarity: f64) -> u8 {
    (similarity * 100.0).round() as u8
}

/// Similarity of two whole strings, 0-100.
pub fn ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    to_score(similarity(&a, &b))
}

/// Best `ratio` of the shorter string against the windows of the longer
/// one. Empty input scores 0.
///
/// A window starts at every offset of the longer string and is as long as
/// the shorter one, cut short at the end of the string. Near-perfect
/// windows (above 99.5) count as 100.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if shorter.len() == longer.len() {
        return to_score(similarity(&shorter, &longer));
    }

    let mut best = 0.0_f64;
    for start in 0..longer.len() {
        let end = (start + shorter.len()).min(longer.len());
        let score = similarity(&shorter, &longer[start..end]);
        if score > 0.995 {
            return 100;
        }
        best = best.max(score);
    }
    to_score(best)
}
