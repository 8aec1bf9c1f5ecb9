//! # pattern-locator
//!
//! Finds positions in a haystack of integers where an ordered needle of
//! digits occurs. Haystack entry `i` matches needle element `d` when the
//! decimal rendering of `d` is a substring of the decimal rendering of
//! haystack entry `i`.
//!
//! A match is the list of haystack indices, strictly increasing, one per
//! needle element. Its span is `last - first`.
//!
//! ```
//! use pattern_locator::{find_closest, find_first};
//!
//! let haystack = [662, 154063, 38, 1, 946773, 7877907760054];
//! assert_eq!(find_first(&haystack, &[6, 5]).unwrap(), Some(vec![0, 1]));
//! assert_eq!(find_closest(&haystack, &[6, 5]).unwrap(), Some(vec![0, 1]));
//! ```

pub mod error;

pub use error::LocateError;

use tracing::trace;

/// Every match, one per start position that can complete the needle.
///
/// From each start the scan greedily takes the earliest entry containing
/// the next needle element. After a completed match the next start is the
/// index after that match's first element.
pub fn find_all(haystack: &[i64], needle: &[i64]) -> Result<Vec<Vec<usize>>, LocateError> {
    check_inputs(haystack, needle)?;

    let needle_text: Vec<String> = needle.iter().map(i64::to_string).collect();
    let mut matches = Vec::new();
    let last_start = haystack.len() - needle.len();

    let mut start = 0;
    while start <= last_start {
        match scan_from(haystack, &needle_text, start) {
            Some(found) => {
                start = found[0] + 1;
                matches.push(found);
            }
            None => start += 1,
        }
    }

    trace!(matches = matches.len(), "located needle");
    Ok(matches)
}

/// The first match, if any.
pub fn find_first(haystack: &[i64], needle: &[i64]) -> Result<Option<Vec<usize>>, LocateError> {
    Ok(find_all(haystack, needle)?.into_iter().next())
}

/// The first match whose span does not exceed `max_distance`.
///
/// `max_distance` must be in `1..=haystack.len()`; this is checked before
/// the haystack and needle themselves.
pub fn find_first_within(
    haystack: &[i64],
    needle: &[i64],
    max_distance: usize,
) -> Result<Option<Vec<usize>>, LocateError> {
    if max_distance == 0 {
        return Err(LocateError::DistanceNotPositive);
    }
    if max_distance > haystack.len() {
        return Err(LocateError::DistanceTooLarge {
            max_distance,
            haystack_len: haystack.len(),
        });
    }

    Ok(find_all(haystack, needle)?
        .into_iter()
        .find(|found| span(found) <= max_distance))
}

/// The match with the smallest span. Ties go to the earliest match.
pub fn find_closest(haystack: &[i64], needle: &[i64]) -> Result<Option<Vec<usize>>, LocateError> {
    let mut best: Option<Vec<usize>> = None;
    for found in find_all(haystack, needle)? {
        if best.as_ref().map_or(true, |b| span(&found) < span(b)) {
            best = Some(found);
        }
    }
    Ok(best)
}

/// Whether the decimal rendering of `digits` occurs in that of `number`.
pub fn contains_digits(number: i64, digits: i64) -> bool {
    number.to_string().contains(&digits.to_string())
}

fn check_inputs(haystack: &[i64], needle: &[i64]) -> Result<(), LocateError> {
    if haystack.is_empty() {
        return Err(LocateError::HaystackEmpty);
    }
    if needle.is_empty() {
        return Err(LocateError::NeedleEmpty);
    }
    if haystack.len() < needle.len() {
        return Err(LocateError::HaystackShorter {
            haystack_len: haystack.len(),
            needle_len: needle.len(),
        });
    }
    Ok(())
}

fn scan_from(haystack: &[i64], needle_text: &[String], start: usize) -> Option<Vec<usize>> {
    let mut found = Vec::with_capacity(needle_text.len());
    let mut wanted = needle_text.iter();
    let mut next = wanted.next()?;

    for (index, entry) in haystack.iter().enumerate().skip(start) {
        if entry.to_string().contains(next.as_str()) {
            found.push(index);
            match wanted.next() {
                Some(digits) => next = digits,
                None => return Some(found),
            }
        }
    }
    None
}

fn span(found: &[usize]) -> usize {
    match (found.first(), found.last()) {
        (Some(first), Some(last)) => last - first,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HAYSTACK: [i64; 11] = [
        662,
        154063,
        38,
        1,
        946773,
        7877907760054,
        332,
        76826670,
        7653639346039,
        90593,
        2567954972664,
    ];
    const NEEDLE: [i64; 3] = [6, 5, 4];

    #[test]
    fn test_find_all() {
        assert_eq!(
            find_all(&HAYSTACK, &NEEDLE).unwrap(),
            vec![
                vec![0, 1, 4],
                vec![1, 5, 8],
                vec![4, 5, 8],
                vec![5, 8, 10],
                vec![7, 8, 10],
                vec![8, 9, 10],
            ]
        );
    }

    #[test]
    fn test_input_errors() {
        assert_eq!(find_all(&[], &[0]), Err(LocateError::HaystackEmpty));
        assert_eq!(find_all(&[0], &[]), Err(LocateError::NeedleEmpty));
        assert_eq!(
            find_all(&[123], &[1, 2]),
            Err(LocateError::HaystackShorter {
                haystack_len: 1,
                needle_len: 2,
            })
        );
    }

    #[test]
    fn test_find_first() {
        assert_eq!(find_first(&HAYSTACK, &NEEDLE).unwrap(), Some(vec![0, 1, 4]));
        assert_eq!(find_first(&[5, 3, 5], &[3, 5]).unwrap(), Some(vec![1, 2]));
        assert_eq!(find_first(&[1], &[2]).unwrap(), None);
    }

    #[test]
    fn test_find_first_within() {
        assert_eq!(
            find_first_within(&HAYSTACK, &NEEDLE, 3).unwrap(),
            Some(vec![7, 8, 10])
        );
        assert_eq!(find_first_within(&HAYSTACK, &NEEDLE, 1).unwrap(), None);
        assert_eq!(find_first_within(&[1], &[2], 1).unwrap(), None);
    }

    #[test]
    fn test_find_first_within_distance_errors() {
        assert_eq!(
            find_first_within(&[], &[], 11),
            Err(LocateError::DistanceTooLarge {
                max_distance: 11,
                haystack_len: 0,
            })
        );
        assert_eq!(
            find_first_within(&HAYSTACK, &NEEDLE, 0),
            Err(LocateError::DistanceNotPositive)
        );
        // distance checks run before input checks
        assert_eq!(
            find_first_within(&[], &[], 0),
            Err(LocateError::DistanceNotPositive)
        );
        assert_eq!(
            find_first_within(&[0], &[], 1),
            Err(LocateError::NeedleEmpty)
        );
    }

    #[test]
    fn test_find_closest() {
        assert_eq!(
            find_closest(&HAYSTACK, &NEEDLE).unwrap(),
            Some(vec![8, 9, 10])
        );
        assert_eq!(find_closest(&[1], &[2]).unwrap(), None);
        // [0, 2] and [3, 5] both span 2
        assert_eq!(
            find_closest(&[1, 0, 2, 1, 0, 2], &[1, 2]).unwrap(),
            Some(vec![0, 2])
        );
    }

    #[test]
    fn test_contains_digits() {
        assert!(contains_digits(7653639346039, 39));
        assert!(contains_digits(-15, 5));
        assert!(contains_digits(0, 0));
        assert!(!contains_digits(38, 4));
        assert!(!contains_digits(15, -1));
    }
}
