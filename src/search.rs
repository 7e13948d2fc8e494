//! Searches over sorted slices.

use std::cmp::Ordering;

use tracing::debug;

use crate::error::{Error, Result};

/// Returns the index of `needle` in the ascending `haystack`. With duplicates, any matching
/// index may be returned.
///
/// Takes `O(lg N)` comparisons.
///
/// # Errors
///
/// [`Error::NotFound`] when `needle` isn't in `haystack`.
///
/// # Examples
///
/// ```
/// use textbook::search::binary_search;
/// use textbook::Error;
///
/// let haystack = [4, 10, 12, 13, 20, 50, 66];
///
/// assert_eq!(binary_search(&haystack, &4), Ok(0));
/// assert_eq!(binary_search(&haystack, &40), Err(Error::NotFound));
/// ```
pub fn binary_search<T: Ord>(haystack: &[T], needle: &T) -> Result<usize> {
    let mut lo = 0;
    let mut hi = haystack.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match haystack[mid].cmp(needle) {
            Ordering::Equal => return Ok(mid),
            Ordering::Greater => hi = mid,
            Ordering::Less => lo = mid + 1,
        }
    }

    debug!(len = haystack.len(), "binary search found no match");
    Err(Error::NotFound)
}

/// Returns the first index holding `target` in `breaks`, a slice where every value before that
/// index differs from `target` and every value from it onwards equals it. The classic use is a
/// run of `false`s followed by `true`s: the lowest floor at which a crystal ball breaks.
///
/// Jumps ahead `√N` at a time until it lands on `target` (dropping the first ball), then walks
/// the last jump one step at a time (dropping the second). Takes `O(√N)` probes.
///
/// # Errors
///
/// [`Error::NotFound`] when nothing in `breaks` equals `target`.
///
/// # Examples
///
/// ```
/// use textbook::search::two_crystal_balls;
///
/// let mut floors = vec![false; 100];
/// floors[63..].fill(true);
///
/// assert_eq!(two_crystal_balls(&floors, &true), Ok(63));
/// ```
pub fn two_crystal_balls<T: PartialEq>(breaks: &[T], target: &T) -> Result<usize> {
    if breaks.is_empty() {
        return Err(Error::NotFound);
    }

    let jump = (breaks.len() as f64).sqrt().floor().max(1.0) as usize;

    let mut probe = jump;
    while probe < breaks.len() && breaks[probe] != *target {
        probe += jump;
    }

    // Everything up to the last probe that missed is known not to match.
    let start = probe - jump;
    let end = probe.min(breaks.len() - 1);
    match (start..=end).find(|&i| breaks[i] == *target) {
        Some(i) => Ok(i),
        None => {
            debug!(len = breaks.len(), "two crystal balls found no match");
            Err(Error::NotFound)
        }
    }
}
