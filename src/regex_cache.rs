//! Thread-local regex cache for terminal patterns
//!
//! Terminal patterns are compiled once per thread and reused across
//! matches. Patterns are compiled with an `^(?:…)` wrapper so a terminal
//! matches exactly at the requested offset when run against the input
//! tail slice.

use hashbrown::HashMap;
use regex::Regex;
use std::cell::RefCell;

thread_local! {
    /// Thread-local cache of compiled, anchored patterns keyed by source
    static REGEX_CACHE: RefCell<HashMap<String, Regex>> = RefCell::new(HashMap::new());
}

/// Get or compile an anchored regex for a terminal's pattern source
///
/// The returned regex is the source wrapped in `^(?:…)`, so matching it
/// against `&input[start..]` is an anchored attempt at `start`.
///
/// # Returns
/// * `Some(Regex)` if the pattern is valid
/// * `None` if the pattern is invalid
#[inline]
pub fn get_or_compile(pattern: &str) -> Option<Regex> {
    REGEX_CACHE.with(|cache| {
        if let Some(regex) = cache.borrow().get(pattern) {
            return Some(regex.clone());
        }

        match Regex::new(&format!("^(?:{})", pattern)) {
            Ok(regex) => {
                cache
                    .borrow_mut()
                    .insert(pattern.to_string(), regex.clone());
                Some(regex)
            }
            Err(_) => None,
        }
    })
}

/// Clear the regex cache
///
/// Call this to free memory if many unique patterns have been compiled.
pub fn clear_cache() {
    REGEX_CACHE.with(|cache| cache.borrow_mut().clear());
}

/// Get the number of cached patterns
pub fn cache_size() -> usize {
    REGEX_CACHE.with(|cache| cache.borrow().len())
}
