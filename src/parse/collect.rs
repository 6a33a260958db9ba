//! The two ways a sequence of per-unit parse results is folded. Menu pages are
//! all-or-nothing; reservation pages keep whatever rows parse.

use super::Error;

/// Stops at the first failure.
pub fn strict<T>(results: impl IntoIterator<Item = Result<T, Error>>) -> Result<Vec<T>, Error> {
    results.into_iter().collect()
}

/// Keeps successes, drops failures.
pub fn lenient<T>(results: impl IntoIterator<Item = Result<T, Error>>) -> Vec<T> {
    results
        .into_iter()
        .filter_map(|res| match res {
            Ok(v) => Some(v),
            Err(e) => {
                log::debug!("skipping unit that failed to parse: {e}");
                None
            }
        })
        .collect()
}
