//! Bounded retry for catalog calls.
//!
//! Attempts run strictly one after another with no delay in between, and
//! every error counts as retryable. After `1 + retries` failed attempts the
//! last error is returned to the caller.

use std::fmt::Display;
use std::future::Future;

/// Run `op`, retrying up to `retries` more times after a failure.
///
/// # Errors
///
/// Returns the error of the final attempt once the budget is spent.
pub async fn with_retries<T, E, F, Fut>(retries: u32, mut op: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut remaining = retries;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if remaining > 0 => {
                tracing::warn!(error = %e, remaining, "Catalog query failed, retrying");
                remaining -= 1;
            }
            Err(e) => return Err(e),
        }
    }
}
