// Request backoff
//
// Retries failures where a second attempt can plausibly succeed:
// connection drops, timeouts, 5xx responses, and rate limiting. Client
// errors such as an unknown user surface immediately, without burning
// backoff delay first.

use std::fmt::Display;
use std::time::Duration;
use tokio::time::sleep;

const MAX_ATTEMPTS: u32 = 3;
const BASE_DELAY_MS: u64 = 500;

/// Whether a failed GitHub request is worth another attempt.
pub(super) fn transient_http(error: &reqwest::Error) -> bool {
    if error.is_connect() || error.is_timeout() {
        return true;
    }
    match error.status() {
        Some(status) => {
            status.is_server_error() || status == reqwest::StatusCode::TOO_MANY_REQUESTS
        }
        None => false,
    }
}

/// Run a request, backing off exponentially while `is_transient` says a
/// retry could help. Permanent errors are returned on the spot.
pub(super) async fn retry_request<F, Fut, T, E>(
    f: F,
    is_transient: impl Fn(&E) -> bool,
) -> Result<T, E>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: Display,
{
    let mut attempt = 1;
    loop {
        match f().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                if attempt == MAX_ATTEMPTS || !is_transient(&error) {
                    return Err(error);
                }
                let delay = Duration::from_millis(BASE_DELAY_MS << (attempt - 1));
                tracing::warn!(
                    "GitHub request failed ({}), retrying in {:?} (attempt {}/{})",
                    error,
                    delay,
                    attempt,
                    MAX_ATTEMPTS
                );
                sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
