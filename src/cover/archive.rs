use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::types::CoverProbeOutcome;

/// URL of the front cover image for a release.
pub fn front_cover_url(base_url: &str, release_id: &str) -> String {
    format!(
        "{uri}/release/{id}/front",
        uri = base_url.trim_end_matches('/'),
        id = release_id
    )
}

/// Checks whether the Cover Art Archive has a front cover at `url`.
///
/// Redirects are followed and the final location is reported, which is where the
/// image actually lives. The body is never read; only the status matters.
///
/// - 2xx: `Found(final_url)`
/// - 404: `NotFound`
/// - anything else, transport errors and timeouts: `TransientError`
pub async fn probe(client: &Client, url: &str, timeout: Duration) -> CoverProbeOutcome {
    let response = match client.get(url).timeout(timeout).send().await {
        Ok(resp) => resp,
        Err(err) if err.is_timeout() => {
            return CoverProbeOutcome::TransientError(format!(
                "timed out after {}ms",
                timeout.as_millis()
            ));
        }
        Err(err) => return CoverProbeOutcome::TransientError(err.to_string()),
    };

    let status = response.status();
    if status.is_success() {
        CoverProbeOutcome::Found(response.url().to_string())
    } else if status == StatusCode::NOT_FOUND {
        CoverProbeOutcome::NotFound
    } else {
        CoverProbeOutcome::TransientError(format!("status {}", status))
    }
}
