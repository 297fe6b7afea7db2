use crate::log_warn;
use crate::shared::errors::{AppError, AppResult};
use reqwest::{Client, Response};
use std::future::Future;
use std::time::Duration;

/// Shared HTTP plumbing for external metadata providers.
pub struct CommonHttpHandler;

impl CommonHttpHandler {
    pub fn create_http_client(timeout_secs: u64, user_agent: &str) -> AppResult<Client> {
        Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))
    }

    /// Execute a request with a single retry on transient failure
    /// (timeout, connection error, 5xx). Non-transient errors are returned
    /// immediately; exhaustion surfaces as `MetadataLookup`.
    pub async fn execute_with_retry<F, Fut>(
        request_fn: F,
        provider: &str,
        operation: &str,
    ) -> AppResult<Response>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<Response, reqwest::Error>>,
    {
        let mut last_err: Option<AppError> = None;

        for attempt in 0..2 {
            if attempt > 0 {
                log_warn!("Retrying {} {} (attempt {})", provider, operation, attempt + 1);
                tokio::time::sleep(Duration::from_millis(500)).await;
            }

            match request_fn().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }
                    if status.as_u16() == 404 {
                        return Err(AppError::NotFound(format!(
                            "{} returned 404 for {}",
                            provider, operation
                        )));
                    }
                    if status.is_server_error() {
                        last_err = Some(AppError::MetadataLookup(format!(
                            "{} {} failed with HTTP {}",
                            provider, operation, status
                        )));
                        continue;
                    }
                    return Err(AppError::ApiError(format!(
                        "{} {} failed with HTTP {}",
                        provider, operation, status
                    )));
                }
                Err(e) if e.is_timeout() || e.is_connect() => {
                    last_err = Some(AppError::MetadataLookup(format!(
                        "{} {} failed: {}",
                        provider, operation, e
                    )));
                    continue;
                }
                Err(e) => return Err(AppError::from(e)),
            }
        }

        Err(last_err.unwrap_or_else(|| {
            AppError::MetadataLookup(format!("{} {} failed", provider, operation))
        }))
    }
}
