use std::thread;
use std::time::Duration;

use crate::domain::config::RetryConfig;

#[derive(thiserror::Error, Debug)]
pub enum HttpError {
    #[error("request rejected with status {status}: {url}")]
    Client { status: u16, url: String },
    #[error("retries exhausted after {attempts} attempts: {url}: {last_error}")]
    Exhausted {
        attempts: u32,
        url: String,
        last_error: String,
    },
}

/// Blocking GET client with exponential backoff. Server errors and
/// transport failures are retried; 4xx responses fail fast.
pub struct BackoffClient {
    client: reqwest::blocking::Client,
    max_retries: u32,
    initial_delay: Duration,
}

impl BackoffClient {
    pub fn new(retry: &RetryConfig, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            max_retries: retry.max_retries.max(1),
            initial_delay: Duration::from_millis(retry.initial_delay_ms),
        })
    }

    pub fn get(
        &self,
        url: &str,
        api_key: &str,
        params: &[(String, String)],
    ) -> Result<reqwest::blocking::Response, HttpError> {
        let mut last_error = String::new();
        for attempt in 0..self.max_retries {
            match self
                .client
                .get(url)
                .bearer_auth(api_key)
                .query(params)
                .send()
            {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }
                    if status.is_client_error() {
                        return Err(HttpError::Client {
                            status: status.as_u16(),
                            url: url.to_string(),
                        });
                    }
                    last_error = format!("server returned status {}", status.as_u16());
                }
                Err(err) => last_error = err.to_string(),
            }
            if attempt + 1 < self.max_retries {
                let wait = backoff_delay(self.initial_delay, attempt);
                eprintln!(
                    "request failed ({last_error}), retrying in {:.1}s...",
                    wait.as_secs_f64()
                );
                thread::sleep(wait);
            }
        }
        Err(HttpError::Exhausted {
            attempts: self.max_retries,
            url: url.to_string(),
            last_error,
        })
    }
}

fn backoff_delay(initial: Duration, attempt: u32) -> Duration {
    initial * 2u32.saturating_pow(attempt)
}
