//! Simulated submission port used by every form page.
//!
//! Waits a fixed latency in the browser, then logs the JSON payload. Outside
//! the browser the wait is skipped so the port resolves immediately.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::time::Duration;

use async_trait::async_trait;
use forms::{FormRecord, SubmissionPort, SubmitError};
use serde::Serialize;

/// Artificial round-trip applied before a submission completes.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(1500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulatedSubmitter {
    latency: Duration,
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self { latency: SIMULATED_LATENCY }
    }
}

impl SimulatedSubmitter {
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

#[async_trait(?Send)]
impl<R: FormRecord> SubmissionPort<R> for SimulatedSubmitter {
    async fn submit(&self, record: &R) -> Result<(), SubmitError> {
        let payload = payload_json(record)?;

        #[cfg(feature = "hydrate")]
        gloo_timers::future::sleep(self.latency).await;

        log::info!("{} form submitted: {payload}", R::NAME);
        Ok(())
    }
}

/// Serialize the record the way a real endpoint would receive it.
///
/// # Errors
///
/// Returns [`SubmitError::Transport`] if the record cannot be encoded.
pub fn payload_json<R: Serialize>(record: &R) -> Result<String, SubmitError> {
    serde_json::to_string(record).map_err(|e| SubmitError::Transport(e.to_string()))
}
