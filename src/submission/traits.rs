//! Trait abstraction for the submission backend to enable mocking in tests

use crate::state::Outcome;
use async_trait::async_trait;

/// Something that accepts a contact identifier and reports an outcome
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// Submit the identifier and wait for the outcome
    async fn submit(&self, identifier: &str) -> Outcome;
}
