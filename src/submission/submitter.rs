//! Runs submissions in the background and hands results back to the UI loop
//!
//! The UI loop never awaits a submission. Each one is a spawned task that
//! reports through a channel drained with [`Submitter::try_next`]. The task is
//! aborted when it is cancelled, superseded, or when the submitter is dropped,
//! so a result can never land after teardown.

use super::traits::SubmissionTransport;
use crate::state::{Outcome, SubmissionTicket};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Outcome reported for a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionResult {
    pub ticket: SubmissionTicket,
    pub outcome: Outcome,
}

pub struct Submitter {
    transport: Arc<dyn SubmissionTransport>,
    results_tx: mpsc::UnboundedSender<SubmissionResult>,
    results_rx: mpsc::UnboundedReceiver<SubmissionResult>,
    /// Outstanding task, if any
    pending: Option<(SubmissionTicket, JoinHandle<()>)>,
}

impl Submitter {
    pub fn new(transport: Arc<dyn SubmissionTransport>) -> Self {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        Self {
            transport,
            results_tx,
            results_rx,
            pending: None,
        }
    }

    /// Start a submission. Any outstanding submission is aborted first.
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self, ticket: SubmissionTicket, identifier: String) {
        if let Some(superseded) = self.cancel() {
            tracing::warn!(
                "Submission #{} superseded by #{}",
                superseded.id(),
                ticket.id()
            );
        }

        let transport = Arc::clone(&self.transport);
        let results_tx = self.results_tx.clone();
        let handle = tokio::spawn(async move {
            let outcome = transport.submit(&identifier).await;
            // Receiver only goes away with the submitter, which aborts us first
            let _ = results_tx.send(SubmissionResult { ticket, outcome });
        });

        tracing::info!("Submission #{} started", ticket.id());
        self.pending = Some((ticket, handle));
    }

    /// Abort the outstanding submission. Returns its ticket, if there was one.
    pub fn cancel(&mut self) -> Option<SubmissionTicket> {
        let (ticket, handle) = self.pending.take()?;
        handle.abort();
        Some(ticket)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_ticket(&self) -> Option<SubmissionTicket> {
        self.pending.as_ref().map(|(ticket, _)| *ticket)
    }

    /// Take a finished result without blocking
    pub fn try_next(&mut self) -> Option<SubmissionResult> {
        let result = self.results_rx.try_recv().ok()?;
        self.finish(result.ticket);
        Some(result)
    }

    fn finish(&mut self, ticket: SubmissionTicket) {
        if self.pending_ticket() == Some(ticket) {
            self.pending = None;
        }
    }
}

#[cfg(test)]
impl Submitter {
    /// Wait for the next finished result
    pub async fn next(&mut self) -> Option<SubmissionResult> {
        let result = self.results_rx.recv().await?;
        self.finish(result.ticket);
        Some(result)
    }
}

impl Drop for Submitter {
    fn drop(&mut self) {
        if let Some(ticket) = self.cancel() {
            tracing::debug!("Submission #{} cancelled on teardown", ticket.id());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ContactFormState, Outcome};
    use crate::submission::{MockSubmissionTransport, SimulatedTransport};
    use std::time::Duration;

    fn ticket_for(state: &mut ContactFormState, email: &str) -> (SubmissionTicket, String) {
        state.set_email(email);
        let pending = state.begin_submit().unwrap();
        (pending.ticket, pending.identifier)
    }

    #[tokio::test]
    async fn test_result_carries_ticket_and_outcome() {
        let mut mock = MockSubmissionTransport::new();
        mock.expect_submit()
            .withf(|identifier| identifier == "a@b.com")
            .times(1)
            .returning(|_| Outcome::Success);

        let mut state = ContactFormState::default();
        let (ticket, identifier) = ticket_for(&mut state, "a@b.com");
        let mut submitter = Submitter::new(Arc::new(mock));
        submitter.submit(ticket, identifier);
        assert!(submitter.is_pending());

        let result = submitter.next().await.unwrap();

        assert_eq!(result.ticket, ticket);
        assert_eq!(result.outcome, Outcome::Success);
        assert!(!submitter.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_try_next_is_empty_until_delay_elapses() {
        let transport = SimulatedTransport::new(Duration::from_millis(1000), 0.5)
            .with_forced_outcome(Some(Outcome::Failure));
        let mut state = ContactFormState::default();
        let (ticket, identifier) = ticket_for(&mut state, "a@b.com");
        let mut submitter = Submitter::new(Arc::new(transport));

        submitter.submit(ticket, identifier);
        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(submitter.try_next().is_none());

        tokio::time::sleep(Duration::from_millis(2)).await;
        let result = submitter.try_next().unwrap();
        assert_eq!(result.outcome, Outcome::Failure);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_result() {
        let transport = SimulatedTransport::default().with_forced_outcome(Some(Outcome::Success));
        let mut state = ContactFormState::default();
        let (ticket, identifier) = ticket_for(&mut state, "a@b.com");
        let mut submitter = Submitter::new(Arc::new(transport));

        submitter.submit(ticket, identifier);
        assert_eq!(submitter.cancel(), Some(ticket));
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert!(submitter.try_next().is_none());
        assert!(!submitter.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_submission_supersedes_old() {
        let transport = SimulatedTransport::default().with_forced_outcome(Some(Outcome::Success));
        let mut state = ContactFormState::default();
        let (first, identifier) = ticket_for(&mut state, "a@b.com");
        let mut submitter = Submitter::new(Arc::new(transport));
        submitter.submit(first, identifier);

        state.cancel_submission();
        let (second, identifier) = ticket_for(&mut state, "c@d.com");
        submitter.submit(second, identifier);
        assert_eq!(submitter.pending_ticket(), Some(second));

        tokio::time::sleep(Duration::from_secs(5)).await;
        let result = submitter.try_next().unwrap();
        assert_eq!(result.ticket, second);
        assert!(submitter.try_next().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_pending_task() {
        let (completed_tx, mut completed_rx) = mpsc::unbounded_channel::<()>();
        let mut mock = MockSubmissionTransport::new();
        mock.expect_submit().returning(|_| Outcome::Success);

        struct Tracked {
            inner: MockSubmissionTransport,
            completed: mpsc::UnboundedSender<()>,
        }

        #[async_trait::async_trait]
        impl SubmissionTransport for Tracked {
            async fn submit(&self, identifier: &str) -> Outcome {
                tokio::time::sleep(Duration::from_millis(1000)).await;
                let _ = self.completed.send(());
                self.inner.submit(identifier).await
            }
        }

        let mut state = ContactFormState::default();
        let (ticket, identifier) = ticket_for(&mut state, "a@b.com");
        let mut submitter = Submitter::new(Arc::new(Tracked {
            inner: mock,
            completed: completed_tx,
        }));
        submitter.submit(ticket, identifier);
        drop(submitter);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(completed_rx.try_recv().is_err());
    }

    #[test]
    fn test_cancel_without_pending_returns_none() {
        let mock = MockSubmissionTransport::new();
        let mut submitter = Submitter::new(Arc::new(mock));
        assert_eq!(submitter.cancel(), None);
        assert!(submitter.try_next().is_none());
    }
}
