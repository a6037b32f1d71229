//! Submission handling: the transport capability and the task that runs it

mod simulated;
mod submitter;
mod traits;

pub use simulated::SimulatedTransport;
pub use submitter::Submitter;
pub use traits::SubmissionTransport;

#[cfg(test)]
pub use traits::MockSubmissionTransport;
