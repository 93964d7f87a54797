//! Progress notification port
//!
//! Lets a view show a loading indicator while a submission is outstanding.

use janus_domain::{DebateOutcome, PlatformId};

/// Callbacks around one submission
///
/// Implementations live in the presentation layer.
pub trait SubmitProgress: Send + Sync {
    /// Called right before the backend is contacted.
    fn on_submit_start(&self, platforms: &[PlatformId]);

    /// Called when the submission produced responses.
    fn on_submit_complete(&self, outcome: &DebateOutcome);

    /// Called when the submission ended in an error.
    fn on_submit_failed(&self, _message: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl SubmitProgress for NoProgress {
    fn on_submit_start(&self, _platforms: &[PlatformId]) {}
    fn on_submit_complete(&self, _outcome: &DebateOutcome) {}
}
