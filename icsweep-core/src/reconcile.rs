//! Reconciliation driver: walks the identifier source, resolves each UID
//! against the remote calendar, and applies the deletion policy.

use std::time::Duration;

use crate::error::{SweepError, SweepResult};
use crate::ics::IcsSource;
use crate::policy::{DeletionOutcome, delete_remote_event};
use crate::remote::{RemoteCalendar, RemoteEvent};
use crate::summary::Summary;

/// Pause before each remote lookup, to stay under the calendar API's rate
/// limits. Advisory and local to this process.
pub const DEFAULT_PACE: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
pub struct ReconcileOptions {
    /// Delete located events instead of only reporting them.
    pub delete: bool,
    /// Process at most this many identifiers.
    pub limit: Option<usize>,
    /// Pause inserted before each remote lookup.
    pub pace: Duration,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        ReconcileOptions {
            delete: false,
            limit: None,
            pace: DEFAULT_PACE,
        }
    }
}

/// Per-identifier result, handed to the progress callback as soon as the
/// identifier has been resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum ReconciliationOutcome {
    Matched {
        event: RemoteEvent,
        /// Present only when deletion was requested for the run.
        deletion: Option<DeletionOutcome>,
    },
    Unmatched,
}

/// Run the reconciliation: for each identifier in source order, locate it
/// remotely and (with `options.delete`) apply the deletion policy.
///
/// An identifier with no remote match is recorded in the summary and
/// processing continues. Everything else that goes wrong — a failed
/// request, an exhausted deletion fallback — aborts the run; deletions
/// already applied stay applied.
pub async fn reconcile<R, F>(
    source: &IcsSource,
    remote: &R,
    options: &ReconcileOptions,
    mut on_outcome: F,
) -> SweepResult<Summary>
where
    R: RemoteCalendar,
    F: FnMut(&str, &ReconciliationOutcome),
{
    let mut summary = Summary::new();

    for uid in source.identifiers() {
        if let Some(limit) = options.limit {
            if summary.total_processed() >= limit {
                break;
            }
        }
        summary.note_processed();

        tokio::time::sleep(options.pace).await;

        let outcome = match remote.locate(uid).await? {
            None => {
                summary.note_unmatched(uid);
                ReconciliationOutcome::Unmatched
            }
            Some(event) => {
                let deletion = if options.delete {
                    Some(delete_remote_event(remote, &event).await)
                } else {
                    None
                };
                ReconciliationOutcome::Matched { event, deletion }
            }
        };

        on_outcome(uid, &outcome);

        if let ReconciliationOutcome::Matched {
            event,
            deletion: Some(DeletionOutcome::Failed(detail)),
        } = &outcome
        {
            return Err(SweepError::DeletionFailed(
                event.primary_id.clone(),
                detail.clone(),
            ));
        }
    }

    Ok(summary)
}
