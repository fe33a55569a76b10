//! Deletion policy: series-first, with a one-shot fallback to the
//! occurrence itself.

use crate::remote::{RemoteCalendar, RemoteEvent};

/// Result of applying the deletion policy to one located event.
#[derive(Debug, Clone, PartialEq)]
pub enum DeletionOutcome {
    /// The first delete attempt succeeded.
    Deleted,
    /// The series delete failed but deleting the occurrence itself
    /// succeeded.
    DeletedViaFallback,
    /// Every attempt failed; carries the last remote error.
    Failed(String),
}

/// Delete `event` from the remote calendar.
///
/// When the event is one occurrence of a recurring series, the series
/// parent is targeted first so every occurrence goes in a single call.
/// Recurrences have been observed to get orphaned, leaving the parent
/// undeletable while the occurrence is still live; in that case the
/// occurrence itself is deleted instead. A non-recurring event has nothing
/// to fall back to, so its sole attempt is final.
pub async fn delete_remote_event<R: RemoteCalendar>(
    remote: &R,
    event: &RemoteEvent,
) -> DeletionOutcome {
    match &event.series_id {
        Some(series_id) => match remote.delete(series_id).await {
            Ok(()) => DeletionOutcome::Deleted,
            Err(_) => match remote.delete(&event.primary_id).await {
                Ok(()) => DeletionOutcome::DeletedViaFallback,
                Err(e) => DeletionOutcome::Failed(e.to_string()),
            },
        },
        None => match remote.delete(&event.primary_id).await {
            Ok(()) => DeletionOutcome::Deleted,
            Err(e) => DeletionOutcome::Failed(e.to_string()),
        },
    }
}
