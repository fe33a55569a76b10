//! Decode boundary: Google API event types into engine types.

use icsweep_core::{EventTime, RemoteEvent, SweepError, SweepResult};

/// Decode a Google API event into a `RemoteEvent`, validating the fields
/// the engine relies on.
///
/// Google marks an occurrence of a recurring series with a
/// `recurringEventId` pointing at the series parent. An empty value, or one
/// equal to the event's own id, means the event stands alone.
pub fn remote_event_from_google(event: google_calendar::types::Event) -> SweepResult<RemoteEvent> {
    if event.id.is_empty() {
        return Err(SweepError::InvalidRemoteEvent(
            "event has no id".to_string(),
        ));
    }

    let start = match &event.start {
        Some(start) => {
            if let Some(dt) = start.date_time {
                EventTime::DateTime(dt)
            } else if let Some(d) = start.date {
                EventTime::Date(d)
            } else {
                return Err(SweepError::InvalidRemoteEvent(format!(
                    "event {} has no start time",
                    event.id
                )));
            }
        }
        None => {
            return Err(SweepError::InvalidRemoteEvent(format!(
                "event {} has no start time",
                event.id
            )));
        }
    };

    let series_id =
        if event.recurring_event_id.is_empty() || event.recurring_event_id == event.id {
            None
        } else {
            Some(event.recurring_event_id)
        };

    let label = if event.summary.is_empty() {
        event.description
    } else {
        event.summary
    };

    Ok(RemoteEvent {
        primary_id: event.id,
        series_id,
        start,
        label,
    })
}
