//! Provider-neutral remote event types and the calendar backend trait.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SweepResult;

/// An event as reported by the remote calendar.
///
/// Backends decode their API responses into this fixed shape at the
/// boundary, so the engine never sees a free-form response map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteEvent {
    /// The event's own identifier in the remote system.
    pub primary_id: String,
    /// Identifier of the series parent, when this event is one occurrence
    /// of a recurring series. Always distinct from `primary_id`.
    pub series_id: Option<String>,
    pub start: EventTime,
    /// Title, or the description when the remote event has no title.
    pub label: String,
}

/// A remote event starts at either a precise date-time or a whole day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventTime {
    DateTime(DateTime<Utc>),
    Date(NaiveDate),
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventTime::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            EventTime::Date(d) => write!(f, "{}", d),
        }
    }
}

/// A remote calendar that can be searched by ICS UID and asked to delete
/// events. Implemented by the Google backend; tests use an in-memory fake.
#[allow(async_fn_in_trait)]
pub trait RemoteCalendar {
    /// Find the remote event carrying `uid`, or `None` when the calendar
    /// has no match. Request failures are fatal for the run and are not
    /// retried.
    async fn locate(&self, uid: &str) -> SweepResult<Option<RemoteEvent>>;

    /// Delete the remote event with `event_id`.
    async fn delete(&self, event_id: &str) -> SweepResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_event_time_display() {
        let dt = EventTime::DateTime(Utc.with_ymd_and_hms(2024, 3, 20, 15, 0, 0).unwrap());
        assert_eq!(dt.to_string(), "2024-03-20T15:00:00+00:00");

        let d = EventTime::Date(NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
        assert_eq!(d.to_string(), "2024-03-20");
    }
}
