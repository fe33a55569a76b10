//! Post-run lookup of failing identifiers in the ICS structure.

use crate::error::SweepResult;
use crate::ics::{IcsComponent, IcsSource};
use crate::summary::Summary;

/// Resolve every failing UID back to its ICS component, keeping only those
/// worth showing: alarms are purely administrative, and a component without
/// a summary has nothing to display.
///
/// Every failing UID was extracted from this same source, so a lookup miss
/// is a logic error (or the file changed under us) and fails the report.
pub fn missing_components<'a>(
    source: &'a IcsSource,
    summary: &Summary,
) -> SweepResult<Vec<&'a IcsComponent>> {
    let mut components = Vec::with_capacity(summary.failure_count());
    for uid in summary.failing_uids() {
        components.push(source.find_component(uid)?);
    }

    Ok(components
        .into_iter()
        .filter(|c| c.kind != "VALARM" && c.summary.is_some())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SweepError;

    const ICS: &str = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:TEST\r\n\
BEGIN:VEVENT\r\n\
UID:evt-1\r\n\
SUMMARY:Dentist\r\n\
DESCRIPTION:Bring the referral letter\r\n\
DTSTART:20240101T100000Z\r\n\
BEGIN:VALARM\r\n\
UID:alarm-1\r\n\
SUMMARY:Reminder\r\n\
TRIGGER:-PT30M\r\n\
ACTION:DISPLAY\r\n\
END:VALARM\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:evt-2\r\n\
DTSTART:20240102T100000Z\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

    fn failing(uids: &[&str]) -> Summary {
        let mut summary = Summary::new();
        for uid in uids {
            summary.note_processed();
            summary.note_unmatched(uid);
        }
        summary
    }

    #[test]
    fn test_alarms_and_untitled_components_are_suppressed() {
        let source = IcsSource::from_content(ICS);
        let summary = failing(&["evt-1", "alarm-1", "evt-2"]);

        let components = missing_components(&source, &summary).unwrap();

        assert_eq!(components.len(), 1);
        assert_eq!(components[0].uid, "evt-1");
        assert_eq!(components[0].summary.as_deref(), Some("Dentist"));
    }

    #[test]
    fn test_unknown_failing_uid_is_fatal() {
        let source = IcsSource::from_content(ICS);
        let summary = failing(&["evt-1", "never-seen"]);

        let err = missing_components(&source, &summary).unwrap_err();
        assert!(matches!(err, SweepError::LookupInconsistency(uid) if uid == "never-seen"));
    }

    #[test]
    fn test_no_failures_yields_no_components() {
        let source = IcsSource::from_content(ICS);
        let summary = Summary::new();

        assert!(missing_components(&source, &summary).unwrap().is_empty());
    }
}
