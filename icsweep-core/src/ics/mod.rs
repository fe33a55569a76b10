//! ICS identifier sources.
//!
//! Two interchangeable strategies produce the sequence of UIDs to
//! reconcile: a structured component walk (preferred, and the only one that
//! can resolve a UID back to its component for the report) and a raw
//! `UID:` line scan for files the parser rejects. Calendar.app has been
//! observed to export structurally invalid ICS that only the line scan can
//! handle.

mod parse;
mod scan;

use std::path::Path;

use crate::error::{SweepError, SweepResult};

/// Owned snapshot of one parsed calendar component.
#[derive(Debug, Clone, PartialEq)]
pub struct IcsComponent {
    /// Component kind, e.g. `VEVENT`, `VALARM`, `VTIMEZONE`.
    pub kind: String,
    /// UID property value; empty when the component carries none.
    pub uid: String,
    pub summary: Option<String>,
    pub description: Option<String>,
}

/// How the identifiers were extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceStrategy {
    /// Full component tree; identifiers come from a depth-first walk.
    Structured,
    /// Raw `UID:` line scan; no component details available.
    LineScan,
}

#[derive(Debug)]
enum Backing {
    Structured(Vec<IcsComponent>),
    LineScan(Vec<String>),
}

/// The ordered sequence of event identifiers to reconcile, read once at
/// startup and held read-only for the run.
#[derive(Debug)]
pub struct IcsSource {
    backing: Backing,
}

impl IcsSource {
    /// Read and parse `path`, falling back to the raw line scan when the
    /// structured parser rejects the content.
    pub fn load(path: &Path) -> SweepResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SweepError::InputNotFound(format!("{}: {}", path.display(), e)))?;
        Ok(Self::from_content(&content))
    }

    /// Parse ICS text directly (structured first, line scan on failure).
    pub fn from_content(content: &str) -> Self {
        let backing = match parse::parse_components(content) {
            Ok(components) => Backing::Structured(components),
            Err(_) => Backing::LineScan(scan::scan_uids(content)),
        };
        IcsSource { backing }
    }

    pub fn strategy(&self) -> SourceStrategy {
        match self.backing {
            Backing::Structured(_) => SourceStrategy::Structured,
            Backing::LineScan(_) => SourceStrategy::LineScan,
        }
    }

    /// Whether [`find_component`](Self::find_component) can succeed: the
    /// line scan keeps no structure to look into.
    pub fn supports_lookup(&self) -> bool {
        self.strategy() == SourceStrategy::Structured
    }

    /// The identifiers in file order, one per component, duplicates
    /// included. Components without a UID yield an empty identifier.
    pub fn identifiers(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match &self.backing {
            Backing::Structured(components) => {
                Box::new(components.iter().map(|c| c.uid.as_str()))
            }
            Backing::LineScan(uids) => Box::new(uids.iter().map(|u| u.as_str())),
        }
    }

    /// Find the component carrying `uid`; the first match in walk order
    /// wins. A miss means the UID cannot have come from this source.
    pub fn find_component(&self, uid: &str) -> SweepResult<&IcsComponent> {
        let Backing::Structured(components) = &self.backing else {
            return Err(SweepError::LookupInconsistency(uid.to_string()));
        };
        components
            .iter()
            .find(|c| c.uid == uid)
            .ok_or_else(|| SweepError::LookupInconsistency(uid.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_ICS: &str = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:TEST\r\n\
BEGIN:VEVENT\r\n\
UID:evt-1\r\n\
SUMMARY:Dentist\r\n\
DTSTART:20240101T100000Z\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:evt-2\r\n\
SUMMARY:Standup\r\n\
DTSTART:20240102T100000Z\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

    // Missing END:VCALENDAR, which the structured parser rejects.
    const CORRUPT_ICS: &str = "BEGIN:VCALENDAR\r\n\
BEGIN:VEVENT\r\n\
UID:evt-1\r\n\
SUMMARY:Dentist\r\n\
END:VEVENT\r\n";

    #[test]
    fn test_valid_content_selects_structured_strategy() {
        let source = IcsSource::from_content(VALID_ICS);
        assert_eq!(source.strategy(), SourceStrategy::Structured);
        assert!(source.supports_lookup());

        let uids: Vec<&str> = source.identifiers().collect();
        assert_eq!(uids, ["evt-1", "evt-2"]);
    }

    #[test]
    fn test_corrupt_content_falls_back_to_line_scan() {
        let source = IcsSource::from_content(CORRUPT_ICS);
        assert_eq!(source.strategy(), SourceStrategy::LineScan);
        assert!(!source.supports_lookup());

        let uids: Vec<&str> = source.identifiers().collect();
        assert_eq!(uids, ["evt-1"]);
    }

    #[test]
    fn test_find_component_returns_first_match() {
        let source = IcsSource::from_content(VALID_ICS);
        let component = source.find_component("evt-2").unwrap();
        assert_eq!(component.kind, "VEVENT");
        assert_eq!(component.summary.as_deref(), Some("Standup"));
    }

    #[test]
    fn test_find_component_unknown_uid_is_an_inconsistency() {
        let source = IcsSource::from_content(VALID_ICS);
        let err = source.find_component("nope").unwrap_err();
        assert!(matches!(err, SweepError::LookupInconsistency(uid) if uid == "nope"));
    }

    #[test]
    fn test_find_component_unsupported_for_line_scan() {
        let source = IcsSource::from_content(CORRUPT_ICS);
        assert!(source.find_component("evt-1").is_err());
    }

    #[test]
    fn test_load_missing_file_fails_before_any_remote_work() {
        let err = IcsSource::load(Path::new("/definitely/not/here.ics")).unwrap_err();
        assert!(matches!(err, SweepError::InputNotFound(_)));
    }
}
