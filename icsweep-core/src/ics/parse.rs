//! Structured strategy: snapshot the parsed component tree.

use icalendar::parser::{Component, read_calendar, unfold};

use super::IcsComponent;
use crate::error::{SweepError, SweepResult};

/// Parse `content` and flatten every component into walk order: depth-first,
/// parents before children. All component kinds are kept, alarms and
/// timezone definitions included; filtering to event-like components
/// happens at report time, not here.
pub(super) fn parse_components(content: &str) -> SweepResult<Vec<IcsComponent>> {
    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).map_err(|e| SweepError::IcsParse(e.to_string()))?;

    let mut components = Vec::new();
    for component in &calendar.components {
        walk(component, &mut components);
    }
    Ok(components)
}

fn walk(component: &Component<'_>, out: &mut Vec<IcsComponent>) {
    out.push(snapshot(component));
    for child in &component.components {
        walk(child, out);
    }
}

fn snapshot(component: &Component<'_>) -> IcsComponent {
    IcsComponent {
        kind: component.name.to_string(),
        uid: component
            .find_prop("UID")
            .map(|p| p.val.to_string())
            .unwrap_or_default(),
        summary: component.find_prop("SUMMARY").map(|p| p.val.to_string()),
        description: component.find_prop("DESCRIPTION").map(|p| p.val.to_string()),
    }
}
