//! Degenerate-tolerant strategy: raw `UID:` line scan.

/// Extract UID values from raw ICS text, one per `UID:` line. Lines are
/// trimmed of surrounding whitespace before matching; everything else in
/// the file is ignored. No unfolding is performed, so a folded UID loses
/// its continuation.
pub(super) fn scan_uids(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| line.trim().strip_prefix("UID:"))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_extracts_uid_lines_only() {
        let content =
            "BEGIN:VCALENDAR\nBEGIN:VEVENT\nUID:evt-1\nSUMMARY:UID:not-a-uid-line\n  UID:evt-2  \nEND:VEVENT\n";

        assert_eq!(scan_uids(content), ["evt-1", "evt-2"]);
    }

    #[test]
    fn test_scan_skips_empty_values() {
        assert_eq!(scan_uids("UID:\nUID:evt-1\n"), ["evt-1"]);
    }

    #[test]
    fn test_scan_preserves_duplicates_in_order() {
        assert_eq!(scan_uids("UID:a\nUID:b\nUID:a\n"), ["a", "b", "a"]);
    }
}
