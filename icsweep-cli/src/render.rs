//! Terminal rendering: progress markers and the post-run report.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use icsweep_core::{
    DeletionOutcome, IcsComponent, IcsSource, ReconciliationOutcome, Summary, missing_components,
};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// One marker per processed identifier, plus per-match detail in verbose
/// mode: `<start> <label> [<uid> -> <event_id>]`.
pub fn progress(uid: &str, outcome: &ReconciliationOutcome, verbose: bool) {
    match outcome {
        ReconciliationOutcome::Unmatched => write_with_flush(&"x".red().to_string()),
        ReconciliationOutcome::Matched { event, deletion } => {
            write_with_flush(&".".green().to_string());
            if verbose {
                write_with_flush("\n");
                println!("{} {} [{} -> {}]", event.start, event.label, uid, event.primary_id);
                if let Some(DeletionOutcome::DeletedViaFallback) = deletion {
                    println!(
                        "{}",
                        format!(
                            "Series for {} was already gone; deleted the occurrence instead",
                            event.primary_id
                        )
                        .yellow()
                    );
                }
            }
        }
    }
}

/// The post-run report: counts, failure percentage, and details for the
/// identifiers that were not found remotely.
pub fn print_report(source: &IcsSource, summary: &Summary) -> Result<()> {
    println!("ICS contains {} events", summary.total_processed());

    if summary.failure_count() == 0 {
        return Ok(());
    }

    if let Some(percentage) = summary.failure_percentage() {
        println!(
            "{}",
            format!(
                "Failed to find {} events ({}%)",
                summary.failure_count(),
                percentage
            )
            .red()
        );
    }

    // The line-scan source keeps no structure to look the failures up in.
    if !source.supports_lookup() {
        return Ok(());
    }

    let components = missing_components(source, summary)?;
    if components.is_empty() {
        return Ok(());
    }

    println!("Missing events:");
    for component in components {
        println!("{}", render_component(component));
    }

    Ok(())
}

fn render_component(component: &IcsComponent) -> String {
    let mut lines = vec![
        component.uid.clone(),
        format!("  - {}", component.kind),
        format!("  - {}", component.summary.as_deref().unwrap_or("")),
    ];
    if let Some(description) = &component.description {
        lines.push(format!("  - {}", indent(description, "    ")));
    }
    lines.join("\n")
}

/// Indent the continuation lines of a multi-line value.
fn indent(text: &str, pad: &str) -> String {
    text.lines().collect::<Vec<_>>().join(&format!("\n{pad}"))
}

fn write_with_flush(output: &str) {
    print!("{output}");
    let _ = std::io::stdout().flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_component_lists_kind_summary_and_description() {
        let component = IcsComponent {
            kind: "VEVENT".to_string(),
            uid: "evt-1".to_string(),
            summary: Some("Dentist".to_string()),
            description: Some("Bring the referral letter\nand the insurance card".to_string()),
        };

        assert_eq!(
            render_component(&component),
            "evt-1\n\
             \x20 - VEVENT\n\
             \x20 - Dentist\n\
             \x20 - Bring the referral letter\n    and the insurance card"
        );
    }

    #[test]
    fn test_render_component_without_description() {
        let component = IcsComponent {
            kind: "VEVENT".to_string(),
            uid: "evt-1".to_string(),
            summary: Some("Dentist".to_string()),
            description: None,
        };

        assert_eq!(render_component(&component), "evt-1\n  - VEVENT\n  - Dentist");
    }

    #[test]
    fn test_indent_pads_continuation_lines_only() {
        assert_eq!(indent("a\nb\nc", "  "), "a\n  b\n  c");
    }
}
