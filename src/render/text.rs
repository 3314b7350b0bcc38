//! Terminal rendering of summary statistics.

use crate::aggregator::SummaryStats;
use crate::parser::EventType;

const RESET: &str = "\x1b[0m";
const NAME_WIDTH: usize = 28;

fn get_ansi_color(event_type: &str) -> &'static str {
    match EventType::from(event_type) {
        EventType::BusTransaction => "\x1b[34m", // Blue
        EventType::DeviceEvent => "\x1b[32m",    // Green
        EventType::IrqEvent => "\x1b[35m",       // Magenta
        EventType::Other(_) => "\x1b[90m",       // Gray
    }
}

// Keep the tail of long names so the table stays aligned
fn fit_name(name: &str) -> String {
    let len = name.chars().count();
    if len > NAME_WIDTH {
        let tail: String = name.chars().skip(len - (NAME_WIDTH - 3)).collect();
        format!("...{}", tail)
    } else {
        name.to_string()
    }
}

/// Create a text summary with totals, time span and breakdowns
pub fn generate_text_summary(stats: &SummaryStats) -> String {
    let mut lines = Vec::new();
    let total = stats.total_events.max(1) as f64;

    lines.push("  TRACE SUMMARY".to_string());
    lines.push(format!("  Total Events: {}", stats.total_events));
    lines.push(format!(
        "  Time Span:    {} -> {} ({:.6}s)",
        stats.time_span.start, stats.time_span.end, stats.time_span.duration
    ));
    if let Some((module, count)) = stats.busiest_module() {
        lines.push(format!("  Busiest:      {} ({} events)", module, count));
    }

    lines.push(String::new());
    lines.push("  ┏━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┳━━━━━━━━━━┳━━━━━━━━━┓".to_string());
    lines.push(format!("  ┃ {:<28} ┃ {:^8} ┃ {:^7} ┃", "Event Type", "COUNT", "%"));
    lines.push("  ┣━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━╋━━━━━━━━━━╋━━━━━━━━━┫".to_string());
    for (event_type, count) in &stats.event_type_counts {
        lines.push(format!(
            "  ┃ {}{:<28}{} ┃ {:>8} ┃ {:>6.1}% ┃",
            get_ansi_color(event_type),
            fit_name(event_type),
            RESET,
            count,
            *count as f64 / total * 100.0
        ));
    }
    lines.push("  ┣━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━╋━━━━━━━━━━╋━━━━━━━━━┫".to_string());
    lines.push(format!("  ┃ {:<28} ┃ {:^8} ┃ {:^7} ┃", "Module", "COUNT", "%"));
    lines.push("  ┣━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━╋━━━━━━━━━━╋━━━━━━━━━┫".to_string());
    for (module, count) in &stats.module_counts {
        lines.push(format!(
            "  ┃ {:<28} ┃ {:>8} ┃ {:>6.1}% ┃",
            fit_name(module),
            count,
            *count as f64 / total * 100.0
        ));
    }
    lines.push("  ┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┻━━━━━━━━━━┻━━━━━━━━━┛".to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::TimeSpan;
    use indexmap::IndexMap;

    fn stats_with_modules(module_counts: IndexMap<String, usize>) -> SummaryStats {
        SummaryStats {
            total_events: module_counts.values().sum(),
            event_type_counts: IndexMap::new(),
            module_counts,
            time_span: TimeSpan {
                start: "a".to_string(),
                end: "b".to_string(),
                duration: 0.0,
            },
        }
    }

    #[test]
    fn test_long_names_are_truncated() {
        let long = "PERIPHERAL_CONTROLLER_WITH_A_VERY_LONG_NAME";
        let mut module_counts = IndexMap::new();
        module_counts.insert(long.to_string(), 1);

        let text = generate_text_summary(&stats_with_modules(module_counts));
        let row = text.lines().find(|line| line.contains("...")).unwrap();

        assert!(row.contains("...LER_WITH_A_VERY_LONG_NAME"));
        assert!(!row.contains(long));
        assert_eq!(fit_name(long).chars().count(), NAME_WIDTH);
        assert_eq!(fit_name("UART0"), "UART0");
    }

    #[test]
    fn test_busiest_module_line() {
        let mut module_counts = IndexMap::new();
        module_counts.insert("GPIO".to_string(), 1);
        module_counts.insert("UART0".to_string(), 3);

        let text = generate_text_summary(&stats_with_modules(module_counts));
        assert!(text.contains("Busiest:      UART0 (3 events)"));
    }

    #[test]
    fn test_text_summary_lists_breakdowns() {
        let mut event_type_counts = IndexMap::new();
        event_type_counts.insert("DEVICE_EVENT".to_string(), 3);
        event_type_counts.insert("BUS_TRANSACTION".to_string(), 1);
        let mut module_counts = IndexMap::new();
        module_counts.insert("UART0".to_string(), 4);

        let stats = SummaryStats {
            total_events: 4,
            event_type_counts,
            module_counts,
            time_span: TimeSpan {
                start: "00:00:00.000000".to_string(),
                end: "00:00:00.002000".to_string(),
                duration: 0.002,
            },
        };

        let text = generate_text_summary(&stats);

        assert!(text.contains("Total Events: 4"));
        assert!(text.contains("(0.002000s)"));
        assert!(text.contains("75.0%"));
        assert!(text.contains("UART0"));
        assert!(text.find("DEVICE_EVENT") < text.find("BUS_TRANSACTION"));
    }
}
