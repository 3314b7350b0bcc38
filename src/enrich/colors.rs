//! Event color table and lookup.
//!
//! Colors are resolved in two levels: event type first, then operation,
//! falling back to the type's default and finally to a global gray.

use crate::parser::{ops, TraceRecord};
use crate::utils::config::DEFAULT_COLOR;
use serde::Serialize;

/// Colors for one event type
struct ColorRule {
    event_type: &'static str,
    operations: &'static [(&'static str, &'static str)],
    default: &'static str,
}

const COLOR_TABLE: &[ColorRule] = &[
    ColorRule {
        event_type: "BUS_TRANSACTION",
        operations: &[
            (ops::READ, "#3498db"),  // Blue
            (ops::WRITE, "#e74c3c"), // Red
        ],
        default: "#9b59b6", // Purple
    },
    ColorRule {
        event_type: "DEVICE_EVENT",
        operations: &[
            (ops::READ, "#2ecc71"),       // Green
            (ops::WRITE, "#f39c12"),      // Orange
            (ops::RESET, "#e67e22"),      // Dark orange
            (ops::ENABLE, "#1abc9c"),     // Turquoise
            (ops::DISABLE, "#95a5a6"),    // Gray
            (ops::DEMO_EVENT, "#f1c40f"), // Yellow
        ],
        default: "#34495e", // Dark gray
    },
    ColorRule {
        event_type: "IRQ_EVENT",
        operations: &[],
        default: "#8e44ad", // Dark purple
    },
];

/// Resolve the display color for an event type and optional operation
///
/// **Public** - pure lookup, same inputs always give the same color
pub fn resolve_color(event_type: &str, operation: Option<&str>) -> &'static str {
    let Some(rule) = COLOR_TABLE.iter().find(|rule| rule.event_type == event_type) else {
        return DEFAULT_COLOR;
    };

    operation
        .and_then(|op| {
            rule.operations
                .iter()
                .find(|(name, _)| *name == op)
                .map(|(_, color)| *color)
        })
        .unwrap_or(rule.default)
}

/// Resolve the color of a record from its type and `data_operation` field
pub fn record_color(record: &TraceRecord) -> &'static str {
    resolve_color(&record.event_type, record.operation())
}

/// One swatch in the color legend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub event_type: &'static str,
    /// Operation name, or `None` for the type's default color
    pub operation: Option<&'static str>,
    pub color: &'static str,
}

/// Legend swatches in table order, operations before each type's default
pub fn legend_entries() -> Vec<LegendEntry> {
    COLOR_TABLE
        .iter()
        .flat_map(|rule| {
            rule.operations
                .iter()
                .map(move |(op, color)| LegendEntry {
                    event_type: rule.event_type,
                    operation: Some(*op),
                    color: *color,
                })
                .chain(std::iter::once(LegendEntry {
                    event_type: rule.event_type,
                    operation: None,
                    color: rule.default,
                }))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bus_colors() {
        assert_eq!(resolve_color("BUS_TRANSACTION", Some("READ")), "#3498db");
        assert_eq!(resolve_color("BUS_TRANSACTION", Some("WRITE")), "#e74c3c");
        assert_eq!(resolve_color("BUS_TRANSACTION", None), "#9b59b6");
        assert_eq!(resolve_color("BUS_TRANSACTION", Some("RESET")), "#9b59b6");
    }

    #[test]
    fn test_device_colors() {
        assert_eq!(resolve_color("DEVICE_EVENT", Some("READ")), "#2ecc71");
        assert_eq!(resolve_color("DEVICE_EVENT", Some("WRITE")), "#f39c12");
        assert_eq!(resolve_color("DEVICE_EVENT", Some("RESET")), "#e67e22");
        assert_eq!(resolve_color("DEVICE_EVENT", Some("ENABLE")), "#1abc9c");
        assert_eq!(resolve_color("DEVICE_EVENT", Some("DISABLE")), "#95a5a6");
        assert_eq!(resolve_color("DEVICE_EVENT", Some("DEMO_EVENT")), "#f1c40f");
        assert_eq!(resolve_color("DEVICE_EVENT", Some("INIT_START")), "#34495e");
    }

    #[test]
    fn test_irq_ignores_operation() {
        assert_eq!(resolve_color("IRQ_EVENT", Some("READ")), "#8e44ad");
        assert_eq!(resolve_color("IRQ_EVENT", None), "#8e44ad");
    }

    #[test]
    fn test_unknown_type_is_gray() {
        assert_eq!(resolve_color("DMA_EVENT", Some("READ")), "#7f7f7f");
        assert_eq!(resolve_color("", None), "#7f7f7f");
    }

    #[test]
    fn test_legend_covers_table() {
        let legend = legend_entries();

        assert_eq!(legend.len(), 11);
        assert_eq!(legend[0].color, "#3498db");
        assert_eq!(legend[2].operation, None);
        assert_eq!(legend.last().map(|e| e.color), Some("#8e44ad"));
    }
}
