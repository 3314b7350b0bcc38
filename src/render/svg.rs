//! SVG rendering of a timeline chart spec.
//!
//! Produces a self-contained SVG: one horizontal lane per module
//! (lane 0 at the bottom), one circle per record with a native tooltip,
//! a time axis and the event color legend underneath.

use super::timeline::ChartSpec;
use crate::enrich::legend_entries;
use crate::utils::config::HOVER_LINE_BREAK;
use crate::utils::error::RenderError;
use log::info;

const MARGIN_LEFT: f64 = 100.0;
const MARGIN_RIGHT: f64 = 50.0;
const MARGIN_TOP: f64 = 80.0;
const MARGIN_BOTTOM: f64 = 80.0;
const TIME_TICKS: usize = 5;
const LEGEND_ROW_HEIGHT: usize = 24;
const LEGEND_ITEM_WIDTH: usize = 280;

/// Plot area geometry shared by the drawing helpers
struct Plot {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    t_min: f64,
    t_span: f64,
    lane_height: f64,
}

impl Plot {
    fn x(&self, t: f64) -> f64 {
        if self.t_span > 0.0 {
            self.left + (t - self.t_min) / self.t_span * self.width
        } else {
            self.left + self.width / 2.0
        }
    }

    // Lane 0 sits at the bottom of the plot area
    fn y(&self, lane: usize) -> f64 {
        self.top + self.height - (lane as f64 + 0.5) * self.lane_height
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Generate an SVG timeline from a chart spec
pub fn generate_timeline_svg(chart: &ChartSpec) -> Result<String, RenderError> {
    let Some((t_min, t_max)) = chart.time_range() else {
        return Err(RenderError::EmptyChart);
    };

    info!("Generating timeline SVG with {} points", chart.point_count());

    let width = chart.width as f64;
    let plot_width = (width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
    let plot_height = (chart.height as f64 - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
    let plot = Plot {
        left: MARGIN_LEFT,
        top: MARGIN_TOP,
        width: plot_width,
        height: plot_height,
        t_min,
        t_span: t_max - t_min,
        lane_height: plot_height / chart.lane_count().max(1) as f64,
    };

    let legend = legend_entries();
    let per_row = (chart.width.saturating_sub(20) / LEGEND_ITEM_WIDTH).max(1);
    let legend_rows = legend.len().div_ceil(per_row);
    let total_height = chart
        .height
        .saturating_add(30)
        .saturating_add(legend_rows.saturating_mul(LEGEND_ROW_HEIGHT));

    let mut svg = String::new();

    // Header
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        chart.width, total_height, chart.width, total_height
    ));
    svg.push_str(
        r#"<style>.axis { font: 12px sans-serif; } .event:hover { stroke: black; stroke-width: 2; cursor: pointer; }</style>"#,
    );
    svg.push_str(&format!(
        r#"<rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
        chart.width, total_height
    ));

    // Title
    svg.push_str(&format!(
        r#"<text x="{}" y="40" font-size="20" text-anchor="middle" font-family="sans-serif">{}</text>"#,
        chart.width / 2,
        escape_xml(&chart.title)
    ));

    render_lanes(chart, &plot, &mut svg);
    render_time_axis(chart, &plot, &mut svg);
    render_points(chart, &plot, &mut svg);
    render_legend(&mut svg, chart.height.saturating_add(30), per_row);

    svg.push_str("</svg>");

    info!("Timeline SVG generated ({} bytes)", svg.len());
    Ok(svg)
}

fn render_lanes(chart: &ChartSpec, plot: &Plot, out: &mut String) {
    for (lane, module) in chart
        .lane_axis
        .tick_values
        .iter()
        .zip(&chart.lane_axis.tick_text)
    {
        let y = plot.y(*lane);
        out.push_str(&format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="lightgray" stroke-width="1"/>"#,
            plot.left,
            y,
            plot.left + plot.width,
            y
        ));
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" dy="4" text-anchor="end" class="axis">{}</text>"#,
            plot.left - 8.0,
            y,
            escape_xml(module)
        ));
    }

    out.push_str(&format!(
        r#"<text x="20" y="{:.2}" class="axis" font-weight="bold" transform="rotate(-90 20 {:.2})" text-anchor="middle">{}</text>"#,
        plot.top + plot.height / 2.0,
        plot.top + plot.height / 2.0,
        escape_xml(&chart.lane_axis.title)
    ));
}

fn render_time_axis(chart: &ChartSpec, plot: &Plot, out: &mut String) {
    let bottom = plot.bottom();
    out.push_str(&format!(
        r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="black" stroke-width="1"/>"#,
        plot.left,
        bottom,
        plot.left + plot.width,
        bottom
    ));

    for i in 0..TIME_TICKS {
        let t = plot.t_min + plot.t_span * i as f64 / (TIME_TICKS - 1) as f64;
        let x = plot.x(t);
        out.push_str(&format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="lightgray" stroke-width="1"/>"#,
            x, plot.top, x, bottom
        ));
        out.push_str(&format!(
            r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" class="axis">{:.6}</text>"#,
            x,
            bottom + 18.0,
            t
        ));
    }

    out.push_str(&format!(
        r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" class="axis" font-weight="bold">{}</text>"#,
        plot.left + plot.width / 2.0,
        bottom + 45.0,
        escape_xml(&chart.time_axis.title)
    ));
}

fn render_points(chart: &ChartSpec, plot: &Plot, out: &mut String) {
    let radius = chart.marker_size as f64 / 2.0;

    for series in &chart.series {
        out.push_str(&format!(r#"<g data-series="{}">"#, escape_xml(&series.name)));
        for point in &series.points {
            out.push_str(&format!(
                r#"<circle cx="{:.2}" cy="{:.2}" r="{:.1}" fill="{}" stroke="white" stroke-width="1" class="event"><title>{}</title></circle>"#,
                plot.x(point.x),
                plot.y(point.y),
                radius,
                escape_xml(&point.color),
                escape_xml(&hover_to_plain(&point.label))
            ));
        }
        out.push_str("</g>");
    }
}

fn render_legend(out: &mut String, legend_top: usize, per_row: usize) {
    for (i, entry) in legend_entries().iter().enumerate() {
        let x = 10 + (i % per_row) * LEGEND_ITEM_WIDTH;
        let y = legend_top.saturating_add((i / per_row) * LEGEND_ROW_HEIGHT + 15);
        let label = match entry.operation {
            Some(op) => format!("{} {}", entry.event_type, op),
            None => format!("{} (other)", entry.event_type),
        };

        out.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="6" fill="{}"/>"#,
            x + 6,
            y - 4,
            entry.color
        ));
        out.push_str(&format!(
            r#"<text x="{}" y="{}" class="axis">{}</text>"#,
            x + 18,
            y,
            escape_xml(&label)
        ));
    }
}

/// Turn rich-text hover text into plain multi-line tooltip text
fn hover_to_plain(label: &str) -> String {
    label
        .replace(HOVER_LINE_BREAK, "\n")
        .replace("<b>", "")
        .replace("</b>", "")
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
