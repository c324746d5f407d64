//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::constants::DISPLAY_SIG_DIGITS;
use crate::snapshot::CurveSnapshot;

/// Format a `CurveSnapshot` for human-readable terminal output.
///
/// Uses ANSI colors and Unicode box drawing, with the density curve drawn
/// as a block-character bar chart over theta in [0, 1]. Density values are
/// shown at [`DISPLAY_SIG_DIGITS`] significant digits; the snapshot itself
/// keeps full precision.
pub fn format_snapshot(snapshot: &CurveSnapshot) -> String {
    let mut output = String::new();

    output.push_str(&format_box_top());
    output.push_str(&format_box_line(&snapshot.title().bold().to_string()));
    output.push_str(&format_box_separator());

    for row in curve_rows(snapshot) {
        output.push_str(&format_box_line(&row.cyan().to_string()));
    }
    output.push_str(&format_box_line("theta: 0.0 \u{2500}\u{2500}\u{25B6} 1.0"));

    output.push_str(&format_box_separator());

    let peak = round_sig(snapshot.peak_density(), DISPLAY_SIG_DIGITS);
    output.push_str(&format_box_line(&format!(
        "{}  peak: {}",
        snapshot.density_label(),
        peak
    )));

    output.push_str(&format_box_bottom());
    output
}

/// Render the curve as `CHART_ROWS` rows of block characters.
///
/// Columns are grid points downsampled to `CHART_COLS` by averaging;
/// heights are scaled so the peak density fills the top row.
fn curve_rows(snapshot: &CurveSnapshot) -> Vec<String> {
    let peak = snapshot.peak_density().max(f64::MIN_POSITIVE);
    let columns = downsample(snapshot, CHART_COLS);

    let mut rows = Vec::with_capacity(CHART_ROWS);
    for row in (0..CHART_ROWS).rev() {
        let mut line = String::with_capacity(CHART_COLS);
        for &density in &columns {
            // Height of this column in eighths of a row.
            let eighths = (density / peak * (CHART_ROWS * 8) as f64).round() as usize;
            let full_rows = eighths / 8;
            let remainder = eighths % 8;
            let ch = if full_rows > row {
                '\u{2588}'
            } else if full_rows == row && remainder > 0 {
                // U+2581..U+2587: lower one-eighth block through seven-eighths
                char::from_u32(0x2580 + remainder as u32).unwrap_or('\u{2588}')
            } else {
                ' '
            };
            line.push(ch);
        }
        rows.push(line);
    }
    rows
}

fn downsample(snapshot: &CurveSnapshot, columns: usize) -> Vec<f64> {
    let n = snapshot.points.len();
    if n == 0 {
        return vec![0.0; columns];
    }
    (0..columns)
        .map(|col| {
            let start = col * n / columns;
            let end = ((col + 1) * n / columns).max(start + 1);
            let slice = &snapshot.points[start..end.min(n)];
            slice.iter().map(|p| p.density).sum::<f64>() / slice.len() as f64
        })
        .collect()
}

/// Round to a fixed number of significant digits for display.
pub fn round_sig(value: f64, digits: i32) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let magnitude = value.abs().log10().floor() as i32;
    let factor = 10f64.powi(digits - 1 - magnitude);
    (value * factor).round() / factor
}

// Chart dimensions: 50 columns fits the box with room to spare.

const CHART_COLS: usize = 50;
const CHART_ROWS: usize = 8;

// Box drawing helpers

const BOX_WIDTH: usize = 56;

fn box_edge(left: char, right: char) -> String {
    format!("{left}{}{right}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_top() -> String {
    box_edge('\u{250C}', '\u{2510}')
}

fn format_box_bottom() -> String {
    box_edge('\u{2514}', '\u{2518}')
}

fn format_box_separator() -> String {
    box_edge('\u{251C}', '\u{2524}')
}

fn format_box_line(content: &str) -> String {
    let padding = (BOX_WIDTH - 2).saturating_sub(visible_width(content));
    format!("\u{2502} {content}{} \u{2502}\n", " ".repeat(padding))
}

/// Printed width of a string, ignoring ANSI escape sequences.
fn visible_width(s: &str) -> usize {
    let mut in_escape = false;
    s.chars()
        .filter(|&c| {
            if in_escape {
                // SGR sequences end at 'm'
                in_escape = c != 'm';
                false
            } else if c == '\x1b' {
                in_escape = true;
                false
            } else {
                true
            }
        })
        .count()
}
