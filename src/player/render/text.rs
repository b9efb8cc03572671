//! Plain-text rendering of steps for non-interactive output.
//!
//! Each step becomes a header line, a row of values and a row of
//! pointer labels (`p` pivot, `i` and `j` partition cursors).

use crate::trace::Step;

/// Separator between value cells.
const CELL_GAP: &str = "  ";

/// Render one step as text.
///
/// `number` is 1-based; `total` is the sequence length.
pub fn render_step_text(number: usize, total: usize, step: &Step) -> String {
    let width = total.to_string().len();
    let mut header = format!("[{number:>width$}/{total}] {}", step.message);
    if step.comparing {
        header.push_str(" (comparing)");
    }
    if step.swapping {
        header.push_str(" (swapping)");
    }

    let cell = cell_width(&step.array);
    let values = step
        .array
        .iter()
        .map(|v| format!("{v:>cell$}"))
        .collect::<Vec<_>>()
        .join(CELL_GAP);
    let labels = (0..step.array.len())
        .map(|index| format!("{:>cell$}", pointer_label(step, index)))
        .collect::<Vec<_>>()
        .join(CELL_GAP);

    let mut out = header;
    out.push('\n');
    out.push_str("    ");
    out.push_str(&values);
    let labels = labels.trim_end();
    if !labels.is_empty() {
        out.push('\n');
        out.push_str("    ");
        out.push_str(labels);
    }
    out
}

/// Label shown under `index`. The pivot wins over `i`, and `i` over `j`.
pub fn pointer_label(step: &Step, index: usize) -> &'static str {
    if step.pivot_index == Some(index) {
        "p"
    } else if step.i_position() == Some(index) {
        "i"
    } else if step.j_index == Some(index) {
        "j"
    } else {
        ""
    }
}

/// Widest rendered value, so columns line up.
fn cell_width(values: &[i64]) -> usize {
    values
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1)
}
