//! The results summary table image.

//---------------------------------------------------------------------------------------------------- Import
use std::path::Path;

use plotters::{
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};
use tracing::{debug, instrument};

use matmul_viz_table::SummaryTable;

use crate::{
    error::RenderError,
    style::{Scale, HEADER_GREEN, NAME_BLUE, TITLE_POINTS},
};

//---------------------------------------------------------------------------------------------------- Constants
/// Figure size, inches.
const FIGURE: (f64, f64) = (14.0, 8.0);

const TITLE: &str = "Benchmark Results Summary (Time in milliseconds)";

/// Cell text size, points.
const CELL_POINTS: f64 = 12.0;

/// Horizontal cell padding on each side, pixels at [`Scale::DEFAULT`].
const CELL_PADDING_X: f64 = 16.0;
/// Vertical cell padding on each side, pixels at [`Scale::DEFAULT`].
const CELL_PADDING_Y: f64 = 10.0;

//---------------------------------------------------------------------------------------------------- Grid
/// Pixel bounds of every column and row, centered in an area.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Grid {
    /// `(left, right)` of each column.
    columns: Vec<(i32, i32)>,
    /// `(top, bottom)` of each row.
    rows: Vec<(i32, i32)>,
}

/// Lay out columns of `widths` and `rows` rows of `row_height`, centered in `area`.
///
/// A table larger than `area` is anchored at its top-left corner.
fn grid(widths: &[u32], row_height: u32, rows: usize, (width, height): (u32, u32)) -> Grid {
    let px = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);

    let total_width = widths.iter().sum::<u32>();
    let total_height = u32::try_from(rows)
        .unwrap_or(u32::MAX)
        .saturating_mul(row_height);

    let left = px(width.saturating_sub(total_width) / 2);
    let top = px(height.saturating_sub(total_height) / 2);

    let columns = widths
        .iter()
        .scan(left, |x, w| {
            let start = *x;
            *x = start.saturating_add(px(*w));
            Some((start, *x))
        })
        .collect();

    let rows = (0..rows)
        .scan(top, |y, _| {
            let start = *y;
            *y = start.saturating_add(px(row_height));
            Some((start, *y))
        })
        .collect();

    Grid { columns, rows }
}

//---------------------------------------------------------------------------------------------------- Free functions
/// Render `summary` as a table image to `path`.
///
/// The header row is green and the implementation name column is blue,
/// both with bold white text. All cells are centered.
///
/// # Errors
/// Errors if the image could not be drawn or written.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn render_summary_table(
    summary: &SummaryTable,
    path: &Path,
    scale: Scale,
) -> Result<(), RenderError> {
    crate::create_parent_dir(path)?;

    let root = BitMapBackend::new(path, scale.figure(FIGURE)).into_drawing_area();
    root.fill(&WHITE)?;
    let area = root.titled(TITLE, scale.font_with(TITLE_POINTS, FontStyle::Bold))?;

    let normal = scale.font(CELL_POINTS);
    let bold = scale.font_with(CELL_POINTS, FontStyle::Bold);
    let pad_x = scale.relative(CELL_PADDING_X);
    let pad_y = scale.relative(CELL_PADDING_Y);

    // Bold text is the widest, size every cell with it.
    let measure = TextStyle::from(bold.clone());
    let all_rows = std::iter::once(summary.headers()).chain(summary.rows().iter().map(Vec::as_slice));
    let mut widths = vec![0_u32; summary.headers().len()];
    let mut text_height = 0_u32;
    for row in all_rows {
        for (width, text) in widths.iter_mut().zip(row) {
            let (w, h) = area.estimate_text_size(text, &measure)?;
            *width = (*width).max(w);
            text_height = text_height.max(h);
        }
    }
    let widths = widths
        .into_iter()
        .map(|w| w.saturating_add(pad_x.saturating_mul(2)))
        .collect::<Vec<u32>>();
    let row_height = text_height.saturating_add(pad_y.saturating_mul(2));

    let layout = grid(
        &widths,
        row_height,
        summary.rows().len() + 1,
        area.dim_in_pixel(),
    );
    let centered = Pos::new(HPos::Center, VPos::Center);

    let all_rows = std::iter::once(summary.headers()).chain(summary.rows().iter().map(Vec::as_slice));
    for (r, (row, (top, bottom))) in all_rows.zip(&layout.rows).enumerate() {
        for (c, (text, (left, right))) in row.iter().zip(&layout.columns).enumerate() {
            let (fill, style) = match (r, c) {
                (0, _) => (HEADER_GREEN.filled(), bold.color(&WHITE)),
                (_, 0) => (NAME_BLUE.filled(), bold.color(&WHITE)),
                _ => (WHITE.filled(), normal.color(&BLACK)),
            };

            let corners = [(*left, *top), (*right, *bottom)];
            area.draw(&Rectangle::new(corners, fill))?;
            area.draw(&Rectangle::new(corners, BLACK.stroke_width(1)))?;
            area.draw(&Text::new(
                text.as_str(),
                ((left + right) / 2, (top + bottom) / 2),
                style.pos(centered),
            ))?;
        }
    }

    root.present()?;
    debug!(
        columns = widths.len(),
        rows = layout.rows.len(),
        "rendered summary table"
    );
    Ok(())
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn grid_is_centered() {
        let layout = grid(&[100, 50], 20, 3, (400, 200));

        assert_eq!(
            layout,
            Grid {
                columns: vec![(125, 225), (225, 275)],
                rows: vec![(70, 90), (90, 110), (110, 130)],
            }
        );
    }

    #[test]
    fn oversized_grid_is_anchored() {
        let layout = grid(&[300, 300], 50, 2, (400, 80));

        assert_eq!(layout.columns, vec![(0, 300), (300, 600)]);
        assert_eq!(layout.rows, vec![(0, 50), (50, 100)]);
    }

    #[test]
    fn header_only() {
        let layout = grid(&[40], 10, 1, (100, 100));

        assert_eq!(layout.columns, vec![(30, 70)]);
        assert_eq!(layout.rows, vec![(45, 55)]);
    }
}
