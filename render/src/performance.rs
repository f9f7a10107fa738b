//! Time vs. matrix size.

//---------------------------------------------------------------------------------------------------- Import
use std::path::Path;

use plotters::prelude::*;
use tracing::{debug, instrument};

use matmul_viz_table::{BenchmarkTable, Timing};

use crate::{
    axis,
    error::RenderError,
    series::{draw_lines, Line},
    style::{Palette, Scale, AXIS_POINTS, GRID_ALPHA, TICK_POINTS, TITLE_POINTS},
};

//---------------------------------------------------------------------------------------------------- Constants
/// Figure size, inches.
const FIGURE: (f64, f64) = (16.0, 6.0);

const X_DESC: &str = "Matrix Size (n × n)";
const Y_DESC: &str = "Time (milliseconds)";
const LINEAR_TITLE: &str = "Matrix Multiplication Performance (Linear Scale)";
const LOG_TITLE: &str = "Matrix Multiplication Performance (Log Scale)";

//---------------------------------------------------------------------------------------------------- Free functions
/// Render the performance comparison image to `path`.
///
/// 2 panels side by side, 1 line per implementation:
/// - left: linear time axis, raw timings
/// - right: log time axis, below-resolution timings drawn at [`LOG_FLOOR_MILLIS`](crate::LOG_FLOOR_MILLIS)
///
/// # Errors
/// Errors if the image could not be drawn or written.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn render_performance(
    table: &BenchmarkTable,
    path: &Path,
    scale: Scale,
) -> Result<(), RenderError> {
    crate::create_parent_dir(path)?;

    let palette = Palette::new(table);
    let linear = lines(table, &palette, Timing::millis);
    let log = lines(table, &palette, axis::log_display_millis);

    let root = BitMapBackend::new(path, scale.figure(FIGURE)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 2));

    let x_range = axis::log2_range(table.sizes());
    let x_ticks = axis::log2_tick_count(&x_range);
    let y_values = |lines: &[Line]| {
        lines
            .iter()
            .flat_map(|line| line.points.iter().map(|(_, y)| *y))
            .collect::<Vec<f64>>()
    };

    //------------------------------------------------------ Linear
    let mut chart = ChartBuilder::on(&panels[0])
        .caption(LINEAR_TITLE, scale.font(TITLE_POINTS))
        .margin(scale.relative(20.0))
        .x_label_area_size(scale.relative(50.0))
        .y_label_area_size(scale.relative(70.0))
        .build_cartesian_2d(x_range.clone(), axis::linear_range(y_values(&linear)))?;

    chart
        .configure_mesh()
        .x_labels(x_ticks)
        .x_label_formatter(&|x| axis::log2_label(*x))
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .light_line_style(WHITE.mix(0.0))
        .bold_line_style(BLACK.mix(GRID_ALPHA))
        .label_style(scale.font(TICK_POINTS))
        .axis_desc_style(scale.font(AXIS_POINTS))
        .draw()?;

    draw_lines(&mut chart, &linear, scale)?;

    //------------------------------------------------------ Log
    let mut chart = ChartBuilder::on(&panels[1])
        .caption(LOG_TITLE, scale.font(TITLE_POINTS))
        .margin(scale.relative(20.0))
        .x_label_area_size(scale.relative(50.0))
        .y_label_area_size(scale.relative(70.0))
        .build_cartesian_2d(x_range, axis::log_range(y_values(&log)).log_scale())?;

    chart
        .configure_mesh()
        .x_labels(x_ticks)
        .x_label_formatter(&|x| axis::log2_label(*x))
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .light_line_style(WHITE.mix(0.0))
        .bold_line_style(BLACK.mix(GRID_ALPHA))
        .label_style(scale.font(TICK_POINTS))
        .axis_desc_style(scale.font(AXIS_POINTS))
        .draw()?;

    draw_lines(&mut chart, &log, scale)?;

    root.present()?;
    debug!(lines = linear.len(), "rendered performance comparison");
    Ok(())
}

/// 1 [`Line`] per row, with timings drawn as `y(timing)`.
fn lines(table: &BenchmarkTable, palette: &Palette, y: fn(Timing) -> f64) -> Vec<Line> {
    table
        .rows()
        .iter()
        .map(|row| Line {
            name: row.name().to_string(),
            color: palette.color(row.name()),
            points: table
                .points(row)
                .map(|(size, timing)| (size.log2(), y(timing)))
                .collect(),
        })
        .collect()
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use matmul_viz_table::{MatrixSize, Row};

    use super::*;

    #[test]
    fn log_panel_floors_only_the_drawing() {
        let t = |ms| Timing::new(ms).unwrap();
        let table = BenchmarkTable::new(
            vec![MatrixSize::new(2), MatrixSize::new(4)],
            vec![Row::new("Classical", vec![t(0.0), t(8.0)])],
        )
        .unwrap();
        let palette = Palette::new(&table);

        let linear = lines(&table, &palette, Timing::millis);
        let log = lines(&table, &palette, axis::log_display_millis);

        assert_eq!(linear[0].points, vec![(1.0, 0.0), (2.0, 8.0)]);
        assert_eq!(log[0].points, vec![(1.0, crate::LOG_FLOOR_MILLIS), (2.0, 8.0)]);
        assert!(table.rows()[0].timings()[0].is_below_resolution());
    }
}
