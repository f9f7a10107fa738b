//! Speedup vs. matrix size.

//---------------------------------------------------------------------------------------------------- Import
use std::path::Path;

use plotters::prelude::*;
use tracing::{debug, instrument};

use matmul_viz_table::{BenchmarkTable, SpeedupSeries};

use crate::{
    axis,
    error::RenderError,
    series::{draw_lines, Line},
    style::{Palette, Scale, AXIS_POINTS, GRID_ALPHA, TICK_POINTS, TITLE_POINTS},
};

//---------------------------------------------------------------------------------------------------- Constants
/// Figure size, inches.
const FIGURE: (f64, f64) = (12.0, 8.0);

const X_DESC: &str = "Matrix Size (n × n)";
const Y_DESC: &str = "Speedup (× faster)";

//---------------------------------------------------------------------------------------------------- Free functions
/// Render the speedup comparison image to `path`.
///
/// 1 log-log line per [`SpeedupSeries`], the baseline is not drawn.
/// `table` is only used so colors match the other images.
///
/// # Errors
/// Errors if the image could not be drawn or written.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn render_speedup(
    table: &BenchmarkTable,
    series: &[SpeedupSeries],
    baseline: &str,
    path: &Path,
    scale: Scale,
) -> Result<(), RenderError> {
    crate::create_parent_dir(path)?;

    let lines = lines(series, &Palette::new(table));

    let root = BitMapBackend::new(path, scale.figure(FIGURE)).into_drawing_area();
    root.fill(&WHITE)?;

    let x_range = axis::log2_range(table.sizes());
    let x_ticks = axis::log2_tick_count(&x_range);
    let y_range = axis::log_range(lines.iter().flat_map(|l| l.points.iter().map(|(_, y)| *y)));

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Performance Speedup Relative to {baseline} Implementation"),
            scale.font(TITLE_POINTS),
        )
        .margin(scale.relative(20.0))
        .x_label_area_size(scale.relative(50.0))
        .y_label_area_size(scale.relative(70.0))
        .build_cartesian_2d(x_range, y_range.log_scale())?;

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

    draw_lines(&mut chart, &lines, scale)?;

    root.present()?;
    debug!(lines = lines.len(), "rendered speedup comparison");
    Ok(())
}

/// 1 [`Line`] per series, x on the base-2 size axis.
fn lines(series: &[SpeedupSeries], palette: &Palette) -> Vec<Line> {
    series
        .iter()
        .map(|s| Line {
            name: s.name().to_string(),
            color: palette.color(s.name()),
            points: s
                .points()
                .iter()
                .map(|(size, speedup)| (size.log2(), *speedup))
                .collect(),
        })
        .collect()
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use matmul_viz_table::{speedups, MatrixSize, Row, Timing};

    use super::*;

    #[test]
    fn dropped_points_are_not_drawn() {
        let t = |ms| Timing::new(ms).unwrap();
        let table = BenchmarkTable::new(
            vec![MatrixSize::new(128), MatrixSize::new(256)],
            vec![
                Row::new("Classical", vec![t(10.0), t(40.0)]),
                Row::new("Fast", vec![t(0.0), t(10.0)]),
            ],
        )
        .unwrap();
        let series = speedups(&table, "Classical").unwrap();

        let lines = lines(&series, &Palette::new(&table));

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].name, "Fast");
        assert_eq!(lines[0].points, vec![(8.0, 4.0)]);
    }
}
