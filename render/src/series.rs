//! Line series drawing shared by the charts.

//---------------------------------------------------------------------------------------------------- Import
use plotters::{
    chart::{ChartContext, SeriesLabelPosition},
    coord::{cartesian::Cartesian2d, ranged1d::Ranged, types::RangedCoordf64},
    element::{Circle, PathElement},
    prelude::BitMapBackend,
    series::LineSeries,
    style::{Color, HSLColor, BLACK, WHITE},
};

use crate::{
    error::RenderError,
    style::{Scale, LEGEND_POINTS},
};

//---------------------------------------------------------------------------------------------------- Line
/// One implementation's line on a chart.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Line {
    pub(crate) name: String,
    pub(crate) color: HSLColor,
    /// `(x, y)` in chart coordinates.
    pub(crate) points: Vec<(f64, f64)>,
}

/// A chart with a base-2 matrix size x axis.
pub(crate) type SizeChart<'a, 'b, Y> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, Y>>;

//---------------------------------------------------------------------------------------------------- Free functions
/// Draw `lines` with circle markers and a legend.
pub(crate) fn draw_lines<'a, 'b: 'a, Y>(
    chart: &mut SizeChart<'a, 'b, Y>,
    lines: &[Line],
    scale: Scale,
) -> Result<(), RenderError>
where
    Y: Ranged<ValueType = f64>,
{
    for line in lines {
        let style = scale.line(line.color);
        let legend_width = i32::try_from(scale.relative(20.0)).unwrap_or(20);

        chart
            .draw_series(LineSeries::new(line.points.iter().copied(), style))?
            .label(line.name.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + legend_width, y)], style));

        let marker = line.color.filled();
        chart.draw_series(
            line.points
                .iter()
                .map(|point| Circle::new(*point, scale.marker(), marker)),
        )?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.4))
        .label_font(scale.font(LEGEND_POINTS))
        .draw()?;

    Ok(())
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use plotters::prelude::*;

    use super::*;

    /// The chart borrows a buffer that outlives it, unlike the file backed charts.
    #[test]
    fn draws_into_a_borrowed_buffer() {
        let (width, height) = (200, 100);
        let mut buffer = vec![255_u8; 200 * 100 * 3];

        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            let mut chart = ChartBuilder::on(&root)
                .build_cartesian_2d(0.0..4.0, 0.0..4.0)
                .unwrap();

            let line = Line {
                name: "Classical".to_string(),
                color: HSLColor(0.5, 0.65, 0.5),
                points: vec![(1.0, 1.0), (3.0, 3.0)],
            };
            draw_lines(&mut chart, &[line], Scale::DEFAULT).unwrap();
            root.present().unwrap();
        }

        assert!(buffer.iter().any(|b| *b != 255));
    }
}
