//! Colors, fonts, and sizes shared by every image.
//!
//! Sizes are given in inches/points and converted with a [`Scale`],
//! so every image keeps its proportions at any resolution.

//---------------------------------------------------------------------------------------------------- Import
use plotters::style::{Color, FontDesc, FontFamily, FontStyle, HSLColor, RGBColor, ShapeStyle};

use matmul_viz_table::BenchmarkTable;

//---------------------------------------------------------------------------------------------------- Constants
/// Chart title size, points.
pub(crate) const TITLE_POINTS: f64 = 14.0;
/// Axis description size, points.
pub(crate) const AXIS_POINTS: f64 = 12.0;
/// Tick label size, points.
pub(crate) const TICK_POINTS: f64 = 10.0;
/// Legend size, points.
pub(crate) const LEGEND_POINTS: f64 = 10.0;

/// Series line width, pixels at [`Scale::DEFAULT`].
const LINE_WIDTH: f64 = 2.0;
/// Series marker radius, pixels at [`Scale::DEFAULT`].
const MARKER_RADIUS: f64 = 4.0;

/// Grid line opacity.
pub(crate) const GRID_ALPHA: f64 = 0.15;

/// Summary table header row.
pub(crate) const HEADER_GREEN: RGBColor = RGBColor(0x4C, 0xAF, 0x50);
/// Summary table implementation name column.
pub(crate) const NAME_BLUE: RGBColor = RGBColor(0x21, 0x96, 0xF3);

/// Palette saturation.
const SATURATION: f64 = 0.65;
/// Palette lightness.
const LIGHTNESS: f64 = 0.5;
/// Palette starting hue, `0.0..1.0`.
const HUE_OFFSET: f64 = 0.01;

//---------------------------------------------------------------------------------------------------- Scale
/// Pixels per inch of every image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale(u32);

impl Scale {
    /// `100` pixels per inch.
    pub const DEFAULT: Self = Self(100);

    /// Create a new [`Scale`], `0` is treated as `1`.
    pub const fn new(pixels_per_inch: u32) -> Self {
        if pixels_per_inch == 0 {
            Self(1)
        } else {
            Self(pixels_per_inch)
        }
    }

    /// Pixels per inch.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Image dimensions of a `(width, height)` inch figure.
    pub(crate) fn figure(self, (width, height): (f64, f64)) -> (u32, u32) {
        (self.pixels(width), self.pixels(height))
    }

    /// `inches` in whole pixels.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "sizes are small positive constants"
    )]
    pub(crate) fn pixels(self, inches: f64) -> u32 {
        (inches * f64::from(self.0)).round().max(1.0) as u32
    }

    /// A length given in pixels at [`Scale::DEFAULT`], at this scale.
    pub(crate) fn relative(self, pixels: f64) -> u32 {
        self.pixels(pixels / f64::from(Self::DEFAULT.0))
    }

    /// A sans-serif font of `points` size.
    pub(crate) fn font(self, points: f64) -> FontDesc<'static> {
        self.font_with(points, FontStyle::Normal)
    }

    /// A sans-serif font of `points` size and `style`.
    pub(crate) fn font_with(self, points: f64, style: FontStyle) -> FontDesc<'static> {
        FontDesc::new(
            FontFamily::SansSerif,
            points * f64::from(self.0) / 72.0,
            style,
        )
    }

    /// Stroke style of a series line.
    pub(crate) fn line(self, color: HSLColor) -> ShapeStyle {
        color.stroke_width(self.relative(LINE_WIDTH))
    }

    /// Radius of a series marker.
    pub(crate) fn marker(self) -> u32 {
        self.relative(MARKER_RADIUS)
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

//---------------------------------------------------------------------------------------------------- Palette
/// One color per implementation, evenly spaced around the hue circle.
///
/// Colors are assigned by table row, so an implementation
/// has the same color in every image.
#[derive(Debug, Clone)]
pub(crate) struct Palette(Vec<(String, HSLColor)>);

impl Palette {
    /// Create the [`Palette`] of `table`.
    pub(crate) fn new(table: &BenchmarkTable) -> Self {
        let count = table.rows().len();

        Self(
            table
                .rows()
                .iter()
                .enumerate()
                .map(|(i, row)| (row.name().to_string(), hue(i, count)))
                .collect(),
        )
    }

    /// The color of `name`, gray if it is not in the table.
    pub(crate) fn color(&self, name: &str) -> HSLColor {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map_or(HSLColor(0.0, 0.0, LIGHTNESS), |(_, color)| *color)
    }
}

/// The `i`'th of `count` evenly spaced hues.
#[expect(clippy::cast_precision_loss, reason = "row counts are tiny")]
fn hue(i: usize, count: usize) -> HSLColor {
    let h = (HUE_OFFSET + i as f64 / count.max(1) as f64).fract();
    HSLColor(h, SATURATION, LIGHTNESS)
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use matmul_viz_table::{BenchmarkTable, MatrixSize, Row};

    use super::*;

    #[test]
    fn figure() {
        assert_eq!(Scale::DEFAULT.figure((16.0, 6.0)), (1600, 600));
        assert_eq!(Scale::new(300).figure((12.0, 8.0)), (3600, 2400));
        assert_eq!(Scale::new(0), Scale::new(1));
    }

    #[test]
    fn relative() {
        assert_eq!(Scale::DEFAULT.relative(2.0), 2);
        assert_eq!(Scale::new(300).relative(2.0), 6);
    }

    #[test]
    fn palette_is_stable_and_distinct() {
        let table = BenchmarkTable::new(
            vec![MatrixSize::new(2)],
            ["Classical", "Strassen", "Blocked"]
                .into_iter()
                .map(|name| Row::new(name, vec![matmul_viz_table::Timing::BELOW_RESOLUTION]))
                .collect(),
        )
        .unwrap();

        let palette = Palette::new(&table);
        let hues = ["Classical", "Strassen", "Blocked"].map(|name| palette.color(name).0);

        assert!(hues[0] < hues[1] && hues[1] < hues[2], "{hues:?}");
        assert_eq!(palette.color("Classical"), palette.color("Classical"));
        assert_eq!(palette.color("Unknown").1, 0.0);
    }
}
