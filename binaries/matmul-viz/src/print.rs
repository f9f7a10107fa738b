//! Console output.

use std::{
    io::{self, Write},
    path::Path,
};

use matmul_viz_render::RenderError;
use matmul_viz_table::BenchmarkSummary;

use crate::{config::SummaryFormat, constants::RULE, run::Artifact};

/// Write a progress message to `out`.
///
/// Goes to stderr instead when `out` is reserved for JSON.
pub(crate) fn progress(format: SummaryFormat, out: &mut impl Write, line: &str) -> io::Result<()> {
    match format {
        SummaryFormat::Text => writeln!(out, "{line}"),
        SummaryFormat::Json => writeln!(io::stderr(), "{line}"),
    }
}

/// The line reporting whether `artifact` was written to `path`.
pub(crate) fn artifact_line(
    artifact: Artifact,
    path: &Path,
    result: &Result<(), RenderError>,
) -> String {
    match result {
        Ok(()) => format!("✓ {artifact} saved to {}", path.display()),
        Err(e) => format!("✗ {artifact} failed: {e}"),
    }
}

/// Write the final summary to `out` in `format`.
///
/// # Errors
/// Errors if the summary could not be serialized or written.
pub(crate) fn print_summary(
    summary: &BenchmarkSummary,
    format: SummaryFormat,
    output_directory: &Path,
    out: &mut impl Write,
) -> io::Result<()> {
    match format {
        SummaryFormat::Text => writeln!(out, "{}", summary_text(summary, output_directory)),
        SummaryFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(summary)?),
    }
}

/// Default summary formatting.
pub(crate) fn summary_text(summary: &BenchmarkSummary, output_directory: &Path) -> String {
    let mut s = format!("\n{RULE}\nBENCHMARK SUMMARY\n{RULE}\n");

    for range in &summary.ranges {
        s += &format!(
            "\n{}:\n  Min time: {:.0}ms\n  Max time: {:.0}ms\n",
            range.name, range.min_millis, range.max_millis
        );
    }

    let largest = &summary.largest;
    s += &format!("\nSpeedup for {0}×{0} matrices:\n", largest.size);
    if let Some(millis) = largest.baseline_millis {
        s += &format!("  {}: {millis:.0}ms\n", largest.baseline);
    }
    for speedup in &largest.speedups {
        s += &format!("  {}: {:.1}× faster\n", speedup.name, speedup.speedup);
    }

    let directory = output_directory.display().to_string();
    s += &format!(
        "\n{RULE}\nAll visualizations saved to the '{}/' directory!\n{RULE}",
        directory.trim_end_matches('/')
    );

    s
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use matmul_viz_table::{BenchmarkTable, MatrixSize, Row, Timing};

    use super::*;

    fn summary() -> BenchmarkSummary {
        let t = |ms| Timing::new(ms).unwrap();
        let table = BenchmarkTable::new(
            vec![MatrixSize::new(128), MatrixSize::new(256)],
            vec![
                Row::new("Classical", vec![t(10.0), t(40.4)]),
                Row::new("Strassen", vec![t(5.0), t(10.0)]),
                Row::new("Instant", vec![t(0.0), t(0.0)]),
                Row::new("Blocked", vec![t(2.6), t(0.0)]),
            ],
        )
        .unwrap();

        BenchmarkSummary::new(&table, "Classical").unwrap()
    }

    #[test]
    fn text() {
        let expected = "
============================================================
BENCHMARK SUMMARY
============================================================

Classical:
  Min time: 10ms
  Max time: 40ms

Strassen:
  Min time: 5ms
  Max time: 10ms

Blocked:
  Min time: 3ms
  Max time: 3ms

Speedup for 256×256 matrices:
  Classical: 40ms
  Strassen: 4.0× faster

============================================================
All visualizations saved to the 'results/' directory!
============================================================";

        assert_eq!(summary_text(&summary(), Path::new("results")), expected);
        assert_eq!(summary_text(&summary(), Path::new("results/")), expected);
    }

    #[test]
    fn json() {
        let json = serde_json::to_value(summary()).unwrap();

        assert_eq!(json["largest"]["size"], 256);
        assert_eq!(json["largest"]["speedups"][0]["name"], "Strassen");
        assert_eq!(json["ranges"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn artifact_lines() {
        let path = Path::new("results/speedup_comparison.png");

        assert_eq!(
            artifact_line(Artifact::Speedup, path, &Ok(())),
            "✓ Speedup plot saved to results/speedup_comparison.png"
        );
        assert_eq!(
            artifact_line(
                Artifact::SummaryTable,
                path,
                &Err(RenderError::Drawing("no font".to_string()))
            ),
            "✗ Summary table failed: failed to draw: no font"
        );
    }
}
