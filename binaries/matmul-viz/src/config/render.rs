use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use matmul_viz_render::Scale;
use matmul_viz_table::{MatrixSize, SUMMARY_TABLE_MIN_SIZE};

use super::macros::config_struct;

config_struct! {
    /// Image rendering config.
    #[derive(Debug, Deserialize, Serialize, Eq, PartialEq)]
    #[serde(deny_unknown_fields, default)]
    pub struct RenderConfig {
        /// File name of the time vs. matrix size chart.
        ///
        /// Relative to the output directory.
        ///
        /// Type         | Filename
        /// Examples     | "performance_comparison.png", "perf.png"
        pub performance_file: PathBuf,

        /// File name of the speedup vs. matrix size chart.
        ///
        /// Relative to the output directory.
        ///
        /// Type         | Filename
        /// Examples     | "speedup_comparison.png", "speedup.png"
        pub speedup_file: PathBuf,

        /// File name of the summary table image.
        ///
        /// Relative to the output directory.
        ///
        /// Type         | Filename
        /// Examples     | "results_summary.png", "table.png"
        pub summary_file: PathBuf,

        /// The smallest matrix size shown in the summary table.
        ///
        /// Type         | Number
        /// Valid values | >= 0
        /// Examples     | 0, 256, 1024
        pub table_min_size: u32,

        /// Pixels per inch of every image.
        ///
        /// The charts are 16x6, 12x8 and 14x8 inches.
        ///
        /// Type         | Number
        /// Valid values | >= 1
        /// Examples     | 100, 200
        pub scale: u32,
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            performance_file: "performance_comparison.png".into(),
            speedup_file: "speedup_comparison.png".into(),
            summary_file: "results_summary.png".into(),
            table_min_size: SUMMARY_TABLE_MIN_SIZE.get(),
            scale: Scale::DEFAULT.get(),
        }
    }
}

impl RenderConfig {
    /// The performance chart path inside `output_directory`.
    pub fn performance_path(&self, output_directory: &Path) -> PathBuf {
        output_directory.join(&self.performance_file)
    }

    /// The speedup chart path inside `output_directory`.
    pub fn speedup_path(&self, output_directory: &Path) -> PathBuf {
        output_directory.join(&self.speedup_file)
    }

    /// The summary table path inside `output_directory`.
    pub fn summary_path(&self, output_directory: &Path) -> PathBuf {
        output_directory.join(&self.summary_file)
    }

    /// [`Self::table_min_size`] as a [`MatrixSize`].
    pub const fn table_min_size(&self) -> MatrixSize {
        MatrixSize::new(self.table_min_size)
    }

    /// [`Self::scale`] as a [`Scale`].
    pub const fn scale(&self) -> Scale {
        Scale::new(self.scale)
    }
}
