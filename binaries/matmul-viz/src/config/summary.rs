use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::macros::config_struct;

/// How the console summary is printed.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SummaryFormat {
    /// Human readable text.
    #[default]
    Text,
    /// Pretty printed JSON, progress messages go to stderr.
    Json,
}

config_struct! {
    /// Console summary config.
    #[derive(Debug, Default, Deserialize, Serialize, Eq, PartialEq)]
    #[serde(deny_unknown_fields, default)]
    pub struct SummaryConfig {
        /// The format of the summary printed to stdout.
        ///
        /// Type         | String
        /// Valid values | "text", "json"
        pub format: SummaryFormat,
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn format_from_str() {
        assert_eq!("json".parse::<SummaryFormat>().unwrap(), SummaryFormat::Json);
        assert_eq!("Text".parse::<SummaryFormat>().unwrap(), SummaryFormat::Text);
        assert!("yaml".parse::<SummaryFormat>().is_err());
        assert_eq!(SummaryFormat::Json.to_string(), "json");
    }
}
