use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use super::macros::config_struct;

config_struct! {
    /// [`tracing`] config.
    #[derive(Debug, Deserialize, Serialize, Eq, PartialEq)]
    #[serde(deny_unknown_fields, default)]
    pub struct TracingConfig {
        /// The minimum log level.
        ///
        /// Logs are written to stderr, the summary to stdout.
        /// "error" is the highest level only showing errors,
        /// "trace" is the lowest showing as much as possible.
        ///
        /// Type         | Level
        /// Valid values | "off", "error", "warn", "info", "debug", "trace"
        ##[serde(with = "level_filter_serde")]
        pub level: LevelFilter,
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::WARN,
        }
    }
}

mod level_filter_serde {
    use std::str::FromStr;

    use serde::{Deserialize, Deserializer, Serializer};
    use tracing::level_filters::LevelFilter;

    #[expect(clippy::trivially_copy_pass_by_ref, reason = "serde")]
    pub fn serialize<S>(level_filter: &LevelFilter, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&level_filter.to_string())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<LevelFilter, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(d)?;
        LevelFilter::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn level_is_case_insensitive() {
        let config: TracingConfig = toml::from_str(r#"level = "DEBUG""#).unwrap();
        assert_eq!(config.level, LevelFilter::DEBUG);

        assert!(toml::from_str::<TracingConfig>(r#"level = "loud""#).is_err());
    }
}
