use crate::Labels;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;
use strum::{Display, EnumString};

/// How reports are rendered.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OutputFormat {
    /// One human-readable sentence per input
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct GeneratorConfig {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Spread batches over the rayon thread pool
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub parallel: bool,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: Labels,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_format(&self, output_format: OutputFormat) -> Self {
        self.mutate_clone(|x| x.output_format = output_format)
    }

    pub fn parallel(&self, parallel: bool) -> Self {
        self.mutate_clone(|x| x.parallel = parallel)
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn should_have_default() {
        assert_eq!(
            GeneratorConfig::new(),
            GeneratorConfig {
                output_format: OutputFormat::Text,
                parallel: false,
                labels: Labels::empty(),
            }
        );
    }

    #[test]
    fn setters_do_not_mutate_original() {
        let config = GeneratorConfig::new();
        let parallel = config.parallel(true).output_format(OutputFormat::Json);
        assert!(!config.parallel);
        assert!(parallel.parallel);
        assert_eq!(parallel.output_format, OutputFormat::Json);
    }

    #[test]
    fn should_deserialize_with_defaults() {
        let config: GeneratorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GeneratorConfig::new());

        let config: GeneratorConfig = serde_json::from_str(
            r#"{"output_format": null, "parallel": null, "labels": null}"#,
        )
        .unwrap();
        assert_eq!(config, GeneratorConfig::new());
    }

    #[test]
    fn should_deserialize_full_config() {
        let config: GeneratorConfig = serde_json::from_str(
            r#"{"output_format": "json", "parallel": true, "labels": {"depot": "brasov"}}"#,
        )
        .unwrap();
        assert_eq!(
            config,
            GeneratorConfig::new()
                .output_format(OutputFormat::Json)
                .parallel(true)
                .labels(Labels::new(&[("depot", "brasov")]))
        );
    }

    #[test]
    fn output_format_parses_from_str() {
        assert_eq!(OutputFormat::from_str("json"), Ok(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("text"), Ok(OutputFormat::Text));
        assert!(OutputFormat::from_str("xml").is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
