//! JSON configuration for the config-driven command-line tool.
use crate::filter::{MagnitudePolicy, SamplingPolicy, SobelParams};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct EdgeToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub filter: FilterConfig,
    pub output: PathBuf,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub sampling: SamplingPolicy,
    pub magnitude: MagnitudePolicy,
    /// Worker count; `None` uses one worker per logical CPU.
    pub workers: Option<usize>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            sampling: SamplingPolicy::Luminance,
            magnitude: MagnitudePolicy::Euclidean,
            workers: None,
        }
    }
}

impl FilterConfig {
    /// Resolve the config section into runtime parameters.
    pub fn to_params(&self) -> SobelParams {
        let params = SobelParams::new()
            .with_sampling(self.sampling)
            .with_magnitude(self.magnitude);
        match self.workers {
            Some(workers) => params.with_workers(workers),
            None => params,
        }
    }
}

pub fn load_config(path: &Path) -> Result<EdgeToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let config: EdgeToolConfig =
            serde_json::from_str(r#"{"input": "in.png", "output": "out.png"}"#).unwrap();
        assert_eq!(config.filter.sampling, SamplingPolicy::Luminance);
        assert_eq!(config.filter.magnitude, MagnitudePolicy::Euclidean);
        assert!(config.filter.workers.is_none());
    }

    #[test]
    fn policies_parse_from_snake_case() {
        let config: EdgeToolConfig = serde_json::from_str(
            r#"{
                "input": "in.png",
                "output": "out.png",
                "filter": {"sampling": "raw_channel", "magnitude": "manhattan", "workers": 3}
            }"#,
        )
        .unwrap();
        assert_eq!(config.filter.sampling, SamplingPolicy::RawChannel);
        assert_eq!(config.filter.magnitude, MagnitudePolicy::Manhattan);
        assert_eq!(config.filter.to_params().workers, 3);
    }
}
