use super::defaults::DefaultsConfig;
use super::file::{FileConfig, resolve_config_path};
use super::models::{ApiSettings, AppConfig};
use crate::cli::SettingsArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use fsaptviz::core::models::color::Color;
use fsaptviz::engine::config::{ClassifierConfigBuilder, Palette};
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Merges defaults, the config file, `--set` values and explicit flags, in
/// increasing order of precedence.
pub fn build_config(settings: &SettingsArgs) -> Result<AppConfig> {
    let file_config = match resolve_config_path(settings.config.as_deref())? {
        Some(path) => FileConfig::from_file(&path)?,
        None => FileConfig::default(),
    };
    merge(file_config, settings)
}

fn merge(file_config: FileConfig, settings: &SettingsArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();
    let mut file_config = apply_set_values(file_config, &settings.set_values)?;

    let api_file = file_config.api.take().unwrap_or_default();
    let base_url = settings
        .api_url
        .clone()
        .or(api_file.url)
        .unwrap_or(defaults.api_url);
    let base_url = normalize_base_url(&base_url)?;
    let timeout_secs = api_file.timeout_secs.unwrap_or(defaults.timeout_secs);
    if timeout_secs == 0 {
        return Err(CliError::Config(
            "`api.timeout-secs` must be greater than zero".to_string(),
        ));
    }

    let analysis_file = file_config.analysis.take().unwrap_or_default();
    let threshold = analysis_file.threshold.unwrap_or(defaults.threshold);
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(CliError::Config(format!(
            "`analysis.threshold` must be a finite, non-negative number (got {})",
            threshold
        )));
    }

    let classifier_file = file_config.classifier.take().unwrap_or_default();
    let palette_file = classifier_file.palette.unwrap_or_default();
    let default_palette = Palette::default();
    let palette = Palette {
        neutral: palette_file.neutral.unwrap_or(default_palette.neutral),
        attractive: palette_file.attractive.unwrap_or(default_palette.attractive),
        repulsive: palette_file.repulsive.unwrap_or(default_palette.repulsive),
    };

    let classifier = ClassifierConfigBuilder::new()
        .neutral_cutoff(
            classifier_file
                .neutral_cutoff
                .unwrap_or(defaults.neutral_cutoff),
        )
        .moderate_intensity(
            classifier_file
                .moderate_intensity
                .unwrap_or(defaults.moderate_intensity),
        )
        .strong_intensity(
            classifier_file
                .strong_intensity
                .unwrap_or(defaults.strong_intensity),
        )
        .default_color(classifier_file.default_color.unwrap_or(defaults.default_color))
        .palette(palette)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let config = AppConfig {
        api: ApiSettings {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        },
        threshold,
        classifier,
    };
    debug!("Effective configuration: {:?}", config);
    Ok(config)
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = reqwest::Url::parse(trimmed)
        .map_err(|e| CliError::Config(format!("Invalid API URL '{}': {}", raw, e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(CliError::Config(format!(
            "Invalid API URL '{}': only http and https are supported",
            raw
        )));
    }
    Ok(trimmed.to_string())
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value)))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value) =
            parser::parse_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

        match key {
            "api.url" => {
                config.api.get_or_insert_with(Default::default).url = Some(value.to_string());
            }
            "api.timeout-secs" => {
                config.api.get_or_insert_with(Default::default).timeout_secs =
                    Some(parse_value(key, value, "integer")?);
            }
            "analysis.threshold" => {
                config.analysis.get_or_insert_with(Default::default).threshold =
                    Some(parse_value(key, value, "float")?);
            }
            "classifier.neutral-cutoff" => {
                config
                    .classifier
                    .get_or_insert_with(Default::default)
                    .neutral_cutoff = Some(parse_value(key, value, "float")?);
            }
            "classifier.moderate-intensity" => {
                config
                    .classifier
                    .get_or_insert_with(Default::default)
                    .moderate_intensity = Some(parse_value(key, value, "float")?);
            }
            "classifier.strong-intensity" => {
                config
                    .classifier
                    .get_or_insert_with(Default::default)
                    .strong_intensity = Some(parse_value(key, value, "float")?);
            }
            "classifier.default-color" => {
                let color = value
                    .parse::<Color>()
                    .map_err(|e| CliError::Config(format!("Invalid value for {}: {}", key, e)))?;
                config
                    .classifier
                    .get_or_insert_with(Default::default)
                    .default_color = Some(color);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
