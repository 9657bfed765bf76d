use crate::cli::{ClassifyArgs, SettingsArgs};
use crate::commands::output;
use crate::config::build_config;
use crate::error::{CliError, Result};
use fsaptviz::core::io::payload::FsaptPayload;
use fsaptviz::engine::config::AnalysisConfig;
use fsaptviz::engine::error::AnalysisError;
use fsaptviz::workflows::analyze;
use tracing::info;

pub fn run(args: ClassifyArgs, settings: &SettingsArgs) -> Result<()> {
    let config = build_config(settings)?;
    let threshold = args.threshold.unwrap_or(0.0);
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(CliError::Argument(format!(
            "--threshold must be a finite, non-negative number (got {})",
            threshold
        )));
    }

    info!("Loading payload from {:?}", &args.input);
    let payload = FsaptPayload::read_from_path(&args.input).map_err(AnalysisError::from)?;

    let analysis_config = AnalysisConfig {
        classifier: config.classifier,
        threshold,
    };
    let analysis = analyze::run(&payload, &analysis_config)?;

    println!("FSAPT classification of {}", args.input.display());
    output::present(&analysis, &analysis_config, &args.output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputArgs;
    use fsaptviz::core::io::payload::PayloadError;
    use std::fs;
    use tempfile::tempdir;

    fn isolated_settings(dir: &std::path::Path) -> SettingsArgs {
        let config_path = dir.join("config.toml");
        fs::write(&config_path, "").unwrap();
        SettingsArgs {
            config: Some(config_path),
            ..SettingsArgs::default()
        }
    }

    #[test]
    fn classifies_enveloped_payload_and_exports_json() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("payload.json");
        fs::write(
            &input,
            r#"{"success": true, "data": {"atom_indices": [15, 67, 89],
                "energy_contributions": [-2.5, 1.0, 0.01],
                "interaction_type": "hydrogen_bonding"}}"#,
        )
        .unwrap();
        let out = dir.path().join("colors.json");

        let args = ClassifyArgs {
            input,
            threshold: None,
            output: OutputArgs {
                output: Some(out.clone()),
                format: None,
            },
        };
        run(args, &isolated_settings(dir.path())).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(value["atoms"].as_array().unwrap().len(), 3);
        assert_eq!(value["summary"]["attractive_count"], 1);
    }

    #[test]
    fn mismatched_columns_surface_as_analysis_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("payload.json");
        fs::write(
            &input,
            r#"{"atom_indices": [1, 2], "energy_contributions": [0.5]}"#,
        )
        .unwrap();

        let args = ClassifyArgs {
            input,
            threshold: None,
            output: OutputArgs::default(),
        };
        let result = run(args, &isolated_settings(dir.path()));
        assert!(matches!(result, Err(CliError::Analysis(_))));
    }

    #[test]
    fn missing_payload_surfaces_as_payload_io_error() {
        let dir = tempdir().unwrap();
        let args = ClassifyArgs {
            input: dir.path().join("absent.json"),
            threshold: None,
            output: OutputArgs::default(),
        };
        let result = run(args, &isolated_settings(dir.path()));
        assert!(matches!(
            result,
            Err(CliError::Analysis(AnalysisError::Payload {
                source: PayloadError::Io { .. }
            }))
        ));
    }

    #[test]
    fn saved_failure_response_is_not_classified() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("failed.json");
        fs::write(
            &input,
            r#"{"success": false, "data": {}, "message": "Missing ligand_id or protein_id"}"#,
        )
        .unwrap();
        let out = dir.path().join("colors.csv");

        let args = ClassifyArgs {
            input,
            threshold: None,
            output: OutputArgs {
                output: Some(out.clone()),
                format: None,
            },
        };
        let result = run(args, &isolated_settings(dir.path()));
        match result {
            Err(CliError::Analysis(AnalysisError::Payload {
                source: PayloadError::Unsuccessful(message),
            })) => assert_eq!(message, "Missing ligand_id or protein_id"),
            other => panic!("Expected a failed-response error, got {:?}", other),
        }
        assert!(!out.exists());
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let dir = tempdir().unwrap();
        let args = ClassifyArgs {
            input: dir.path().join("payload.json"),
            threshold: Some(-0.5),
            output: OutputArgs::default(),
        };
        let result = run(args, &isolated_settings(dir.path()));
        assert!(matches!(result, Err(CliError::Argument(_))));
    }
}
