use crate::core::models::sample::{AtomIndex, InputError, SampleSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;

fn default_interaction_type() -> String {
    "unknown".to_string()
}

/// The FSAPT analysis result for one ligand/protein pair.
///
/// `atom_indices` and `energy_contributions` are index-aligned columns. The
/// remaining fields are informational and are passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FsaptPayload {
    #[serde(default)]
    pub atom_indices: Vec<AtomIndex>,
    #[serde(default)]
    pub energy_contributions: Vec<f64>,
    #[serde(default = "default_interaction_type")]
    pub interaction_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_interaction_energy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ligand_atoms: Option<Vec<AtomIndex>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_atoms: Option<Vec<AtomIndex>>,
}

impl Default for FsaptPayload {
    fn default() -> Self {
        Self {
            atom_indices: Vec::new(),
            energy_contributions: Vec::new(),
            interaction_type: default_interaction_type(),
            threshold: None,
            total_interaction_energy: None,
            ligand_atoms: None,
            protein_atoms: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Failed to read payload '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed payload JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Saved response reports a failed analysis: {0}")]
    Unsuccessful(String),
}

impl FsaptPayload {
    pub fn from_json_str(json: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a payload from JSON.
    ///
    /// Accepts either the bare payload object or the full service envelope
    /// (`{"success": ..., "data": {...}, "message": ...}`), so responses saved
    /// straight from the analysis service can be classified offline. An
    /// envelope with `"success": false` is an error carrying its message.
    pub fn from_reader(reader: impl Read) -> Result<Self, PayloadError> {
        let value: Value = serde_json::from_reader(reader)?;
        let inner = match value {
            Value::Object(mut map) if map.contains_key("data") => {
                if map.get("success").and_then(Value::as_bool) == Some(false) {
                    let message = map
                        .get("message")
                        .and_then(Value::as_str)
                        .unwrap_or("no message given")
                        .to_string();
                    return Err(PayloadError::Unsuccessful(message));
                }
                map.remove("data").unwrap_or(Value::Null)
            }
            other => other,
        };
        Ok(serde_json::from_value(inner)?)
    }

    pub fn read_from_path(path: &Path) -> Result<Self, PayloadError> {
        let file = File::open(path).map_err(|e| PayloadError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Validates the payload columns into a [`SampleSet`].
    pub fn to_sample_set(&self) -> Result<SampleSet, InputError> {
        SampleSet::from_columns(&self.atom_indices, &self.energy_contributions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const PAYLOAD: &str = r#"{
        "atom_indices": [15, 23, 45, 67],
        "energy_contributions": [-2.5, -1.8, -3.2, 1.5],
        "interaction_type": "electrostatic_dispersion",
        "total_interaction_energy": -6.0,
        "ligand_atoms": [15, 23, 45],
        "protein_atoms": [67]
    }"#;

    #[test]
    fn parses_full_payload() {
        let payload = FsaptPayload::from_json_str(PAYLOAD).unwrap();
        assert_eq!(payload.atom_indices, vec![15, 23, 45, 67]);
        assert_eq!(payload.interaction_type, "electrostatic_dispersion");
        assert_eq!(payload.total_interaction_energy, Some(-6.0));
        assert_eq!(payload.protein_atoms, Some(vec![67]));
        assert_eq!(payload.threshold, None);
    }

    #[test]
    fn missing_interaction_type_defaults_to_unknown() {
        let payload =
            FsaptPayload::from_json_str(r#"{"atom_indices": [1], "energy_contributions": [0.2]}"#)
                .unwrap();
        assert_eq!(payload.interaction_type, "unknown");
    }

    #[test]
    fn negative_atom_index_is_a_parse_error() {
        let result = FsaptPayload::from_json_str(
            r#"{"atom_indices": [-1], "energy_contributions": [0.2]}"#,
        );
        assert!(matches!(result, Err(PayloadError::Json(_))));
    }

    #[test]
    fn to_sample_set_surfaces_length_mismatch() {
        let payload = FsaptPayload {
            atom_indices: vec![1, 2],
            energy_contributions: vec![-1.0],
            ..Default::default()
        };
        assert!(matches!(
            payload.to_sample_set(),
            Err(InputError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn read_from_path_accepts_bare_payload_and_envelope() {
        let mut bare = NamedTempFile::new().unwrap();
        write!(bare, "{}", PAYLOAD).unwrap();
        let from_bare = FsaptPayload::read_from_path(bare.path()).unwrap();

        let mut wrapped = NamedTempFile::new().unwrap();
        write!(
            wrapped,
            r#"{{"success": true, "data": {}, "message": "ok"}}"#,
            PAYLOAD
        )
        .unwrap();
        let from_envelope = FsaptPayload::read_from_path(wrapped.path()).unwrap();

        assert_eq!(from_bare, from_envelope);
    }

    #[test]
    fn failed_envelope_is_an_error_with_its_message() {
        let mut failed = NamedTempFile::new().unwrap();
        write!(
            failed,
            r#"{{"success": false, "data": {{}}, "message": "Missing ligand_id or protein_id"}}"#
        )
        .unwrap();
        match FsaptPayload::read_from_path(failed.path()) {
            Err(PayloadError::Unsuccessful(message)) => {
                assert_eq!(message, "Missing ligand_id or protein_id");
            }
            other => panic!("Expected an unsuccessful-response error, got {:?}", other),
        }

        let result = FsaptPayload::from_reader(r#"{"success": false, "data": {}}"#.as_bytes());
        assert!(matches!(result, Err(PayloadError::Unsuccessful(m)) if m == "no message given"));
    }

    #[test]
    fn envelope_without_success_flag_is_accepted() {
        let payload = FsaptPayload::from_reader(
            r#"{"data": {"atom_indices": [4], "energy_contributions": [-0.7]}}"#.as_bytes(),
        )
        .unwrap();
        assert_eq!(payload.atom_indices, vec![4]);
    }

    #[test]
    fn read_from_path_reports_missing_file() {
        let result = FsaptPayload::read_from_path(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(PayloadError::Io { .. })));
    }
}
