//! Request and response documents of the FSAPT analysis service.
//!
//! Every response except the health check is wrapped in an envelope carrying a
//! `success` flag and an optional human-readable `message`. On failure the
//! service still sends the envelope, with an empty object in place of the data,
//! so all data fields here tolerate being absent.

use super::payload::FsaptPayload;
use serde::{Deserialize, Serialize};

/// Common view over the service's `{success, message}` envelope.
pub trait ApiEnvelope {
    fn is_success(&self) -> bool;
    fn message(&self) -> Option<&str>;
}

/// Body of `POST /api/fsapt-analysis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub ligand_id: String,
    pub protein_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

impl AnalysisRequest {
    pub fn new(ligand_id: impl Into<String>, protein_id: impl Into<String>) -> Self {
        Self {
            ligand_id: ligand_id.into(),
            protein_id: protein_id.into(),
            threshold: None,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub success: bool,
    #[serde(default)]
    pub data: FsaptPayload,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairsResponse {
    pub success: bool,
    #[serde(default)]
    pub pairs: Vec<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Server-side statistics for one ligand/protein pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteSummary {
    pub total_interactions: usize,
    pub total_energy: f64,
    pub attractive_interactions: usize,
    pub repulsive_interactions: usize,
    pub strongest_attractive: f64,
    pub strongest_repulsive: f64,
    pub average_energy: f64,
    pub interaction_type: String,
}

impl Default for RemoteSummary {
    fn default() -> Self {
        Self {
            total_interactions: 0,
            total_energy: 0.0,
            attractive_interactions: 0,
            repulsive_interactions: 0,
            strongest_attractive: 0.0,
            strongest_repulsive: 0.0,
            average_energy: 0.0,
            interaction_type: "unknown".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub success: bool,
    #[serde(default)]
    pub summary: RemoteSummary,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `GET /api/health`. This endpoint is not enveloped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

impl ApiEnvelope for HealthResponse {
    fn is_success(&self) -> bool {
        self.is_healthy()
    }
    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

macro_rules! impl_envelope {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ApiEnvelope for $ty {
                fn is_success(&self) -> bool {
                    self.success
                }
                fn message(&self) -> Option<&str> {
                    self.message.as_deref()
                }
            }
        )*
    };
}

impl_envelope!(AnalysisResponse, PairsResponse, SummaryResponse);

/// Splits a composite pair key such as `LIG_PROT_001` into its ligand and
/// protein identifiers. The ligand identifier is everything before the first
/// underscore.
pub fn split_pair_key(key: &str) -> Option<(&str, &str)> {
    let (ligand, protein) = key.split_once('_')?;
    if ligand.is_empty() || protein.is_empty() {
        return None;
    }
    Some((ligand, protein))
}
