use crate::config::ApiSettings;
use crate::error::{CliError, Result};
use fsaptviz::core::io::api::{
    AnalysisRequest, AnalysisResponse, ApiEnvelope, HealthResponse, PairsResponse, RemoteSummary,
    SummaryResponse,
};
use fsaptviz::core::io::payload::FsaptPayload;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

const USER_AGENT: &str = concat!("fsaptviz/", env!("CARGO_PKG_VERSION"));

/// Thin client for the FSAPT analysis service's JSON API.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    base_url: Url,
}

impl AnalysisClient {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let base_url = Url::parse(&settings.base_url).map_err(|e| {
            CliError::Config(format!("Invalid API URL '{}': {}", settings.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(CliError::Config(format!(
                "API URL '{}' cannot be used as a base URL",
                settings.base_url
            )));
        }
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(settings.timeout)
            .build()?;
        debug!("Analysis client targets {}", base_url);
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<HealthResponse> {
        let url = self.endpoint(&["api", "health"]);
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;
        interpret_response(url.as_str(), status, &body)
    }

    #[instrument(skip(self))]
    pub async fn available_pairs(&self) -> Result<Vec<String>> {
        let url = self.endpoint(&["api", "available-pairs"]);
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;
        let parsed: PairsResponse = interpret_response(url.as_str(), status, &body)?;
        info!("Service reported {} ligand/protein pairs.", parsed.pairs.len());
        Ok(parsed.pairs)
    }

    #[instrument(skip(self))]
    pub async fn interaction_summary(
        &self,
        ligand_id: &str,
        protein_id: &str,
    ) -> Result<RemoteSummary> {
        let url = self.endpoint(&["api", "interaction-summary", ligand_id, protein_id]);
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;
        let parsed: SummaryResponse = interpret_response(url.as_str(), status, &body)?;
        Ok(parsed.summary)
    }

    #[instrument(skip(self), fields(ligand = %request.ligand_id, protein = %request.protein_id))]
    pub async fn fsapt_analysis(&self, request: &AnalysisRequest) -> Result<FsaptPayload> {
        let url = self.endpoint(&["api", "fsapt-analysis"]);
        let response = self.http.post(url.clone()).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;
        let parsed: AnalysisResponse = interpret_response(url.as_str(), status, &body)?;
        info!(
            "Received {} energy contributions for {}/{}.",
            parsed.data.energy_contributions.len(),
            request.ligand_id,
            request.protein_id
        );
        Ok(parsed.data)
    }
}

/// Decodes a response body and turns an unsuccessful envelope or a non-2xx
/// status into [`CliError::Api`]. The service's own message wins when present.
pub fn interpret_response<T>(endpoint: &str, status: StatusCode, body: &str) -> Result<T>
where
    T: DeserializeOwned + ApiEnvelope,
{
    let api_error = |message: String| CliError::Api {
        endpoint: endpoint.to_string(),
        message,
    };

    let parsed: T = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(e) if status.is_success() => {
            return Err(api_error(format!("Malformed response body: {}", e)));
        }
        Err(_) => return Err(api_error(format!("HTTP {}", status))),
    };

    if !status.is_success() || !parsed.is_success() {
        let message = parsed
            .message()
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", status));
        return Err(api_error(message));
    }
    Ok(parsed)
}
