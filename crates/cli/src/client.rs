//! API client for communicating with the dashboard service

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;

/// API client for the dashboard service
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = Url::parse(base_url).context("Invalid API URL")?;

        Ok(Self { client, base_url })
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.base_url.join(path).context("Invalid path")?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API error ({}): {}", status, body);
        }

        response.json().await.context("Failed to parse response")
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.base_url.join(path).context("Invalid path")?;

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API error ({}): {}", status, body);
        }

        response.json().await.context("Failed to parse response")
    }
}

// API response types

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetrySample {
    pub timestamp: String,
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub gpu_usage: f64,
    pub cpu_waste: f64,
    pub memory_waste: f64,
    pub gpu_waste: f64,
    pub energy_cost: f64,
    pub carbon_footprint: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryResponse {
    pub seed: u64,
    pub total: usize,
    pub samples: Vec<TelemetrySample>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSummary {
    pub hours: usize,
    pub total_energy_cost: f64,
    pub avg_cpu_usage: f64,
    pub total_waste: f64,
    pub total_carbon_kg: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub resource: String,
    pub issue: String,
    pub action: String,
    pub potential_savings: String,
    pub energy_reduction: String,
    pub confidence: u8,
    pub risk_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionList {
    pub suggestions: Vec<Suggestion>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiInputs {
    pub num_servers: u32,
    pub avg_monthly_cost: f64,
    pub current_efficiency: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiEstimate {
    pub optimization_potential_pct: f64,
    pub efficiency_gain_pct: f64,
    pub monthly_savings: f64,
    pub annual_savings: f64,
    pub implementation_cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_even_months: Option<f64>,
    pub energy_saved_kwh: f64,
    pub carbon_reduced_kg: f64,
    pub trees_equivalent: f64,
    pub cumulative_savings: Vec<MonthlySaving>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySaving {
    pub month: u32,
    pub cumulative_savings: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisStep {
    pub index: usize,
    pub message: String,
    pub delay_ms: u64,
    pub progress: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub actions_taken: Vec<String>,
    pub expected_monthly_savings: f64,
    pub expected_energy_reduction_pct: f64,
    pub expected_carbon_reduction_tons_per_year: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisScript {
    pub speed: u8,
    pub steps: Vec<AnalysisStep>,
    pub summary: AnalysisSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_parses_json() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v1/suggestions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"suggestions":[{"resource":"GPU Cluster A","issue":"Idle","action":"Hibernate","potential_savings":"$450/month","energy_reduction":"35%","confidence":95,"risk_level":"low"}],"total":1}"#,
            )
            .create_async()
            .await;

        let client = ApiClient::new(&server.url()).unwrap();
        let result: SuggestionList = client.get("api/v1/suggestions").await.unwrap();

        assert_eq!(result.total, 1);
        assert_eq!(result.suggestions[0].risk_level, "low");
    }

    #[tokio::test]
    async fn test_get_surfaces_api_errors() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/v1/suggestions")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = ApiClient::new(&server.url()).unwrap();
        let result: Result<SuggestionList> = client.get("api/v1/suggestions").await;

        let err = result.unwrap_err().to_string();
        assert!(err.contains("500"), "error should carry the status: {err}");
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/v1/roi/estimate")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"optimization_potential_pct":23.5,"efficiency_gain_pct":20.0,
                    "monthly_savings":1058.82,"annual_savings":12705.88,
                    "implementation_cost":25000.0,"break_even_months":23.61,
                    "energy_saved_kwh":10164.7,"carbon_reduced_kg":4065.88,
                    "trees_equivalent":193.6,"cumulative_savings":[]}"#,
            )
            .create_async()
            .await;

        let client = ApiClient::new(&server.url()).unwrap();
        let inputs = RoiInputs {
            num_servers: 50,
            avg_monthly_cost: 15_000.0,
            current_efficiency: 65.0,
        };
        let estimate: RoiEstimate = client.post("api/v1/roi/estimate", &inputs).await.unwrap();

        assert!((estimate.monthly_savings - 1058.82).abs() < 0.01);
        assert_eq!(estimate.break_even_months, Some(23.61));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(ApiClient::new("not a url").is_err());
    }
}
