//! Search and deep research models for `/alpha/search` and `/alpha/deep`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response envelope for `/alpha/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Endpoint-specific payload
    pub data: SearchData,
}

/// Neural search payload: indexed results plus an AI summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchData {
    /// Exa search results, absent for queries with no index coverage
    #[serde(default)]
    pub exa: Option<ExaResults>,
    /// AI summary of the results
    #[serde(default)]
    pub summary: Option<String>,
}

/// Result set from the Exa search provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExaResults {
    /// Individual hits, best first
    #[serde(default)]
    pub results: Vec<SearchHit>,
    /// Total number of results found
    #[serde(default)]
    pub results_found: Option<u64>,
}

/// A single search hit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    /// Page title
    pub title: String,
    /// Page URL
    pub url: String,
}

impl SearchData {
    /// Summary text, empty when upstream has none.
    pub fn summary_text(&self) -> &str {
        self.summary.as_deref().unwrap_or("")
    }

    /// The top `n` hits, empty when the provider sub-object is absent.
    pub fn top_hits(&self, n: usize) -> &[SearchHit] {
        match &self.exa {
            Some(exa) => &exa.results[..exa.results.len().min(n)],
            None => &[],
        }
    }

    /// Number of results found, 0 when absent.
    pub fn results_found(&self) -> u64 {
        self.exa
            .as_ref()
            .and_then(|e| e.results_found)
            .unwrap_or(0)
    }
}

/// Response envelope for `/alpha/deep`.
///
/// Deep research payloads are free-form multi-source documents; they are
/// kept as raw JSON and truncated for display by callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepResponse {
    /// Free-form research payload
    pub data: Value,
    /// The query as interpreted by the server
    #[serde(default)]
    pub query: Option<String>,
    /// Names of the sources consulted
    #[serde(default)]
    pub sources: Option<Vec<String>>,
}

impl DeepResponse {
    /// Comma-separated source list, empty when absent.
    pub fn sources_display(&self) -> String {
        match &self.sources {
            Some(sources) => sources.join(", "),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_hits_without_exa() {
        let data = SearchData {
            exa: None,
            summary: Some("nothing indexed".into()),
        };
        assert!(data.top_hits(3).is_empty());
        assert_eq!(data.results_found(), 0);
    }

    #[test]
    fn test_deserialize_wire_names() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"data":{"exa":{"results":[{"title":"Jupiter","url":"https://jup.ag"}],"resultsFound":12},"summary":"DEX aggregator"}}"#,
        )
        .unwrap();
        assert_eq!(response.data.results_found(), 12);
        assert_eq!(response.data.top_hits(3)[0].title, "Jupiter");
    }

    #[test]
    fn test_deep_sources_display() {
        let response: DeepResponse = serde_json::from_str(
            r#"{"query":"Farcaster","sources":["exa","grok","coingecko"],"data":{"thesis":"growing"}}"#,
        )
        .unwrap();
        assert_eq!(response.sources_display(), "exa, grok, coingecko");
    }
}
