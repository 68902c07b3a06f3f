//! Agent-facing actions over the Alpha Research API.
//!
//! This is the chat-plugin surface: a closed set of named actions, each
//! with a typed input extractor and a handler that shapes the API response
//! into display text. Dispatch is by enumeration, so adding an action means
//! adding a variant and an arm, and unknown actions cannot exist.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Symbol;
use crate::{AlphaClient, Result};

static CASHTAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$([A-Za-z]+)").expect("cashtag pattern is valid"));
static KNOWN_TICKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(SOL|ETH|BTC|WIF|PEPE|VIRTUAL|DOGE)\b").expect("ticker pattern is valid")
});
static QUERY_VERB: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(research|search|analyze|look up|find)\s+").expect("verb pattern is valid")
});

/// The closed set of available actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// AI token analysis with trading signals
    TokenAnalysis,
    /// Trending tokens with narrative detection
    Trending,
    /// X/Twitter sentiment for a token or topic
    Sentiment,
    /// Quick neural search with AI summary
    Search,
    /// Full multi-source deep research
    DeepResearch,
}

impl ActionKind {
    /// Every available action.
    pub const ALL: [ActionKind; 5] = [
        ActionKind::TokenAnalysis,
        ActionKind::Trending,
        ActionKind::Sentiment,
        ActionKind::Search,
        ActionKind::DeepResearch,
    ];

    /// Stable wire name of the action.
    pub fn name(&self) -> &'static str {
        match self {
            ActionKind::TokenAnalysis => "ALPHA_TOKEN_ANALYSIS",
            ActionKind::Trending => "ALPHA_TRENDING",
            ActionKind::Sentiment => "ALPHA_SENTIMENT",
            ActionKind::Search => "ALPHA_SEARCH",
            ActionKind::DeepResearch => "ALPHA_DEEP_RESEARCH",
        }
    }

    /// Human-readable description, including the per-call cost.
    pub fn description(&self) -> &'static str {
        match self {
            ActionKind::TokenAnalysis => {
                "Get AI-powered token analysis with trading signals ($0.02 USDC)"
            }
            ActionKind::Trending => {
                "Get top trending tokens with AI narrative detection ($0.02 USDC)"
            }
            ActionKind::Sentiment => {
                "Analyze X/Twitter sentiment for any token or topic ($0.08 USDC)"
            }
            ActionKind::Search => "Quick neural search with AI summary ($0.03 USDC)",
            ActionKind::DeepResearch => {
                "Full multi-source research with AI analysis ($0.15 USDC)"
            }
        }
    }

    /// Per-call cost in USD.
    pub fn cost_usd(&self) -> f64 {
        match self {
            ActionKind::TokenAnalysis | ActionKind::Trending => 0.02,
            ActionKind::Sentiment => 0.08,
            ActionKind::Search => 0.03,
            ActionKind::DeepResearch => 0.15,
        }
    }

    /// Extract this action's typed input from a free-text message.
    pub fn parse(&self, text: &str) -> ActionRequest {
        match self {
            ActionKind::TokenAnalysis => ActionRequest::TokenAnalysis {
                symbol: extract_symbol(text),
            },
            ActionKind::Trending => ActionRequest::Trending,
            ActionKind::Sentiment => ActionRequest::Sentiment {
                query: extract_query(text),
            },
            ActionKind::Search => ActionRequest::Search {
                query: extract_query(text),
            },
            ActionKind::DeepResearch => ActionRequest::DeepResearch {
                query: extract_query(text),
            },
        }
    }
}

/// A parsed, typed action input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionRequest {
    /// Analyze one token
    TokenAnalysis {
        /// The token to analyze
        symbol: Symbol,
    },
    /// List trending tokens (no input)
    Trending,
    /// Sentiment for a query
    Sentiment {
        /// Free-text query (a cashtag or topic)
        query: String,
    },
    /// Neural search for a query
    Search {
        /// Free-text query
        query: String,
    },
    /// Deep research for a query
    DeepResearch {
        /// Free-text query
        query: String,
    },
}

impl ActionRequest {
    /// The action this request belongs to.
    pub fn kind(&self) -> ActionKind {
        match self {
            ActionRequest::TokenAnalysis { .. } => ActionKind::TokenAnalysis,
            ActionRequest::Trending => ActionKind::Trending,
            ActionRequest::Sentiment { .. } => ActionKind::Sentiment,
            ActionRequest::Search { .. } => ActionKind::Search,
            ActionRequest::DeepResearch { .. } => ActionKind::DeepResearch,
        }
    }
}

/// Structured result of a dispatched action.
#[derive(Debug, Clone)]
pub struct ActionReply {
    /// The action that produced this reply
    pub kind: ActionKind,
    /// Display text for the agent to relay
    pub text: String,
}

/// Pull a ticker symbol out of a message.
///
/// Prefers an explicit cashtag (`$WIF`), falls back to a known-ticker word,
/// and defaults to `BTC` when neither appears.
pub fn extract_symbol(text: &str) -> Symbol {
    CASHTAG
        .captures(text)
        .or_else(|| KNOWN_TICKER.captures(text))
        .and_then(|captures| captures.get(1))
        .map(|m| Symbol::new(m.as_str()))
        .unwrap_or_else(|| Symbol::new("BTC"))
}

/// Strip a leading command verb (`research`, `search`, ...) from a message.
pub fn extract_query(text: &str) -> String {
    QUERY_VERB.replace(text, "").trim().to_string()
}

/// Run one action against the API and shape its reply.
///
/// Exactly one metered call per dispatch.
pub async fn dispatch(client: &AlphaClient, request: ActionRequest) -> Result<ActionReply> {
    let kind = request.kind();
    let text = match request {
        ActionRequest::TokenAnalysis { symbol } => {
            let response = client.tokens().analyze_with_twitter(&symbol).await?;
            format!(
                "{}: ${}\n\n{}",
                symbol,
                response.data.price_display(),
                response.data.analysis()
            )
        }
        ActionRequest::Trending => {
            let response = client.trending().list_with_twitter().await?;
            let list = response
                .data
                .top(5)
                .iter()
                .map(|token| {
                    format!(
                        "{}: ${} ({:+}% vol)",
                        token.symbol,
                        token
                            .price
                            .map_or_else(|| "unknown".to_string(), |p| p.to_string()),
                        token.volume_change.unwrap_or(0.0),
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            format!("Top trending:\n{}\n\n{}", list, response.data.narrative())
        }
        ActionRequest::Sentiment { query } => {
            let response = client.sentiment().query(&query).await?;
            format!(
                "Sentiment for \"{}\" ({} tweets):\n\n{}",
                response.query.as_deref().unwrap_or(&query),
                response.data.tweets_analyzed.unwrap_or(0),
                response.data.sentiment_analysis
            )
        }
        ActionRequest::Search { query } => {
            let response = client.research().search(&query).await?;
            let sources = response
                .data
                .top_hits(3)
                .iter()
                .map(|hit| format!("- {}: {}", hit.title, hit.url))
                .collect::<Vec<_>>()
                .join("\n");
            format!("{}\n\nSources:\n{}", response.data.summary_text(), sources)
        }
        ActionRequest::DeepResearch { query } => {
            let response = client.research().deep(&query).await?;
            let body = serde_json::to_string_pretty(&response.data)?;
            format!(
                "Deep research on \"{}\" (sources: {}):\n\n{}",
                response.query.as_deref().unwrap_or(&query),
                response.sources_display(),
                truncate_chars(&body, 2000)
            )
        }
    };

    Ok(ActionReply { kind, text })
}

/// Truncate on a char boundary.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
