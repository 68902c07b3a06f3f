//! Integration tests for alpha-research.
//!
//! Every test runs against a scripted fetch capability injected through the
//! `PaidFetch` seam, so no network calls (and no payments) happen. The stub
//! records every URL it is asked for, which is how billed-call counts are
//! asserted.
//!
//! Run with: cargo test --test api_tests

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;
use url::Url;

use alpha_research::agent::{MarketAnalyzer, TradingLoop};
use alpha_research::prelude::*;

static INIT: Once = Once::new();

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Scripted fetch capability: per-path response queues plus a call log.
#[derive(Default)]
struct StubFetch {
    responses: Mutex<HashMap<String, VecDeque<Value>>>,
    failures: Mutex<HashSet<String>>,
    calls: Mutex<Vec<Url>>,
}

impl StubFetch {
    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a response body for a path; queued bodies are consumed in
    /// call order.
    fn enqueue(&self, path: &str, body: Value) {
        self.responses
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push_back(body);
    }

    /// Make every call to a path fail with a payment error.
    fn fail(&self, path: &str) {
        self.failures.lock().unwrap().insert(path.to_string());
    }

    fn calls(&self) -> Vec<Url> {
        self.calls.lock().unwrap().clone()
    }

    fn calls_to(&self, path: &str) -> usize {
        self.calls().iter().filter(|url| url.path() == path).count()
    }
}

#[async_trait]
impl PaidFetch for StubFetch {
    async fn get_json(&self, url: &Url) -> Result<Value> {
        self.calls.lock().unwrap().push(url.clone());
        let path = url.path().to_string();

        if self.failures.lock().unwrap().contains(&path) {
            return Err(Error::Payment("insufficient balance".into()));
        }

        self.responses
            .lock()
            .unwrap()
            .get_mut(&path)
            .and_then(|queue| queue.pop_front())
            .ok_or_else(|| Error::InvalidInput(format!("no scripted response for {path}")))
    }
}

fn client_with(stub: &Arc<StubFetch>) -> AlphaClient {
    init_logging();
    AlphaClient::with_fetch(stub.clone(), ClientConfig::default())
}

// ============================================================================
// FIXTURES
// ============================================================================

fn token_body(price: Option<f64>) -> Value {
    let mut data = json!({ "grokAnalysis": "Momentum building" });
    if let Some(price) = price {
        data["coingecko"] = json!({ "price": price, "volume24h": 1_000_000.0 });
    }
    json!({ "data": data })
}

fn trending_body(symbols: &[&str]) -> Value {
    let tokens: Vec<Value> = symbols
        .iter()
        .enumerate()
        .map(|(rank, symbol)| {
            json!({
                "symbol": symbol,
                "price": 100.0 - rank as f64,
                "volumeChange": 10.0 * (rank as f64 + 1.0),
            })
        })
        .collect();
    json!({ "data": { "coingecko": tokens, "narrativeSummary": "Rotation into memes" } })
}

fn sentiment_body(analysis: &str) -> Value {
    json!({
        "query": "$TEST",
        "data": { "tweetsAnalyzed": 40, "sentimentAnalysis": analysis }
    })
}

fn search_body() -> Value {
    json!({
        "data": {
            "exa": {
                "results": [
                    { "title": "Jupiter", "url": "https://jup.ag" },
                    { "title": "Docs", "url": "https://docs.jup.ag" }
                ],
                "resultsFound": 12
            },
            "summary": "Leading DEX aggregator"
        }
    })
}

fn deep_body() -> Value {
    json!({
        "query": "thesis",
        "sources": ["exa", "grok", "coingecko"],
        "data": { "thesis": "structurally growing" }
    })
}

// ============================================================================
// URL CONSTRUCTION TESTS
// ============================================================================

mod url_construction_tests {
    use super::*;

    #[tokio::test]
    async fn test_token_call_carries_exact_params() {
        let stub = StubFetch::new();
        stub.enqueue("/alpha/token", token_body(Some(150.0)));
        let client = client_with(&stub);

        client
            .tokens()
            .analyze_with_twitter(&Symbol::new("SOL"))
            .await
            .unwrap();

        let calls = stub.calls();
        assert_eq!(calls.len(), 1);
        let url = &calls[0];
        assert_eq!(url.path(), "/alpha/token");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("symbol".to_string(), "SOL".to_string()),
                ("twitter".to_string(), "true".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_sentiment_query_is_percent_encoded() {
        let stub = StubFetch::new();
        stub.enqueue("/alpha/sentiment", sentiment_body("quiet"));
        let client = client_with(&stub);

        client
            .sentiment()
            .for_symbol(&Symbol::new("WIF"))
            .await
            .unwrap();

        let calls = stub.calls();
        let url = &calls[0];
        assert_eq!(url.query(), Some("query=%24WIF"));
        // Decodes back to the cashtag
        let (key, value) = url.query_pairs().next().unwrap();
        assert_eq!(key, "query");
        assert_eq!(value, "$WIF");
    }

    #[tokio::test]
    async fn test_no_parameter_is_duplicated() {
        let stub = StubFetch::new();
        stub.enqueue("/alpha/token", token_body(Some(1.0)));
        stub.enqueue("/alpha/search", search_body());
        stub.enqueue("/alpha/sentiment", sentiment_body("quiet"));
        let client = client_with(&stub);

        client
            .full_intelligence(&Symbol::new("SOL"))
            .await
            .unwrap();

        for url in stub.calls() {
            let mut seen = HashSet::new();
            for (key, _) in url.query_pairs() {
                assert!(
                    seen.insert(key.into_owned()),
                    "duplicated query parameter in {url}"
                );
            }
        }
    }
}

// ============================================================================
// FAN-OUT / FAN-IN TESTS
// ============================================================================

mod fanout_tests {
    use super::*;

    #[tokio::test]
    async fn test_full_intelligence_assembles_all_three() {
        let stub = StubFetch::new();
        stub.enqueue("/alpha/token", token_body(Some(150.0)));
        stub.enqueue("/alpha/search", search_body());
        stub.enqueue("/alpha/sentiment", sentiment_body("Strongly bullish"));
        let client = client_with(&stub);

        let intel = client
            .full_intelligence(&Symbol::new("SOL"))
            .await
            .unwrap();

        assert_eq!(intel.symbol.as_str(), "SOL");
        assert_eq!(intel.token.price, Some(150.0));
        assert_eq!(intel.research.sources_found, 12);
        assert_eq!(intel.sentiment.tweets_analyzed, 40);
        assert_eq!(stub.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_full_intelligence_rejects_if_any_call_fails() {
        let stub = StubFetch::new();
        stub.enqueue("/alpha/token", token_body(Some(150.0)));
        stub.enqueue("/alpha/search", search_body());
        stub.fail("/alpha/sentiment");
        let client = client_with(&stub);

        let result = client.full_intelligence(&Symbol::new("SOL")).await;

        let error = result.expect_err("one failing constituent must fail the join");
        assert!(error.is_payment_error(), "unexpected error: {error:?}");
    }
}

// ============================================================================
// FALLBACK EXTRACTION TESTS
// ============================================================================

mod fallback_tests {
    use super::*;

    #[tokio::test]
    async fn test_secondary_provider_used_when_primary_absent() {
        let stub = StubFetch::new();
        stub.enqueue(
            "/alpha/token",
            json!({ "data": { "dexscreener": { "price": 0.0042 } } }),
        );
        let client = client_with(&stub);

        let response = client.tokens().analyze(&Symbol::new("WIF")).await.unwrap();
        assert_eq!(response.data.price(), Some(0.0042));
    }

    #[tokio::test]
    async fn test_primary_provider_preferred() {
        let stub = StubFetch::new();
        stub.enqueue(
            "/alpha/token",
            json!({ "data": {
                "coingecko": { "price": 150.0 },
                "dexscreener": { "price": 149.5 }
            } }),
        );
        let client = client_with(&stub);

        let response = client.tokens().analyze(&Symbol::new("SOL")).await.unwrap();
        assert_eq!(response.data.price(), Some(150.0));
    }

    #[tokio::test]
    async fn test_both_absent_yields_placeholder_not_error() {
        let stub = StubFetch::new();
        stub.enqueue("/alpha/token", json!({ "data": {} }));
        let client = client_with(&stub);

        let response = client.tokens().analyze(&Symbol::new("XYZ")).await.unwrap();
        assert_eq!(response.data.price(), None);
        assert_eq!(response.data.price_display(), "unknown");
        assert_eq!(response.data.analysis(), "No analysis available");
    }
}

// ============================================================================
// AGENT DECISION TESTS
// ============================================================================

mod agent_tests {
    use super::*;

    #[tokio::test]
    async fn test_neutral_sentiment_issues_no_deep_call() {
        let stub = StubFetch::new();
        stub.enqueue("/alpha/trending", trending_body(&["SOL", "WIF", "PEPE"]));
        for _ in 0..3 {
            stub.enqueue("/alpha/sentiment", sentiment_body("mixed takes, mostly memes"));
        }
        let client = client_with(&stub);

        let decisions = MarketAnalyzer::new(client).analyze_market().await.unwrap();

        assert_eq!(decisions.len(), 3);
        for decision in &decisions {
            assert_eq!(decision.action, TradeAction::Hold);
            assert_eq!(decision.confidence, 0.5);
        }
        assert_eq!(stub.calls_to("/alpha/trending"), 1);
        assert_eq!(stub.calls_to("/alpha/sentiment"), 3);
        assert_eq!(stub.calls_to("/alpha/deep"), 0);
    }

    #[tokio::test]
    async fn test_single_bullish_token_issues_one_deep_call() {
        let stub = StubFetch::new();
        stub.enqueue("/alpha/trending", trending_body(&["SOL"]));
        stub.enqueue("/alpha/sentiment", sentiment_body("Overwhelmingly BULLISH"));
        stub.enqueue("/alpha/deep", deep_body());
        let client = client_with(&stub);

        let decisions = MarketAnalyzer::new(client).analyze_market().await.unwrap();

        assert_eq!(decisions.len(), 1);
        assert_eq!(decisions[0].action, TradeAction::Buy);
        assert_eq!(decisions[0].confidence, 0.7);
        assert_eq!(stub.calls_to("/alpha/deep"), 1);
    }

    #[tokio::test]
    async fn test_end_to_end_three_token_scenario() {
        let stub = StubFetch::new();
        stub.enqueue("/alpha/trending", trending_body(&["SOL", "WIF", "PEPE"]));
        // Consumed in ranked order
        stub.enqueue("/alpha/sentiment", sentiment_body("clearly bullish momentum"));
        stub.enqueue("/alpha/sentiment", sentiment_body("turning bearish fast"));
        stub.enqueue("/alpha/sentiment", sentiment_body("nothing conclusive"));
        stub.enqueue("/alpha/deep", deep_body());
        stub.enqueue("/alpha/deep", deep_body());
        let client = client_with(&stub);

        let decisions = MarketAnalyzer::new(client).analyze_market().await.unwrap();

        let summary: Vec<(&str, TradeAction, f64)> = decisions
            .iter()
            .map(|d| (d.symbol.as_str(), d.action, d.confidence))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("SOL", TradeAction::Buy, 0.7),
                ("WIF", TradeAction::Sell, 0.6),
                ("PEPE", TradeAction::Hold, 0.5),
            ]
        );

        assert_eq!(stub.calls_to("/alpha/trending"), 1);
        assert_eq!(stub.calls_to("/alpha/sentiment"), 3);
        assert_eq!(stub.calls_to("/alpha/deep"), 2);
    }

    #[tokio::test]
    async fn test_depth_limits_analyzed_prefix() {
        let stub = StubFetch::new();
        stub.enqueue(
            "/alpha/trending",
            trending_body(&["SOL", "WIF", "PEPE", "DOGE", "ETH"]),
        );
        stub.enqueue("/alpha/sentiment", sentiment_body("quiet"));
        stub.enqueue("/alpha/sentiment", sentiment_body("quiet"));
        let client = client_with(&stub);

        let decisions = MarketAnalyzer::new(client)
            .with_depth(2)
            .analyze_market()
            .await
            .unwrap();

        assert_eq!(decisions.len(), 2);
        assert_eq!(stub.calls_to("/alpha/sentiment"), 2);
    }
}

// ============================================================================
// TRADING LOOP TESTS
// ============================================================================

mod loop_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_loop_survives_failing_cycles() {
        let stub = StubFetch::new();
        stub.fail("/alpha/trending");
        let client = client_with(&stub);

        let trading_loop = TradingLoop::new(MarketAnalyzer::new(client))
            .with_interval(Duration::from_secs(300));
        let (task, handle) = trading_loop.spawn();

        // Two full intervals of virtual time: the first cycle fails, and
        // the loop must still run two more.
        tokio::time::sleep(Duration::from_secs(650)).await;

        assert!(
            stub.calls_to("/alpha/trending") >= 2,
            "loop must keep scheduling cycles after failures, saw {}",
            stub.calls_to("/alpha/trending")
        );

        handle.stop();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_is_honored_between_cycles() {
        let stub = StubFetch::new();
        stub.enqueue("/alpha/trending", trending_body(&["SOL"]));
        stub.enqueue("/alpha/sentiment", sentiment_body("quiet"));
        let client = client_with(&stub);

        let trading_loop = TradingLoop::new(MarketAnalyzer::new(client))
            .with_interval(Duration::from_secs(300));
        let (task, handle) = trading_loop.spawn();

        // Let the first cycle complete, then stop during the sleep.
        tokio::time::sleep(Duration::from_secs(10)).await;
        handle.stop();
        task.await.unwrap();

        assert_eq!(stub.calls_to("/alpha/trending"), 1);
    }
}

// ============================================================================
// ACTION DISPATCH TESTS
// ============================================================================

mod action_tests {
    use super::*;

    #[tokio::test]
    async fn test_token_analysis_reply_shape() {
        let stub = StubFetch::new();
        stub.enqueue("/alpha/token", token_body(Some(150.0)));
        let client = client_with(&stub);

        let request = ActionKind::TokenAnalysis.parse("analyze $SOL for me");
        let reply = alpha_research::actions::dispatch(&client, request)
            .await
            .unwrap();

        assert_eq!(reply.kind, ActionKind::TokenAnalysis);
        assert!(reply.text.starts_with("SOL: $150"));
        assert!(reply.text.contains("Momentum building"));
        assert_eq!(stub.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_trending_reply_lists_top_tokens() {
        let stub = StubFetch::new();
        stub.enqueue(
            "/alpha/trending",
            trending_body(&["SOL", "WIF", "PEPE", "DOGE", "ETH", "BTC"]),
        );
        let client = client_with(&stub);

        let reply = alpha_research::actions::dispatch(&client, ActionRequest::Trending)
            .await
            .unwrap();

        assert!(reply.text.starts_with("Top trending:"));
        assert!(reply.text.contains("SOL: $100"));
        assert!(reply.text.contains("Rotation into memes"));
        // Top 5 only
        assert!(!reply.text.contains("BTC:"));
    }

    #[tokio::test]
    async fn test_search_reply_includes_sources() {
        let stub = StubFetch::new();
        stub.enqueue("/alpha/search", search_body());
        let client = client_with(&stub);

        let request = ActionKind::Search.parse("research Jupiter DEX");
        let reply = alpha_research::actions::dispatch(&client, request)
            .await
            .unwrap();

        assert!(reply.text.contains("Leading DEX aggregator"));
        assert!(reply.text.contains("- Jupiter: https://jup.ag"));

        // The verb was stripped before the query went out.
        let calls = stub.calls();
        let (_, value) = calls[0].query_pairs().next().unwrap();
        assert_eq!(value, "Jupiter DEX");
    }

    #[tokio::test]
    async fn test_deep_research_reply_names_sources() {
        let stub = StubFetch::new();
        stub.enqueue("/alpha/deep", deep_body());
        let client = client_with(&stub);

        let request = ActionKind::DeepResearch.parse("deep dive on Farcaster");
        let reply = alpha_research::actions::dispatch(&client, request)
            .await
            .unwrap();

        assert!(reply.text.contains("sources: exa, grok, coingecko"));
        assert!(reply.text.contains("structurally growing"));
    }
}
