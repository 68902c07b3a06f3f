//! Per-cycle market analysis: trending, sentiment, conditional deep research.

use crate::agent::SentimentSignal;
use crate::models::{TradeAction, TradingDecision};
use crate::{AlphaClient, Result};

/// How many ranked trending tokens are analyzed per cycle.
pub const TOP_MOVERS: usize = 3;

/// One analysis pass over the market.
///
/// Cost per cycle at the default depth: $0.02 for trending, $0.08 per
/// analyzed token for sentiment, and $0.15 per deep-research call, which is
/// only issued for tokens whose sentiment classifies as non-neutral.
///
/// # Example
///
/// ```no_run
/// use alpha_research::agent::MarketAnalyzer;
///
/// # async fn example(client: alpha_research::AlphaClient) -> alpha_research::Result<()> {
/// let analyzer = MarketAnalyzer::new(client);
/// for decision in analyzer.analyze_market().await? {
///     println!("{decision}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MarketAnalyzer {
    client: AlphaClient,
    depth: usize,
}

impl MarketAnalyzer {
    /// Create an analyzer over an existing client.
    pub fn new(client: AlphaClient) -> Self {
        Self {
            client,
            depth: TOP_MOVERS,
        }
    }

    /// Override how many trending tokens are analyzed per cycle.
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Run one analysis cycle and return a decision per analyzed token, in
    /// ranked order.
    ///
    /// The trending call happens once; sentiment calls are sequential
    /// because each feeds the deep-research gate for its own token.
    pub async fn analyze_market(&self) -> Result<Vec<TradingDecision>> {
        let trending = self.client.trending().list_with_twitter().await?;
        let top_movers = trending.data.top(self.depth);

        let mut decisions = Vec::with_capacity(top_movers.len());
        for token in top_movers {
            let sentiment = self.client.sentiment().for_symbol(&token.symbol).await?;
            let analysis = &sentiment.data.sentiment_analysis;
            let signal = SentimentSignal::classify(analysis);

            let decision = if signal.is_actionable() {
                let deep = self
                    .client
                    .research()
                    .deep(&format!("{} investment thesis 2026", token.symbol))
                    .await?;
                let reasoning = format!(
                    "Sentiment: {}... | Deep: {}...",
                    snippet(analysis, 100),
                    snippet(&deep.data.to_string(), 200),
                );
                TradingDecision::new(
                    token.symbol.clone(),
                    signal.action(),
                    signal.confidence(),
                    reasoning,
                )?
            } else {
                TradingDecision::new(
                    token.symbol.clone(),
                    TradeAction::Hold,
                    signal.confidence(),
                    "Mixed sentiment, insufficient conviction",
                )?
            };

            decisions.push(decision);
        }

        Ok(decisions)
    }
}

/// Leading slice of a text on a char boundary, for reasoning strings.
fn snippet(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
