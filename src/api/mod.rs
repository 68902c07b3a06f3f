//! API service modules for Alpha Research endpoints.
//!
//! Each service provides methods for one endpoint family. Every method is
//! one metered call; per-call costs are noted on the methods.

mod research;
mod sentiment;
mod tokens;
mod trending;

pub use research::ResearchService;
pub use sentiment::SentimentService;
pub use tokens::TokensService;
pub use trending::TrendingService;
