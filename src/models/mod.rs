//! Data models for the Alpha Research API.
//!
//! This module contains the strongly-typed response envelopes and records
//! used by the client, organized by endpoint family:
//!
//! - [`primitives`] - Core types like `Symbol`
//! - [`token`] - Token analysis responses
//! - [`trending`] - Trending token responses
//! - [`sentiment`] - X/Twitter sentiment responses
//! - [`research`] - Neural search and deep research responses
//! - [`intelligence`] - Combined fan-out intelligence record
//! - [`decision`] - Trading decisions emitted by the agent loop

pub mod decision;
pub mod intelligence;
pub mod primitives;
pub mod research;
pub mod sentiment;
pub mod token;
pub mod trending;

// Re-export commonly used types
pub use decision::*;
pub use intelligence::*;
pub use primitives::*;
pub use research::*;
pub use sentiment::*;
pub use token::*;
pub use trending::*;
