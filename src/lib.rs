//! # Free Games
//!
//! Free game promotions aggregator with:
//! - Epic Games Store, Steam and GOG adapters
//! - Amazon Prime Gaming and Ubisoft Store stubs
//! - Concurrent fan-out with fail-fast error handling
//! - Injectable HTTP client for testing
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use free_games::{Aggregator, ReqwestClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let http = Arc::new(ReqwestClient::new()?);
//!     let aggregator = Aggregator::new(http);
//!
//!     let games = aggregator.get_free_games("US").await?;
//!
//!     for game in games {
//!         println!("[{}] {} - {}", game.platform, game.title, game.url);
//!     }
//!     Ok(())
//! }
//! ```

pub mod aggregator;
pub mod core;
pub mod error;
pub mod http;
pub mod providers;
pub mod settings;

// Re-export primary types
pub use aggregator::Aggregator;
pub use core::{FreeGame, GameId, Platform};
pub use error::{FreeGamesError, Result};
pub use http::{HttpClient, ReqwestClient};
pub use settings::Settings;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
