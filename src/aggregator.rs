use std::sync::Arc;

use crate::core::FreeGame;
use crate::error::{FreeGamesError, Result};
use crate::http::HttpClient;
use crate::providers::{AmazonProvider, EpicProvider, GogProvider, SteamProvider, UbisoftProvider};
use crate::settings::Settings;

/// Fan-out over every storefront adapter
///
/// Owns one adapter per storefront and merges their output into a single
/// list with a fixed provider order.
pub struct Aggregator {
    epic: EpicProvider,
    steam: SteamProvider,
    amazon: AmazonProvider,
    gog: GogProvider,
    ubisoft: UbisoftProvider,
}

impl Aggregator {
    /// Create an aggregator against the production endpoints
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self::with_settings(http, Settings::default())
    }

    /// Create an aggregator with explicit endpoint settings
    pub fn with_settings(http: Arc<dyn HttpClient>, settings: Settings) -> Self {
        Self {
            epic: EpicProvider::new(Arc::clone(&http), &settings),
            steam: SteamProvider::new(Arc::clone(&http), &settings),
            amazon: AmazonProvider::new(),
            gog: GogProvider::new(http, &settings),
            ubisoft: UbisoftProvider::new(),
        }
    }

    /// Fetch current free game promotions across all storefronts
    ///
    /// Requires a non-empty region code; only the Epic adapter consumes it.
    /// All five adapters are polled concurrently and the first error fails
    /// the whole call, discarding any results that already arrived. On
    /// success the combined list keeps a fixed order: Epic, Steam, Amazon,
    /// GOG, Ubisoft, with each adapter's own ordering preserved inside its
    /// slice.
    pub async fn get_free_games(&self, region: &str) -> Result<Vec<FreeGame>> {
        if region.is_empty() {
            return Err(FreeGamesError::MissingRegion);
        }

        tracing::debug!("Fetching free game promotions for region '{}'", region);

        let (epic, steam, amazon, gog, ubisoft) = tokio::try_join!(
            self.epic.fetch(region),
            self.steam.fetch(),
            self.amazon.fetch(),
            self.gog.fetch(),
            self.ubisoft.fetch(),
        )?;

        tracing::debug!(
            "Promotions found: epic={} steam={} amazon={} gog={} ubisoft={}",
            epic.len(),
            steam.len(),
            amazon.len(),
            gog.len(),
            ubisoft.len()
        );

        let mut games = epic;
        games.extend(steam);
        games.extend(amazon);
        games.extend(gog);
        games.extend(ubisoft);

        Ok(games)
    }

    /// Current Epic Games Store promotions for `region`
    pub async fn get_epic_games(&self, region: &str) -> Result<Vec<FreeGame>> {
        self.epic.fetch(region).await
    }

    /// Current limited-time free Steam specials
    pub async fn get_steam_games(&self) -> Result<Vec<FreeGame>> {
        self.steam.fetch().await
    }

    /// Current Amazon Prime Gaming promotions (stubbed, always empty)
    pub async fn get_amazon_games(&self) -> Result<Vec<FreeGame>> {
        self.amazon.fetch().await
    }

    /// Current GOG giveaway promotions
    pub async fn get_gog_games(&self) -> Result<Vec<FreeGame>> {
        self.gog.fetch().await
    }

    /// Current Ubisoft Store promotions (stubbed, always empty)
    pub async fn get_ubisoft_games(&self) -> Result<Vec<FreeGame>> {
        self.ubisoft.fetch().await
    }
}
