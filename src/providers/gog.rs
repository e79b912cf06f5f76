use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::core::{FreeGame, GameId, Platform};
use crate::error::{FreeGamesError, Result};
use crate::http::HttpClient;
use crate::settings::Settings;

/// GOG catalog adapter
///
/// The filtered catalog endpoint already returns only current free
/// promotions, so every product maps straight through without a predicate.
pub struct GogProvider {
    http: Arc<dyn HttpClient>,
    url: String,
}

#[derive(Debug, Default, Deserialize)]
struct GogCatalog {
    #[serde(default)]
    products: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct GogProduct {
    #[serde(default)]
    id: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    slug: String,
}

impl GogProvider {
    /// Create a GOG provider reading its catalog URL from `settings`
    pub fn new(http: Arc<dyn HttpClient>, settings: &Settings) -> Self {
        Self {
            http,
            url: settings.gog_promotions_url.clone(),
        }
    }

    /// Fetch current GOG giveaway promotions
    pub async fn fetch(&self) -> Result<Vec<FreeGame>> {
        let payload = self.http.get_json(&self.url).await?;

        let catalog: GogCatalog =
            serde_json::from_value(payload).map_err(|e| FreeGamesError::Provider {
                provider: Platform::Gog.as_str().to_string(),
                message: format!("unexpected catalog payload: {e}"),
            })?;

        let mut games = Vec::new();

        for product in catalog.products {
            let product: GogProduct = match serde_json::from_value(product) {
                Ok(product) => product,
                Err(e) => {
                    tracing::warn!("Skipping malformed GOG product: {}", e);
                    continue;
                }
            };

            games.push(FreeGame {
                id: GameId::from(product.id),
                title: product.title,
                description: "Free on GOG (limited-time)".to_string(),
                main_image: product.image,
                url: format!("https://www.gog.com/en/game/{}", product.slug),
                platform: Platform::Gog,
                start_date: None,
                end_date: None,
            });
        }

        Ok(games)
    }
}
