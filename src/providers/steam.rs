use std::sync::Arc;

use chrono::SecondsFormat;
use serde::Deserialize;
use serde_json::Value;

use crate::core::{FreeGame, GameId, Platform};
use crate::error::{FreeGamesError, Result};
use crate::http::HttpClient;
use crate::settings::Settings;

/// Steam storefront adapter
///
/// Reads the featured categories feed and keeps specials that are free for
/// a limited time only: a 100% discount on a previously paid title, with an
/// expiration attached.
pub struct SteamProvider {
    http: Arc<dyn HttpClient>,
    url: String,
}

#[derive(Debug, Default, Deserialize)]
struct FeaturedCategories {
    #[serde(default)]
    specials: SpecialsCategory,
}

#[derive(Debug, Default, Deserialize)]
struct SpecialsCategory {
    #[serde(default)]
    items: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct SteamSpecial {
    #[serde(default)]
    id: u64,
    #[serde(rename = "type", default)]
    item_type: i64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    discounted: bool,
    #[serde(default)]
    discount_percent: i64,
    #[serde(default)]
    original_price: i64,
    #[serde(default)]
    final_price: i64,
    #[serde(default)]
    discount_expiration: Option<i64>,
    #[serde(default)]
    header_image: String,
    #[serde(default)]
    small_capsule_image: String,
}

impl SteamProvider {
    /// Create a Steam provider reading its feed URL from `settings`
    pub fn new(http: Arc<dyn HttpClient>, settings: &Settings) -> Self {
        Self {
            http,
            url: settings.steam_specials_url.clone(),
        }
    }

    /// Fetch current limited-time free Steam specials
    pub async fn fetch(&self) -> Result<Vec<FreeGame>> {
        let payload = self.http.get_json(&self.url).await?;

        let categories: FeaturedCategories =
            serde_json::from_value(payload).map_err(|e| FreeGamesError::Provider {
                provider: Platform::Steam.as_str().to_string(),
                message: format!("unexpected featured categories payload: {e}"),
            })?;

        let mut games = Vec::new();

        for item in categories.specials.items {
            let item: SteamSpecial = match serde_json::from_value(item) {
                Ok(item) => item,
                Err(e) => {
                    tracing::warn!("Skipping malformed Steam special: {}", e);
                    continue;
                }
            };

            if !is_limited_free(&item) {
                continue;
            }

            // is_limited_free guaranteed the expiration is present; a value
            // outside chrono's range still drops the item
            let Some(end_date) = item.discount_expiration.and_then(expiration_to_iso) else {
                continue;
            };

            let main_image = if !item.header_image.is_empty() {
                item.header_image
            } else {
                item.small_capsule_image
            };

            games.push(FreeGame {
                id: GameId::from(item.id),
                title: item.name,
                description: "Limited-time free on Steam".to_string(),
                main_image,
                url: format!("https://store.steampowered.com/app/{}", item.id),
                platform: Platform::Steam,
                start_date: None,
                end_date: Some(end_date),
            });
        }

        Ok(games)
    }
}

/// A special counts as limited-time free when it is a game entry at a 100%
/// discount, was not free to begin with, and the offer has an expiry
fn is_limited_free(item: &SteamSpecial) -> bool {
    item.item_type == 0
        && item.discounted
        && item.discount_percent == 100
        && item.original_price > 0
        && item.final_price == 0
        && item.discount_expiration.is_some()
}

/// Unix epoch seconds to an RFC 3339 UTC timestamp like `2025-01-01T00:00:00Z`
fn expiration_to_iso(epoch: i64) -> Option<String> {
    chrono::DateTime::from_timestamp(epoch, 0)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
}
