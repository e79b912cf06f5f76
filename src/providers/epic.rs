use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::core::{FreeGame, GameId, Platform};
use crate::error::{FreeGamesError, Result};
use crate::http::HttpClient;
use crate::settings::Settings;

/// Epic Games Store adapter
///
/// Fetches the region's promotions catalog and keeps base games that carry
/// a promotional offer. The first offer group's first entry is taken as the
/// authoritative promotion window.
pub struct EpicProvider {
    http: Arc<dyn HttpClient>,
    url_template: String,
}

// Upstream catalog shapes. Every level defaults so merely-missing nesting
// collapses to an empty element list; only a wrong-typed top level errors.

#[derive(Debug, Default, Deserialize)]
struct EpicResponse {
    #[serde(default)]
    data: EpicData,
}

#[derive(Debug, Default, Deserialize)]
struct EpicData {
    #[serde(rename = "Catalog", default)]
    catalog: EpicCatalog,
}

#[derive(Debug, Default, Deserialize)]
struct EpicCatalog {
    #[serde(rename = "searchStore", default)]
    search_store: EpicSearchStore,
}

#[derive(Debug, Default, Deserialize)]
struct EpicSearchStore {
    #[serde(default)]
    elements: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EpicElement {
    #[serde(default)]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    offer_type: String,
    #[serde(default)]
    key_images: Vec<EpicKeyImage>,
    #[serde(default)]
    url_slug: String,
    #[serde(default)]
    promotions: Option<EpicPromotions>,
}

#[derive(Debug, Default, Deserialize)]
struct EpicKeyImage {
    #[serde(default)]
    url: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EpicPromotions {
    #[serde(default)]
    promotional_offers: Vec<EpicOfferGroup>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EpicOfferGroup {
    #[serde(default)]
    promotional_offers: Vec<EpicOfferWindow>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EpicOfferWindow {
    #[serde(default)]
    start_date: Option<String>,
    #[serde(default)]
    end_date: Option<String>,
}

impl EpicProvider {
    /// Create an Epic provider reading its URL template from `settings`
    pub fn new(http: Arc<dyn HttpClient>, settings: &Settings) -> Self {
        Self {
            http,
            url_template: settings.epic_promotions_url.clone(),
        }
    }

    /// Fetch current Epic promotions for `region`
    pub async fn fetch(&self, region: &str) -> Result<Vec<FreeGame>> {
        let url = self
            .url_template
            .replace("{region}", &urlencoding::encode(region));
        let payload = self.http.get_json(&url).await?;

        let response: EpicResponse =
            serde_json::from_value(payload).map_err(|e| FreeGamesError::Provider {
                provider: Platform::EpicGames.as_str().to_string(),
                message: format!("unexpected catalog payload: {e}"),
            })?;

        let mut games = Vec::new();

        for element in response.data.catalog.search_store.elements {
            let element: EpicElement = match serde_json::from_value(element) {
                Ok(element) => element,
                Err(e) => {
                    tracing::warn!("Skipping malformed Epic catalog element: {}", e);
                    continue;
                }
            };

            if element.offer_type != "BASE_GAME" {
                continue;
            }

            let Some(window) = first_offer_window(&element) else {
                continue;
            };
            let start_date = window.start_date.clone();
            let end_date = window.end_date.clone();

            games.push(FreeGame {
                id: GameId::from(element.id),
                title: element.title,
                description: element.description,
                main_image: element
                    .key_images
                    .first()
                    .map(|image| image.url.clone())
                    .unwrap_or_default(),
                url: format!("https://store.epicgames.com/p/{}", element.url_slug),
                platform: Platform::EpicGames,
                start_date,
                end_date,
            });
        }

        Ok(games)
    }
}

/// First offer group's first entry, or None when the element has no current
/// promotion
fn first_offer_window(element: &EpicElement) -> Option<&EpicOfferWindow> {
    element
        .promotions
        .as_ref()?
        .promotional_offers
        .first()?
        .promotional_offers
        .first()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::mock::MockHttp;
    use serde_json::json;

    fn test_settings() -> Settings {
        Settings {
            epic_promotions_url: "https://epic.test/promotions?country={region}".to_string(),
            ..Default::default()
        }
    }

    fn promoted_element(title: &str) -> Value {
        json!({
            "id": "abc123",
            "title": title,
            "description": "A promoted base game",
            "offerType": "BASE_GAME",
            "keyImages": [
                {"url": "https://cdn.epic.test/wide.jpg"},
                {"url": "https://cdn.epic.test/tall.jpg"}
            ],
            "urlSlug": "promoted-game",
            "promotions": {
                "promotionalOffers": [
                    {
                        "promotionalOffers": [
                            {
                                "startDate": "2025-08-21T15:00:00.000Z",
                                "endDate": "2025-08-28T15:00:00.000Z"
                            }
                        ]
                    }
                ]
            }
        })
    }

    fn catalog(elements: Vec<Value>) -> Value {
        json!({
            "data": {
                "Catalog": {
                    "searchStore": {
                        "elements": elements
                    }
                }
            }
        })
    }

    #[tokio::test]
    async fn test_base_game_with_promotion_is_mapped() {
        let http = Arc::new(
            MockHttp::new().route("https://epic.test", catalog(vec![promoted_element("Giveaway")])),
        );
        let provider = EpicProvider::new(http, &test_settings());

        let games = provider.fetch("US").await.unwrap();

        assert_eq!(games.len(), 1);
        let game = &games[0];
        assert_eq!(game.id, GameId::from("abc123"));
        assert_eq!(game.title, "Giveaway");
        assert_eq!(game.platform, Platform::EpicGames);
        assert_eq!(game.main_image, "https://cdn.epic.test/wide.jpg");
        assert_eq!(game.url, "https://store.epicgames.com/p/promoted-game");
        assert_eq!(game.start_date.as_deref(), Some("2025-08-21T15:00:00.000Z"));
        assert_eq!(game.end_date.as_deref(), Some("2025-08-28T15:00:00.000Z"));
    }

    #[tokio::test]
    async fn test_fetch_issues_one_call_with_region() {
        let http = Arc::new(MockHttp::new().route("https://epic.test", catalog(vec![])));
        let provider = EpicProvider::new(Arc::clone(&http) as Arc<dyn HttpClient>, &test_settings());

        provider.fetch("DE").await.unwrap();

        let requests = http.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0], "https://epic.test/promotions?country=DE");
    }

    #[tokio::test]
    async fn test_addon_is_excluded_even_with_promotions() {
        let mut addon = promoted_element("Some DLC");
        addon["offerType"] = json!("ADDON");

        let http = Arc::new(MockHttp::new().route("https://epic.test", catalog(vec![addon])));
        let provider = EpicProvider::new(http, &test_settings());

        assert!(provider.fetch("US").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_offer_groups_are_excluded() {
        let mut no_groups = promoted_element("No groups");
        no_groups["promotions"] = json!({"promotionalOffers": []});

        let mut empty_first_group = promoted_element("Empty first group");
        empty_first_group["promotions"] = json!({"promotionalOffers": [{"promotionalOffers": []}]});

        let mut null_promotions = promoted_element("Null promotions");
        null_promotions["promotions"] = json!(null);

        let http = Arc::new(MockHttp::new().route(
            "https://epic.test",
            catalog(vec![no_groups, empty_first_group, null_promotions]),
        ));
        let provider = EpicProvider::new(http, &test_settings());

        assert!(provider.fetch("US").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_nested_catalog_yields_empty() {
        let http = Arc::new(MockHttp::new().route("https://epic.test", json!({"data": {}})));
        let provider = EpicProvider::new(http, &test_settings());

        assert!(provider.fetch("US").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_wrong_typed_top_level_is_provider_error() {
        let http = Arc::new(MockHttp::new().route("https://epic.test", json!(["not", "a", "map"])));
        let provider = EpicProvider::new(http, &test_settings());

        let err = provider.fetch("US").await.unwrap_err();
        match err {
            FreeGamesError::Provider { provider, .. } => assert_eq!(provider, "epicgames"),
            other => panic!("expected Provider error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_element_is_skipped_not_fatal() {
        let http = Arc::new(MockHttp::new().route(
            "https://epic.test",
            catalog(vec![json!(42), promoted_element("Survivor")]),
        ));
        let provider = EpicProvider::new(http, &test_settings());

        let games = provider.fetch("US").await.unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].title, "Survivor");
    }

    #[tokio::test]
    async fn test_missing_key_images_map_to_empty_string() {
        let mut element = promoted_element("Imageless");
        element["keyImages"] = json!([]);

        let http = Arc::new(MockHttp::new().route("https://epic.test", catalog(vec![element])));
        let provider = EpicProvider::new(http, &test_settings());

        let games = provider.fetch("US").await.unwrap();
        assert_eq!(games[0].main_image, "");
    }
}
