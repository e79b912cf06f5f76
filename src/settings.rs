use serde::{Deserialize, Serialize};

const EPIC_PROMOTIONS_URL: &str = "https://store-site-backend-static.ak.epicgames.com/freeGamesPromotions?locale=en-US&country={region}&allowCountries={region}";
const STEAM_SPECIALS_URL: &str = "https://store.steampowered.com/api/featuredcategories";
const GOG_PROMOTIONS_URL: &str = "https://embed.gog.com/games/ajax/filtered?mediaType=game&price=free";

/// Upstream endpoint configuration
///
/// Supplied by the caller, read-only afterwards. Defaults point at the
/// production storefront APIs. Only the Epic endpoint is parameterized by
/// region; every `{region}` in its template is expanded per call by the
/// Epic adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Epic catalog/promotions URL template (contains `{region}`)
    pub epic_promotions_url: String,

    /// Steam featured-specials URL
    pub steam_specials_url: String,

    /// GOG promotions/products URL
    pub gog_promotions_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            epic_promotions_url: EPIC_PROMOTIONS_URL.to_string(),
            steam_specials_url: STEAM_SPECIALS_URL.to_string(),
            gog_promotions_url: GOG_PROMOTIONS_URL.to_string(),
        }
    }
}
