use serde::{Deserialize, Serialize};

use crate::core::Platform;

/// Provider-native identifier
///
/// Steam and GOG use numeric ids, Epic uses opaque strings; the untagged
/// representation keeps each provider's wire shape. Uniqueness is only
/// guaranteed within a single provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GameId {
    Number(u64),
    Text(String),
}

impl From<u64> for GameId {
    fn from(id: u64) -> Self {
        GameId::Number(id)
    }
}

impl From<String> for GameId {
    fn from(id: String) -> Self {
        GameId::Text(id)
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        GameId::Text(id.to_string())
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameId::Number(n) => write!(f, "{}", n),
            GameId::Text(s) => f.write_str(s),
        }
    }
}

/// A limited-time free promotion normalized from one storefront
///
/// Constructed fresh on every aggregate call and never mutated afterwards.
/// Records from different providers are never merged or deduplicated, even
/// when they refer to the same underlying game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeGame {
    /// Provider-native identifier
    pub id: GameId,

    /// Game title
    pub title: String,

    /// Description; providers without a real one supply a fixed placeholder
    pub description: String,

    /// Main image URL (empty string when the provider has none)
    pub main_image: String,

    /// Canonical storefront page URL
    pub url: String,

    /// Storefront of origin
    pub platform: Platform,

    /// Promotion start (ISO-8601), when the provider reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// Promotion end (ISO-8601), when the provider reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}
