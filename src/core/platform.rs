use serde::{Deserialize, Serialize};

/// Storefront a record originates from
///
/// Fixed per adapter, never derived from upstream data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Epic Games Store
    EpicGames,
    /// Steam store
    Steam,
    /// Amazon Prime Gaming
    Amazon,
    /// Ubisoft Store
    Ubisoft,
    /// GOG.com
    Gog,
}

impl Platform {
    /// Wire name, also used as the provider label in logs and errors
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::EpicGames => "epicgames",
            Platform::Steam => "steam",
            Platform::Amazon => "amazon",
            Platform::Ubisoft => "ubisoft",
            Platform::Gog => "gog",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
