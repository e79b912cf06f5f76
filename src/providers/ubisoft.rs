use crate::core::FreeGame;
use crate::error::Result;

/// Ubisoft Store adapter (stub)
///
/// Giveaways on the Ubisoft Store are rendered server-side without a JSON
/// feed to read. Until page scraping is implemented this adapter reports no
/// promotions.
#[derive(Debug, Default)]
pub struct UbisoftProvider;

impl UbisoftProvider {
    pub fn new() -> Self {
        Self
    }

    /// Always returns an empty list
    pub async fn fetch(&self) -> Result<Vec<FreeGame>> {
        Ok(Vec::new())
    }
}
