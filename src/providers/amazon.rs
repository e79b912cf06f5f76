use crate::core::FreeGame;
use crate::error::Result;

/// Amazon Prime Gaming adapter (stub)
///
/// Prime Gaming has no public promotions API; the claimable-games list is
/// embedded in a data blob on the storefront page. Until that scraping is
/// implemented this adapter reports no promotions.
#[derive(Debug, Default)]
pub struct AmazonProvider;

impl AmazonProvider {
    pub fn new() -> Self {
        Self
    }

    /// Always returns an empty list
    pub async fn fetch(&self) -> Result<Vec<FreeGame>> {
        Ok(Vec::new())
    }
}
