pub mod amazon;
pub mod epic;
pub mod gog;
pub mod steam;
pub mod ubisoft;

pub use amazon::AmazonProvider;
pub use epic::EpicProvider;
pub use gog::GogProvider;
pub use steam::SteamProvider;
pub use ubisoft::UbisoftProvider;
