pub mod free_game;
pub mod platform;

pub use free_game::{FreeGame, GameId};
pub use platform::Platform;
