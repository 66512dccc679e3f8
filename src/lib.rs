pub mod format;
pub mod metrics;
pub mod players;
pub mod price;
pub mod registry;
pub mod state;

pub use players::{NewsItem, NewsType, PlayerData, SlabStatus};
pub use registry::{PlayerRegistry, registry};
