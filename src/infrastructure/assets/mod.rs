pub mod resolver;
pub mod slot;

pub use resolver::{bare_path, AssetResolver};
pub use slot::{AssetSlot, AssetState, Ticket};
