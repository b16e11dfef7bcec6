pub mod bank;
pub mod constants;
pub mod preview;
pub mod quiz;
pub mod rank;
pub mod scene;

pub use bank::*;
pub use preview::*;
pub use quiz::*;
pub use rank::*;
pub use scene::*;
