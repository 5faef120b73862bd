//! Command implementations

pub mod debug;
pub mod mons;
pub mod scale;
pub mod status;

pub use debug::*;
pub use mons::*;
pub use scale::*;
pub use status::*;
