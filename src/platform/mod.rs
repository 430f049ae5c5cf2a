//! Platform abstraction layer
//!
//! Browser-only pieces that drive the game:
//! - Fixed-delay tick scheduling with a stop handle

#[cfg(target_arch = "wasm32")]
pub mod ticker;

#[cfg(target_arch = "wasm32")]
pub use ticker::Ticker;
