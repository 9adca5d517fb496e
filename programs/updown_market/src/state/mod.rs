//! State structures for the up/down betting market

pub mod config;
pub mod market;
pub mod position;

pub use config::*;
pub use market::*;
pub use position::*;
