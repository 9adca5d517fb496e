//! Instruction handlers for the up/down market program
//!
//! - `initialize` - Set up the market registry (once)
//! - `create_market` - Open a new market (permissionless)
//! - `acquire` - Buy Up or Down units while betting is open
//! - `settle` - Fold the losing side into the winner (market admin only)
//! - `admin` - Pause, unpause, withdraw (market admin only)
//! - `quote` - Read-only price quotes

pub mod initialize;
pub mod create_market;
pub mod acquire;
pub mod settle;
pub mod admin;
pub mod quote;

pub use initialize::*;
pub use create_market::*;
pub use acquire::*;
pub use settle::*;
pub use admin::*;
pub use quote::*;
