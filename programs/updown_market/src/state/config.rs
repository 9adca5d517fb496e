//! Market Registry Configuration
//!
//! Singleton account that hands out market indices and holds the betting
//! window applied to every market created after it is set.

use anchor_lang::prelude::*;

/// Default betting window: 7 days
pub const DEFAULT_BETTING_WINDOW_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Global registry account (singleton PDA)
///
/// Seeds: ["config"]
#[account]
#[derive(InitSpace)]
pub struct Config {
    /// Registry administrator, allowed to change the betting window
    pub admin: Pubkey,

    /// Betting window length applied to newly created markets
    pub betting_window_seconds: i64,

    /// Total markets created (used as incrementing index)
    pub market_count: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl Config {
    pub const SEED: &'static [u8] = b"config";
}
