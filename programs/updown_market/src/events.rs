//! Notifications consumed by indexers and frontends

use anchor_lang::prelude::*;

use crate::state::Side;

#[event]
pub struct MarketCreated {
    pub market: Pubkey,
    pub index: u64,
    pub admin: Pubkey,
    pub name: String,
    pub symbol: String,
    pub betting_end_timestamp: i64,
}

#[event]
pub struct BettingWindowUpdated {
    pub old_window_seconds: i64,
    pub new_window_seconds: i64,
}

#[event]
pub struct PositionAcquired {
    pub market: Pubkey,
    pub side: Side,
    pub participant: Pubkey,
    pub amount: u64,
    /// Quoted cost of the units
    pub cost: u64,
    /// Lamports actually transferred, surplus included
    pub paid: u64,
}

#[event]
pub struct MarketSettled {
    pub market: Pubkey,
    pub winning_side: Side,
    pub folded_amount: u64,
    pub combined_total: u64,
    pub timestamp: i64,
}

#[event]
pub struct MarketPaused {
    pub market: Pubkey,
}

#[event]
pub struct MarketUnpaused {
    pub market: Pubkey,
}

#[event]
pub struct FundsWithdrawn {
    pub market: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
}
