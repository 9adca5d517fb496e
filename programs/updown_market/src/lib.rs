//! # Up/Down: Two-Sided Bonding-Curve Betting Markets
//!
//! Participants take one of two opposing positions, **Up** or **Down**, on a
//! shared price curve during a fixed betting window.
//!
//! ## How it works
//! - Both sides are priced by one bonding curve over the combined issued
//!   total, so the next unit costs the same on either side.
//! - When the window closes the market administrator settles it once: the
//!   larger side wins and absorbs the losing side's total.
//! - The administrator can pause acquisitions and withdraw collected lamports.
//!

use anchor_lang::prelude::*;

pub mod amm;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

pub use amm::*;
pub use instructions::*;
pub use state::Side;

// Replace with your deployed program ID
declare_id!("SLXCJfKxMBFoKzeXihgDnAFYdrdmjoL9ThSwbhGiN5s");

/// Main Up/Down program
#[program]
pub mod updown_market {
    use super::*;

    /// Initialize the market registry
    pub fn initialize(ctx: Context<Initialize>, betting_window_seconds: i64) -> Result<()> {
        ctx.accounts.initialize(betting_window_seconds, &ctx.bumps)
    }

    /// Change the betting window for markets created from now on (registry admin only)
    pub fn update_betting_window(
        ctx: Context<UpdateBettingWindow>,
        betting_window_seconds: i64,
    ) -> Result<()> {
        ctx.accounts.update_betting_window(betting_window_seconds)
    }

    /// Create a market administered by `admin`
    pub fn create_market(
        ctx: Context<CreateMarket>,
        name: String,
        symbol: String,
        admin: Pubkey,
    ) -> Result<()> {
        ctx.accounts.create_market(name, symbol, admin, &ctx.bumps)
    }

    /// Buy Up units, paying `payment` lamports
    pub fn acquire_up(ctx: Context<Acquire>, amount: u64, payment: u64) -> Result<u64> {
        ctx.accounts.acquire(Side::Up, amount, payment, &ctx.bumps)
    }

    /// Buy Down units, paying `payment` lamports
    pub fn acquire_down(ctx: Context<Acquire>, amount: u64, payment: u64) -> Result<u64> {
        ctx.accounts.acquire(Side::Down, amount, payment, &ctx.bumps)
    }

    /// Settle the market after the betting window (market admin only)
    pub fn settle(ctx: Context<Settle>) -> Result<()> {
        ctx.accounts.settle()
    }

    /// Suspend acquisitions (market admin only)
    pub fn pause(ctx: Context<SetPaused>) -> Result<()> {
        ctx.accounts.pause()
    }

    /// Resume acquisitions (market admin only)
    pub fn unpause(ctx: Context<SetPaused>) -> Result<()> {
        ctx.accounts.unpause()
    }

    /// Withdraw collected lamports; `None` withdraws everything (market admin only)
    pub fn withdraw(ctx: Context<Withdraw>, amount: Option<u64>) -> Result<u64> {
        ctx.accounts.withdraw(amount)
    }

    /// Cost of `amount` Up units at the current combined total
    pub fn quote_up_cost(ctx: Context<Quote>, amount: u64) -> Result<u64> {
        ctx.accounts.quote_up_cost(amount)
    }

    /// Cost of `amount` Down units at the current combined total
    pub fn quote_down_cost(ctx: Context<Quote>, amount: u64) -> Result<u64> {
        ctx.accounts.quote_down_cost(amount)
    }
}
