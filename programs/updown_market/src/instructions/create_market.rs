//! Permissionless Market Creation
//!
//! Anyone can open a market by naming it and choosing its administrator.
//! Betting closes `config.betting_window_seconds` after creation.

use anchor_lang::prelude::*;

use crate::errors::MarketError;
use crate::events::MarketCreated;
use crate::state::{Config, Market};

/// Accounts for creating a new market
#[derive(Accounts)]
pub struct CreateMarket<'info> {
    /// Market creator (pays for the account)
    #[account(mut)]
    pub creator: Signer<'info>,

    /// Global registry
    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    /// The new market account
    #[account(
        init,
        payer = creator,
        space = 8 + Market::INIT_SPACE,
        seeds = [Market::SEED, config.key().as_ref(), config.market_count.to_le_bytes().as_ref()],
        bump,
    )]
    pub market: Account<'info, Market>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateMarket<'info> {
    pub fn create_market(
        &mut self,
        name: String,
        symbol: String,
        admin: Pubkey,
        bumps: &CreateMarketBumps,
    ) -> Result<()> {
        let clock = Clock::get()?;
        let index = self.config.market_count;

        self.market.set_inner(Market::new(
            index,
            admin,
            name,
            symbol,
            self.config.betting_window_seconds,
            clock.unix_timestamp,
            bumps.market,
        )?);

        self.config.market_count = index
            .checked_add(1)
            .ok_or(MarketError::ArithmeticOverflow)?;

        emit!(MarketCreated {
            market: self.market.key(),
            index,
            admin,
            name: self.market.name.clone(),
            symbol: self.market.symbol.clone(),
            betting_end_timestamp: self.market.betting_end_timestamp,
        });

        msg!(
            "Market {} created, betting ends at {}",
            index,
            self.market.betting_end_timestamp
        );

        Ok(())
    }
}
