//! Market Settlement
//!
//! ## Settlement Flow
//!
//! 1. Betting window closes
//! 2. Administrator calls `settle`
//! 3. The larger ledger wins (Up on a tie)
//! 4. The losing ledger's total is folded into the winner's
//! 5. The market is frozen for good

use anchor_lang::prelude::*;

use crate::events::MarketSettled;
use crate::state::Market;

/// Accounts for settlement
#[derive(Accounts)]
pub struct Settle<'info> {
    /// Market administrator
    pub admin: Signer<'info>,

    /// Market to settle
    #[account(mut)]
    pub market: Account<'info, Market>,
}

impl<'info> Settle<'info> {
    pub fn settle(&mut self) -> Result<()> {
        let clock = Clock::get()?;

        let settlement = self
            .market
            .settle(&self.admin.key(), clock.unix_timestamp)?;

        emit!(MarketSettled {
            market: self.market.key(),
            winning_side: settlement.winning_side,
            folded_amount: settlement.folded_amount,
            combined_total: settlement.combined_total,
            timestamp: clock.unix_timestamp,
        });

        msg!(
            "Market {} settled: {:?} wins, {} folded",
            self.market.index,
            settlement.winning_side,
            settlement.folded_amount
        );

        Ok(())
    }
}
