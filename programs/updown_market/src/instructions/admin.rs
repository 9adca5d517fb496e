//! Administrator Controls
//!
//! - `pause` / `unpause` - gate acquisitions; settlement and withdrawal ignore it
//! - `withdraw` - move collected lamports to the administrator

use anchor_lang::prelude::*;

use crate::events::{FundsWithdrawn, MarketPaused, MarketUnpaused};
use crate::state::Market;

/// Accounts for pausing and unpausing
#[derive(Accounts)]
pub struct SetPaused<'info> {
    pub admin: Signer<'info>,

    #[account(mut)]
    pub market: Account<'info, Market>,
}

impl<'info> SetPaused<'info> {
    pub fn pause(&mut self) -> Result<()> {
        self.market.pause(&self.admin.key())?;

        emit!(MarketPaused {
            market: self.market.key(),
        });
        msg!("Market {} paused", self.market.index);

        Ok(())
    }

    pub fn unpause(&mut self) -> Result<()> {
        self.market.unpause(&self.admin.key())?;

        emit!(MarketUnpaused {
            market: self.market.key(),
        });
        msg!("Market {} unpaused", self.market.index);

        Ok(())
    }
}

/// Accounts for withdrawing collected funds
#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(mut)]
    pub market: Account<'info, Market>,
}

impl<'info> Withdraw<'info> {
    /// Withdraw `amount` lamports, or everything collected when `None`
    pub fn withdraw(&mut self, amount: Option<u64>) -> Result<u64> {
        let amount = self.market.withdraw(&self.admin.key(), amount)?;

        // Rent stays behind: collected_funds never includes it
        **self.market.to_account_info().try_borrow_mut_lamports()? -= amount;
        **self.admin.to_account_info().try_borrow_mut_lamports()? += amount;

        emit!(FundsWithdrawn {
            market: self.market.key(),
            recipient: self.admin.key(),
            amount,
        });
        msg!("Withdrew {} lamports from market {}", amount, self.market.index);

        Ok(amount)
    }
}
