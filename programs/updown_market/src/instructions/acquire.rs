//! Position Acquisition
//!
//! Buys Up or Down units at the shared curve price. The whole `payment` is
//! moved into the market account; it must cover the quoted cost.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::events::PositionAcquired;
use crate::state::{Market, Position, Side};

/// Accounts for acquiring units on either side
#[derive(Accounts)]
pub struct Acquire<'info> {
    /// Buyer
    #[account(mut)]
    pub participant: Signer<'info>,

    /// Market being bet on
    #[account(mut)]
    pub market: Account<'info, Market>,

    /// Buyer's balances on this market
    #[account(
        init_if_needed,
        payer = participant,
        space = 8 + Position::INIT_SPACE,
        seeds = [Position::SEED, market.key().as_ref(), participant.key().as_ref()],
        bump,
    )]
    pub position: Account<'info, Position>,

    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> Acquire<'info> {
    /// Buy `amount` units on `side`
    ///
    /// # Returns
    /// * Quoted cost of the units
    pub fn acquire(
        &mut self,
        side: Side,
        amount: u64,
        payment: u64,
        bumps: &AcquireBumps,
    ) -> Result<u64> {
        let clock = Clock::get()?;

        if self.position.is_uninitialized() {
            self.position.set_inner(Position::new(
                self.market.key(),
                self.participant.key(),
                bumps.position,
            ));
        }

        let cost = self
            .market
            .acquire(&mut self.position, side, amount, payment, clock.unix_timestamp)?;

        transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.participant.to_account_info(),
                    to: self.market.to_account_info(),
                },
            ),
            payment,
        )?;

        emit!(PositionAcquired {
            market: self.market.key(),
            side,
            participant: self.participant.key(),
            amount,
            cost,
            paid: payment,
        });

        msg!(
            "{:?} +{} for {} lamports (paid {})",
            side,
            amount,
            cost,
            payment
        );

        Ok(cost)
    }
}
