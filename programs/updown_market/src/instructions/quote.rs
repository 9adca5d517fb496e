//! Read-only price quotes, returned as instruction return data so clients
//! can `view` them without building a transaction that moves funds.

use anchor_lang::prelude::*;

use crate::state::Market;

#[derive(Accounts)]
pub struct Quote<'info> {
    pub market: Account<'info, Market>,
}

impl<'info> Quote<'info> {
    pub fn quote_up_cost(&self, amount: u64) -> Result<u64> {
        self.market.quote_up_cost(amount)
    }

    pub fn quote_down_cost(&self, amount: u64) -> Result<u64> {
        self.market.quote_down_cost(amount)
    }
}
