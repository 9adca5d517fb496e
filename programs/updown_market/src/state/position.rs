use anchor_lang::prelude::*;

use super::Side;

/// A participant's balances on both ledgers of one market
///
/// Seeds: ["position", market, owner]
#[account]
#[derive(InitSpace, Debug, Default)]
pub struct Position {
    pub market: Pubkey,
    pub owner: Pubkey,
    pub up_balance: u64,
    pub down_balance: u64,
    pub bump: u8,
}

impl Position {
    pub const SEED: &'static [u8] = b"position";

    pub fn new(market: Pubkey, owner: Pubkey, bump: u8) -> Self {
        Self {
            market,
            owner,
            up_balance: 0,
            down_balance: 0,
            bump,
        }
    }

    pub fn balance(&self, side: Side) -> u64 {
        match side {
            Side::Up => self.up_balance,
            Side::Down => self.down_balance,
        }
    }

    pub(crate) fn balance_mut(&mut self, side: Side) -> &mut u64 {
        match side {
            Side::Up => &mut self.up_balance,
            Side::Down => &mut self.down_balance,
        }
    }

    /// Whether this account was just created by `init_if_needed`
    pub fn is_uninitialized(&self) -> bool {
        self.market == Pubkey::default()
    }
}
