//! Registry Initialization
//!
//! Sets up the singleton registry that creates markets and holds the shared
//! betting window. Called once during deployment.

use anchor_lang::prelude::*;

use crate::events::BettingWindowUpdated;
use crate::state::Config;

/// Accounts required for registry initialization
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Registry administrator (becomes the admin)
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Global registry account (created)
    #[account(
        init,
        payer = admin,
        space = 8 + Config::INIT_SPACE,
        seeds = [Config::SEED],
        bump,
    )]
    pub config: Account<'info, Config>,

    /// System program
    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    /// Initialize the registry configuration
    pub fn initialize(
        &mut self,
        betting_window_seconds: i64,
        bumps: &InitializeBumps,
    ) -> Result<()> {
        require!(betting_window_seconds > 0, RegistryError::InvalidWindow);

        self.config.set_inner(Config {
            admin: self.admin.key(),
            betting_window_seconds,
            market_count: 0,
            bump: bumps.config,
        });

        msg!("Registry initialized!");
        msg!("Admin: {}", self.admin.key());
        msg!("Betting window: {} s", betting_window_seconds);

        Ok(())
    }
}

/// Accounts for changing the shared betting window
#[derive(Accounts)]
pub struct UpdateBettingWindow<'info> {
    #[account(
        constraint = admin.key() == config.admin @ RegistryError::Unauthorized
    )]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,
}

impl<'info> UpdateBettingWindow<'info> {
    /// Applies to markets created from now on; existing markets keep theirs
    pub fn update_betting_window(&mut self, betting_window_seconds: i64) -> Result<()> {
        require!(betting_window_seconds > 0, RegistryError::InvalidWindow);

        let old_window_seconds = self.config.betting_window_seconds;
        self.config.betting_window_seconds = betting_window_seconds;

        emit!(BettingWindowUpdated {
            old_window_seconds,
            new_window_seconds: betting_window_seconds,
        });

        msg!(
            "Betting window changed: {} s -> {} s",
            old_window_seconds,
            betting_window_seconds
        );

        Ok(())
    }
}

#[error_code(offset = 6100)]
pub enum RegistryError {
    #[msg("Only the registry admin can change the betting window")]
    Unauthorized,
    #[msg("Betting window must be positive")]
    InvalidWindow,
}
