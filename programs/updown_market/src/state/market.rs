//! Up/Down Market State
//!
//! One market holds two ledgers priced by one shared curve. Participants buy
//! Up or Down units while betting is open; once the window closes the
//! administrator settles the market, folding the smaller ledger into the
//! larger one.
//!
//! ## Lifecycle
//!
//! ```text
//!   Open ──(now ≥ betting_end_timestamp)──▶ AwaitingSettlement ──(settle)──▶ Settled
//! ```
//!
//! Every method here takes the current unix time as an argument; only the
//! instruction handlers read the clock.

use anchor_lang::prelude::*;

use super::Position;
use crate::amm::LinearCurve;
use crate::errors::MarketError;

/// Keep in sync with the `max_len` attributes on [`Market`]
pub const MAX_NAME_LEN: usize = 32;
pub const MAX_SYMBOL_LEN: usize = 10;

/// Betting market account
///
/// Seeds: ["market", config, index.to_le_bytes()]
#[account]
#[derive(InitSpace, Debug)]
pub struct Market {
    /// Index assigned by the registry
    pub index: u64,

    /// Administrator allowed to settle, pause and withdraw
    pub admin: Pubkey,

    #[max_len(32)]
    pub name: String,

    #[max_len(10)]
    pub symbol: String,

    /// Unix timestamp when the market was created
    pub created_at: i64,

    /// Unix timestamp when betting closes
    pub betting_end_timestamp: i64,

    /// Up ledger aggregate
    pub up: Ledger,

    /// Down ledger aggregate
    pub down: Ledger,

    /// Set exactly once by a successful settlement
    pub settled: bool,

    /// Winning side (only valid after settlement)
    pub winning_side: Option<Side>,

    pub paused: bool,

    /// Lamports received from acquisitions and not yet withdrawn
    pub collected_funds: u64,

    /// PDA bump seed
    pub bump: u8,
}

/// Aggregate of one side. Per-participant balances live in [`Position`].
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug, Default)]
pub struct Ledger {
    pub total_issued: u64,
}

/// Betting side
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug)]
pub enum Side {
    /// Mint side
    Up,
    /// Burn side
    Down,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Up => Side::Down,
            Side::Down => Side::Up,
        }
    }
}

/// Market phase, derived from the clock and the settled flag
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    /// Betting is open
    Open,
    /// Betting closed, waiting for the administrator to settle
    AwaitingSettlement,
    /// Terminal
    Settled,
}

/// Result of a successful settlement
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Settlement {
    pub winning_side: Side,
    /// Units moved from the losing ledger into the winning one
    pub folded_amount: u64,
    pub combined_total: u64,
}

impl Market {
    pub const SEED: &'static [u8] = b"market";

    pub fn new(
        index: u64,
        admin: Pubkey,
        name: String,
        symbol: String,
        betting_window_seconds: i64,
        now: i64,
        bump: u8,
    ) -> Result<Self> {
        require!(name.len() <= MAX_NAME_LEN, MarketError::NameTooLong);
        require!(symbol.len() <= MAX_SYMBOL_LEN, MarketError::SymbolTooLong);
        require!(betting_window_seconds > 0, MarketError::InvalidWindow);

        let betting_end_timestamp = now
            .checked_add(betting_window_seconds)
            .ok_or(MarketError::ArithmeticOverflow)?;

        Ok(Self {
            index,
            admin,
            name,
            symbol,
            created_at: now,
            betting_end_timestamp,
            up: Ledger::default(),
            down: Ledger::default(),
            settled: false,
            winning_side: None,
            paused: false,
            collected_funds: 0,
            bump,
        })
    }

    pub fn phase(&self, now: i64) -> Phase {
        if self.settled {
            Phase::Settled
        } else if now < self.betting_end_timestamp {
            Phase::Open
        } else {
            Phase::AwaitingSettlement
        }
    }

    pub fn ledger(&self, side: Side) -> &Ledger {
        match side {
            Side::Up => &self.up,
            Side::Down => &self.down,
        }
    }

    fn ledger_mut(&mut self, side: Side) -> &mut Ledger {
        match side {
            Side::Up => &mut self.up,
            Side::Down => &mut self.down,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.name
    }

    pub fn display_symbol(&self) -> &str {
        &self.symbol
    }

    pub fn up_total_supply(&self) -> u64 {
        self.up.total_issued
    }

    pub fn down_total_supply(&self) -> u64 {
        self.down.total_issued
    }

    pub fn combined_total_supply(&self) -> u64 {
        // acquire() rejects any purchase that would overflow this sum
        self.up.total_issued.saturating_add(self.down.total_issued)
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Cost to acquire `amount` units on `side`. Both sides read the same
    /// curve at the same combined total.
    pub fn quote_cost(&self, _side: Side, amount: u64) -> Result<u64> {
        LinearCurve::quote_cost(self.combined_total_supply(), amount)
    }

    pub fn quote_up_cost(&self, amount: u64) -> Result<u64> {
        self.quote_cost(Side::Up, amount)
    }

    pub fn quote_down_cost(&self, amount: u64) -> Result<u64> {
        self.quote_cost(Side::Down, amount)
    }

    pub fn ensure_admin(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.admin, MarketError::Unauthorized);
        Ok(())
    }

    /// Issue `amount` units on `side` to `position`, paid with `payment`
    /// lamports. Any surplus over the quoted cost is kept.
    ///
    /// # Returns
    /// * The quoted cost of the purchase
    pub fn acquire(
        &mut self,
        position: &mut Position,
        side: Side,
        amount: u64,
        payment: u64,
        now: i64,
    ) -> Result<u64> {
        require!(!self.paused, MarketError::Paused);
        require!(self.phase(now) == Phase::Open, MarketError::PhaseViolation);
        require!(amount > 0, MarketError::ZeroAmount);

        let cost = self.quote_cost(side, amount)?;
        require!(payment >= cost, MarketError::InsufficientPayment);

        // Compute everything before writing anything
        let _combined = self
            .combined_total_supply_checked()?
            .checked_add(amount)
            .ok_or(MarketError::ArithmeticOverflow)?;
        let new_total = self
            .ledger(side)
            .total_issued
            .checked_add(amount)
            .ok_or(MarketError::ArithmeticOverflow)?;
        let new_balance = position
            .balance(side)
            .checked_add(amount)
            .ok_or(MarketError::ArithmeticOverflow)?;
        let new_collected = self
            .collected_funds
            .checked_add(payment)
            .ok_or(MarketError::ArithmeticOverflow)?;

        self.ledger_mut(side).total_issued = new_total;
        *position.balance_mut(side) = new_balance;
        self.collected_funds = new_collected;

        Ok(cost)
    }

    /// Fold the losing ledger into the winning one. Up wins ties.
    ///
    /// Losing participants' [`Position`] balances are left as they were.
    pub fn settle(&mut self, caller: &Pubkey, now: i64) -> Result<Settlement> {
        self.ensure_admin(caller)?;

        match self.phase(now) {
            Phase::Settled => return err!(MarketError::AlreadySettled),
            Phase::Open => return err!(MarketError::PhaseViolation),
            Phase::AwaitingSettlement => {}
        }

        let winning_side = if self.up.total_issued >= self.down.total_issued {
            Side::Up
        } else {
            Side::Down
        };
        let losing_side = winning_side.opposite();

        let folded_amount = self.ledger(losing_side).total_issued;
        let new_winner_total = self
            .ledger(winning_side)
            .total_issued
            .checked_add(folded_amount)
            .ok_or(MarketError::ArithmeticOverflow)?;

        self.ledger_mut(winning_side).total_issued = new_winner_total;
        self.ledger_mut(losing_side).total_issued = 0;
        self.winning_side = Some(winning_side);
        self.settled = true;

        Ok(Settlement {
            winning_side,
            folded_amount,
            combined_total: new_winner_total,
        })
    }

    pub fn pause(&mut self, caller: &Pubkey) -> Result<()> {
        self.ensure_admin(caller)?;
        self.paused = true;
        Ok(())
    }

    pub fn unpause(&mut self, caller: &Pubkey) -> Result<()> {
        self.ensure_admin(caller)?;
        self.paused = false;
        Ok(())
    }

    /// Release collected funds. `None` releases everything.
    ///
    /// # Returns
    /// * Lamports to transfer to the administrator
    pub fn withdraw(&mut self, caller: &Pubkey, amount: Option<u64>) -> Result<u64> {
        self.ensure_admin(caller)?;

        let amount = amount.unwrap_or(self.collected_funds);
        self.collected_funds = self
            .collected_funds
            .checked_sub(amount)
            .ok_or(MarketError::InsufficientFunds)?;

        Ok(amount)
    }

    fn combined_total_supply_checked(&self) -> Result<u64> {
        Ok(self
            .up
            .total_issued
            .checked_add(self.down.total_issued)
            .ok_or(MarketError::ArithmeticOverflow)?)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DEFAULT_BETTING_WINDOW_SECONDS;

    const CREATED_AT: i64 = 1_700_000_000;
    const WINDOW: i64 = DEFAULT_BETTING_WINDOW_SECONDS;
    const DURING: i64 = CREATED_AT + 60;
    const AFTER: i64 = CREATED_AT + WINDOW + 1;

    struct Fixture {
        admin: Pubkey,
        market: Market,
        market_key: Pubkey,
    }

    fn fixture() -> Fixture {
        let admin = Pubkey::new_unique();
        let market = Market::new(
            0,
            admin,
            "BurningMeme".to_string(),
            "BMB".to_string(),
            WINDOW,
            CREATED_AT,
            255,
        )
        .unwrap();
        Fixture {
            admin,
            market,
            market_key: Pubkey::new_unique(),
        }
    }

    fn position(f: &Fixture) -> Position {
        Position::new(f.market_key, Pubkey::new_unique(), 254)
    }

    fn buy(market: &mut Market, position: &mut Position, side: Side, amount: u64, now: i64) -> u64 {
        let cost = market.quote_cost(side, amount).unwrap();
        market.acquire(position, side, amount, cost, now).unwrap()
    }

    fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: MarketError) {
        let expected: anchor_lang::error::Error = expected.into();
        assert_eq!(result.unwrap_err(), expected);
    }

    #[test]
    fn test_initial_values() {
        let f = fixture();
        assert_eq!(f.market.display_name(), "BurningMeme");
        assert_eq!(f.market.display_symbol(), "BMB");
        assert_eq!(f.market.combined_total_supply(), 0);
        assert_eq!(f.market.up_total_supply(), 0);
        assert_eq!(f.market.down_total_supply(), 0);
        assert_eq!(f.market.betting_end_timestamp, CREATED_AT + 7 * 86_400);
        assert!(!f.market.is_paused());
        assert_eq!(f.market.phase(CREATED_AT), Phase::Open);
    }

    #[test]
    fn test_new_rejects_bad_params() {
        let admin = Pubkey::new_unique();
        assert_error(
            Market::new(0, admin, "x".repeat(33), "S".into(), WINDOW, CREATED_AT, 0),
            MarketError::NameTooLong,
        );
        assert_error(
            Market::new(0, admin, "n".into(), "S".repeat(11), WINDOW, CREATED_AT, 0),
            MarketError::SymbolTooLong,
        );
        assert_error(
            Market::new(0, admin, "n".into(), "S".into(), 0, CREATED_AT, 0),
            MarketError::InvalidWindow,
        );
        assert_error(
            Market::new(0, admin, "n".into(), "S".into(), i64::MAX, CREATED_AT, 0),
            MarketError::ArithmeticOverflow,
        );
    }

    #[test]
    fn test_phase_transitions() {
        let mut f = fixture();
        let end = f.market.betting_end_timestamp;
        assert_eq!(f.market.phase(end - 1), Phase::Open);
        assert_eq!(f.market.phase(end), Phase::AwaitingSettlement);

        f.market.settle(&f.admin, end).unwrap();
        assert_eq!(f.market.phase(end), Phase::Settled);
        // No way back, whatever the clock says
        assert_eq!(f.market.phase(CREATED_AT), Phase::Settled);
    }

    #[test]
    fn test_acquire_up() {
        let mut f = fixture();
        let mut alice = position(&f);

        let quoted = f.market.quote_up_cost(10).unwrap();
        let cost = f.market.acquire(&mut alice, Side::Up, 10, quoted, DURING).unwrap();

        assert_eq!(cost, quoted);
        assert_eq!(alice.balance(Side::Up), 10);
        assert_eq!(f.market.up_total_supply(), 10);
        assert_eq!(f.market.combined_total_supply(), 10);
        assert_eq!(f.market.collected_funds, quoted);
    }

    #[test]
    fn test_acquire_down_adds_to_combined_total() {
        let mut f = fixture();
        let mut alice = position(&f);

        buy(&mut f.market, &mut alice, Side::Up, 10, DURING);
        buy(&mut f.market, &mut alice, Side::Down, 5, DURING);

        assert_eq!(alice.balance(Side::Down), 5);
        assert_eq!(f.market.down_total_supply(), 5);
        assert_eq!(f.market.combined_total_supply(), 15);
    }

    #[test]
    fn test_sides_share_one_price() {
        let mut f = fixture();
        let mut alice = position(&f);

        assert_eq!(f.market.quote_up_cost(7).unwrap(), f.market.quote_down_cost(7).unwrap());

        buy(&mut f.market, &mut alice, Side::Up, 12, DURING);
        let up_after_up = f.market.quote_up_cost(3).unwrap();
        let down_after_up = f.market.quote_down_cost(3).unwrap();
        assert_eq!(up_after_up, down_after_up);

        // Buying Down moves the Up price just as much as buying Up would
        let mut g = fixture();
        let mut bob = position(&g);
        buy(&mut g.market, &mut bob, Side::Down, 12, DURING);
        assert_eq!(g.market.quote_up_cost(3).unwrap(), up_after_up);
    }

    #[test]
    fn test_surplus_payment_is_retained() {
        let mut f = fixture();
        let mut alice = position(&f);

        let quoted = f.market.quote_up_cost(4).unwrap();
        f.market.acquire(&mut alice, Side::Up, 4, quoted + 500, DURING).unwrap();

        assert_eq!(f.market.collected_funds, quoted + 500);
        assert_eq!(alice.balance(Side::Up), 4);
    }

    #[test]
    fn test_insufficient_payment_changes_nothing() {
        let mut f = fixture();
        let mut alice = position(&f);

        let quoted = f.market.quote_down_cost(10).unwrap();
        assert_error(
            f.market.acquire(&mut alice, Side::Down, 10, quoted - 1, DURING),
            MarketError::InsufficientPayment,
        );
        assert_eq!(f.market.combined_total_supply(), 0);
        assert_eq!(f.market.collected_funds, 0);
        assert_eq!(alice.balance(Side::Down), 0);
    }

    #[test]
    fn test_zero_amount_rejected() {
        let mut f = fixture();
        let mut alice = position(&f);
        assert_error(
            f.market.acquire(&mut alice, Side::Up, 0, 1_000, DURING),
            MarketError::ZeroAmount,
        );
    }

    #[test]
    fn test_acquire_after_window_rejected() {
        let mut f = fixture();
        let mut alice = position(&f);
        let cost = f.market.quote_up_cost(10).unwrap();

        assert_error(
            f.market.acquire(&mut alice, Side::Up, 10, cost, AFTER),
            MarketError::PhaseViolation,
        );
        let end = f.market.betting_end_timestamp;
        assert_error(
            f.market.acquire(&mut alice, Side::Down, 5, cost, end),
            MarketError::PhaseViolation,
        );
    }

    #[test]
    fn test_acquire_after_settlement_rejected() {
        let mut f = fixture();
        let mut alice = position(&f);
        f.market.settle(&f.admin, AFTER).unwrap();

        let cost = f.market.quote_up_cost(1).unwrap();
        assert_error(
            f.market.acquire(&mut alice, Side::Up, 1, cost, AFTER),
            MarketError::PhaseViolation,
        );
    }

    #[test]
    fn test_settle_folds_loser_into_winner() {
        let mut f = fixture();
        let mut alice = position(&f);
        let mut bob = position(&f);

        buy(&mut f.market, &mut alice, Side::Up, 10, DURING);
        buy(&mut f.market, &mut bob, Side::Up, 15, DURING);
        buy(&mut f.market, &mut bob, Side::Down, 20, DURING);

        assert_eq!(f.market.up_total_supply(), 25);
        assert_eq!(f.market.down_total_supply(), 20);
        assert_eq!(f.market.combined_total_supply(), 45);

        let settlement = f.market.settle(&f.admin, AFTER).unwrap();

        assert_eq!(
            settlement,
            Settlement {
                winning_side: Side::Up,
                folded_amount: 20,
                combined_total: 45,
            }
        );
        assert_eq!(f.market.up_total_supply(), 45);
        assert_eq!(f.market.down_total_supply(), 0);
        assert_eq!(f.market.combined_total_supply(), 45);
        assert_eq!(f.market.winning_side, Some(Side::Up));
        assert!(f.market.settled);

        // Losing balances are kept as a record
        assert_eq!(bob.balance(Side::Down), 20);
    }

    #[test]
    fn test_settle_down_wins() {
        let mut f = fixture();
        let mut alice = position(&f);

        buy(&mut f.market, &mut alice, Side::Up, 3, DURING);
        buy(&mut f.market, &mut alice, Side::Down, 8, DURING);

        let settlement = f.market.settle(&f.admin, AFTER).unwrap();
        assert_eq!(settlement.winning_side, Side::Down);
        assert_eq!(settlement.folded_amount, 3);
        assert_eq!(f.market.down_total_supply(), 11);
        assert_eq!(f.market.up_total_supply(), 0);
    }

    #[test]
    fn test_settle_tie_goes_up() {
        let mut f = fixture();
        let mut alice = position(&f);

        buy(&mut f.market, &mut alice, Side::Up, 6, DURING);
        buy(&mut f.market, &mut alice, Side::Down, 6, DURING);

        let settlement = f.market.settle(&f.admin, AFTER).unwrap();
        assert_eq!(settlement.winning_side, Side::Up);
        assert_eq!(f.market.up_total_supply(), 12);

        let mut empty = fixture();
        let settlement = empty.market.settle(&empty.admin, AFTER).unwrap();
        assert_eq!(settlement.winning_side, Side::Up);
        assert_eq!(settlement.folded_amount, 0);
    }

    #[test]
    fn test_settle_before_window_end_rejected() {
        let mut f = fixture();
        assert_error(f.market.settle(&f.admin, DURING), MarketError::PhaseViolation);
        assert!(!f.market.settled);
    }

    #[test]
    fn test_settle_only_once() {
        let mut f = fixture();
        let mut alice = position(&f);
        buy(&mut f.market, &mut alice, Side::Up, 10, DURING);

        f.market.settle(&f.admin, AFTER).unwrap();
        assert_error(f.market.settle(&f.admin, AFTER), MarketError::AlreadySettled);
        assert_error(f.market.settle(&f.admin, AFTER + 86_400), MarketError::AlreadySettled);
        assert_eq!(f.market.up_total_supply(), 10);
    }

    #[test]
    fn test_settle_requires_admin() {
        let mut f = fixture();
        let stranger = Pubkey::new_unique();
        assert_error(f.market.settle(&stranger, AFTER), MarketError::Unauthorized);
        assert!(!f.market.settled);
    }

    #[test]
    fn test_pause_blocks_acquisition_only() {
        let mut f = fixture();
        let mut alice = position(&f);

        f.market.pause(&f.admin).unwrap();
        assert!(f.market.is_paused());

        let cost = f.market.quote_up_cost(10).unwrap();
        assert_error(
            f.market.acquire(&mut alice, Side::Up, 10, cost, DURING),
            MarketError::Paused,
        );
        // Paused wins over the phase check
        assert_error(
            f.market.acquire(&mut alice, Side::Down, 10, cost, AFTER),
            MarketError::Paused,
        );

        // Settlement and withdrawal ignore the pause
        f.market.settle(&f.admin, AFTER).unwrap();
        assert_eq!(f.market.withdraw(&f.admin, None).unwrap(), 0);

        f.market.unpause(&f.admin).unwrap();
        assert!(!f.market.is_paused());
    }

    #[test]
    fn test_unpause_resumes_acquisition() {
        let mut f = fixture();
        let mut alice = position(&f);

        f.market.pause(&f.admin).unwrap();
        f.market.unpause(&f.admin).unwrap();
        buy(&mut f.market, &mut alice, Side::Up, 2, DURING);
        assert_eq!(f.market.up_total_supply(), 2);
    }

    #[test]
    fn test_admin_operations_reject_strangers() {
        let mut f = fixture();
        let stranger = Pubkey::new_unique();

        assert_error(f.market.pause(&stranger), MarketError::Unauthorized);
        assert_error(f.market.unpause(&stranger), MarketError::Unauthorized);
        assert_error(f.market.withdraw(&stranger, None), MarketError::Unauthorized);
        assert!(!f.market.is_paused());
    }

    #[test]
    fn test_withdraw_all_and_partial() {
        let mut f = fixture();
        let mut alice = position(&f);

        let cost = buy(&mut f.market, &mut alice, Side::Up, 10_000_000, DURING);
        assert_eq!(f.market.collected_funds, cost);

        assert_eq!(f.market.withdraw(&f.admin, Some(1_000)).unwrap(), 1_000);
        assert_eq!(f.market.collected_funds, cost - 1_000);

        assert_error(
            f.market.withdraw(&f.admin, Some(cost)),
            MarketError::InsufficientFunds,
        );
        assert_eq!(f.market.collected_funds, cost - 1_000);

        assert_eq!(f.market.withdraw(&f.admin, None).unwrap(), cost - 1_000);
        assert_eq!(f.market.collected_funds, 0);

        // Ledgers are untouched by withdrawals
        assert_eq!(f.market.up_total_supply(), 10_000_000);
        assert_eq!(alice.balance(Side::Up), 10_000_000);
    }

    #[test]
    fn test_overflowing_purchase_changes_nothing() {
        let mut f = fixture();
        let mut alice = position(&f);

        assert_error(
            f.market.acquire(&mut alice, Side::Up, u64::MAX, u64::MAX, DURING),
            MarketError::ArithmeticOverflow,
        );
        assert_error(f.market.quote_down_cost(u64::MAX), MarketError::ArithmeticOverflow);
        assert_eq!(f.market.combined_total_supply(), 0);
        assert_eq!(f.market.collected_funds, 0);
    }

    /// Deterministic pseudo-random sequence of operations, checking the
    /// aggregate invariants after every step.
    #[test]
    fn test_invariants_hold_over_random_sequences() {
        for seed in 1..=20u64 {
            let mut f = fixture();
            let mut positions: Vec<Position> = (0..4).map(|_| position(&f)).collect();
            let mut rng = seed;
            let mut next = || {
                rng ^= rng << 13;
                rng ^= rng >> 7;
                rng ^= rng << 17;
                rng
            };

            let mut settle_successes = 0;
            for step in 0..120 {
                let now = CREATED_AT + (step as i64) * (WINDOW / 80);
                let roll = next();
                let who = (roll % 4) as usize;
                let side = if roll & 8 == 0 { Side::Up } else { Side::Down };
                let amount = next() % 50;

                match roll % 7 {
                    0 => {
                        let _ = f.market.pause(&f.admin);
                    }
                    1 => {
                        let _ = f.market.unpause(&f.admin);
                    }
                    2 => {
                        if f.market.settle(&f.admin, now).is_ok() {
                            settle_successes += 1;
                        }
                    }
                    3 => {
                        let _ = f.market.withdraw(&f.admin, Some(amount));
                    }
                    _ => {
                        let payment = f
                            .market
                            .quote_cost(side, amount)
                            .unwrap()
                            .saturating_add(next() % 3);
                        let result =
                            f.market.acquire(&mut positions[who], side, amount, payment, now);
                        if now >= f.market.betting_end_timestamp {
                            assert!(result.is_err());
                        }
                    }
                }

                let up: u64 = positions.iter().map(|p| p.up_balance).sum();
                let down: u64 = positions.iter().map(|p| p.down_balance).sum();

                assert_eq!(
                    f.market.up_total_supply() + f.market.down_total_supply(),
                    f.market.combined_total_supply()
                );
                assert_eq!(f.market.combined_total_supply(), up + down);
                if !f.market.settled {
                    assert_eq!(f.market.up_total_supply(), up);
                    assert_eq!(f.market.down_total_supply(), down);
                }
                assert_eq!(
                    f.market.quote_up_cost(amount).unwrap(),
                    f.market.quote_down_cost(amount).unwrap()
                );
            }

            assert!(settle_successes <= 1);
        }
    }
}
