//! # Linear Bonding Curve
//!
//! ## The Price Line
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                                                              │
//! │          price(k) = BASE + STEP × k                          │
//! │                                                              │
//! │   Where:                                                     │
//! │   • k    = index of the unit being issued (0-based),         │
//! │            counted across BOTH ledgers                       │
//! │   • BASE = price of the very first unit                      │
//! │   • STEP = price increase per unit already issued            │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Cost of a Purchase
//!
//! Buying `n` units when `T` units are already issued sums the prices of
//! units `T, T+1, …, T+n-1`:
//!
//! ```text
//! cost(T, n) = n × BASE + STEP × (n × T + n × (n - 1) / 2)
//! ```
//!
//! The cost is non-decreasing in both `T` and `n`, so buying more, or buying
//! later, never gets cheaper per unit.

use anchor_lang::prelude::*;

use crate::errors::MarketError;

/// Price of the first unit, in lamports
pub const BASE_PRICE_LAMPORTS: u64 = 100_000;

/// Price increase per unit already issued, in lamports
pub const PRICE_STEP_LAMPORTS: u64 = 10;

/// Linear bonding curve shared by the Up and Down ledgers
pub struct LinearCurve;

impl LinearCurve {
    /// Cost in lamports to issue `amount` more units on either side
    ///
    /// # Arguments
    /// * `combined_total` - Units already issued across both ledgers (T)
    /// * `amount` - Units being bought (n)
    ///
    /// # Example
    /// ```ignore
    /// // Empty market, 10 units: 10 × 100_000 + 10 × 45 = 1_000_450
    /// let cost = LinearCurve::quote_cost(0, 10)?;
    /// ```
    pub fn quote_cost(combined_total: u64, amount: u64) -> Result<u64> {
        if amount == 0 {
            return Ok(0);
        }

        let t = combined_total as u128;
        let n = amount as u128;

        // Flat part: n × BASE
        let flat = n
            .checked_mul(BASE_PRICE_LAMPORTS as u128)
            .ok_or(MarketError::ArithmeticOverflow)?;

        // Units already issued push every new unit up: n × T
        let carried = n.checked_mul(t).ok_or(MarketError::ArithmeticOverflow)?;

        // Triangle inside the purchase itself: n × (n - 1) / 2
        let triangle = n
            .checked_mul(n - 1)
            .ok_or(MarketError::ArithmeticOverflow)?
            / 2;

        let slope = carried
            .checked_add(triangle)
            .ok_or(MarketError::ArithmeticOverflow)?
            .checked_mul(PRICE_STEP_LAMPORTS as u128)
            .ok_or(MarketError::ArithmeticOverflow)?;

        let cost = flat
            .checked_add(slope)
            .ok_or(MarketError::ArithmeticOverflow)?;

        u64::try_from(cost).map_err(|_| error!(MarketError::ArithmeticOverflow))
    }

    /// Price of the next single unit at the given combined total
    pub fn spot_price(combined_total: u64) -> Result<u64> {
        Self::quote_cost(combined_total, 1)
    }
}

// ============================================================================
// TESTS
// ============================================================================
