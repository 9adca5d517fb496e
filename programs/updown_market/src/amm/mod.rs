//! # Pricing Module
//!
//! Both sides of a market (Up and Down) are priced by a single bonding curve
//! evaluated at the market's **combined** issued total:
//!
//! ```text
//!   price ▲
//!         │                          ╱
//!         │                      ╱
//!         │                  ╱        next unit costs the same
//!         │              ╱            whichever side buys it
//!         │          ╱
//!         │      ╱
//!         │__╱
//!         └──────────────────────────▶ UP + DOWN issued
//! ```
//!
//! Buying on either side pushes the same price forward.

pub mod bonding_curve;

pub use bonding_curve::*;
