//! Tally
//!
//! Tally scores purchase receipts with a fixed set of loyalty points rules.
//!
//! Receipts arrive with every field as text. [`receipt::Receipt::try_from`]
//! parses a [`receipt::RawReceipt`] into typed dates, times and exact decimal
//! amounts, and [`points::calculate_points`] turns the parsed receipt into a
//! score.

pub mod fixtures;
pub mod parsing;
pub mod points;
pub mod receipt;

pub use parsing::ParseError;
pub use points::{PointsBreakdown, calculate_points};
pub use receipt::{Item, RawItem, RawReceipt, Receipt};
