//! # Asset Pair Order
//!
//! Canonical ordering of DEX asset pairs into `(amount_asset, price_asset)`.
//!
//! ## Architecture
//!
//! - **Types**: [`AssetPair`] result and immutable [`PriorityList`]
//! - **Compare**: strict lexicographic byte comparison for the tie-break
//! - **Order**: the decision routine and its two call shapes
//! - **Data**: built-in mainnet / testnet / arbitrary priority lists
//!
//! ## Ordering Rules
//!
//! 1. Both assets listed: the one with the larger list index comes first
//! 2. One asset listed: the listed asset is the price asset
//! 3. Neither listed: Base58-decode both and order by raw bytes
//!
//! ## Properties
//!
//! - **Symmetry**: `order(a, b) == order(b, a)` for every input
//! - **No data loss**: the result holds exactly the two inputs
//! - **Purity**: no I/O, no shared mutable state; safe to call from any thread
//!
//! ## Example
//!
//! ```
//! use asset_pair_order::{create_order_pair, MAINNET_DATA};
//!
//! let order = create_order_pair(MAINNET_DATA.clone());
//! let pair = order(
//!     "Ft8X1v1LTa1ABafufpaCWyVj8KkaxUWE6xBhW6sNFJck",
//!     "Gtb1WRznfchDnTh37ezoDTJ4wcoKaRsKqKjJjy7nm2zU",
//! )
//! .unwrap();
//!
//! assert_eq!(pair.amount_asset(), "Gtb1WRznfchDnTh37ezoDTJ4wcoKaRsKqKjJjy7nm2zU");
//! assert_eq!(pair.price_asset(), "Ft8X1v1LTa1ABafufpaCWyVj8KkaxUWE6xBhW6sNFJck");
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: AssetPair, PriorityList
pub mod types;

/// Lexicographic byte comparison
pub mod compare;

/// Pair ordering: decision routine and call shapes
pub mod order;

/// Built-in priority lists and network selection
pub mod data;

/// Error types
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{AssetPair, PriorityList};
pub use compare::is_greater;
pub use order::{create_order_pair, order_pair, PairOrderer};
pub use data::{Network, ARBITRARY_DATA, MAINNET_DATA, TESTNET_DATA};
pub use error::{Argument, DataError, InvalidReason, OrderError};
