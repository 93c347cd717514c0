//! Pair ordering module.
//!
//! ## Call Shapes
//!
//! Ordering is available in two equivalent forms that share one decision
//! routine:
//!
//! - [`order_pair`]`(list, a, b)`: the full call, returns the pair directly
//! - [`PairOrderer::new`]`(list)` / [`create_order_pair`]`(list)`: binds the
//!   list once and returns something callable with `(a, b)`
//!
//! ## Example
//!
//! ```
//! use asset_pair_order::order::{order_pair, PairOrderer};
//! use asset_pair_order::types::PriorityList;
//!
//! let list = PriorityList::new(["USD", "EUR"]);
//! let orderer = PairOrderer::new(list.clone());
//!
//! assert_eq!(
//!     orderer.order("EUR", "USD").unwrap(),
//!     order_pair(&list, "USD", "EUR").unwrap(),
//! );
//! ```

pub mod orderer;

pub use orderer::{create_order_pair, order_pair, PairOrderer};
