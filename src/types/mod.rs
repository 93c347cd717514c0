//! Core data types for asset pair ordering
//!
//! ## Types
//!
//! - [`AssetPair`]: An ordered `(amount_asset, price_asset)` pair
//! - [`PriorityList`]: Immutable ordered list of asset identifiers
//!
//! Asset identifiers themselves are plain `&str`: either a short literal
//! token (`"DCC"`) or a Base58-encoded 32-byte ID.

mod pair;
mod priority;

// Re-export all types at module level
pub use pair::AssetPair;
pub use priority::PriorityList;
