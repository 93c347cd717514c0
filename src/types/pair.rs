//! The ordered result of a pair ordering decision.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An asset pair as `(amount_asset, price_asset)`.
///
/// ## Invariant
///
/// Only pairs returned by [`order_pair`](crate::order_pair) or a
/// [`PairOrderer`](crate::PairOrderer) are canonical: their
/// `{amount_asset, price_asset}` is exactly the multiset of the two input
/// identifiers. The fields are public and [`AssetPair::new`] or
/// deserialization take whatever they are given, so a hand-built pair carries
/// no ordering guarantee.
///
/// ## Serialization
///
/// Serializes as `{"amountAsset": ..., "priceAsset": ...}`, the field names
/// DEX matcher APIs use for a pair.
///
/// ## Example
///
/// ```
/// use asset_pair_order::AssetPair;
///
/// let pair = AssetPair::new("DCC", "Ft8X1v1LTa1ABafufpaCWyVj8KkaxUWE6xBhW6sNFJck");
/// assert_eq!(pair.amount_asset(), "DCC");
/// assert_eq!(pair.to_string(), "DCC/Ft8X1v1LTa1ABafufpaCWyVj8KkaxUWE6xBhW6sNFJck");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPair {
    /// The asset whose quantity is traded (base)
    pub amount_asset: String,

    /// The asset the amount asset is priced in (quote)
    pub price_asset: String,
}

impl AssetPair {
    /// Create a pair as given, without ordering or validating it
    pub fn new(amount_asset: impl Into<String>, price_asset: impl Into<String>) -> Self {
        Self {
            amount_asset: amount_asset.into(),
            price_asset: price_asset.into(),
        }
    }

    pub fn amount_asset(&self) -> &str {
        &self.amount_asset
    }

    pub fn price_asset(&self) -> &str {
        &self.price_asset
    }

    /// Borrow as an `(amount, price)` tuple
    pub fn as_tuple(&self) -> (&str, &str) {
        (&self.amount_asset, &self.price_asset)
    }

    /// Consume into an `(amount, price)` tuple
    pub fn into_tuple(self) -> (String, String) {
        (self.amount_asset, self.price_asset)
    }

    /// Check whether `id` is either side of the pair; says nothing about canonical order
    pub fn contains(&self, id: &str) -> bool {
        self.amount_asset == id || self.price_asset == id
    }
}

impl fmt::Display for AssetPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.amount_asset, self.price_asset)
    }
}

impl From<AssetPair> for (String, String) {
    fn from(pair: AssetPair) -> Self {
        pair.into_tuple()
    }
}
