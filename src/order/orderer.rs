//! Pair orderer: decides which asset is the amount side and which the price side.
//!
//! ## Decision Rules
//!
//! | `first` listed | `second` listed | Result |
//! |----------------|-----------------|--------|
//! | yes | yes | larger index first: `(first, second)` if `idx(first) > idx(second)`, else `(second, first)` |
//! | yes | no | `(second, first)` |
//! | no | yes | `(first, second)` |
//! | no | no | `(first, second)` if `bytes(first) > bytes(second)`, else `(second, first)` |
//!
//! A listed asset always ends up on the price side when its counterpart is
//! unlisted. The last row compares Base58-decoded bytes with
//! [`is_greater`](crate::compare::is_greater).
//!
//! Every row depends only on the values of the two identifiers, never on
//! which argument slot they arrived in, so swapping the arguments yields the
//! same pair.

use tracing::trace;

use crate::compare::is_greater;
use crate::error::{Argument, InvalidReason, OrderError};
use crate::types::{AssetPair, PriorityList};

/// Reusable orderer bound to one priority list.
///
/// This is the partially-applied form of [`order_pair`]: build it once from
/// a list, then call [`order`](Self::order) for as many pairs as needed. The
/// captured list is shared, never copied or modified.
///
/// ## Example
///
/// ```
/// use asset_pair_order::{PairOrderer, PriorityList};
///
/// let orderer = PairOrderer::new(PriorityList::new(["1", "2"]));
/// let pair = orderer.order("2", "1").unwrap();
/// assert_eq!(pair.as_tuple(), ("2", "1"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PairOrderer {
    list: PriorityList,
}

impl PairOrderer {
    /// Bind an orderer to `list`
    pub fn new(list: PriorityList) -> Self {
        Self { list }
    }

    /// The priority list this orderer consults
    pub fn priority_list(&self) -> &PriorityList {
        &self.list
    }

    /// Order `first` and `second` into `(amount_asset, price_asset)`
    ///
    /// # Errors
    ///
    /// - `InvalidArgument { reason: Empty }` if either identifier is empty
    /// - `InvalidArgument { reason: NotBase58 }` if neither asset is listed
    ///   and one of them does not decode as Base58
    pub fn order(&self, first: &str, second: &str) -> Result<AssetPair, OrderError> {
        decide(&self.list, first, second)
    }
}

impl From<PriorityList> for PairOrderer {
    fn from(list: PriorityList) -> Self {
        Self::new(list)
    }
}

/// Order a pair against `list` in a single call.
///
/// ```
/// use asset_pair_order::{order_pair, PriorityList};
///
/// let list = PriorityList::new(["USD", "EUR"]);
/// let pair = order_pair(&list, "USD", "EUR").unwrap();
/// assert_eq!(pair.as_tuple(), ("EUR", "USD"));
/// ```
pub fn order_pair(list: &PriorityList, first: &str, second: &str) -> Result<AssetPair, OrderError> {
    decide(list, first, second)
}

/// Capture `list` and return a plain two-argument ordering function.
///
/// The returned closure can be called any number of times and behaves exactly
/// like [`order_pair`] with `list` as its first argument.
///
/// ```
/// use asset_pair_order::{create_order_pair, PriorityList};
///
/// let order = create_order_pair(PriorityList::new(["DCC"]));
/// let pair = order("DCC", "Ft8X1v1LTa1ABafufpaCWyVj8KkaxUWE6xBhW6sNFJck").unwrap();
/// assert_eq!(pair.price_asset(), "DCC");
/// ```
pub fn create_order_pair(
    list: PriorityList,
) -> impl Fn(&str, &str) -> Result<AssetPair, OrderError> + Clone + Send + Sync {
    let orderer = PairOrderer::new(list);
    move |first: &str, second: &str| orderer.order(first, second)
}

// ============================================================================
// Decision routine
// ============================================================================

fn decide(list: &PriorityList, first: &str, second: &str) -> Result<AssetPair, OrderError> {
    if first.is_empty() {
        return Err(OrderError::invalid(Argument::First, InvalidReason::Empty));
    }
    if second.is_empty() {
        return Err(OrderError::invalid(Argument::Second, InvalidReason::Empty));
    }

    let pair = match (list.position(first), list.position(second)) {
        (Some(first_idx), Some(second_idx)) => {
            trace!(first, second, first_idx, second_idx, "both assets listed");
            if first_idx > second_idx {
                AssetPair::new(first, second)
            } else {
                AssetPair::new(second, first)
            }
        }
        (Some(first_idx), None) => {
            trace!(first, first_idx, "only first asset listed");
            AssetPair::new(second, first)
        }
        (None, Some(second_idx)) => {
            trace!(second, second_idx, "only second asset listed");
            AssetPair::new(first, second)
        }
        (None, None) => {
            let first_bytes = decode(first, Argument::First)?;
            let second_bytes = decode(second, Argument::Second)?;
            trace!(
                first = %hex::encode(&first_bytes),
                second = %hex::encode(&second_bytes),
                "neither asset listed, comparing decoded bytes"
            );
            if is_greater(&first_bytes, &second_bytes) {
                AssetPair::new(first, second)
            } else {
                AssetPair::new(second, first)
            }
        }
    };

    Ok(pair)
}

fn decode(id: &str, argument: Argument) -> Result<Vec<u8>, OrderError> {
    bs58::decode(id)
        .into_vec()
        .map_err(|e| OrderError::invalid(argument, InvalidReason::NotBase58(e)))
}

// ============================================================================
// Unit Tests
// ============================================================================
