//! Identity comparison between catalog entries and raw codes
//!
//! Datapoints and value tuples are identified by their numeric id alone. A
//! freshly decoded enumeration code or a bare number can be compared against
//! either without unwrapping: both sides are normalized to an `i64` id first.

use xcom_core::Value;

/// Anything that can be reduced to a numeric id
pub trait Identifier {
    /// The id this item stands for, `None` if it carries no integral id
    fn identity(&self) -> Option<i64>;
}

/// Compare two items by id; items without an id never match
///
/// ```
/// use xcom_params::{same_id, catalog, labels};
///
/// assert!(same_id(catalog::PV_OPERATING_MODE, 11016u16));
/// assert!(same_id(8i16, labels::MODE_CHARGE));
/// assert!(!same_id(labels::MODE_CHARGE, labels::MODE_CHARGE_V));
/// ```
pub fn same_id<A: Identifier, B: Identifier>(a: A, b: B) -> bool {
    match (a.identity(), b.identity()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

impl<T: Identifier + ?Sized> Identifier for &T {
    fn identity(&self) -> Option<i64> {
        (**self).identity()
    }
}

macro_rules! impl_identifier_for_int {
    ($($t:ty),*) => {
        $(
            impl Identifier for $t {
                fn identity(&self) -> Option<i64> {
                    Some(i64::from(*self))
                }
            }
        )*
    };
}

impl_identifier_for_int!(u8, u16, u32, i8, i16, i32, i64);

impl Identifier for Value {
    fn identity(&self) -> Option<i64> {
        self.as_integer()
    }
}
