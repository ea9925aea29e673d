//! Reference tables indexed by field strength
//!
//! Both tables are stored flat, keyed by a composite key that ends in the
//! field strength floored to a whole number of tesla. Lookups floor the
//! requested field strength the same way and require an exact key match:
//! there is no interpolation and no nearest-neighbour fallback.

pub mod relaxivity;
pub mod t1;

pub use relaxivity::{relaxivity, relaxivity_of, RelaxivityQuery};
pub use t1::{precontrast_r1, t1, t1_of, DEFAULT_HEMATOCRIT};

/// Table key for a field strength in tesla
///
/// Truncates towards negative infinity; `2.9` maps to `2`, not `3`.
/// Non-finite values have no key.
pub(crate) fn field_key(field_strength: f64) -> Option<i64> {
    if field_strength.is_finite() {
        Some(field_strength.floor() as i64)
    } else {
        None
    }
}
