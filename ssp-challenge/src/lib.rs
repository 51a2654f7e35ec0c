pub mod error;
pub mod population;
pub mod selection;

pub use error::Error;
pub use population::{Population, Supplier};
pub use selection::Selection;

/// Supplier labels are contiguous positive integers, `1..=num_suppliers`.
pub type Label = usize;

/// Rounds a weight to 3 decimal places. Both generated weights and reported
/// selection totals are kept at this precision.
pub fn round_weight(weight: f64) -> f64 {
    (weight * 1000.0).round() / 1000.0
}
