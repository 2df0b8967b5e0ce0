//! Unit-checked scalar interface to the [`tsiolkovsky`] rocket equation solver.
//!
//! Quantities are given as [`uom`] values, so callers can work in whatever
//! units they like. They are converted to km/s, seconds, and kilograms at the
//! boundary before the solver runs.
//!
//! # Example
//!
//! ```
//! use tsiolkovsky_units::{Burn, Resolved};
//! use uom::si::{
//!     f64::{Mass, Time},
//!     mass::{kilogram, megagram},
//!     time::second,
//!     velocity::meter_per_second,
//! };
//!
//! let burn = Burn::new()
//!     .with_isp(Time::new::<second>(300.0))
//!     .with_initial_mass(Mass::new::<megagram>(1.0))
//!     .with_final_mass(Mass::new::<kilogram>(150.0));
//!
//! let Ok(Resolved::DeltaV(delta_v)) = burn.solve() else {
//!     panic!("expected delta-v");
//! };
//! assert!((delta_v.get::<meter_per_second>() - 5581.3).abs() < 0.1);
//! ```

mod burn;
mod error;

pub use burn::{Burn, CompleteBurn, Resolved};
pub use error::Error;

/// Solves a [`Burn`] for its single missing quantity.
///
/// # Errors
///
/// See [`Burn::solve`].
pub fn solve(burn: &Burn) -> Result<Resolved, Error> {
    burn.solve()
}
