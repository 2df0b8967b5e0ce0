//! Closed-form solutions of the Tsiolkovsky rocket equation.
//!
//! The equation `ΔV = Isp · g0 · ln(M0 / Me)` relates four quantities. Given
//! any three of them, [`solve`] returns the fourth. Every provided quantity may
//! be a scalar or an array of any rank, and operands are combined with
//! right-aligned singleton-expansion broadcasting.
//!
//! ```
//! use ndarray::array;
//! use tsiolkovsky::{Operand, solve};
//!
//! let delta_v = solve(Operand::Absent, 300.0, 1000.0, 150.0).unwrap();
//! assert_eq!(delta_v.ndim(), 0);
//! assert!((delta_v.sum() - 5.5813).abs() < 1e-4);
//!
//! let isp = solve(array![9.2, 3.4], Operand::Absent, array![9750.0, 750.0], array![250.0, 50.0])
//!     .unwrap();
//! assert_eq!(isp.shape(), &[2]);
//! ```

pub mod broadcast;
pub mod constants;
mod error;
mod model;
mod operand;
mod solve;
mod unknown;

pub use error::Error;
pub use model::Model;
pub use operand::Operand;
pub use solve::{Quantities, RocketEquation, Solution, effective_exhaust_velocity, solve};
pub use unknown::Unknown;
