//! Fixed physical constants used by the solver.

/// Standard gravity in km/s², matching the km/s unit of ΔV.
pub const G0_KM_PER_S2: f64 = 9.806_65e-3;
