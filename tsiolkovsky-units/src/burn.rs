use tsiolkovsky::{Operand, Quantities, Unknown};
use uom::si::{
    f64::{Mass, Time, Velocity},
    mass::kilogram,
    time::second,
    velocity::kilometer_per_second,
};

use crate::Error;

/// A single burn described by up to four rocket equation quantities.
///
/// Exactly one field must be `None` when solving.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Burn {
    pub delta_v: Option<Velocity>,
    pub isp: Option<Time>,
    pub initial_mass: Option<Mass>,
    pub final_mass: Option<Mass>,
}

/// The quantity recovered by solving a [`Burn`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved {
    DeltaV(Velocity),
    SpecificImpulse(Time),
    InitialMass(Mass),
    FinalMass(Mass),
}

/// A burn with all four quantities known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompleteBurn {
    pub delta_v: Velocity,
    pub isp: Time,
    pub initial_mass: Mass,
    pub final_mass: Mass,
}

impl Burn {
    /// Creates a burn with every quantity missing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new burn with the given velocity change.
    #[must_use]
    pub fn with_delta_v(self, delta_v: Velocity) -> Self {
        Self {
            delta_v: Some(delta_v),
            ..self
        }
    }

    /// Returns a new burn with the given specific impulse.
    #[must_use]
    pub fn with_isp(self, isp: Time) -> Self {
        Self {
            isp: Some(isp),
            ..self
        }
    }

    /// Returns a new burn with the given initial (wet) mass.
    #[must_use]
    pub fn with_initial_mass(self, initial_mass: Mass) -> Self {
        Self {
            initial_mass: Some(initial_mass),
            ..self
        }
    }

    /// Returns a new burn with the given final (dry) mass.
    #[must_use]
    pub fn with_final_mass(self, final_mass: Mass) -> Self {
        Self {
            final_mass: Some(final_mass),
            ..self
        }
    }

    /// Converts the burn into solver operands in km/s, s, and kg.
    #[must_use]
    pub fn quantities(&self) -> Quantities {
        fn operand<Q>(value: Option<Q>, to_f64: impl Fn(Q) -> f64) -> Operand {
            value.map_or(Operand::Absent, |q| Operand::from(to_f64(q)))
        }

        Quantities {
            delta_v: operand(self.delta_v, |v| v.get::<kilometer_per_second>()),
            isp: operand(self.isp, |t| t.get::<second>()),
            initial_mass: operand(self.initial_mass, |m| m.get::<kilogram>()),
            final_mass: operand(self.final_mass, |m| m.get::<kilogram>()),
        }
    }

    /// Solves for the single missing quantity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Solver`] unless exactly one quantity is missing.
    pub fn solve(&self) -> Result<Resolved, Error> {
        let solution = self.quantities().solve()?;

        let value = match (solution.value.ndim(), solution.value.iter().next()) {
            (0, Some(&value)) => value,
            _ => {
                return Err(Error::NotScalar {
                    shape: solution.value.shape().to_vec(),
                });
            }
        };

        Ok(match solution.unknown {
            Unknown::DeltaV => Resolved::DeltaV(Velocity::new::<kilometer_per_second>(value)),
            Unknown::SpecificImpulse => Resolved::SpecificImpulse(Time::new::<second>(value)),
            Unknown::InitialMass => Resolved::InitialMass(Mass::new::<kilogram>(value)),
            Unknown::FinalMass => Resolved::FinalMass(Mass::new::<kilogram>(value)),
        })
    }

    /// Solves for the missing quantity and returns the filled-in burn.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Solver`] unless exactly one quantity is missing.
    pub fn complete(&self) -> Result<CompleteBurn, Error> {
        let burn = self.solve()?.apply(*self);

        match (burn.delta_v, burn.isp, burn.initial_mass, burn.final_mass) {
            (Some(delta_v), Some(isp), Some(initial_mass), Some(final_mass)) => Ok(CompleteBurn {
                delta_v,
                isp,
                initial_mass,
                final_mass,
            }),
            _ => Err(tsiolkovsky::Error::Argument {
                absent: burn.quantities().absent_count(),
            }
            .into()),
        }
    }
}

impl Resolved {
    /// Which quantity was resolved.
    #[must_use]
    pub fn unknown(&self) -> Unknown {
        match self {
            Self::DeltaV(_) => Unknown::DeltaV,
            Self::SpecificImpulse(_) => Unknown::SpecificImpulse,
            Self::InitialMass(_) => Unknown::InitialMass,
            Self::FinalMass(_) => Unknown::FinalMass,
        }
    }

    /// Returns `burn` with the resolved quantity filled in.
    #[must_use]
    pub fn apply(self, burn: Burn) -> Burn {
        match self {
            Self::DeltaV(delta_v) => burn.with_delta_v(delta_v),
            Self::SpecificImpulse(isp) => burn.with_isp(isp),
            Self::InitialMass(mass) => burn.with_initial_mass(mass),
            Self::FinalMass(mass) => burn.with_final_mass(mass),
        }
    }
}

impl CompleteBurn {
    /// Propellant consumed by the burn, `M0 - Me`.
    #[must_use]
    pub fn propellant_mass(&self) -> Mass {
        self.initial_mass - self.final_mass
    }

    /// Mass ratio `M0 / Me`.
    #[must_use]
    pub fn mass_ratio(&self) -> f64 {
        self.initial_mass.get::<kilogram>() / self.final_mass.get::<kilogram>()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::{mass::megagram, time::second, velocity::meter_per_second};

    use super::*;

    fn reference_burn() -> Burn {
        Burn::new()
            .with_isp(Time::new::<second>(300.0))
            .with_initial_mass(Mass::new::<kilogram>(1000.0))
            .with_final_mass(Mass::new::<kilogram>(150.0))
    }

    #[test]
    fn solves_delta_v_in_any_velocity_unit() {
        let Resolved::DeltaV(delta_v) = reference_burn().solve().unwrap() else {
            panic!("expected delta-v");
        };

        assert_relative_eq!(delta_v.get::<kilometer_per_second>(), 5.5813, epsilon = 1e-4);
        assert_relative_eq!(delta_v.get::<meter_per_second>(), 5581.3, epsilon = 0.1);
    }

    #[test]
    fn mass_units_are_converted_at_the_boundary() {
        let burn = Burn::new()
            .with_delta_v(Velocity::new::<meter_per_second>(5581.3))
            .with_isp(Time::new::<second>(300.0))
            .with_initial_mass(Mass::new::<megagram>(1.0));

        let Resolved::FinalMass(final_mass) = burn.solve().unwrap() else {
            panic!("expected final mass");
        };

        assert_relative_eq!(final_mass.get::<kilogram>(), 150.0, epsilon = 1e-2);
    }

    #[test]
    fn complete_fills_in_the_missing_quantity() {
        let complete = reference_burn().complete().unwrap();

        assert_relative_eq!(complete.delta_v.get::<kilometer_per_second>(), 5.5813, epsilon = 1e-4);
        assert_relative_eq!(complete.propellant_mass().get::<kilogram>(), 850.0);
        assert_relative_eq!(complete.mass_ratio(), 1000.0 / 150.0);
    }

    #[test]
    fn resolved_knows_its_unknown() {
        let resolved = reference_burn().solve().unwrap();
        assert_eq!(resolved.unknown(), Unknown::DeltaV);
    }

    #[test]
    fn missing_count_must_be_one() {
        let err = Burn::new().solve().unwrap_err();
        assert_eq!(err, Error::Solver(tsiolkovsky::Error::Argument { absent: 4 }));

        let full = reference_burn().with_delta_v(Velocity::new::<kilometer_per_second>(5.0));
        assert_eq!(
            full.complete().unwrap_err().to_string(),
            "exactly one argument must be absent (found 0)"
        );
    }
}
