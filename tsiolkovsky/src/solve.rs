use ndarray::ArrayD;
use tracing::debug;

use crate::{
    Error, Model, Operand, Unknown,
    broadcast::{BroadcastError, zip_with},
    constants::G0_KM_PER_S2,
};

/// The four rocket equation quantities for a single solve.
///
/// Exactly one field must be [`Operand::Absent`]; that is the quantity
/// returned by [`Quantities::solve`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Quantities {
    /// Velocity change, km/s.
    pub delta_v: Operand,
    /// Specific impulse, s.
    pub isp: Operand,
    /// Initial (wet) mass, kg.
    pub initial_mass: Operand,
    /// Final (dry) mass, kg.
    pub final_mass: Operand,
}

/// The solved quantity and its value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub unknown: Unknown,
    pub value: ArrayD<f64>,
}

impl Quantities {
    /// Creates a set of quantities from anything convertible to an [`Operand`].
    pub fn new(
        delta_v: impl Into<Operand>,
        isp: impl Into<Operand>,
        initial_mass: impl Into<Operand>,
        final_mass: impl Into<Operand>,
    ) -> Self {
        Self {
            delta_v: delta_v.into(),
            isp: isp.into(),
            initial_mass: initial_mass.into(),
            final_mass: final_mass.into(),
        }
    }

    /// Returns the operand for the given quantity.
    #[must_use]
    pub fn operand(&self, quantity: Unknown) -> &Operand {
        match quantity {
            Unknown::DeltaV => &self.delta_v,
            Unknown::SpecificImpulse => &self.isp,
            Unknown::InitialMass => &self.initial_mass,
            Unknown::FinalMass => &self.final_mass,
        }
    }

    /// Number of absent operands.
    #[must_use]
    pub fn absent_count(&self) -> usize {
        Unknown::ALL
            .into_iter()
            .filter(|&quantity| self.operand(quantity).is_absent())
            .count()
    }

    /// Identifies the single absent quantity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Argument`] unless exactly one operand is absent.
    pub fn unknown(&self) -> Result<Unknown, Error> {
        let mut absent = Unknown::ALL
            .into_iter()
            .filter(|&quantity| self.operand(quantity).is_absent());

        match (absent.next(), absent.count()) {
            (Some(unknown), 0) => Ok(unknown),
            (None, _) => Err(Error::Argument { absent: 0 }),
            (Some(_), rest) => Err(Error::Argument { absent: rest + 1 }),
        }
    }

    /// Solves the rocket equation for the absent quantity.
    ///
    /// Provided operands are broadcast against each other at every step of the
    /// selected formula. Physically invalid inputs, such as a final mass larger
    /// than the initial mass, are not rejected and produce non-finite values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Argument`] unless exactly one operand is absent, or
    /// [`Error::Computation`] if the operand shapes cannot be broadcast.
    pub fn solve(&self) -> Result<Solution, Error> {
        use Operand::{Absent, Value};

        let unknown = self.unknown()?;
        debug!(
            %unknown,
            delta_v = ?self.delta_v.shape(),
            isp = ?self.isp.shape(),
            initial_mass = ?self.initial_mass.shape(),
            final_mass = ?self.final_mass.shape(),
            "solving rocket equation"
        );

        let value = match (&self.delta_v, &self.isp, &self.initial_mass, &self.final_mass) {
            (Absent, Value(isp), Value(m0), Value(me)) => delta_v(isp, m0, me),
            (Value(dv), Absent, Value(m0), Value(me)) => specific_impulse(dv, m0, me),
            (Value(dv), Value(isp), Absent, Value(me)) => initial_mass(dv, isp, me),
            (Value(dv), Value(isp), Value(m0), Absent) => final_mass(dv, isp, m0),
            _ => {
                return Err(Error::Argument {
                    absent: self.absent_count(),
                });
            }
        }
        .map_err(Error::Computation)?;

        Ok(Solution { unknown, value })
    }
}

/// Solves the rocket equation for whichever quantity is [`Operand::Absent`].
///
/// Units are km/s for `delta_v`, s for `isp`, and kg for both masses. The
/// result has the broadcast shape of the operands used.
///
/// # Errors
///
/// Returns [`Error::Argument`] unless exactly one operand is absent, or
/// [`Error::Computation`] if the operand shapes cannot be broadcast.
pub fn solve(
    delta_v: impl Into<Operand>,
    isp: impl Into<Operand>,
    initial_mass: impl Into<Operand>,
    final_mass: impl Into<Operand>,
) -> Result<ArrayD<f64>, Error> {
    Quantities::new(delta_v, isp, initial_mass, final_mass)
        .solve()
        .map(|solution| solution.value)
}

/// Effective exhaust velocity `ceff = Isp · g0` in km/s.
#[must_use]
pub fn effective_exhaust_velocity(isp: &ArrayD<f64>) -> ArrayD<f64> {
    isp.mapv(|isp| isp * G0_KM_PER_S2)
}

/// The rocket equation as a stateless [`Model`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RocketEquation;

impl Model for RocketEquation {
    type Input = Quantities;
    type Output = Solution;
    type Error = Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        input.solve()
    }
}

/// `ΔV = ceff · ln(M0 / Me)`
fn delta_v(
    isp: &ArrayD<f64>,
    initial_mass: &ArrayD<f64>,
    final_mass: &ArrayD<f64>,
) -> Result<ArrayD<f64>, BroadcastError> {
    let ceff = effective_exhaust_velocity(isp);
    let log_ratio = zip_with(initial_mass, final_mass, |m0, me| m0 / me)?.mapv(f64::ln);
    zip_with(&ceff, &log_ratio, |c, ln| c * ln)
}

/// `Isp = (ΔV / g0) / ln(M0 / Me)`
fn specific_impulse(
    delta_v: &ArrayD<f64>,
    initial_mass: &ArrayD<f64>,
    final_mass: &ArrayD<f64>,
) -> Result<ArrayD<f64>, BroadcastError> {
    let scaled = delta_v.mapv(|dv| dv / G0_KM_PER_S2);
    let log_ratio = zip_with(initial_mass, final_mass, |m0, me| m0 / me)?.mapv(f64::ln);
    zip_with(&scaled, &log_ratio, |s, ln| s / ln)
}

/// `M0 = Me · exp(ΔV / ceff)`
fn initial_mass(
    delta_v: &ArrayD<f64>,
    isp: &ArrayD<f64>,
    final_mass: &ArrayD<f64>,
) -> Result<ArrayD<f64>, BroadcastError> {
    let growth = exhaust_growth(delta_v, isp)?;
    zip_with(final_mass, &growth, |me, g| me * g)
}

/// `Me = M0 / exp(ΔV / ceff)`
fn final_mass(
    delta_v: &ArrayD<f64>,
    isp: &ArrayD<f64>,
    initial_mass: &ArrayD<f64>,
) -> Result<ArrayD<f64>, BroadcastError> {
    let growth = exhaust_growth(delta_v, isp)?;
    zip_with(initial_mass, &growth, |m0, g| m0 / g)
}

/// Mass ratio `exp(ΔV / ceff)` shared by both mass formulas.
fn exhaust_growth(delta_v: &ArrayD<f64>, isp: &ArrayD<f64>) -> Result<ArrayD<f64>, BroadcastError> {
    let ceff = effective_exhaust_velocity(isp);
    Ok(zip_with(delta_v, &ceff, |dv, c| dv / c)?.mapv(f64::exp))
}
