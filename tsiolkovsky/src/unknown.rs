use std::fmt;

/// The quantity a solve produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unknown {
    /// Velocity change, km/s.
    DeltaV,
    /// Specific impulse, s.
    SpecificImpulse,
    /// Initial (wet) mass, kg.
    InitialMass,
    /// Final (dry) mass, kg.
    FinalMass,
}

impl Unknown {
    /// All quantities in argument order.
    pub const ALL: [Self; 4] = [
        Self::DeltaV,
        Self::SpecificImpulse,
        Self::InitialMass,
        Self::FinalMass,
    ];

    /// Conventional symbol for the quantity.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::DeltaV => "ΔV",
            Self::SpecificImpulse => "Isp",
            Self::InitialMass => "M0",
            Self::FinalMass => "Me",
        }
    }

    /// Unit the solver works in for this quantity.
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Self::DeltaV => "km/s",
            Self::SpecificImpulse => "s",
            Self::InitialMass | Self::FinalMass => "kg",
        }
    }
}

impl fmt::Display for Unknown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.symbol(), self.unit())
    }
}
