//! Core types
//!
//! Node identity and the small ordered enums the propagation engine is
//! built around.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Arena-allocated node identifier. Unique within one graph, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Health status lattice. Variant order is load-bearing: propagation only
/// ever moves a node upward through `Nominal < Degraded < Failed`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SystemStatus {
    #[default]
    Nominal,
    Degraded,
    Failed,
}

impl SystemStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Nominal => "nominal",
            Self::Degraded => "degraded",
            Self::Failed => "failed",
        }
    }
}

/// How strongly a dependent is affected by a failed dependency.
/// Ordered weakest to strongest.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DependencyStrength {
    /// Display only, never changes status.
    Informational,
    /// Might degrade.
    Minor,
    /// Degradation likely.
    #[default]
    Major,
    /// Can force failure.
    Critical,
}

impl DependencyStrength {
    /// Uppercased label used verbatim in explanation strings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Informational => "INFORMATIONAL",
            Self::Minor => "MINOR",
            Self::Major => "MAJOR",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Subsystem category. Informational only — propagation never consults it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SystemKind {
    Electrical,
    Avionics,
    FlightControls,
    Hydraulics,
    Pneumatics,
    Fuel,
    Propulsion,
    Navigation,
    Communications,
    Sensors,
    AntiIce,
    Environmental,
    LandingGear,
    FireProtection,
    Autopilot,
    MissionSystems,
    #[default]
    Other,
}

/// Failure-mode tag. Informational only — propagation never consults it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FailureMode {
    #[default]
    None,
    Intermittent,
    DegradedPerformance,
    TotalLoss,
    Overheat,
    DataInvalid,
    PowerLoss,
}
