//! Closed configuration enums for initialization and transport policies.
//!
//! These replace free-form string tags: every tag accepted from
//! configuration is parsed up front via `FromStr`, and an unrecognized
//! tag is an invalid-configuration failure before any stepping begins.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Initial-condition policy for the two concentration fields.
///
/// Spike variants place `spike_value` (or a computed steady-state level)
/// on an otherwise-zero background; "on" variants start from a uniform
/// non-zero level; random variants draw per-point values from a seeded
/// RNG. The steady-state variants require the reaction fixed point to be
/// resolved before initialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InitMode {
    /// Single activator spike at the center cell.
    ActivatorSpike,
    /// Single inhibitor spike at the center cell.
    InhibitorSpike,
    /// Spikes on both species at the center cell.
    BothSpikes,
    /// Two activator spikes at fixed offsets near each boundary
    /// (cells 5 and N−15).
    TwoActivatorSpikes,
    /// Uniform non-zero activator background with an elevated center spike.
    ActivatorSpikeWithBackground,
    /// Uniform flat `spike_value` on the activator only.
    ActivatorOn,
    /// Uniform flat `spike_value` on the inhibitor only.
    InhibitorOn,
    /// Uniform flat `spike_value` on both species.
    BothOn,
    /// Both fields all-zero.
    AllOff,
    /// Independent per-point uniform draws in `[0, spike_value]` for each field.
    UniformRandom,
    /// Per-point uniform noise within ±5% of the computed steady-state
    /// levels; probes local stability of the fixed point.
    RandomTight,
    /// Steady-state activator level placed at the center cell.
    ActivatorSpikeSteadyState,
    /// Steady-state levels for both species placed at the center cell.
    PeakSteadyState,
}

impl InitMode {
    /// Canonical configuration tag for this policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ActivatorSpike => "activator_spike",
            Self::InhibitorSpike => "inhibitor_spike",
            Self::BothSpikes => "both_spikes",
            Self::TwoActivatorSpikes => "two_activator_spikes",
            Self::ActivatorSpikeWithBackground => "activator_spike_with_background",
            Self::ActivatorOn => "activator_on",
            Self::InhibitorOn => "inhibitor_on",
            Self::BothOn => "both_on",
            Self::AllOff => "all_off",
            Self::UniformRandom => "uniform_random",
            Self::RandomTight => "random_tight",
            Self::ActivatorSpikeSteadyState => "activator_spike_steady_state",
            Self::PeakSteadyState => "peak_steady_state",
        }
    }

    /// Whether this policy needs the reaction steady state resolved
    /// before fields can be initialized.
    pub fn needs_steady_state(&self) -> bool {
        matches!(
            self,
            Self::RandomTight | Self::ActivatorSpikeSteadyState | Self::PeakSteadyState
        )
    }
}

impl fmt::Display for InitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InitMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "activator_spike" => Ok(Self::ActivatorSpike),
            "inhibitor_spike" => Ok(Self::InhibitorSpike),
            "both_spikes" => Ok(Self::BothSpikes),
            // "spikes" is the historical tag for the two-spike layout.
            "two_activator_spikes" | "spikes" => Ok(Self::TwoActivatorSpikes),
            "activator_spike_with_background" => Ok(Self::ActivatorSpikeWithBackground),
            "activator_on" => Ok(Self::ActivatorOn),
            "inhibitor_on" => Ok(Self::InhibitorOn),
            "both_on" => Ok(Self::BothOn),
            "all_off" => Ok(Self::AllOff),
            "uniform_random" => Ok(Self::UniformRandom),
            "random_tight" => Ok(Self::RandomTight),
            "activator_spike_steady_state" => Ok(Self::ActivatorSpikeSteadyState),
            "peak_steady_state" => Ok(Self::PeakSteadyState),
            other => Err(ConfigError::UnknownInitMode {
                tag: other.to_string(),
            }),
        }
    }
}

/// Transport mode of the activator signal.
///
/// The inhibitor is always diffusible; only the activator's signalling
/// and bulk transport vary between modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransportMode {
    /// Freely diffusing activator: each cell senses its own concentration
    /// and the activator Laplacian is applied with `act_diffusion`.
    Soluble,
    /// Membrane-tethered activator: each cell senses the average of its
    /// neighbours (juxtacrine signalling) and no bulk diffusion applies.
    MembraneTethered,
}

impl TransportMode {
    /// Canonical configuration tag for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Soluble => "soluble",
            Self::MembraneTethered => "membrane-tethered",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "soluble" => Ok(Self::Soluble),
            // "juxtacrine" is the historical tag for neighbour-only signalling.
            "membrane-tethered" | "juxtacrine" => Ok(Self::MembraneTethered),
            other => Err(ConfigError::UnknownTransportMode {
                tag: other.to_string(),
            }),
        }
    }
}
