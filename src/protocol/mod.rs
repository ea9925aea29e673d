//! Injection protocol
//!
//! Tracer-kinetic models describe the injection with a handful of parameters:
//! body weight, agent, dose, injection rate and start time. [`InjectionProtocol`]
//! bundles them and turns them into the influx on a time grid, taking the agent
//! concentration from the agent registry.
//!
//! ```rust
//! use dcmri::agent::Agent;
//! use dcmri::protocol::InjectionProtocol;
//!
//! let protocol = InjectionProtocol::standard(Agent::Gadobutrol)
//!     .unwrap()
//!     .with_rate(2.0)
//!     .with_start(10.0);
//! assert_eq!(protocol.dose, 0.1);
//! assert!((protocol.duration() - 3.5).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::agent::Agent;
use crate::error::{DcmriError, Result};
use crate::signal::influx_step;

/// Parameters of a constant-rate injection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InjectionProtocol {
    /// Subject weight in kg (default: 70)
    pub weight: f64,
    /// Contrast agent (default: gadoxetate)
    pub agent: Agent,
    /// Injected dose in mL/kg (default: standard dose of gadoxetate)
    pub dose: f64,
    /// Injection rate in mL/sec (default: 1)
    pub rate: f64,
    /// Start of the injection in sec (default: 0)
    #[serde(rename = "t0")]
    pub start: f64,
}

impl Default for InjectionProtocol {
    fn default() -> Self {
        Self {
            weight: 70.0,
            agent: Agent::Gadoxetate,
            dose: 0.1,
            rate: 1.0,
            start: 0.0,
        }
    }
}

impl InjectionProtocol {
    /// Protocol with the standard dose of `agent`
    ///
    /// # Errors
    ///
    /// [`DcmriError::UnknownAgent`] if no standard dose is tabulated for `agent`.
    pub fn standard(agent: Agent) -> Result<Self> {
        let dose = agent.standard_dose().ok_or_else(|| DcmriError::UnknownAgent {
            agent: agent.name().to_string(),
            property: "dosage",
        })?;
        Ok(Self {
            agent,
            dose,
            ..Default::default()
        })
    }

    /// Parse a protocol from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_agent(mut self, agent: Agent) -> Self {
        self.agent = agent;
        self
    }

    pub fn with_dose(mut self, dose: f64) -> Self {
        self.dose = dose;
        self
    }

    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    pub fn with_start(mut self, start: f64) -> Self {
        self.start = start;
        self
    }

    /// Injection duration in sec
    pub fn duration(&self) -> f64 {
        crate::signal::injection_duration(self.weight, self.dose, self.rate)
    }

    /// Agent concentration in mmol/mL
    pub fn concentration(&self) -> Result<f64> {
        self.agent
            .concentration()
            .ok_or_else(|| DcmriError::UnknownAgent {
                agent: self.agent.name().to_string(),
                property: "concentration",
            })
    }

    /// Total amount of agent injected, in mmol
    pub fn amount(&self) -> Result<f64> {
        Ok(self.concentration()? * self.weight * self.dose)
    }

    /// Influx in mmol/sec on `times`, see [`influx_step`]
    pub fn flux(&self, times: &[f64]) -> Result<Vec<f64>> {
        influx_step(
            times,
            self.weight,
            self.concentration()?,
            self.dose,
            self.rate,
            self.start,
        )
    }
}
