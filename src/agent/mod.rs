//! Contrast agents and their product properties
//!
//! Agents are identified by their generic name in lower case. The concentration
//! and standard dose tables do not cover the same set of agents: some agents are
//! only known through their relaxivity, and not every agent with a tabulated
//! concentration has a tabulated dose. A missing entry is always an error.
//!
//! Sources:
//! - <https://mriquestions.com/so-many-gd-agents.html>
//! - <https://www.bayer.com/sites/default/files/2020-11/primovist-pm-en.pdf>
//! - <https://www.medicines.org.uk/emc/product/2876/smpc#gref>
//!
//! ```rust
//! use dcmri::agent::{concentration, standard_dose};
//!
//! assert_eq!(concentration("gadobutrol").unwrap(), 1.0);
//! assert_eq!(standard_dose("gadobutrol").unwrap(), 0.1);
//! ```

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::{DcmriError, Result};

/// Contrast agent, by generic name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Agent {
    /// Primovist / Eovist
    Gadoxetate,
    /// Gadovist
    Gadobutrol,
    /// Magnevist
    Gadopentetate,
    /// MultiHance
    Gadobenate,
    /// Omniscan
    Gadodiamide,
    /// Dotarem
    Gadoterate,
    /// ProHance
    Gadoteridol,
    /// Elucirem / Vueway
    Gadopiclenol,
    /// Teslascan
    Mangafodipir,
    /// Optimark
    Gadoversetamide,
    /// Resovist
    Ferucarbotran,
    /// Feridex
    Ferumoxide,
}

impl Agent {
    /// Every agent the crate knows by name
    pub const ALL: [Agent; 12] = [
        Agent::Gadoxetate,
        Agent::Gadobutrol,
        Agent::Gadopentetate,
        Agent::Gadobenate,
        Agent::Gadodiamide,
        Agent::Gadoterate,
        Agent::Gadoteridol,
        Agent::Gadopiclenol,
        Agent::Mangafodipir,
        Agent::Gadoversetamide,
        Agent::Ferucarbotran,
        Agent::Ferumoxide,
    ];

    /// Generic name, all lower case
    pub fn name(&self) -> &'static str {
        match self {
            Agent::Gadoxetate => "gadoxetate",
            Agent::Gadobutrol => "gadobutrol",
            Agent::Gadopentetate => "gadopentetate",
            Agent::Gadobenate => "gadobenate",
            Agent::Gadodiamide => "gadodiamide",
            Agent::Gadoterate => "gadoterate",
            Agent::Gadoteridol => "gadoteridol",
            Agent::Gadopiclenol => "gadopiclenol",
            Agent::Mangafodipir => "mangafodipir",
            Agent::Gadoversetamide => "gadoversetamide",
            Agent::Ferucarbotran => "ferucarbotran",
            Agent::Ferumoxide => "ferumoxide",
        }
    }

    /// Concentration of the commercial solution in mmol/mL
    pub fn concentration(&self) -> Option<f64> {
        match self {
            Agent::Gadoxetate => Some(0.25),
            Agent::Gadobutrol => Some(1.0),
            Agent::Gadopentetate
            | Agent::Gadobenate
            | Agent::Gadodiamide
            | Agent::Gadoterate
            | Agent::Gadoteridol
            | Agent::Gadopiclenol => Some(0.5),
            Agent::Mangafodipir
            | Agent::Gadoversetamide
            | Agent::Ferucarbotran
            | Agent::Ferumoxide => None,
        }
    }

    /// Standard injection volume in mL per kg body weight
    pub fn standard_dose(&self) -> Option<f64> {
        match self {
            Agent::Gadoxetate | Agent::Gadobutrol | Agent::Gadopiclenol => Some(0.1),
            Agent::Gadopentetate
            | Agent::Gadobenate
            | Agent::Gadodiamide
            | Agent::Gadoterate
            | Agent::Gadoteridol => Some(0.2),
            Agent::Mangafodipir
            | Agent::Gadoversetamide
            | Agent::Ferucarbotran
            | Agent::Ferumoxide => None,
        }
    }

    fn parse(name: &str, property: &'static str) -> Result<Self> {
        Agent::ALL
            .iter()
            .find(|agent| agent.name() == name)
            .copied()
            .ok_or_else(|| DcmriError::UnknownAgent {
                agent: name.to_string(),
                property,
            })
    }
}

impl FromStr for Agent {
    type Err = DcmriError;

    /// Exact match on the lower-case generic name
    fn from_str(s: &str) -> Result<Self> {
        Agent::parse(s, "registry")
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Contrast agent concentration in mmol/mL
///
/// # Errors
///
/// [`DcmriError::UnknownAgent`] if no concentration is tabulated for `agent`.
pub fn concentration(agent: &str) -> Result<f64> {
    let parsed = Agent::parse(agent, "concentration")?;
    tracing::trace!(agent, "concentration lookup");
    parsed
        .concentration()
        .ok_or_else(|| DcmriError::UnknownAgent {
            agent: agent.to_string(),
            property: "concentration",
        })
}

/// Standard injection volume (dose) in mL per kg body weight
///
/// # Errors
///
/// [`DcmriError::UnknownAgent`] if no dose is tabulated for `agent`.
pub fn standard_dose(agent: &str) -> Result<f64> {
    let parsed = Agent::parse(agent, "dosage")?;
    tracing::trace!(agent, "standard dose lookup");
    parsed
        .standard_dose()
        .ok_or_else(|| DcmriError::UnknownAgent {
            agent: agent.to_string(),
            property: "dosage",
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concentration_values() {
        assert_eq!(concentration("gadoxetate").unwrap(), 0.25);
        assert_eq!(concentration("gadobutrol").unwrap(), 1.0);
        for name in [
            "gadopentetate",
            "gadobenate",
            "gadodiamide",
            "gadoterate",
            "gadoteridol",
            "gadopiclenol",
        ] {
            assert_eq!(concentration(name).unwrap(), 0.5, "{}", name);
        }
    }

    #[test]
    fn test_standard_dose_values() {
        assert_eq!(standard_dose("gadoxetate").unwrap(), 0.1);
        assert_eq!(standard_dose("gadobutrol").unwrap(), 0.1);
        assert_eq!(standard_dose("gadopiclenol").unwrap(), 0.1);
        for name in [
            "gadopentetate",
            "gadobenate",
            "gadodiamide",
            "gadoterate",
            "gadoteridol",
        ] {
            assert_eq!(standard_dose(name).unwrap(), 0.2, "{}", name);
        }
    }

    #[test]
    fn test_every_tabulated_concentration_is_positive() {
        for agent in Agent::ALL {
            if let Some(c) = agent.concentration() {
                assert!(c > 0.0, "{}", agent);
            }
        }
    }

    #[test]
    fn test_unknown_agent_carries_identifier() {
        match concentration("Gadobutrol") {
            Err(DcmriError::UnknownAgent { agent, property }) => {
                assert_eq!(agent, "Gadobutrol");
                assert_eq!(property, "concentration");
            }
            other => panic!("expected UnknownAgent, got {:?}", other),
        }
        assert!(standard_dose("gado").is_err());
        assert!(concentration(" gadobutrol").is_err());
    }

    #[test]
    fn test_relaxivity_only_agents_have_no_product_data() {
        let err = concentration("mangafodipir").unwrap_err();
        assert_eq!(
            err.to_string(),
            "No concentration data for contrast agent mangafodipir"
        );
        let err = standard_dose("ferumoxide").unwrap_err();
        assert_eq!(err.to_string(), "No dosage data for contrast agent ferumoxide");
    }

    #[test]
    fn test_name_round_trips_through_from_str() {
        for agent in Agent::ALL {
            assert_eq!(agent.name().parse::<Agent>().unwrap(), agent);
        }
    }

    #[test]
    fn test_serde_uses_lower_case_names() {
        let json = serde_json::to_string(&Agent::Gadoxetate).unwrap();
        assert_eq!(json, "\"gadoxetate\"");
        let agent: Agent = serde_json::from_str("\"gadopiclenol\"").unwrap();
        assert_eq!(agent, Agent::Gadopiclenol);
    }
}
