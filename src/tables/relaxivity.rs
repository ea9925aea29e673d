//! Contrast agent relaxivity by field strength, tissue and agent
//!
//! Values are stored in Hz/mM, as published, and returned in Hz/M.
//!
//! Sources:
//! - Rohrer M, et al. Comparison of magnetic properties of MRI contrast media
//!   solutions at different magnetic field strengths. Invest Radiol. 2005;40(11):715-724.
//! - Szomolanyi P, et al. Comparison of the Relaxivities of Macrocyclic
//!   Gadolinium-Based Contrast Agents in Human Plasma at 1.5, 3, and 7 T, and
//!   Blood at 3 T. Invest Radiol. 2019;54(9):559-564.
//!
//! The MultiHance plasma row is keyed `gadobenade` in the reference data, which
//! is not the name used by the agent registry (`gadobenate`). The key is kept
//! as published.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::field_key;
use crate::error::{DcmriError, Result};
use crate::tissue::{RelaxivityType, Tissue};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct RelaxivityKey<'a> {
    kind: RelaxivityType,
    tissue: Tissue,
    agent: &'a str,
    field: i64,
}

/// (agent, [(field strength in T, relaxivity in Hz/mM)])
type Row = (&'static str, &'static [(f64, f64)]);

const T1_PLASMA: &[Row] = &[
    ("gadopentetate", &[(0.4, 3.8), (1.5, 4.1), (3.0, 3.7), (4.0, 3.8)]),
    ("gadobutrol", &[(0.4, 6.1), (1.5, 5.2), (3.0, 5.0), (4.0, 4.7)]),
    ("gadoteridol", &[(0.4, 4.8), (1.5, 4.1), (3.0, 3.7), (4.0, 3.7)]),
    ("gadobenade", &[(0.4, 9.2), (1.5, 6.3), (3.0, 5.5), (4.0, 5.2)]),
    ("gadoterate", &[(0.4, 4.3), (1.5, 3.6), (3.0, 3.5), (4.0, 3.3)]),
    ("gadodiamide", &[(0.4, 4.4), (1.5, 4.3), (3.0, 4.0), (4.0, 3.9)]),
    ("mangafodipir", &[(0.4, 3.6), (1.5, 3.6), (3.0, 2.7), (4.0, 2.2)]),
    ("gadoversetamide", &[(0.4, 5.7), (1.5, 4.7), (3.0, 4.5), (4.0, 4.4)]),
    ("ferucarbotran", &[(0.4, 15.0), (1.5, 7.4), (3.0, 3.3), (4.0, 1.7)]),
    ("ferumoxide", &[(1.5, 4.5), (3.0, 2.7), (4.0, 1.2)]),
    (
        "gadoxetate",
        &[
            (0.4, 8.7),
            (1.5, 8.1),
            (3.0, 6.4),
            (4.0, 6.4),
            (7.0, 6.2),
            (9.0, 6.1),
        ],
    ),
];

const T1_HEPATOCYTES: &[Row] = &[(
    "gadoxetate",
    &[(1.5, 14.6), (3.0, 9.8), (4.0, 7.6), (7.0, 6.0), (9.0, 6.1)],
)];

fn insert_rows(
    table: &mut HashMap<RelaxivityKey<'static>, f64>,
    kind: RelaxivityType,
    tissue: Tissue,
    rows: &[Row],
) {
    for &(agent, values) in rows {
        for &(field_strength, value) in values.iter() {
            if let Some(field) = field_key(field_strength) {
                table.insert(
                    RelaxivityKey {
                        kind,
                        tissue,
                        agent,
                        field,
                    },
                    value,
                );
            }
        }
    }
}

lazy_static! {
    // No T2 rows are tabulated.
    static ref RELAXIVITY: HashMap<RelaxivityKey<'static>, f64> = {
        let mut table = HashMap::new();
        insert_rows(&mut table, RelaxivityType::T1, Tissue::Plasma, T1_PLASMA);
        insert_rows(&mut table, RelaxivityType::T1, Tissue::Hepatocytes, T1_HEPATOCYTES);
        table
    };
}

/// Relaxivity in Hz/M for already-parsed tissue and relaxivity type
///
/// The agent is matched against the table keys exactly as written.
pub fn relaxivity_of(
    field_strength: f64,
    tissue: Tissue,
    agent: &str,
    kind: RelaxivityType,
) -> Result<f64> {
    let miss = || DcmriError::NoRelaxivityData {
        agent: agent.to_string(),
        field_strength,
    };
    let field = field_key(field_strength).ok_or_else(miss)?;
    let table: &HashMap<RelaxivityKey<'_>, f64> = &*RELAXIVITY;
    table
        .get(&RelaxivityKey {
            kind,
            tissue,
            agent,
            field,
        })
        .map(|value| 1000.0 * value)
        .ok_or_else(miss)
}

/// Contrast agent relaxivity in Hz/M
///
/// `field_strength` is floored to whole tesla before the lookup. `tissue` is
/// one of `"plasma"` or `"hepatocytes"`, `relaxivity_type` one of `"T1"` or
/// `"T2"`.
///
/// # Errors
///
/// [`DcmriError::NoRelaxivityData`] for any combination that is not tabulated,
/// including unrecognised tissue or relaxivity type names.
///
/// ```rust
/// use dcmri::tables::relaxivity;
///
/// let r1 = relaxivity(3.0, "plasma", "gadobutrol", "T1").unwrap();
/// assert_eq!(r1, 5000.0);
/// ```
pub fn relaxivity(
    field_strength: f64,
    tissue: &str,
    agent: &str,
    relaxivity_type: &str,
) -> Result<f64> {
    let miss = || DcmriError::NoRelaxivityData {
        agent: agent.to_string(),
        field_strength,
    };
    let tissue = Tissue::from_name(tissue).ok_or_else(miss)?;
    let kind = RelaxivityType::from_name(relaxivity_type).ok_or_else(miss)?;
    tracing::trace!(field_strength, %tissue, agent, %kind, "relaxivity lookup");
    relaxivity_of(field_strength, tissue, agent, kind)
}

/// A relaxivity lookup with the customary defaults
///
/// Defaults to T1 relaxivity of gadoxetate in plasma at 3 T.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelaxivityQuery {
    /// Field strength in T
    pub field_strength: f64,
    pub tissue: Tissue,
    /// Agent name as keyed in the table
    pub agent: String,
    #[serde(rename = "type")]
    pub kind: RelaxivityType,
}

impl Default for RelaxivityQuery {
    fn default() -> Self {
        Self {
            field_strength: 3.0,
            tissue: Tissue::Plasma,
            agent: "gadoxetate".to_string(),
            kind: RelaxivityType::T1,
        }
    }
}

impl RelaxivityQuery {
    pub fn with_field_strength(mut self, field_strength: f64) -> Self {
        self.field_strength = field_strength;
        self
    }

    pub fn with_tissue(mut self, tissue: Tissue) -> Self {
        self.tissue = tissue;
        self
    }

    pub fn with_agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = agent.into();
        self
    }

    pub fn with_type(mut self, kind: RelaxivityType) -> Self {
        self.kind = kind;
        self
    }

    /// Relaxivity in Hz/M
    pub fn lookup(&self) -> Result<f64> {
        relaxivity_of(self.field_strength, self.tissue, &self.agent, self.kind)
    }
}
