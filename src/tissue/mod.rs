use serde::{Deserialize, Serialize};
use std::fmt;

/// Tissue types with tabulated relaxivity or native T1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tissue {
    Blood,
    Plasma,
    Hepatocytes,
    Liver,
    Kidney,
}

impl Tissue {
    pub const ALL: [Tissue; 5] = [
        Tissue::Blood,
        Tissue::Plasma,
        Tissue::Hepatocytes,
        Tissue::Liver,
        Tissue::Kidney,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tissue::Blood => "blood",
            Tissue::Plasma => "plasma",
            Tissue::Hepatocytes => "hepatocytes",
            Tissue::Liver => "liver",
            Tissue::Kidney => "kidney",
        }
    }

    /// Exact match on the lower-case name
    ///
    /// Returns `None` for anything else; callers decide which lookup failure
    /// that turns into.
    pub fn from_name(name: &str) -> Option<Self> {
        Tissue::ALL.iter().find(|t| t.name() == name).copied()
    }
}

impl fmt::Display for Tissue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Longitudinal (T1) or transverse (T2) relaxivity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RelaxivityType {
    #[default]
    T1,
    T2,
}

impl RelaxivityType {
    pub fn name(&self) -> &'static str {
        match self {
            RelaxivityType::T1 => "T1",
            RelaxivityType::T2 => "T2",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "T1" => Some(RelaxivityType::T1),
            "T2" => Some(RelaxivityType::T2),
            _ => None,
        }
    }
}

impl fmt::Display for RelaxivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
