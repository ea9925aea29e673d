use thiserror::Error;

/// Errors raised by the lookup tables and signal generators
#[derive(Error, Debug)]
pub enum DcmriError {
    /// The agent is not known, or the requested property is not tabulated for it
    #[error("No {property} data for contrast agent {agent}")]
    UnknownAgent {
        agent: String,
        property: &'static str,
    },

    /// No relaxivity entry for the requested combination
    ///
    /// This is raised regardless of which part of the key missed.
    #[error("No relaxivity data for {agent} at {field_strength} T.")]
    NoRelaxivityData { agent: String, field_strength: f64 },

    /// No native T1 entry for the requested tissue and field strength
    #[error("No T1 values for {tissue} at {field_strength} T.")]
    NoT1Data { tissue: String, field_strength: f64 },

    #[error("Invalid input variables. The time array is empty.")]
    EmptyTimes,

    #[error("Invalid input variables. The injection duration is zero.")]
    ZeroDuration,

    #[error(
        "Invalid input variables. The smallest time step dt ({dt} sec) is larger than the injection duration ({duration} sec). We would recommend dt to be at least 5 times smaller."
    )]
    StepTooCoarse { dt: f64, duration: f64 },

    /// The bolus arrival time was given as a series instead of a scalar
    #[error("BAT must be a scalar, got a series of {len} values")]
    InvalidBat { len: usize },

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DcmriError>;
