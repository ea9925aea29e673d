//! Reference data and input signals for dynamic contrast-enhanced MRI
//!
//! - [`agent`]: contrast agent concentration and standard dose
//! - [`tables`]: relaxivity and native T1 by field strength
//! - [`signal`]: step-injection influx and the Parker population AIF
//! - [`protocol`]: injection parameters as a single configuration value
//!
//! Everything here is a pure function over static tables, safe to call from
//! any thread.

pub mod agent;
pub mod error;
pub mod protocol;
pub mod signal;
pub mod tables;
pub mod tissue;

pub use crate::agent::{concentration, standard_dose, Agent};
pub use crate::protocol::InjectionProtocol;
pub use crate::signal::{aif_parker, influx_step, Samples};
pub use crate::tables::{precontrast_r1, relaxivity, t1, RelaxivityQuery, DEFAULT_HEMATOCRIT};
pub use crate::tissue::{RelaxivityType, Tissue};
pub use error::DcmriError;

pub mod prelude {
    pub mod lookup {
        pub use crate::agent::{concentration, standard_dose, Agent};
        pub use crate::tables::{
            precontrast_r1, relaxivity, relaxivity_of, t1, t1_of, RelaxivityQuery,
            DEFAULT_HEMATOCRIT,
        };
        pub use crate::tissue::{RelaxivityType, Tissue};
    }
    pub mod signal {
        pub use crate::signal::{
            aif_parker, influx_step, injection_duration, parker_concentration, Samples,
        };
    }

    pub use crate::error::{DcmriError, Result};
    pub use crate::protocol::InjectionProtocol;
    pub use crate::Agent;
}
