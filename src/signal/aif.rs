//! Population arterial input function of Parker et al (2006)
//!
//! Parker GJM, et al. Experimentally-derived functional form for a
//! population-averaged high-temporal-resolution arterial input function for
//! dynamic contrast-enhanced MRI. Magn Reson Med. 2006;56(5):993-1000.
//!
//! The curve is the sum of two Gaussians (first pass and recirculation) and an
//! exponential washout modulated by a sigmoid. Time is in minutes inside the
//! model and the concentration is in mM.

use super::samples::Samples;
use crate::error::{DcmriError, Result};

// First-pass Gaussian: A1 / (SD1 sqrt(2 pi)), mean, SD
const A1: f64 = 5.73258;
const M1: f64 = 0.17046;
const S1: f64 = 0.0563;

// Recirculation Gaussian
const A2: f64 = 0.997356;
const M2: f64 = 0.365;
const S2: f64 = 0.132;

// Washout: alpha exp(-beta t) / (1 + exp(-s (t - tau)))
const ALPHA: f64 = 1.050;
const BETA: f64 = 0.1685;
const S: f64 = 38.078;
const TAU: f64 = 0.483;

/// Parker AIF in M at a single time point
///
/// `t` and `bat` are in sec.
pub fn parker_concentration(t: f64, bat: f64) -> f64 {
    let t_offset = t / 60.0 - bat / 60.0;

    let gaussian1 = A1 * (-1.0 * (t_offset - M1) * (t_offset - M1) / (2.0 * S1 * S1)).exp();
    let gaussian2 = A2 * (-1.0 * (t_offset - M2) * (t_offset - M2) / (2.0 * S2 * S2)).exp();
    let sigmoid = ALPHA * (-BETA * t_offset).exp() / (1.0 + (-S * (t_offset - TAU)).exp());

    (gaussian1 + gaussian2 + sigmoid) / 1000.0 // mM -> M
}

/// Population AIF model as defined by Parker et al (2006)
///
/// # Arguments
///
/// * `times` - Time points in sec, a scalar or a series
/// * `bat` - Bolus arrival time in sec; must be a scalar
///
/// # Returns
///
/// Concentrations in M with the shape of `times`.
///
/// # Errors
///
/// [`DcmriError::InvalidBat`] if `bat` is a series.
///
/// # Example
///
/// ```rust
/// use dcmri::signal::{aif_parker, Samples};
///
/// let t: Vec<f64> = (0..14).map(|i| 1.5 * i as f64).collect();
/// let ca = aif_parker(t, 0.0).unwrap();
/// assert_eq!(ca.len(), 14);
///
/// let c0 = aif_parker(0.0, 0.0).unwrap();
/// assert!(matches!(c0, Samples::Scalar(c) if (c - 8.038467e-5).abs() < 1e-10));
/// ```
pub fn aif_parker(times: impl Into<Samples>, bat: impl Into<Samples>) -> Result<Samples> {
    let bat: Samples = bat.into();
    let bat = match bat {
        Samples::Scalar(bat) => bat,
        Samples::Series(values) => return Err(DcmriError::InvalidBat { len: values.len() }),
    };
    let times: Samples = times.into();
    Ok(times.map(|t| parker_concentration(t, bat)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// First pass of the Parker AIF on a 1.5 sec grid, in mM
    const REFERENCE_MM: [f64; 14] = [
        0.08038467, 0.23977987, 0.63896354, 1.45093969, 2.75255937, 4.32881325, 5.6309778,
        6.06793854, 5.45203828, 4.1540079, 2.79568217, 1.81335784, 1.29063036, 1.08751679,
    ];

    fn grid() -> Vec<f64> {
        (0..14).map(|i| 1.5 * i as f64).collect()
    }

    #[test]
    fn test_reference_first_pass() {
        let ca = aif_parker(grid(), 0.0).unwrap();
        let ca = ca.as_series().unwrap();
        assert_eq!(ca.len(), REFERENCE_MM.len());
        for (c, expected) in ca.iter().zip(REFERENCE_MM.iter()) {
            assert_relative_eq!(1000.0 * c, *expected, max_relative = 1e-6);
        }
    }

    #[test]
    fn test_scalar_in_scalar_out() {
        let c = aif_parker(0.0, 0.0).unwrap();
        assert!(c.is_scalar());
        assert_relative_eq!(c.as_scalar().unwrap(), 8.038467e-5, max_relative = 1e-6);
    }

    #[test]
    fn test_series_bat_is_rejected() {
        let err = aif_parker(grid(), vec![0.0, 1.0]).unwrap_err();
        assert!(matches!(err, DcmriError::InvalidBat { len: 2 }));

        let err = aif_parker(0.0, [5.0]).unwrap_err();
        assert!(matches!(err, DcmriError::InvalidBat { len: 1 }));
    }

    #[test]
    fn test_bat_delays_the_curve() {
        let bat = 12.0;
        for t in grid() {
            assert_relative_eq!(
                parker_concentration(t + bat, bat),
                parker_concentration(t, 0.0),
                max_relative = 1e-9
            );
        }
        let delayed = aif_parker(grid(), 30.0).unwrap().to_vec();
        let undelayed = aif_parker(grid(), 0.0).unwrap().to_vec();
        assert!(delayed[0] < undelayed[0]);
    }

    #[test]
    fn test_peak_is_near_ten_seconds() {
        let t: Vec<f64> = (0..600).map(|i| 0.1 * i as f64).collect();
        let ca = aif_parker(t.clone(), 0.0).unwrap().to_vec();
        let (imax, _) = ca
            .iter()
            .enumerate()
            .fold((0, f64::MIN), |acc, (i, &c)| if c > acc.1 { (i, c) } else { acc });
        assert!(t[imax] > 9.0 && t[imax] < 12.0, "peak at {}", t[imax]);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let a = aif_parker(grid(), 3.0).unwrap();
        let b = aif_parker(grid(), 3.0).unwrap();
        assert_eq!(a, b);
    }
}
