use crate::error::{DcmriError, Result};

/// Injection duration in sec for a given body weight (kg), dose (mL/kg) and
/// injection rate (mL/sec)
#[inline]
pub fn injection_duration(weight: f64, dose: f64, rate: f64) -> f64 {
    weight * dose / rate
}

/// Smallest step between consecutive time points
///
/// A single time point has no step, which is reported as infinity.
fn min_step(times: &[f64]) -> f64 {
    times
        .windows(2)
        .map(|w| w[1] - w[0])
        .fold(f64::INFINITY, f64::min)
}

/// Contrast agent flux (mmol/sec) generated by a step injection
///
/// # Arguments
///
/// * `times` - Time points in sec, ascending, not necessarily uniform
/// * `weight` - Subject weight in kg
/// * `concentration` - Agent concentration in mmol/mL
/// * `dose` - Injected dose in mL/kg body weight
/// * `rate` - Injection rate in mL/sec
/// * `injection_start` - Start of the injection in sec
///
/// # Returns
///
/// The flux `concentration * rate` at every time point strictly inside
/// `(injection_start, injection_start + duration)`, and zero elsewhere. Time
/// points that coincide with either end of the injection get zero flux.
///
/// # Errors
///
/// Only checked when `dose > 0`:
/// - [`DcmriError::ZeroDuration`] if the injection duration is zero
/// - [`DcmriError::StepTooCoarse`] if the smallest time step is not shorter than
///   the injection duration
///
/// An empty `times` is always rejected with [`DcmriError::EmptyTimes`].
///
/// # Example
///
/// ```rust
/// use dcmri::signal::influx_step;
///
/// let t: Vec<f64> = (0..14).map(|i| 1.5 * i as f64).collect();
/// let flux = influx_step(&t, 70.0, 0.5, 0.2, 3.0, 5.0).unwrap();
/// assert_eq!(
///     flux,
///     vec![0.0, 0.0, 0.0, 0.0, 1.5, 1.5, 1.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]
/// );
/// ```
pub fn influx_step(
    times: &[f64],
    weight: f64,
    concentration: f64,
    dose: f64,
    rate: f64,
    injection_start: f64,
) -> Result<Vec<f64>> {
    if times.is_empty() {
        return Err(DcmriError::EmptyTimes);
    }

    let duration = injection_duration(weight, dose, rate); // sec = kg * (mL/kg) / (mL/sec)
    let dt = min_step(times);
    tracing::debug!(duration, dt, injection_start, "step injection timing");

    if dose > 0.0 {
        if duration == 0.0 {
            return Err(DcmriError::ZeroDuration);
        }
        if dt >= duration {
            return Err(DcmriError::StepTooCoarse { dt, duration });
        }
    }

    let jmax = concentration * rate; // mmol/sec = (mmol/mL) * (mL/sec)
    let injection_end = injection_start + duration;
    Ok(times
        .iter()
        .map(|&t| {
            if injection_start < t && t < injection_end {
                jmax
            } else {
                0.0
            }
        })
        .collect())
}
