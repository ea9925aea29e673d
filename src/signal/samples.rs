use ndarray::Array1;

/// A scalar or a series of values
///
/// Signal generators that accept either a single time point or a time grid
/// take `impl Into<Samples>` and return the same shape they were given.
#[derive(Debug, Clone, PartialEq)]
pub enum Samples {
    Scalar(f64),
    Series(Array1<f64>),
}

impl Samples {
    pub fn len(&self) -> usize {
        match self {
            Samples::Scalar(_) => 1,
            Samples::Series(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Samples::Scalar(_))
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Samples::Scalar(value) => Some(*value),
            Samples::Series(_) => None,
        }
    }

    pub fn as_series(&self) -> Option<&Array1<f64>> {
        match self {
            Samples::Scalar(_) => None,
            Samples::Series(values) => Some(values),
        }
    }

    /// Apply `f` to every value, keeping the shape
    pub fn map<F>(&self, f: F) -> Samples
    where
        F: Fn(f64) -> f64,
    {
        match self {
            Samples::Scalar(value) => Samples::Scalar(f(*value)),
            Samples::Series(values) => Samples::Series(values.mapv(f)),
        }
    }

    /// The values as a flat vector; a scalar becomes a single element
    pub fn to_vec(&self) -> Vec<f64> {
        match self {
            Samples::Scalar(value) => vec![*value],
            Samples::Series(values) => values.to_vec(),
        }
    }
}

impl From<f64> for Samples {
    fn from(value: f64) -> Self {
        Samples::Scalar(value)
    }
}

impl From<Array1<f64>> for Samples {
    fn from(values: Array1<f64>) -> Self {
        Samples::Series(values)
    }
}

impl From<Vec<f64>> for Samples {
    fn from(values: Vec<f64>) -> Self {
        Samples::Series(Array1::from(values))
    }
}

impl From<&[f64]> for Samples {
    fn from(values: &[f64]) -> Self {
        Samples::Series(Array1::from(values.to_vec()))
    }
}

impl<const N: usize> From<[f64; N]> for Samples {
    fn from(values: [f64; N]) -> Self {
        Samples::Series(Array1::from(values.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_preserves_shape() {
        let scalar = Samples::from(2.0).map(|x| x * 3.0);
        assert_eq!(scalar, Samples::Scalar(6.0));

        let series = Samples::from(vec![1.0, 2.0]).map(|x| x + 1.0);
        assert_eq!(series.to_vec(), vec![2.0, 3.0]);
        assert!(!series.is_scalar());
    }

    #[test]
    fn test_single_element_series_is_not_a_scalar() {
        let one = Samples::from([4.0]);
        assert_eq!(one.len(), 1);
        assert_eq!(one.as_scalar(), None);
        assert!(one.as_series().is_some());
    }

    #[test]
    fn test_empty_series() {
        let empty = Samples::from(Vec::<f64>::new());
        assert!(empty.is_empty());
        assert!(!Samples::from(0.0).is_empty());
    }
}
