//! Labeled series data

/// A labeled numeric value to be plotted.
///
/// Values are finite by caller contract; the renderers do not re-validate
/// NaN/Infinity on the draw path.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub label: String,
    pub value: f32,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: f32) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Largest value in the series, or `None` when empty.
pub fn max_value(data: &[DataPoint]) -> Option<f32> {
    data.iter().map(|d| d.value).reduce(f32::max)
}

/// Sum of all values.
pub fn total(data: &[DataPoint]) -> f32 {
    data.iter().map(|d| d.value).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_value_handles_empty() {
        assert_eq!(max_value(&[]), None);
        let data = vec![DataPoint::new("a", 3.0), DataPoint::new("b", 7.0)];
        assert_eq!(max_value(&data), Some(7.0));
    }

    #[test]
    fn total_sums_values() {
        let data = vec![DataPoint::new("a", 1.5), DataPoint::new("b", 2.5)];
        assert_eq!(total(&data), 4.0);
    }
}
