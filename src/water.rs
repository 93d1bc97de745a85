use crate::Axis;

/// Units of trapped water produced by one counting pass.
///
/// Under [`Axis::Primary`] there is one entry per profile index; under
/// [`Axis::Secondary`] one entry per height level. Only [`WaterCounts::total`]
/// is comparable across the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaterCounts {
    axis: Axis,
    units: Vec<u64>,
}

impl WaterCounts {
    pub fn new(axis: Axis, units: Vec<u64>) -> Self {
        WaterCounts { axis, units }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn units(&self) -> &[u64] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.units.iter().sum()
    }
}

/// Formats `value` with a comma between every group of three digits.
pub fn with_thousands_separators(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl std::fmt::Display for WaterCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", with_thousands_separators(self.total()))
    }
}
