use crate::config::ConfigError;
use crate::constants::SCALE_FREQUENCIES;

/// Immutable, strictly ascending set of allowed pitches in Hz.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleTable {
    pitches: Vec<f64>,
}

impl Default for ScaleTable {
    fn default() -> Self {
        Self {
            pitches: SCALE_FREQUENCIES.to_vec(),
        }
    }
}

impl ScaleTable {
    pub fn new(pitches: Vec<f64>) -> Result<Self, ConfigError> {
        if pitches.is_empty() {
            return Err(ConfigError::EmptyScale);
        }
        for (index, &value) in pitches.iter().enumerate() {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidPitch { index, value });
            }
            if index > 0 && pitches[index - 1] >= value {
                return Err(ConfigError::UnsortedScale { index });
            }
        }
        Ok(Self { pitches })
    }

    #[inline]
    pub fn pitches(&self) -> &[f64] {
        &self.pitches
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pitches.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pitches.is_empty()
    }

    /// Nearest pitch to `frequency`. Inputs outside the table clamp to the
    /// edge entries; an exact midpoint resolves to the lower neighbour.
    /// NaN maps to the lowest entry.
    pub fn snap(&self, frequency: f64) -> f64 {
        let p = &self.pitches;
        let upper = p.partition_point(|&f| f < frequency);
        if upper == 0 {
            return p[0];
        }
        if upper == p.len() {
            return p[p.len() - 1];
        }
        let (lo, hi) = (p[upper - 1], p[upper]);
        if hi - frequency < frequency - lo {
            hi
        } else {
            lo
        }
    }
}
