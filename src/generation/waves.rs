//! Periodic shapes superimposed on noise for the sentiment series
//!
//! Each affiliation's daily value is `noise * draw + offset + amplitude *
//! wave(day_offset / period)` with `draw` uniform in [0, 1). The periodic term
//! makes the series look like it trends even though it carries no signal.

/// Periodic component of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveShape {
    Sine,
    Cosine,
}

impl WaveShape {
    fn evaluate(self, x: f64) -> f64 {
        match self {
            Self::Sine => x.sin(),
            Self::Cosine => x.cos(),
        }
    }
}

/// Parameters for one affiliation's daily sentiment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesWave {
    pub noise: f64,
    pub offset: f64,
    pub shape: WaveShape,
    pub period: f64,
    pub amplitude: f64,
}

impl SeriesWave {
    /// Unrounded value for a uniform `draw` at `day_offset` days before today
    pub fn sample(&self, draw: f64, day_offset: f64) -> f64 {
        let wave = self.shape.evaluate(day_offset / self.period) * self.amplitude;
        draw * self.noise + self.offset + wave
    }
}

pub const DEMOCRAT: SeriesWave = SeriesWave {
    noise: 0.5,
    offset: 0.1,
    shape: WaveShape::Sine,
    period: 5.0,
    amplitude: 0.3,
};

pub const REPUBLICAN: SeriesWave = SeriesWave {
    noise: 0.5,
    offset: -0.1,
    shape: WaveShape::Cosine,
    period: 5.0,
    amplitude: 0.3,
};

pub const INDEPENDENT: SeriesWave = SeriesWave {
    noise: 0.3,
    offset: -0.15,
    shape: WaveShape::Sine,
    period: 3.0,
    amplitude: 0.15,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_at_day_zero() {
        // sin(0) = 0, cos(0) = 1
        assert!((DEMOCRAT.sample(0.0, 0.0) - 0.1).abs() < 1e-12);
        assert!((REPUBLICAN.sample(0.0, 0.0) - 0.2).abs() < 1e-12);
        assert!((INDEPENDENT.sample(1.0, 0.0) - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_sample_follows_period() {
        let x = 7.0;
        let expected = 0.5 * 0.5 + 0.1 + (x / 5.0_f64).sin() * 0.3;
        assert!((DEMOCRAT.sample(0.5, x) - expected).abs() < 1e-12);

        let expected = 0.25 * 0.3 - 0.15 + (x / 3.0_f64).sin() * 0.15;
        assert!((INDEPENDENT.sample(0.25, x) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_sample_bounds() {
        // Nothing clamps the series; the shipped parameters stay within [-0.4, 0.9].
        for wave in [DEMOCRAT, REPUBLICAN, INDEPENDENT] {
            for day in 0..=365 {
                for draw in [0.0, 0.999_999] {
                    let value = wave.sample(draw, f64::from(day));
                    assert!((-0.4..=0.9).contains(&value), "{value}");
                }
            }
        }
    }
}
