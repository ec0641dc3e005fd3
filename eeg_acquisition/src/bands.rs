//! EEG frequency bands and band power

use std::fmt;

use crate::error::{AcquisitionError, Result};
use crate::psd::Psd;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    Delta,
    Theta,
    Alpha,
    Beta,
    Gamma,
}

impl Band {
    pub const ALL: [Band; 5] = [Band::Delta, Band::Theta, Band::Alpha, Band::Beta, Band::Gamma];

    /// Frequency range in Hz, inclusive at both ends
    pub fn range(self) -> (f64, f64) {
        match self {
            Band::Delta => (0.5, 1.5),
            Band::Theta => (4.0, 10.0),
            Band::Alpha => (8.0, 12.0),
            Band::Beta => (13.0, 30.0),
            Band::Gamma => (30.0, 120.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Band::Delta => "Delta",
            Band::Theta => "Theta",
            Band::Alpha => "Alpha",
            Band::Beta => "Beta",
            Band::Gamma => "Gamma",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Trapezoidal integral of the PSD over the bins inside `[low, high]`
pub fn band_power(psd: &Psd, low: f64, high: f64) -> Result<f64> {
    if low.is_nan() || high.is_nan() || low >= high || low < 0.0 {
        return Err(AcquisitionError::InvalidBand {
            low,
            high,
            reason: "need 0 <= low < high",
        });
    }

    let bins: Vec<(f64, f64)> = psd
        .frequencies
        .iter()
        .zip(&psd.amplitudes)
        .filter(|(f, _)| (low..=high).contains(*f))
        .map(|(f, p)| (*f, *p))
        .collect();
    if bins.len() < 2 {
        return Err(AcquisitionError::InvalidBand {
            low,
            high,
            reason: "fewer than two frequency bins in range",
        });
    }

    Ok(bins
        .windows(2)
        .map(|pair| (pair[1].0 - pair[0].0) * (pair[0].1 + pair[1].1) / 2.0)
        .sum())
}

/// Which bands a recorder computes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandSelection {
    pub delta: bool,
    pub theta: bool,
    pub alpha: bool,
    pub beta: bool,
    pub gamma: bool,
}

impl Default for BandSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl BandSelection {
    pub fn all() -> Self {
        Self {
            delta: true,
            theta: true,
            alpha: true,
            beta: true,
            gamma: true,
        }
    }

    pub fn none() -> Self {
        Self {
            delta: false,
            theta: false,
            alpha: false,
            beta: false,
            gamma: false,
        }
    }

    pub fn only(bands: &[Band]) -> Self {
        let mut selection = Self::none();
        for &band in bands {
            selection.set(band, true);
        }
        selection
    }

    pub fn is_enabled(&self, band: Band) -> bool {
        match band {
            Band::Delta => self.delta,
            Band::Theta => self.theta,
            Band::Alpha => self.alpha,
            Band::Beta => self.beta,
            Band::Gamma => self.gamma,
        }
    }

    pub fn set(&mut self, band: Band, enabled: bool) {
        match band {
            Band::Delta => self.delta = enabled,
            Band::Theta => self.theta = enabled,
            Band::Alpha => self.alpha = enabled,
            Band::Beta => self.beta = enabled,
            Band::Gamma => self.gamma = enabled,
        }
    }

    pub fn enabled(&self) -> impl Iterator<Item = Band> + '_ {
        Band::ALL.into_iter().filter(|b| self.is_enabled(*b))
    }
}

/// One value per band; disabled bands stay at zero
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BandMeans([f64; 5]);

impl BandMeans {
    pub fn get(&self, band: Band) -> f64 {
        self.0[band.index()]
    }

    pub fn set(&mut self, band: Band, value: f64) {
        self.0[band.index()] = value;
    }
}

impl fmt::Display for BandMeans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for band in Band::ALL {
            write!(f, "{}: {:.6}\t", band.name(), self.get(band))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::psd::{psd, WindowFunction};
    use std::f64::consts::TAU;

    fn sine_psd(freq: f64) -> Psd {
        let fs = 250.0;
        let data: Vec<f64> = (0..512)
            .map(|i| 10.0 * (TAU * freq * i as f64 / fs).sin())
            .collect();
        psd(&data, fs, WindowFunction::BlackmanHarris).unwrap()
    }

    #[test]
    fn test_sine_power_lands_in_its_band() {
        let spectrum = sine_psd(20.0);
        let power = |band: Band| {
            let (lo, hi) = band.range();
            band_power(&spectrum, lo, hi).unwrap()
        };
        let beta = power(Band::Beta);
        assert!(beta > 40.0, "most of A^2/2 = 50 falls in beta, got {beta}");
        for band in [Band::Delta, Band::Theta, Band::Alpha, Band::Gamma] {
            assert!(power(band) < beta / 100.0, "{band:?} leaked");
        }
    }

    #[test]
    fn test_every_band_resolves_at_512_samples() {
        let spectrum = sine_psd(10.0);
        for band in Band::ALL {
            let (lo, hi) = band.range();
            assert!(band_power(&spectrum, lo, hi).is_ok(), "{band:?}");
        }
    }

    #[test]
    fn test_trapezoid_on_flat_spectrum() {
        let flat = Psd {
            amplitudes: vec![2.0; 11],
            frequencies: (0..11).map(|f| f as f64).collect(),
        };
        assert!((band_power(&flat, 2.0, 6.0).unwrap() - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_ranges() {
        let spectrum = sine_psd(10.0);
        assert!(band_power(&spectrum, 12.0, 8.0).is_err());
        assert!(band_power(&spectrum, 8.0, 8.0).is_err());
        assert!(band_power(&spectrum, 10.0, 10.1).is_err(), "no bins");
        assert!(band_power(&spectrum, 200.0, 300.0).is_err(), "above nyquist");
    }

    #[test]
    fn test_selection() {
        let sel = BandSelection::only(&[Band::Alpha, Band::Gamma]);
        assert!(sel.is_enabled(Band::Alpha) && !sel.is_enabled(Band::Beta));
        assert_eq!(sel.enabled().collect::<Vec<_>>(), vec![Band::Alpha, Band::Gamma]);
        assert_eq!(BandSelection::default().enabled().count(), 5);
    }

    #[test]
    fn test_display_line() {
        let mut means = BandMeans::default();
        means.set(Band::Delta, 1.5);
        means.set(Band::Gamma, 0.25);
        assert_eq!(
            means.to_string(),
            "Delta: 1.500000\tTheta: 0.000000\tAlpha: 0.000000\tBeta: 0.000000\tGamma: 0.250000\t"
        );
    }
}
