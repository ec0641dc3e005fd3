//! Power spectral density
//!
//! One-sided periodogram of a windowed signal. Power-of-two lengths use a
//! radix-2 FFT, other even lengths a direct DFT.

use std::f64::consts::{PI, TAU};

use crate::error::{AcquisitionError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowFunction {
    None = 0,
    Hanning = 1,
    Hamming = 2,
    #[default]
    BlackmanHarris = 3,
}

impl WindowFunction {
    pub fn from_raw(id: i32) -> Option<Self> {
        match id {
            0 => Some(WindowFunction::None),
            1 => Some(WindowFunction::Hanning),
            2 => Some(WindowFunction::Hamming),
            3 => Some(WindowFunction::BlackmanHarris),
            _ => None,
        }
    }

    /// Window of length `n` (n >= 2)
    pub fn coefficients(self, n: usize) -> Vec<f64> {
        let m = (n - 1) as f64;
        (0..n)
            .map(|i| {
                let x = TAU * i as f64 / m;
                match self {
                    WindowFunction::None => 1.0,
                    WindowFunction::Hanning => 0.5 - 0.5 * x.cos(),
                    WindowFunction::Hamming => 0.54 - 0.46 * x.cos(),
                    WindowFunction::BlackmanHarris => {
                        0.35875 - 0.48829 * x.cos() + 0.14128 * (2.0 * x).cos()
                            - 0.01168 * (3.0 * x).cos()
                    }
                }
            })
            .collect()
    }
}

/// Power per frequency bin, from 0 Hz to Nyquist
#[derive(Debug, Clone, PartialEq)]
pub struct Psd {
    pub amplitudes: Vec<f64>,
    pub frequencies: Vec<f64>,
}

impl Psd {
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// Spacing between adjacent bins in Hz
    pub fn resolution(&self) -> f64 {
        match self.frequencies.as_slice() {
            [a, b, ..] => b - a,
            _ => 0.0,
        }
    }
}

pub fn psd(data: &[f64], sampling_rate: f64, window: WindowFunction) -> Result<Psd> {
    let n = data.len();
    if n < 2 || n % 2 != 0 {
        return Err(AcquisitionError::InvalidPsdInput(format!(
            "length must be even and at least 2, got {n}"
        )));
    }
    if sampling_rate.is_nan() || sampling_rate <= 0.0 {
        return Err(AcquisitionError::InvalidPsdInput(format!(
            "sampling rate must be positive, got {sampling_rate}"
        )));
    }

    let w = window.coefficients(n);
    let scale = sampling_rate * w.iter().map(|c| c * c).sum::<f64>();
    let windowed: Vec<f64> = data.iter().zip(&w).map(|(x, c)| x * c).collect();

    let bins = n / 2 + 1;
    let spectrum = if n.is_power_of_two() {
        fft(&windowed)
    } else {
        dft(&windowed, bins)
    };

    let amplitudes = spectrum[..bins]
        .iter()
        .enumerate()
        .map(|(k, (re, im))| {
            let p = (re * re + im * im) / scale;
            // fold negative frequencies, except DC and Nyquist
            if k == 0 || k == n / 2 {
                p
            } else {
                2.0 * p
            }
        })
        .collect();
    let frequencies = (0..bins)
        .map(|k| k as f64 * sampling_rate / n as f64)
        .collect();

    Ok(Psd {
        amplitudes,
        frequencies,
    })
}

fn fft(input: &[f64]) -> Vec<(f64, f64)> {
    let n = input.len();
    let bits = n.trailing_zeros();
    let mut buf = vec![(0.0, 0.0); n];
    for (i, &v) in input.iter().enumerate() {
        let j = i.reverse_bits() >> (usize::BITS - bits);
        buf[j] = (v, 0.0);
    }

    let mut len = 2;
    while len <= n {
        let half = len / 2;
        let step = -2.0 * PI / len as f64;
        for start in (0..n).step_by(len) {
            for k in 0..half {
                let (s, c) = (step * k as f64).sin_cos();
                let (ar, ai) = buf[start + k];
                let (br, bi) = buf[start + k + half];
                let tr = br * c - bi * s;
                let ti = br * s + bi * c;
                buf[start + k] = (ar + tr, ai + ti);
                buf[start + k + half] = (ar - tr, ai - ti);
            }
        }
        len <<= 1;
    }
    buf
}

fn dft(input: &[f64], bins: usize) -> Vec<(f64, f64)> {
    let n = input.len() as f64;
    (0..bins)
        .map(|k| {
            input.iter().enumerate().fold((0.0, 0.0), |(re, im), (j, x)| {
                let angle = -TAU * k as f64 * j as f64 / n;
                (re + x * angle.cos(), im + x * angle.sin())
            })
        })
        .collect()
}
