//! Built-in orthogonal wavelet families.
//!
//! Low-pass (scaling) filter coefficients, normalized so that `Σh = √2` and
//! `Σh² = 1`. The high-pass filters are derived from these by the filter bank.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// Internal dependencies
use crate::primitives::errors::ShrinkageError;

/// Tolerance on `Σh² = 1` and `Σh = √2` for custom filters.
const FILTER_TOLERANCE: f64 = 1e-6;

/// Built-in orthogonal wavelet family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WaveletFamily {
    /// Haar wavelet (2 taps).
    Haar,

    /// Daubechies wavelet with 2 vanishing moments (4 taps).
    #[default]
    Daubechies4,

    /// Daubechies wavelet with 3 vanishing moments (6 taps).
    Daubechies6,

    /// Daubechies wavelet with 4 vanishing moments (8 taps).
    Daubechies8,

    /// Least-asymmetric Daubechies (Symlet) with 4 vanishing moments (8 taps).
    Symlet8,

    /// Coiflet with 2 vanishing moments (6 taps).
    Coiflet6,
}

impl WaveletFamily {
    /// Every built-in family.
    pub const ALL: [WaveletFamily; 6] = [
        Self::Haar,
        Self::Daubechies4,
        Self::Daubechies6,
        Self::Daubechies8,
        Self::Symlet8,
        Self::Coiflet6,
    ];

    /// Low-pass decomposition filter coefficients.
    pub fn coefficients(&self) -> &'static [f64] {
        match self {
            Self::Haar => &HAAR,
            Self::Daubechies4 => &DAUBECHIES4,
            Self::Daubechies6 => &DAUBECHIES6,
            Self::Daubechies8 => &DAUBECHIES8,
            Self::Symlet8 => &SYMLET8,
            Self::Coiflet6 => &COIFLET6,
        }
    }

    /// Number of filter taps.
    pub fn taps(&self) -> usize {
        self.coefficients().len()
    }

    /// Short conventional name (e.g. `"db4"`).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Haar => "haar",
            Self::Daubechies4 => "db2",
            Self::Daubechies6 => "db3",
            Self::Daubechies8 => "db4",
            Self::Symlet8 => "sym4",
            Self::Coiflet6 => "coif1",
        }
    }
}

// ============================================================================
// Filter Constraints
// ============================================================================

/// Check that custom low-pass coefficients form an orthonormal filter.
///
/// The filter must have an even number (at least 2) of finite taps, unit
/// energy, a sum of `√2`, and be orthogonal to its own even shifts.
pub fn check_filter(coefficients: &[f64]) -> Result<(), ShrinkageError> {
    let l = coefficients.len();
    if l < 2 || !l.is_multiple_of(2) {
        return Err(ShrinkageError::InvalidFilter(format!(
            "filter length {} must be even and at least 2",
            l
        )));
    }

    if let Some(i) = coefficients.iter().position(|c| !c.is_finite()) {
        return Err(ShrinkageError::InvalidFilter(format!(
            "coefficient {} is not finite",
            i
        )));
    }

    let sum: f64 = coefficients.iter().sum();
    let energy: f64 = coefficients.iter().map(|c| c * c).sum();
    if (energy - 1.0).abs() > FILTER_TOLERANCE {
        return Err(ShrinkageError::InvalidFilter(format!(
            "energy {} must be 1",
            energy
        )));
    }
    if (sum - core::f64::consts::SQRT_2).abs() > FILTER_TOLERANCE {
        return Err(ShrinkageError::InvalidFilter(format!(
            "sum {} must be sqrt(2)",
            sum
        )));
    }

    // Orthogonality to even shifts: sum_j h[j] h[j + 2s] = 0.
    for shift in (2..l).step_by(2) {
        let dot: f64 = coefficients
            .iter()
            .zip(coefficients[shift..].iter())
            .map(|(a, b)| a * b)
            .sum();
        if dot.abs() > FILTER_TOLERANCE {
            return Err(ShrinkageError::InvalidFilter(format!(
                "not orthogonal to its shift by {}",
                shift
            )));
        }
    }

    Ok(())
}

// ============================================================================
// Coefficient Tables
// ============================================================================

const HAAR: [f64; 2] = [core::f64::consts::FRAC_1_SQRT_2, core::f64::consts::FRAC_1_SQRT_2];

// (1 ± √3) / 4√2, (3 ± √3) / 4√2
const DAUBECHIES4: [f64; 4] = [
    0.4829629131445341,
    0.8365163037378077,
    0.2241438680420134,
    -0.12940952255126034,
];

const DAUBECHIES6: [f64; 6] = [
    0.33267055295008263,
    0.8068915093110927,
    0.4598775021184915,
    -0.1350110200102546,
    -0.08544127388202666,
    0.035226291885709554,
];

const DAUBECHIES8: [f64; 8] = [
    0.2303778133088965,
    0.7148465705529157,
    0.6308807679298589,
    -0.027983769416859854,
    -0.18703481171909309,
    0.030841381835560764,
    0.0328830116668852,
    -0.010597401785069032,
];

const SYMLET8: [f64; 8] = [
    -0.07576571478927333,
    -0.02963552764599851,
    0.49761866763201545,
    0.8037387518059161,
    0.29785779560527736,
    -0.09921954357684722,
    -0.012603967262037833,
    0.032223100604042702,
];

// √2/32 · (1-√7, 5+√7, 14+2√7, 14-2√7, 1-√7, -3+√7), reversed
const COIFLET6: [f64; 6] = [
    -0.07273261951252646,
    0.3378976624574818,
    0.8525720202116004,
    0.3848648468648578,
    -0.07273261951252646,
    -0.01565572813579199,
];
