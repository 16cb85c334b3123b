//! Dirichlet and Symmetric Dirichlet distributions over simplexes
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::impl_display;
use crate::misc::{ln_gammafn, vec_to_string};
use crate::traits::*;
use special::Gamma as _;
use std::fmt;

mod categorical_prior;

/// Symmetric [Dirichlet distribution](https://en.wikipedia.org/wiki/Dirichlet_distribution)
/// where all alphas are the same.
///
/// `SymmetricDirichlet { alpha, k }` is mathematically equivalent to
/// `Dirichlet { alphas: vec![alpha; k] }`. This version has some extra
/// optimizations to speed up computing the PDF.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct SymmetricDirichlet {
    alpha: f64,
    k: usize,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub enum SymmetricDirichletError {
    /// k parameter is zero
    KIsZero,
    /// alpha parameter(s) is less than or equal to zero
    AlphaTooLow { alpha: f64 },
    /// alpha parameter(s) is infinite or NaN
    AlphaNotFinite { alpha: f64 },
}

impl SymmetricDirichlet {
    /// Create a new symmetric Dirichlet distribution
    ///
    /// # Arguments
    /// - alpha: The Dirichlet weight.
    /// - k : The number of weights. `alpha` will be replicated `k` times.
    pub fn new(alpha: f64, k: usize) -> Result<Self, SymmetricDirichletError> {
        if k == 0 {
            Err(SymmetricDirichletError::KIsZero)
        } else if alpha <= 0.0 {
            Err(SymmetricDirichletError::AlphaTooLow { alpha })
        } else if !alpha.is_finite() {
            Err(SymmetricDirichletError::AlphaNotFinite { alpha })
        } else {
            Ok(SymmetricDirichlet { alpha, k })
        }
    }

    /// Create a new SymmetricDirichlet without checking whether the
    /// parameters are valid.
    pub fn new_unchecked(alpha: f64, k: usize) -> Self {
        SymmetricDirichlet { alpha, k }
    }

    /// The Jeffreys Dirichlet prior for Categorical distributions
    ///
    /// # Example
    ///
    /// ```rust
    /// # use dircat::dist::SymmetricDirichlet;
    /// let symdir = SymmetricDirichlet::jeffreys(4).unwrap();
    /// assert_eq!(symdir, SymmetricDirichlet::new(0.5, 4).unwrap());
    /// ```
    pub fn jeffreys(k: usize) -> Result<Self, SymmetricDirichletError> {
        if k == 0 {
            Err(SymmetricDirichletError::KIsZero)
        } else {
            Ok(SymmetricDirichlet { alpha: 0.5, k })
        }
    }

    /// Get the alpha uniform weight parameter
    ///
    /// # Example
    ///
    /// ```rust
    /// # use dircat::dist::SymmetricDirichlet;
    /// let symdir = SymmetricDirichlet::new(1.2, 5).unwrap();
    /// assert_eq!(symdir.alpha(), 1.2);
    /// ```
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Set the value of alpha
    ///
    /// # Example
    /// ```rust
    /// # use dircat::dist::SymmetricDirichlet;
    /// let mut symdir = SymmetricDirichlet::new(1.1, 5).unwrap();
    /// assert_eq!(symdir.alpha(), 1.1);
    ///
    /// symdir.set_alpha(2.3).unwrap();
    /// assert_eq!(symdir.alpha(), 2.3);
    /// ```
    ///
    /// Will error for invalid parameters
    ///
    /// ```rust
    /// # use dircat::dist::SymmetricDirichlet;
    /// # let mut symdir = SymmetricDirichlet::new(1.1, 5).unwrap();
    /// assert!(symdir.set_alpha(0.5).is_ok());
    /// assert!(symdir.set_alpha(0.0).is_err());
    /// assert!(symdir.set_alpha(-1.0).is_err());
    /// assert!(symdir.set_alpha(f64::INFINITY).is_err());
    /// assert!(symdir.set_alpha(f64::NEG_INFINITY).is_err());
    /// assert!(symdir.set_alpha(f64::NAN).is_err());
    /// ```
    pub fn set_alpha(
        &mut self,
        alpha: f64,
    ) -> Result<(), SymmetricDirichletError> {
        if alpha <= 0.0 {
            Err(SymmetricDirichletError::AlphaTooLow { alpha })
        } else if !alpha.is_finite() {
            Err(SymmetricDirichletError::AlphaNotFinite { alpha })
        } else {
            self.set_alpha_unchecked(alpha);
            Ok(())
        }
    }

    /// Set the value of alpha without input validation
    #[inline]
    pub fn set_alpha_unchecked(&mut self, alpha: f64) {
        self.alpha = alpha;
    }

    /// Get the number of weights, k
    ///
    /// # Example
    ///
    /// ```rust
    /// # use dircat::dist::SymmetricDirichlet;
    /// let symdir = SymmetricDirichlet::new(1.2, 5).unwrap();
    /// assert_eq!(symdir.k(), 5);
    /// ```
    pub fn k(&self) -> usize {
        self.k
    }
}

impl From<&SymmetricDirichlet> for String {
    fn from(symdir: &SymmetricDirichlet) -> String {
        format!("SymmetricDirichlet({}; α: {})", symdir.k, symdir.alpha)
    }
}

impl_display!(SymmetricDirichlet);

impl HasDensity<Vec<f64>> for SymmetricDirichlet {
    fn ln_f(&self, x: &Vec<f64>) -> f64 {
        let kf = self.k as f64;
        let sum_ln_gamma = ln_gammafn(self.alpha) * kf;
        let ln_gamma_sum = ln_gammafn(self.alpha * kf);

        let am1 = self.alpha - 1.0;
        let term = x.iter().fold(0.0, |acc, &xi| acc + am1 * xi.ln());

        term - (sum_ln_gamma - ln_gamma_sum)
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub enum DirichletError {
    /// k parameter is zero
    KIsZero,
    /// alpha vector is empty
    AlphasEmpty,
    /// alphas parameter has one or more entries less than or equal to zero
    AlphaTooLow { ix: usize, alpha: f64 },
    /// alphas parameter has one or more infinite or NaN entries
    AlphaNotFinite { ix: usize, alpha: f64 },
}

/// [Dirichlet distribution](https://en.wikipedia.org/wiki/Dirichlet_distribution)
/// over points on the k-simplex.
///
/// The distribution is immutable once constructed: the alphas are validated
/// in `new` and never mutated.
///
/// # Example
///
/// ```
/// use dircat::dist::Dirichlet;
/// use dircat::traits::{ContinuousDistr, Mean};
///
/// let dir = Dirichlet::new(vec![2.0, 3.0, 5.0]).unwrap();
///
/// let mean: Vec<f64> = dir.mean().unwrap();
/// assert::close(mean[2], 0.5, 1E-12);
///
/// // With all alphas > 1, the density is unimodal and peaks at the mean,
/// // so points near a corner of the simplex have lower density.
/// assert!(dir.ln_pdf(&mean) > dir.ln_pdf(&vec![0.01, 0.01, 0.98]));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Dirichlet {
    /// A `Vec` of real numbers in (0, ∞)
    alphas: Vec<f64>,
}

impl From<SymmetricDirichlet> for Dirichlet {
    fn from(symdir: SymmetricDirichlet) -> Self {
        Dirichlet::new_unchecked(vec![symdir.alpha; symdir.k])
    }
}

impl From<&SymmetricDirichlet> for Dirichlet {
    fn from(symdir: &SymmetricDirichlet) -> Self {
        Dirichlet::new_unchecked(vec![symdir.alpha; symdir.k])
    }
}

impl Dirichlet {
    /// Creates a `Dirichlet` with a given `alphas` vector
    pub fn new(alphas: Vec<f64>) -> Result<Self, DirichletError> {
        if alphas.is_empty() {
            return Err(DirichletError::AlphasEmpty);
        }

        alphas.iter().enumerate().try_for_each(|(ix, &alpha)| {
            if alpha <= 0.0 {
                Err(DirichletError::AlphaTooLow { ix, alpha })
            } else if !alpha.is_finite() {
                Err(DirichletError::AlphaNotFinite { ix, alpha })
            } else {
                Ok(())
            }
        })?;

        Ok(Dirichlet { alphas })
    }

    /// Creates a new Dirichlet without checking whether the parameters are
    /// valid.
    pub fn new_unchecked(alphas: Vec<f64>) -> Self {
        Dirichlet { alphas }
    }

    /// Creates a `Dirichlet` where all alphas are identical.
    ///
    /// # Notes
    ///
    /// `SymmetricDirichlet` is faster and more compact, and is the preferred
    /// way to represent a Dirichlet with symmetric weights.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dircat::dist::{Dirichlet, SymmetricDirichlet};
    /// # use dircat::traits::HasDensity;
    /// let dir = Dirichlet::symmetric(1.0, 4).unwrap();
    /// assert_eq!(*dir.alphas(), vec![1.0, 1.0, 1.0, 1.0]);
    ///
    /// // Equivalent to SymmetricDirichlet
    /// let symdir = SymmetricDirichlet::new(1.0, 4).unwrap();
    /// let x: Vec<f64> = vec![0.1, 0.4, 0.3, 0.2];
    /// assert::close(dir.ln_f(&x), symdir.ln_f(&x), 1E-12);
    /// ```
    pub fn symmetric(alpha: f64, k: usize) -> Result<Self, DirichletError> {
        if k == 0 {
            Err(DirichletError::KIsZero)
        } else if alpha <= 0.0 {
            Err(DirichletError::AlphaTooLow { ix: 0, alpha })
        } else if !alpha.is_finite() {
            Err(DirichletError::AlphaNotFinite { ix: 0, alpha })
        } else {
            Ok(Dirichlet {
                alphas: vec![alpha; k],
            })
        }
    }

    /// Creates a `Dirichlet` with all alphas = 0.5 (Jeffreys prior)
    ///
    /// # Notes
    ///
    /// `SymmetricDirichlet` is faster and more compact, and is the preferred
    /// way to represent a Dirichlet with symmetric weights.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dircat::dist::Dirichlet;
    /// # use dircat::dist::SymmetricDirichlet;
    /// # use dircat::traits::HasDensity;
    /// let dir = Dirichlet::jeffreys(3).unwrap();
    /// assert_eq!(*dir.alphas(), vec![0.5, 0.5, 0.5]);
    ///
    /// // Equivalent to SymmetricDirichlet::jeffreys
    /// let symdir = SymmetricDirichlet::jeffreys(3).unwrap();
    /// let x: Vec<f64> = vec![0.1, 0.4, 0.5];
    /// assert::close(dir.ln_f(&x), symdir.ln_f(&x), 1E-12);
    /// ```
    pub fn jeffreys(k: usize) -> Result<Self, DirichletError> {
        if k == 0 {
            Err(DirichletError::KIsZero)
        } else {
            Ok(Dirichlet::new_unchecked(vec![0.5; k]))
        }
    }

    /// The length of `alphas` / the number of categories
    pub fn k(&self) -> usize {
        self.alphas.len()
    }

    /// Get a reference to the weights vector, `alphas`
    pub fn alphas(&self) -> &Vec<f64> {
        &self.alphas
    }

    /// The sum of `alphas`
    #[inline]
    fn alpha_sum(&self) -> f64 {
        self.alphas.iter().fold(0.0, |acc, &a| acc + a)
    }
}

impl From<&Dirichlet> for String {
    fn from(dir: &Dirichlet) -> String {
        format!("Dir(α: {})", vec_to_string(&dir.alphas, 5))
    }
}

impl_display!(Dirichlet);

impl HasDensity<Vec<f64>> for Dirichlet {
    /// Log density at `x`.
    ///
    /// The input is not validated. For points off the open simplex the
    /// result is degenerate (`-inf` at a corner when all alphas are greater
    /// than 1). Use `ln_pdf` for checked evaluation.
    fn ln_f(&self, x: &Vec<f64>) -> f64 {
        let sum_ln_gamma: f64 = self
            .alphas
            .iter()
            .fold(0.0, |acc, &alpha| acc + ln_gammafn(alpha));

        let ln_gamma_sum: f64 = ln_gammafn(self.alpha_sum());

        let term = x
            .iter()
            .zip(self.alphas.iter())
            .fold(0.0, |acc, (&xi, &alpha)| acc + (alpha - 1.0) * xi.ln());

        term - (sum_ln_gamma - ln_gamma_sum)
    }
}

impl ContinuousDistr<Vec<f64>> for SymmetricDirichlet {}

impl Support<Vec<f64>> for SymmetricDirichlet {
    fn supports(&self, x: &Vec<f64>) -> bool {
        if x.len() != self.k {
            false
        } else {
            let sum = x.iter().fold(0.0, |acc, &xi| acc + xi);
            x.iter().all(|&xi| xi > 0.0) && (1.0 - sum).abs() < 1E-12
        }
    }
}

impl Mean<Vec<f64>> for SymmetricDirichlet {
    fn mean(&self) -> Option<Vec<f64>> {
        Some(vec![(self.k as f64).recip(); self.k])
    }
}

impl Variance<Vec<f64>> for SymmetricDirichlet {
    fn variance(&self) -> Option<Vec<f64>> {
        let alpha_sum = self.alpha * self.k as f64;
        let var = self.alpha * (alpha_sum - self.alpha)
            / (alpha_sum * alpha_sum * (alpha_sum + 1.0));
        Some(vec![var; self.k])
    }
}

impl Mode<Vec<f64>> for SymmetricDirichlet {
    fn mode(&self) -> Option<Vec<f64>> {
        if self.alpha > 1.0 {
            let kf = self.k as f64;
            let mode = (self.alpha - 1.0) / (self.alpha * kf - kf);
            Some(vec![mode; self.k])
        } else {
            None
        }
    }
}

impl Entropy for SymmetricDirichlet {
    fn entropy(&self) -> f64 {
        let kf = self.k as f64;
        let alpha_sum = self.alpha * kf;
        let ln_beta = kf * ln_gammafn(self.alpha) - ln_gammafn(alpha_sum);
        ln_beta + (alpha_sum - kf) * alpha_sum.digamma()
            - kf * (self.alpha - 1.0) * self.alpha.digamma()
    }
}

impl ContinuousDistr<Vec<f64>> for Dirichlet {}

impl Support<Vec<f64>> for Dirichlet {
    fn supports(&self, x: &Vec<f64>) -> bool {
        if x.len() != self.alphas.len() {
            false
        } else {
            let sum = x.iter().fold(0.0, |acc, &xi| acc + xi);
            x.iter().all(|&xi| xi > 0.0) && (1.0 - sum).abs() < 1E-12
        }
    }
}

impl Mean<Vec<f64>> for Dirichlet {
    /// The mean of each weight: `alphas[i] / sum(alphas)`
    ///
    /// # Example
    ///
    /// ```
    /// # use dircat::dist::Dirichlet;
    /// # use dircat::traits::Mean;
    /// let dir = Dirichlet::new(vec![2.0, 3.0, 5.0]).unwrap();
    /// let mean: Vec<f64> = dir.mean().unwrap();
    /// assert::close(mean[0], 0.2, 1E-12);
    /// assert::close(mean[1], 0.3, 1E-12);
    /// assert::close(mean[2], 0.5, 1E-12);
    /// ```
    fn mean(&self) -> Option<Vec<f64>> {
        let alpha_sum = self.alpha_sum();
        Some(self.alphas.iter().map(|&a| a / alpha_sum).collect())
    }
}

impl Variance<Vec<f64>> for Dirichlet {
    fn variance(&self) -> Option<Vec<f64>> {
        let alpha_sum = self.alpha_sum();
        let denom = alpha_sum * alpha_sum * (alpha_sum + 1.0);
        Some(
            self.alphas
                .iter()
                .map(|&a| a * (alpha_sum - a) / denom)
                .collect(),
        )
    }
}

impl Mode<Vec<f64>> for Dirichlet {
    /// The mode, `(alphas[i] - 1) / (sum(alphas) - k)`, which is defined
    /// only when all alphas are greater than 1
    fn mode(&self) -> Option<Vec<f64>> {
        if self.alphas.iter().all(|&a| a > 1.0) {
            let denom = self.alpha_sum() - self.k() as f64;
            Some(self.alphas.iter().map(|&a| (a - 1.0) / denom).collect())
        } else {
            None
        }
    }
}

impl Entropy for Dirichlet {
    fn entropy(&self) -> f64 {
        let alpha_sum = self.alpha_sum();
        let kf = self.k() as f64;
        let ln_beta = self
            .alphas
            .iter()
            .fold(-ln_gammafn(alpha_sum), |acc, &a| acc + ln_gammafn(a));
        self.alphas.iter().fold(
            ln_beta + (alpha_sum - kf) * alpha_sum.digamma(),
            |acc, &a| acc - (a - 1.0) * a.digamma(),
        )
    }
}

impl std::error::Error for SymmetricDirichletError {}
impl std::error::Error for DirichletError {}

impl fmt::Display for SymmetricDirichletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlphaTooLow { alpha } => {
                write!(f, "alpha ({}) must be greater than zero", alpha)
            }
            Self::AlphaNotFinite { alpha } => {
                write!(f, "alpha ({}) was non-finite", alpha)
            }
            Self::KIsZero => write!(f, "k must be greater than zero"),
        }
    }
}

impl fmt::Display for DirichletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KIsZero => write!(f, "k must be greater than zero"),
            Self::AlphasEmpty => write!(f, "alphas vector was empty"),
            Self::AlphaTooLow { ix, alpha } => {
                write!(f, "Invalid alpha at index {}: {} <= 0.0", ix, alpha)
            }
            Self::AlphaNotFinite { ix, alpha } => {
                write!(f, "Non-finite alpha at index {}: {}", ix, alpha)
            }
        }
    }
}
