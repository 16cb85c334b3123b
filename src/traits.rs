//! Trait definitions
use crate::data::DataOrSuffStat;
use crate::suffstat_traits::HasSuffStat;

/// Has a probability density or mass function
pub trait HasDensity<X> {
    /// Probability function
    ///
    /// # Example
    ///
    /// ```
    /// use dircat::dist::Categorical;
    /// use dircat::traits::HasDensity;
    ///
    /// let cat = Categorical::new(&[1.0, 2.0, 1.0]).unwrap();
    /// assert::close(cat.f(&1_u8), 0.5, 1E-12);
    /// ```
    fn f(&self, x: &X) -> f64 {
        self.ln_f(x).exp()
    }

    /// Log probability function
    fn ln_f(&self, x: &X) -> f64;
}

/// Identifies the support of a distribution
pub trait Support<X>: HasDensity<X> {
    /// Returns `true` if `x` is in the support of the distribution
    ///
    /// # Example
    ///
    /// ```
    /// use dircat::dist::Dirichlet;
    /// use dircat::traits::Support;
    ///
    /// let dir = Dirichlet::symmetric(1.0, 3).unwrap();
    /// assert!(dir.supports(&vec![0.2, 0.3, 0.5]));
    /// assert!(!dir.supports(&vec![0.2, 0.3, 0.6]));
    /// ```
    fn supports(&self, x: &X) -> bool;
}

/// A continuous probability distribution
pub trait ContinuousDistr<X>: Support<X> {
    /// The value of the Probability Density Function (PDF) at `x`
    ///
    /// # Panics
    ///
    /// If `x` is not in the support
    fn pdf(&self, x: &X) -> f64 {
        self.ln_pdf(x).exp()
    }

    /// The value of the log Probability Density Function (PDF) at `x`
    ///
    /// # Panics
    ///
    /// If `x` is not in the support
    fn ln_pdf(&self, x: &X) -> f64 {
        if !self.supports(x) {
            panic!("x not in support");
        }
        self.ln_f(x)
    }
}

/// A discrete probability distribution
pub trait DiscreteDistr<X>: Support<X> {
    /// Probability mass function (PMF) at `x`
    ///
    /// # Panics
    ///
    /// If `x` is not in the support
    fn pmf(&self, x: &X) -> f64 {
        self.ln_pmf(x).exp()
    }

    /// Natural logarithm of the probability mass function (PMF) at `x`
    ///
    /// # Panics
    ///
    /// If `x` is not in the support
    fn ln_pmf(&self, x: &X) -> f64 {
        if !self.supports(x) {
            panic!("x not in support");
        }
        self.ln_f(x)
    }
}

/// Defines the mean of a distribution, where it exists
pub trait Mean<M> {
    /// Returns `None` if the mean is undefined
    fn mean(&self) -> Option<M>;
}

/// Defines the mode of a distribution, where it exists
pub trait Mode<M> {
    /// Returns `None` if the mode is undefined or not unique
    fn mode(&self) -> Option<M>;
}

/// Defines the variance of a distribution, where it exists
pub trait Variance<V> {
    /// Returns `None` if the variance is undefined
    fn variance(&self) -> Option<V>;
}

/// Defines the entropy of a distribution
pub trait Entropy {
    /// The entropy, *H(X)*
    fn entropy(&self) -> f64;
}

/// KL divergences
pub trait KlDivergence {
    /// The KL divergence, *KL(P||Q)*, between this distribution, *P*, and
    /// another, *Q*
    fn kl(&self, other: &Self) -> f64;
}

/// A prior on `Fx` that induces a posterior that is the same form as the
/// prior
///
/// # Example
///
/// Conjugate analysis of categorical data under a Jeffreys Dirichlet prior.
///
/// ```
/// use dircat::traits::ConjugatePrior;
/// use dircat::dist::{Categorical, Dirichlet};
///
/// let xs: Vec<u8> = vec![0, 1, 1, 2, 1];
///
/// let prior = Dirichlet::jeffreys(3).unwrap();
/// let post = prior.posterior(&(&xs).into());
///
/// assert_eq!(*post.alphas(), vec![1.5, 3.5, 1.5]);
/// ```
pub trait ConjugatePrior<X, Fx>: HasDensity<Fx>
where
    Fx: HasDensity<X> + HasSuffStat<X>,
{
    /// Type of the posterior distribution
    type Posterior: HasDensity<Fx>;
    /// Type of the cache for the marginal likelihood
    type MCache;
    /// Type of the cache for the posterior predictive
    type PpCache;

    /// Computes the posterior distribution from the data
    fn posterior(&self, x: &DataOrSuffStat<X, Fx>) -> Self::Posterior;

    /// Compute the cache for the log marginal likelihood.
    fn ln_m_cache(&self) -> Self::MCache;

    /// Log marginal likelihood with supplied cache.
    fn ln_m_with_cache(
        &self,
        cache: &Self::MCache,
        x: &DataOrSuffStat<X, Fx>,
    ) -> f64;

    /// The log marginal likelihood
    fn ln_m(&self, x: &DataOrSuffStat<X, Fx>) -> f64 {
        let cache = self.ln_m_cache();
        self.ln_m_with_cache(&cache, x)
    }

    /// Compute the cache for the Log posterior predictive of y given x.
    ///
    /// The cache should encompass all information about `x`.
    fn ln_pp_cache(&self, x: &DataOrSuffStat<X, Fx>) -> Self::PpCache;

    /// Log posterior predictive of y given x with supplied cache.
    fn ln_pp_with_cache(&self, cache: &Self::PpCache, y: &X) -> f64;

    /// Log posterior predictive, *ln p(y|x)*
    fn ln_pp(&self, y: &X, x: &DataOrSuffStat<X, Fx>) -> f64 {
        let cache = self.ln_pp_cache(x);
        self.ln_pp_with_cache(&cache, y)
    }

    /// Marginal likelihood of x
    fn m(&self, x: &DataOrSuffStat<X, Fx>) -> f64 {
        self.ln_m(x).exp()
    }

    /// Posterior Predictive distribution
    fn pp(&self, y: &X, x: &DataOrSuffStat<X, Fx>) -> f64 {
        self.ln_pp(y, x).exp()
    }
}
