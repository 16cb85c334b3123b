//! Dirichlet and Categorical distributions with conjugate analysis.
//!
//! The crate covers the Dirichlet-Categorical conjugate family:
//! [`Dirichlet`](dist::Dirichlet) and
//! [`SymmetricDirichlet`](dist::SymmetricDirichlet) distributions over
//! points on the simplex, the [`Categorical`](dist::Categorical)
//! distribution over `{0, .., k-1}`, and conjugate analysis of categorical
//! data under a Dirichlet prior: posterior, log marginal likelihood, and
//! posterior predictive.
//!
//! Distributions implement a density-only trait surface
//! ([`HasDensity`](traits::HasDensity), [`Support`](traits::Support),
//! [`ContinuousDistr`](traits::ContinuousDistr), ...). Conjugate analysis
//! goes through [`ConjugatePrior`](traits::ConjugatePrior), which operates
//! on raw data or on sufficient statistics
//! ([`DataOrSuffStat`](data::DataOrSuffStat)). The [`ConjugateModel`]
//! wrapper bundles a prior with a running sufficient statistic for
//! incremental observe/forget workflows.
//!
//! # Example
//!
//! ```
//! use dircat::prelude::*;
//!
//! let dir = Dirichlet::new(vec![2.0, 3.0, 5.0]).unwrap();
//!
//! // The mean lies on the simplex
//! let mean: Vec<f64> = dir.mean().unwrap();
//! assert::close(mean[0], 0.2, 1E-12);
//!
//! // The density at the mean beats the density near a corner
//! assert!(dir.ln_pdf(&mean) > dir.ln_pdf(&vec![0.01, 0.01, 0.98]));
//! ```
pub mod data;
pub mod dist;
pub mod misc;
mod model;
pub mod prelude;
pub mod suffstat_traits;
pub mod traits;

pub use model::ConjugateModel;

doc_comment::doctest!("../README.md");

macro_rules! impl_display {
    ($kind: ty) => {
        impl ::std::fmt::Display for $kind {
            fn fmt(
                &self,
                f: &mut ::std::fmt::Formatter<'_>,
            ) -> ::std::fmt::Result {
                write!(f, "{}", String::from(self))
            }
        }
    };
}

pub(crate) use impl_display;

/// Tests that `Clone`, `Debug`, and `PartialEq` are implemented for a
/// distribution
#[macro_export]
macro_rules! test_basic_impls {
    ($fx: expr) => {
        #[test]
        fn should_impl_debug_clone_and_partialeq() {
            assert_eq!($fx, $fx.clone());
            let _s1 = format!("{:?}", $fx);
        }
    };
}
