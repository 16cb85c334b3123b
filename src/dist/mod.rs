//! Probability distributions
//!
//! The distributions fall into the Dirichlet-Categorical conjugate family:
//! `Categorical` is the likelihood, `Dirichlet` and `SymmetricDirichlet`
//! are its conjugate priors.
mod categorical;
mod dirichlet;

pub use self::categorical::{Categorical, CategoricalError};
pub use self::dirichlet::{
    Dirichlet, DirichletError, SymmetricDirichlet, SymmetricDirichletError,
};
