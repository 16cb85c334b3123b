use crate::data::DataOrSuffStat;
use crate::suffstat_traits::{HasSuffStat, SuffStat};
use crate::traits::{ConjugatePrior, HasDensity};
use std::marker::PhantomData;
use std::sync::Arc;

/// A wrapper for a complete conjugate model
///
/// Holds the prior and a running sufficient statistic of the observed data,
/// so observations can be assimilated and forgotten incrementally.
///
/// # Parameters
///
/// `X`: The type of the data/observations to be modeled
/// `Fx`: The type of the likelihood, *f(x|θ)*
/// `Pr`: The type of the prior on the parameters of `Fx`, π(θ)
#[derive(Clone, Debug, PartialEq)]
pub struct ConjugateModel<X, Fx, Pr>
where
    Fx: HasDensity<X> + HasSuffStat<X>,
    Pr: ConjugatePrior<X, Fx>,
{
    /// Pointer to the prior implementing `ConjugatePrior` for `Fx`
    prior: Arc<Pr>,
    /// A `SuffStat` for `Fx`
    suffstat: Fx::Stat,
    _phantom: PhantomData<X>,
}

impl<X, Fx, Pr> ConjugateModel<X, Fx, Pr>
where
    Fx: HasDensity<X> + HasSuffStat<X>,
    Pr: ConjugatePrior<X, Fx>,
{
    /// Create a new conjugate model
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use dircat::prelude::*;
    /// use dircat::ConjugateModel;
    ///
    /// let pr = Arc::new(Dirichlet::jeffreys(3).unwrap());
    /// let fx = Categorical::uniform(3);
    /// let model = ConjugateModel::<u8, Categorical, Dirichlet>::new(&fx, pr);
    /// ```
    pub fn new(fx: &Fx, pr: Arc<Pr>) -> Self {
        ConjugateModel {
            prior: pr,
            suffstat: fx.empty_suffstat(),
            _phantom: PhantomData,
        }
    }

    /// Log marginal likelihood, *f(obs)*
    pub fn ln_m(&self) -> f64 {
        self.prior.ln_m(&self.obs())
    }

    /// Log posterior predictive, *f(y|obs)*
    pub fn ln_pp(&self, y: &X) -> f64 {
        self.prior.ln_pp(y, &self.obs())
    }

    /// Return the posterior distribution
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use dircat::prelude::*;
    /// use dircat::ConjugateModel;
    ///
    /// let xs: Vec<u8> = vec![0, 0, 1];
    ///
    /// let pr = Arc::new(Dirichlet::jeffreys(2).unwrap());
    /// let fx = Categorical::uniform(2);
    /// let mut model = ConjugateModel::<u8, Categorical, Dirichlet>::new(&fx, pr);
    ///
    /// model.observe_many(&xs);
    ///
    /// let post = model.posterior();
    ///
    /// assert_eq!(post, Dirichlet::new(vec![2.5, 1.5]).unwrap());
    /// ```
    pub fn posterior(&self) -> Pr::Posterior {
        self.prior.posterior(&self.obs())
    }

    /// Return the observations
    fn obs(&self) -> DataOrSuffStat<'_, X, Fx> {
        DataOrSuffStat::SuffStat(&self.suffstat)
    }
}

impl<X, Fx, Pr> SuffStat<X> for ConjugateModel<X, Fx, Pr>
where
    Fx: HasDensity<X> + HasSuffStat<X>,
    Pr: ConjugatePrior<X, Fx>,
{
    fn n(&self) -> usize {
        self.suffstat.n()
    }

    fn observe(&mut self, x: &X) {
        self.suffstat.observe(x);
    }

    fn forget(&mut self, x: &X) {
        self.suffstat.forget(x);
    }

    fn merge(&mut self, other: Self) {
        self.suffstat.merge(other.suffstat);
    }
}

impl<X, Fx, Pr> HasDensity<X> for ConjugateModel<X, Fx, Pr>
where
    Fx: HasDensity<X> + HasSuffStat<X>,
    Pr: ConjugatePrior<X, Fx>,
{
    fn ln_f(&self, x: &X) -> f64 {
        self.prior.ln_pp(x, &self.obs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dist::{Categorical, Dirichlet};

    fn jeffreys_model(k: usize) -> ConjugateModel<u8, Categorical, Dirichlet> {
        ConjugateModel::new(
            &Categorical::uniform(k),
            Arc::new(Dirichlet::jeffreys(k).unwrap()),
        )
    }

    #[test]
    fn basic() {
        let mut model = jeffreys_model(2);

        model.observe_many(&[0, 1]);
        assert_eq!(model.n(), 2);
        assert::close(model.ln_m(), -(8.0_f64.ln()), 1e-6);

        model.forget(&0);
        assert_eq!(model.n(), 1);
        assert::close(model.ln_m(), 0.5_f64.ln(), 1e-6);

        let mut other_model = jeffreys_model(2);

        other_model.observe_many(&[0, 0]);
        model.merge(other_model);

        assert_eq!(model.n(), 3);
    }

    #[test]
    fn density() {
        let mut model = jeffreys_model(2);

        model.observe_many(&[0, 1]);

        assert::close(model.ln_f(&0), (1.5_f64 / 3.0).ln(), 1e-6);
        assert::close(model.ln_pp(&0), (1.5_f64 / 3.0).ln(), 1e-6);
    }

    #[test]
    fn posterior_tracks_observations() {
        let mut model = jeffreys_model(3);

        model.observe_many(&[0, 1, 1, 2, 1]);
        assert_eq!(
            model.posterior(),
            Dirichlet::new(vec![1.5, 3.5, 1.5]).unwrap()
        );

        model.forget_many(&[1, 1]);
        assert_eq!(
            model.posterior(),
            Dirichlet::new(vec![1.5, 1.5, 1.5]).unwrap()
        );
    }
}
