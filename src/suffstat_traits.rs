/// The data for this distribution can be summarized by a statistic
pub trait HasSuffStat<X> {
    type Stat: SuffStat<X>;

    /// Create an empty sufficient statistic for this distribution
    fn empty_suffstat(&self) -> Self::Stat;

    /// Return the log likelihood for the data represented by the sufficient
    /// statistic.
    fn ln_f_stat(&self, stat: &Self::Stat) -> f64;
}

/// Is a [sufficient statistic](https://en.wikipedia.org/wiki/Sufficient_statistic) for a
/// distribution.
///
/// # Examples
///
/// Basic suffstat usage.
///
/// ```
/// use dircat::data::CategoricalSuffStat;
/// use dircat::suffstat_traits::SuffStat;
///
/// // Categorical sufficient statistics are the number of observations, n,
/// // and the observation counts for each category.
/// let mut stat = CategoricalSuffStat::new(3);
///
/// assert!(stat.n() == 0 && stat.counts().iter().all(|&ct| ct == 0.0));
///
/// stat.observe(&0_u8);
/// assert!(stat.n() == 1 && stat.counts()[0] == 1.0);
///
/// stat.observe(&2_u8);
/// assert!(stat.n() == 2 && stat.counts()[2] == 1.0);
///
/// stat.forget_many(&vec![0_u8, 2_u8]);
/// assert!(stat.n() == 0 && stat.counts().iter().all(|&ct| ct == 0.0));
/// ```
///
/// Conjugate analysis of die rolls using Categorical with a Dirichlet prior
/// on the weights.
///
/// ```
/// use dircat::suffstat_traits::SuffStat;
/// use dircat::traits::ConjugatePrior;
/// use dircat::data::CategoricalSuffStat;
/// use dircat::dist::{Categorical, Dirichlet};
///
/// let rolls: Vec<u8> = vec![0, 2, 2, 1, 2];
///
/// // Pack the data into a sufficient statistic that holds the counts for
/// // each category
/// let mut stat = CategoricalSuffStat::new(3);
/// stat.observe_many(&rolls);
///
/// let prior = Dirichlet::jeffreys(3).unwrap();
///
/// // If we observe category 2 more often than the others, its posterior
/// // predictive probability increases.
/// let pp_no_obs = prior.pp(&2_u8, &(&CategoricalSuffStat::new(3)).into());
/// let pp_obs = prior.pp(&2_u8, &(&rolls).into());
///
/// assert!(pp_obs > pp_no_obs);
/// ```
pub trait SuffStat<X> {
    /// Returns the number of observations
    fn n(&self) -> usize;

    /// Assimilate the datum `x` into the statistic
    fn observe(&mut self, x: &X);

    /// Remove the datum `x` from the statistic
    fn forget(&mut self, x: &X);

    /// Assimilate several observations
    fn observe_many(&mut self, xs: &[X]) {
        xs.iter().for_each(|x| self.observe(x));
    }

    /// Forget several observations
    fn forget_many(&mut self, xs: &[X]) {
        xs.iter().for_each(|x| self.forget(x));
    }

    /// Absorb another sufficient statistic of the same type
    fn merge(&mut self, other: Self);
}
