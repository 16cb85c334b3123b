//! Dirichlet and Symmetric Dirichlet priors on the Categorical weights
use crate::data::{extract_stat_then, CategoricalDatum, CategoricalSuffStat};
use crate::dist::{Categorical, Dirichlet, SymmetricDirichlet};
use crate::misc::ln_gammafn;
use crate::prelude::CategoricalData;
use crate::traits::*;
use itertools::izip;

impl HasDensity<Categorical> for SymmetricDirichlet {
    fn ln_f(&self, x: &Categorical) -> f64 {
        self.ln_f(&x.weights())
    }
}

impl<X: CategoricalDatum> ConjugatePrior<X, Categorical>
    for SymmetricDirichlet
{
    type Posterior = Dirichlet;
    type MCache = f64;
    type PpCache = (Vec<f64>, f64);

    fn posterior(&self, x: &CategoricalData<X>) -> Self::Posterior {
        extract_stat_then(
            x,
            || CategoricalSuffStat::new(self.k()),
            |stat: CategoricalSuffStat| {
                let alphas: Vec<f64> =
                    stat.counts().iter().map(|&ct| self.alpha() + ct).collect();

                Dirichlet::new(alphas).unwrap()
            },
        )
    }

    #[inline]
    fn ln_m_cache(&self) -> Self::MCache {
        let sum_alpha = self.alpha() * self.k() as f64;
        let a = ln_gammafn(sum_alpha);
        let d = ln_gammafn(self.alpha()) * self.k() as f64;
        a - d
    }

    fn ln_m_with_cache(
        &self,
        cache: &Self::MCache,
        x: &CategoricalData<X>,
    ) -> f64 {
        let sum_alpha = self.alpha() * self.k() as f64;

        extract_stat_then(
            x,
            || CategoricalSuffStat::new(self.k()),
            |stat: CategoricalSuffStat| {
                // terms
                let b = ln_gammafn(sum_alpha + stat.n() as f64);
                let c = stat
                    .counts()
                    .iter()
                    .fold(0.0, |acc, &ct| acc + ln_gammafn(self.alpha() + ct));

                -b + c + cache
            },
        )
    }

    #[inline]
    fn ln_pp_cache(&self, x: &CategoricalData<X>) -> Self::PpCache {
        let post = self.posterior(x);
        let norm = post.alphas().iter().fold(0.0, |acc, &a| acc + a);
        (post.alphas, norm.ln())
    }

    fn ln_pp_with_cache(&self, cache: &Self::PpCache, y: &X) -> f64 {
        let ix: usize = (*y).into();
        cache.0[ix].ln() - cache.1
    }
}

impl HasDensity<Categorical> for Dirichlet {
    fn ln_f(&self, x: &Categorical) -> f64 {
        self.ln_f(&x.weights())
    }
}

impl<X: CategoricalDatum> ConjugatePrior<X, Categorical> for Dirichlet {
    type Posterior = Self;
    type MCache = f64;
    type PpCache = (Vec<f64>, f64);

    fn posterior(&self, x: &CategoricalData<X>) -> Self::Posterior {
        extract_stat_then(
            x,
            || CategoricalSuffStat::new(self.k()),
            |stat: CategoricalSuffStat| {
                let alphas: Vec<f64> =
                    izip!(self.alphas(), stat.counts())
                        .map(|(&a, &ct)| a + ct)
                        .collect();

                Dirichlet::new(alphas).unwrap()
            },
        )
    }

    #[inline]
    fn ln_m_cache(&self) -> Self::MCache {
        let sum_alpha = self.alphas().iter().fold(0.0, |acc, &a| acc + a);
        let a = ln_gammafn(sum_alpha);
        let d = self
            .alphas()
            .iter()
            .fold(0.0, |acc, &alpha| acc + ln_gammafn(alpha));
        a - d
    }

    fn ln_m_with_cache(
        &self,
        cache: &Self::MCache,
        x: &CategoricalData<X>,
    ) -> f64 {
        let sum_alpha = self.alphas().iter().fold(0.0, |acc, &a| acc + a);

        extract_stat_then(
            x,
            || CategoricalSuffStat::new(self.k()),
            |stat: CategoricalSuffStat| {
                // terms
                let b = ln_gammafn(sum_alpha + stat.n() as f64);
                let c = izip!(self.alphas(), stat.counts())
                    .fold(0.0, |acc, (&a, &ct)| acc + ln_gammafn(a + ct));

                -b + c + cache
            },
        )
    }

    #[inline]
    fn ln_pp_cache(&self, x: &CategoricalData<X>) -> Self::PpCache {
        let post = self.posterior(x);
        let norm = post.alphas().iter().fold(0.0, |acc, &a| acc + a);
        (post.alphas, norm.ln())
    }

    fn ln_pp_with_cache(&self, cache: &Self::PpCache, y: &X) -> f64 {
        let ix: usize = (*y).into();
        cache.0[ix].ln() - cache.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataOrSuffStat;
    use crate::suffstat_traits::SuffStat;

    const TOL: f64 = 1E-12;

    #[test]
    fn posterior_adds_counts_to_alphas() {
        let xs: Vec<u8> = vec![0, 0, 1, 1, 1, 2];
        let prior = Dirichlet::new(vec![1.0, 2.0, 3.0]).unwrap();
        let post = prior.posterior(&(&xs).into());
        assert_eq!(*post.alphas(), vec![3.0, 5.0, 4.0]);
    }

    #[test]
    fn posterior_from_suffstat_matches_posterior_from_data() {
        let xs: Vec<u8> = vec![0, 0, 1, 1, 1, 2];
        let mut stat = CategoricalSuffStat::new(3);
        stat.observe_many(&xs);

        let prior = Dirichlet::jeffreys(3).unwrap();
        let post_data = prior.posterior(&(&xs).into());
        let stat_data: CategoricalData<u8> = (&stat).into();
        let post_stat = prior.posterior(&stat_data);

        assert_eq!(post_data, post_stat);
    }

    #[test]
    fn posterior_with_no_data_is_the_prior() {
        let prior = Dirichlet::new(vec![1.0, 2.0, 3.0]).unwrap();
        let data: CategoricalData<u8> = DataOrSuffStat::None;
        let post = prior.posterior(&data);
        assert_eq!(post, prior);
    }

    #[test]
    fn jeffreys_ln_m() {
        let xs: Vec<u8> = vec![0, 0, 1, 1, 1, 2];
        let prior = Dirichlet::jeffreys(3).unwrap();
        assert::close(
            prior.ln_m(&(&xs).into()),
            -8.007_367_067_983_331,
            TOL,
        );
    }

    #[test]
    fn ln_m() {
        let xs: Vec<u8> = vec![0, 0, 1, 1, 1, 2];
        let prior = Dirichlet::new(vec![1.0, 2.0, 3.0]).unwrap();
        assert::close(prior.ln_m(&(&xs).into()), -7.745_002_803_515_84, TOL);
    }

    #[test]
    fn symdir_ln_m_matches_dirichlet() {
        let xs: Vec<u8> = vec![0, 0, 1, 1, 1, 2];
        let symdir = SymmetricDirichlet::jeffreys(3).unwrap();
        let dir = Dirichlet::jeffreys(3).unwrap();
        assert::close(
            symdir.ln_m(&(&xs).into()),
            dir.ln_m(&(&xs).into()),
            TOL,
        );
    }

    #[test]
    fn symdir_posterior_matches_dirichlet() {
        let xs: Vec<u8> = vec![0, 2, 2, 1];
        let symdir = SymmetricDirichlet::new(1.5, 3).unwrap();
        let dir = Dirichlet::symmetric(1.5, 3).unwrap();
        assert_eq!(
            symdir.posterior(&(&xs).into()),
            dir.posterior(&(&xs).into())
        );
    }

    #[test]
    fn ln_pp() {
        let xs: Vec<u8> = vec![0, 0, 1, 1, 1, 2];
        let prior = Dirichlet::jeffreys(3).unwrap();
        let data: CategoricalData<u8> = (&xs).into();

        // (alpha + count) / (alpha0 + n)
        assert::close(
            prior.ln_pp(&0_u8, &data),
            (2.5_f64 / 7.5).ln(),
            TOL,
        );
        assert::close(
            prior.ln_pp(&1_u8, &data),
            (3.5_f64 / 7.5).ln(),
            TOL,
        );
        assert::close(
            prior.ln_pp(&2_u8, &data),
            (1.5_f64 / 7.5).ln(),
            TOL,
        );
    }

    #[test]
    fn pp_sums_to_one() {
        let xs: Vec<u8> = vec![0, 0, 1, 1, 1, 2];
        let prior = Dirichlet::new(vec![0.5, 1.0, 2.0]).unwrap();
        let data: CategoricalData<u8> = (&xs).into();

        let total: f64 =
            (0_u8..3).map(|y| prior.pp(&y, &data)).sum();
        assert::close(total, 1.0, TOL);
    }

    #[test]
    fn ln_m_with_no_data_is_zero() {
        // marginal likelihood of nothing is 1
        let prior = Dirichlet::new(vec![0.5, 1.0, 2.0]).unwrap();
        let data: CategoricalData<u8> = DataOrSuffStat::None;
        assert::close(prior.ln_m(&data), 0.0, TOL);
    }

    #[test]
    fn prior_ln_f_of_categorical_uses_weights() {
        let prior = Dirichlet::symmetric(1.0, 3).unwrap();
        let cat = Categorical::new(&[0.2, 0.3, 0.5]).unwrap();
        let ln_f: f64 = prior.ln_f(&cat);
        // uniform prior density over the 2-simplex is Γ(3) = 2
        assert::close(ln_f, 2.0_f64.ln(), 1E-9);
    }
}
