#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::data::{CategoricalDatum, DataOrSuffStat};
use crate::dist::Categorical;
use crate::suffstat_traits::SuffStat;

/// Sufficient statistic for the Categorical distribution: the number of
/// observations and the count of observations in each category
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct CategoricalSuffStat {
    n: usize,
    counts: Vec<f64>,
}

impl CategoricalSuffStat {
    /// Create an empty statistic for a distribution over `k` categories
    pub fn new(k: usize) -> Self {
        CategoricalSuffStat {
            n: 0,
            counts: vec![0.0; k],
        }
    }

    /// Create a statistic from whatever comes in without checking that the
    /// counts are non-negative or that they sum to `n`
    pub fn from_parts_unchecked(n: usize, counts: Vec<f64>) -> Self {
        CategoricalSuffStat { n, counts }
    }

    /// Get the number of possible outcomes
    #[inline]
    pub fn k(&self) -> usize {
        self.counts.len()
    }

    /// Get the total number of observations
    ///
    /// # Example
    ///
    /// ```
    /// # use dircat::data::CategoricalSuffStat;
    /// # use dircat::suffstat_traits::SuffStat;
    /// let mut stat = CategoricalSuffStat::new(3);
    ///
    /// stat.observe(&0_u8);
    /// stat.observe(&1_u8);
    /// stat.observe(&1_u8);
    ///
    /// assert_eq!(stat.n(), 3);
    /// ```
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Get a reference to the observation counts
    #[inline]
    pub fn counts(&self) -> &Vec<f64> {
        &self.counts
    }
}

impl<'a, X> From<&'a CategoricalSuffStat> for DataOrSuffStat<'a, X, Categorical>
where
    X: CategoricalDatum,
{
    fn from(stat: &'a CategoricalSuffStat) -> Self {
        DataOrSuffStat::SuffStat(stat)
    }
}

impl<X: CategoricalDatum> SuffStat<X> for CategoricalSuffStat {
    fn n(&self) -> usize {
        self.n
    }

    fn observe(&mut self, x: &X) {
        let ix: usize = (*x).into();
        self.n += 1;
        self.counts[ix] += 1.0;
    }

    fn forget(&mut self, x: &X) {
        let ix: usize = (*x).into();
        self.n -= 1;
        self.counts[ix] -= 1.0;
    }

    fn merge(&mut self, other: Self) {
        self.n += other.n;
        self.counts
            .iter_mut()
            .zip(other.counts)
            .for_each(|(ct, other_ct)| *ct += other_ct);
    }
}
