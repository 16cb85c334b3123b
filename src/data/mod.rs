//! Data utilities
mod suffstat;

pub use self::suffstat::CategoricalSuffStat;

use crate::suffstat_traits::{HasSuffStat, SuffStat};
use num::traits::FromPrimitive;

/// The trait that must be implemented by all data used with the
/// `Categorical` distribution
pub trait CategoricalDatum:
    Sized + Into<usize> + Sync + Copy + FromPrimitive
{
}

impl<T> CategoricalDatum for T where
    T: Clone + Into<usize> + Sync + Copy + FromPrimitive
{
}

/// Holds either a sufficient statistic or a slice of data.
#[derive(Debug, Clone)]
pub enum DataOrSuffStat<'a, X, Fx>
where
    X: 'a,
    Fx: 'a + HasSuffStat<X>,
{
    /// A slice of raw data
    Data(&'a [X]),
    /// A sufficient statistic
    SuffStat(&'a Fx::Stat),
    /// No data
    None,
}

impl<'a, X, Fx> DataOrSuffStat<'a, X, Fx>
where
    X: 'a,
    Fx: 'a + HasSuffStat<X>,
{
    /// Get the number of observations
    pub fn n(&self) -> usize {
        match &self {
            DataOrSuffStat::Data(data) => data.len(),
            DataOrSuffStat::SuffStat(s) => s.n(),
            DataOrSuffStat::None => 0,
        }
    }

    /// Determine whether the object contains data
    pub fn is_data(&self) -> bool {
        matches!(self, DataOrSuffStat::Data(..))
    }

    /// Determine whether the object contains a sufficient statistic
    pub fn is_suffstat(&self) -> bool {
        matches!(self, DataOrSuffStat::SuffStat(..))
    }
}

impl<'a, X, Fx> From<&'a Vec<X>> for DataOrSuffStat<'a, X, Fx>
where
    X: 'a,
    Fx: 'a + HasSuffStat<X>,
{
    fn from(xs: &'a Vec<X>) -> Self {
        DataOrSuffStat::Data(xs.as_slice())
    }
}

impl<'a, X, Fx> From<&'a [X]> for DataOrSuffStat<'a, X, Fx>
where
    X: 'a,
    Fx: 'a + HasSuffStat<X>,
{
    fn from(xs: &'a [X]) -> Self {
        DataOrSuffStat::Data(xs)
    }
}

/// Convert the data into a sufficient statistic, then do something with it
pub(crate) fn extract_stat_then<X, Fx, Y, EmptyFn, StatFn>(
    x: &DataOrSuffStat<X, Fx>,
    empty_stat: EmptyFn,
    stat_fn: StatFn,
) -> Y
where
    Fx: HasSuffStat<X>,
    Fx::Stat: Clone,
    EmptyFn: Fn() -> Fx::Stat,
    StatFn: FnOnce(Fx::Stat) -> Y,
{
    match x {
        DataOrSuffStat::SuffStat(s) => stat_fn((*s).clone()),
        DataOrSuffStat::Data(xs) => {
            let mut stat = empty_stat();
            stat.observe_many(xs);
            stat_fn(stat)
        }
        DataOrSuffStat::None => stat_fn(empty_stat()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dist::Categorical;

    #[test]
    fn data_or_suffstat_n() {
        let xs: Vec<u8> = vec![0, 1, 1, 0];
        let data: DataOrSuffStat<u8, Categorical> = (&xs).into();
        assert_eq!(data.n(), 4);
        assert!(data.is_data());

        let mut stat = CategoricalSuffStat::new(2);
        stat.observe_many(&xs);
        let data: DataOrSuffStat<u8, Categorical> = (&stat).into();
        assert_eq!(data.n(), 4);
        assert!(data.is_suffstat());

        let data: DataOrSuffStat<u8, Categorical> = DataOrSuffStat::None;
        assert_eq!(data.n(), 0);
    }
}
