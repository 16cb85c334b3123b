//! Re-imports for convenience
#[doc(no_inline)]
pub use crate::data::{CategoricalSuffStat, DataOrSuffStat};
#[doc(no_inline)]
pub use crate::dist::*;
#[doc(no_inline)]
pub use crate::model::ConjugateModel;
#[doc(no_inline)]
pub use crate::suffstat_traits::*;
#[doc(no_inline)]
pub use crate::traits::*;

pub type CategoricalData<'a, X> = DataOrSuffStat<'a, X, Categorical>;
