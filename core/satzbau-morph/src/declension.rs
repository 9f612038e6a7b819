use satzbau_protocol::{Cardinality, Case, Person};

use crate::error::Result;

/// Capability shared by everything that can fill a noun slot.
pub trait Declined {
    /// Person used to conjugate a verb agreeing with this item.
    fn person(&self) -> Person;

    fn cardinality(&self) -> Cardinality;

    /// Inflected German surface string in `case`.
    fn decline(&self, case: Case) -> Result<String>;

    /// English rendering for the translation line.
    fn gloss(&self) -> Result<String>;

    /// Short prompt shown when this item is the blanked slot.
    fn hint(&self, case: Case) -> Result<Option<String>>;
}
