#![deny(missing_docs)]
//! Call contractor keeping at most one pending contract per thread.

mod contractor;

pub use contractor::{ContractorStats, ThreadContractor};
