#![deny(missing_docs)]
#![doc = "Standard checks for fail-fast argument checking. Each check returns `true` when the asserted condition holds, i.e. when the caller's precondition is violated, and leaves a call contract behind for the failer."]

mod checker;
mod floats;
mod order;
mod outcome;
mod render;
mod sequences;
mod text;
mod values;

pub use checker::{AssertingChecker, StandardChecker};
pub use floats::FloatChecks;
pub use order::OrderChecks;
pub use outcome::OutcomeChecks;
pub use render::summarize;
pub use sequences::SequenceChecks;
pub use text::TextChecks;
pub use values::ValueChecks;
