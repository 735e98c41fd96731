#![deny(missing_docs)]
#![doc = "Standard failer: ends call contracts, renders failure messages, notifies observers and latches the first fail-fast failure for polling threads."]

mod customizer;
mod failer;
mod fails;
mod latch;
mod observers;

pub use customizer::FailerCustomizer;
pub use failer::{Failing, StandardFailer};
pub use fails::{FloatFails, OrderFails, OutcomeFails, SequenceFails, TextFails, ValueFails};
pub use latch::{FailureLatch, FailurePoll};
pub use observers::{FailerObserver, FailerPublisher, ObserverKey, ObserverRegistry};
