//! Navigation engine: the presenter state machine and the pieces it drives on every slide change.

/// Build groups and staged reveal.
pub mod builds;
/// Slide-to-slide transition planning.
pub mod diff;
pub(crate) mod layout;
/// The presenter state machine.
pub mod presenter;
/// Id to rendered-instance bookkeeping.
pub mod registry;
