/// Deck loading and lookups.
pub mod deck;
/// JSON-facing deck description.
pub mod model;
pub(crate) mod validate;
