//! Host input: key bindings and the pointer idle timer.

/// Pointer idle timer.
pub mod cursor;
/// Keys, commands and bindings.
pub mod keymap;
