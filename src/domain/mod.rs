//! Domain layer: pure types and logic, no I/O.

pub mod merchant;
pub mod webhook;
