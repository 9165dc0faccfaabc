//! Session credential snapshot, supplier contract, and in-process token slot.

pub mod cell;
pub mod token;

pub use cell::*;
pub use token::*;
