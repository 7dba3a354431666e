//! Domain models for shelf.
//!
//! # Core Concepts
//!
//! - [`Record`]: A top-level catalog entry (a game or a note). Owns its tasks.
//! - [`Task`]: A unit of work inside a record (a play or a to-do item),
//!   either complete or pending.
//! - [`Kind`]: Marker trait supplying the labels for one catalog flavour.
//!   [`Games`] and [`Notes`] are the two flavours shipped.
//!
//! The type aliases ([`Game`], [`Play`], [`Note`], [`Item`]) name the concrete
//! instantiations.

mod kind;
mod record;
mod task;

pub use kind::*;
pub use record::*;
pub use task::*;

pub type Game = Record<Games>;
pub type Play = Task<Games>;
pub type Note = Record<Notes>;
pub type Item = Task<Notes>;
