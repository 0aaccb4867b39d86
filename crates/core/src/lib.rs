//! Domain logic for the portfolio backend.
//!
//! Owns the ordering-and-visibility engine: how projects are grouped by
//! category, ordered within a category, published/unpublished, and how
//! reorder actions are reconciled with the persistence layer. Contains no
//! database code; persistence is reached through the traits in [`store`].

pub mod error;
pub mod ordering;
pub mod organizer;
pub mod project;
pub mod store;
pub mod types;
