//! Shared primitives for the Lista crates.
//!
//! `lista-core` is the foundation `lista-seq` and `lista-poly` build on:
//!
//! - **Error types** — [`ListaError`] and [`Result`] for structured error handling
//! - **Traits** — [`Sequence`], [`Annotated`], [`Summarizable`]

pub mod error;
pub mod traits;

pub use error::{ListaError, Result};
pub use traits::*;
