//! A typed lambda calculus embedded in Rust with higher-order abstract syntax.
//!
//! Terms are written once against the [`Lambda`] trait and the capability traits in
//! [`ops`], then interpreted by picking a representation: [`PrettyPrint`] renders them,
//! [`Eval`] runs them.

pub mod evaluator;
pub mod library;
pub mod ops;
pub mod prelude;
pub mod pretty;
pub mod term;
pub mod types;

pub use evaluator::{evaluate, Eval};
pub use pretty::{render, render_at, Naming, PrettyPrint};
pub use term::{Lambda, Term};
