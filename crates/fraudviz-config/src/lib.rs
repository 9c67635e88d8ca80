//! # fraudviz config
//!
//! Run configuration for the chart generator: output location, synthetic
//! data parameters, and the styling block every chart reads.
//!
//! Values come from literal defaults only. Styling travels as an explicit
//! [`StyleConfig`] value rather than global plotting state.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use schema::*;
pub use validator::*;
