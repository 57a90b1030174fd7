//! # Query tree
//!
//! Types produced by the compiler.
//!
//! - **[operators]** - operator keys plus the closed comparison and logical
//!   sets, in dispatch order
//! - **[node]** - [`QueryNode`], the compiled tree, and its object [`Key`]
//!
//! ## Shape
//!
//! ```text
//! a = 1 & (b > 2 | c ~* 'x')
//! ```
//!
//! compiles to
//!
//! ```text
//! {and: [{a: 1}, {or: [{b: {gt: 2}}, {c: {regex: "x", caseInsensitive: true}}]}]}
//! ```
//!
//! Operators are kept symbolic in the tree. Spelling (`gt` vs `$gt`) is an
//! output concern, see [`crate::output::Dialect`].
pub mod node;
pub mod operators;

pub use node::{Key, QueryNode};
pub use operators::{Comparison, Logical, Operator};
