//! Structural contract checker for formattable types.
//!
//! A formattable type is laid out positionally by a binary serializer: each
//! public member carries a small integer index, reference types are
//! proxied through overridable properties, and value types are rebuilt
//! through a constructor taking every member in index order. This crate
//! checks those rules over any [`TypeIntrospection`](zf_ir::TypeIntrospection)
//! source and reports violations as [`Diagnostic`](zf_diagnostic::Diagnostic)s.
//!
//! # Components
//!
//! - [`TerminalTypes`]: names that end the walk (built-in scalars, configured
//!   names)
//! - [`ShapeClassifier`]: recognizes wrapper generics whose arguments are
//!   checked instead of the wrapper
//! - `walk`: the recursive type walk, with cycle guard
//! - `member`: per-member rules, in order
//! - [`IndexLedger`]: index uniqueness and value-type layout
//! - [`Checker`]: driver API, one [`CheckContext`] per root
//!
//! # Example
//!
//! ```text
//! let graph = TypeGraph::from_json(&json)?;
//! let checker = Checker::new(CheckConfig::default());
//! for report in checker.check_graph(&graph) {
//!     for diag in &report.diagnostics {
//!         eprintln!("{diag}");
//!     }
//! }
//! ```

mod api;
mod config;
mod context;
mod ledger;
mod member;
mod registry;
mod shape;
mod stack;
mod walk;


pub use api::{analyze, formattable_roots, Checker, RootReport};
pub use config::{CheckConfig, DEFAULT_INDEX_WARNING_THRESHOLD};
pub use context::CheckContext;
pub use ledger::{IndexEntry, IndexLedger, LayoutVerdict};
pub use registry::TerminalTypes;
pub use shape::{GenericShape, ShapeClassifier};
