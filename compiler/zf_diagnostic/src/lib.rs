//! Diagnostics for the formattable-type checker.
//!
//! Every finding is a [`Diagnostic`]:
//! - An [`ErrorCode`] for searchability (`zfc explain E1002`)
//! - A default severity fixed by the code
//! - A primary label (where it went wrong) and secondary labels (related
//!   declarations)
//! - Positional message arguments (type name, member name, index) so hosts
//!   can format their own messages
//!
//! Findings for one root analysis are collected in a [`DiagnosticQueue`] and
//! handed to a [`DiagnosticEmitter`](emitter::DiagnosticEmitter) for display.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
pub mod queue;

pub use errors::ErrorDocs;

pub use diagnostic::{
    duplicate_index, field_not_allowed_on_reference_type, index_too_large,
    member_must_be_overridable, member_needs_index, member_needs_public_accessors,
    type_must_be_annotated, type_needs_default_constructor,
    value_type_indices_must_be_sequential, value_type_needs_matching_constructor, Diagnostic,
    DiagnosticArg, Label, MemberSite, Severity, TypeSite,
};
pub use error_code::ErrorCode;
pub use queue::DiagnosticQueue;
