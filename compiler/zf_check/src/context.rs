//! Per-root traversal state.

use rustc_hash::FxHashSet;
use zf_diagnostic::{Diagnostic, DiagnosticQueue};
use zf_ir::TypeId;

/// Mutable state of one root analysis: the visited set that breaks cycles
/// and the queue that collects findings.
///
/// Threaded explicitly through every recursive call. A context is never
/// shared between roots, so concurrent analyses need no synchronization.
#[derive(Debug, Default)]
pub struct CheckContext {
    visited: FxHashSet<TypeId>,
    diagnostics: DiagnosticQueue,
}

impl CheckContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `ty` visited. Returns `false` if it already was.
    #[inline]
    pub fn first_visit(&mut self, ty: TypeId) -> bool {
        self.visited.insert(ty)
    }

    pub fn report(&mut self, diag: Diagnostic) {
        self.diagnostics.push(diag);
    }

    /// Nothing reported yet, warnings included.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &DiagnosticQueue {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_vec()
    }
}
