//! Public API for checking formattable types.
//!
//! # Analysis Lifecycle
//!
//! A [`Checker`] is built once from a [`CheckConfig`] and holds only
//! read-only state (terminal names, shape table). Every root analysis
//! creates a fresh [`CheckContext`], walks the graph from one root type, and
//! returns the diagnostics in the order they were found. Nothing is cached
//! across roots, so the same root always yields the same diagnostics.
//!
//! ```text
//! analyze(root)      → one context, one Vec<Diagnostic>
//! analyze_all(roots) → one context per root, roots in parallel (rayon),
//!                      reports in root order
//! check_graph(src)   → analyze_all over formattable_roots(src)
//! ```

use rayon::prelude::*;
use zf_diagnostic::Diagnostic;
use zf_ir::{TypeId, TypeIntrospection, TypeKind};

use crate::walk::Walker;
use crate::{CheckConfig, CheckContext, ShapeClassifier, TerminalTypes};

/// Diagnostics produced for one root type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootReport {
    pub root: TypeId,
    pub diagnostics: Vec<Diagnostic>,
}

impl RootReport {
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_warning()).count()
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Reusable, thread-safe entry point.
#[derive(Clone, Debug)]
pub struct Checker {
    config: CheckConfig,
    terminals: TerminalTypes,
    shapes: ShapeClassifier,
}

impl Default for Checker {
    fn default() -> Self {
        Self::new(CheckConfig::default())
    }
}

impl Checker {
    pub fn new(config: CheckConfig) -> Self {
        Checker {
            terminals: TerminalTypes::new(&config),
            shapes: ShapeClassifier::new(),
            config,
        }
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    pub fn terminals(&self) -> &TerminalTypes {
        &self.terminals
    }

    /// Analyze one root type.
    ///
    /// The root is validated in full: its own annotation and constructor,
    /// every public member, and for value types the index layout. Types
    /// reached through members only need to be terminal, wrappers of valid
    /// types, or annotated.
    ///
    /// # Example
    ///
    /// ```text
    /// let graph = TypeGraph::from_json(&json)?;
    /// let person = graph.lookup("Person").unwrap();
    /// for diag in Checker::default().analyze(&graph, person) {
    ///     eprintln!("{diag}");
    /// }
    /// ```
    #[tracing::instrument(level = "debug", skip_all, fields(root = source.display_name(root)))]
    pub fn analyze<S: TypeIntrospection + ?Sized>(&self, source: &S, root: TypeId) -> Vec<Diagnostic> {
        let walker = Walker {
            source,
            terminals: &self.terminals,
            shapes: &self.shapes,
            index_warning_threshold: self.config.index_warning_threshold,
        };
        let mut cx = CheckContext::new();
        walker.verify_type(&mut cx, root, source.location(root), None);

        tracing::debug!(
            errors = cx.diagnostics().error_count(),
            warnings = cx.diagnostics().warning_count(),
            "root analysis complete"
        );
        cx.into_diagnostics()
    }

    /// Analyze many roots in parallel, each with its own context.
    ///
    /// Reports come back in the order of `roots`.
    #[tracing::instrument(level = "debug", skip_all, fields(roots = roots.len()))]
    pub fn analyze_all<S>(&self, source: &S, roots: &[TypeId]) -> Vec<RootReport>
    where
        S: TypeIntrospection + Sync + ?Sized,
    {
        roots
            .par_iter()
            .map(|&root| RootReport {
                root,
                diagnostics: self.analyze(source, root),
            })
            .collect()
    }

    /// Analyze every formattable root declared by `source`.
    pub fn check_graph<S>(&self, source: &S) -> Vec<RootReport>
    where
        S: TypeIntrospection + Sync + ?Sized,
    {
        self.analyze_all(source, &formattable_roots(source))
    }
}

/// Declared classes and structs carrying the formattable annotation, in
/// declaration order.
///
/// These are the types a host analyzes as roots. Annotated interfaces are
/// only ever checked when reached from a root.
pub fn formattable_roots<S: TypeIntrospection + ?Sized>(source: &S) -> Vec<TypeId> {
    source
        .types()
        .into_iter()
        .filter(|&ty| {
            matches!(source.kind(ty), TypeKind::Class | TypeKind::Struct) && source.is_formattable(ty)
        })
        .collect()
}

/// Analyze one root with a one-off [`Checker`].
pub fn analyze<S: TypeIntrospection + ?Sized>(
    source: &S,
    root: TypeId,
    config: &CheckConfig,
) -> Vec<Diagnostic> {
    Checker::new(config.clone()).analyze(source, root)
}
