//! Type graph walker.
//!
//! `verify_type` decides, for one type reached from a root, whether it is
//! terminal, a wrapper to look through, or a type that must itself carry the
//! formattable annotation. Members are only enumerated for the root: a
//! nested type is validated in depth when it is analyzed as its own root.

use zf_diagnostic::{
    type_must_be_annotated, type_needs_default_constructor, value_type_indices_must_be_sequential,
    value_type_needs_matching_constructor, TypeSite,
};
use zf_ir::{Constructor, Location, Member, TypeId, TypeIntrospection, TypeKind};

use crate::ledger::{IndexLedger, LayoutVerdict};
use crate::stack::ensure_sufficient_stack;
use crate::{CheckContext, ShapeClassifier, TerminalTypes};

/// Immutable walk state, shared by every call of one root analysis.
pub(crate) struct Walker<'a, S: TypeIntrospection + ?Sized> {
    pub(crate) source: &'a S,
    pub(crate) terminals: &'a TerminalTypes,
    pub(crate) shapes: &'a ShapeClassifier,
    pub(crate) index_warning_threshold: i32,
}

impl<'a, S: TypeIntrospection + ?Sized> Walker<'a, S> {
    /// Validate `ty`.
    ///
    /// `caller` is where type-level findings are reported: the member that
    /// reached `ty`, or the root declaration. `via` is that member, absent
    /// only for the root itself.
    pub(crate) fn verify_type(
        &self,
        cx: &mut CheckContext,
        ty: TypeId,
        caller: &'a Location,
        via: Option<&'a Member>,
    ) {
        ensure_sufficient_stack(|| self.verify_type_inner(cx, ty, caller, via));
    }

    fn verify_type_inner(
        &self,
        cx: &mut CheckContext,
        ty: TypeId,
        caller: &'a Location,
        via: Option<&'a Member>,
    ) {
        if !cx.first_visit(ty) {
            tracing::trace!(?ty, "already visited");
            return;
        }

        let name = self.source.display_name(ty);
        if self.terminals.contains(name) {
            tracing::trace!(name, "terminal type");
            return;
        }

        match self.source.kind(ty) {
            TypeKind::Enum => return,
            // Open parameter, directly or inside an array or wrapper.
            TypeKind::TypeParameter => {
                tracing::trace!(name, "type parameter");
                return;
            }
            TypeKind::Array => {
                if let Some(element) = self.source.element_type(ty) {
                    self.verify_type(cx, element, caller, via);
                }
                return;
            }
            _ => {}
        }

        if via.is_some() && self.look_through(cx, ty, caller, via) {
            return;
        }

        let site = TypeSite {
            name,
            declared_at: self.source.location(ty),
        };

        if !self.source.is_formattable(ty) {
            cx.report(type_must_be_annotated(caller, site));
            return;
        }

        if !self.source.is_value_type(ty)
            && !self
                .source
                .constructors(ty)
                .iter()
                .any(Constructor::is_parameterless)
        {
            cx.report(type_needs_default_constructor(caller, site));
            return;
        }

        if via.is_none() {
            self.verify_members(cx, ty, caller, site);
        }
    }

    /// Validate the type arguments of a recognized wrapper instead of the
    /// wrapper. Returns `false` when `ty` is not a wrapper.
    fn look_through(
        &self,
        cx: &mut CheckContext,
        ty: TypeId,
        caller: &'a Location,
        via: Option<&'a Member>,
    ) -> bool {
        let Some(generic) = self.source.generic(ty) else {
            return false;
        };

        let shape = self.shapes.classify(self.source, ty);
        if !shape.is_wrapper() {
            return false;
        }

        tracing::trace!(%shape, wrapper = self.source.display_name(ty), "looking through wrapper");
        for &argument in &generic.arguments {
            self.verify_type(cx, argument, caller, via);
        }
        true
    }

    /// Full validation of a root: every property, then every field, sharing
    /// one ledger. The layout of a value type is only checked when nothing
    /// at all has been reported for this root.
    fn verify_members(
        &self,
        cx: &mut CheckContext,
        ty: TypeId,
        caller: &'a Location,
        site: TypeSite<'a>,
    ) {
        let members = self.source.members(ty);
        let mut ledger = IndexLedger::new();

        for member in members.iter().filter(|m| m.is_property()) {
            self.verify_property(cx, ty, member, &mut ledger);
        }
        for member in members.iter().filter(|m| m.is_field()) {
            self.verify_field(cx, ty, member, &mut ledger);
        }

        if !self.source.is_value_type(ty) {
            return;
        }
        if !cx.is_clean() {
            tracing::debug!(
                reported = cx.diagnostics().len(),
                "skipping layout check"
            );
            return;
        }

        match ledger.verify_layout(self.source, ty) {
            LayoutVerdict::Valid => {
                tracing::debug!(indices = ledger.len(), "value-type layout is valid");
            }
            LayoutVerdict::IndexGap { index } => {
                cx.report(value_type_indices_must_be_sequential(caller, site, index));
            }
            LayoutVerdict::NoMatchingConstructor { expected } => {
                let expected: Vec<&str> = expected
                    .iter()
                    .map(|&param| self.source.display_name(param))
                    .collect();
                cx.report(value_type_needs_matching_constructor(
                    caller, site, &expected,
                ));
            }
        }
    }
}
