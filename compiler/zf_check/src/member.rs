//! Member validation.
//!
//! Rules run in a fixed order and stop at the first failure for a member.
//! The only finding that does not stop validation is `IndexTooLarge`.

use zf_diagnostic::{
    duplicate_index, field_not_allowed_on_reference_type, index_too_large,
    member_must_be_overridable, member_needs_index, member_needs_public_accessors, MemberSite,
};
use zf_ir::{IndexAnnotation, Member, TypeId, TypeIntrospection};

use crate::ledger::{IndexEntry, IndexLedger};
use crate::walk::Walker;
use crate::CheckContext;

impl<'a, S: TypeIntrospection + ?Sized> Walker<'a, S> {
    pub(crate) fn verify_property(
        &self,
        cx: &mut CheckContext,
        owner: TypeId,
        property: &'a Member,
        ledger: &mut IndexLedger,
    ) {
        if !is_in_contract(property) {
            return;
        }

        let by_reference = !self.source.is_value_type(owner);
        let site = self.site(owner, property);

        if by_reference && !property.is_virtual() {
            cx.report(member_must_be_overridable(site));
            return;
        }

        if !self.claim_index(cx, owner, property, ledger) {
            return;
        }

        if by_reference && !property.accessors.is_readable_and_writable() {
            cx.report(member_needs_public_accessors(site));
            return;
        }

        self.descend(cx, property);
    }

    pub(crate) fn verify_field(
        &self,
        cx: &mut CheckContext,
        owner: TypeId,
        field: &'a Member,
        ledger: &mut IndexLedger,
    ) {
        if !is_in_contract(field) {
            return;
        }

        if !self.source.is_value_type(owner) {
            cx.report(field_not_allowed_on_reference_type(self.site(owner, field)));
            return;
        }

        if !self.claim_index(cx, owner, field, ledger) {
            return;
        }

        self.descend(cx, field);
    }

    /// Read the member's index and record it in the ledger. Returns whether
    /// validation of the member continues.
    fn claim_index(
        &self,
        cx: &mut CheckContext,
        owner: TypeId,
        member: &'a Member,
        ledger: &mut IndexLedger,
    ) -> bool {
        let index = match member.index {
            IndexAnnotation::Value(index) => index,
            IndexAnnotation::Missing | IndexAnnotation::Empty => {
                cx.report(member_needs_index(self.site(owner, member)));
                return false;
            }
            // Reported by the host's own compiler.
            IndexAnnotation::Null => return false,
        };

        let entry = IndexEntry {
            index,
            owner,
            member_type: member.ty,
        };
        if !ledger.record(entry) {
            cx.report(duplicate_index(self.site(owner, member), index));
            return false;
        }

        if index >= self.index_warning_threshold {
            cx.report(index_too_large(self.site(owner, member), index));
        }
        true
    }

    /// Validate the member's own type.
    fn descend(&self, cx: &mut CheckContext, member: &'a Member) {
        self.verify_type(cx, member.ty, &member.location, Some(member));
    }

    fn site(&self, owner: TypeId, member: &'a Member) -> MemberSite<'a> {
        MemberSite {
            owner: self.source.display_name(owner),
            name: &member.name,
            location: &member.location,
        }
    }
}

/// Non-public and ignored members are not part of the layout.
fn is_in_contract(member: &Member) -> bool {
    member.is_public() && !member.is_ignored()
}
