use rust_decimal::Decimal;
use serde_derive::{Deserialize, Serialize};

use super::{voucher_line::VoucherLine, voucher_type::VoucherType};

/// Voucher lifecycle state. Only ever moves forward:
/// Draft -> Posted -> Voided.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoucherStatus {
    Draft,
    Posted,
    Voided,
}

impl VoucherStatus {
    pub fn can_transition_to(self, next: VoucherStatus) -> bool {
        matches!(
            (self, next),
            (VoucherStatus::Draft, VoucherStatus::Posted)
                | (VoucherStatus::Posted, VoucherStatus::Voided)
        )
    }
}

impl Default for VoucherStatus {
    fn default() -> Self {
        VoucherStatus::Draft
    }
}

/// A financial transaction record composed of one or more debit/credit
/// lines.
///
/// Dates are fixed-width, zero-padded ISO strings (`YYYY-MM-DD`) so that
/// lexical ordering matches calendar ordering. `doc_no` must be unique
/// within its scope; that uniqueness (and exactly-once posting) is enforced
/// by the persistence layer, not by this engine.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Voucher {
    /// Absent until persisted.
    pub id: Option<String>,
    pub doc_no: String,
    pub doc_date: String,
    pub post_date: Option<String>,
    pub description: String,
    pub voucher_type: VoucherType,
    pub total_amount: Option<Decimal>,
    pub lines: Vec<VoucherLine>,
    pub status: VoucherStatus,

    // Cross-reference to the corrected/original document, when this voucher
    // adjusts an earlier one.
    pub org_doc_no: Option<String>,
    pub org_doc_date: Option<String>,
}

impl Voucher {
    /// New draft with caller-supplied lines.
    pub fn draft(
        voucher_type: VoucherType,
        doc_no: impl Into<String>,
        doc_date: impl Into<String>,
        description: impl Into<String>,
        lines: Vec<VoucherLine>,
    ) -> Self {
        Self {
            doc_no: doc_no.into(),
            doc_date: doc_date.into(),
            description: description.into(),
            voucher_type,
            lines,
            status: VoucherStatus::Draft,
            ..Self::default()
        }
    }

    /// Posted and voided vouchers are frozen; only drafts may be
    /// content-edited.
    pub fn is_content_editable(&self) -> bool {
        self.status == VoucherStatus::Draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_only_moves_forward() {
        use VoucherStatus::*;
        assert!(Draft.can_transition_to(Posted));
        assert!(Posted.can_transition_to(Voided));

        assert!(!Draft.can_transition_to(Voided));
        assert!(!Posted.can_transition_to(Draft));
        assert!(!Voided.can_transition_to(Draft));
        assert!(!Voided.can_transition_to(Posted));
        assert!(!Draft.can_transition_to(Draft));
    }

    #[test]
    fn only_drafts_are_editable() {
        let mut v = Voucher::draft(VoucherType::General, "PKT-1", "2024-03-01", "x", vec![]);
        assert!(v.is_content_editable());
        v.status = VoucherStatus::Posted;
        assert!(!v.is_content_editable());
        v.status = VoucherStatus::Voided;
        assert!(!v.is_content_editable());
    }
}
