use chrono::{Local, NaiveDate};

use super::doc_numbering::generate_doc_no;
use crate::entities::{Voucher, VoucherStatus};

/// Deep-copies a voucher of any status into a brand-new draft dated today.
///
/// The copy gets fresh identity: its own id and every line id cleared, the
/// document and posting dates reset, and a regenerated advisory doc_no for
/// the original's type. All financial content (amounts, account codes,
/// dimensions) is preserved by value, so mutating either voucher never
/// affects the other.
pub fn duplicate(voucher: &Voucher) -> Voucher {
    duplicate_as_of(voucher, Local::now().date_naive())
}

/// Same as [`duplicate`], with the "current date" injected.
pub fn duplicate_as_of(voucher: &Voucher, today: NaiveDate) -> Voucher {
    let mut copy = voucher.clone();
    copy.id = None;
    for line in &mut copy.lines {
        line.id = None;
    }
    let today_iso = today.format("%Y-%m-%d").to_string();
    copy.doc_date = today_iso.clone();
    copy.post_date = Some(today_iso);
    copy.doc_no = generate_doc_no(voucher.voucher_type, Some(today));
    copy.status = VoucherStatus::Draft;
    copy
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::entities::{account, VoucherLine, VoucherType};

    fn posted_voucher() -> Voucher {
        let mut line = VoucherLine::debit(account("111"), dec!(1000000));
        line.id = Some("line-1".to_string());
        line.dimensions.partner = Some("ACME".to_string());
        let mut counter = VoucherLine::credit(account("511"), dec!(1000000));
        counter.id = Some("line-2".to_string());

        let mut voucher = Voucher::draft(
            VoucherType::Sale,
            "BH-202401-0042",
            "2024-01-20",
            "January sales",
            vec![line, counter],
        );
        voucher.id = Some("voucher-9".to_string());
        voucher.post_date = Some("2024-01-20".to_string());
        voucher.status = VoucherStatus::Posted;
        voucher
    }

    #[test]
    fn copy_gets_fresh_identity_and_draft_status() {
        let original = posted_voucher();
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let copy = duplicate_as_of(&original, today);

        assert_eq!(copy.id, None);
        assert!(copy.lines.iter().all(|l| l.id.is_none()));
        assert_eq!(copy.status, VoucherStatus::Draft);
        assert_ne!(copy.doc_no, original.doc_no);
        assert!(copy.doc_no.starts_with("BH-202406-"));
        assert_eq!(copy.doc_date, "2024-06-01");
        assert_eq!(copy.post_date.as_deref(), Some("2024-06-01"));
    }

    #[test]
    fn financial_content_is_preserved_by_value() {
        let original = posted_voucher();
        let copy = duplicate(&original);

        assert_eq!(copy.lines.len(), original.lines.len());
        for (copied, source) in copy.lines.iter().zip(&original.lines) {
            assert_eq!(copied.amount, source.amount);
            assert_eq!(copied.debit_account, source.debit_account);
            assert_eq!(copied.credit_account, source.credit_account);
            assert_eq!(copied.dimensions, source.dimensions);
        }
        assert_eq!(copy.voucher_type, original.voucher_type);
        assert_eq!(copy.description, original.description);
    }

    #[test]
    fn mutating_the_copy_never_touches_the_original() {
        let original = posted_voucher();
        let mut copy = duplicate(&original);

        copy.lines[0].amount = Some(dec!(1));
        copy.lines[0].dimensions.partner = Some("OTHER".to_string());
        copy.description.push_str(" (edited)");

        assert_eq!(original.lines[0].amount, Some(dec!(1000000)));
        assert_eq!(original.lines[0].dimensions.partner.as_deref(), Some("ACME"));
        assert_eq!(original.description, "January sales");
    }
}
