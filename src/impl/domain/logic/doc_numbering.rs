use chrono::{Datelike, Local, NaiveDate};
use rand::Rng;

use crate::entities::VoucherType;

/// Builds an advisory document number of the form `PREFIX-YYYYMM-RRRR`,
/// where the prefix comes from the voucher type's prefix table and `RRRR`
/// is a zero-padded pseudo-random suffix. `date` defaults to today.
///
/// Advisory only: the suffix is random, so the result is a human-readable
/// candidate with no uniqueness guarantee. The persistence layer must hold
/// a unique index on `doc_no` and regenerate on conflict.
pub fn generate_doc_no(voucher_type: VoucherType, date: Option<NaiveDate>) -> String {
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let suffix: u32 = rand::thread_rng().gen_range(0..10_000);
    format!(
        "{}-{:04}{:02}-{:04}",
        voucher_type.doc_no_prefix(),
        date.year(),
        date.month(),
        suffix
    )
}
