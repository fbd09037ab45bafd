/// Whether `candidate` falls on or before the active lock-until date.
///
/// No lock date means nothing is locked. The comparison is lexical, which is
/// correct for fixed-width, zero-padded ISO dates. This is an advisory
/// check: strings that do not even look like ISO dates are treated as not
/// locked rather than rejected, so a malformed input never blocks a caller.
pub fn is_date_locked(candidate: &str, lock_until: Option<&str>) -> bool {
    let Some(lock_until) = lock_until else {
        return false;
    };
    if !looks_like_iso_date(candidate) || !looks_like_iso_date(lock_until) {
        return false;
    }
    candidate <= lock_until
}

// Shape check only (YYYY-MM-DD); a full calendar parse would reject more
// than this advisory guard is allowed to.
fn looks_like_iso_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locked_on_or_before_the_lock_date() {
        assert!(is_date_locked("2024-01-15", Some("2024-01-31")));
        assert!(is_date_locked("2024-01-31", Some("2024-01-31")));
    }

    #[test]
    fn unlocked_after_the_lock_date() {
        assert!(!is_date_locked("2024-02-15", Some("2024-01-31")));
        assert!(!is_date_locked("2024-02-01", Some("2024-01-31")));
    }

    #[test]
    fn no_lock_date_means_never_locked() {
        assert!(!is_date_locked("2024-01-15", None));
    }

    #[test]
    fn malformed_inputs_degrade_to_not_locked() {
        assert!(!is_date_locked("15/01/2024", Some("2024-01-31")));
        assert!(!is_date_locked("", Some("2024-01-31")));
        assert!(!is_date_locked("2024-1-15", Some("2024-01-31")));
        assert!(!is_date_locked("2024-01-15", Some("January 31")));
        assert!(!is_date_locked("2024-01-15", Some("")));
    }

    #[test]
    fn lexical_comparison_spans_year_boundaries() {
        assert!(is_date_locked("2023-12-31", Some("2024-01-31")));
        assert!(!is_date_locked("2025-01-01", Some("2024-12-31")));
    }
}
