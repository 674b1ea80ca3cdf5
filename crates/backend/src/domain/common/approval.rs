//! Approval stamping shared by cash logs and expense reports.
//!
//! Moving a record to `approved`/`rejected` fills `approved_by` and
//! `approved_at` unless the caller sent them. Repeating the transition the
//! record is already in keeps the first stamp.

use contracts::enums::ApprovalStatus;
use serde_json::{Map, Value};

use super::clock;

/// Approval columns of the stored record
#[derive(Debug, Clone, Copy)]
pub struct CurrentApproval<'a> {
    pub status: &'a str,
    pub approved_by: &'a str,
    pub approved_at: &'a str,
}

/// Fields to add to an update that requests `requested`
pub fn stamp(
    requested: ApprovalStatus,
    current: CurrentApproval<'_>,
    supplied_by: Option<&str>,
    supplied_at: Option<&str>,
    approver: &str,
    now: &str,
) -> Map<String, Value> {
    let mut fields = Map::new();
    if !requested.is_decision() {
        return fields;
    }
    let same_status = current.status.eq_ignore_ascii_case(requested.as_str());

    if supplied_by.is_none() && (!same_status || current.approved_by.is_empty()) {
        fields.insert("approved_by".into(), Value::from(approver));
    }
    if supplied_at.is_none() && (!same_status || current.approved_at.is_empty()) {
        fields.insert("approved_at".into(), Value::from(now));
    }
    fields
}

/// [`stamp`] with the wall clock
pub fn stamp_now(
    requested: ApprovalStatus,
    current: CurrentApproval<'_>,
    supplied_by: Option<&str>,
    supplied_at: Option<&str>,
    approver: &str,
) -> Map<String, Value> {
    stamp(requested, current, supplied_by, supplied_at, approver, &clock::now_iso())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PENDING: CurrentApproval<'static> = CurrentApproval {
        status: "pending",
        approved_by: "",
        approved_at: "",
    };

    #[test]
    fn first_approval_is_stamped() {
        let fields = stamp(ApprovalStatus::Approved, PENDING, None, None, "Sari", "T1");
        assert_eq!(fields["approved_by"], "Sari");
        assert_eq!(fields["approved_at"], "T1");
    }

    #[test]
    fn repeated_approval_keeps_first_stamp() {
        let current = CurrentApproval {
            status: "approved",
            approved_by: "Sari",
            approved_at: "T1",
        };
        let fields = stamp(ApprovalStatus::Approved, current, None, None, "Andi", "T2");
        assert!(fields.is_empty());
    }

    #[test]
    fn switching_decision_restamps() {
        let current = CurrentApproval {
            status: "approved",
            approved_by: "Sari",
            approved_at: "T1",
        };
        let fields = stamp(ApprovalStatus::Rejected, current, None, None, "Andi", "T2");
        assert_eq!(fields["approved_by"], "Andi");
        assert_eq!(fields["approved_at"], "T2");
    }

    #[test]
    fn supplied_values_win() {
        let fields = stamp(ApprovalStatus::Approved, PENDING, Some("Owner"), None, "Sari", "T1");
        assert!(!fields.contains_key("approved_by"));
        assert_eq!(fields["approved_at"], "T1");
    }

    #[test]
    fn back_to_pending_stamps_nothing() {
        assert!(stamp(ApprovalStatus::Pending, PENDING, None, None, "Sari", "T1").is_empty());
    }
}
