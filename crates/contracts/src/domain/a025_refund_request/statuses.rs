//! Таблицы отображения статусов заявки на возврат

use super::aggregate::{DisputeStatus, PaymentStatus, RefundStatus, ReturnRequestStatus};
use crate::enums::order_status::ORDER_STATUSES;
use crate::shared::status_registry::{ColorToken, StatusEntry, StatusRegistry, StatusTableDto};

pub static REFUND_STATUSES: StatusRegistry<RefundStatus> = StatusRegistry::new(
    "refund",
    &[
        StatusEntry::new("pending", "Pending", ColorToken::Warning, "clock"),
        StatusEntry::new("negotiation", "Negotiation", ColorToken::Primary, "message-circle"),
        StatusEntry::new("approved", "Approved", ColorToken::Success, "check-circle"),
        StatusEntry::new("rejected", "Rejected", ColorToken::Error, "x-circle"),
        StatusEntry::new("dispute", "Dispute", ColorToken::Error, "alert-triangle"),
        StatusEntry::new("cancelled", "Cancelled", ColorToken::Neutral, "slash"),
        StatusEntry::new("failed", "Failed", ColorToken::Error, "alert-circle"),
    ],
);

pub static PAYMENT_STATUSES: StatusRegistry<PaymentStatus> = StatusRegistry::new(
    "payment",
    &[
        StatusEntry::new("pending", "Payment Pending", ColorToken::Warning, "clock"),
        StatusEntry::new("processing", "Processing", ColorToken::Primary, "loader"),
        StatusEntry::new("completed", "Refunded", ColorToken::Success, "check-circle"),
    ],
);

pub static RETURN_REQUEST_STATUSES: StatusRegistry<ReturnRequestStatus> = StatusRegistry::new(
    "return_request",
    &[
        StatusEntry::new("waiting_shipment", "Awaiting Shipment", ColorToken::Warning, "package"),
        StatusEntry::new("shipped", "Shipped", ColorToken::Primary, "truck"),
        StatusEntry::new("received", "Received", ColorToken::Primary, "inbox"),
        StatusEntry::new("inspected", "Inspected", ColorToken::Primary, "search"),
        StatusEntry::new("approved", "Return Approved", ColorToken::Success, "check-circle"),
        StatusEntry::new("completed", "Return Completed", ColorToken::Success, "check-circle"),
        StatusEntry::new("problem", "Problem", ColorToken::Error, "alert-triangle"),
        StatusEntry::new("rejected", "Return Rejected", ColorToken::Error, "x-circle"),
    ],
);

pub static DISPUTE_STATUSES: StatusRegistry<DisputeStatus> = StatusRegistry::new(
    "dispute",
    &[
        StatusEntry::new("pending", "Dispute Opened", ColorToken::Warning, "alert-triangle"),
        StatusEntry::new("under_review", "Under Review", ColorToken::Primary, "shield"),
        StatusEntry::new("resolved", "Resolved", ColorToken::Success, "check-circle"),
    ],
);

/// Все таблицы статусов, которые нужны экранам возвратов и заказов
pub fn all_tables() -> Vec<StatusTableDto> {
    vec![
        REFUND_STATUSES.to_dto(),
        PAYMENT_STATUSES.to_dto(),
        RETURN_REQUEST_STATUSES.to_dto(),
        DISPUTE_STATUSES.to_dto(),
        ORDER_STATUSES.to_dto(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refund_registry_canonical_entries() {
        let badge = REFUND_STATUSES.lookup(&RefundStatus::Negotiation);
        assert_eq!(badge.label, "Negotiation");
        assert_eq!(badge.color_token, ColorToken::Primary);
        assert_eq!(badge.icon_key, "message-circle");

        let badge = REFUND_STATUSES.lookup(&RefundStatus::Cancelled);
        assert_eq!(badge.label, "Cancelled");
        assert_eq!(badge.color_token, ColorToken::Neutral);
    }

    #[test]
    fn test_every_known_status_has_an_entry() {
        for status in [
            RefundStatus::Pending,
            RefundStatus::Negotiation,
            RefundStatus::Approved,
            RefundStatus::Rejected,
            RefundStatus::Dispute,
            RefundStatus::Cancelled,
            RefundStatus::Failed,
        ] {
            assert!(REFUND_STATUSES.get(status.code()).is_some(), "{}", status.code());
        }
        for status in [
            ReturnRequestStatus::WaitingShipment,
            ReturnRequestStatus::Shipped,
            ReturnRequestStatus::Received,
            ReturnRequestStatus::Inspected,
            ReturnRequestStatus::Approved,
            ReturnRequestStatus::Completed,
            ReturnRequestStatus::Problem,
            ReturnRequestStatus::Rejected,
        ] {
            assert!(
                RETURN_REQUEST_STATUSES.get(status.code()).is_some(),
                "{}",
                status.code()
            );
        }
        assert_eq!(PAYMENT_STATUSES.entries().len(), 3);
        assert_eq!(DISPUTE_STATUSES.entries().len(), 3);
    }

    #[test]
    fn test_unknown_refund_status_falls_back() {
        let badge = REFUND_STATUSES.lookup(&RefundStatus::from_code("totally_unknown"));
        assert_eq!(badge.label, "Totally_unknown");
        assert_eq!(badge.color_token, ColorToken::Neutral);
        assert_eq!(badge.icon_key, "clock");
    }

    #[test]
    fn test_all_tables_domains() {
        let domains: Vec<String> = all_tables().into_iter().map(|t| t.domain).collect();
        assert_eq!(
            domains,
            vec!["refund", "payment", "return_request", "dispute", "order"]
        );
    }
}
