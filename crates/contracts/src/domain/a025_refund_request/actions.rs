//! Действия, доступные по заявке на возврат для каждой роли

use serde::{Deserialize, Serialize};

use super::aggregate::{PaymentStatus, RefundRecord, RefundStatus, RefundType, ReturnRequestStatus};
use crate::enums::viewer_role::ViewerRole;

/// Идентификатор действия над заявкой
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundAction {
    CancelRequest,
    AcceptOffer,
    CounterOffer,
    OpenDispute,
    ShipReturn,
    TrackReturn,
    AppealDecision,
    SubmitEvidence,
    ApproveRefund,
    RejectRefund,
    ProposeOffer,
    ConfirmReceipt,
    MarkInspected,
    ApproveInspection,
    RejectInspection,
    ReleasePayment,
    ResolveForBuyer,
    ResolveForSeller,
}

impl RefundAction {
    pub fn id(&self) -> &'static str {
        match self {
            RefundAction::CancelRequest => "cancel_request",
            RefundAction::AcceptOffer => "accept_offer",
            RefundAction::CounterOffer => "counter_offer",
            RefundAction::OpenDispute => "open_dispute",
            RefundAction::ShipReturn => "ship_return",
            RefundAction::TrackReturn => "track_return",
            RefundAction::AppealDecision => "appeal_decision",
            RefundAction::SubmitEvidence => "submit_evidence",
            RefundAction::ApproveRefund => "approve_refund",
            RefundAction::RejectRefund => "reject_refund",
            RefundAction::ProposeOffer => "propose_offer",
            RefundAction::ConfirmReceipt => "confirm_receipt",
            RefundAction::MarkInspected => "mark_inspected",
            RefundAction::ApproveInspection => "approve_inspection",
            RefundAction::RejectInspection => "reject_inspection",
            RefundAction::ReleasePayment => "release_payment",
            RefundAction::ResolveForBuyer => "resolve_for_buyer",
            RefundAction::ResolveForSeller => "resolve_for_seller",
        }
    }

    /// Подпись кнопки
    pub fn label(&self) -> &'static str {
        match self {
            RefundAction::CancelRequest => "Cancel Request",
            RefundAction::AcceptOffer => "Accept Offer",
            RefundAction::CounterOffer => "Counter Offer",
            RefundAction::OpenDispute => "Open Dispute",
            RefundAction::ShipReturn => "Ship Return",
            RefundAction::TrackReturn => "Track Return",
            RefundAction::AppealDecision => "Appeal Decision",
            RefundAction::SubmitEvidence => "Submit Evidence",
            RefundAction::ApproveRefund => "Approve Refund",
            RefundAction::RejectRefund => "Reject Refund",
            RefundAction::ProposeOffer => "Propose Offer",
            RefundAction::ConfirmReceipt => "Confirm Receipt",
            RefundAction::MarkInspected => "Mark Inspected",
            RefundAction::ApproveInspection => "Approve Inspection",
            RefundAction::RejectInspection => "Reject Inspection",
            RefundAction::ReleasePayment => "Release Payment",
            RefundAction::ResolveForBuyer => "Resolve for Buyer",
            RefundAction::ResolveForSeller => "Resolve for Seller",
        }
    }

    pub fn all() -> Vec<RefundAction> {
        use RefundAction::*;
        vec![
            CancelRequest,
            AcceptOffer,
            CounterOffer,
            OpenDispute,
            ShipReturn,
            TrackReturn,
            AppealDecision,
            SubmitEvidence,
            ApproveRefund,
            RejectRefund,
            ProposeOffer,
            ConfirmReceipt,
            MarkInspected,
            ApproveInspection,
            RejectInspection,
            ReleasePayment,
            ResolveForBuyer,
            ResolveForSeller,
        ]
    }
}

/// Упорядоченный список действий по статусу, типу возврата и этапу отправки.
///
/// Для завершённых и неизвестных статусов список пустой.
pub fn actions(
    status: &RefundStatus,
    refund_type: &RefundType,
    return_stage: Option<&ReturnRequestStatus>,
    role: ViewerRole,
) -> Vec<RefundAction> {
    use RefundAction::*;

    match (status, role) {
        (RefundStatus::Pending, ViewerRole::Customer) => vec![CancelRequest],
        (RefundStatus::Pending, ViewerRole::Seller) => {
            vec![ApproveRefund, RejectRefund, ProposeOffer]
        }
        (RefundStatus::Pending, ViewerRole::Admin) => vec![ApproveRefund, RejectRefund],

        (RefundStatus::Negotiation, ViewerRole::Customer) => {
            vec![AcceptOffer, CounterOffer, CancelRequest, OpenDispute]
        }
        (RefundStatus::Negotiation, ViewerRole::Seller) => {
            vec![ProposeOffer, ApproveRefund, RejectRefund]
        }
        (RefundStatus::Negotiation, ViewerRole::Admin) => vec![ApproveRefund, RejectRefund],

        (RefundStatus::Approved, _) => match refund_type {
            RefundType::Return => return_actions(return_stage, role),
            RefundType::Keep if role == ViewerRole::Admin => vec![ReleasePayment],
            _ => Vec::new(),
        },

        (RefundStatus::Dispute, ViewerRole::Admin) => vec![ResolveForBuyer, ResolveForSeller],
        (RefundStatus::Dispute, _) => vec![SubmitEvidence],

        (RefundStatus::Rejected, ViewerRole::Customer) => vec![AppealDecision],

        (RefundStatus::Rejected, _)
        | (RefundStatus::Cancelled, _)
        | (RefundStatus::Failed, _)
        | (RefundStatus::Other(_), _) => Vec::new(),
    }
}

/// Действия по одобренному возврату с отправкой товара
fn return_actions(stage: Option<&ReturnRequestStatus>, role: ViewerRole) -> Vec<RefundAction> {
    use RefundAction::*;

    match (role, stage) {
        (ViewerRole::Customer, None | Some(ReturnRequestStatus::WaitingShipment)) => {
            vec![ShipReturn]
        }
        (ViewerRole::Customer, Some(ReturnRequestStatus::Shipped)) => vec![TrackReturn],
        (
            ViewerRole::Customer,
            Some(ReturnRequestStatus::Problem | ReturnRequestStatus::Rejected),
        ) => vec![OpenDispute],

        (ViewerRole::Seller, Some(ReturnRequestStatus::Shipped)) => {
            vec![TrackReturn, ConfirmReceipt]
        }
        (ViewerRole::Seller, Some(ReturnRequestStatus::Received)) => vec![MarkInspected],
        (ViewerRole::Seller, Some(ReturnRequestStatus::Inspected)) => {
            vec![ApproveInspection, RejectInspection]
        }
        (ViewerRole::Seller, Some(ReturnRequestStatus::Problem)) => vec![OpenDispute],

        (ViewerRole::Admin, Some(ReturnRequestStatus::Shipped)) => vec![TrackReturn],
        (ViewerRole::Admin, Some(ReturnRequestStatus::Approved)) => vec![ReleasePayment],

        _ => Vec::new(),
    }
}

/// Действия для конкретной заявки. Выплаченный возврат считается завершённым.
pub fn resolve(record: &RefundRecord, role: ViewerRole) -> Vec<RefundAction> {
    if record.payment_status == PaymentStatus::Completed {
        return Vec::new();
    }
    actions(
        &record.status,
        &record.refund_type,
        record.return_stage(),
        role,
    )
}

#[cfg(test)]
mod tests {
    use super::RefundAction::*;
    use super::*;

    fn record(status: RefundStatus, refund_type: RefundType) -> RefundRecord {
        RefundRecord::new("rf", status, refund_type, PaymentStatus::Pending, 100.0)
    }

    #[test]
    fn test_customer_can_appeal_rejection_but_seller_cannot() {
        let rejected = RefundStatus::Rejected;
        assert_eq!(
            actions(&rejected, &RefundType::Keep, None, ViewerRole::Customer),
            vec![AppealDecision]
        );
        assert!(actions(&rejected, &RefundType::Keep, None, ViewerRole::Seller).is_empty());
        assert!(actions(&rejected, &RefundType::Keep, None, ViewerRole::Admin).is_empty());
    }

    #[test]
    fn test_every_action_has_wire_id_and_label() {
        let all = RefundAction::all();
        assert_eq!(all.len(), 18);
        for action in all {
            assert_eq!(serde_json::to_value(action).unwrap(), action.id());
            assert!(!action.label().is_empty());
        }
        assert_eq!(ResolveForBuyer.label(), "Resolve for Buyer");
    }

    #[test]
    fn test_terminal_statuses_have_no_actions() {
        for status in [RefundStatus::Cancelled, RefundStatus::Failed] {
            for role in ViewerRole::all() {
                assert!(actions(&status, &RefundType::Return, None, role).is_empty());
            }
        }
    }

    #[test]
    fn test_unknown_status_has_no_actions() {
        let status = RefundStatus::from_code("totally_unknown");
        for role in ViewerRole::all() {
            assert!(actions(&status, &RefundType::Keep, None, role).is_empty());
        }
    }

    #[test]
    fn test_pending_actions_differ_by_role() {
        let pending = RefundStatus::Pending;
        assert_eq!(
            actions(&pending, &RefundType::Keep, None, ViewerRole::Customer),
            vec![CancelRequest]
        );
        assert_eq!(
            actions(&pending, &RefundType::Keep, None, ViewerRole::Seller),
            vec![ApproveRefund, RejectRefund, ProposeOffer]
        );
    }

    #[test]
    fn test_return_stage_refines_actions() {
        let approved = RefundStatus::Approved;
        let ret = RefundType::Return;

        assert_eq!(
            actions(&approved, &ret, None, ViewerRole::Customer),
            vec![ShipReturn]
        );
        assert_eq!(
            actions(
                &approved,
                &ret,
                Some(&ReturnRequestStatus::Shipped),
                ViewerRole::Customer
            ),
            vec![TrackReturn]
        );
        assert_eq!(
            actions(
                &approved,
                &ret,
                Some(&ReturnRequestStatus::Shipped),
                ViewerRole::Seller
            ),
            vec![TrackReturn, ConfirmReceipt]
        );
        assert_eq!(
            actions(
                &approved,
                &ret,
                Some(&ReturnRequestStatus::Inspected),
                ViewerRole::Seller
            ),
            vec![ApproveInspection, RejectInspection]
        );
        assert!(actions(
            &approved,
            &ret,
            Some(&ReturnRequestStatus::WaitingShipment),
            ViewerRole::Seller
        )
        .is_empty());
    }

    #[test]
    fn test_keep_refund_has_no_shipment_actions() {
        let approved = RefundStatus::Approved;
        assert!(actions(
            &approved,
            &RefundType::Keep,
            Some(&ReturnRequestStatus::Shipped),
            ViewerRole::Customer
        )
        .is_empty());
        assert_eq!(
            actions(&approved, &RefundType::Keep, None, ViewerRole::Admin),
            vec![ReleasePayment]
        );
    }

    #[test]
    fn test_dispute_actions() {
        let dispute = RefundStatus::Dispute;
        assert_eq!(
            actions(&dispute, &RefundType::Keep, None, ViewerRole::Admin),
            vec![ResolveForBuyer, ResolveForSeller]
        );
        assert_eq!(
            actions(&dispute, &RefundType::Keep, None, ViewerRole::Customer),
            vec![SubmitEvidence]
        );
    }

    #[test]
    fn test_resolve_treats_paid_refund_as_completed() {
        let mut paid = record(RefundStatus::Approved, RefundType::Keep);
        paid.payment_status = PaymentStatus::Completed;
        assert!(resolve(&paid, ViewerRole::Admin).is_empty());

        let shipped = record(RefundStatus::Approved, RefundType::Return)
            .with_return_stage(ReturnRequestStatus::Shipped);
        assert_eq!(resolve(&shipped, ViewerRole::Admin), vec![TrackReturn]);
    }
}
