use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::status_registry::WireStatus;

/// Статус заявки на возврат
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RefundStatus {
    Pending,
    Negotiation,
    Approved,
    Rejected,
    Dispute,
    Cancelled,
    Failed,
    /// Статус, которого клиент ещё не знает
    Other(String),
}

impl RefundStatus {
    pub fn code(&self) -> &str {
        match self {
            RefundStatus::Pending => "pending",
            RefundStatus::Negotiation => "negotiation",
            RefundStatus::Approved => "approved",
            RefundStatus::Rejected => "rejected",
            RefundStatus::Dispute => "dispute",
            RefundStatus::Cancelled => "cancelled",
            RefundStatus::Failed => "failed",
            RefundStatus::Other(code) => code,
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "pending" => RefundStatus::Pending,
            "negotiation" => RefundStatus::Negotiation,
            "approved" => RefundStatus::Approved,
            "rejected" => RefundStatus::Rejected,
            "dispute" => RefundStatus::Dispute,
            "cancelled" => RefundStatus::Cancelled,
            "failed" => RefundStatus::Failed,
            other => RefundStatus::Other(other.to_string()),
        }
    }

    /// Отклонена, отменена или завершилась ошибкой
    pub fn is_closed(&self) -> bool {
        matches!(
            self,
            RefundStatus::Rejected | RefundStatus::Cancelled | RefundStatus::Failed
        )
    }
}

impl From<String> for RefundStatus {
    fn from(code: String) -> Self {
        match RefundStatus::from_code(&code) {
            RefundStatus::Other(_) => RefundStatus::Other(code),
            known => known,
        }
    }
}

impl From<RefundStatus> for String {
    fn from(status: RefundStatus) -> Self {
        match status {
            RefundStatus::Other(code) => code,
            known => known.code().to_string(),
        }
    }
}

impl WireStatus for RefundStatus {
    fn code(&self) -> &str {
        RefundStatus::code(self)
    }
}

/// Тип возврата: с отправкой товара обратно или без (частичная компенсация)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RefundType {
    Return,
    Keep,
    Other(String),
}

impl RefundType {
    pub fn code(&self) -> &str {
        match self {
            RefundType::Return => "return",
            RefundType::Keep => "keep",
            RefundType::Other(code) => code,
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "return" => RefundType::Return,
            "keep" => RefundType::Keep,
            other => RefundType::Other(other.to_string()),
        }
    }
}

impl From<String> for RefundType {
    fn from(code: String) -> Self {
        match RefundType::from_code(&code) {
            RefundType::Other(_) => RefundType::Other(code),
            known => known,
        }
    }
}

impl From<RefundType> for String {
    fn from(value: RefundType) -> Self {
        match value {
            RefundType::Other(code) => code,
            known => known.code().to_string(),
        }
    }
}

/// Статус выплаты по возврату (независим от статуса заявки)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    Pending,
    Processing,
    Completed,
    Other(String),
}

impl PaymentStatus {
    pub fn code(&self) -> &str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Processing => "processing",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Other(code) => code,
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "pending" => PaymentStatus::Pending,
            "processing" => PaymentStatus::Processing,
            "completed" => PaymentStatus::Completed,
            other => PaymentStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for PaymentStatus {
    fn from(code: String) -> Self {
        match PaymentStatus::from_code(&code) {
            PaymentStatus::Other(_) => PaymentStatus::Other(code),
            known => known,
        }
    }
}

impl From<PaymentStatus> for String {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Other(code) => code,
            known => known.code().to_string(),
        }
    }
}

impl WireStatus for PaymentStatus {
    fn code(&self) -> &str {
        PaymentStatus::code(self)
    }
}

/// Этап возвратной отправки товара
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReturnRequestStatus {
    WaitingShipment,
    Shipped,
    Received,
    Inspected,
    Approved,
    Completed,
    Problem,
    Rejected,
    Other(String),
}

impl ReturnRequestStatus {
    pub fn code(&self) -> &str {
        match self {
            ReturnRequestStatus::WaitingShipment => "waiting_shipment",
            ReturnRequestStatus::Shipped => "shipped",
            ReturnRequestStatus::Received => "received",
            ReturnRequestStatus::Inspected => "inspected",
            ReturnRequestStatus::Approved => "approved",
            ReturnRequestStatus::Completed => "completed",
            ReturnRequestStatus::Problem => "problem",
            ReturnRequestStatus::Rejected => "rejected",
            ReturnRequestStatus::Other(code) => code,
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "waiting_shipment" => ReturnRequestStatus::WaitingShipment,
            "shipped" => ReturnRequestStatus::Shipped,
            "received" => ReturnRequestStatus::Received,
            "inspected" => ReturnRequestStatus::Inspected,
            "approved" => ReturnRequestStatus::Approved,
            "completed" => ReturnRequestStatus::Completed,
            "problem" => ReturnRequestStatus::Problem,
            "rejected" => ReturnRequestStatus::Rejected,
            other => ReturnRequestStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for ReturnRequestStatus {
    fn from(code: String) -> Self {
        match ReturnRequestStatus::from_code(&code) {
            ReturnRequestStatus::Other(_) => ReturnRequestStatus::Other(code),
            known => known,
        }
    }
}

impl From<ReturnRequestStatus> for String {
    fn from(status: ReturnRequestStatus) -> Self {
        match status {
            ReturnRequestStatus::Other(code) => code,
            known => known.code().to_string(),
        }
    }
}

impl WireStatus for ReturnRequestStatus {
    fn code(&self) -> &str {
        ReturnRequestStatus::code(self)
    }
}

/// Статус спора по возврату
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DisputeStatus {
    Pending,
    UnderReview,
    Resolved,
    Other(String),
}

impl DisputeStatus {
    pub fn code(&self) -> &str {
        match self {
            DisputeStatus::Pending => "pending",
            DisputeStatus::UnderReview => "under_review",
            DisputeStatus::Resolved => "resolved",
            DisputeStatus::Other(code) => code,
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "pending" => DisputeStatus::Pending,
            "under_review" => DisputeStatus::UnderReview,
            "resolved" => DisputeStatus::Resolved,
            other => DisputeStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for DisputeStatus {
    fn from(code: String) -> Self {
        match DisputeStatus::from_code(&code) {
            DisputeStatus::Other(_) => DisputeStatus::Other(code),
            known => known,
        }
    }
}

impl From<DisputeStatus> for String {
    fn from(status: DisputeStatus) -> Self {
        match status {
            DisputeStatus::Other(code) => code,
            known => known.code().to_string(),
        }
    }
}

impl WireStatus for DisputeStatus {
    fn code(&self) -> &str {
        DisputeStatus::code(self)
    }
}

/// Возвратная отправка товара продавцу
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRequest {
    /// Отсутствующий статус означает, что этап ещё не начат
    #[serde(default)]
    pub status: Option<ReturnRequestStatus>,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub shipped_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub received_at: Option<DateTime<Utc>>,
}

/// Спор, открытый по заявке
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundDispute {
    #[serde(default)]
    pub status: Option<DisputeStatus>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub resolution: Option<String>,
}

/// Заявка на возврат в том виде, в каком её отдаёт API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundRecord {
    pub id: String,
    pub status: RefundStatus,
    pub refund_type: RefundType,
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub return_request: Option<ReturnRequest>,
    #[serde(default)]
    pub dispute: Option<RefundDispute>,
    /// Когда истекает текущий этап
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    pub amount: f64,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl RefundRecord {
    pub fn new(
        id: impl Into<String>,
        status: RefundStatus,
        refund_type: RefundType,
        payment_status: PaymentStatus,
        amount: f64,
    ) -> Self {
        Self {
            id: id.into(),
            status,
            refund_type,
            payment_status,
            return_request: None,
            dispute: None,
            deadline: None,
            amount,
            order_id: None,
            reason: None,
            currency: None,
            created_at: None,
        }
    }

    pub fn with_return_stage(mut self, stage: ReturnRequestStatus) -> Self {
        let request = self.return_request.get_or_insert(ReturnRequest {
            status: None,
            tracking_number: None,
            shipped_at: None,
            received_at: None,
        });
        request.status = Some(stage);
        self
    }

    pub fn with_dispute(mut self, status: DisputeStatus) -> Self {
        let dispute = self.dispute.get_or_insert(RefundDispute {
            status: None,
            reason: None,
            resolution: None,
        });
        dispute.status = Some(status);
        self
    }

    pub fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Текущий этап возвратной отправки, если он известен
    pub fn return_stage(&self) -> Option<&ReturnRequestStatus> {
        self.return_request.as_ref().and_then(|r| r.status.as_ref())
    }

    /// Текущий статус спора, если спор открыт
    pub fn dispute_stage(&self) -> Option<&DisputeStatus> {
        self.dispute.as_ref().and_then(|d| d.status.as_ref())
    }

    pub fn is_return(&self) -> bool {
        self.refund_type == RefundType::Return
    }

    pub fn is_return_at(&self, stage: &ReturnRequestStatus) -> bool {
        self.return_stage() == Some(stage)
    }
}
