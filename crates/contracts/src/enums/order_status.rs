use serde::{Deserialize, Serialize};

use crate::shared::status_registry::{ColorToken, StatusEntry, StatusRegistry, WireStatus};

/// Статус заказа маркетплейса
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Refunded,
    /// Статус, которого клиент ещё не знает
    Other(String),
}

impl OrderStatus {
    pub fn code(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Refunded => "refunded",
            OrderStatus::Other(code) => code,
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "pending" => OrderStatus::Pending,
            "processing" => OrderStatus::Processing,
            "shipped" => OrderStatus::Shipped,
            "delivered" => OrderStatus::Delivered,
            "cancelled" => OrderStatus::Cancelled,
            "refunded" => OrderStatus::Refunded,
            other => OrderStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for OrderStatus {
    fn from(code: String) -> Self {
        match OrderStatus::from_code(&code) {
            OrderStatus::Other(_) => OrderStatus::Other(code),
            known => known,
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(code) => code,
            known => known.code().to_string(),
        }
    }
}

impl WireStatus for OrderStatus {
    fn code(&self) -> &str {
        OrderStatus::code(self)
    }
}

/// Отображение статусов заказа
pub static ORDER_STATUSES: StatusRegistry<OrderStatus> = StatusRegistry::new(
    "order",
    &[
        StatusEntry::new("pending", "Pending", ColorToken::Warning, "clock"),
        StatusEntry::new("processing", "Processing", ColorToken::Primary, "loader"),
        StatusEntry::new("shipped", "Shipped", ColorToken::Primary, "truck"),
        StatusEntry::new("delivered", "Delivered", ColorToken::Success, "check-circle"),
        StatusEntry::new("cancelled", "Cancelled", ColorToken::Neutral, "slash"),
        StatusEntry::new("refunded", "Refunded", ColorToken::Neutral, "rotate-ccw"),
    ],
);
