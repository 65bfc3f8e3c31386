use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::actions::RefundAction;
use super::aggregate::RefundRecord;
use super::tabs::RefundTab;

/// Запрос на построение экрана возвратов.
///
/// Заявки уже получены вызывающей стороной; `now` по умолчанию берётся
/// с часов сервера, `role` из настроек.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundBoardRequest {
    pub records: Vec<RefundRecord>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub viewer_id: Option<String>,
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
    /// Оставить в `items` только одну вкладку (счётчики считаются по всем)
    #[serde(default)]
    pub tab: Option<String>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub records: Vec<RefundRecord>,
}

/// ID заявок по вкладкам
pub type ClassifyResponse = BTreeMap<RefundTab, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundTabDto {
    pub id: String,
    pub label: String,
}

impl From<RefundTab> for RefundTabDto {
    fn from(tab: RefundTab) -> Self {
        Self {
            id: tab.id().to_string(),
            label: tab.label().to_string(),
        }
    }
}

/// Действие с подписью для кнопки
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundActionDto {
    pub id: String,
    pub label: String,
}

impl From<RefundAction> for RefundActionDto {
    fn from(action: RefundAction) -> Self {
        Self {
            id: action.id().to_string(),
            label: action.label().to_string(),
        }
    }
}

/// Поле для дополнительной сортировки карточек
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Date,
    Amount,
    Deadline,
}

impl SortKey {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "date" => Some(SortKey::Date),
            "amount" => Some(SortKey::Amount),
            "deadline" => Some(SortKey::Deadline),
            _ => None,
        }
    }

    /// Направление по умолчанию: новые и крупные сверху, ближайший дедлайн сверху
    pub fn default_dir(&self) -> SortDir {
        match self {
            SortKey::Date | SortKey::Amount => SortDir::Desc,
            SortKey::Deadline => SortDir::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "asc" => Some(SortDir::Asc),
            "desc" => Some(SortDir::Desc),
            _ => None,
        }
    }
}
