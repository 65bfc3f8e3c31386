//! Расчёт оставшегося времени до дедлайна
//!
//! Текущее время всегда передаётся явно, функция ничего не читает из часов.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Уровень срочности
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Expired,
    Urgent,
    Normal,
}

/// Подпись обратного отсчёта
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencyLabel {
    pub text: String,
    pub level: UrgencyLevel,
}

impl UrgencyLabel {
    /// Дедлайна нет: текст пустой, отрисовывать нечего
    pub fn none() -> Self {
        Self {
            text: String::new(),
            level: UrgencyLevel::Normal,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Сколько осталось до `deadline` относительно `now`
pub fn remaining(deadline: Option<DateTime<Utc>>, now: DateTime<Utc>) -> UrgencyLabel {
    match deadline {
        Some(deadline) => from_millis((deadline - now).num_milliseconds()),
        None => UrgencyLabel::none(),
    }
}

/// Подпись по разнице в миллисекундах (дни и часы усекаются)
pub fn from_millis(diff_ms: i64) -> UrgencyLabel {
    if diff_ms <= 0 {
        return UrgencyLabel {
            text: "Expired".to_string(),
            level: UrgencyLevel::Expired,
        };
    }

    let days = diff_ms / MS_PER_DAY;
    let hours = (diff_ms % MS_PER_DAY) / MS_PER_HOUR;

    if days >= 1 {
        UrgencyLabel {
            text: format!("{}d {}h left", days, hours),
            level: UrgencyLevel::Normal,
        }
    } else {
        UrgencyLabel {
            text: format!("{}h left", hours),
            level: UrgencyLevel::Urgent,
        }
    }
}
