//! Реестр отображения статусов
//!
//! Один обобщённый тип `StatusRegistry<S>` вместо разрозненных `match`
//! по строкам в каждом экране. Для каждого домена (возврат, оплата,
//! возвратная отправка, спор, заказ) заводится своя статическая таблица.
//!
//! ```rust,ignore
//! use contracts::domain::a025_refund_request::statuses::REFUND_STATUSES;
//!
//! let badge = REFUND_STATUSES.lookup(&record.status);
//! println!("{} ({})", badge.label, badge.color_token.as_str());
//! ```

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Иконка для статусов, которых нет в таблице
pub const FALLBACK_ICON: &str = "clock";

/// Статус, пришедший из API в виде строкового кода
pub trait WireStatus {
    /// Исходный код статуса (как в JSON)
    fn code(&self) -> &str;
}

/// Цветовой токен бейджа (совпадает с вариантами компонента Badge)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Primary,
    Success,
    Warning,
    Error,
    Neutral,
}

impl ColorToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorToken::Primary => "primary",
            ColorToken::Success => "success",
            ColorToken::Warning => "warning",
            ColorToken::Error => "error",
            ColorToken::Neutral => "neutral",
        }
    }
}

/// Строка таблицы реестра
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusEntry {
    pub code: &'static str,
    pub label: &'static str,
    pub color: ColorToken,
    pub icon: &'static str,
}

impl StatusEntry {
    pub const fn new(
        code: &'static str,
        label: &'static str,
        color: ColorToken,
        icon: &'static str,
    ) -> Self {
        Self {
            code,
            label,
            color,
            icon,
        }
    }

    pub fn badge(&self) -> StatusBadge {
        StatusBadge {
            label: self.label.to_string(),
            color_token: self.color,
            icon_key: self.icon.to_string(),
        }
    }
}

/// Готовый к отрисовке бейдж статуса
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBadge {
    pub label: String,
    pub color_token: ColorToken,
    pub icon_key: String,
}

impl StatusBadge {
    /// Бейдж для неизвестного статуса: код с заглавной буквы, нейтральный цвет
    pub fn fallback(code: &str) -> Self {
        Self {
            label: capitalize(code),
            color_token: ColorToken::Neutral,
            icon_key: FALLBACK_ICON.to_string(),
        }
    }
}

/// Реестр статусов одного домена
pub struct StatusRegistry<S> {
    domain: &'static str,
    entries: &'static [StatusEntry],
    _status: PhantomData<fn(&S)>,
}

impl<S> StatusRegistry<S> {
    pub const fn new(domain: &'static str, entries: &'static [StatusEntry]) -> Self {
        Self {
            domain,
            entries,
            _status: PhantomData,
        }
    }

    pub fn entries(&self) -> &'static [StatusEntry] {
        self.entries
    }

    pub fn get(&self, code: &str) -> Option<&'static StatusEntry> {
        self.entries.iter().find(|e| e.code == code)
    }

    /// Поиск по сырому коду. Никогда не падает: для неизвестного кода
    /// возвращается бейдж по умолчанию.
    pub fn lookup_code(&self, code: &str) -> StatusBadge {
        match self.get(code) {
            Some(entry) => entry.badge(),
            None => StatusBadge::fallback(code),
        }
    }

    /// Таблица в виде DTO для отдачи клиенту
    pub fn to_dto(&self) -> StatusTableDto {
        StatusTableDto {
            domain: self.domain.to_string(),
            entries: self
                .entries
                .iter()
                .map(|e| StatusEntryDto {
                    code: e.code.to_string(),
                    badge: e.badge(),
                })
                .collect(),
        }
    }
}

impl<S: WireStatus> StatusRegistry<S> {
    pub fn lookup(&self, status: &S) -> StatusBadge {
        self.lookup_code(status.code())
    }
}

/// DTO таблицы статусов
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTableDto {
    pub domain: String,
    pub entries: Vec<StatusEntryDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntryDto {
    pub code: String,
    #[serde(flatten)]
    pub badge: StatusBadge,
}

/// Первая буква в верхнем регистре, остальное без изменений
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}
