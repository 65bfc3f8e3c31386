//! Сборка экрана возвратов: счётчики вкладок и карточки заявок

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::actions::{self, RefundAction};
use super::aggregate::RefundRecord;
use super::statuses::{
    DISPUTE_STATUSES, PAYMENT_STATUSES, REFUND_STATUSES, RETURN_REQUEST_STATUSES,
};
use super::tabs::{self, RefundTab};
use crate::enums::viewer_role::ViewerRole;
use crate::shared::deadline::{self, UrgencyLabel};
use crate::shared::status_registry::StatusBadge;

/// Контекст построения экрана: кто смотрит и на какой момент времени
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardContext {
    pub role: ViewerRole,
    pub now: DateTime<Utc>,
    pub viewer_id: Option<String>,
}

impl BoardContext {
    pub fn new(role: ViewerRole, now: DateTime<Utc>) -> Self {
        Self {
            role,
            now,
            viewer_id: None,
        }
    }

    pub fn with_viewer(mut self, viewer_id: impl Into<String>) -> Self {
        self.viewer_id = Some(viewer_id.into());
        self
    }
}

/// Карточка заявки: исходные поля плюс всё, что нужно для отрисовки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundDisplayRecord {
    #[serde(flatten)]
    pub record: RefundRecord,
    pub display_status: StatusBadge,
    pub payment_badge: StatusBadge,
    pub return_badge: Option<StatusBadge>,
    pub dispute_badge: Option<StatusBadge>,
    pub urgency: UrgencyLabel,
    pub actions: Vec<RefundAction>,
}

impl RefundDisplayRecord {
    pub fn build(record: &RefundRecord, ctx: &BoardContext) -> Self {
        Self {
            display_status: REFUND_STATUSES.lookup(&record.status),
            payment_badge: PAYMENT_STATUSES.lookup(&record.payment_status),
            return_badge: record
                .return_stage()
                .map(|stage| RETURN_REQUEST_STATUSES.lookup(stage)),
            dispute_badge: record
                .dispute_stage()
                .map(|stage| DISPUTE_STATUSES.lookup(stage)),
            urgency: deadline::remaining(record.deadline, ctx.now),
            actions: actions::resolve(record, ctx.role),
            record: record.clone(),
        }
    }
}

/// Экран возвратов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundBoard {
    pub role: ViewerRole,
    pub generated_at: DateTime<Utc>,
    pub buckets: BTreeMap<RefundTab, usize>,
    /// Карточки в порядке входных заявок
    pub items: Vec<RefundDisplayRecord>,
}

impl RefundBoard {
    pub fn count(&self, tab: RefundTab) -> usize {
        self.buckets.get(&tab).copied().unwrap_or(0)
    }

    /// Оставить только карточки одной вкладки
    pub fn retain_tab(&mut self, tab: RefundTab) {
        self.items.retain(|item| tabs::matches(tab, &item.record));
    }
}

pub fn assemble(records: &[RefundRecord], role: ViewerRole, now: DateTime<Utc>) -> RefundBoard {
    assemble_with(records, &BoardContext::new(role, now))
}

pub fn assemble_with(records: &[RefundRecord], ctx: &BoardContext) -> RefundBoard {
    let buckets = tabs::classify(records).counts();
    let items = records
        .iter()
        .map(|record| RefundDisplayRecord::build(record, ctx))
        .collect();

    RefundBoard {
        role: ctx.role,
        generated_at: ctx.now,
        buckets,
        items,
    }
}
