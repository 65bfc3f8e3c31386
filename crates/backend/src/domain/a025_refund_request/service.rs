use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use contracts::domain::a025_refund_request::actions::RefundAction;
use contracts::domain::a025_refund_request::aggregate::RefundRecord;
use contracts::domain::a025_refund_request::board::{
    assemble_with, BoardContext, RefundBoard, RefundDisplayRecord,
};
use contracts::domain::a025_refund_request::dto::{
    ClassifyResponse, RefundActionDto, RefundBoardRequest, RefundTabDto, SortDir, SortKey,
};
use contracts::domain::a025_refund_request::statuses;
use contracts::domain::a025_refund_request::tabs::{classify, RefundTab};
use contracts::enums::viewer_role::ViewerRole;
use contracts::shared::status_registry::StatusTableDto;

use super::error::BoardError;
use crate::shared::config::BoardConfig;

/// Построить экран возвратов по уже полученным заявкам.
///
/// `clock_now` подставляется, если запрос не передал своё `now`.
pub fn build_board(
    request: RefundBoardRequest,
    defaults: &BoardConfig,
    clock_now: DateTime<Utc>,
) -> Result<RefundBoard, BoardError> {
    let role = match request.role.as_deref() {
        Some(code) => {
            ViewerRole::from_code(code).ok_or_else(|| BoardError::UnknownRole(code.to_string()))?
        }
        None => defaults.default_role,
    };

    let tab = request
        .tab
        .as_deref()
        .map(|id| RefundTab::from_id(id).ok_or_else(|| BoardError::UnknownTab(id.to_string())))
        .transpose()?;

    let sort_key = request
        .sort_by
        .as_deref()
        .map(|code| {
            SortKey::from_code(code).ok_or_else(|| BoardError::UnknownSortKey(code.to_string()))
        })
        .transpose()?;

    let sort_dir = request
        .sort_dir
        .as_deref()
        .map(|code| {
            SortDir::from_code(code).ok_or_else(|| BoardError::UnknownSortDir(code.to_string()))
        })
        .transpose()?;

    let mut ctx = BoardContext::new(role, request.now.unwrap_or(clock_now));
    ctx.viewer_id = request.viewer_id;

    let mut board = assemble_with(&request.records, &ctx);

    if let Some(tab) = tab {
        board.retain_tab(tab);
    }
    if let Some(key) = sort_key {
        sort_items(&mut board.items, key, sort_dir.unwrap_or_else(|| key.default_dir()));
    }

    tracing::debug!(
        role = %role,
        viewer = ?ctx.viewer_id,
        records = request.records.len(),
        items = board.items.len(),
        "refund board assembled"
    );

    Ok(board)
}

/// ID заявок по вкладкам
pub fn classify_ids(records: &[RefundRecord]) -> ClassifyResponse {
    let buckets = classify(records);
    RefundTab::all()
        .into_iter()
        .map(|tab| {
            let ids = buckets.ids(tab).into_iter().map(str::to_string).collect();
            (tab, ids)
        })
        .collect()
}

pub fn status_tables() -> Vec<StatusTableDto> {
    statuses::all_tables()
}

pub fn tabs() -> Vec<RefundTabDto> {
    RefundTab::all().into_iter().map(RefundTabDto::from).collect()
}

/// Справочник действий: id и подпись кнопки
pub fn action_labels() -> Vec<RefundActionDto> {
    RefundAction::all().into_iter().map(RefundActionDto::from).collect()
}

/// Стабильная сортировка карточек; пустые значения всегда в конце
pub fn sort_items(items: &mut [RefundDisplayRecord], key: SortKey, dir: SortDir) {
    items.sort_by(|a, b| match key {
        SortKey::Date => compare_optional(a.record.created_at, b.record.created_at, dir),
        SortKey::Amount => compare_optional(Some(a.record.amount), Some(b.record.amount), dir),
        SortKey::Deadline => compare_optional(a.record.deadline, b.record.deadline, dir),
    });
}

fn compare_optional<T: PartialOrd>(a: Option<T>, b: Option<T>, dir: SortDir) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            match dir {
                SortDir::Asc => ord,
                SortDir::Desc => ord.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
