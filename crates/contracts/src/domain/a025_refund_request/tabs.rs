//! Раскладка заявок по вкладкам экрана возвратов
//!
//! Вкладки независимы: одна заявка может попасть в несколько вкладок,
//! `all` содержит всё. Закрытая заявка (выплачена, отклонена, отменена,
//! ошибка, или возвратная отправка отклонена) видна только в `all` и
//! `completed`, какой бы ни была её возвратная отправка или спор.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::aggregate::{
    DisputeStatus, PaymentStatus, RefundRecord, RefundStatus, RefundType, ReturnRequestStatus,
};

/// Вкладка экрана возвратов
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RefundTab {
    All,
    New,
    ToProcess,
    Disputes,
    Completed,
}

impl RefundTab {
    pub fn id(&self) -> &'static str {
        match self {
            RefundTab::All => "all",
            RefundTab::New => "new",
            RefundTab::ToProcess => "to-process",
            RefundTab::Disputes => "disputes",
            RefundTab::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RefundTab::All => "All",
            RefundTab::New => "New",
            RefundTab::ToProcess => "To Process",
            RefundTab::Disputes => "Disputes",
            RefundTab::Completed => "Completed",
        }
    }

    pub fn all() -> Vec<RefundTab> {
        vec![
            RefundTab::All,
            RefundTab::New,
            RefundTab::ToProcess,
            RefundTab::Disputes,
            RefundTab::Completed,
        ]
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "all" => Some(RefundTab::All),
            "new" => Some(RefundTab::New),
            "to-process" => Some(RefundTab::ToProcess),
            "disputes" => Some(RefundTab::Disputes),
            "completed" => Some(RefundTab::Completed),
            _ => None,
        }
    }
}

/// Заявка закрыта: выплачена, отклонена, отменена, ошибка или товар не принят
pub fn is_settled(record: &RefundRecord) -> bool {
    record.payment_status == PaymentStatus::Completed
        || record.status.is_closed()
        || (record.status == RefundStatus::Approved
            && record.is_return_at(&ReturnRequestStatus::Rejected))
}

/// Новая заявка, ещё не рассмотренная продавцом
pub fn is_new(record: &RefundRecord) -> bool {
    !is_settled(record)
        && record.status == RefundStatus::Pending
        && record.payment_status == PaymentStatus::Pending
}

/// Заявка ждёт действий на одном из этапов: переговоры, отправка,
/// приёмка, проверка или выплата
pub fn needs_processing(record: &RefundRecord) -> bool {
    if is_settled(record) {
        return false;
    }

    let payment = &record.payment_status;
    let approved = record.status == RefundStatus::Approved;
    let approved_return = approved && record.is_return();

    let negotiating =
        record.status == RefundStatus::Negotiation && *payment == PaymentStatus::Pending;

    // Отсутствующий этап тоже считается "ещё не отправлено"
    let awaiting_shipment = approved_return
        && *payment == PaymentStatus::Pending
        && !record.is_return_at(&ReturnRequestStatus::Shipped)
        && !record.is_return_at(&ReturnRequestStatus::Received);

    let in_transit_or_inspection = approved_return
        && (record.is_return_at(&ReturnRequestStatus::Shipped)
            || record.is_return_at(&ReturnRequestStatus::Received)
            || record.is_return_at(&ReturnRequestStatus::Inspected));

    let paying_out = approved
        && *payment == PaymentStatus::Processing
        && (record.refund_type == RefundType::Keep
            || (record.is_return() && record.is_return_at(&ReturnRequestStatus::Approved)));

    negotiating || awaiting_shipment || in_transit_or_inspection || paying_out
}

/// Заявка в споре или на арбитраже.
///
/// Спор по отклонённой отправке остаётся здесь, пока возврат не выплачен и не закрыт.
pub fn in_dispute(record: &RefundRecord) -> bool {
    record.payment_status != PaymentStatus::Completed
        && !record.status.is_closed()
        && (record.status == RefundStatus::Dispute
            || record.dispute_stage() == Some(&DisputeStatus::UnderReview))
}

/// Подходит ли заявка под вкладку
pub fn matches(tab: RefundTab, record: &RefundRecord) -> bool {
    match tab {
        RefundTab::All => true,
        RefundTab::New => is_new(record),
        RefundTab::ToProcess => needs_processing(record),
        RefundTab::Disputes => in_dispute(record),
        RefundTab::Completed => is_settled(record),
    }
}

/// Заявки одной вкладки в исходном порядке
pub fn filter(records: &[RefundRecord], tab: RefundTab) -> Vec<&RefundRecord> {
    records.iter().filter(|r| matches(tab, r)).collect()
}

/// Результат раскладки: для каждой вкладки свой список заявок
#[derive(Debug, Clone)]
pub struct RefundBuckets<'a> {
    buckets: BTreeMap<RefundTab, Vec<&'a RefundRecord>>,
}

impl<'a> RefundBuckets<'a> {
    pub fn get(&self, tab: RefundTab) -> &[&'a RefundRecord] {
        self.buckets.get(&tab).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, tab: RefundTab) -> usize {
        self.get(tab).len()
    }

    /// Счётчики для бейджей на вкладках
    pub fn counts(&self) -> BTreeMap<RefundTab, usize> {
        self.buckets
            .iter()
            .map(|(tab, records)| (*tab, records.len()))
            .collect()
    }

    pub fn ids(&self, tab: RefundTab) -> Vec<&'a str> {
        self.get(tab).iter().map(|r| r.id.as_str()).collect()
    }
}

/// Разложить заявки по всем вкладкам
pub fn classify(records: &[RefundRecord]) -> RefundBuckets<'_> {
    let mut buckets: BTreeMap<RefundTab, Vec<&RefundRecord>> =
        RefundTab::all().into_iter().map(|tab| (tab, Vec::new())).collect();

    for record in records {
        for (tab, bucket) in buckets.iter_mut() {
            if matches(*tab, record) {
                bucket.push(record);
            }
        }
    }

    RefundBuckets { buckets }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        id: &str,
        status: RefundStatus,
        refund_type: RefundType,
        payment: PaymentStatus,
    ) -> RefundRecord {
        RefundRecord::new(id, status, refund_type, payment, 100.0)
    }

    fn approved_return(
        id: &str,
        payment: PaymentStatus,
        stage: ReturnRequestStatus,
    ) -> RefundRecord {
        record(id, RefundStatus::Approved, RefundType::Return, payment).with_return_stage(stage)
    }

    fn tabs_of(record: &RefundRecord) -> Vec<RefundTab> {
        RefundTab::all()
            .into_iter()
            .filter(|tab| matches(*tab, record))
            .collect()
    }

    fn sample() -> Vec<RefundRecord> {
        vec![
            record("a", RefundStatus::Pending, RefundType::Keep, PaymentStatus::Pending),
            record("b", RefundStatus::Negotiation, RefundType::Keep, PaymentStatus::Pending),
            approved_return("c", PaymentStatus::Pending, ReturnRequestStatus::Shipped),
            record("d", RefundStatus::Dispute, RefundType::Return, PaymentStatus::Pending),
            record("e", RefundStatus::Approved, RefundType::Keep, PaymentStatus::Completed),
            record("f", RefundStatus::Cancelled, RefundType::Keep, PaymentStatus::Pending),
            record("g", RefundStatus::from_code("escalated"), RefundType::Keep, PaymentStatus::Pending),
            record("h", RefundStatus::Negotiation, RefundType::Keep, PaymentStatus::Pending)
                .with_dispute(DisputeStatus::UnderReview),
        ]
    }

    #[test]
    fn test_all_bucket_is_complete() {
        let records = sample();
        let buckets = classify(&records);
        assert_eq!(buckets.count(RefundTab::All), records.len());
        assert_eq!(buckets.ids(RefundTab::All), vec!["a", "b", "c", "d", "e", "f", "g", "h"]);

        let empty: Vec<RefundRecord> = Vec::new();
        let buckets = classify(&empty);
        assert_eq!(buckets.count(RefundTab::All), 0);
        assert_eq!(buckets.counts().len(), 5);
    }

    #[test]
    fn test_bucket_membership() {
        let records = sample();
        let buckets = classify(&records);
        assert_eq!(buckets.ids(RefundTab::New), vec!["a"]);
        assert_eq!(buckets.ids(RefundTab::ToProcess), vec!["b", "c", "h"]);
        assert_eq!(buckets.ids(RefundTab::Disputes), vec!["d", "h"]);
        assert_eq!(buckets.ids(RefundTab::Completed), vec!["e", "f"]);
    }

    #[test]
    fn test_settled_records_never_leak_into_active_tabs() {
        let records = vec![
            approved_return("paid", PaymentStatus::Completed, ReturnRequestStatus::Shipped),
            approved_return("paid-insp", PaymentStatus::Completed, ReturnRequestStatus::Inspected),
            record("rej", RefundStatus::Rejected, RefundType::Keep, PaymentStatus::Pending)
                .with_dispute(DisputeStatus::UnderReview),
            record("can", RefundStatus::Cancelled, RefundType::Return, PaymentStatus::Pending),
            record("fail", RefundStatus::Failed, RefundType::Keep, PaymentStatus::Processing),
            record("pend-paid", RefundStatus::Pending, RefundType::Keep, PaymentStatus::Completed),
        ];
        for r in &records {
            assert_eq!(tabs_of(r), vec![RefundTab::All, RefundTab::Completed], "{}", r.id);
        }
    }

    #[test]
    fn test_return_stays_in_to_process_through_every_stage() {
        for stage in [
            ReturnRequestStatus::WaitingShipment,
            ReturnRequestStatus::Shipped,
            ReturnRequestStatus::Received,
            ReturnRequestStatus::Inspected,
        ] {
            let r = approved_return("r", PaymentStatus::Pending, stage.clone());
            assert!(matches(RefundTab::ToProcess, &r), "{}", stage.code());
            assert!(!matches(RefundTab::Completed, &r), "{}", stage.code());
        }

        let rejected = approved_return("r", PaymentStatus::Pending, ReturnRequestStatus::Rejected);
        assert_eq!(tabs_of(&rejected), vec![RefundTab::All, RefundTab::Completed]);

        let paid = approved_return("r", PaymentStatus::Completed, ReturnRequestStatus::Inspected);
        assert_eq!(tabs_of(&paid), vec![RefundTab::All, RefundTab::Completed]);
    }

    #[test]
    fn test_approved_return_without_return_request_awaits_shipment() {
        let r = record("r", RefundStatus::Approved, RefundType::Return, PaymentStatus::Pending);
        assert_eq!(tabs_of(&r), vec![RefundTab::All, RefundTab::ToProcess]);
    }

    #[test]
    fn test_payout_in_progress() {
        let keep = record("k", RefundStatus::Approved, RefundType::Keep, PaymentStatus::Processing);
        assert!(matches(RefundTab::ToProcess, &keep));

        let accepted =
            approved_return("r", PaymentStatus::Processing, ReturnRequestStatus::Approved);
        assert!(matches(RefundTab::ToProcess, &accepted));

        // Инспекция при идущей выплате остаётся в работе
        let inspected =
            approved_return("r", PaymentStatus::Processing, ReturnRequestStatus::Inspected);
        assert!(matches(RefundTab::ToProcess, &inspected));

        // Отправка ещё не получена, выплата уже идёт: не попадает ни в одну ветку
        let waiting =
            approved_return("r", PaymentStatus::Processing, ReturnRequestStatus::WaitingShipment);
        assert_eq!(tabs_of(&waiting), vec![RefundTab::All]);
    }

    #[test]
    fn test_negotiation_keep_scenario() {
        let r = record("n", RefundStatus::Negotiation, RefundType::Keep, PaymentStatus::Pending);
        assert_eq!(tabs_of(&r), vec![RefundTab::All, RefundTab::ToProcess]);
    }

    #[test]
    fn test_dispute_scenario() {
        let r = record("d", RefundStatus::Dispute, RefundType::Keep, PaymentStatus::Pending);
        assert_eq!(tabs_of(&r), vec![RefundTab::All, RefundTab::Disputes]);
    }

    #[test]
    fn test_dispute_over_rejected_return_stays_visible() {
        let r = approved_return("x", PaymentStatus::Pending, ReturnRequestStatus::Rejected)
            .with_dispute(DisputeStatus::UnderReview);
        assert_eq!(
            tabs_of(&r),
            vec![RefundTab::All, RefundTab::Disputes, RefundTab::Completed]
        );

        let resolved = approved_return("y", PaymentStatus::Pending, ReturnRequestStatus::Rejected)
            .with_dispute(DisputeStatus::Resolved);
        assert_eq!(tabs_of(&resolved), vec![RefundTab::All, RefundTab::Completed]);

        let paid = approved_return("z", PaymentStatus::Completed, ReturnRequestStatus::Rejected)
            .with_dispute(DisputeStatus::UnderReview);
        assert!(!matches(RefundTab::Disputes, &paid));
    }

    #[test]
    fn test_unknown_values_only_in_all() {
        let r = record(
            "u",
            RefundStatus::from_code("escalated"),
            RefundType::from_code("exchange"),
            PaymentStatus::from_code("on_hold"),
        )
        .with_return_stage(ReturnRequestStatus::from_code("lost"));
        assert_eq!(tabs_of(&r), vec![RefundTab::All]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let records = sample();
        let ids: Vec<&str> = filter(&records, RefundTab::ToProcess)
            .into_iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "c", "h"]);
    }

    #[test]
    fn test_tab_ids_round_trip() {
        for tab in RefundTab::all() {
            assert_eq!(RefundTab::from_id(tab.id()), Some(tab));
            assert_eq!(serde_json::to_value(tab).unwrap(), tab.id());
        }
        assert_eq!(RefundTab::from_id("archive"), None);
    }
}
