use chrono::NaiveDate;

use crate::{
    domain::logic::ledger_store::ChequeLedger,
    entities::{Cheque, ChequeStatus, DueState},
};

/// Date-only due-date rules. "Today" is always passed in, never read from the
/// clock.
pub(crate) struct DueClassifier {
    today: NaiveDate,
    due_soon_days: i64,
}

impl DueClassifier {
    pub(crate) fn new(today: NaiveDate, due_soon_days: i64) -> Self {
        Self {
            today,
            due_soon_days,
        }
    }

    pub(crate) fn classify(&self, date: NaiveDate, status: ChequeStatus) -> DueState {
        if status != ChequeStatus::Pending {
            return DueState::Normal;
        }
        let days_until = (date - self.today).num_days();
        if days_until < 0 {
            DueState::Overdue
        } else if days_until <= self.due_soon_days {
            DueState::DueSoon
        } else {
            DueState::Normal
        }
    }

    pub(crate) fn classify_cheque(&self, cheque: &Cheque) -> DueState {
        self.classify(cheque.date, cheque.status)
    }

    /// Statuses a form offers for the cheque: none once settled, and never
    /// Cleared while overdue.
    pub(crate) fn available_statuses(&self, cheque: &Cheque) -> Vec<ChequeStatus> {
        if cheque.status.is_final() {
            return vec![];
        }
        match self.classify_cheque(cheque) {
            DueState::Overdue => vec![ChequeStatus::Pending, ChequeStatus::Bounced],
            DueState::DueSoon | DueState::Normal => ChequeStatus::ALL.to_vec(),
        }
    }

    /// Pending cheques dated after today but inside the due-soon window.
    pub(crate) fn upcoming<'a>(&self, ledger: &'a ChequeLedger) -> Vec<&'a Cheque> {
        ledger
            .cheques()
            .iter()
            .filter(|c| c.status == ChequeStatus::Pending)
            .filter(|c| {
                let days_until = (c.date - self.today).num_days();
                days_until > 0 && days_until <= self.due_soon_days
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::entities::NewCheque;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn classifier() -> DueClassifier {
        DueClassifier::new(today(), 7)
    }

    fn on(days: i64) -> NaiveDate {
        today() + Duration::days(days)
    }

    #[test]
    fn cheque_dated_today_is_due_soon() {
        assert_eq!(
            classifier().classify(today(), ChequeStatus::Pending),
            DueState::DueSoon
        );
    }

    #[test]
    fn cheque_dated_yesterday_is_overdue() {
        let yesterday = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();
        assert_eq!(
            classifier().classify(yesterday, ChequeStatus::Pending),
            DueState::Overdue
        );
    }

    #[test]
    fn due_soon_window_is_inclusive() {
        let c = classifier();
        assert_eq!(c.classify(on(7), ChequeStatus::Pending), DueState::DueSoon);
        assert_eq!(c.classify(on(8), ChequeStatus::Pending), DueState::Normal);
        assert_eq!(c.classify(on(-30), ChequeStatus::Pending), DueState::Overdue);
    }

    #[test]
    fn settled_cheques_are_normal() {
        let c = classifier();
        for status in [ChequeStatus::Cleared, ChequeStatus::Bounced] {
            assert_eq!(c.classify(on(-3), status), DueState::Normal);
            assert_eq!(c.classify(on(0), status), DueState::Normal);
            assert_eq!(c.classify(on(3), status), DueState::Normal);
        }
    }

    #[test]
    fn overdue_cheques_cannot_be_offered_cleared() {
        let mut ledger = ChequeLedger::new();
        let overdue = ledger
            .insert(NewCheque::new("A", "1", 10.0, on(-1)))
            .unwrap();
        let upcoming = ledger.insert(NewCheque::new("B", "2", 10.0, on(2))).unwrap();
        let settled = ledger.insert(NewCheque::new("C", "3", 10.0, on(2))).unwrap();
        ledger.update_status(settled, ChequeStatus::Bounced).unwrap();

        let c = classifier();
        assert_eq!(
            c.available_statuses(ledger.get(overdue).unwrap()),
            vec![ChequeStatus::Pending, ChequeStatus::Bounced]
        );
        assert_eq!(
            c.available_statuses(ledger.get(upcoming).unwrap()),
            ChequeStatus::ALL.to_vec()
        );
        assert!(c.available_statuses(ledger.get(settled).unwrap()).is_empty());
    }

    #[test]
    fn upcoming_excludes_today_and_settled() {
        let mut ledger = ChequeLedger::new();
        ledger.insert(NewCheque::new("A", "1", 10.0, on(0))).unwrap();
        ledger.insert(NewCheque::new("B", "2", 10.0, on(2))).unwrap();
        ledger.insert(NewCheque::new("C", "3", 10.0, on(7))).unwrap();
        ledger.insert(NewCheque::new("D", "4", 10.0, on(9))).unwrap();
        let cleared = ledger.insert(NewCheque::new("E", "5", 10.0, on(3))).unwrap();
        ledger.update_status(cleared, ChequeStatus::Cleared).unwrap();

        let names: Vec<&str> = classifier()
            .upcoming(&ledger)
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["C", "B"]);
    }
}
