use std::cmp::Ordering;

use crate::{
    domain::logic::ledger_store::ChequeLedger,
    entities::{Cheque, ChequeFilter, ChequeSort, ChequeStatus, SortKey, SortOrder, StatusFilter},
};

pub(crate) struct FilterEngine<'a> {
    filter: &'a ChequeFilter,
}

impl<'a> FilterEngine<'a> {
    pub(crate) fn new(filter: &'a ChequeFilter) -> Self {
        Self { filter }
    }

    /// Cheques matching status, search term and date range, in ledger order
    /// unless the filter asks for a sort.
    pub(crate) fn apply<'l>(&self, ledger: &'l ChequeLedger) -> Vec<&'l Cheque> {
        let needle = self.filter.search.to_lowercase();
        let search_all = self.filter.search.trim().is_empty();
        let mut visible: Vec<&'l Cheque> = ledger
            .cheques()
            .iter()
            .filter(|c| self.matches_status(c))
            .filter(|c| search_all || Self::matches_search(c, &needle))
            .filter(|c| self.filter.date_range.contains(c.date))
            .collect();
        if let Some(sort) = self.filter.sort {
            // Stable, so equal keys keep ledger order.
            visible.sort_by(|a, b| Self::compare(sort, a, b));
        }
        visible
    }

    fn matches_status(&self, cheque: &Cheque) -> bool {
        match self.filter.status {
            StatusFilter::Any => true,
            StatusFilter::Only(status) => cheque.status == status,
        }
    }

    fn matches_search(cheque: &Cheque, needle: &str) -> bool {
        cheque.name.to_lowercase().contains(needle)
            || cheque.cheque_number.to_lowercase().contains(needle)
    }

    fn compare(sort: ChequeSort, a: &Cheque, b: &Cheque) -> Ordering {
        let ordering = match sort.key {
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::Amount => a.amount.total_cmp(&b.amount),
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Status => status_rank(a.status).cmp(&status_rank(b.status)),
        };
        match sort.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

fn status_rank(status: ChequeStatus) -> u8 {
    match status {
        ChequeStatus::Pending => 0,
        ChequeStatus::Cleared => 1,
        ChequeStatus::Bounced => 2,
    }
}
