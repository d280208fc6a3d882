use std::collections::HashMap;

use crate::{
    domain::logic::ledger_store::ChequeLedger,
    entities::{ChequeStatus, LedgerSummary},
};

pub(crate) struct Aggregator<'a> {
    ledger: &'a ChequeLedger,
    frequent_bouncer_min_bounces: usize,
}

impl<'a> Aggregator<'a> {
    pub(crate) fn new(ledger: &'a ChequeLedger, frequent_bouncer_min_bounces: usize) -> Self {
        Self {
            ledger,
            frequent_bouncer_min_bounces,
        }
    }

    /// Totals always cover the whole ledger, independent of any filter.
    pub(crate) fn summarize(self) -> LedgerSummary {
        let mut summary = self
            .ledger
            .cheques()
            .iter()
            .fold(LedgerSummary::default(), |mut acc, cheque| {
                let totals = acc.for_status_mut(cheque.status);
                totals.total_amount += cheque.amount;
                totals.count += 1;
                acc
            });
        summary.frequent_bouncers = self.frequent_bouncers();
        summary
    }

    fn frequent_bouncers(&self) -> Vec<String> {
        let mut first_seen: Vec<&str> = Vec::new();
        let mut bounce_counts: HashMap<&str, usize> = HashMap::new();
        for cheque in self.ledger.cheques() {
            if cheque.status != ChequeStatus::Bounced {
                continue;
            }
            let count = bounce_counts.entry(cheque.name.as_str()).or_insert(0);
            if *count == 0 {
                first_seen.push(cheque.name.as_str());
            }
            *count += 1;
        }
        first_seen
            .into_iter()
            .filter(|name| bounce_counts[name] >= self.frequent_bouncer_min_bounces)
            .map(str::to_string)
            .collect()
    }
}
