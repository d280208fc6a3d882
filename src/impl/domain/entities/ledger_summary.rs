use super::cheque::ChequeStatus;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatusTotals {
    pub total_amount: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerSummary {
    pub pending: StatusTotals,
    pub cleared: StatusTotals,
    pub bounced: StatusTotals,
    /// Names with repeated bounced cheques, in order of first appearance.
    pub frequent_bouncers: Vec<String>,
}

// --

impl LedgerSummary {
    pub fn for_status(&self, status: ChequeStatus) -> &StatusTotals {
        match status {
            ChequeStatus::Pending => &self.pending,
            ChequeStatus::Cleared => &self.cleared,
            ChequeStatus::Bounced => &self.bounced,
        }
    }

    pub(crate) fn for_status_mut(&mut self, status: ChequeStatus) -> &mut StatusTotals {
        match status {
            ChequeStatus::Pending => &mut self.pending,
            ChequeStatus::Cleared => &mut self.cleared,
            ChequeStatus::Bounced => &mut self.bounced,
        }
    }

    pub fn total_amount(&self) -> f64 {
        ChequeStatus::ALL
            .iter()
            .map(|s| self.for_status(*s).total_amount)
            .sum()
    }

    pub fn total_count(&self) -> usize {
        ChequeStatus::ALL
            .iter()
            .map(|s| self.for_status(*s).count)
            .sum()
    }
}
