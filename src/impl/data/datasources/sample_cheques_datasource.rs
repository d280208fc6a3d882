use chrono::{Duration, NaiveDate};

use crate::{
    data::datasources::seed_cheque::SeedCheque,
    entities::{ChequeStatus, NewCheque},
};

pub(crate) trait SampleChequesDatasource: Send + Sync {
    fn sample(&self, today: NaiveDate) -> Vec<SeedCheque>;
}

/// Demo ledger with dates relative to today, covering every status and
/// every due-date alert.
pub(crate) struct SampleChequesDatasourceImpl;

impl SampleChequesDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl SampleChequesDatasource for SampleChequesDatasourceImpl {
    fn sample(&self, today: NaiveDate) -> Vec<SeedCheque> {
        [
            ("ABC Corp", "123456", 50000.0, -15, ChequeStatus::Cleared),
            ("XYZ Solutions", "789012", 75000.0, 5, ChequeStatus::Pending),
            ("Innovate LLC", "345678", 25000.0, -5, ChequeStatus::Bounced),
            ("Tech Giants Inc.", "901234", 120000.0, 0, ChequeStatus::Pending),
            ("ABC Corp", "567890", 30000.0, -20, ChequeStatus::Bounced),
            ("Global Exports", "112233", 85000.0, -30, ChequeStatus::Cleared),
            ("Fast Logistics", "445566", 45000.0, 2, ChequeStatus::Pending),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (name, number, amount, offset, status))| SeedCheque {
            row: i + 1,
            cheque: NewCheque::new(name, number, amount, today + Duration::days(offset)),
            status,
        })
        .collect()
    }
}
