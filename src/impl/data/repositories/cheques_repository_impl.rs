use async_trait::async_trait;
use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::{
        cheques_csv_datasource::{ChequesCsvDatasource, ChequesCsvDatasourceImpl},
        sample_cheques_datasource::{SampleChequesDatasource, SampleChequesDatasourceImpl},
        seed_cheque::SeedCheque,
    },
    domain::{logic::ledger_store::ChequeLedger, repositories::cheques_repository::ChequesRepository},
    entities::ChequeStatus,
    errors::InvalidCsvRow,
};

pub(crate) struct ChequesRepositoryImpl<
    DS1 = ChequesCsvDatasourceImpl,    // Default.
    DS2 = SampleChequesDatasourceImpl, // Default.
> where
    DS1: ChequesCsvDatasource,
    DS2: SampleChequesDatasource,
{
    csv_datasource: DS1,
    sample_datasource: DS2,
}

/// Seeds are listed newest-first, so they are inserted back to front. A
/// scratch pass in listed order runs first so an error names the first bad row.
fn seed_ledger(seeds: Vec<SeedCheque>) -> Result<ChequeLedger, ServerError> {
    let mut scratch = ChequeLedger::new();
    for seed in &seeds {
        scratch
            .insert(seed.cheque.clone())
            .map_err(|e| InvalidCsvRow::with_debug(seed.row, &e))?;
    }

    let mut ledger = ChequeLedger::new();
    for seed in seeds.into_iter().rev() {
        let row = seed.row;
        let id = ledger
            .insert(seed.cheque)
            .map_err(|e| InvalidCsvRow::with_debug(row, &e))?;
        if seed.status != ChequeStatus::Pending {
            ledger
                .update_status(id, seed.status)
                .map_err(|e| InvalidCsvRow::with_debug(row, &e))?;
        }
    }
    Ok(ledger)
}

#[async_trait]
impl<DS1, DS2> ChequesRepository for ChequesRepositoryImpl<DS1, DS2>
where
    DS1: ChequesCsvDatasource,
    DS2: SampleChequesDatasource,
{
    fn from_string(&self, cheques_csv: &str) -> Result<ChequeLedger, ServerError> {
        seed_ledger(self.csv_datasource.from_string(cheques_csv)?)
    }

    async fn from_file<P>(&self, cheques_csv: P) -> Result<ChequeLedger, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        seed_ledger(self.csv_datasource.from_file(cheques_csv).await?)
    }

    fn sample(&self, today: NaiveDate) -> Result<ChequeLedger, ServerError> {
        seed_ledger(self.sample_datasource.sample(today))
    }
}

impl ChequesRepositoryImpl {
    pub(crate) fn new() -> Self {
        ChequesRepositoryImpl {
            csv_datasource: ChequesCsvDatasourceImpl::new(),
            sample_datasource: SampleChequesDatasourceImpl::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn csv_rows_keep_file_order() {
        let csv = "name,cheque_number,amount,date,status\n\
                   First,1,100,2024-06-01,Bounced\n\
                   Second,2,200,2024-06-02,\n";
        let ledger = ChequesRepositoryImpl::new().from_string(csv).unwrap();

        let numbers: Vec<&str> = ledger
            .cheques()
            .iter()
            .map(|c| c.cheque_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["1", "2"]);
        assert_eq!(ledger.cheques()[0].status, ChequeStatus::Bounced);
        assert_eq!(ledger.cheques()[1].status, ChequeStatus::Pending);
    }

    #[test]
    fn duplicate_rows_abort_the_import() {
        let csv = "name,cheque_number,amount,date,status\n\
                   First,1,100,2024-06-01,\n\
                   Again,1,200,2024-06-02,\n\
                   Later,3,-5,2024-06-03,\n";
        let err = ChequesRepositoryImpl::new().from_string(csv).unwrap_err();
        assert!(err.to_string().contains("Invalid cheque on CSV row 2."));
    }

    #[test]
    fn sample_ledger_matches_demo_data() {
        let today = date(2024, 6, 10);
        let ledger = ChequesRepositoryImpl::new().sample(today).unwrap();

        assert_eq!(ledger.len(), 7);
        let first = &ledger.cheques()[0];
        assert_eq!(first.name, "ABC Corp");
        assert_eq!(first.cheque_number, "123456");
        assert_eq!(first.date, date(2024, 5, 26));
        assert_eq!(first.status, ChequeStatus::Cleared);
        let last = &ledger.cheques()[6];
        assert_eq!(last.name, "Fast Logistics");
        assert_eq!(last.date, date(2024, 6, 12));
        assert_eq!(last.status, ChequeStatus::Pending);
    }
}
