use std::str::FromStr as _;

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::{
        datasources::seed_cheque::SeedCheque,
        models::{
            cheque_amount_model::ChequeAmountModel, cheque_status_model::ChequeStatusModel,
            iso_date_model::ISODateModel,
        },
    },
    entities::NewCheque,
    errors::{InvalidCsv, InvalidCsvRow, ReadError},
};

#[async_trait]
pub(crate) trait ChequesCsvDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<SeedCheque>, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Vec<SeedCheque>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct ChequesCsvDatasourceImpl;

impl ChequesCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChequesCsvDatasource for ChequesCsvDatasourceImpl {
    /// Expects a header row followed by
    /// `name,cheque_number,amount,date,status` records. An empty status
    /// means Pending.
    fn from_string(&self, s: &str) -> Result<Vec<SeedCheque>, ServerError> {
        csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(s.as_bytes())
            .records()
            .enumerate()
            .map(|(i, r)| {
                // Row numbers count from 1 and skip the header.
                let row = i + 1;
                r.map_err(|e| InvalidCsv::with_debug(&e)).and_then(|r| {
                    // Extract from CSV record.
                    let raw_name = r.get(0).unwrap_or("");
                    let raw_cheque_number = r.get(1).unwrap_or("");
                    let raw_amount = r.get(2).unwrap_or("");
                    let raw_date = r.get(3).unwrap_or("");
                    let raw_status = r.get(4).unwrap_or("");

                    // Parse.
                    let amount: ChequeAmountModel = ChequeAmountModel::from_str(raw_amount)
                        .map_err(|e| InvalidCsvRow::with_debug(row, &e))?;
                    let date: ISODateModel = ISODateModel::from_str(raw_date)
                        .map_err(|e| InvalidCsvRow::with_debug(row, &e))?;
                    let status: ChequeStatusModel = ChequeStatusModel::from_str(raw_status)
                        .map_err(|e| InvalidCsvRow::with_debug(row, &e))?;

                    // Build.
                    Ok(SeedCheque {
                        row,
                        cheque: NewCheque::new(raw_name, raw_cheque_number, amount.into(), date.into()),
                        status: status.into(),
                    })
                })
            })
            .collect()
    }

    async fn from_file<P>(&self, path: P) -> Result<Vec<SeedCheque>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        self.from_string(&contents)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::entities::ChequeStatus;

    #[test]
    fn parses_rows_in_file_order() {
        let csv = "name,cheque_number,amount,date,status\n\
                   ABC Corp,123456,\"50,000\",2024-05-26,Cleared\n\
                   XYZ Solutions, 789012 ,75000.50,2024-06-15,\n";
        let seeds = ChequesCsvDatasourceImpl::new().from_string(csv).unwrap();

        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0].row, 1);
        assert_eq!(seeds[0].cheque.name, "ABC Corp");
        assert_eq!(seeds[0].cheque.amount, 50000.0);
        assert_eq!(seeds[0].status, ChequeStatus::Cleared);
        assert_eq!(seeds[1].cheque.cheque_number, "789012");
        assert_eq!(
            seeds[1].cheque.date,
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
        );
        assert_eq!(seeds[1].status, ChequeStatus::Pending);
    }

    #[test]
    fn rejects_bad_rows() {
        let ds = ChequesCsvDatasourceImpl::new();
        let header = "name,cheque_number,amount,date,status\n";
        assert!(ds
            .from_string(&format!("{header}A,1,ten,2024-06-10,Pending\n"))
            .is_err());
        assert!(ds
            .from_string(&format!("{header}A,1,10,10/06/2024,Pending\n"))
            .is_err());
        assert!(ds
            .from_string(&format!("{header}A,1,10,2024-06-10,Lost\n"))
            .is_err());
    }
}
