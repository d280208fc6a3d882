use async_trait::async_trait;
use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::domain::logic::ledger_store::ChequeLedger;

/// Builds fresh ledgers from seed sources. Nothing is written back.
#[async_trait]
pub trait ChequesRepository: Send + Sync {
    fn from_string(&self, cheques_csv: &str) -> Result<ChequeLedger, ServerError>;

    async fn from_file<P>(&self, cheques_csv: P) -> Result<ChequeLedger, ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    fn sample(&self, today: NaiveDate) -> Result<ChequeLedger, ServerError>;
}
