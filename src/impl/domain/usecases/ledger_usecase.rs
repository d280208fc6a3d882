use async_trait::async_trait;
use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::{
    data::repositories::cheques_repository_impl::ChequesRepositoryImpl,
    domain::{
        logic::{
            aggregator::Aggregator, draft_validator::DraftValidator, due_classifier::DueClassifier,
            filter_engine::FilterEngine, ledger_store::ChequeLedger,
        },
        repositories::cheques_repository::ChequesRepository,
    },
    entities::{
        Cheque, ChequeDraft, ChequeFilter, ChequeId, ChequeRow, ChequeStatus, DueState,
        LedgerSummary, StatusPolicy, TrackerConfig,
    },
    errors::{ChequeNotFound, OverdueChequeCannotBeCleared},
};

#[async_trait]
pub trait LedgerUsecase: Send + Sync {
    fn sample(&self, today: NaiveDate) -> Result<ChequeLedger, ServerError>;

    fn import_csv(&self, cheques_csv: &str) -> Result<ChequeLedger, ServerError>;

    async fn import_file<P>(&self, cheques_csv: P) -> Result<ChequeLedger, ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    fn add_cheque(
        &self,
        ledger: &mut ChequeLedger,
        draft: ChequeDraft,
    ) -> Result<ChequeId, ServerError>;

    fn update_status(
        &self,
        ledger: &mut ChequeLedger,
        id: ChequeId,
        status: ChequeStatus,
        today: NaiveDate,
    ) -> Result<(), ServerError>;

    fn visible_rows<'a>(
        &self,
        ledger: &'a ChequeLedger,
        filter: &ChequeFilter,
        today: NaiveDate,
    ) -> Vec<ChequeRow<'a>>;

    fn summarize(&self, ledger: &ChequeLedger) -> LedgerSummary;

    fn upcoming<'a>(&self, ledger: &'a ChequeLedger, today: NaiveDate) -> Vec<&'a Cheque>;
}

pub(crate) struct LedgerUsecaseImpl<
    R1 = ChequesRepositoryImpl, // Default.
> where
    R1: ChequesRepository,
{
    cheques_repository: R1,
    config: TrackerConfig,
}

#[async_trait]
impl<R1> LedgerUsecase for LedgerUsecaseImpl<R1>
where
    R1: ChequesRepository,
{
    fn sample(&self, today: NaiveDate) -> Result<ChequeLedger, ServerError> {
        let ledger = self.cheques_repository.sample(today)?;
        tracing::debug!(cheques = ledger.len(), %today, "Loaded sample ledger.");
        Ok(ledger)
    }

    fn import_csv(&self, cheques_csv: &str) -> Result<ChequeLedger, ServerError> {
        let ledger = self.cheques_repository.from_string(cheques_csv)?;
        tracing::info!(cheques = ledger.len(), "Imported cheques from CSV.");
        Ok(ledger)
    }

    async fn import_file<P>(&self, cheques_csv: P) -> Result<ChequeLedger, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let path = cheques_csv.as_ref().display().to_string();
        let ledger = self.cheques_repository.from_file(cheques_csv).await?;
        tracing::info!(cheques = ledger.len(), %path, "Imported cheques from file.");
        Ok(ledger)
    }

    fn add_cheque(
        &self,
        ledger: &mut ChequeLedger,
        draft: ChequeDraft,
    ) -> Result<ChequeId, ServerError> {
        let new_cheque = DraftValidator::new().validate(draft).map_err(|e| {
            tracing::warn!(error = ?e, "Rejected cheque form.");
            e
        })?;
        let cheque_number = new_cheque.cheque_number.clone();
        let id = ledger.insert(new_cheque).map_err(|e| {
            tracing::warn!(%cheque_number, error = ?e, "Rejected new cheque.");
            e
        })?;
        tracing::info!(%id, %cheque_number, "Recorded cheque.");
        Ok(id)
    }

    fn update_status(
        &self,
        ledger: &mut ChequeLedger,
        id: ChequeId,
        status: ChequeStatus,
        today: NaiveDate,
    ) -> Result<(), ServerError> {
        let cheque = ledger.get(id).ok_or_else(|| ChequeNotFound::new(&id))?;
        if self.config.status_policy == StatusPolicy::PreventClearingOverdue
            && status == ChequeStatus::Cleared
            && self.classifier(today).classify_cheque(cheque) == DueState::Overdue
        {
            tracing::warn!(%id, cheque_number = %cheque.cheque_number, "Refused to clear overdue cheque.");
            return Err(OverdueChequeCannotBeCleared::new(
                &cheque.cheque_number,
                &cheque.date,
            ));
        }
        let previous = cheque.status;
        ledger.update_status(id, status)?;
        tracing::info!(%id, from = %previous, to = %status, "Updated cheque status.");
        Ok(())
    }

    fn visible_rows<'a>(
        &self,
        ledger: &'a ChequeLedger,
        filter: &ChequeFilter,
        today: NaiveDate,
    ) -> Vec<ChequeRow<'a>> {
        let classifier = self.classifier(today);
        let rows: Vec<ChequeRow<'a>> = FilterEngine::new(filter)
            .apply(ledger)
            .into_iter()
            .map(|cheque| ChequeRow {
                cheque,
                due_state: classifier.classify_cheque(cheque),
                available_statuses: classifier.available_statuses(cheque),
            })
            .collect();
        tracing::debug!(visible = rows.len(), total = ledger.len(), "Filtered ledger.");
        rows
    }

    fn summarize(&self, ledger: &ChequeLedger) -> LedgerSummary {
        let summary =
            Aggregator::new(ledger, self.config.frequent_bouncer_min_bounces).summarize();
        tracing::debug!(
            cheques = summary.total_count(),
            frequent_bouncers = summary.frequent_bouncers.len(),
            "Recomputed ledger summary."
        );
        summary
    }

    fn upcoming<'a>(&self, ledger: &'a ChequeLedger, today: NaiveDate) -> Vec<&'a Cheque> {
        let upcoming = self.classifier(today).upcoming(ledger);
        if !upcoming.is_empty() {
            tracing::info!(
                count = upcoming.len(),
                "{} cheque(s) are nearing their due date.",
                upcoming.len()
            );
        }
        upcoming
    }
}

impl<R1: ChequesRepository> LedgerUsecaseImpl<R1> {
    fn classifier(&self, today: NaiveDate) -> DueClassifier {
        DueClassifier::new(today, self.config.due_soon_days)
    }
}

impl LedgerUsecaseImpl {
    pub(crate) fn new(config: TrackerConfig) -> Self {
        LedgerUsecaseImpl {
            cheques_repository: ChequesRepositoryImpl::new(),
            config,
        }
    }
}
