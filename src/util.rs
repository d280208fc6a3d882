use std::{str::FromStr as _, sync::Arc};

use chrono::NaiveDate;
use fractic_server_error::ServerError;
use futures::stream::BoxStream;

use crate::{
    data::models::tracker_config_model::TrackerConfigModel,
    domain::usecases::{
        assistant_usecase::{AssistantUsecase as _, AssistantUsecaseImpl},
        ledger_usecase::{LedgerUsecase as _, LedgerUsecaseImpl},
    },
    entities::{
        Cheque, ChequeAssistant, ChequeDraft, ChequeFilter, ChequeId, ChequeImage, ChequeRow,
        ChequeStatus, Conversation, LedgerSummary, TrackerConfig,
    },
    presentation::{conversation_printer::ConversationPrinter, report_printer::ReportPrinter},
    ChequeLedger,
};

pub type Report = String;

/// Entry point for applications. The application owns its `ChequeLedger` and
/// hands it in on every call; "today" is always passed explicitly.
pub struct ChequeTrackerUtil<S>
where
    S: ChequeAssistant + 'static,
{
    config: TrackerConfig,
    ledger_usecase: LedgerUsecaseImpl,
    assistant_usecase: AssistantUsecaseImpl<S>,
    report_printer: ReportPrinter,
    conversation_printer: ConversationPrinter,
}

impl<S> ChequeTrackerUtil<S>
where
    S: ChequeAssistant + 'static,
{
    pub fn new(assistant: S) -> Self {
        Self::with_config(assistant, TrackerConfig::default())
    }

    /// Out-of-range settings are clamped (see `TrackerConfig::clamped`).
    pub fn with_config(assistant: S, config: TrackerConfig) -> Self {
        let config = config.clamped();
        Self {
            ledger_usecase: LedgerUsecaseImpl::new(config.clone()),
            assistant_usecase: AssistantUsecaseImpl::new(Arc::new(assistant)),
            report_printer: ReportPrinter::new(config.currency),
            conversation_printer: ConversationPrinter::new(config.transcript_width),
            config,
        }
    }

    /// Loads settings from RON; fields left out keep their defaults.
    pub fn from_ron(assistant: S, config_ron: &str) -> Result<Self, ServerError> {
        let config = TrackerConfigModel::from_str(config_ron)?.into_config()?;
        Ok(Self::with_config(assistant, config))
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    // Ledger.
    // ---

    pub fn sample_ledger(&self, today: NaiveDate) -> Result<ChequeLedger, ServerError> {
        self.ledger_usecase.sample(today)
    }

    pub fn import_csv(&self, cheques_csv: &str) -> Result<ChequeLedger, ServerError> {
        self.ledger_usecase.import_csv(cheques_csv)
    }

    pub async fn import_file<P>(&self, cheques_csv: P) -> Result<ChequeLedger, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.ledger_usecase.import_file(cheques_csv).await
    }

    pub fn add_cheque(
        &self,
        ledger: &mut ChequeLedger,
        draft: ChequeDraft,
    ) -> Result<ChequeId, ServerError> {
        self.ledger_usecase.add_cheque(ledger, draft)
    }

    pub fn update_status(
        &self,
        ledger: &mut ChequeLedger,
        id: ChequeId,
        status: ChequeStatus,
        today: NaiveDate,
    ) -> Result<(), ServerError> {
        self.ledger_usecase.update_status(ledger, id, status, today)
    }

    pub fn visible_cheques<'a>(
        &self,
        ledger: &'a ChequeLedger,
        filter: &ChequeFilter,
        today: NaiveDate,
    ) -> Vec<ChequeRow<'a>> {
        self.ledger_usecase.visible_rows(ledger, filter, today)
    }

    pub fn summarize(&self, ledger: &ChequeLedger) -> LedgerSummary {
        self.ledger_usecase.summarize(ledger)
    }

    pub fn upcoming_cheques<'a>(
        &self,
        ledger: &'a ChequeLedger,
        today: NaiveDate,
    ) -> Vec<&'a Cheque> {
        self.ledger_usecase.upcoming(ledger, today)
    }

    pub fn print_dashboard(
        &self,
        ledger: &ChequeLedger,
        filter: &ChequeFilter,
        today: NaiveDate,
    ) -> Report {
        let summary = self.summarize(ledger);
        let rows = self.visible_cheques(ledger, filter, today);
        self.report_printer.print_dashboard(&summary, &rows)
    }

    // Assistant.
    // ---

    pub fn new_conversation(&self) -> Conversation {
        Conversation::greeted(self.config.assistant_greeting.as_str())
    }

    pub async fn draft_from_image(&self, image: ChequeImage) -> Result<ChequeDraft, ServerError> {
        self.assistant_usecase.draft_from_image(image).await
    }

    pub fn ask_snapshots(
        &self,
        conversation: &Conversation,
        ledger: &ChequeLedger,
        today: NaiveDate,
        question: &str,
    ) -> BoxStream<'static, Conversation> {
        self.assistant_usecase
            .ask_snapshots(conversation, ledger, today, question)
    }

    pub async fn ask(
        &self,
        conversation: &Conversation,
        ledger: &ChequeLedger,
        today: NaiveDate,
        question: &str,
    ) -> Conversation {
        self.assistant_usecase
            .ask(conversation, ledger, today, question)
            .await
    }

    pub fn print_conversation(&self, conversation: &Conversation) -> Report {
        self.conversation_printer.print_conversation(conversation)
    }
}
