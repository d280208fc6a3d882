use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use fractic_server_error::ServerError;
use futures::{
    stream::{self, BoxStream},
    StreamExt as _,
};

use crate::{
    data::models::extracted_cheque_model::ExtractedChequeModel,
    domain::logic::{
        assistant_prompt::{AssistantPrompt, EXTRACTION_INSTRUCTION},
        ledger_store::ChequeLedger,
    },
    entities::{
        ChatMessage, ChequeAssistant, ChequeDraft, ChequeImage, Conversation,
        ExtractedChequeData, ReplyStream,
    },
    errors::ChequeImageUnreadable,
};

pub(crate) const FAILED_REPLY: &str =
    "Sorry, I couldn't get a response. Failed to get response from AI assistant.";

#[async_trait]
pub trait AssistantUsecase: Send + Sync {
    /// Pre-fills the new-cheque form from a photo. The ledger is never
    /// touched; on error the caller falls back to manual entry.
    async fn draft_from_image(&self, image: ChequeImage) -> Result<ChequeDraft, ServerError>;

    /// Snapshots of the conversation as the answer streams in. Empty for a
    /// blank question.
    fn ask_snapshots(
        &self,
        conversation: &Conversation,
        ledger: &ChequeLedger,
        today: NaiveDate,
        question: &str,
    ) -> BoxStream<'static, Conversation>;

    /// Final snapshot of `ask_snapshots`.
    async fn ask(
        &self,
        conversation: &Conversation,
        ledger: &ChequeLedger,
        today: NaiveDate,
        question: &str,
    ) -> Conversation;
}

pub(crate) struct AssistantUsecaseImpl<S>
where
    S: ChequeAssistant + 'static,
{
    assistant: Arc<S>,
}

enum AskState<S> {
    Requesting {
        assistant: Arc<S>,
        conversation: Conversation,
        system_instruction: String,
        contents: String,
    },
    Streaming {
        conversation: Conversation,
        chunks: ReplyStream,
    },
    Done,
}

impl<S: ChequeAssistant + 'static> AskState<S> {
    async fn advance(self) -> Option<(Conversation, AskState<S>)> {
        match self {
            AskState::Requesting {
                assistant,
                conversation,
                system_instruction,
                contents,
            } => match assistant.ask_stream(&system_instruction, &contents).await {
                Ok(chunks) => {
                    let conversation = conversation.with_message(ChatMessage::assistant(""));
                    Some((
                        conversation.clone(),
                        AskState::Streaming {
                            conversation,
                            chunks,
                        },
                    ))
                }
                Err(e) => {
                    tracing::warn!(error = ?e, "Assistant request failed.");
                    Some((failed(&conversation), AskState::Done))
                }
            },
            AskState::Streaming {
                conversation,
                mut chunks,
            } => match chunks.next().await {
                Some(Ok(chunk)) => {
                    let conversation = conversation.with_reply_chunk(&chunk);
                    Some((
                        conversation.clone(),
                        AskState::Streaming {
                            conversation,
                            chunks,
                        },
                    ))
                }
                Some(Err(e)) => {
                    tracing::warn!(error = ?e, "Assistant reply broke off.");
                    Some((failed(&conversation), AskState::Done))
                }
                None => None,
            },
            AskState::Done => None,
        }
    }
}

fn failed(conversation: &Conversation) -> Conversation {
    conversation.with_message(ChatMessage::assistant(FAILED_REPLY))
}

#[async_trait]
impl<S> AssistantUsecase for AssistantUsecaseImpl<S>
where
    S: ChequeAssistant + 'static,
{
    async fn draft_from_image(&self, image: ChequeImage) -> Result<ChequeDraft, ServerError> {
        let raw = self
            .assistant
            .extract_cheque_details(&image, EXTRACTION_INSTRUCTION)
            .await
            .map_err(|e| {
                tracing::warn!(error = ?e, "Cheque image extraction failed.");
                ChequeImageUnreadable::with_debug(&e)
            })?;
        let extracted: ExtractedChequeData = ExtractedChequeModel::from_json(&raw)
            .map_err(|e| {
                tracing::warn!(error = ?e, "Assistant returned unusable cheque details.");
                e
            })?
            .into();
        tracing::info!(cheque_number = %extracted.cheque_number, "Pre-filled cheque form from image.");
        Ok(ChequeDraft {
            name: extracted.name,
            cheque_number: extracted.cheque_number,
            amount: extracted.amount.to_string(),
            date: extracted.date,
            image: Some(image),
        })
    }

    fn ask_snapshots(
        &self,
        conversation: &Conversation,
        ledger: &ChequeLedger,
        today: NaiveDate,
        question: &str,
    ) -> BoxStream<'static, Conversation> {
        if question.trim().is_empty() {
            return stream::empty().boxed();
        }
        let asked = conversation.with_message(ChatMessage::user(question));
        let first = stream::once(futures::future::ready(asked.clone()));
        let prompt = AssistantPrompt::new(ledger, today);
        let state = match prompt.system_instruction() {
            Ok(system_instruction) => AskState::Requesting {
                assistant: Arc::clone(&self.assistant),
                conversation: asked,
                system_instruction,
                contents: AssistantPrompt::contents(question),
            },
            Err(e) => {
                tracing::warn!(error = ?e, "Could not build assistant prompt.");
                return first.chain(stream::once(futures::future::ready(failed(&asked)))).boxed();
            }
        };
        tracing::debug!(cheques = ledger.len(), "Asking assistant about ledger.");
        first
            .chain(stream::unfold(state, |state| state.advance()))
            .boxed()
    }

    async fn ask(
        &self,
        conversation: &Conversation,
        ledger: &ChequeLedger,
        today: NaiveDate,
        question: &str,
    ) -> Conversation {
        self.ask_snapshots(conversation, ledger, today, question)
            .fold(conversation.clone(), |_, snapshot| async move { snapshot })
            .await
    }
}

impl<S: ChequeAssistant + 'static> AssistantUsecaseImpl<S> {
    pub(crate) fn new(assistant: Arc<S>) -> Self {
        AssistantUsecaseImpl { assistant }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entities::{NewCheque, Sender},
        errors::AssistantRequestFailed,
    };

    struct FakeAssistant {
        extraction: Option<String>,
        chunks: Vec<Option<&'static str>>,
        refuse: bool,
    }

    impl FakeAssistant {
        fn replying(chunks: Vec<Option<&'static str>>) -> Self {
            Self {
                extraction: None,
                chunks,
                refuse: false,
            }
        }
    }

    #[async_trait]
    impl ChequeAssistant for FakeAssistant {
        async fn extract_cheque_details(
            &self,
            _image: &ChequeImage,
            _instruction: &str,
        ) -> Result<String, ServerError> {
            self.extraction
                .clone()
                .ok_or_else(|| AssistantRequestFailed::new())
        }

        async fn ask_stream(
            &self,
            _system_instruction: &str,
            _contents: &str,
        ) -> Result<ReplyStream, ServerError> {
            if self.refuse {
                return Err(AssistantRequestFailed::new());
            }
            let chunks: Vec<Result<String, ServerError>> = self
                .chunks
                .iter()
                .map(|c| match c {
                    Some(text) => Ok(text.to_string()),
                    None => Err(AssistantRequestFailed::new()),
                })
                .collect();
            Ok(stream::iter(chunks).boxed())
        }
    }

    fn image() -> ChequeImage {
        ChequeImage {
            mime_type: "image/png".to_string(),
            data: "aGVsbG8=".to_string(),
        }
    }

    fn setup() -> (ChequeLedger, NaiveDate) {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let mut ledger = ChequeLedger::new();
        ledger
            .insert(NewCheque::new("ABC Corp", "123456", 50000.0, today))
            .unwrap();
        (ledger, today)
    }

    #[tokio::test]
    async fn snapshots_extend_the_reply_chunk_by_chunk() {
        let usecase = AssistantUsecaseImpl::new(Arc::new(FakeAssistant::replying(vec![
            Some("ABC "),
            Some("Corp."),
        ])));
        let (ledger, today) = setup();
        let start = Conversation::greeted("Hi");

        let snapshots: Vec<Conversation> = usecase
            .ask_snapshots(&start, &ledger, today, "Who owes most?")
            .collect()
            .await;

        let replies: Vec<&str> = snapshots
            .iter()
            .map(|s| s.last().unwrap().text.as_str())
            .collect();
        assert_eq!(replies, vec!["Who owes most?", "", "ABC ", "ABC Corp."]);
        // Earlier snapshots are left as they were.
        assert_eq!(start.len(), 1);
        assert_eq!(snapshots[1].len(), 3);
    }

    #[tokio::test]
    async fn blank_questions_are_ignored() {
        let usecase = AssistantUsecaseImpl::new(Arc::new(FakeAssistant::replying(vec![])));
        let (ledger, today) = setup();
        let start = Conversation::greeted("Hi");

        let end = usecase.ask(&start, &ledger, today, "   ").await;

        assert_eq!(end, start);
    }

    #[tokio::test]
    async fn failures_end_with_an_apology() {
        let (ledger, today) = setup();
        let start = Conversation::new();

        let refusing = AssistantUsecaseImpl::new(Arc::new(FakeAssistant {
            refuse: true,
            ..FakeAssistant::replying(vec![])
        }));
        let end = refusing.ask(&start, &ledger, today, "Hello?").await;
        assert_eq!(end.len(), 2);
        assert_eq!(end.last().unwrap().sender, Sender::Assistant);
        assert_eq!(end.last().unwrap().text, FAILED_REPLY);

        let breaking = AssistantUsecaseImpl::new(Arc::new(FakeAssistant::replying(vec![
            Some("Partial"),
            None,
            Some("never seen"),
        ])));
        let end = breaking.ask(&start, &ledger, today, "Hello?").await;
        let texts: Vec<&str> = end.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["Hello?", "Partial", FAILED_REPLY]);
    }

    #[tokio::test]
    async fn image_extraction_prefills_a_draft() {
        let usecase = AssistantUsecaseImpl::new(Arc::new(FakeAssistant {
            extraction: Some(
                r#"{"name":"ABC Corp","chequeNumber":"123456","amount":50000.5,"date":"2024-06-10"}"#
                    .to_string(),
            ),
            ..FakeAssistant::replying(vec![])
        }));

        let draft = usecase.draft_from_image(image()).await.unwrap();

        assert_eq!(draft.name, "ABC Corp");
        assert_eq!(draft.cheque_number, "123456");
        assert_eq!(draft.amount, "50000.5");
        assert_eq!(draft.date, "2024-06-10");
        assert_eq!(draft.image, Some(image()));
    }

    #[tokio::test]
    async fn unusable_extractions_are_errors() {
        let malformed = AssistantUsecaseImpl::new(Arc::new(FakeAssistant {
            extraction: Some(r#"{"name":"ABC Corp"}"#.to_string()),
            ..FakeAssistant::replying(vec![])
        }));
        assert!(malformed.draft_from_image(image()).await.is_err());

        let failing = AssistantUsecaseImpl::new(Arc::new(FakeAssistant::replying(vec![])));
        assert!(failing.draft_from_image(image()).await.is_err());
    }
}
