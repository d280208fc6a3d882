use async_trait::async_trait;
use fractic_server_error::ServerError;
use futures::stream::BoxStream;

use super::cheque::ChequeImage;

pub type ReplyStream = BoxStream<'static, Result<String, ServerError>>;

/// External vision/language model used for image pre-fill and ledger
/// questions. Implementations wrap a concrete provider; this crate only
/// builds the prompts and validates what comes back.
#[async_trait]
pub trait ChequeAssistant: Send + Sync {
    /// Returns the raw JSON text the model produced for the image.
    async fn extract_cheque_details(
        &self,
        image: &ChequeImage,
        instruction: &str,
    ) -> Result<String, ServerError>;

    /// Returns the answer as a stream of text chunks.
    async fn ask_stream(
        &self,
        system_instruction: &str,
        contents: &str,
    ) -> Result<ReplyStream, ServerError>;
}

/// Fields read off a cheque image, before form validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedChequeData {
    pub name: String,
    pub cheque_number: String,
    pub amount: f64,
    /// Expected as YYYY-MM-DD, but not validated until the form is submitted.
    pub date: String,
}
