use fractic_server_error::ServerError;

use crate::{entities::ExtractedChequeData, errors::ChequeImageUnreadable};

/// JSON shape the assistant is asked to return for a cheque image.
#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExtractedChequeModel {
    name: String,
    cheque_number: String,
    amount: f64,
    date: String,
}

impl ExtractedChequeModel {
    pub(crate) fn from_json(raw: &str) -> Result<Self, ServerError> {
        serde_json::from_str(raw.trim()).map_err(|e| ChequeImageUnreadable::with_debug(&e))
    }
}

impl Into<ExtractedChequeData> for ExtractedChequeModel {
    fn into(self) -> ExtractedChequeData {
        ExtractedChequeData {
            name: self.name,
            cheque_number: self.cheque_number,
            amount: self.amount,
            date: self.date,
        }
    }
}
