use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::{
    domain::logic::ledger_store::ChequeLedger,
    entities::ChequeStatus,
    errors::PromptSerializationFailed,
};

pub(crate) const EXTRACTION_INSTRUCTION: &str = "Analyze the attached image of a financial cheque. Extract the following details: payee name, cheque number, amount, and the date. The date should be in YYYY-MM-DD format. Ensure the amount is a number. Respond with a JSON object with the keys \"name\", \"chequeNumber\", \"amount\" and \"date\".";

/// What the assistant gets to see of a cheque. Ids and images stay local.
#[derive(Debug, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
struct PromptCheque<'a> {
    name: &'a str,
    cheque_number: &'a str,
    amount: f64,
    date: String,
    status: ChequeStatus,
}

pub(crate) struct AssistantPrompt<'a> {
    ledger: &'a ChequeLedger,
    today: NaiveDate,
}

impl<'a> AssistantPrompt<'a> {
    pub(crate) fn new(ledger: &'a ChequeLedger, today: NaiveDate) -> Self {
        Self { ledger, today }
    }

    pub(crate) fn system_instruction(&self) -> Result<String, ServerError> {
        let cheques: Vec<PromptCheque> = self
            .ledger
            .cheques()
            .iter()
            .map(|c| PromptCheque {
                name: &c.name,
                cheque_number: &c.cheque_number,
                amount: c.amount,
                date: c.date.format("%Y-%m-%d").to_string(),
                status: c.status,
            })
            .collect();
        let cheque_data = serde_json::to_string_pretty(&cheques)
            .map_err(|e| PromptSerializationFailed::with_debug(&e))?;
        Ok(format!(
            "You are an expert financial assistant for an Indian SME. Your task is to analyze the provided cheque data and answer user questions accurately and concisely. The current date is {}. Here is the current list of cheques in JSON format:\n{}",
            self.today.format("%Y-%m-%d"),
            cheque_data
        ))
    }

    pub(crate) fn contents(query: &str) -> String {
        format!("User Query: \"{}\"", query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{ChequeImage, NewCheque};

    #[test]
    fn instruction_embeds_ledger_without_images_or_ids() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let mut ledger = ChequeLedger::new();
        let id = ledger
            .insert(
                NewCheque::new("ABC Corp", "123456", 50000.0, today).with_image(ChequeImage {
                    mime_type: "image/png".to_string(),
                    data: "aGVsbG8=".to_string(),
                }),
            )
            .unwrap();
        ledger.update_status(id, ChequeStatus::Bounced).unwrap();

        let instruction = AssistantPrompt::new(&ledger, today)
            .system_instruction()
            .unwrap();

        assert!(instruction.contains("Indian SME"));
        assert!(instruction.contains("The current date is 2024-06-10."));
        let json = instruction
            .split_once("JSON format:\n")
            .map(|(_, json)| json)
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([{
                "name": "ABC Corp",
                "chequeNumber": "123456",
                "amount": 50000.0,
                "date": "2024-06-10",
                "status": "Bounced",
            }])
        );
        assert!(!instruction.contains("aGVsbG8="));
    }

    #[test]
    fn contents_quote_the_question() {
        assert_eq!(
            AssistantPrompt::contents("Who bounced?"),
            "User Query: \"Who bounced?\""
        );
    }
}
