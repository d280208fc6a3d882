use std::str::FromStr as _;

use fractic_server_error::ServerError;

use crate::{
    data::models::{cheque_amount_model::ChequeAmountModel, iso_date_model::ISODateModel},
    entities::{ChequeDraft, NewCheque},
    errors::{MissingChequeField, NonPositiveAmount},
};

/// Turns the raw form into a recordable cheque. Nothing reaches the ledger
/// unless this succeeds.
pub(crate) struct DraftValidator;

impl DraftValidator {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn validate(&self, draft: ChequeDraft) -> Result<NewCheque, ServerError> {
        let ChequeDraft {
            name,
            cheque_number,
            amount,
            date,
            image,
        } = draft;

        for (field, value) in [
            ("name", &name),
            ("cheque_number", &cheque_number),
            ("amount", &amount),
            ("date", &date),
        ] {
            if value.trim().is_empty() {
                return Err(MissingChequeField::new(field));
            }
        }

        let amount: f64 = ChequeAmountModel::from_str(&amount)?.into();
        if amount <= 0.0 {
            return Err(NonPositiveAmount::new(amount));
        }
        let date = ISODateModel::from_str(&date)?.into();

        Ok(NewCheque {
            name: name.trim().to_string(),
            cheque_number: cheque_number.trim().to_string(),
            amount,
            date,
            image,
        })
    }
}
