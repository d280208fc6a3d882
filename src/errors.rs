use chrono::NaiveDate;
use fractic_server_error::{define_client_error, define_internal_error};

use crate::entities::ChequeId;

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(
    InvalidCsvRow,
    "Invalid cheque on CSV row {row}.",
    { row: usize }
);
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(InvalidIsoCurrencyCode, "Invalid ISO currency code: {code}.", { code: &str });
define_client_error!(InvalidChequeStatus, "Invalid cheque status: '{value}'.", { value: &str });
define_client_error!(InvalidImageData, "Invalid image format.");

// Record input.
define_client_error!(
    MissingChequeField,
    "All fields are mandatory ('{field}' is empty).",
    { field: &str }
);
define_client_error!(InvalidChequeAmount, "Invalid cheque amount: '{value}'.", { value: &str });
define_client_error!(
    NonPositiveAmount,
    "Amount must be greater than zero (got {amount}).",
    { amount: f64 }
);

// Ledger-related.
define_client_error!(
    DuplicateChequeNumber,
    "Cheque number {cheque_number} already exists.",
    { cheque_number: &str }
);
define_client_error!(ChequeNotFound, "No cheque with id {id}.", { id: &ChequeId });
define_client_error!(
    OverdueChequeCannotBeCleared,
    "Cheque {cheque_number} dated {date} is overdue and cannot be marked as Cleared.",
    { cheque_number: &str, date: &NaiveDate }
);

// External assistant.
define_client_error!(
    ChequeImageUnreadable,
    "Failed to analyze cheque image. Please check the image or try entering the details manually."
);
define_internal_error!(
    AssistantRequestFailed,
    "Failed to get response from AI assistant."
);
define_internal_error!(
    PromptSerializationFailed,
    "Could not serialize the ledger for the assistant prompt."
);
