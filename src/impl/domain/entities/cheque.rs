use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChequeId(pub(crate) u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Serialize)]
pub enum ChequeStatus {
    Pending,
    Cleared,
    Bounced,
}

/// Photo of the physical cheque, kept as the base64 payload of a data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChequeImage {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cheque {
    pub id: ChequeId,
    /// Payer or payee.
    pub name: String,
    pub cheque_number: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub status: ChequeStatus,
    pub image: Option<ChequeImage>,
}

/// Largest amount a single cheque may carry (one lakh crore).
pub const MAX_CHEQUE_AMOUNT: f64 = 1_000_000_000_000.0;

/// A validated cheque that has not been recorded yet. Recording always starts
/// in `ChequeStatus::Pending`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCheque {
    pub name: String,
    pub cheque_number: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub image: Option<ChequeImage>,
}

/// Raw contents of the new-cheque form, either typed in or pre-filled from a
/// scanned image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChequeDraft {
    pub name: String,
    pub cheque_number: String,
    pub amount: String,
    pub date: String,
    pub image: Option<ChequeImage>,
}

// --

impl std::fmt::Display for ChequeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ChequeStatus {
    pub const ALL: [ChequeStatus; 3] = [
        ChequeStatus::Pending,
        ChequeStatus::Cleared,
        ChequeStatus::Bounced,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ChequeStatus::Pending => "Pending",
            ChequeStatus::Cleared => "Cleared",
            ChequeStatus::Bounced => "Bounced",
        }
    }

    /// Cleared and Bounced cheques are settled; the form offers no further
    /// actions for them.
    pub fn is_final(&self) -> bool {
        matches!(self, ChequeStatus::Cleared | ChequeStatus::Bounced)
    }
}

impl std::fmt::Display for ChequeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl NewCheque {
    pub fn new(
        name: impl Into<String>,
        cheque_number: impl Into<String>,
        amount: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            cheque_number: cheque_number.into(),
            amount,
            date,
            image: None,
        }
    }

    pub fn with_image(self, image: ChequeImage) -> Self {
        Self {
            image: Some(image),
            ..self
        }
    }
}

impl ChequeDraft {
    pub fn manual(
        name: impl Into<String>,
        cheque_number: impl Into<String>,
        amount: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            cheque_number: cheque_number.into(),
            amount: amount.into(),
            date: date.into(),
            image: None,
        }
    }
}
