use crate::entities::{ChequeStatus, NewCheque};

/// A cheque to load into a fresh ledger, with the status it should end up in.
#[derive(Debug, Clone)]
pub(crate) struct SeedCheque {
    /// Position in the source, counting from 1.
    pub row: usize,
    pub cheque: NewCheque,
    pub status: ChequeStatus,
}
