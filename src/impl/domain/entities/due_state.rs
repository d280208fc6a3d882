use super::cheque::{Cheque, ChequeStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DueState {
    /// Still pending, dated before today.
    Overdue,
    /// Still pending, dated today or within the due-soon window.
    DueSoon,
    Normal,
}

/// A visible ledger row: the cheque, its due-date alert and the statuses a
/// form would offer for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChequeRow<'a> {
    pub cheque: &'a Cheque,
    pub due_state: DueState,
    pub available_statuses: Vec<ChequeStatus>,
}

// --

impl DueState {
    pub fn badge(&self) -> Option<&'static str> {
        match self {
            DueState::Overdue => Some("Overdue"),
            DueState::DueSoon => Some("Due Soon"),
            DueState::Normal => None,
        }
    }
}
