use fractic_server_error::ServerError;

use crate::{
    entities::{Cheque, ChequeId, ChequeStatus, NewCheque, MAX_CHEQUE_AMOUNT},
    errors::{
        ChequeNotFound, DuplicateChequeNumber, InvalidChequeAmount, MissingChequeField,
        NonPositiveAmount,
    },
};

/// In-memory cheque ledger, newest first.
///
/// The ledger is owned by the application and passed by reference to every
/// operation; nothing in the crate keeps a global copy of it.
#[derive(Debug, Default, Clone)]
pub struct ChequeLedger {
    cheques: Vec<Cheque>,
    next_id: u64,
}

impl ChequeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new cheque as `Pending` and returns its id.
    ///
    /// Fails without touching the ledger if the cheque number is already
    /// recorded (exact, case-sensitive match) or the record is invalid.
    pub fn insert(&mut self, new_cheque: NewCheque) -> Result<ChequeId, ServerError> {
        if new_cheque.name.trim().is_empty() {
            return Err(MissingChequeField::new("name"));
        }
        if new_cheque.cheque_number.trim().is_empty() {
            return Err(MissingChequeField::new("cheque_number"));
        }
        if !(new_cheque.amount.is_finite() && new_cheque.amount > 0.0) {
            return Err(NonPositiveAmount::new(new_cheque.amount));
        }
        if new_cheque.amount > MAX_CHEQUE_AMOUNT {
            return Err(InvalidChequeAmount::new(&new_cheque.amount.to_string()));
        }
        if self.contains_number(&new_cheque.cheque_number) {
            return Err(DuplicateChequeNumber::new(&new_cheque.cheque_number));
        }

        self.next_id += 1;
        let id = ChequeId(self.next_id);
        let NewCheque {
            name,
            cheque_number,
            amount,
            date,
            image,
        } = new_cheque;
        self.cheques.insert(
            0,
            Cheque {
                id,
                name,
                cheque_number,
                amount,
                date,
                status: ChequeStatus::Pending,
                image,
            },
        );
        Ok(id)
    }

    /// Replaces the status of one cheque. Any transition is allowed here;
    /// callers decide whether a transition makes sense.
    pub fn update_status(&mut self, id: ChequeId, status: ChequeStatus) -> Result<(), ServerError> {
        let cheque = self
            .cheques
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ChequeNotFound::new(&id))?;
        cheque.status = status;
        Ok(())
    }

    pub fn cheques(&self) -> &[Cheque] {
        &self.cheques
    }

    pub fn get(&self, id: ChequeId) -> Option<&Cheque> {
        self.cheques.iter().find(|c| c.id == id)
    }

    pub fn contains_number(&self, cheque_number: &str) -> bool {
        self.cheques.iter().any(|c| c.cheque_number == cheque_number)
    }

    pub fn len(&self) -> usize {
        self.cheques.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cheques.is_empty()
    }
}
