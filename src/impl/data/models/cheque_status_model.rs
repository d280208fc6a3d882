use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::{entities::ChequeStatus, errors::InvalidChequeStatus};

#[derive(Debug)]
pub(crate) struct ChequeStatusModel(ChequeStatus);
impl FromStr for ChequeStatusModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let status = match s.trim().to_ascii_lowercase().as_str() {
            "" | "pending" => ChequeStatus::Pending,
            "cleared" => ChequeStatus::Cleared,
            "bounced" => ChequeStatus::Bounced,
            _ => return Err(InvalidChequeStatus::new(s)),
        };
        Ok(ChequeStatusModel(status))
    }
}

impl Into<ChequeStatus> for ChequeStatusModel {
    fn into(self) -> ChequeStatus {
        self.0
    }
}
