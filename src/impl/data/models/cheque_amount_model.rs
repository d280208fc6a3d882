use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::{entities::MAX_CHEQUE_AMOUNT, errors::InvalidChequeAmount};

/// Amount as written on a form or in a seed file. Thousands separators are
/// ignored, so both `120,000.50` and `1,20,000.50` are accepted. Amounts above
/// `MAX_CHEQUE_AMOUNT` are rejected.
#[derive(Debug)]
pub(crate) struct ChequeAmountModel(pub f64);
impl FromStr for ChequeAmountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.replace(",", "");
        let numeric_part = raw.trim();
        let amount = numeric_part
            .parse::<f64>()
            .map_err(|_| InvalidChequeAmount::new(s))?;
        if !amount.is_finite() || amount > MAX_CHEQUE_AMOUNT {
            return Err(InvalidChequeAmount::new(s));
        }
        Ok(ChequeAmountModel(amount))
    }
}

impl Into<f64> for ChequeAmountModel {
    fn into(self) -> f64 {
        self.0
    }
}
