use std::fmt::Display;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum Transaction {
    /// A deposit credits the account. Any amount is accepted,
    /// including zero and negative amounts.
    ///
    /// Logged as `Deposited: 50`.
    Deposit(f64),

    /// A withdrawal debits the account. It is only applied when
    /// the amount does not exceed the current balance.
    ///
    /// Logged as `Withdrew: 20`.
    Withdrawal(f64),
}

impl Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Transaction::Deposit(amount) => write!(f, "Deposited: {}", amount),
            Transaction::Withdrawal(amount) => write!(f, "Withdrew: {}", amount),
        }
    }
}

#[non_exhaustive]
#[derive(Debug, Error, PartialEq)]
pub enum TransactionError {
    /// Withdrawal could not be made since it exceeds the account balance.
    #[error("Insufficient funds. Requested {requested}, available {available}.")]
    InsufficientFunds { requested: f64, available: f64 },
}
