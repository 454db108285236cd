use std::fmt::Display;

use serde::Serialize;
use tracing::{debug, warn};

use crate::transaction::{Transaction, TransactionError};

/// A single account: balance, display-only interest rate and
/// the append-only log of applied transactions.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Account {
    #[serde(rename = "account")]
    number: i32,

    #[serde(rename = "holder")]
    holder_name: String,

    /// Using an `f64` here is not advised but done for simplicity.
    balance: f64,

    /// Stored for display only, interest is never accrued.
    interest_rate: f64,

    #[serde(skip)]
    transactions: Vec<String>,
}

impl Account {
    pub fn new(
        number: i32,
        initial_balance: f64,
        interest_rate: f64,
        holder_name: impl Into<String>,
    ) -> Self {
        Account {
            number,
            holder_name: holder_name.into(),
            balance: initial_balance,
            interest_rate,
            transactions: Vec::new(),
        }
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    /// Transaction log, oldest entry first.
    pub fn transactions(&self) -> &[String] {
        &self.transactions
    }

    /// Credits the account. Never fails, the amount is not validated.
    pub fn deposit(&mut self, amount: f64) {
        self.balance += amount;
        self.record(Transaction::Deposit(amount));
        debug!(account = self.number, amount, balance = self.balance, "deposit");
    }

    /// Debits the account if the balance covers `amount`.
    /// On failure neither the balance nor the log change.
    pub fn withdraw(&mut self, amount: f64) -> Result<(), TransactionError> {
        // Accept only when covered; a NaN amount or balance falls through.
        if amount <= self.balance {
            self.balance -= amount;
            self.record(Transaction::Withdrawal(amount));
            debug!(account = self.number, amount, balance = self.balance, "withdrawal");

            return Ok(());
        }

        warn!(account = self.number, amount, balance = self.balance, "withdrawal rejected");
        Err(TransactionError::InsufficientFunds {
            requested: amount,
            available: self.balance,
        })
    }

    fn record(&mut self, transaction: Transaction) {
        self.transactions.push(transaction.to_string());
    }
}

impl Display for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Account Holder: {}, Account Number: {}, Balance: {}, Interest Rate: {}%",
            self.holder_name, self.number, self.balance, self.interest_rate
        )
    }
}
