use std::collections::HashMap;

use tracing::debug;

use crate::account::Account;

/// Number of the first seeded account.
pub const FIRST_DEFAULT_ACCOUNT: i32 = 100;
pub const DEFAULT_ACCOUNT_COUNT: i32 = 10;
pub const DEFAULT_BALANCE: f64 = 100.0;
pub const DEFAULT_INTEREST_RATE: f64 = 3.0;

/// In-memory directory of every known account.
///
/// Account numbers are not required to be unique. Accounts are kept in
/// insertion order and a lookup returns the first account added under
/// a number.
#[derive(Debug, Clone)]
pub struct Bank {
    accounts: Vec<Account>,

    /// Account number to the position of its first occurrence in `accounts`.
    index: HashMap<i32, usize>,
}

impl Bank {
    /// Creates a bank seeded with the default accounts 100 through 109.
    pub fn new() -> Self {
        let mut bank = Bank {
            accounts: Vec::new(),
            index: HashMap::new(),
        };

        for number in FIRST_DEFAULT_ACCOUNT..FIRST_DEFAULT_ACCOUNT + DEFAULT_ACCOUNT_COUNT {
            bank.add_account(Account::new(
                number,
                DEFAULT_BALANCE,
                DEFAULT_INTEREST_RATE,
                format!("Default User {}", number),
            ));
        }

        bank
    }

    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Bank {
            accounts: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Adds an account. Duplicate numbers are kept but stay shadowed
    /// by the earlier account for lookups.
    pub fn add_account(&mut self, account: Account) {
        debug!(account = account.number(), holder = account.holder_name(), "account added");

        self.index
            .entry(account.number())
            .or_insert(self.accounts.len());
        self.accounts.push(account);
    }

    /// Builds an account from its parts and adds it.
    pub fn open_account(
        &mut self,
        number: i32,
        initial_balance: f64,
        interest_rate: f64,
        holder_name: impl Into<String>,
    ) {
        self.add_account(Account::new(number, initial_balance, interest_rate, holder_name));
    }

    pub fn retrieve_account(&self, number: i32) -> Option<&Account> {
        self.index.get(&number).map(|&i| &self.accounts[i])
    }

    pub fn retrieve_account_mut(&mut self, number: i32) -> Option<&mut Account> {
        let i = *self.index.get(&number)?;
        self.accounts.get_mut(i)
    }

    /// All accounts in insertion order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }
}

impl Default for Bank {
    fn default() -> Self {
        Bank::new()
    }
}
