use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::account::Account;
use crate::bank::Bank;
use crate::prompt::Prompt;

const MAIN_MENU: &str = "1. Create Account\n2. Select Account\n3. Exit";
const ACCOUNT_MENU: &str =
    "1. Check Balance\n2. Deposit\n3. Withdraw\n4. Display Transactions\n5. Exit Account";

const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
const INVALID_NUMBER: &str = "Invalid number. Please try again.";

/// Interactive ATM session over a bank.
pub struct Atm<P> {
    bank: Bank,
    prompt: P,
}

impl<P: Prompt> Atm<P> {
    pub fn new(bank: Bank, prompt: P) -> Self {
        Atm { bank, prompt }
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    #[cfg(test)]
    pub(crate) fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn into_bank(self) -> Bank {
        self.bank
    }

    /// Runs the main menu until the user exits.
    pub fn run(&mut self) -> Result<()> {
        info!(accounts = self.bank.accounts().len(), "session started");

        loop {
            let choice = self.ask(MAIN_MENU, "ATM Main Menu")?;

            match choice.trim() {
                "1" => self.create_account()?,
                "2" => self.select_account()?,
                "3" => break,
                _ => self.show(INVALID_CHOICE)?,
            }
        }

        info!("session ended");
        Ok(())
    }

    fn create_account(&mut self) -> Result<()> {
        const TITLE: &str = "Create Account";

        let number = match self.ask_number::<i32>("Enter Account Number:", TITLE)? {
            Some(number) => number,
            None => return Ok(()),
        };
        let initial_balance = match self.ask_number::<f64>("Enter Initial Balance:", TITLE)? {
            Some(balance) => balance,
            None => return Ok(()),
        };
        let interest_rate = match self.ask_number::<f64>("Enter Interest Rate:", TITLE)? {
            Some(rate) => rate,
            None => return Ok(()),
        };
        let holder_name = self.ask("Enter Account Holder's Name:", TITLE)?;

        self.bank.open_account(number, initial_balance, interest_rate, holder_name);
        info!(account = number, "account created");

        self.show("Account created successfully.")
    }

    fn select_account(&mut self) -> Result<()> {
        let number = match self.ask_number::<i32>("Enter Account Number:", "Select Account")? {
            Some(number) => number,
            None => return Ok(()),
        };

        if self.bank.retrieve_account(number).is_none() {
            warn!(account = number, "account not found");
            return self.show("Account not found. Please try again.");
        }

        self.account_menu(number)
    }

    fn account_menu(&mut self, number: i32) -> Result<()> {
        loop {
            let choice = self.ask(ACCOUNT_MENU, "Account Menu")?;

            match choice.trim() {
                "1" => {
                    let balance = self.account(number)?.balance();
                    self.show(&format!("Balance: {}", balance))?;
                }
                "2" => self.deposit(number)?,
                "3" => self.withdraw(number)?,
                "4" => {
                    let transactions = self.account(number)?.transactions().join("\n");
                    self.show(&transactions)?;
                }
                "5" => return Ok(()),
                _ => self.show(INVALID_CHOICE)?,
            }
        }
    }

    fn deposit(&mut self, number: i32) -> Result<()> {
        let amount = match self.ask_number::<f64>("Enter amount to deposit:", "Deposit")? {
            Some(amount) => amount,
            None => return Ok(()),
        };

        self.account_mut(number)?.deposit(amount);
        self.show("Deposit successful.")
    }

    fn withdraw(&mut self, number: i32) -> Result<()> {
        let amount = match self.ask_number::<f64>("Enter amount to withdraw:", "Withdraw")? {
            Some(amount) => amount,
            None => return Ok(()),
        };

        match self.account_mut(number)?.withdraw(amount) {
            Ok(()) => self.show("Withdrawal successful."),
            Err(err) => self.show(&err.to_string()),
        }
    }

    fn account(&self, number: i32) -> Result<&Account> {
        self.bank
            .retrieve_account(number)
            .with_context(|| format!("account {} disappeared", number))
    }

    fn account_mut(&mut self, number: i32) -> Result<&mut Account> {
        self.bank
            .retrieve_account_mut(number)
            .with_context(|| format!("account {} disappeared", number))
    }

    /// Asks for a number. Shows an error and returns `None` when the
    /// answer does not parse.
    fn ask_number<T: FromStr>(&mut self, text: &str, title: &str) -> Result<Option<T>> {
        let answer = self.ask(text, title)?;

        match answer.trim().parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                warn!(input = %answer, "rejected numeric input");
                self.show(INVALID_NUMBER)?;
                Ok(None)
            }
        }
    }

    fn ask(&mut self, text: &str, title: &str) -> Result<String> {
        self.prompt
            .ask(text, title)
            .with_context(|| format!("failed to read answer for {:?}", title))
    }

    fn show(&mut self, message: &str) -> Result<()> {
        self.prompt.show(message).context("failed to display message")
    }
}
