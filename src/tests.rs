#[cfg(test)]
mod tests {
    use crate::account::Account;
    use crate::bank::Bank;
    use crate::transaction::TransactionError;

    #[test]
    fn default_accounts_should_be_seeded() {
        let bank = Bank::new();

        assert_eq!(bank.accounts().len(), 10);
        for (account, number) in bank.accounts().iter().zip(100..110) {
            assert_eq!(account.number(), number);
            assert_eq!(account.balance(), 100.0);
            assert_eq!(account.interest_rate(), 3.0);
            assert_eq!(account.holder_name(), format!("Default User {}", number));
            assert!(account.transactions().is_empty());
        }
    }

    #[test]
    fn deposit_should_add_to_balance() {
        let mut bank = Bank::new();
        let account = bank.retrieve_account_mut(100).unwrap();

        account.deposit(50.0);

        assert_eq!(account.balance(), 150.0);
        assert_eq!(account.transactions(), ["Deposited: 50"]);
    }

    #[test]
    fn overdraft_should_be_rejected() {
        let mut bank = Bank::new();
        let account = bank.retrieve_account_mut(100).unwrap();

        let result = account.withdraw(1000.0);

        assert!(matches!(
            result,
            Err(TransactionError::InsufficientFunds { .. })
        ));
        assert_eq!(account.balance(), 100.0);
        assert!(account.transactions().is_empty());
    }

    #[test]
    fn unknown_account_should_not_be_found() {
        let bank = Bank::new();

        assert!(bank.retrieve_account(999).is_none());
    }

    #[test]
    fn new_account_deposit_then_withdraw() {
        let mut bank = Bank::new();
        bank.add_account(Account::new(500, 0.0, 1.0, "X"));

        let account = bank.retrieve_account_mut(500).unwrap();
        account.deposit(20.0);
        account.withdraw(20.0).unwrap();

        assert_eq!(account.balance(), 0.0);
        assert_eq!(account.transactions(), ["Deposited: 20", "Withdrew: 20"]);
    }

    #[test]
    fn listing_transactions_should_be_idempotent() {
        let mut bank = Bank::new();
        let account = bank.retrieve_account_mut(101).unwrap();
        account.deposit(5.0);
        account.withdraw(2.5).unwrap();

        let first = account.transactions().to_vec();
        let second = account.transactions().to_vec();

        assert_eq!(first, second);
        assert_eq!(first, vec!["Deposited: 5", "Withdrew: 2.5"]);
    }

    #[test]
    fn balances_should_add_up() {
        let mut account = Account::new(1, 0.0, 0.0, "A");
        let amounts = [1.0, 2.0, -0.5, 10.0];

        for amount in amounts {
            account.deposit(amount);
        }
        account.withdraw(4.0).unwrap();

        assert_eq!(account.balance(), 8.5);
        assert_eq!(account.transactions().len(), 5);
        assert_eq!(account.transactions().last().unwrap(), "Withdrew: 4");
    }
}
