//! Walkthroughs behind the `ledgerbook` binary.
//!
//! Each walkthrough returns what it observed so the binary can print it and
//! tests can assert on it.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

use ledgerbook_accounts::{Account, InterestBearingAccount, Person};
use ledgerbook_core::{DomainResult, Entity};
use ledgerbook_infra::{FileStore, PersistError, PersistResult, SnapshotStore};

/// Outcome of saving the budget account.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveReport {
    pub identity: String,
    pub path: PathBuf,
    pub contents: String,
}

/// Balances seen while crediting interest.
#[derive(Debug, Clone, PartialEq)]
pub struct InterestReport {
    pub owner: String,
    pub birthdate: NaiveDate,
    pub balance_after_deposit: f64,
    pub balance_after_interest: f64,
}

/// Render a balance the way the walkthrough prints it, always with a
/// fractional part (`200.0`, not `200`).
pub fn format_balance(balance: f64) -> String {
    format!("{balance:?}")
}

/// Create "John Best"/"Budget", deposit 150.0, save it and read the file back.
pub fn save_walkthrough(store: &FileStore) -> PersistResult<SaveReport> {
    let mut account = Account::new("John Best", "Budget");
    account.deposit(150.0);

    let key = store.save(&account)?;
    let path = store.path_for(&key);
    let contents = fs::read_to_string(&path).map_err(|e| PersistError::Io {
        path: path.clone(),
        source: e,
    })?;

    tracing::info!(identity = %account.identity(), key = %key, "account saved");

    Ok(SaveReport {
        identity: account.identity(),
        path,
        contents,
    })
}

/// Open a 10% savings account for John Best, deposit 200.0 and credit interest.
pub fn interest_walkthrough() -> DomainResult<InterestReport> {
    let owner = Person::new("811228-9874", "John", "Best");
    let birthdate = owner.birthdate()?;

    let mut account = InterestBearingAccount::for_owner(&owner, "Savings", 0.1);
    account.deposit(200.0);
    let balance_after_deposit = account.balance();

    account.deposit_interest();
    let balance_after_interest = account.balance();

    tracing::info!(
        identity = %account.identity(),
        rate = account.policy().rate(),
        balance = balance_after_interest,
        "interest credited"
    );

    Ok(InterestReport {
        owner: owner.full_name(),
        birthdate,
        balance_after_deposit,
        balance_after_interest,
    })
}
