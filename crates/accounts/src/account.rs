use serde::{Deserialize, Serialize};

use ledgerbook_core::{DomainResult, Entity, Serializable, Snapshot, ValueObject};

use crate::person::Person;

const OWNER_NAME: &str = "owner_name";
const ACCOUNT_NAME: &str = "account_name";
const BALANCE: &str = "balance";
const RATE: &str = "rate";

/// Bank account entity.
///
/// Identity is `"{owner_name}-{account_name}"`. The balance is only changed
/// through `deposit`/`withdraw`; overdrafts and negative amounts are accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    owner_name: String,
    account_name: String,
    balance: f64,
}

impl Account {
    /// New account with a zero balance.
    pub fn new(owner_name: impl Into<String>, account_name: impl Into<String>) -> Self {
        Self {
            owner_name: owner_name.into(),
            account_name: account_name.into(),
            balance: 0.0,
        }
    }

    /// New account owned by `owner`, named after their full name.
    pub fn for_owner(owner: &Person, account_name: impl Into<String>) -> Self {
        Self::new(owner.full_name(), account_name)
    }

    /// Rebuild an account from a snapshot produced by [`Serializable::snapshot`].
    pub fn from_snapshot(snapshot: &Snapshot) -> DomainResult<Self> {
        Ok(Self {
            owner_name: snapshot.require_str(OWNER_NAME)?.to_string(),
            account_name: snapshot.require_str(ACCOUNT_NAME)?.to_string(),
            balance: snapshot.require_f64(BALANCE)?,
        })
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn deposit(&mut self, amount: f64) {
        self.balance += amount;
    }

    pub fn withdraw(&mut self, amount: f64) {
        self.balance -= amount;
    }
}

impl Entity for Account {
    fn identity(&self) -> String {
        format!("{}-{}", self.owner_name, self.account_name)
    }
}

impl Serializable for Account {
    /// A non-finite balance (e.g. after overflowing deposits) has no JSON
    /// number form and is recorded as `null`; such a snapshot cannot be
    /// rebuilt with [`Account::from_snapshot`].
    fn snapshot(&self) -> Snapshot {
        Snapshot::new()
            .with(OWNER_NAME, self.owner_name.as_str())
            .with(ACCOUNT_NAME, self.account_name.as_str())
            .with(BALANCE, self.balance)
    }
}

/// Fixed interest rate applied by [`InterestBearingAccount::deposit_interest`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestPolicy {
    rate: f64,
}

impl InterestPolicy {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Interest earned on `balance` for one period.
    pub fn interest_on(&self, balance: f64) -> f64 {
        self.rate * balance
    }
}

impl ValueObject for InterestPolicy {}

/// Account that additionally earns interest at a fixed rate.
///
/// Wraps a plain [`Account`]; identity and the base fields come from it.
#[derive(Debug, Clone, PartialEq)]
pub struct InterestBearingAccount {
    account: Account,
    policy: InterestPolicy,
}

impl InterestBearingAccount {
    pub fn new(
        owner_name: impl Into<String>,
        account_name: impl Into<String>,
        rate: f64,
    ) -> Self {
        Self {
            account: Account::new(owner_name, account_name),
            policy: InterestPolicy::new(rate),
        }
    }

    pub fn for_owner(owner: &Person, account_name: impl Into<String>, rate: f64) -> Self {
        Self::new(owner.full_name(), account_name, rate)
    }

    pub fn from_snapshot(snapshot: &Snapshot) -> DomainResult<Self> {
        Ok(Self {
            account: Account::from_snapshot(snapshot)?,
            policy: InterestPolicy::new(snapshot.require_f64(RATE)?),
        })
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn policy(&self) -> InterestPolicy {
        self.policy
    }

    pub fn balance(&self) -> f64 {
        self.account.balance()
    }

    pub fn deposit(&mut self, amount: f64) {
        self.account.deposit(amount);
    }

    pub fn withdraw(&mut self, amount: f64) {
        self.account.withdraw(amount);
    }

    /// Credit one period of interest: `balance += rate * balance`.
    pub fn deposit_interest(&mut self) {
        let interest = self.policy.interest_on(self.account.balance());
        self.account.deposit(interest);
    }
}

impl Entity for InterestBearingAccount {
    fn identity(&self) -> String {
        self.account.identity()
    }
}

impl Serializable for InterestBearingAccount {
    fn snapshot(&self) -> Snapshot {
        self.account.snapshot().with(RATE, self.policy.rate())
    }
}
