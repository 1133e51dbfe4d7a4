//! Accounts module (bank accounts and their owners).
//!
//! Pure domain logic only: no IO. Persistence goes through
//! `ledgerbook_core::Serializable` and the stores in `ledgerbook-infra`.

pub mod account;
pub mod person;

pub use account::{Account, InterestBearingAccount, InterestPolicy};
pub use person::Person;
