use super::account::{Account, AccountId, Phone};
use super::payment::{Favorite, Payment};
use crate::error::WalletError;
use std::sync::Arc;

/// Read-only view of the payment sequence handed to the aggregation workers.
pub type PaymentSnapshot = Arc<Vec<Payment>>;

/// Owned copy of every record in a ledger, used for export and import.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LedgerSnapshot {
    pub accounts: Vec<Account>,
    pub payments: Vec<Payment>,
    pub favorites: Vec<Favorite>,
}

impl LedgerSnapshot {
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty() && self.payments.is_empty() && self.favorites.is_empty()
    }
}

/// The in-memory collection of accounts, payments and favorites.
///
/// Payments live behind an `Arc` so that [`Ledger::payments_snapshot`] is an
/// O(1) clone. A mutation made while a snapshot is still alive copies the
/// sequence first, which keeps in-flight aggregations isolated from writes.
#[derive(Debug, Default)]
pub struct Ledger {
    next_account_id: AccountId,
    accounts: Vec<Account>,
    payments: PaymentSnapshot,
    favorites: Vec<Favorite>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    pub fn favorites(&self) -> &[Favorite] {
        &self.favorites
    }

    pub fn payments_snapshot(&self) -> PaymentSnapshot {
        Arc::clone(&self.payments)
    }

    /// Registers a new account under the next sequential id.
    pub fn open_account(&mut self, phone: Phone) -> Result<&Account, WalletError> {
        if self.accounts.iter().any(|account| account.phone == phone) {
            return Err(WalletError::PhoneRegistered);
        }

        self.next_account_id += 1;
        self.accounts.push(Account::new(self.next_account_id, phone));
        let index = self.accounts.len() - 1;
        Ok(&self.accounts[index])
    }

    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    pub fn account_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|account| account.id == id)
    }

    pub fn payment(&self, id: &str) -> Option<&Payment> {
        self.payments.iter().find(|payment| payment.id == id)
    }

    pub fn payment_mut(&mut self, id: &str) -> Option<&mut Payment> {
        let index = self.payments.iter().position(|payment| payment.id == id)?;
        Arc::make_mut(&mut self.payments).get_mut(index)
    }

    pub fn favorite(&self, id: &str) -> Option<&Favorite> {
        self.favorites.iter().find(|favorite| favorite.id == id)
    }

    pub fn push_payment(&mut self, payment: Payment) {
        Arc::make_mut(&mut self.payments).push(payment);
    }

    pub fn push_favorite(&mut self, favorite: Favorite) {
        self.favorites.push(favorite);
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            accounts: self.accounts.clone(),
            payments: self.payments.to_vec(),
            favorites: self.favorites.clone(),
        }
    }

    /// Merges imported records by id: existing records are replaced, new ones
    /// are appended in import order.
    pub fn merge(&mut self, snapshot: LedgerSnapshot) {
        for account in snapshot.accounts {
            self.next_account_id = self.next_account_id.max(account.id);
            upsert(&mut self.accounts, account, |a, b| a.id == b.id);
        }

        if !snapshot.payments.is_empty() {
            let payments = Arc::make_mut(&mut self.payments);
            for payment in snapshot.payments {
                upsert(payments, payment, |a, b| a.id == b.id);
            }
        }

        for favorite in snapshot.favorites {
            upsert(&mut self.favorites, favorite, |a, b| a.id == b.id);
        }
    }
}

fn upsert<T>(items: &mut Vec<T>, item: T, same: impl Fn(&T, &T) -> bool) {
    match items.iter_mut().find(|existing| same(existing, &item)) {
        Some(existing) => *existing = item,
        None => items.push(item),
    }
}
