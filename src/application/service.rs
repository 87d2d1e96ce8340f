use crate::aggregation::{self, ProgressStream};
use crate::config::EngineConfig;
use crate::domain::account::{Account, AccountId, Money, Phone};
use crate::domain::ledger::{Ledger, LedgerSnapshot};
use crate::domain::payment::{Favorite, Payment, PaymentCategory, PaymentStatus};
use crate::domain::ports::LedgerArchive;
use crate::error::{Result, WalletError};
use crate::infrastructure::flat_file::FlatFileArchive;
use crate::interfaces::flat::{accounts, history};
use std::path::Path;

/// The main entry point of the wallet.
///
/// `WalletService` is the single writer of its [`Ledger`]: every mutation
/// goes through `&mut self` and is applied in call order. Aggregations take
/// `&self`, work on a read-only snapshot of the payments and fan out to
/// parallel workers.
#[derive(Debug, Default)]
pub struct WalletService {
    ledger: Ledger,
    config: EngineConfig,
}

impl WalletService {
    /// Creates an empty wallet with the default [`EngineConfig`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            ledger: Ledger::new(),
            config,
        }
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn register_account(&mut self, phone: impl Into<Phone>) -> Result<Account> {
        self.ledger.open_account(phone.into()).cloned()
    }

    pub fn deposit(&mut self, account_id: AccountId, amount: Money) -> Result<()> {
        let amount = amount.ensure_positive()?;
        let account = self
            .ledger
            .account_mut(account_id)
            .ok_or(WalletError::AccountNotFound)?;

        account.deposit(amount)
    }

    /// Debits the account and records an in-progress payment.
    pub fn pay(
        &mut self,
        account_id: AccountId,
        amount: Money,
        category: impl Into<PaymentCategory>,
    ) -> Result<Payment> {
        let amount = amount.ensure_positive()?;
        let account = self
            .ledger
            .account_mut(account_id)
            .ok_or(WalletError::AccountNotFound)?;

        account.withdraw(amount)?;
        let payment = Payment::new(account_id, amount, category.into());
        self.ledger.push_payment(payment.clone());
        Ok(payment)
    }

    pub fn find_account_by_id(&self, account_id: AccountId) -> Result<&Account> {
        self.ledger
            .account(account_id)
            .ok_or(WalletError::AccountNotFound)
    }

    pub fn find_payment_by_id(&self, payment_id: &str) -> Result<&Payment> {
        self.ledger
            .payment(payment_id)
            .ok_or(WalletError::PaymentNotFound)
    }

    pub fn find_favorite_by_id(&self, favorite_id: &str) -> Result<&Favorite> {
        self.ledger
            .favorite(favorite_id)
            .ok_or(WalletError::FavoriteNotFound)
    }

    /// Marks the payment failed and returns its amount to the account.
    ///
    /// Rejecting a payment that already failed changes nothing.
    pub fn reject(&mut self, payment_id: &str) -> Result<()> {
        let payment = self.find_payment_by_id(payment_id)?;
        if payment.is_failed() {
            return Ok(());
        }

        let (account_id, amount) = (payment.account_id, payment.amount);
        let account = self
            .ledger
            .account_mut(account_id)
            .ok_or(WalletError::AccountNotFound)?;
        account.deposit(amount)?;

        if let Some(payment) = self.ledger.payment_mut(payment_id) {
            payment.status = PaymentStatus::Fail;
        }
        Ok(())
    }

    /// Issues a new payment with the same account, amount and category.
    pub fn repeat(&mut self, payment_id: &str) -> Result<Payment> {
        let payment = self.find_payment_by_id(payment_id)?;
        let (account_id, amount, category) =
            (payment.account_id, payment.amount, payment.category.clone());

        self.pay(account_id, amount, category)
    }

    pub fn favorite_payment(
        &mut self,
        payment_id: &str,
        name: impl Into<String>,
    ) -> Result<Favorite> {
        let favorite = Favorite::from_payment(self.find_payment_by_id(payment_id)?, name);
        self.ledger.push_favorite(favorite.clone());
        Ok(favorite)
    }

    pub fn pay_from_favorite(&mut self, favorite_id: &str) -> Result<Payment> {
        let favorite = self.find_favorite_by_id(favorite_id)?;
        let (account_id, amount, category) =
            (favorite.account_id, favorite.amount, favorite.category.clone());

        self.pay(account_id, amount, category)
    }

    /// Returns the account's payments in ledger order.
    pub fn export_account_history(&self, account_id: AccountId) -> Result<Vec<Payment>> {
        self.find_account_by_id(account_id)?;
        Ok(self
            .ledger
            .payments()
            .iter()
            .filter(|payment| payment.account_id == account_id)
            .cloned()
            .collect())
    }

    /// Sums every payment amount using `workers` parallel workers.
    pub async fn sum_payments(&self, workers: usize) -> Money {
        aggregation::sum_payments(self.ledger.payments_snapshot(), workers).await
    }

    /// Streams partial sums as they complete, using
    /// [`EngineConfig::progress_workers`] workers.
    pub fn sum_payments_with_progress(&self) -> ProgressStream {
        aggregation::sum_payments_with_progress(
            self.ledger.payments_snapshot(),
            self.config.progress_workers(),
        )
    }

    /// Returns the payments of one account, in ledger order.
    pub async fn filter_payments(
        &self,
        account_id: AccountId,
        workers: usize,
    ) -> Result<Vec<Payment>> {
        self.find_account_by_id(account_id)?;
        let snapshot = self.ledger.payments_snapshot();
        let found = aggregation::filter_payments(snapshot, workers, move |payment| {
            payment.account_id == account_id
        })
        .await;
        Ok(found)
    }

    /// Returns the payments matching `predicate`, in ledger order.
    pub async fn filter_payments_by_fn<F>(&self, predicate: F, workers: usize) -> Vec<Payment>
    where
        F: Fn(&Payment) -> bool + Send + Sync + 'static,
    {
        aggregation::filter_payments(self.ledger.payments_snapshot(), workers, predicate).await
    }

    /// Writes all accounts to a single flat file.
    pub async fn export_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        accounts::export_accounts(path.as_ref(), self.ledger.accounts()).await
    }

    /// Merges the accounts of a file written by [`Self::export_to_file`].
    pub async fn import_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let accounts = accounts::import_accounts(path.as_ref()).await?;
        self.ledger.merge(LedgerSnapshot {
            accounts,
            ..Default::default()
        });
        Ok(())
    }

    pub async fn export_to(&self, archive: &dyn LedgerArchive) -> Result<()> {
        archive.save(&self.ledger.snapshot()).await
    }

    /// Merges everything the archive holds into the ledger.
    pub async fn import_from(&mut self, archive: &dyn LedgerArchive) -> Result<()> {
        let snapshot = archive.load().await?;
        self.ledger.merge(snapshot);
        Ok(())
    }

    /// Exports every collection as dump files in `dir`.
    pub async fn export(&self, dir: impl AsRef<Path>) -> Result<()> {
        self.export_to(&FlatFileArchive::new(dir.as_ref())).await
    }

    /// Imports the dump files found in `dir`.
    pub async fn import(&mut self, dir: impl AsRef<Path>) -> Result<()> {
        self.import_from(&FlatFileArchive::new(dir.as_ref())).await
    }

    pub async fn history_to_files(
        &self,
        payments: &[Payment],
        dir: impl AsRef<Path>,
        records: usize,
    ) -> Result<()> {
        history::history_to_files(payments, dir.as_ref(), records).await
    }
}
