#![allow(dead_code)]

use rand::Rng;
use std::path::Path;
use wallet::application::service::WalletService;
use wallet::domain::account::{AccountId, Money};

/// Registers one account, funds it and pays each amount in order.
pub fn service_with_amounts(amounts: &[i64]) -> (WalletService, AccountId) {
    let mut svc = WalletService::new();
    let account = svc.register_account("+992000000001").unwrap();
    let total: i64 = amounts.iter().sum();
    if total > 0 {
        svc.deposit(account.id, Money::new(total)).unwrap();
    }
    for &amount in amounts {
        svc.pay(account.id, Money::new(amount), "Cafe").unwrap();
    }
    (svc, account.id)
}

pub fn random_amounts(len: usize) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(1..=10_000)).collect()
}

/// Writes a dump directory with three accounts and a handful of payments.
pub async fn seed_dump_dir(dir: &Path) -> WalletService {
    let mut svc = WalletService::new();
    for n in 1..=3 {
        let account = svc.register_account(format!("+99200000000{n}")).unwrap();
        svc.deposit(account.id, Money::new(100_00)).unwrap();
    }
    for (account, amount) in [(1, 1), (2, 2), (1, 3), (3, 4), (1, 5), (2, 6), (1, 7)] {
        svc.pay(account, Money::new(amount), "auto").unwrap();
    }
    svc.export(dir).await.unwrap();
    svc
}
