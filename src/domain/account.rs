use crate::error::WalletError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

pub type AccountId = i64;

/// A monetary value in minor currency units.
///
/// Partial sums are accumulated in 64-bit signed arithmetic, so merging the
/// partials of any partitioning yields the same total as a sequential sum.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Self = Self(0);

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Adds `rhs`, returning `None` when the result leaves the `i64` range.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Returns the amount back if it can be used for a deposit or payment.
    pub fn ensure_positive(self) -> Result<Self, WalletError> {
        if self.is_positive() {
            Ok(self)
        } else {
            Err(WalletError::AmountMustBePositive)
        }
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Phone number identifying an account. Unique among accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    pub fn new(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Phone {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Phone {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A wallet account.
///
/// The balance always equals the deposits minus the payments that were not
/// rejected. Field order matches the flat record layout `id;phone;balance`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Account {
    pub id: AccountId,
    pub phone: Phone,
    pub balance: Money,
}

impl Account {
    pub fn new(id: AccountId, phone: Phone) -> Self {
        Self {
            id,
            phone,
            balance: Money::ZERO,
        }
    }

    /// Credits the balance, leaving it untouched if it would overflow.
    pub fn deposit(&mut self, amount: Money) -> Result<(), WalletError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(WalletError::BalanceOverflow)?;
        Ok(())
    }

    /// Debits the balance if it covers the amount.
    pub fn withdraw(&mut self, amount: Money) -> Result<(), WalletError> {
        if self.balance >= amount {
            self.balance -= amount;
            Ok(())
        } else {
            Err(WalletError::NotEnoughBalance)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(10_00);
        let b = Money::new(5_00);
        assert_eq!(a + b, Money::new(15_00));
        assert_eq!(a - b, Money::new(5_00));
    }

    #[test]
    fn test_money_sum() {
        let amounts = [Money::new(1), Money::new(2), Money::new(3)];
        assert_eq!(amounts.iter().sum::<Money>(), Money::new(6));
        assert_eq!(Vec::<Money>::new().into_iter().sum::<Money>(), Money::ZERO);
    }

    #[test]
    fn test_amount_validation() {
        assert!(Money::new(1).ensure_positive().is_ok());
        assert!(matches!(
            Money::ZERO.ensure_positive(),
            Err(WalletError::AmountMustBePositive)
        ));
        assert!(matches!(
            Money::new(-1).ensure_positive(),
            Err(WalletError::AmountMustBePositive)
        ));
    }

    #[test]
    fn test_account_deposit() {
        let mut account = Account::new(1, Phone::from("+992000000001"));
        account.deposit(Money::new(10_00)).unwrap();
        assert_eq!(account.balance, Money::new(10_00));
    }

    #[test]
    fn test_account_deposit_overflow() {
        let mut account = Account::new(1, Phone::from("+992000000001"));
        account.deposit(Money::new(i64::MAX)).unwrap();

        let result = account.deposit(Money::new(1));
        assert!(matches!(result, Err(WalletError::BalanceOverflow)));
        assert_eq!(account.balance, Money::new(i64::MAX));
    }

    #[test]
    fn test_account_withdraw_success() {
        let mut account = Account::new(1, Phone::from("+992000000001"));
        account.balance = Money::new(10_00);

        assert!(account.withdraw(Money::new(10_00)).is_ok());
        assert_eq!(account.balance, Money::ZERO);
    }

    #[test]
    fn test_account_withdraw_insufficient() {
        let mut account = Account::new(1, Phone::from("+992000000001"));
        account.balance = Money::new(10_00);

        let result = account.withdraw(Money::new(20_00));
        assert!(matches!(result, Err(WalletError::NotEnoughBalance)));
        assert_eq!(account.balance, Money::new(10_00));
    }

    #[test]
    fn test_money_serializes_as_integer() {
        let json = serde_json::to_string(&Money::new(42)).unwrap();
        assert_eq!(json, "42");
    }
}
