use super::account::{AccountId, Money};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type PaymentCategory = String;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
pub enum PaymentStatus {
    #[default]
    #[serde(rename = "INPROGRESS")]
    InProgress,
    #[serde(rename = "FAIL")]
    Fail,
}

/// A payment debited from an account.
///
/// Field order matches the flat record layout
/// `id;account_id;amount;category;status`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Payment {
    pub id: String,
    pub account_id: AccountId,
    pub amount: Money,
    pub category: PaymentCategory,
    pub status: PaymentStatus,
}

impl Payment {
    /// Creates an in-progress payment with a fresh identifier.
    pub fn new(account_id: AccountId, amount: Money, category: PaymentCategory) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            account_id,
            amount,
            category,
            status: PaymentStatus::InProgress,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.status == PaymentStatus::Fail
    }
}

/// A named payment template.
///
/// Field order matches the flat record layout
/// `id;account_id;name;amount;category`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Favorite {
    pub id: String,
    pub account_id: AccountId,
    pub name: String,
    pub amount: Money,
    pub category: PaymentCategory,
}

impl Favorite {
    pub fn from_payment(payment: &Payment, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            account_id: payment.account_id,
            name: name.into(),
            amount: payment.amount,
            category: payment.category.clone(),
        }
    }
}
