//! Order models for the standalone order analysis
//!
//! Orders use Russian field names on the wire (`сумма`, `статус`,
//! `категория`). Status and category are free text; only the three known
//! values of each are bucketed.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::money::Money;

/// Known order statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Paid,
    Pending,
    Cancelled,
}

impl OrderStatus {
    /// Get all statuses in report order
    pub fn all() -> &'static [Self] {
        &[Self::Paid, Self::Pending, Self::Cancelled]
    }

    /// Wire name of the status
    pub fn name(&self) -> &'static str {
        match self {
            Self::Paid => "оплачен",
            Self::Pending => "ожидающий",
            Self::Cancelled => "отменён",
        }
    }

    /// Match free text against the known statuses
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|status| status.name() == s)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Known order categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderCategory {
    Electronics,
    Books,
    Clothing,
}

impl OrderCategory {
    /// Get all categories in report order
    pub fn all() -> &'static [Self] {
        &[Self::Electronics, Self::Books, Self::Clothing]
    }

    /// Wire name of the category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Electronics => "электроника",
            Self::Books => "книги",
            Self::Clothing => "одежда",
        }
    }

    /// Match free text against the known categories
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|category| category.name() == s)
    }
}

impl fmt::Display for OrderCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "сумма", default)]
    pub amount: Money,
    #[serde(
        rename = "статус",
        default,
        deserialize_with = "text_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,
    #[serde(
        rename = "категория",
        default,
        deserialize_with = "text_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,
}

/// Keep string values; anything else (numbers, null, objects) is unrecognized
fn text_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Ok(Some(text)),
        _ => Ok(None),
    }
}

impl Order {
    /// Create an order from its raw parts
    pub fn new(amount: Money, status: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            amount,
            status: Some(status.into()),
            category: Some(category.into()),
        }
    }

    /// The status, if it is one of the known ones
    pub fn known_status(&self) -> Option<OrderStatus> {
        self.status.as_deref().and_then(OrderStatus::parse)
    }

    /// The category, if it is one of the known ones
    pub fn known_category(&self) -> Option<OrderCategory> {
        self.category.as_deref().and_then(OrderCategory::parse)
    }
}

/// Totals over a list of orders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderSummary {
    #[serde(rename = "всего")]
    pub total: Money,
    #[serde(rename = "оплачен")]
    pub paid: Money,
    #[serde(rename = "ожидающий")]
    pub pending: Money,
    #[serde(rename = "отменён")]
    pub cancelled: Money,
    #[serde(rename = "электроника")]
    pub electronics: Money,
    #[serde(rename = "книги")]
    pub books: Money,
    #[serde(rename = "одежда")]
    pub clothing: Money,
}

impl OrderSummary {
    /// Total for one status bucket
    pub fn by_status(&self, status: OrderStatus) -> Money {
        match status {
            OrderStatus::Paid => self.paid,
            OrderStatus::Pending => self.pending,
            OrderStatus::Cancelled => self.cancelled,
        }
    }

    /// Total for one category bucket
    pub fn by_category(&self, category: OrderCategory) -> Money {
        match category {
            OrderCategory::Electronics => self.electronics,
            OrderCategory::Books => self.books,
            OrderCategory::Clothing => self.clothing,
        }
    }

    pub(crate) fn status_bucket_mut(&mut self, status: OrderStatus) -> &mut Money {
        match status {
            OrderStatus::Paid => &mut self.paid,
            OrderStatus::Pending => &mut self.pending,
            OrderStatus::Cancelled => &mut self.cancelled,
        }
    }

    pub(crate) fn category_bucket_mut(&mut self, category: OrderCategory) -> &mut Money {
        match category {
            OrderCategory::Electronics => &mut self.electronics,
            OrderCategory::Books => &mut self.books,
            OrderCategory::Clothing => &mut self.clothing,
        }
    }
}
