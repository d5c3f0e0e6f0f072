//! Budget evaluation
//!
//! Combines the allocation limits with actual spending into a per-category
//! state, and derives usage warnings from that state. Everything here is
//! recomputed from the document on demand; nothing is cached or persisted.

use std::fmt;

use serde::Serialize;

use crate::config::settings::DEFAULT_WARNING_THRESHOLD;
use crate::models::{BudgetDocument, Money};

use super::allocation::allocate;
use super::spending::spent_by_category;

/// Limit, spending and remaining balance of one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryState {
    pub category: String,
    pub limit: Money,
    pub spent: Money,
    /// `limit - spent`; negative when overspent
    pub left: Money,
}

impl CategoryState {
    /// Check if more was spent than allowed
    pub fn is_overspent(&self) -> bool {
        self.left.is_negative()
    }

    /// spent / limit, or `None` unless the limit is positive
    pub fn usage_ratio(&self) -> Option<f64> {
        if !self.limit.is_positive() {
            None
        } else {
            Some(self.spent.cents() as f64 / self.limit.cents() as f64)
        }
    }

    /// Whole percent of the limit used, rounded down; `None` unless the limit is positive
    pub fn usage_percent(&self) -> Option<i64> {
        if !self.limit.is_positive() {
            return None;
        }
        let percent =
            (i128::from(self.spent.cents()) * 100).div_euclid(i128::from(self.limit.cents()));
        Some(i64::try_from(percent).unwrap_or(i64::MAX))
    }
}

/// Derived budget state for a whole document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetState {
    pub total_income: Money,
    /// One entry per allocated category, in allocation order
    pub categories: Vec<CategoryState>,
}

impl BudgetState {
    /// Look up the state of one category
    pub fn get(&self, category: &str) -> Option<&CategoryState> {
        self.categories.iter().find(|c| c.category == category)
    }
}

/// Compute the budget state of a document
pub fn evaluate(doc: &BudgetDocument) -> BudgetState {
    let total_income = doc.total_income();
    let spending = spent_by_category(&doc.expenses);

    let categories = allocate(total_income, &doc.allocation)
        .into_iter()
        .map(|(category, limit)| {
            let spent = spending.get(&category).copied().unwrap_or_default();
            CategoryState {
                left: limit - spent,
                category,
                limit,
                spent,
            }
        })
        .collect();

    BudgetState {
        total_income,
        categories,
    }
}

/// What a warning is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WarningKind {
    /// Spending reached or passed the limit
    LimitExhausted,
    /// Spending passed the warning threshold but not the limit
    HighUsage { percent: i64 },
}

/// A usage warning for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetWarning {
    pub category: String,
    #[serde(flatten)]
    pub kind: WarningKind,
}

impl BudgetWarning {
    /// Human-readable warning text
    pub fn message(&self) -> String {
        match self.kind {
            WarningKind::LimitExhausted => {
                format!("limit exhausted for '{}'", self.category)
            }
            WarningKind::HighUsage { percent } => {
                format!("high usage in '{}', {}% used", self.category, percent)
            }
        }
    }
}

impl fmt::Display for BudgetWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Warnings at the default 85% threshold
pub fn warnings(state: &BudgetState) -> Vec<BudgetWarning> {
    warnings_with_threshold(state, DEFAULT_WARNING_THRESHOLD)
}

/// Warnings for every category at or above `threshold` of its limit
///
/// Categories whose limit is zero or negative never warn.
pub fn warnings_with_threshold(state: &BudgetState, threshold: f64) -> Vec<BudgetWarning> {
    state
        .categories
        .iter()
        .filter_map(|cat| {
            let ratio = cat.usage_ratio()?;
            let kind = if ratio >= 1.0 {
                WarningKind::LimitExhausted
            } else if ratio >= threshold {
                WarningKind::HighUsage {
                    percent: cat.usage_percent()?,
                }
            } else {
                return None;
            };

            Some(BudgetWarning {
                category: cat.category.clone(),
                kind,
            })
        })
        .collect()
}
