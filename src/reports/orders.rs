//! Order Report
//!
//! Sums order amounts into a grand total plus per-status and per-category
//! buckets. Unknown statuses and categories still count toward the total.

use std::io::Read;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, Order, OrderSummary};

/// Aggregate a list of orders
pub fn analyze_orders(orders: &[Order]) -> OrderSummary {
    let mut summary = OrderSummary::default();

    for order in orders {
        summary.total += order.amount;

        if let Some(status) = order.known_status() {
            *summary.status_bucket_mut(status) += order.amount;
        }
        if let Some(category) = order.known_category() {
            *summary.category_bucket_mut(category) += order.amount;
        }
    }

    summary
}

/// Read a JSON array of orders
pub fn read_orders<R: Read>(reader: R) -> TrackerResult<Vec<Order>> {
    serde_json::from_reader(reader)
        .map_err(|e| TrackerError::Json(format!("Failed to parse orders: {}", e)))
}

/// The built-in sample used by `budget orders --sample`
pub fn sample_orders() -> Vec<Order> {
    vec![
        Order::new(Money::from_units(120), "оплачен", "электроника"),
        Order::new(Money::from_units(50), "ожидающий", "книги"),
        Order::new(Money::from_units(200), "оплачен", "одежда"),
        Order::new(Money::from_units(80), "отменён", "электроника"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OrderCategory, OrderStatus};

    #[test]
    fn test_two_order_example() {
        let orders = read_orders(
            r#"[
                {"сумма": 120, "статус": "оплачен", "категория": "электроника"},
                {"сумма": 50, "статус": "ожидающий", "категория": "книги"}
            ]"#
            .as_bytes(),
        )
        .unwrap();

        let summary = analyze_orders(&orders);
        assert_eq!(
            summary,
            OrderSummary {
                total: Money::from_units(170),
                paid: Money::from_units(120),
                pending: Money::from_units(50),
                cancelled: Money::zero(),
                electronics: Money::from_units(120),
                books: Money::from_units(50),
                clothing: Money::zero(),
            }
        );

        let json = serde_json::to_string(&summary).unwrap();
        assert_eq!(
            json,
            r#"{"всего":170,"оплачен":120,"ожидающий":50,"отменён":0,"электроника":120,"книги":50,"одежда":0}"#
        );
    }

    #[test]
    fn test_sample_orders() {
        let summary = analyze_orders(&sample_orders());

        assert_eq!(summary.total, Money::from_units(450));
        assert_eq!(summary.paid, Money::from_units(320));
        assert_eq!(summary.cancelled, Money::from_units(80));
        assert_eq!(summary.electronics, Money::from_units(200));
        assert_eq!(summary.clothing, Money::from_units(200));
    }

    #[test]
    fn test_unrecognized_values_only_count_in_total() {
        let orders = vec![
            Order::new(Money::from_units(10), "возврат", "игрушки"),
            Order::new(Money::from_cents(550), "оплачен", "мебель"),
            Order {
                amount: Money::from_units(7),
                status: None,
                category: None,
            },
        ];

        let summary = analyze_orders(&orders);
        assert_eq!(summary.total, Money::from_cents(2250));
        assert_eq!(summary.paid, Money::from_cents(550));
        let bucketed: Money = OrderStatus::all()
            .iter()
            .map(|s| summary.by_status(*s))
            .sum();
        assert_eq!(bucketed, Money::from_cents(550));
        assert!(OrderCategory::all()
            .iter()
            .all(|c| summary.by_category(*c).is_zero()));
    }

    #[test]
    fn test_total_is_sum_of_amounts() {
        let orders: Vec<Order> = (0..25)
            .map(|i| {
                let status = OrderStatus::all()[i % 3].name();
                let category = if i % 4 == 0 { "прочее" } else { "книги" };
                Order::new(Money::from_cents(i as i64 * 37), status, category)
            })
            .collect();

        let expected: Money = orders.iter().map(|o| o.amount).sum();
        let summary = analyze_orders(&orders);
        assert_eq!(summary.total, expected);

        for status in OrderStatus::all() {
            let by_hand: Money = orders
                .iter()
                .filter(|o| o.known_status() == Some(*status))
                .map(|o| o.amount)
                .sum();
            assert_eq!(summary.by_status(*status), by_hand);
        }
    }

    #[test]
    fn test_non_text_fields_still_count_in_total() {
        let orders = read_orders(
            r#"[
                {"сумма": 30, "статус": 1, "категория": ["книги"]},
                {"сумма": 20, "статус": "оплачен", "категория": "книги"}
            ]"#
            .as_bytes(),
        )
        .unwrap();

        let summary = analyze_orders(&orders);
        assert_eq!(summary.total, Money::from_units(50));
        assert_eq!(summary.paid, Money::from_units(20));
        assert_eq!(summary.books, Money::from_units(20));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(analyze_orders(&[]), OrderSummary::default());
    }

    #[test]
    fn test_malformed_orders_json() {
        let err = read_orders("{\"сумма\": 1}".as_bytes()).unwrap_err();
        assert!(matches!(err, TrackerError::Json(_)));
    }
}
