//! Allocation of total income into per-category limits

use crate::models::{AllocationMap, Money};

/// Limit for every category in the allocation map, in map order
///
/// Each limit is `total_income * fraction` rounded to the cent.
pub fn allocate(total_income: Money, allocation: &AllocationMap) -> Vec<(String, Money)> {
    allocation
        .iter()
        .map(|(category, fraction)| (category.to_string(), total_income.scale(fraction)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_split_of_2000() {
        let limits = allocate(Money::from_units(2000), &AllocationMap::default_split());

        assert_eq!(limits.len(), 6);
        assert_eq!(limits[0], ("housing".to_string(), Money::from_units(700)));
        assert_eq!(limits[1], ("food".to_string(), Money::from_units(500)));
        assert_eq!(limits[5], ("misc".to_string(), Money::from_units(200)));
    }

    #[test]
    fn test_zero_income_gives_zero_limits() {
        let allocation: AllocationMap = [("a", 0.7), ("b", 1.5), ("c", 0.0)].into_iter().collect();

        let limits = allocate(Money::zero(), &allocation);
        assert_eq!(limits.len(), 3);
        assert!(limits.iter().all(|(_, limit)| limit.is_zero()));
    }

    #[test]
    fn test_limits_rounded_to_cents() {
        let allocation: AllocationMap = [("third", 1.0 / 3.0)].into_iter().collect();

        let limits = allocate(Money::from_units(100), &allocation);
        assert_eq!(limits[0].1.cents(), 3333);
    }

    #[test]
    fn test_follows_allocation_order() {
        let allocation: AllocationMap = [("savings", 0.5), ("food", 0.5)].into_iter().collect();

        let keys: Vec<_> = allocate(Money::from_units(10), &allocation)
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["savings", "food"]);
    }
}
