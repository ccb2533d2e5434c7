//! Derived spending aggregates over the list collection.
//!
//! Implements the read-only views the store exposes on top of the canonical
//! collection: the most recently touched list, calendar-month spend totals,
//! trailing-month history buckets, and purchase frequency by item name. All
//! functions are pure over a list slice; the ones that depend on "now" take
//! it as a parameter so they stay deterministic under test, with thin
//! clock-reading wrappers on the store itself.
//!
//! Month membership is decided by the *list's* creation date: every item of a
//! list created in August counts toward August, even if the item itself was
//! added later.

use crate::domain::ShoppingList;
use chrono::{DateTime, Datelike, Utc};
use std::collections::HashMap;

/// Estimated and realized spend for one calendar month.
///
/// `estimated` sums `estimated_price * quantity` over every item in lists
/// created that month; `actual` sums `(actual_price ?? estimated_price) *
/// quantity` over the purchased subset of those items.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MonthTotal {
    pub estimated: f64,
    pub actual: f64,
}

/// One history bucket of the trailing-months view.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyStats {
    pub year: i32,

    /// 1-based calendar month.
    pub month: u32,
    pub estimated: f64,
    pub actual: f64,

    /// Total number of items across the month's lists.
    pub item_count: usize,

    /// Number of lists created in the month.
    pub list_count: usize,
}

/// How often an item name was purchased, across all lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFrequency {
    pub name: String,
    pub count: usize,
}

/// Returns the list with the greatest `updated_at`, or `None` when empty.
///
/// On exact-timestamp ties the later element wins; any consistent order is
/// acceptable since exact ties carry no meaning here.
pub(crate) fn last_list(lists: &[ShoppingList]) -> Option<&ShoppingList> {
    lists.iter().max_by_key(|list| list.updated_at)
}

/// Spend totals over lists created in the given calendar month.
pub(crate) fn month_total(lists: &[ShoppingList], year: i32, month: u32) -> MonthTotal {
    let mut total = MonthTotal::default();

    for list in lists_in_month(lists, year, month) {
        for item in &list.items {
            total.estimated += item.estimated_cost();
            if let Some(cost) = item.actual_cost() {
                total.actual += cost;
            }
        }
    }

    total
}

/// History buckets for the trailing `months` calendar months, oldest first.
///
/// The bucket for `now`'s month is always last. `months` is clamped to at
/// least one.
pub(crate) fn monthly_stats(
    lists: &[ShoppingList],
    now: DateTime<Utc>,
    months: u32,
) -> Vec<MonthlyStats> {
    let mut buckets = Vec::with_capacity(months.max(1) as usize);
    let mut year = now.year();
    let mut month = now.month();

    for _ in 0..months.max(1) {
        let total = month_total(lists, year, month);
        let month_lists: Vec<&ShoppingList> = lists_in_month(lists, year, month).collect();

        buckets.push(MonthlyStats {
            year,
            month,
            estimated: total.estimated,
            actual: total.actual,
            item_count: month_lists.iter().map(|list| list.items.len()).sum(),
            list_count: month_lists.len(),
        });

        if month == 1 {
            year -= 1;
            month = 12;
        } else {
            month -= 1;
        }
    }

    buckets.reverse();
    buckets
}

/// Purchase counts by item name, most frequent first, capped at `limit`.
///
/// Each purchased item contributes one count to its name; unpurchased items
/// are ignored. Equal counts order alphabetically so the ranking is stable.
pub(crate) fn most_bought(lists: &[ShoppingList], limit: usize) -> Vec<ItemFrequency> {
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for item in lists.iter().flat_map(|list| &list.items) {
        if item.is_purchased {
            *counts.entry(item.name.as_str()).or_default() += 1;
        }
    }

    let mut frequencies: Vec<ItemFrequency> = counts
        .into_iter()
        .map(|(name, count)| ItemFrequency {
            name: name.to_string(),
            count,
        })
        .collect();

    frequencies.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    frequencies.truncate(limit);
    frequencies
}

fn lists_in_month(
    lists: &[ShoppingList],
    year: i32,
    month: u32,
) -> impl Iterator<Item = &ShoppingList> {
    lists
        .iter()
        .filter(move |list| list.created_at.year() == year && list.created_at.month() == month)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ItemDraft, ItemUpdate, Unit};
    use chrono::TimeZone;

    fn draft(name: &str, quantity: f64, price: f64) -> ItemDraft {
        ItemDraft {
            name: name.to_string(),
            quantity,
            unit: Unit::Unit,
            estimated_price: price,
            is_priority: false,
        }
    }

    fn list_created_at(name: &str, year: i32, month: u32, drafts: &[ItemDraft]) -> ShoppingList {
        let mut list = ShoppingList::new(name, drafts);
        let stamp = Utc.with_ymd_and_hms(year, month, 15, 10, 0, 0).unwrap();
        list.created_at = stamp;
        list.updated_at = stamp;
        list
    }

    #[test]
    fn last_list_picks_greatest_updated_at() {
        let mut older = list_created_at("older", 2026, 7, &[]);
        older.updated_at = Utc.with_ymd_and_hms(2026, 7, 1, 0, 0, 0).unwrap();
        let mut newer = list_created_at("newer", 2026, 6, &[]);
        newer.updated_at = Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap();

        let lists = vec![older, newer];
        assert_eq!(last_list(&lists).map(|l| l.name.as_str()), Some("newer"));
        assert!(last_list(&[]).is_none());
    }

    #[test]
    fn month_total_only_counts_lists_created_that_month() {
        let in_month = list_created_at("in", 2026, 8, &[draft("a", 1.0, 10.0), draft("b", 1.0, 20.0)]);
        let out_of_month = list_created_at("out", 2026, 7, &[draft("c", 1.0, 100.0)]);

        let total = month_total(&[in_month, out_of_month], 2026, 8);
        assert_eq!(total.estimated, 30.0);
        assert_eq!(total.actual, 0.0);
    }

    #[test]
    fn month_total_actual_covers_purchased_subset() {
        let mut list = list_created_at("in", 2026, 8, &[draft("a", 1.0, 10.0), draft("b", 1.0, 20.0)]);
        list.items[0].apply(&ItemUpdate::purchased(true));

        let total = month_total(std::slice::from_ref(&list), 2026, 8);
        assert_eq!(total.estimated, 30.0);
        assert_eq!(total.actual, 10.0);
    }

    #[test]
    fn monthly_stats_buckets_trailing_months_oldest_first() {
        let now = Utc.with_ymd_and_hms(2026, 2, 10, 12, 0, 0).unwrap();
        let january = list_created_at("jan", 2026, 1, &[draft("a", 1.0, 5.0)]);
        let december = list_created_at("dec", 2025, 12, &[draft("b", 2.0, 3.0)]);

        let buckets = monthly_stats(&[january, december], now, 3);
        assert_eq!(buckets.len(), 3);
        assert_eq!((buckets[0].year, buckets[0].month), (2025, 12));
        assert_eq!((buckets[1].year, buckets[1].month), (2026, 1));
        assert_eq!((buckets[2].year, buckets[2].month), (2026, 2));

        assert_eq!(buckets[0].estimated, 6.0);
        assert_eq!(buckets[0].list_count, 1);
        assert_eq!(buckets[1].item_count, 1);
        assert_eq!(buckets[2].list_count, 0);
    }

    #[test]
    fn most_bought_counts_purchases_and_breaks_ties_by_name() {
        let mut a = list_created_at("a", 2026, 8, &[draft("Milk", 1.0, 4.5), draft("Eggs", 1.0, 12.0)]);
        let mut b = list_created_at("b", 2026, 7, &[draft("Milk", 1.0, 4.5), draft("Bread", 1.0, 8.0)]);
        for item in a.items.iter_mut().chain(b.items.iter_mut()) {
            item.apply(&ItemUpdate::purchased(true));
        }

        let top = most_bought(&[a, b], 2);
        assert_eq!(
            top,
            vec![
                ItemFrequency { name: "Milk".to_string(), count: 2 },
                ItemFrequency { name: "Bread".to_string(), count: 1 },
            ]
        );
    }
}
