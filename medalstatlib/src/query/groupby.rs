//! Group-by helpers shared by the reports.
//!
//! Groups are returned in order of first appearance in the table. Sorting
//! helpers use stable sorts, so equal values keep that emergence order.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::data::Record;

/// Fold records into one accumulator per key, keyed in emergence order.
pub(crate) fn group_by<'a, K, A, I, FK, FA>(records: I, key: FK, mut fold: FA) -> Vec<(K, A)>
where
    I: IntoIterator<Item = &'a Record>,
    K: Eq + Hash + Clone,
    A: Default,
    FK: Fn(&Record) -> K,
    FA: FnMut(&mut A, &Record),
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, A)> = Vec::new();

    for record in records {
        let k = key(record);
        let slot = match index.get(&k) {
            Some(&i) => i,
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, A::default()));
                groups.len() - 1
            }
        };
        fold(&mut groups[slot].1, record);
    }

    groups
}

/// Sum a per-record value for each key.
pub(crate) fn sum_by<'a, K, I, FK, FV>(records: I, key: FK, value: FV) -> Vec<(K, u64)>
where
    I: IntoIterator<Item = &'a Record>,
    K: Eq + Hash + Clone,
    FK: Fn(&Record) -> K,
    FV: Fn(&Record) -> u32,
{
    group_by(records, key, |acc: &mut u64, r| *acc += u64::from(value(r)))
}

/// Count distinct values of a per-record attribute for each key.
pub(crate) fn distinct_count_by<'a, K, V, I, FK, FV>(
    records: I,
    key: FK,
    value: FV,
) -> Vec<(K, usize)>
where
    I: IntoIterator<Item = &'a Record>,
    K: Eq + Hash + Clone,
    V: Eq + Hash,
    FK: Fn(&Record) -> K,
    FV: Fn(&Record) -> V,
{
    group_by(records, key, |acc: &mut HashSet<V>, r| {
        acc.insert(value(r));
    })
    .into_iter()
    .map(|(k, set)| (k, set.len()))
    .collect()
}

/// Stable sort by value, largest first.
pub(crate) fn sort_desc<K, V: Ord>(items: &mut [(K, V)]) {
    items.sort_by(|a, b| b.1.cmp(&a.1));
}

/// Drop repeated items, keeping the first occurrence in order.
pub(crate) fn dedup_ordered<T: Eq + Hash + Clone>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(athlete: &str, country: &str, year: i32, total: u32) -> Record {
        Record::new(athlete, Some(25), country, year, "-", "Rowing", 0, 0, total, total)
    }

    #[test]
    fn test_sum_by_keeps_emergence_order() {
        let records = vec![
            rec("a", "NOR", 2000, 1),
            rec("b", "USA", 2000, 2),
            rec("c", "NOR", 2004, 3),
        ];
        let sums = sum_by(&records, |r| r.country.clone(), |r| r.total);
        assert_eq!(
            sums,
            vec![("NOR".to_string(), 4), ("USA".to_string(), 2)]
        );
    }

    #[test]
    fn test_sort_desc_is_stable() {
        let mut items = vec![("x", 1), ("y", 3), ("z", 1), ("w", 3)];
        sort_desc(&mut items);
        assert_eq!(items, vec![("y", 3), ("w", 3), ("x", 1), ("z", 1)]);
    }

    #[test]
    fn test_distinct_count_by() {
        let records = vec![
            rec("a", "NOR", 2000, 1),
            rec("a", "NOR", 2000, 1),
            rec("a", "NOR", 2004, 1),
            rec("b", "USA", 2000, 1),
        ];
        let counts = distinct_count_by(&records, |r| r.athlete.clone(), |r| r.year);
        assert_eq!(counts, vec![("a".to_string(), 2), ("b".to_string(), 1)]);
    }

    #[test]
    fn test_dedup_ordered() {
        assert_eq!(dedup_ordered(vec![3, 1, 3, 2, 1]), vec![3, 1, 2]);
    }
}
