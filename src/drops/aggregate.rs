//! Global frequency table over all records

use std::collections::HashMap;

use super::types::{DropRecord, GlobalStat};

/// Count every raw value across all records.
///
/// Intra-record duplicates count. The result lists values in the order
/// they were first encountered, which is what a stable count sort falls
/// back to for equal counts.
pub fn aggregate(drops: &[DropRecord]) -> Vec<GlobalStat> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut stats: Vec<GlobalStat> = Vec::new();

    for value in drops.iter().flat_map(|drop| drop.raw_values()) {
        match index.get(value.as_str()) {
            Some(&slot) => stats[slot].count += 1,
            None => {
                index.insert(value.as_str(), stats.len());
                stats.push(GlobalStat::new(value.as_str(), 1));
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(id: &str, values: &[&str]) -> DropRecord {
        DropRecord::seal(
            id.to_string(),
            "00:00".to_string(),
            values.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_counts_raw_values_including_intra_record_duplicates() {
        let drops = vec![
            record("1", &["192.168.1.1", "192.168.1.1", "10.0.0.5"]),
            record("2", &["8.8.8.8", "8.8.4.4"]),
        ];

        assert_eq!(
            aggregate(&drops),
            vec![
                GlobalStat::new("192.168.1.1", 2),
                GlobalStat::new("10.0.0.5", 1),
                GlobalStat::new("8.8.8.8", 1),
                GlobalStat::new("8.8.4.4", 1),
            ]
        );
    }

    #[test]
    fn test_counts_across_records() {
        let drops = vec![record("1", &["a", "b"]), record("2", &["b", "a", "a"])];
        assert_eq!(
            aggregate(&drops),
            vec![GlobalStat::new("a", 3), GlobalStat::new("b", 2)]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate(&[]).is_empty());
        assert!(aggregate(&[record("1", &[])]).is_empty());
    }

    #[test]
    fn test_first_encountered_order() {
        let drops = vec![record("1", &["z", "y"]), record("2", &["x", "y", "z"])];
        let stats = aggregate(&drops);
        let values: Vec<&str> = stats.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["z", "y", "x"]);
    }

    // Each count equals the number of raw occurrences over all records
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_count_is_sum_of_raw_occurrences(
            records in prop::collection::vec(prop::collection::vec("[a-d]", 0..8), 0..6)
        ) {
            let drops: Vec<DropRecord> = records
                .iter()
                .enumerate()
                .map(|(i, values)| DropRecord::seal(i.to_string(), "00:00".to_string(), values.clone()))
                .collect();

            let stats = aggregate(&drops);

            for stat in &stats {
                let expected: usize = drops
                    .iter()
                    .map(|d| d.raw_values().iter().filter(|v| **v == stat.value).count())
                    .sum();
                prop_assert_eq!(stat.count, expected);
                prop_assert!(stat.count >= 1);
            }

            let total: usize = drops.iter().map(|d| d.raw_values().len()).sum();
            prop_assert_eq!(stats.iter().map(|s| s.count).sum::<usize>(), total);
        }
    }
}
