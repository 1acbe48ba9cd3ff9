use std::cmp::Ordering;

use crate::api::medals_api::MedalEntry;

/// Orders by `total` then `gold`, both descending. Exact ties keep their input order.
pub fn rank(mut entries: Vec<MedalEntry>) -> Vec<MedalEntry> {
    entries.sort_by(compare_entries);
    entries
}

fn compare_entries(a: &MedalEntry, b: &MedalEntry) -> Ordering {
    b.total.cmp(&a.total).then_with(|| b.gold.cmp(&a.gold))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(country: &str, gold: u32, silver: u32, bronze: u32, total: u32) -> MedalEntry {
        MedalEntry {
            country: country.to_string(),
            gold,
            silver,
            bronze,
            total,
        }
    }

    fn countries(entries: &[MedalEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.country.as_str()).collect()
    }

    #[test]
    fn test_gold_breaks_total_tie() {
        let ranked = rank(vec![entry("A", 1, 0, 0, 1), entry("B", 2, 0, 0, 1)]);
        assert_eq!(countries(&ranked), vec!["B", "A"]);
    }

    #[test]
    fn test_total_takes_precedence_over_gold() {
        let ranked = rank(vec![
            entry("Gold Heavy", 6, 0, 0, 6),
            entry("Broad", 2, 5, 5, 12),
            entry("Middle", 4, 2, 2, 8),
        ]);
        assert_eq!(countries(&ranked), vec!["Broad", "Middle", "Gold Heavy"]);
    }

    #[test]
    fn test_exact_ties_keep_input_order() {
        let ranked = rank(vec![
            entry("First", 3, 1, 1, 5),
            entry("Leader", 9, 0, 0, 9),
            entry("Second", 3, 2, 0, 5),
            entry("Third", 3, 0, 2, 5),
        ]);
        assert_eq!(countries(&ranked), vec!["Leader", "First", "Second", "Third"]);
    }

    #[test]
    fn test_output_is_sorted() {
        let ranked = rank(vec![
            entry("C", 0, 1, 1, 2),
            entry("D", 3, 3, 3, 9),
            entry("E", 1, 1, 0, 2),
            entry("F", 0, 0, 0, 0),
            entry("G", 5, 2, 2, 9),
        ]);

        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.total > b.total || (a.total == b.total && a.gold >= b.gold));
        }
    }

    #[test]
    fn test_rank_is_idempotent() {
        let once = rank(vec![
            entry("C", 0, 1, 1, 2),
            entry("D", 3, 3, 3, 9),
            entry("E", 1, 1, 0, 2),
            entry("G", 5, 2, 2, 9),
        ]);
        let twice = rank(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty() {
        assert!(rank(Vec::new()).is_empty());
    }
}
