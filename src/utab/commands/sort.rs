use crate::model::User;
use crate::state::SortDirection;
use icu_collator::{Collator, CollatorOptions, Strength};
use std::cmp::Ordering;

/// Returns a new list ordered by the resolved value of `key`.
///
/// Keys are dotted field paths; a missing segment resolves to the empty
/// string. Comparison is case-insensitive Unicode collation (root locale,
/// secondary strength), so accented characters order next to their base
/// letters rather than after the ASCII range. The sort is stable: records
/// with equal keys keep their original relative order. No key returns the
/// input order unchanged.
pub fn run(records: &[User], key: Option<&str>, direction: SortDirection) -> Vec<User> {
    let Some(path) = key else {
        return records.to_vec();
    };

    let collator = collator();
    let mut keyed: Vec<(String, User)> = records
        .iter()
        .map(|u| (u.field(path), u.clone()))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let ordering = compare(collator.as_ref(), a, b);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    keyed.into_iter().map(|(_, u)| u).collect()
}

fn collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    // Secondary strength: accents distinguish, case does not
    options.strength = Some(Strength::Secondary);
    Collator::try_new(&Default::default(), options).ok()
}

fn compare(collator: Option<&Collator>, a: &str, b: &str) -> Ordering {
    match collator {
        Some(collator) => collator.compare(a, b),
        // Collation data unavailable; degrade to lowercased code-point order
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_user(id: u64, name: &str, city: &str) -> User {
        let mut user = User {
            id,
            name: name.into(),
            ..User::default()
        };
        user.address.city = city.into();
        user
    }

    fn names(users: &[User]) -> Vec<String> {
        users.iter().map(|u| u.name.clone()).collect()
    }

    #[test]
    fn sorts_case_insensitively() {
        let records = vec![make_user(3, "Bob", ""), make_user(1, "amy", "")];

        let asc = run(&records, Some("name"), SortDirection::Ascending);
        assert_eq!(names(&asc), vec!["amy", "Bob"]);

        let desc = run(&records, Some("name"), SortDirection::Descending);
        assert_eq!(names(&desc), vec!["Bob", "amy"]);
    }

    #[test]
    fn accented_names_collate_next_to_their_base_letters() {
        let records = vec![make_user(1, "Zebra", ""), make_user(2, "Éclair", "")];
        let asc = run(&records, Some("name"), SortDirection::Ascending);
        // Code-point order would put "Éclair" after the whole ASCII range
        assert_eq!(names(&asc), vec!["Éclair", "Zebra"]);

        let records = vec![
            make_user(1, "Zoe", ""),
            make_user(2, "émile", ""),
            make_user(3, "Adam", ""),
        ];
        let asc = run(&records, Some("name"), SortDirection::Ascending);
        assert_eq!(names(&asc), vec!["Adam", "émile", "Zoe"]);
    }

    #[test]
    fn no_key_preserves_input_order() {
        let records = vec![make_user(2, "Zoe", ""), make_user(1, "Amy", "")];
        let result = run(&records, None, SortDirection::Ascending);
        assert_eq!(result, records);
    }

    #[test]
    fn sorts_by_nested_field_path() {
        let records = vec![
            make_user(1, "Amy", "Zurich"),
            make_user(2, "Bob", "Berlin"),
            make_user(3, "Cid", "Madrid"),
        ];
        let result = run(&records, Some("address.city"), SortDirection::Ascending);
        assert_eq!(names(&result), vec!["Bob", "Cid", "Amy"]);
    }

    #[test]
    fn missing_field_sorts_as_empty_string() {
        let records = vec![make_user(1, "Amy", "Berlin"), make_user(2, "Bob", "")];
        let result = run(&records, Some("address.city"), SortDirection::Ascending);
        // Empty city sorts before any non-empty value
        assert_eq!(names(&result), vec!["Bob", "Amy"]);
    }

    #[test]
    fn equal_keys_retain_original_relative_order() {
        let records = vec![
            make_user(1, "Amy", "Berlin"),
            make_user(2, "Bob", "Berlin"),
            make_user(3, "Cid", "Athens"),
        ];
        let asc = run(&records, Some("address.city"), SortDirection::Ascending);
        assert_eq!(names(&asc), vec!["Cid", "Amy", "Bob"]);

        // Stability holds under the flipped direction too
        let desc = run(&records, Some("address.city"), SortDirection::Descending);
        assert_eq!(names(&desc), vec!["Amy", "Bob", "Cid"]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let records = vec![
            make_user(2, "Bob", ""),
            make_user(1, "amy", ""),
            make_user(3, "Cid", ""),
        ];
        let once = run(&records, Some("name"), SortDirection::Ascending);
        let twice = run(&once, Some("name"), SortDirection::Ascending);
        assert_eq!(once, twice);
    }

    #[test]
    fn flipping_direction_reverses_distinct_keys() {
        let records = vec![
            make_user(1, "amy", ""),
            make_user(2, "Bob", ""),
            make_user(3, "cid", ""),
        ];
        let asc = run(&records, Some("name"), SortDirection::Ascending);
        let desc = run(&asc, Some("name"), SortDirection::Descending);
        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn input_is_not_mutated() {
        let records = vec![make_user(2, "Zoe", ""), make_user(1, "Amy", "")];
        let snapshot = records.clone();
        let _ = run(&records, Some("name"), SortDirection::Ascending);
        assert_eq!(records, snapshot);
    }
}
