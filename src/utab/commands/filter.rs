use crate::model::User;

/// Returns the subset of `records` matching `query`, preserving input order.
///
/// A record matches when the query is a case-insensitive substring of its
/// stringified id, name, username or email. The empty query matches every
/// record.
pub fn run(records: &[User], query: &str) -> Vec<User> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|u| {
            u.id.to_string().contains(&needle)
                || u.name.to_lowercase().contains(&needle)
                || u.username.to_lowercase().contains(&needle)
                || u.email.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
