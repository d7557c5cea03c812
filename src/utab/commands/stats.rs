use crate::model::User;

/// Grouped counts plus the total, computed over the rendered subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub by_city: Vec<(String, usize)>,
    pub by_company: Vec<(String, usize)>,
}

/// Counts records grouped by the extracted string.
///
/// Groups appear in order of first occurrence, never re-sorted. The empty
/// string is a valid group, representing "unknown".
pub fn count_by<F>(records: &[User], extract: F) -> Vec<(String, usize)>
where
    F: Fn(&User) -> String,
{
    let mut groups: Vec<(String, usize)> = Vec::new();
    for record in records {
        let group = extract(record);
        match groups.iter_mut().find(|(name, _)| *name == group) {
            Some((_, count)) => *count += 1,
            None => groups.push((group, 1)),
        }
    }
    groups
}

pub fn run(records: &[User]) -> Summary {
    Summary {
        total: records.len(),
        by_city: count_by(records, |u| u.address.city.clone()),
        by_company: count_by(records, |u| u.company.name.clone()),
    }
}
