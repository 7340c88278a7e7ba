use crate::ContactRecord;

/// Case-insensitive substring match against the name fields.
/// A blank query matches everything.
pub fn matches_query(record: &ContactRecord, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    needle.is_empty()
        || record.first.to_lowercase().contains(&needle)
        || record.last.to_lowercase().contains(&needle)
}

/// Orders by last name, then creation time, then id.
pub fn sort_contacts(records: &mut [ContactRecord]) {
    records.sort_by(|a, b| {
        a.last
            .cmp(&b.last)
            .then_with(|| a.created_at.cmp(&b.created_at))
            .then_with(|| a.id.cmp(&b.id))
    });
}
