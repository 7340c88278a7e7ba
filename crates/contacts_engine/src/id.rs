use uuid::Uuid;

const ID_LEN: usize = 8;

/// Short random id (lowercase hex), regenerated while `taken` reports a clash.
pub fn new_contact_id(taken: impl Fn(&str) -> bool) -> String {
    loop {
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(ID_LEN);
        if !taken(&id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_short_hex() {
        let id = new_contact_id(|_| false);
        assert_eq!(id.len(), ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn clashing_ids_are_retried() {
        let first = new_contact_id(|_| false);
        let second = new_contact_id(|candidate| candidate == first);
        assert_ne!(first, second);
    }
}
