//! Set of service ids this profile has already rated
//!
//! Serialized as comma-joined decimal ids (`"1,4,9"`) only at the cookie boundary.
//! Insertion order is kept so the stored value reads naturally.

use super::cookie_store::CookieStore;
use crate::constants::{RATED_SERVICES_COOKIE, RATED_SERVICES_TTL_DAYS};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatedSet {
    ids: Vec<u64>,
}

impl RatedSet {
    /// Parse a cookie value; blank or malformed tokens are skipped
    pub fn parse(value: &str) -> Self {
        let mut set = Self::default();
        for token in value.split(',') {
            match token.trim().parse::<u64>() {
                Ok(id) => {
                    set.insert(id);
                }
                Err(_) if token.trim().is_empty() => {}
                Err(_) => log::debug!("[Rating] Ignoring malformed rated id '{}'", token),
            }
        }
        set
    }

    /// Read the set from the cookie store; absent means empty
    pub fn load(cookies: &dyn CookieStore) -> Self {
        cookies
            .get_value(RATED_SERVICES_COOKIE)
            .map(|value| Self::parse(&value))
            .unwrap_or_default()
    }

    /// Write the set back, refreshing the expiry
    pub fn store(&self, cookies: &mut dyn CookieStore) {
        cookies.set_value(
            RATED_SERVICES_COOKIE,
            &self.to_cookie_value(),
            RATED_SERVICES_TTL_DAYS,
        );
    }

    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    /// Returns false if the id was already present
    pub fn insert(&mut self, id: u64) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn to_cookie_value(&self) -> String {
        self.ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::cookie_store::MemoryCookieStore;

    #[test]
    fn test_parse_skips_garbage_and_duplicates() {
        let set = RatedSet::parse("3, 7,,abc,3,12");
        assert_eq!(set.to_cookie_value(), "3,7,12");
        assert_eq!(set.len(), 3);
        assert!(set.contains(7));
        assert!(!set.contains(1));
    }

    #[test]
    fn test_insert_deduplicates() {
        let mut set = RatedSet::default();
        assert!(set.insert(2));
        assert!(!set.insert(2));
        assert_eq!(set.to_cookie_value(), "2");
    }

    #[test]
    fn test_id_match_is_token_exact() {
        // "1" must not match inside "12"
        let set = RatedSet::parse("12,21");
        assert!(!set.contains(1));
        assert!(!set.contains(2));
    }

    #[test]
    fn test_load_and_store_through_cookies() {
        let mut cookies = MemoryCookieStore::new();
        assert_eq!(RatedSet::load(&cookies), RatedSet::default());

        let mut set = RatedSet::default();
        set.insert(4);
        set.insert(9);
        set.store(&mut cookies);

        assert_eq!(
            cookies.get_value(RATED_SERVICES_COOKIE),
            Some("4,9".to_string())
        );
        assert_eq!(RatedSet::load(&cookies), set);
    }

    #[test]
    fn test_malformed_cookie_is_empty_set() {
        let mut cookies = MemoryCookieStore::new();
        cookies.set_value(RATED_SERVICES_COOKIE, "not-a-number", 30);
        assert_eq!(RatedSet::load(&cookies).len(), 0);
    }
}
