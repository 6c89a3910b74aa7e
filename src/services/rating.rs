//! Rating service - one star rating per service per profile
//!
//! The rated-ids cookie is the only guard: once a service id is in it, further
//! attempts are rejected without touching the catalog.

use super::cookie_store::CookieStore;
use super::rated_set::RatedSet;
use crate::constants::MAX_STARS;
use crate::models::Service;

/// A star value, always within 1..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stars(u8);

impl Stars {
    #[cfg(test)]
    pub fn new(value: u8) -> Option<Self> {
        (1..=MAX_STARS).contains(&value).then_some(Self(value))
    }

    /// Every selectable star, lowest first
    pub fn all() -> impl Iterator<Item = Stars> {
        (1..=MAX_STARS).map(Stars)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

/// Result of a rate attempt (for UI updates)
#[derive(Debug, Clone, PartialEq)]
pub enum RateOutcome {
    Rated { average: f64, total_ratings: u32 },
    AlreadyRated,
    UnknownService,
}

pub fn has_rated(cookies: &dyn CookieStore, service_id: u64) -> bool {
    RatedSet::load(cookies).contains(service_id)
}

/// Apply a rating to `service_id` unless this profile already rated it
pub fn rate(
    catalog: &mut [Service],
    cookies: &mut dyn CookieStore,
    service_id: u64,
    stars: Stars,
) -> RateOutcome {
    if has_rated(cookies, service_id) {
        log::info!("[Rating] Service {} already rated, ignoring", service_id);
        return RateOutcome::AlreadyRated;
    }

    let Some(service) = catalog.iter_mut().find(|s| s.id == service_id) else {
        log::debug!("[Rating] Service {} not in catalog", service_id);
        return RateOutcome::UnknownService;
    };

    service.ratings.push(stars.value());
    service.total_ratings = service.total_ratings.saturating_add(1);

    let mut rated = RatedSet::load(cookies);
    rated.insert(service_id);
    rated.store(cookies);

    log::info!(
        "[Rating] Rated '{}' ({}) with {} stars ({} reviews)",
        service.name,
        service_id,
        stars.value(),
        service.total_ratings
    );

    RateOutcome::Rated {
        average: service.average_rating(),
        total_ratings: service.total_ratings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::RATED_SERVICES_COOKIE;
    use crate::services::cookie_store::MemoryCookieStore;
    use crate::services::filter::tests::service;

    fn stars(value: u8) -> Stars {
        Stars::new(value).unwrap()
    }

    #[test]
    fn test_stars_range() {
        assert!(Stars::new(0).is_none());
        assert!(Stars::new(6).is_none());
        let values: Vec<u8> = Stars::all().map(Stars::value).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_rate_appends_and_marks_rated() {
        let mut catalog = vec![service(1, "A", "", "food"), service(2, "B", "", "auto")];
        catalog[1].ratings = vec![4];
        catalog[1].total_ratings = 1;
        let mut cookies = MemoryCookieStore::new();

        assert!(!has_rated(&cookies, 2));
        let outcome = rate(&mut catalog, &mut cookies, 2, stars(5));

        assert_eq!(
            outcome,
            RateOutcome::Rated {
                average: 4.5,
                total_ratings: 2
            }
        );
        assert_eq!(catalog[1].ratings, vec![4, 5]);
        assert_eq!(catalog[1].total_ratings, 2);
        assert!(has_rated(&cookies, 2));
        assert!(!has_rated(&cookies, 1));
    }

    #[test]
    fn test_second_rate_is_rejected_without_changes() {
        let mut catalog = vec![service(1, "A", "", "food")];
        let mut cookies = MemoryCookieStore::new();

        rate(&mut catalog, &mut cookies, 1, stars(3));
        let snapshot = catalog.clone();

        for _ in 0..2 {
            let outcome = rate(&mut catalog, &mut cookies, 1, stars(5));
            assert_eq!(outcome, RateOutcome::AlreadyRated);
            assert_eq!(catalog, snapshot);
        }
        assert_eq!(catalog[0].total_ratings as usize, catalog[0].ratings.len());
    }

    #[test]
    fn test_unknown_service_is_a_no_op() {
        let mut catalog = vec![service(1, "A", "", "food")];
        let mut cookies = MemoryCookieStore::new();

        let outcome = rate(&mut catalog, &mut cookies, 42, stars(4));
        assert_eq!(outcome, RateOutcome::UnknownService);
        assert!(catalog[0].ratings.is_empty());
        assert_eq!(cookies.get_value(RATED_SERVICES_COOKIE), None);
    }

    #[test]
    fn test_rated_ids_accumulate_in_cookie() {
        let mut catalog = vec![service(1, "A", "", "food"), service(2, "B", "", "auto")];
        let mut cookies = MemoryCookieStore::new();

        rate(&mut catalog, &mut cookies, 2, stars(1));
        rate(&mut catalog, &mut cookies, 1, stars(2));

        assert_eq!(
            cookies.get_value(RATED_SERVICES_COOKIE),
            Some("2,1".to_string())
        );
    }

    #[test]
    fn test_total_ratings_saturates_at_max() {
        let mut catalog = vec![service(1, "A", "", "food")];
        catalog[0].total_ratings = u32::MAX;
        let mut cookies = MemoryCookieStore::new();

        let outcome = rate(&mut catalog, &mut cookies, 1, stars(4));
        assert!(matches!(
            outcome,
            RateOutcome::Rated { total_ratings: u32::MAX, .. }
        ));
        assert_eq!(catalog[0].ratings, vec![4]);
        assert!(has_rated(&cookies, 1));
    }

    #[test]
    fn test_preexisting_cookie_blocks_rating() {
        let mut catalog = vec![service(7, "A", "", "food")];
        let mut cookies = MemoryCookieStore::new();
        cookies.set_value(RATED_SERVICES_COOKIE, "3,7", 30);

        assert_eq!(
            rate(&mut catalog, &mut cookies, 7, stars(5)),
            RateOutcome::AlreadyRated
        );
        assert!(catalog[0].ratings.is_empty());
    }
}
