use serde::{Deserialize, Serialize};

/// One listed business, as found in the catalog resource
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Service {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub phone: String,
    pub category: String,
    #[serde(default)]
    pub ratings: Vec<u8>,
    #[serde(rename = "totalRatings", default)]
    pub total_ratings: u32,
    #[serde(rename = "socialMedia", default, skip_serializing_if = "Option::is_none")]
    pub social_media: Option<SocialMedia>,
}

/// Optional links shown at the bottom of a card
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct SocialMedia {
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub google: Option<String>,
    pub website: Option<String>,
}

impl Service {
    /// Mean of all ratings, 0.0 when nobody has rated yet
    pub fn average_rating(&self) -> f64 {
        if self.ratings.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.ratings.iter().map(|&r| r as u32).sum();
        sum as f64 / self.ratings.len() as f64
    }
}

impl SocialMedia {
    /// Present, non-blank links as (label, url), in display order
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("Facebook", self.facebook.as_deref()),
            ("Instagram", self.instagram.as_deref()),
            ("Google", self.google.as_deref()),
            ("Website", self.website.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| match url {
            Some(url) if !url.trim().is_empty() => Some((label, url)),
            _ => None,
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_fields() {
        let json = r#"{
            "id": 7,
            "name": "Padaria Silva",
            "description": "Pão fresco todo dia",
            "phone": "(11) 5555-0101",
            "category": "food",
            "ratings": [5, 4],
            "totalRatings": 2,
            "socialMedia": { "instagram": "https://instagram.com/padariasilva", "facebook": "" }
        }"#;

        let service: Service = serde_json::from_str(json).unwrap();
        assert_eq!(service.id, 7);
        assert_eq!(service.ratings, vec![5, 4]);
        assert_eq!(service.total_ratings, 2);

        let social = service.social_media.unwrap();
        assert_eq!(social.instagram.as_deref(), Some("https://instagram.com/padariasilva"));
        assert_eq!(social.google, None);
    }

    #[test]
    fn test_missing_ratings_default_to_empty() {
        let json = r#"{"id":1,"name":"A","description":"","phone":"","category":"food"}"#;
        let service: Service = serde_json::from_str(json).unwrap();
        assert!(service.ratings.is_empty());
        assert_eq!(service.total_ratings, 0);
        assert!(service.social_media.is_none());
    }

    #[test]
    fn test_average_rating() {
        let mut service: Service = serde_json::from_str(
            r#"{"id":1,"name":"A","description":"","phone":"","category":"food","ratings":[5,3,4],"totalRatings":3}"#,
        )
        .unwrap();
        assert_eq!(service.average_rating(), 4.0);

        service.ratings.clear();
        assert_eq!(service.average_rating(), 0.0);
    }

    #[test]
    fn test_social_links_skip_blank_entries() {
        let social = SocialMedia {
            facebook: Some("  ".to_string()),
            instagram: None,
            google: Some("https://maps.google.com/?q=x".to_string()),
            website: Some("https://example.com".to_string()),
        };
        assert_eq!(
            social.links(),
            vec![
                ("Google", "https://maps.google.com/?q=x"),
                ("Website", "https://example.com"),
            ]
        );
    }
}
