//! Directory view model - what the grid should show, derived from state
//!
//! Pure projection: nothing here touches egui, so every frame can rebuild the
//! view from `ContentState` + the rated-set and the result is testable as data.
use crate::constants::MAX_STARS;
use crate::models::Service;
use crate::services::RatedSet;
use crate::state::{CatalogStatus, ContentState};

#[derive(Debug, Clone, PartialEq)]
pub enum GridView {
    Loading,
    Failed { title: String, message: String },
    Empty { title: String, message: String },
    Cards(Vec<ServiceCard>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCard {
    pub id: u64,
    pub name: String,
    pub phone: String,
    pub category_label: String,
    pub description: String,
    pub social_links: Vec<SocialLink>,
    pub stars: [bool; MAX_STARS as usize],
    pub average_label: String,
    pub review_count: u32,
    /// Shows the "rated" badge and disables click-to-rate
    pub rated: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: String,
}

/// Build the grid for the current state
pub fn project(content: &ContentState, rated: &RatedSet) -> GridView {
    match &content.status {
        CatalogStatus::Loading => return GridView::Loading,
        CatalogStatus::Failed(reason) => {
            log::trace!("[View] Showing load error: {}", reason);
            return GridView::Failed {
                title: "Error loading services".to_string(),
                message: "Could not load services data. Please try again.".to_string(),
            };
        }
        CatalogStatus::Loaded => {}
    }

    let visible = content.visible_services();
    if visible.is_empty() {
        return GridView::Empty {
            title: "No services found".to_string(),
            message: "Try adjusting your search or filters.".to_string(),
        };
    }

    GridView::Cards(visible.into_iter().map(|s| card_for(s, rated)).collect())
}

pub fn card_for(service: &Service, rated: &RatedSet) -> ServiceCard {
    let average = service.average_rating();
    let filled_up_to = average.trunc() as u8;

    let mut stars = [false; MAX_STARS as usize];
    for (i, star) in stars.iter_mut().enumerate() {
        *star = (i as u8 + 1) <= filled_up_to;
    }

    let social_links = service
        .social_media
        .as_ref()
        .map(|social| {
            social
                .links()
                .into_iter()
                .map(|(label, url)| SocialLink {
                    label,
                    url: url.to_string(),
                })
                .collect()
        })
        .unwrap_or_default();

    ServiceCard {
        id: service.id,
        name: service.name.clone(),
        phone: service.phone.clone(),
        category_label: service.category.to_uppercase(),
        description: service.description.clone(),
        social_links,
        stars,
        average_label: format!("{:.1}", average),
        review_count: service.total_ratings,
        rated: rated.contains(service.id),
    }
}

impl ServiceCard {
    /// "(1 review)" / "(3 reviews)"
    pub fn reviews_label(&self) -> String {
        match self.review_count {
            1 => "(1 review)".to_string(),
            n => format!("({} reviews)", n),
        }
    }
}
