use crate::domain::model::{FounderRecord, Link, PopupCard};

pub const POPUP_OFFSET_PX: u32 = 25;

impl PopupCard {
    pub fn for_founder(founder: &FounderRecord) -> Self {
        Self {
            founder_id: founder.id,
            title: founder.name.clone(),
            subtitle: format!("{}, {}", founder.city, founder.country),
            anchor: founder.coordinates,
            offset_px: POPUP_OFFSET_PX,
            website: Link {
                label: founder.website.clone(),
                href: founder.website.clone(),
            },
            social: Link {
                label: founder.social_handle.clone(),
                href: social_profile_url(&founder.social_handle),
            },
            share: Link {
                label: "Share profile".to_string(),
                href: founder.share_url.clone(),
            },
        }
    }
}

/// `@handle` -> `https://twitter.com/handle`
pub fn social_profile_url(handle: &str) -> String {
    format!("https://twitter.com/{}", handle.trim().trim_start_matches('@'))
}
