use crate::core::directory::CountryGroups;
use crate::domain::model::{LngLat, LngLatBounds, ViewportCommand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    pub point_zoom: f64,
    pub duration_ms: u64,
    pub padding_px: u32,
    pub max_zoom: f64,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            point_zoom: 6.0,
            duration_ms: 1500,
            padding_px: 100,
            max_zoom: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    CommandIssued,
}

/// Turns a country selection into one camera command.
#[derive(Debug, Clone)]
pub struct ViewportController {
    settings: ViewportSettings,
    state: ControllerState,
    selected: Option<String>,
}

impl ViewportController {
    pub fn new(settings: ViewportSettings) -> Self {
        Self {
            settings,
            state: ControllerState::Idle,
            selected: None,
        }
    }

    pub fn settings(&self) -> &ViewportSettings {
        &self.settings
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn selected_country(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// 未知或空的國家不產生指令，也不改變目前的選取狀態
    pub fn select(&mut self, groups: &CountryGroups, country: &str) -> Option<ViewportCommand> {
        let coordinates: Vec<LngLat> = match groups.get(country) {
            Some(records) if !records.is_empty() => {
                records.iter().map(|record| record.coordinates).collect()
            }
            _ => {
                tracing::debug!("Ignoring selection of unknown country '{}'", country);
                return None;
            }
        };

        let command = self.command_for(&coordinates)?;
        tracing::debug!("Selected {} ({} founders): {:?}", country, coordinates.len(), command);

        self.selected = Some(country.to_string());
        self.state = ControllerState::CommandIssued;
        Some(command)
    }

    /// The issued command has been handed to the surface.
    pub fn complete(&mut self) {
        self.state = ControllerState::Idle;
    }

    pub fn command_for(&self, coordinates: &[LngLat]) -> Option<ViewportCommand> {
        match coordinates {
            [] => None,
            [point] => Some(ViewportCommand::CenterOnPoint {
                lng: point.lng(),
                lat: point.lat(),
                zoom: self.settings.point_zoom,
                duration_ms: self.settings.duration_ms,
            }),
            _ => {
                let bounds = LngLatBounds::enclosing(coordinates.iter().copied())?;
                Some(ViewportCommand::FitBounds {
                    sw_lng: bounds.sw.lng(),
                    sw_lat: bounds.sw.lat(),
                    ne_lng: bounds.ne.lng(),
                    ne_lat: bounds.ne.lat(),
                    padding_px: self.settings.padding_px,
                    duration_ms: self.settings.duration_ms,
                    max_zoom: self.settings.max_zoom,
                })
            }
        }
    }
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(ViewportSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::directory::group_by_country;
    use crate::domain::model::FounderRecord;

    fn founder(id: u32, country: &str, lng: f64, lat: f64) -> FounderRecord {
        FounderRecord {
            id,
            name: format!("Founder {}", id),
            country: country.to_string(),
            city: "City".to_string(),
            coordinates: LngLat(lng, lat),
            website: String::new(),
            social_handle: String::new(),
            share_url: String::new(),
        }
    }

    #[test]
    fn test_single_founder_centers_on_point() {
        let groups = group_by_country(&[founder(11, "France", 2.3522, 48.8566)]);
        let mut controller = ViewportController::default();

        let command = controller.select(&groups, "France").unwrap();
        assert_eq!(
            command,
            ViewportCommand::CenterOnPoint {
                lng: 2.3522,
                lat: 48.8566,
                zoom: 6.0,
                duration_ms: 1500,
            }
        );
        assert_eq!(controller.state(), ControllerState::CommandIssued);
        controller.complete();
        assert_eq!(controller.state(), ControllerState::Idle);
    }

    #[test]
    fn test_multiple_founders_fit_bounds() {
        let groups = group_by_country(&[
            founder(1, "Anywhere", -79.3832, 43.6532),
            founder(2, "Anywhere", 72.8777, 19.076),
        ]);
        let mut controller = ViewportController::default();

        let command = controller.select(&groups, "Anywhere").unwrap();
        assert_eq!(
            command,
            ViewportCommand::FitBounds {
                sw_lng: -79.3832,
                sw_lat: 19.076,
                ne_lng: 72.8777,
                ne_lat: 43.6532,
                padding_px: 100,
                duration_ms: 1500,
                max_zoom: 10.0,
            }
        );
    }

    #[test]
    fn test_identical_points_still_fit_with_zoom_ceiling() {
        let groups = group_by_country(&[
            founder(1, "Norway", 10.7522, 59.9139),
            founder(2, "Norway", 10.7522, 59.9139),
        ]);
        let settings = ViewportSettings {
            max_zoom: 8.0,
            ..ViewportSettings::default()
        };
        let mut controller = ViewportController::new(settings);

        match controller.select(&groups, "Norway") {
            Some(ViewportCommand::FitBounds {
                sw_lng,
                ne_lng,
                max_zoom,
                ..
            }) => {
                assert_eq!(sw_lng, ne_lng);
                assert_eq!(max_zoom, 8.0);
            }
            other => panic!("expected FitBounds, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_country_keeps_previous_selection() {
        let groups = group_by_country(&[founder(1, "Poland", 21.0122, 52.2297)]);
        let mut controller = ViewportController::default();

        controller.select(&groups, "Poland").unwrap();
        controller.complete();

        assert!(controller.select(&groups, "Atlantis").is_none());
        assert_eq!(controller.selected_country(), Some("Poland"));
        assert_eq!(controller.state(), ControllerState::Idle);
    }

    #[test]
    fn test_new_selection_supersedes_pending_command() {
        let groups = group_by_country(&[
            founder(1, "Poland", 21.0122, 52.2297),
            founder(2, "Mexico", -99.1332, 19.4326),
        ]);
        let mut controller = ViewportController::default();

        controller.select(&groups, "Poland").unwrap();
        let command = controller.select(&groups, "Mexico").unwrap();

        assert_eq!(controller.selected_country(), Some("Mexico"));
        assert!(matches!(command, ViewportCommand::CenterOnPoint { lng, .. } if lng == -99.1332));
    }
}
