use crate::core::directory::{CountryGroups, FounderDirectory};
use crate::core::sidebar::{country_summaries, CountrySummary, DirectoryStats};
use crate::core::ticker::Ticker;
use crate::core::viewport::{ViewportController, ViewportSettings};
use crate::domain::model::{PopupCard, ViewportCommand};
use crate::domain::ports::{ConfigProvider, MapSurface};
use crate::utils::error::Result;

/// State owned by the rendering shell: the directory, the current selection,
/// the ticker position and whether the map has finished loading.
#[derive(Debug)]
pub struct GlobeSession {
    directory: FounderDirectory,
    controller: ViewportController,
    ticker: Ticker,
    map_ready: bool,
}

impl GlobeSession {
    pub fn new(directory: FounderDirectory, settings: ViewportSettings, ticker: Ticker) -> Self {
        Self {
            directory,
            controller: ViewportController::new(settings),
            ticker,
            map_ready: false,
        }
    }

    pub fn from_config<C: ConfigProvider>(directory: FounderDirectory, config: &C) -> Result<Self> {
        let ticker = Ticker::new(config.ticker_messages(), config.ticker_interval_ms())?;
        Ok(Self::new(directory, config.viewport_settings(), ticker))
    }

    pub fn directory(&self) -> &FounderDirectory {
        &self.directory
    }

    pub fn groups(&self) -> &CountryGroups {
        self.directory.groups()
    }

    pub fn is_map_ready(&self) -> bool {
        self.map_ready
    }

    pub fn selected_country(&self) -> Option<&str> {
        self.controller.selected_country()
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn ticker_mut(&mut self) -> &mut Ticker {
        &mut self.ticker
    }

    pub fn summaries(&self) -> Vec<CountrySummary> {
        country_summaries(self.directory.groups())
    }

    pub fn stats(&self) -> DirectoryStats {
        DirectoryStats::from_groups(self.directory.groups())
    }

    /// 地圖載入完成後放置所有標記，之後才接受國家選取
    pub fn place_markers<M: MapSurface + ?Sized>(&mut self, surface: &mut M) -> usize {
        for founder in self.directory.records() {
            tracing::debug!(
                "Placing marker for {} at {:?}",
                founder.name,
                founder.coordinates
            );
            surface.place_marker(founder);
        }
        self.map_ready = true;
        self.directory.len()
    }

    pub fn handle_country_click<M: MapSurface + ?Sized>(
        &mut self,
        country: &str,
        surface: &mut M,
    ) -> Option<ViewportCommand> {
        if !self.map_ready {
            tracing::debug!("Map not ready, ignoring click on {}", country);
            return None;
        }

        let command = self.controller.select(self.directory.groups(), country)?;
        surface.apply(&command);
        self.controller.complete();
        Some(command)
    }

    pub fn handle_marker_click<M: MapSurface + ?Sized>(
        &mut self,
        founder_id: u32,
        surface: &mut M,
    ) -> Option<PopupCard> {
        let founder = self.directory.find(founder_id)?;
        let card = PopupCard::for_founder(founder);
        surface.show_popup(&card);
        Some(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::surface::{RecordingSurface, SurfaceEvent};
    use crate::core::viewport::ControllerState;
    use crate::domain::model::{FounderRecord, LngLat};

    fn founder(id: u32, country: &str, lng: f64, lat: f64) -> FounderRecord {
        FounderRecord {
            id,
            name: format!("Founder {}", id),
            country: country.to_string(),
            city: "City".to_string(),
            coordinates: LngLat(lng, lat),
            website: "https://example.com".to_string(),
            social_handle: format!("@founder{}", id),
            share_url: String::new(),
        }
    }

    fn session() -> GlobeSession {
        let directory = FounderDirectory::from_records(vec![
            founder(1, "Canada", -79.3832, 43.6532),
            founder(2, "India", 72.8777, 19.076),
            founder(3, "Canada", -123.1207, 49.2827),
        ]);
        GlobeSession::new(directory, ViewportSettings::default(), Ticker::default())
    }

    #[test]
    fn test_clicks_before_map_ready_are_ignored() {
        let mut session = session();
        let mut surface = RecordingSurface::default();

        assert!(session.handle_country_click("Canada", &mut surface).is_none());
        assert!(surface.events().is_empty());
        assert_eq!(session.selected_country(), None);
    }

    #[test]
    fn test_country_click_forwards_command() {
        let mut session = session();
        let mut surface = RecordingSurface::default();

        assert_eq!(session.place_markers(&mut surface), 3);
        let command = session.handle_country_click("Canada", &mut surface).unwrap();

        assert!(matches!(command, ViewportCommand::FitBounds { .. }));
        assert_eq!(surface.commands(), vec![&command]);
        assert_eq!(session.selected_country(), Some("Canada"));
        assert_eq!(session.controller.state(), ControllerState::Idle);
    }

    #[test]
    fn test_unknown_country_click_changes_nothing() {
        let mut session = session();
        let mut surface = RecordingSurface::default();
        session.place_markers(&mut surface);
        session.handle_country_click("India", &mut surface).unwrap();

        assert!(session.handle_country_click("Atlantis", &mut surface).is_none());
        assert_eq!(session.selected_country(), Some("India"));
        assert_eq!(surface.commands().len(), 1);
    }

    #[test]
    fn test_marker_click_shows_popup() {
        let mut session = session();
        let mut surface = RecordingSurface::default();
        session.place_markers(&mut surface);

        let card = session.handle_marker_click(2, &mut surface).unwrap();
        assert_eq!(card.social.href, "https://twitter.com/founder2");
        assert!(matches!(surface.events().last(), Some(SurfaceEvent::Popup(c)) if c.founder_id == 2));
        assert!(session.handle_marker_click(99, &mut surface).is_none());
    }
}
