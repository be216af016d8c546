use crate::domain::model::{FounderRecord, PopupCard, ViewportCommand};
use crate::domain::ports::MapSurface;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "payload", rename_all = "snake_case")]
pub enum SurfaceEvent {
    Marker { founder_id: u32 },
    Popup(PopupCard),
    Camera(ViewportCommand),
}

/// Keeps every call in order instead of drawing anything. Used by the CLI and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    events: Vec<SurfaceEvent>,
}

impl RecordingSurface {
    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    pub fn commands(&self) -> Vec<&ViewportCommand> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SurfaceEvent::Camera(command) => Some(command),
                _ => None,
            })
            .collect()
    }

    pub fn marker_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, SurfaceEvent::Marker { .. }))
            .count()
    }
}

impl MapSurface for RecordingSurface {
    fn place_marker(&mut self, founder: &FounderRecord) {
        self.events.push(SurfaceEvent::Marker {
            founder_id: founder.id,
        });
    }

    fn show_popup(&mut self, card: &PopupCard) {
        self.events.push(SurfaceEvent::Popup(card.clone()));
    }

    fn apply(&mut self, command: &ViewportCommand) {
        self.events.push(SurfaceEvent::Camera(command.clone()));
    }
}
