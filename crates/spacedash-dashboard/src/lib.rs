mod cancel;
mod comms;
mod fuel;
mod mission;
mod panel;
pub mod render;

use std::sync::Arc;

use console::style;
use spacedash_music::TrackResolver;

pub use cancel::CancelToken;
pub use comms::{CommsPanel, CommsTab};
pub use fuel::{FuelGauge, FuelStatus};
pub use mission::{CELESTIAL_BODIES, CelestialBody, TOTAL_DISTANCE_KM, format_thousands};
pub use panel::{TrackPanel, TrackState};

pub const TITLE: &str = "Space Exploration Dashboard";

/// All dashboard cards plus the resolver that feeds the track card.
pub struct Dashboard {
    resolver: Arc<dyn TrackResolver>,
    locator: String,
    pub track: TrackPanel,
    pub fuel: FuelGauge,
    pub comms: CommsPanel,
}

impl Dashboard {
    pub fn new(
        resolver: Arc<dyn TrackResolver>,
        locator: impl Into<String>,
        fuel: FuelGauge,
    ) -> Self {
        Self {
            resolver,
            locator: locator.into(),
            track: TrackPanel::new(),
            fuel,
            comms: CommsPanel::new(),
        }
    }

    pub fn locator(&self) -> &str {
        &self.locator
    }

    pub async fn load_track(&mut self, cancel: &CancelToken) -> bool {
        self.track
            .load(&self.locator, self.resolver.as_ref(), cancel)
            .await
    }

    /// "Engage Thrusters": burns one step of fuel.
    pub fn engage_thrusters(&mut self) -> u8 {
        self.fuel.consume()
    }

    pub fn render(&self) -> String {
        let header = style(TITLE).bold().underlined().to_string();
        [
            header,
            render::track_card(&self.track),
            render::mission_status_card(),
            render::fuel_card(&self.fuel),
            render::comms_card(&self.comms),
            render::progress_card(),
            render::celestial_card(),
        ]
        .join("\n\n")
    }
}
