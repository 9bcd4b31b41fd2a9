use console::style;
use spacedash_core::format_duration;

use crate::comms::{CommsPanel, CommsTab};
use crate::fuel::{FuelGauge, FuelStatus};
use crate::mission::{
    Alert, CELESTIAL_BODIES, MISSION_ALERT, TOTAL_DISTANCE_KM, TRACK_NOT_FOUND, format_thousands,
};
use crate::panel::{TrackPanel, TrackState};

const BAR_WIDTH: usize = 20;

struct Card<'a> {
    title: &'a str,
    description: Option<&'a str>,
    body: Vec<String>,
    footer: Option<String>,
}

impl Card<'_> {
    fn render(self) -> String {
        let mut lines = vec![format!("{}", style(format!("▌ {}", self.title)).bold().cyan())];
        if let Some(description) = self.description {
            lines.push(format!("  {}", style(description).dim()));
        }
        lines.extend(self.body.into_iter().map(|line| format!("  {line}")));
        if let Some(footer) = self.footer {
            lines.push(format!("  {footer}"));
        }
        lines.join("\n")
    }
}

fn alert_lines(alert: &Alert) -> Vec<String> {
    vec![
        format!("{} {}", style("⚠").yellow(), style(alert.title).bold()),
        alert.description.to_string(),
    ]
}

pub fn track_card(panel: &TrackPanel) -> String {
    let body = match panel.state() {
        TrackState::Idle => vec![style("No track loaded").dim().to_string()],
        TrackState::Resolving => vec![style("Loading…").dim().to_string()],
        TrackState::NotFound => alert_lines(&TRACK_NOT_FOUND),
        TrackState::Resolved(track) => {
            let mut lines = vec![
                style(&track.title).bold().to_string(),
                track.artist_names(),
                format!(
                    "{} • {}",
                    track.album.title,
                    format_duration(track.duration_ms)
                ),
                format!("[{}% popular]", track.popularity.value()),
                format!("Open in Spotify: {}", track.canonical_url),
            ];
            if let Some(cover) = track.album.cover() {
                lines.push(format!(
                    "Cover: {} ({}x{})",
                    cover.url, cover.width, cover.height
                ));
            }
            if let Some(preview) = &track.preview_url {
                lines.push(format!("Preview: {preview}"));
            }
            lines
        }
    };

    Card {
        title: "♪ Current Track",
        description: Some("Music to fuel your space exploration"),
        body,
        footer: None,
    }
    .render()
}

pub fn mission_status_card() -> String {
    Card {
        title: "Mission Status",
        description: None,
        body: alert_lines(&MISSION_ALERT),
        footer: Some(format!("[{}]", style("Engage Thrusters").bold())),
    }
    .render()
}

pub fn fuel_bar(level: u8) -> String {
    let filled = usize::from(level) * BAR_WIDTH / usize::from(FuelGauge::FULL);
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH.saturating_sub(filled))
    )
}

pub fn fuel_card(gauge: &FuelGauge) -> String {
    let status = gauge.status();
    let badge = match status {
        FuelStatus::Sufficient => style(status.label()).green(),
        FuelStatus::LowFuel => style(status.label()).red().bold(),
    };
    Card {
        title: "Fuel Levels",
        description: None,
        body: vec![
            fuel_bar(gauge.level()),
            format!("{}% Remaining", gauge.level()),
        ],
        footer: Some(format!("[{badge}]")),
    }
    .render()
}

pub fn comms_card(panel: &CommsPanel) -> String {
    let tabs = CommsTab::ALL
        .iter()
        .map(|tab| {
            if *tab == panel.active() {
                style(format!("[{}]", tab.label())).bold().to_string()
            } else {
                style(format!(" {} ", tab.label())).dim().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    Card {
        title: "Communication",
        description: None,
        body: vec![tabs, panel.content().to_string()],
        footer: None,
    }
    .render()
}

pub fn progress_card() -> String {
    Card {
        title: "Mission Progress",
        description: Some("Distance traveled over time"),
        body: vec![
            style(format!(
                "Total Distance: {} km",
                format_thousands(TOTAL_DISTANCE_KM)
            ))
            .bold()
            .to_string(),
            style("(Data visualization not available in this view)")
                .dim()
                .to_string(),
        ],
        footer: None,
    }
    .render()
}

pub fn celestial_card() -> String {
    Card {
        title: "Nearby Celestial Bodies",
        description: None,
        body: CELESTIAL_BODIES
            .iter()
            .map(|body| format!("• {}", body.describe()))
            .collect(),
        footer: None,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: String) -> String {
        console::strip_ansi_codes(&text).to_string()
    }

    #[test]
    fn fuel_bar_scales_with_level() {
        assert_eq!(fuel_bar(0), "░".repeat(20));
        assert_eq!(fuel_bar(100), "█".repeat(20));
        assert_eq!(fuel_bar(75), format!("{}{}", "█".repeat(15), "░".repeat(5)));
    }

    #[test]
    fn fuel_card_shows_low_fuel_badge() {
        let text = plain(fuel_card(&FuelGauge::new(20, 10, 20)));
        assert!(text.contains("20% Remaining"));
        assert!(text.contains("[Low Fuel]"));
    }

    #[test]
    fn track_card_idle_and_loading() {
        let text = plain(track_card(&TrackPanel::new()));
        assert!(text.contains("Current Track"));
        assert!(text.contains("No track loaded"));

        let text = plain(track_card(&TrackPanel::with_state(TrackState::Resolving)));
        assert!(text.contains("Loading…"));
    }

    #[test]
    fn track_card_not_found_alert() {
        let text = plain(track_card(&TrackPanel::with_state(TrackState::NotFound)));
        assert!(text.contains("Track Not Found"));
        assert!(text.contains("Please check the URL."));
    }

    #[test]
    fn comms_card_marks_active_tab() {
        let mut panel = CommsPanel::new();
        panel.select(CommsTab::Outgoing);
        let text = plain(comms_card(&panel));
        assert!(text.contains("[Outgoing]"));
        assert!(text.contains("Signal strength: Strong"));
        assert!(!text.contains("Good luck"));
    }

    #[test]
    fn static_cards_carry_mission_data() {
        let progress = plain(progress_card());
        assert!(progress.contains("Total Distance: 19,550 km"));
        let bodies = plain(celestial_card());
        assert!(bodies.contains("• Europa (Jupiter's Moon) - Distance: 628.3 million km"));
        let status = plain(mission_status_card());
        assert!(status.contains("Approaching asteroid field. Proceed with caution."));
        assert!(status.contains("[Engage Thrusters]"));
    }
}
