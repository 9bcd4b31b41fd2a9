//! Fixed mission data shown alongside the live cards.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub description: &'static str,
}

pub const MISSION_ALERT: Alert = Alert {
    title: "Attention",
    description: "Approaching asteroid field. Proceed with caution.",
};

pub const TRACK_NOT_FOUND: Alert = Alert {
    title: "Track Not Found",
    description: "Unable to load the Spotify track. Please check the URL.",
};

pub const TOTAL_DISTANCE_KM: u64 = 19_550;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CelestialBody {
    pub name: &'static str,
    pub kind: &'static str,
    pub distance: &'static str,
}

pub const CELESTIAL_BODIES: [CelestialBody; 3] = [
    CelestialBody {
        name: "Mars",
        kind: "Red Planet",
        distance: "78.3 million km",
    },
    CelestialBody {
        name: "Europa",
        kind: "Jupiter's Moon",
        distance: "628.3 million km",
    },
    CelestialBody {
        name: "Andromeda Galaxy",
        kind: "",
        distance: "2.537 million light-years",
    },
];

impl CelestialBody {
    pub fn describe(&self) -> String {
        if self.kind.is_empty() {
            format!("{} - Distance: {}", self.name, self.distance)
        } else {
            format!("{} ({}) - Distance: {}", self.name, self.kind, self.distance)
        }
    }
}

/// Groups digits in threes with commas, e.g. `19550` -> `19,550`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
