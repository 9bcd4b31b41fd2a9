use std::str::FromStr;

use spacedash_core::DashError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommsTab {
    #[default]
    Incoming,
    Outgoing,
}

impl CommsTab {
    pub const ALL: [CommsTab; 2] = [CommsTab::Incoming, CommsTab::Outgoing];

    pub fn label(self) -> &'static str {
        match self {
            CommsTab::Incoming => "Incoming",
            CommsTab::Outgoing => "Outgoing",
        }
    }

    pub fn content(self) -> &'static str {
        match self {
            CommsTab::Incoming => "Last message: \"Good luck, explorers!\"",
            CommsTab::Outgoing => "Signal strength: Strong",
        }
    }

    pub fn other(self) -> Self {
        match self {
            CommsTab::Incoming => CommsTab::Outgoing,
            CommsTab::Outgoing => CommsTab::Incoming,
        }
    }
}

impl FromStr for CommsTab {
    type Err = DashError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_lowercase().as_str() {
            "incoming" | "in" => Ok(CommsTab::Incoming),
            "outgoing" | "out" => Ok(CommsTab::Outgoing),
            _ => Err(DashError::InvalidInput(format!("unknown comms tab: {input}"))),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CommsPanel {
    active: CommsTab,
}

impl CommsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> CommsTab {
        self.active
    }

    pub fn select(&mut self, tab: CommsTab) {
        self.active = tab;
    }

    pub fn content(&self) -> &'static str {
        self.active.content()
    }
}
