use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Electricity,
    Gas,
    Utilization,
    Correlation,
}

impl Default for Tab {
    fn default() -> Self {
        Tab::Electricity
    }
}

impl Tab {
    /// Display order of the tab strip.
    pub const ALL: [Tab; 4] = [Tab::Electricity, Tab::Gas, Tab::Utilization, Tab::Correlation];

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Electricity => "electricity",
            Tab::Gas => "gas",
            Tab::Utilization => "utilization",
            Tab::Correlation => "correlation",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Electricity => "Electricity",
            Tab::Gas => "Gas",
            Tab::Utilization => "Occupancy & Temp",
            Tab::Correlation => "Correlation",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Electricity => "⚡",
            Tab::Gas => "🔥",
            Tab::Utilization => "📊",
            Tab::Correlation => "📈",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Electricity => "Daily electricity usage",
            Tab::Gas => "Daily gas usage by facility",
            Tab::Utilization => "Room occupancy and temperature",
            Tab::Correlation => "Occupancy vs electricity usage",
        }
    }

    pub fn index(&self) -> usize {
        Tab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tab {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Tab::ALL
            .into_iter()
            .find(|t| t.id() == s.trim().to_lowercase())
            .ok_or_else(|| anyhow!("Unknown tab '{}' (expected electricity, gas, utilization or correlation)", s))
    }
}

/// Which view the dashboard is showing. Changing it never touches the records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabSelector {
    active: Tab,
}

impl TabSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn select(&mut self, tab: Tab) {
        self.active = tab;
    }

    pub fn select_index(&mut self, index: usize) {
        if let Some(tab) = Tab::ALL.get(index) {
            self.active = *tab;
        }
    }

    pub fn next(&mut self) {
        let i = (self.active.index() + 1) % Tab::ALL.len();
        self.active = Tab::ALL[i];
    }

    pub fn previous(&mut self) {
        let i = if self.active.index() == 0 {
            Tab::ALL.len() - 1
        } else {
            self.active.index() - 1
        };
        self.active = Tab::ALL[i];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_electricity() {
        assert_eq!(TabSelector::new().active(), Tab::Electricity);
    }

    #[test]
    fn test_select_each_tab() {
        let mut selector = TabSelector::new();
        for tab in Tab::ALL {
            selector.select(tab);
            assert_eq!(selector.active(), tab);
            selector.select(tab);
            assert_eq!(selector.active(), tab);
        }
    }

    #[test]
    fn test_cycle_wraps() {
        let mut selector = TabSelector::new();
        selector.previous();
        assert_eq!(selector.active(), Tab::Correlation);
        selector.next();
        assert_eq!(selector.active(), Tab::Electricity);
        selector.next();
        assert_eq!(selector.active(), Tab::Gas);
    }

    #[test]
    fn test_select_index_ignores_out_of_range() {
        let mut selector = TabSelector::new();
        selector.select_index(2);
        assert_eq!(selector.active(), Tab::Utilization);
        selector.select_index(9);
        assert_eq!(selector.active(), Tab::Utilization);
    }

    #[test]
    fn test_parse_ids() {
        assert_eq!("gas".parse::<Tab>().unwrap(), Tab::Gas);
        assert_eq!(" Correlation ".parse::<Tab>().unwrap(), Tab::Correlation);
        assert!("water".parse::<Tab>().is_err());
        for tab in Tab::ALL {
            assert_eq!(tab.to_string().parse::<Tab>().unwrap(), tab);
        }
    }
}
