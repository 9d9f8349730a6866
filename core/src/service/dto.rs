use serde::{Deserialize, Serialize};

use crate::model::tab::Tab;

// Chart-ready reshapes of `DailyRecord`. `date` is always the short date label.

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ElectricityPoint {
    pub date: String,
    pub day_of_week: String,
    pub low_load: f64,
    pub max_load: f64,
    pub mid_load: f64,
    pub total: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GasPoint {
    pub date: String,
    pub day_of_week: String,
    pub heating: f64,
    pub hot_water: f64,
    pub chiller_heater: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UtilizationPoint {
    pub date: String,
    pub day_of_week: String,
    pub occupancy: f64,
    pub avg_temp: f64,
    pub total_elec_usage_in_thousands: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CorrelationPoint {
    pub occupancy: f64,
    pub electricity: f64,
    pub temperature: f64,
    pub date: String,
}

/// The projection backing one tab.
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    Electricity(Vec<ElectricityPoint>),
    Gas(Vec<GasPoint>),
    Utilization(Vec<UtilizationPoint>),
    Correlation(Vec<CorrelationPoint>),
}

impl Projection {
    pub fn tab(&self) -> Tab {
        match self {
            Projection::Electricity(_) => Tab::Electricity,
            Projection::Gas(_) => Tab::Gas,
            Projection::Utilization(_) => Tab::Utilization,
            Projection::Correlation(_) => Tab::Correlation,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Projection::Electricity(v) => v.len(),
            Projection::Gas(v) => v.len(),
            Projection::Utilization(v) => v.len(),
            Projection::Correlation(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Values behind the three summary cards. `None` means no data.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub total_electricity: f64,
    pub average_occupancy: Option<f64>,
    pub max_electricity: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct WeekSplit {
    pub weekday_avg_electricity: f64,
    pub weekend_avg_electricity: f64,
}

impl WeekSplit {
    /// Weekend average relative to weekdays, e.g. `0.2` means 20% higher.
    pub fn weekend_uplift(&self) -> Option<f64> {
        if self.weekday_avg_electricity == 0.0 {
            return None;
        }
        Some(self.weekend_avg_electricity / self.weekday_avg_electricity - 1.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Insights {
    pub week_split: Option<WeekSplit>,
    pub occupancy_electricity: Option<f64>,
    pub temperature_electricity: Option<f64>,
}
