//! How plotted values are rendered for display.
//!
//! Every series the dashboard plots has a [`SeriesId`], and each id maps to
//! exactly one [`ValueFormat`].

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// Localized number with thousands separators.
    Count,
    /// Raw value followed by `%`.
    Percentage,
    /// Localized number, same rendering as `Count`.
    Temperature,
}

impl ValueFormat {
    pub fn render(&self, value: f64) -> String {
        match self {
            ValueFormat::Count | ValueFormat::Temperature => format_grouped(value),
            ValueFormat::Percentage => format!("{}%", value),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesId {
    LowLoad,
    MaxLoad,
    MidLoad,
    TotalElectricity,
    Heating,
    HotWater,
    ChillerHeater,
    Occupancy,
    AvgTemp,
    TotalElectricityThousands,
}

impl SeriesId {
    pub fn format(&self) -> ValueFormat {
        match self {
            SeriesId::Occupancy => ValueFormat::Percentage,
            SeriesId::AvgTemp => ValueFormat::Temperature,
            _ => ValueFormat::Count,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeriesId::LowLoad => "Low load",
            SeriesId::MaxLoad => "Peak load",
            SeriesId::MidLoad => "Mid load",
            SeriesId::TotalElectricity => "Total power",
            SeriesId::Heating => "Heating boiler",
            SeriesId::HotWater => "Hot water boiler",
            SeriesId::ChillerHeater => "Chiller-heater",
            SeriesId::Occupancy => "Occupancy",
            SeriesId::AvgTemp => "Avg temp",
            SeriesId::TotalElectricityThousands => "Total power (MWh)",
        }
    }

    pub fn render(&self, value: f64) -> String {
        self.format().render(value)
    }
}

/// Fields of the occupancy/electricity scatter, which has its own units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelationField {
    Occupancy,
    Electricity,
    Temperature,
}

impl CorrelationField {
    pub fn label(&self) -> &'static str {
        match self {
            CorrelationField::Occupancy => "Occupancy",
            CorrelationField::Electricity => "Power usage",
            CorrelationField::Temperature => "Avg temp",
        }
    }

    pub fn render(&self, value: f64) -> String {
        match self {
            CorrelationField::Occupancy => format!("{}%", value),
            CorrelationField::Electricity => format!("{} kWh", format_grouped(value)),
            CorrelationField::Temperature => format!("{}°C", value),
        }
    }
}

const MAX_FRACTION_DIGITS: usize = 3;

/// Formats a number with `,` thousands separators and at most three
/// fraction digits, trailing zeros dropped: `44420` -> `44,420`, `7.35` -> `7.35`.
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let negative = value < 0.0 && (int_part != "0" || !frac_part.is_empty());
    let sign = if negative { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}
