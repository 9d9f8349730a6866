use serde::{Deserialize, Serialize};
use chrono::{Datelike, NaiveDate, Weekday};

/// One day of utility and occupancy measurements.
///
/// `date`, `short_date` and `day_of_week` are stored as supplied; none of
/// them is derived from another.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    pub date: String,
    pub short_date: String,
    pub day_of_week: String,

    // Electricity tiers (kWh)
    pub low_load_elec_usage: f64,
    pub max_load_elec_usage: f64,
    pub mid_load_elec_usage: f64,
    pub total_elec_usage: f64,

    pub water_usage: f64,

    // Gas / thermal facilities
    pub heating_boiler_usage: f64,
    pub hot_water_boiler_usage: f64,
    pub chiller_heater_usage: f64,

    /// Room occupancy, 0-100.
    pub occupancy: f64,

    pub min_temp: f64,
    pub max_temp: f64,
    pub avg_temp: f64,
}

const CALENDAR_PREFIX_LEN: usize = 8; // "25/07/15"

impl DailyRecord {
    /// Parses the `yy/mm/dd` prefix of `date`, ignoring the trailing weekday.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        let prefix = self.date.get(..CALENDAR_PREFIX_LEN)?;
        NaiveDate::parse_from_str(prefix, "%y/%m/%d").ok()
    }

    /// Weekend by the stored `day_of_week` label. The calendar weekday of
    /// `date` is consulted only when the label is not a known day name.
    pub fn is_weekend(&self) -> bool {
        match self.day_of_week.as_str() {
            "토" | "일" | "Sat" | "Sun" => true,
            "월" | "화" | "수" | "목" | "금" | "Mon" | "Tue" | "Wed" | "Thu" | "Fri" => false,
            _ => self
                .calendar_date()
                .is_some_and(|day| matches!(day.weekday(), Weekday::Sat | Weekday::Sun)),
        }
    }

    pub fn electricity_tier_sum(&self) -> f64 {
        self.low_load_elec_usage + self.mid_load_elec_usage + self.max_load_elec_usage
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use super::fixtures::record;

    fn labelled(date: &str, day_of_week: &str) -> DailyRecord {
        let mut r = record(date, 7000.0, 90.0);
        r.day_of_week = day_of_week.to_string();
        r
    }

    #[test]
    fn test_calendar_date_parses_prefix() {
        let r = labelled("25/07/19(금)", "금");
        assert_eq!(r.calendar_date(), NaiveDate::from_ymd_opt(2025, 7, 19));
        assert!(!r.is_weekend());

        let sat = labelled("25/07/20(토)", "토");
        assert!(sat.is_weekend());
    }

    #[test]
    fn test_label_wins_over_calendar() {
        // 2025-07-19 is a Saturday and 2025-07-21 a Monday on the calendar.
        let fri = labelled("25/07/19(금)", "금");
        assert_eq!(fri.calendar_date().map(|d| d.weekday()), Some(Weekday::Sat));
        assert!(!fri.is_weekend());

        let sun = labelled("25/07/21(일)", "일");
        assert_eq!(sun.calendar_date().map(|d| d.weekday()), Some(Weekday::Mon));
        assert!(sun.is_weekend());

        let mon = labelled("25/07/20", "Mon");
        assert!(!mon.is_weekend());
    }

    #[test]
    fn test_unknown_label_uses_calendar() {
        assert!(labelled("25/07/19", "").is_weekend());
        assert!(labelled("25/07/20", "?").is_weekend());
        assert!(!labelled("25/07/21", "").is_weekend());
        assert!(!labelled("July 20", "").is_weekend());
    }

    #[test]
    fn test_weekend_from_label_without_calendar() {
        let mut r = record("July 20", 7350.0, 95.0);
        assert_eq!(r.calendar_date(), None);
        r.day_of_week = "일".to_string();
        assert!(r.is_weekend());
        r.day_of_week = "월".to_string();
        assert!(!r.is_weekend());
    }

    #[test]
    fn test_deserializes_camel_case() {
        let json = r#"{
            "date": "25/07/15(월)", "shortDate": "07/15", "dayOfWeek": "월",
            "lowLoadElecUsage": 1200, "maxLoadElecUsage": 2800, "midLoadElecUsage": 1800,
            "totalElecUsage": 5800, "waterUsage": 450,
            "heatingBoilerUsage": 120, "hotWaterBoilerUsage": 280, "chillerHeaterUsage": 340,
            "occupancy": 75, "minTemp": 22, "maxTemp": 28, "avgTemp": 25
        }"#;
        let r: DailyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.short_date, "07/15");
        assert_eq!(r.total_elec_usage, 5800.0);
        assert_eq!(r.electricity_tier_sum(), 5800.0);
    }
}
