use anyhow::Result;

use crate::model::record::DailyRecord;
use crate::repository::traits::RecordRepository;

// date, short date, weekday, then:
// low, max, mid, total elec | water | heating, hot water, chiller | occupancy | min, max, avg temp
type SampleRow = (&'static str, &'static str, &'static str, [f64; 12]);

const SAMPLE_WEEK: [SampleRow; 7] = [
    ("25/07/15(월)", "07/15", "월", [1200.0, 2800.0, 1800.0, 5800.0, 450.0, 120.0, 280.0, 340.0, 75.0, 22.0, 28.0, 25.0]),
    ("25/07/16(화)", "07/16", "화", [1150.0, 2650.0, 1700.0, 5500.0, 420.0, 110.0, 260.0, 320.0, 68.0, 21.0, 27.0, 24.0]),
    ("25/07/17(수)", "07/17", "수", [1300.0, 2900.0, 1950.0, 6150.0, 480.0, 130.0, 300.0, 360.0, 82.0, 23.0, 29.0, 26.0]),
    ("25/07/18(목)", "07/18", "목", [1180.0, 2750.0, 1820.0, 5750.0, 440.0, 115.0, 275.0, 330.0, 71.0, 22.0, 28.0, 25.0]),
    ("25/07/19(금)", "07/19", "금", [1400.0, 3200.0, 2100.0, 6700.0, 520.0, 140.0, 320.0, 380.0, 89.0, 24.0, 30.0, 27.0]),
    ("25/07/20(토)", "07/20", "토", [1550.0, 3500.0, 2300.0, 7350.0, 580.0, 160.0, 360.0, 420.0, 95.0, 25.0, 31.0, 28.0]),
    ("25/07/21(일)", "07/21", "일", [1520.0, 3400.0, 2250.0, 7170.0, 560.0, 155.0, 350.0, 410.0, 92.0, 24.0, 30.0, 27.0]),
];

/// The built-in week of sample data (2025-07-15 to 2025-07-21).
pub fn sample_records() -> Vec<DailyRecord> {
    SAMPLE_WEEK
        .iter()
        .map(|(date, short_date, day_of_week, v)| DailyRecord {
            date: date.to_string(),
            short_date: short_date.to_string(),
            day_of_week: day_of_week.to_string(),
            low_load_elec_usage: v[0],
            max_load_elec_usage: v[1],
            mid_load_elec_usage: v[2],
            total_elec_usage: v[3],
            water_usage: v[4],
            heating_boiler_usage: v[5],
            hot_water_boiler_usage: v[6],
            chiller_heater_usage: v[7],
            occupancy: v[8],
            min_temp: v[9],
            max_temp: v[10],
            avg_temp: v[11],
        })
        .collect()
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SampleRecordRepository;

impl RecordRepository for SampleRecordRepository {
    fn describe(&self) -> String {
        "built-in sample".to_string()
    }

    fn list(&self) -> Result<Vec<DailyRecord>> {
        Ok(sample_records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_week_shape() {
        let records = SampleRecordRepository.list().unwrap();
        assert_eq!(records.len(), 7);
        assert_eq!(records[0].date, "25/07/15(월)");
        assert_eq!(records[6].short_date, "07/21");

        let totals: Vec<f64> = records.iter().map(|r| r.total_elec_usage).collect();
        assert_eq!(totals, vec![5800.0, 5500.0, 6150.0, 5750.0, 6700.0, 7350.0, 7170.0]);

        for r in &records {
            assert_eq!(r.electricity_tier_sum(), r.total_elec_usage, "{}", r.date);
            assert!(r.min_temp <= r.avg_temp && r.avg_temp <= r.max_temp);
        }
    }
}
