use crate::model::record::DailyRecord;
use crate::service::dto::{Insights, WeekSplit};

/// Pearson correlation coefficient of two equally long samples.
///
/// `None` for fewer than two points, mismatched lengths, or a sample with
/// zero variance.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(cov / (var_x.sqrt() * var_y.sqrt()))
}

/// Average daily electricity on weekdays vs weekends. Needs at least one of each.
pub fn weekday_weekend_split(records: &[DailyRecord]) -> Option<WeekSplit> {
    let (weekend, weekday): (Vec<&DailyRecord>, Vec<&DailyRecord>) =
        records.iter().partition(|r| r.is_weekend());
    if weekend.is_empty() || weekday.is_empty() {
        return None;
    }

    let avg = |days: &[&DailyRecord]| days.iter().map(|r| r.total_elec_usage).sum::<f64>() / days.len() as f64;
    Some(WeekSplit {
        weekday_avg_electricity: avg(&weekday),
        weekend_avg_electricity: avg(&weekend),
    })
}

impl Insights {
    pub fn from_records(records: &[DailyRecord]) -> Self {
        let electricity: Vec<f64> = records.iter().map(|r| r.total_elec_usage).collect();
        let occupancy: Vec<f64> = records.iter().map(|r| r.occupancy).collect();
        let temperature: Vec<f64> = records.iter().map(|r| r.avg_temp).collect();

        Self {
            week_split: weekday_weekend_split(records),
            occupancy_electricity: pearson(&occupancy, &electricity),
            temperature_electricity: pearson(&temperature, &electricity),
        }
    }
}
