use crate::model::record::DailyRecord;
use crate::model::tab::Tab;
use crate::service::dto::{CorrelationPoint, ElectricityPoint, GasPoint, Projection, UtilizationPoint};

pub fn electricity_series(records: &[DailyRecord]) -> Vec<ElectricityPoint> {
    records.iter().map(|r| ElectricityPoint {
        date: r.short_date.clone(),
        day_of_week: r.day_of_week.clone(),
        low_load: r.low_load_elec_usage,
        max_load: r.max_load_elec_usage,
        mid_load: r.mid_load_elec_usage,
        total: r.total_elec_usage,
    }).collect()
}

pub fn gas_series(records: &[DailyRecord]) -> Vec<GasPoint> {
    records.iter().map(|r| GasPoint {
        date: r.short_date.clone(),
        day_of_week: r.day_of_week.clone(),
        heating: r.heating_boiler_usage,
        hot_water: r.hot_water_boiler_usage,
        chiller_heater: r.chiller_heater_usage,
    }).collect()
}

pub fn utilization_series(records: &[DailyRecord]) -> Vec<UtilizationPoint> {
    records.iter().map(|r| UtilizationPoint {
        date: r.short_date.clone(),
        day_of_week: r.day_of_week.clone(),
        occupancy: r.occupancy,
        avg_temp: r.avg_temp,
        total_elec_usage_in_thousands: r.total_elec_usage / 1000.0,
    }).collect()
}

pub fn correlation_pairs(records: &[DailyRecord]) -> Vec<CorrelationPoint> {
    records.iter().map(|r| CorrelationPoint {
        occupancy: r.occupancy,
        electricity: r.total_elec_usage,
        temperature: r.avg_temp,
        date: r.short_date.clone(),
    }).collect()
}

pub fn project(tab: Tab, records: &[DailyRecord]) -> Projection {
    match tab {
        Tab::Electricity => Projection::Electricity(electricity_series(records)),
        Tab::Gas => Projection::Gas(gas_series(records)),
        Tab::Utilization => Projection::Utilization(utilization_series(records)),
        Tab::Correlation => Projection::Correlation(correlation_pairs(records)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::fixtures::record;
    use crate::repository::sample_records;
    use proptest::prelude::*;

    #[test]
    fn test_electricity_renames_fields() {
        let records = sample_records();
        let series = electricity_series(&records);
        assert_eq!(series[0], ElectricityPoint {
            date: "07/15".to_string(),
            day_of_week: "월".to_string(),
            low_load: 1200.0,
            max_load: 2800.0,
            mid_load: 1800.0,
            total: 5800.0,
        });
    }

    #[test]
    fn test_gas_tab_projection_matches_records() {
        let records = sample_records();
        let projection = project(Tab::Gas, &records);
        assert_eq!(projection.tab(), Tab::Gas);

        let Projection::Gas(points) = projection else {
            panic!("expected gas projection");
        };
        assert_eq!(points.len(), 7);
        for (p, r) in points.iter().zip(&records) {
            assert_eq!(p.date, r.short_date);
            assert_eq!(p.heating, r.heating_boiler_usage);
            assert_eq!(p.hot_water, r.hot_water_boiler_usage);
            assert_eq!(p.chiller_heater, r.chiller_heater_usage);
        }
    }

    #[test]
    fn test_utilization_divides_by_thousand() {
        let records = sample_records();
        let series = utilization_series(&records);
        assert_eq!(series[5].total_elec_usage_in_thousands, 7.35);
        assert_eq!(series[5].occupancy, 95.0);
        assert_eq!(series[5].avg_temp, 28.0);
    }

    #[test]
    fn test_correlation_pairs() {
        let pairs = correlation_pairs(&sample_records());
        assert_eq!(pairs[1], CorrelationPoint {
            occupancy: 68.0,
            electricity: 5500.0,
            temperature: 24.0,
            date: "07/16".to_string(),
        });
    }

    #[test]
    fn test_empty_records_give_empty_projections() {
        for tab in Tab::ALL {
            assert!(project(tab, &[]).is_empty());
        }
    }

    fn arb_records() -> impl Strategy<Value = Vec<DailyRecord>> {
        prop::collection::vec((0.0f64..20000.0, 0.0f64..=100.0), 0..30).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (total, occ))| record(&format!("25/08/{:02}", i + 1), total, occ))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn test_projections_preserve_order_and_length(records in arb_records()) {
            let elec = electricity_series(&records);
            let gas = gas_series(&records);
            let util = utilization_series(&records);
            let corr = correlation_pairs(&records);

            prop_assert_eq!(elec.len(), records.len());
            prop_assert_eq!(gas.len(), records.len());
            prop_assert_eq!(util.len(), records.len());
            prop_assert_eq!(corr.len(), records.len());

            for (i, r) in records.iter().enumerate() {
                prop_assert_eq!(&elec[i].date, &r.short_date);
                prop_assert_eq!(&gas[i].date, &r.short_date);
                prop_assert_eq!(&util[i].date, &r.short_date);
                prop_assert_eq!(&corr[i].date, &r.short_date);
                prop_assert_eq!(elec[i].total, r.total_elec_usage);
                prop_assert!((util[i].total_elec_usage_in_thousands - r.total_elec_usage / 1000.0).abs() < 1e-12);
            }
        }
    }
}
