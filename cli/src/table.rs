use hoteldash_core::{
    format_grouped, CorrelationField, DailyRecord, Insights, Projection, SeriesId, Summary,
};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Total (kWh)")]
    total: String,
    #[tabled(rename = "Low")]
    low: String,
    #[tabled(rename = "Mid")]
    mid: String,
    #[tabled(rename = "Peak")]
    peak: String,
    #[tabled(rename = "Water")]
    water: String,
    #[tabled(rename = "Occupancy")]
    occupancy: String,
    #[tabled(rename = "Temp (min/avg/max)")]
    temp: String,
}

#[derive(Tabled)]
struct ElectricityRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Low load")]
    low: String,
    #[tabled(rename = "Peak load")]
    max: String,
    #[tabled(rename = "Mid load")]
    mid: String,
    #[tabled(rename = "Total power")]
    total: String,
}

#[derive(Tabled)]
struct GasRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Heating boiler")]
    heating: String,
    #[tabled(rename = "Hot water boiler")]
    hot_water: String,
    #[tabled(rename = "Chiller-heater")]
    chiller: String,
}

#[derive(Tabled)]
struct UtilizationRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Occupancy")]
    occupancy: String,
    #[tabled(rename = "Avg temp")]
    avg_temp: String,
    #[tabled(rename = "Total power (MWh)")]
    thousands: String,
}

#[derive(Tabled)]
struct CorrelationRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Occupancy")]
    occupancy: String,
    #[tabled(rename = "Power usage")]
    electricity: String,
    #[tabled(rename = "Avg temp")]
    temperature: String,
}

fn styled(mut table: Table) -> String {
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table.to_string()
}

fn day_label(date: &str, day_of_week: &str) -> String {
    format!("{} ({})", date, day_of_week)
}

pub fn records_table(records: &[DailyRecord]) -> String {
    let rows = records.iter().map(|r| RecordRow {
        date: r.date.clone(),
        total: format_grouped(r.total_elec_usage),
        low: format_grouped(r.low_load_elec_usage),
        mid: format_grouped(r.mid_load_elec_usage),
        peak: format_grouped(r.max_load_elec_usage),
        water: format_grouped(r.water_usage),
        occupancy: SeriesId::Occupancy.render(r.occupancy),
        temp: format!("{} / {} / {}", r.min_temp, r.avg_temp, r.max_temp),
    });
    styled(Table::new(rows))
}

pub fn projection_table(projection: &Projection) -> String {
    match projection {
        Projection::Electricity(points) => styled(Table::new(points.iter().map(|p| ElectricityRow {
            date: day_label(&p.date, &p.day_of_week),
            low: SeriesId::LowLoad.render(p.low_load),
            max: SeriesId::MaxLoad.render(p.max_load),
            mid: SeriesId::MidLoad.render(p.mid_load),
            total: SeriesId::TotalElectricity.render(p.total),
        }))),
        Projection::Gas(points) => styled(Table::new(points.iter().map(|p| GasRow {
            date: day_label(&p.date, &p.day_of_week),
            heating: SeriesId::Heating.render(p.heating),
            hot_water: SeriesId::HotWater.render(p.hot_water),
            chiller: SeriesId::ChillerHeater.render(p.chiller_heater),
        }))),
        Projection::Utilization(points) => styled(Table::new(points.iter().map(|p| UtilizationRow {
            date: day_label(&p.date, &p.day_of_week),
            occupancy: SeriesId::Occupancy.render(p.occupancy),
            avg_temp: SeriesId::AvgTemp.render(p.avg_temp),
            thousands: SeriesId::TotalElectricityThousands.render(p.total_elec_usage_in_thousands),
        }))),
        Projection::Correlation(points) => styled(Table::new(points.iter().map(|p| CorrelationRow {
            date: p.date.clone(),
            occupancy: CorrelationField::Occupancy.render(p.occupancy),
            electricity: CorrelationField::Electricity.render(p.electricity),
            temperature: CorrelationField::Temperature.render(p.temperature),
        }))),
    }
}

pub fn summary_lines(summary: &Summary, insights: &Insights) -> Vec<String> {
    let no_data = || "-".to_string();
    let mut lines = vec![
        format!("Total electricity:  {} kWh", format_grouped(summary.total_electricity)),
        format!(
            "Average occupancy:  {}",
            summary.average_occupancy.map(|v| format!("{:.1}%", v)).unwrap_or_else(no_data)
        ),
        format!(
            "Peak electricity:   {}",
            summary.max_electricity.map(|v| format!("{} kWh/day", format_grouped(v))).unwrap_or_else(no_data)
        ),
    ];

    if let Some(split) = insights.week_split {
        lines.push(format!(
            "Weekday / weekend:  {} / {} kWh per day",
            format_grouped(split.weekday_avg_electricity),
            format_grouped(split.weekend_avg_electricity)
        ));
    }
    if let Some(r) = insights.occupancy_electricity {
        lines.push(format!("Occupancy vs power: r = {:.2}", r));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoteldash_core::{project, RecordStore, SampleRecordRepository, Tab};

    #[test]
    fn test_summary_lines_for_sample() {
        let store = RecordStore::load(&SampleRecordRepository);
        let lines = summary_lines(&store.summary(), &store.insights());
        assert_eq!(lines[0], "Total electricity:  44,420 kWh");
        assert_eq!(lines[1], "Average occupancy:  81.7%");
        assert_eq!(lines[2], "Peak electricity:   7,350 kWh/day");
        assert!(lines[3].starts_with("Weekday / weekend:  5,980 / 7,260"));
    }

    #[test]
    fn test_summary_lines_for_empty_store() {
        let lines = summary_lines(&Summary::from_records(&[]), &Insights::default());
        assert_eq!(lines.len(), 3);
        assert!(lines[1].ends_with("-"));
        assert!(lines[2].ends_with("-"));
    }

    #[test]
    fn test_projection_table_formats_values() {
        let store = RecordStore::load(&SampleRecordRepository);
        let gas = projection_table(&project(Tab::Gas, store.records()));
        assert!(gas.contains("Heating boiler"));
        assert!(gas.contains("07/20 (토)"));

        let corr = projection_table(&project(Tab::Correlation, store.records()));
        assert!(corr.contains("7,350 kWh"));
        assert!(corr.contains("95%"));

        let records = records_table(store.records());
        assert!(records.contains("25/07/15(월)"));
        assert!(records.contains("22 / 25 / 28"));
    }
}
