use crossterm::event::KeyCode;
use hoteldash_core::{
    CorrelationField, DailyRecord, Insights, Projection, RecordStore, SeriesId, Summary, Tab, TabSelector,
};
use tracing::debug;

/// One formatted value of the inspect panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    pub label: &'static str,
    pub value: String,
}

impl Readout {
    fn series(id: SeriesId, value: f64) -> Self {
        Self { label: id.label(), value: id.render(value) }
    }

    fn correlation(field: CorrelationField, value: f64) -> Self {
        Self { label: field.label(), value: field.render(value) }
    }
}

/// Dashboard state: the loaded records, the active tab and the inspected day.
pub struct App {
    pub store: RecordStore,
    pub tabs: TabSelector,
    pub cursor: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: RecordStore) -> App {
        let cursor = store.len().saturating_sub(1);
        App {
            store,
            tabs: TabSelector::new(),
            cursor,
            should_quit: false,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.tabs.active()
    }

    pub fn active_projection(&self) -> Projection {
        self.store.projection(self.tabs.active())
    }

    pub fn summary(&self) -> Summary {
        self.store.summary()
    }

    pub fn insights(&self) -> Insights {
        self.store.insights()
    }

    /// Every tab change goes through here. Returns whether the active tab moved.
    pub fn change_tab(&mut self, change: impl FnOnce(&mut TabSelector)) -> bool {
        let before = self.tabs.active();
        change(&mut self.tabs);
        let after = self.tabs.active();
        if before != after {
            debug!(from = %before, tab = %after, "tab selected");
        }
        before != after
    }

    pub fn next_day(&mut self) {
        if self.store.is_empty() { return; }

        self.cursor = if self.cursor >= self.store.len() - 1 {
            0
        } else {
            self.cursor + 1
        };
    }

    pub fn previous_day(&mut self) {
        if self.store.is_empty() { return; }

        self.cursor = if self.cursor == 0 {
            self.store.len() - 1
        } else {
            self.cursor - 1
        };
    }

    pub fn selected_record(&self) -> Option<&DailyRecord> {
        self.store.records().get(self.cursor)
    }

    /// Values of the inspected day in the active projection, formatted for display.
    pub fn readouts(&self) -> Vec<Readout> {
        let i = self.cursor;
        let readouts = match self.active_projection() {
            Projection::Electricity(points) => points.get(i).map(|p| vec![
                Readout::series(SeriesId::LowLoad, p.low_load),
                Readout::series(SeriesId::MaxLoad, p.max_load),
                Readout::series(SeriesId::MidLoad, p.mid_load),
                Readout::series(SeriesId::TotalElectricity, p.total),
            ]),
            Projection::Gas(points) => points.get(i).map(|p| vec![
                Readout::series(SeriesId::Heating, p.heating),
                Readout::series(SeriesId::HotWater, p.hot_water),
                Readout::series(SeriesId::ChillerHeater, p.chiller_heater),
            ]),
            Projection::Utilization(points) => points.get(i).map(|p| vec![
                Readout::series(SeriesId::Occupancy, p.occupancy),
                Readout::series(SeriesId::AvgTemp, p.avg_temp),
                Readout::series(SeriesId::TotalElectricityThousands, p.total_elec_usage_in_thousands),
            ]),
            Projection::Correlation(points) => points.get(i).map(|p| vec![
                Readout::correlation(CorrelationField::Occupancy, p.occupancy),
                Readout::correlation(CorrelationField::Electricity, p.electricity),
                Readout::correlation(CorrelationField::Temperature, p.temperature),
            ]),
        };
        readouts.unwrap_or_default()
    }

    pub fn on_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.change_tab(|tabs| tabs.select_index(index));
            }
            KeyCode::Tab => {
                self.change_tab(TabSelector::next);
            }
            KeyCode::BackTab => {
                self.change_tab(TabSelector::previous);
            }
            KeyCode::Right | KeyCode::Char('l') => self.next_day(),
            KeyCode::Left | KeyCode::Char('h') => self.previous_day(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Result};
    use hoteldash_core::{RecordRepository, SampleRecordRepository};

    struct FailingRepo;

    impl RecordRepository for FailingRepo {
        fn describe(&self) -> String { "failing".to_string() }
        fn list(&self) -> Result<Vec<DailyRecord>> { Err(anyhow!("unreadable")) }
    }

    fn sample_app() -> App {
        App::new(RecordStore::load(&SampleRecordRepository))
    }

    #[test]
    fn test_starts_on_electricity_and_last_day() {
        let app = sample_app();
        assert_eq!(app.active_tab(), Tab::Electricity);
        assert_eq!(app.selected_record().unwrap().short_date, "07/21");
    }

    #[test]
    fn test_gas_tab_projection() {
        let mut app = sample_app();
        app.on_key(KeyCode::Char('2'));
        assert_eq!(app.active_tab(), Tab::Gas);

        let Projection::Gas(points) = app.active_projection() else {
            panic!("expected gas projection");
        };
        assert_eq!(points.len(), 7);
        for (p, r) in points.iter().zip(app.store.records()) {
            assert_eq!(p.heating, r.heating_boiler_usage);
            assert_eq!(p.hot_water, r.hot_water_boiler_usage);
            assert_eq!(p.chiller_heater, r.chiller_heater_usage);
        }
    }

    #[test]
    fn test_tab_keys_do_not_touch_records() {
        let mut app = sample_app();
        let before = app.store.records().to_vec();
        for code in [KeyCode::Tab, KeyCode::Tab, KeyCode::BackTab, KeyCode::Char('4'), KeyCode::Char('4')] {
            app.on_key(code);
        }
        assert_eq!(app.active_tab(), Tab::Correlation);
        assert_eq!(app.store.records(), before.as_slice());
    }

    #[test]
    fn test_every_tab_key_goes_through_change_tab() {
        let mut app = sample_app();
        assert!(app.change_tab(|tabs| tabs.select(Tab::Gas)));
        assert!(!app.change_tab(|tabs| tabs.select(Tab::Gas)));
        assert!(!app.change_tab(|tabs| tabs.select_index(9)));
        assert_eq!(app.active_tab(), Tab::Gas);

        let steps = [
            (KeyCode::Tab, Tab::Utilization),
            (KeyCode::Tab, Tab::Correlation),
            (KeyCode::Tab, Tab::Electricity),
            (KeyCode::BackTab, Tab::Correlation),
            (KeyCode::Char('1'), Tab::Electricity),
            (KeyCode::Char('3'), Tab::Utilization),
        ];
        for (code, expected) in steps {
            app.on_key(code);
            assert_eq!(app.active_tab(), expected, "{:?}", code);
        }
    }

    #[test]
    fn test_day_cursor_wraps() {
        let mut app = sample_app();
        app.on_key(KeyCode::Right);
        assert_eq!(app.cursor, 0);
        app.on_key(KeyCode::Left);
        assert_eq!(app.cursor, 6);
        app.on_key(KeyCode::Char('h'));
        assert_eq!(app.cursor, 5);
    }

    #[test]
    fn test_readouts_follow_format_policy() {
        let mut app = sample_app();
        app.cursor = 5;

        let elec = app.readouts();
        assert_eq!(elec.last().unwrap(), &Readout { label: "Total power", value: "7,350".to_string() });

        app.on_key(KeyCode::Char('3'));
        let util = app.readouts();
        assert_eq!(util[0].value, "95%");
        assert_eq!(util[1].value, "28");
        assert_eq!(util[2].value, "7.35");

        app.on_key(KeyCode::Char('4'));
        let corr = app.readouts();
        assert_eq!(corr[1].value, "7,350 kWh");
        assert_eq!(corr[2].value, "28°C");
    }

    #[test]
    fn test_empty_store_is_inert() {
        let mut app = App::new(RecordStore::load(&FailingRepo));
        app.on_key(KeyCode::Right);
        app.on_key(KeyCode::Left);
        assert_eq!(app.cursor, 0);
        assert!(app.selected_record().is_none());
        assert!(app.readouts().is_empty());
        assert_eq!(app.summary().average_occupancy, None);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = sample_app();
        app.on_key(KeyCode::Char('x'));
        assert!(!app.should_quit);
        app.on_key(KeyCode::Esc);
        assert!(app.should_quit);
    }
}
