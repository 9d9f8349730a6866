use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph, Tabs, Wrap},
    Frame,
};
use hoteldash_core::{
    format_grouped, CorrelationPoint, ElectricityPoint, GasPoint, Projection, SeriesId, Tab, UtilizationPoint,
};

use crate::tui::app::App;

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    electricity: Color,
    occupancy: Color,
    peak: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    electricity: Color::Blue,
    occupancy: Color::Green,
    peak: Color::LightRed,
};

fn series_color(id: SeriesId) -> Color {
    match id {
        SeriesId::LowLoad => Color::Blue,
        SeriesId::MaxLoad => Color::Red,
        SeriesId::MidLoad => Color::Green,
        SeriesId::TotalElectricity => Color::Yellow,
        SeriesId::Heating => Color::LightRed,
        SeriesId::HotWater => Color::LightBlue,
        SeriesId::ChillerHeater => Color::LightGreen,
        SeriesId::Occupancy => Color::Magenta,
        SeriesId::AvgTemp => Color::LightYellow,
        SeriesId::TotalElectricityThousands => Color::LightCyan,
    }
}

const RECOMMENDATIONS: [&str; 3] = [
    "Review spreading peak-hour electricity load",
    "Check efficiency of each gas facility",
    "Look for energy savings on busy weekends",
];

pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(5), // Summary cards
            Constraint::Length(3), // Tabs
            Constraint::Min(12),   // Chart + side panel
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    draw_header(f, app, main_chunks[0]);
    draw_summary_cards(f, app, main_chunks[1]);
    draw_tabs(f, app, main_chunks[2]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(72), // Chart
            Constraint::Length(1),      // Gutter
            Constraint::Percentage(28), // Inspect / insights
        ])
        .split(main_chunks[3]);

    draw_chart(f, app, content_chunks[0]);
    draw_side_panel(f, app, content_chunks[2]);

    let help = Line::from(vec![
        Span::styled("TABS: ", Style::default().fg(THEME.muted)),
        Span::styled("1-4 / Tab ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("DAY: ", Style::default().fg(THEME.muted)),
        Span::styled("←/→ ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    let footer = Paragraph::new(help).alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[4]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "HOTEL UTILITY DASHBOARD",
            Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Daily electricity, gas and water usage ({})", app.store.source()),
            Style::default().fg(THEME.muted),
        )),
    ]);
    f.render_widget(header, area);
}

fn draw_summary_cards(f: &mut Frame, app: &App, area: Rect) {
    let summary = app.summary();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let cards = [
        ("Total electricity", format_grouped(summary.total_electricity), "kWh", THEME.electricity),
        (
            "Average occupancy",
            summary.average_occupancy.map(|v| format!("{:.1}%", v)).unwrap_or_else(no_data),
            "daily average",
            THEME.occupancy,
        ),
        (
            "Peak electricity",
            summary.max_electricity.map(format_grouped).unwrap_or_else(no_data),
            "kWh/day",
            THEME.peak,
        ),
    ];

    for ((title, value, unit, color), chunk) in cards.into_iter().zip(chunks.iter()) {
        let text = vec![
            Line::from(Span::styled(title, Style::default().fg(THEME.muted))),
            Line::from(Span::styled(value, Style::default().fg(THEME.text).add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(unit, Style::default().fg(THEME.muted))),
        ];
        let card = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).border_style(Style::default().fg(color)));
        f.render_widget(card, *chunk);
    }
}

fn no_data() -> String {
    "-".to_string()
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<String> = Tab::ALL.iter().enumerate()
        .map(|(i, t)| format!("{} {} {}", i + 1, t.icon(), t.label()))
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).border_style(Style::default().fg(THEME.muted)))
        .select(app.active_tab().index())
        .style(Style::default().fg(THEME.muted))
        .highlight_style(Style::default().fg(THEME.text).bg(Color::Blue).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, area);
}

fn chart_block(tab: Tab) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(format!(" {} ", tab.title()))
}

fn draw_chart(f: &mut Frame, app: &App, area: Rect) {
    let tab = app.active_tab();

    if app.store.is_empty() {
        let message = match app.store.load_error() {
            Some(e) => format!("Could not load utility data: {}", e),
            None => "No utility data available".to_string(),
        };
        let empty = Paragraph::new(message)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(chart_block(tab));
        f.render_widget(empty, area);
        return;
    }

    let projection = app.active_projection();
    let block = chart_block(projection.tab());
    match projection {
        Projection::Electricity(points) => draw_electricity(f, &points, app.cursor, block, area),
        Projection::Gas(points) => draw_gas(f, &points, block, area),
        Projection::Utilization(points) => draw_utilization(f, &points, app.cursor, block, area),
        Projection::Correlation(points) => draw_correlation(f, &points, block, area),
    }
}

/// Upper y bound leaving some headroom above `max`.
pub(crate) fn padded_max(max: f64) -> f64 {
    if max <= 0.0 {
        1.0
    } else {
        (max + max / 10.0).ceil()
    }
}

fn date_labels(dates: &[&str], cursor: usize) -> Vec<Span<'static>> {
    dates.iter().enumerate().map(|(i, d)| {
        if i == cursor {
            Span::styled(d.to_string(), Style::default().fg(THEME.text).add_modifier(Modifier::BOLD | Modifier::UNDERLINED))
        } else {
            Span::styled(d.to_string(), Style::default().fg(THEME.muted))
        }
    }).collect()
}

fn value_labels(max: f64) -> Vec<Span<'static>> {
    [0.0, max / 2.0, max]
        .iter()
        .map(|v| Span::styled(format_grouped(*v), Style::default().fg(THEME.muted)))
        .collect()
}

fn line_dataset<'a>(id: SeriesId, data: &'a [(f64, f64)]) -> Dataset<'a> {
    Dataset::default()
        .name(id.label())
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(series_color(id)))
        .data(data)
}

fn draw_electricity(f: &mut Frame, points: &[ElectricityPoint], cursor: usize, block: Block<'static>, area: Rect) {
    let series: Vec<(SeriesId, Vec<(f64, f64)>)> = [
        (SeriesId::LowLoad, points.iter().map(|p| p.low_load).collect::<Vec<_>>()),
        (SeriesId::MaxLoad, points.iter().map(|p| p.max_load).collect()),
        (SeriesId::MidLoad, points.iter().map(|p| p.mid_load).collect()),
        (SeriesId::TotalElectricity, points.iter().map(|p| p.total).collect()),
    ]
    .into_iter()
    .map(|(id, values)| (id, values.into_iter().enumerate().map(|(i, v)| (i as f64, v)).collect::<Vec<_>>()))
    .collect();

    let datasets: Vec<Dataset> = series.iter().map(|(id, data)| line_dataset(*id, data)).collect();
    let max = padded_max(points.iter().map(|p| p.total.max(p.max_load)).fold(0.0, f64::max));
    let dates: Vec<&str> = points.iter().map(|p| p.date.as_str()).collect();

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(Axis::default()
            .style(Style::default().fg(THEME.muted))
            .bounds([0.0, (points.len().max(2) - 1) as f64])
            .labels(date_labels(&dates, cursor)))
        .y_axis(Axis::default()
            .title("kWh")
            .style(Style::default().fg(THEME.muted))
            .bounds([0.0, max])
            .labels(value_labels(max)));
    f.render_widget(chart, area);
}

fn draw_gas(f: &mut Frame, points: &[GasPoint], block: Block<'static>, area: Rect) {
    let ids = [SeriesId::Heating, SeriesId::HotWater, SeriesId::ChillerHeater];
    let max = points.iter()
        .map(|p| p.heating.max(p.hot_water).max(p.chiller_heater))
        .fold(0.0, f64::max);

    let legend = Line::from(ids.iter().flat_map(|id| vec![
        Span::styled("■ ", Style::default().fg(series_color(*id))),
        Span::styled(format!("{}  ", id.label()), Style::default().fg(THEME.muted)),
    ]).collect::<Vec<_>>());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(3)
        .bar_gap(0)
        .group_gap(2)
        .max(padded_max(max) as u64);

    for p in points {
        let bars: Vec<Bar> = [(SeriesId::Heating, p.heating), (SeriesId::HotWater, p.hot_water), (SeriesId::ChillerHeater, p.chiller_heater)]
            .iter()
            .map(|(id, value)| {
                Bar::default()
                    .value(value.round().max(0.0) as u64)
                    .style(Style::default().fg(series_color(*id)))
                    .text_value(id.render(*value))
            })
            .collect();
        chart = chart.data(BarGroup::default().label(Line::from(p.date.clone())).bars(&bars));
    }

    f.render_widget(chart, chunks[0]);
    f.render_widget(Paragraph::new(legend).alignment(Alignment::Center), chunks[1]);
}

/// Right-axis series are drawn scaled onto the 0-100 occupancy axis.
pub(crate) fn to_left_axis(value: f64, right_max: f64) -> f64 {
    if right_max <= 0.0 {
        0.0
    } else {
        value / right_max * 100.0
    }
}

fn draw_utilization(f: &mut Frame, points: &[UtilizationPoint], cursor: usize, block: Block<'static>, area: Rect) {
    let right_max = padded_max(
        points.iter().map(|p| p.avg_temp.max(p.total_elec_usage_in_thousands)).fold(0.0, f64::max),
    );

    let occupancy: Vec<(f64, f64)> = points.iter().enumerate().map(|(i, p)| (i as f64, p.occupancy)).collect();
    let temp: Vec<(f64, f64)> = points.iter().enumerate()
        .map(|(i, p)| (i as f64, to_left_axis(p.avg_temp, right_max)))
        .collect();
    let power: Vec<(f64, f64)> = points.iter().enumerate()
        .map(|(i, p)| (i as f64, to_left_axis(p.total_elec_usage_in_thousands, right_max)))
        .collect();

    let datasets = vec![
        line_dataset(SeriesId::Occupancy, &occupancy),
        line_dataset(SeriesId::AvgTemp, &temp).marker(symbols::Marker::Dot),
        line_dataset(SeriesId::TotalElectricityThousands, &power).marker(symbols::Marker::Dot),
    ];
    let dates: Vec<&str> = points.iter().map(|p| p.date.as_str()).collect();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(6)])
        .split(area);

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(Axis::default()
            .style(Style::default().fg(THEME.muted))
            .bounds([0.0, (points.len().max(2) - 1) as f64])
            .labels(date_labels(&dates, cursor)))
        .y_axis(Axis::default()
            .title("%")
            .style(Style::default().fg(THEME.muted))
            .bounds([0.0, 100.0])
            .labels(["0", "50", "100"]));
    f.render_widget(chart, chunks[0]);

    // Right axis: temperature (°C) and electricity (MWh) share one scale.
    let height = chunks[1].height.saturating_sub(3) as usize;
    let mut lines = vec![Line::from(Span::styled(format_grouped(right_max), Style::default().fg(THEME.muted)))];
    lines.extend((0..height / 2).map(|_| Line::from("")));
    lines.push(Line::from(Span::styled(format_grouped(right_max / 2.0), Style::default().fg(THEME.muted))));
    lines.extend((0..height.saturating_sub(height / 2 + 1)).map(|_| Line::from("")));
    lines.push(Line::from(Span::styled("0", Style::default().fg(THEME.muted))));
    let right_axis = Paragraph::new(lines).block(Block::default().padding(ratatui::widgets::Padding::new(1, 0, 1, 0)));
    f.render_widget(right_axis, chunks[1]);
}

fn draw_correlation(f: &mut Frame, points: &[CorrelationPoint], block: Block<'static>, area: Rect) {
    let data: Vec<(f64, f64)> = points.iter().map(|p| (p.occupancy, p.electricity)).collect();
    let max = padded_max(points.iter().map(|p| p.electricity).fold(0.0, f64::max));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(2)])
        .split(area);

    let dataset = Dataset::default()
        .name("Days")
        .marker(symbols::Marker::Dot)
        .graph_type(GraphType::Scatter)
        .style(Style::default().fg(THEME.electricity))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(Axis::default()
            .title("Occupancy %")
            .style(Style::default().fg(THEME.muted))
            .bounds([0.0, 100.0])
            .labels(["0%", "50%", "100%"]))
        .y_axis(Axis::default()
            .title("kWh")
            .style(Style::default().fg(THEME.muted))
            .bounds([0.0, max])
            .labels(value_labels(max)));
    f.render_widget(chart, chunks[0]);

    let caption = Paragraph::new(vec![
        Line::from("X: room occupancy (%), Y: total electricity usage (kWh)"),
        Line::from(Span::styled(
            "Higher occupancy tends to come with higher electricity usage.",
            Style::default().fg(THEME.muted),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(caption, chunks[1]);
}

fn draw_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // Inspect
            Constraint::Min(4),     // Insights
            Constraint::Length(5),  // Recommendations
        ])
        .split(area);

    draw_inspect(f, app, chunks[0]);
    draw_insights(f, app, chunks[1]);

    let recommendations: Vec<Line> = RECOMMENDATIONS.iter()
        .map(|r| Line::from(vec![Span::styled("• ", Style::default().fg(Color::Yellow)), Span::raw(*r)]))
        .collect();
    let block = Paragraph::new(recommendations)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).border_style(Style::default().fg(THEME.muted)).title(" Recommendations "));
    f.render_widget(block, chunks[2]);
}

fn draw_inspect(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(" Inspect ");

    let Some(record) = app.selected_record() else {
        f.render_widget(block, area);
        return;
    };

    let mut text = vec![
        Line::from(Span::styled(record.date.clone(), Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD))),
    ];
    for readout in app.readouts() {
        text.push(Line::from(vec![
            Span::styled(format!("{}: ", readout.label), Style::default().fg(THEME.muted)),
            Span::styled(readout.value, Style::default().fg(THEME.text).add_modifier(Modifier::BOLD)),
        ]));
    }
    text.push(Line::from(vec![
        Span::styled("Water: ", Style::default().fg(THEME.muted)),
        Span::raw(format_grouped(record.water_usage)),
    ]));
    text.push(Line::from(vec![
        Span::styled("Temp range: ", Style::default().fg(THEME.muted)),
        Span::raw(format!("{}-{}°C", record.min_temp, record.max_temp)),
    ]));

    f.render_widget(Paragraph::new(text).block(block), area);
}

fn draw_insights(f: &mut Frame, app: &App, area: Rect) {
    let insights = app.insights();
    let mut text = Vec::new();

    if let Some(uplift) = insights.week_split.and_then(|s| s.weekend_uplift()) {
        let direction = if uplift >= 0.0 { "higher" } else { "lower" };
        text.push(bullet(format!("Weekend electricity {:.1}% {} than weekdays", uplift.abs() * 100.0, direction)));
    }
    if let Some(r) = insights.occupancy_electricity {
        text.push(bullet(format!("Occupancy vs electricity r = {:.2}", r)));
    }
    if let Some(r) = insights.temperature_electricity {
        text.push(bullet(format!("Temperature vs electricity r = {:.2}", r)));
    }
    if text.is_empty() {
        text.push(Line::from(Span::styled("Not enough data", Style::default().fg(THEME.muted))));
    }

    let panel = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).border_style(Style::default().fg(THEME.muted)).title(" Insights "));
    f.render_widget(panel, area);
}

fn bullet(text: String) -> Line<'static> {
    Line::from(vec![Span::styled("• ", Style::default().fg(Color::Green)), Span::raw(text)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use hoteldash_core::{DailyRecord, RecordRepository, RecordStore, SampleRecordRepository};
    use ratatui::{backend::TestBackend, Terminal};

    struct FailingRepo;

    impl RecordRepository for FailingRepo {
        fn describe(&self) -> String { "failing".to_string() }
        fn list(&self) -> anyhow::Result<Vec<DailyRecord>> { Err(anyhow!("missing file")) }
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_padded_max() {
        assert_eq!(padded_max(0.0), 1.0);
        assert_eq!(padded_max(7350.0), 8085.0);
    }

    #[test]
    fn test_to_left_axis() {
        assert_eq!(to_left_axis(15.0, 30.0), 50.0);
        assert_eq!(to_left_axis(15.0, 0.0), 0.0);
    }

    #[test]
    fn test_draws_every_tab() {
        let mut app = App::new(RecordStore::load(&SampleRecordRepository));
        for tab in Tab::ALL {
            app.change_tab(|tabs| tabs.select(tab));
            let screen = render(&app);
            assert!(screen.contains("HOTEL UTILITY DASHBOARD"));
            assert!(screen.contains("44,420"));
            assert!(screen.contains("7,350"));
            assert!(screen.contains(tab.title()), "{}", tab);
            for other in Tab::ALL.iter().filter(|t| **t != tab) {
                assert!(!screen.contains(other.title()), "{} shown on {}", other, tab);
            }
        }
    }

    #[test]
    fn test_draws_load_error() {
        let app = App::new(RecordStore::load(&FailingRepo));
        let screen = render(&app);
        assert!(screen.contains("missing file"));
    }
}
