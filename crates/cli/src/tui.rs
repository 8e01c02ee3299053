//! Terminal chart renderer for the live loop.

use std::io::Stdout;
use std::time::{Duration, Instant};

use brownian_shared::config::SimulationParameters;
use brownian_shared::path::{AxisBounds, PricePath};
use brownian_sim::{Control, Renderer};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame, Terminal,
};

use crate::logging;

pub type TuiTerminal = Terminal<CrosstermBackend<Stdout>>;

const TITLE: &str = " Live Brownian Motion Stock Price Simulation ";

/// Everything the chart shows, independent of the terminal it is drawn on.
#[derive(Debug, Clone)]
pub struct ChartView {
    params: SimulationParameters,
    initial_price: f64,
    points: Vec<(f64, f64)>,
    bounds: AxisBounds,
    live: bool,
    first_non_positive: Option<u64>,
}

impl ChartView {
    pub fn new(params: SimulationParameters) -> Self {
        let initial_price = params.initial_price();
        Self {
            params,
            initial_price,
            points: vec![(0.0, initial_price)],
            bounds: AxisBounds::fit(0, &[initial_price]),
            live: false,
            first_non_positive: None,
        }
    }

    pub fn set_data(&mut self, xs: &[f64], ys: &[f64]) {
        self.points.clear();
        self.points.extend(xs.iter().copied().zip(ys.iter().copied()));
        if self.first_non_positive.is_none() {
            self.first_non_positive = self.points.iter().find(|(_, p)| *p <= 0.0).map(|(d, _)| *d as u64);
        }
    }

    fn last(&self) -> (f64, f64) {
        self.points.last().copied().unwrap_or((0.0, self.initial_price))
    }

    fn last_change(&self) -> f64 {
        match self.points.len() {
            0 | 1 => 0.0,
            n => self.points[n - 1].1 - self.points[n - 2].1,
        }
    }

    fn status_lines(&self) -> Vec<Line<'static>> {
        let (day, price) = self.last();
        let change = price - self.initial_price;
        let change_pct = if self.initial_price != 0.0 {
            format!("{:+.2}%", change / self.initial_price * 100.0)
        } else {
            "n/a".to_string()
        };
        let (lo, hi) = self
            .points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, p)| (lo.min(p), hi.max(p)));

        let hint = if self.live {
            "q: stop"
        } else {
            "finished, press q to close"
        };
        let notice = match self.first_non_positive {
            Some(day) => Span::styled(
                format!("Price not positive since day {}  |  ", day),
                Style::default().fg(Color::Yellow),
            ),
            None => Span::raw(""),
        };

        vec![
            Line::from(vec![
                Span::raw(format!("Day {}/{}  ", day as u64, self.params.days())),
                Span::styled(format!("Price {:.2}  ", price), Style::default().fg(self.line_color())),
                Span::raw(format!("Change {:+.2} ({})  ", change, change_pct)),
                Span::raw(format!("Low {:.2}  High {:.2}", lo, hi)),
            ]),
            Line::from(vec![
                Span::raw(format!(
                    "Volatility {}  Drift {}  |  ",
                    self.params.volatility(),
                    self.params.drift()
                )),
                notice,
                Span::raw(hint),
            ]),
        ]
    }

    fn line_color(&self) -> Color {
        if self.last_change() >= 0.0 {
            Color::Green
        } else {
            Color::Red
        }
    }
}

/// Draw the chart and status panel into `frame`.
pub fn render(frame: &mut Frame, view: &ChartView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(4)])
        .split(frame.size());

    let datasets = vec![Dataset::default()
        .name("Stock Price")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(view.line_color()))
        .data(&view.points)];

    let [x_lo, x_hi] = view.bounds.x;
    let [y_lo, y_hi] = view.bounds.y;
    let x_labels: Vec<Span> = vec![
        Span::raw(format!("{}", x_lo as u64)),
        Span::raw(format!("{}", ((x_lo + x_hi) / 2.0) as u64)),
        Span::raw(format!("{}", x_hi as u64)),
    ];
    let y_labels: Vec<Span> = vec![
        Span::raw(format!("{:.2}", y_lo)),
        Span::raw(format!("{:.2}", (y_lo + y_hi) / 2.0)),
        Span::raw(format!("{:.2}", y_hi)),
    ];

    let chart = Chart::new(datasets)
        .block(Block::default().title(TITLE).borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .title("Days")
                .style(Style::default().fg(Color::Gray))
                .bounds(view.bounds.x)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Price")
                .style(Style::default().fg(Color::Gray))
                .bounds(view.bounds.y)
                .labels(y_labels),
        );
    frame.render_widget(chart, chunks[0]);

    let status = Paragraph::new(view.status_lines())
        .block(Block::default().title(" Status ").borders(Borders::ALL));
    frame.render_widget(status, chunks[1]);
}

/// [`Renderer`] that takes over the terminal (alternate screen, raw mode) from `begin`
/// until the final display is dismissed.
pub struct TerminalChart {
    terminal: Option<TuiTerminal>,
    view: ChartView,
}

impl TerminalChart {
    pub fn new(params: SimulationParameters) -> Self {
        Self {
            terminal: None,
            view: ChartView::new(params),
        }
    }

    fn redraw(&mut self) -> anyhow::Result<()> {
        let view = &self.view;
        let terminal = self
            .terminal
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("Terminal chart used before begin"))?;
        terminal.draw(|f| render(f, view))?;
        Ok(())
    }

    fn restore(&mut self) -> anyhow::Result<()> {
        if let Some(mut terminal) = self.terminal.take() {
            let cleanup = cleanup_terminal(&mut terminal);
            logging::set_screen_owned(false);
            cleanup?;
        }
        Ok(())
    }
}

impl Renderer for TerminalChart {
    fn begin(&mut self, path: &PricePath) -> anyhow::Result<()> {
        if self.terminal.is_none() {
            self.terminal = Some(init_terminal()?);
            logging::set_screen_owned(true);
        }
        self.view.set_data(&path.days_axis(), path.prices());
        self.view.bounds = AxisBounds::for_path(path, None);
        self.redraw()
    }

    fn set_data(&mut self, xs: &[f64], ys: &[f64]) -> anyhow::Result<()> {
        self.view.set_data(xs, ys);
        Ok(())
    }

    fn set_bounds(&mut self, bounds: AxisBounds) -> anyhow::Result<()> {
        self.view.bounds = bounds;
        Ok(())
    }

    fn set_interactive(&mut self, on: bool) -> anyhow::Result<()> {
        self.view.live = on;
        Ok(())
    }

    fn draw(&mut self) -> anyhow::Result<()> {
        self.redraw()
    }

    fn process_events(&mut self, window: Duration) -> anyhow::Result<Control> {
        let deadline = Instant::now() + window;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                return Ok(Control::Continue);
            }
            match event::read()? {
                Event::Key(key) if is_quit_key(&key) => return Ok(Control::Stop),
                Event::Resize(_, _) => self.redraw()?,
                _ => {}
            }
            if remaining.is_zero() {
                return Ok(Control::Continue);
            }
        }
    }

    fn block_until_dismissed(&mut self) -> anyhow::Result<()> {
        self.redraw()?;
        loop {
            match event::read()? {
                Event::Key(key) if is_quit_key(&key) || (is_press(&key) && key.code == KeyCode::Enter) => {
                    break
                }
                Event::Resize(_, _) => self.redraw()?,
                _ => {}
            }
        }
        self.restore()
    }
}

impl Drop for TerminalChart {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::warn!("failed to restore terminal: {}", e);
        }
    }
}

fn is_press(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
}

fn is_quit_key(key: &KeyEvent) -> bool {
    if !is_press(key) {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn init_terminal() -> anyhow::Result<TuiTerminal> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|e| anyhow::anyhow!("Failed to create terminal: {}", e))
}

fn cleanup_terminal(terminal: &mut TuiTerminal) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
