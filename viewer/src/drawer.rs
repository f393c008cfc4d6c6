use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dh_kinematics::{Frame, FrameAxes};
use nalgebra::Point3;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
    Terminal,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::drawer_config::DrawerConfig;

/// Anything the drawer can show: a set of frames plus optional caption lines.
pub trait Scene {
    fn frames(&self) -> Vec<Frame>;

    fn caption(&self) -> Vec<String> {
        Vec::new()
    }
}

impl Scene for Vec<Frame> {
    fn frames(&self) -> Vec<Frame> {
        self.clone()
    }
}

/// Produces the next state from the current one, once per tick.
pub type UpdateFn<S> = Box<dyn FnMut(&S) -> S>;

/// Screen-space extent of everything drawn so far. Only ever grows, so the
/// camera does not jump while frames move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    fn around_origin() -> Self {
        Self {
            min_x: 0.0,
            max_x: 0.0,
            min_y: 0.0,
            max_y: 0.0,
        }
    }

    pub fn include(&mut self, (x, y): (f64, f64)) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    /// Square window around the extent with a 10% margin.
    pub fn padded(&self) -> ([f64; 2], [f64; 2]) {
        let cx = (self.min_x + self.max_x) / 2.0;
        let cy = (self.min_y + self.max_y) / 2.0;
        let half = ((self.max_x - self.min_x).max(self.max_y - self.min_y) / 2.0).max(0.5) * 1.1;
        ([cx - half, cx + half], [cy - half, cy + half])
    }
}

#[derive(Serialize)]
struct Snapshot<'a> {
    tick: usize,
    axes: &'a [FrameAxes],
}

/// Writes one tick as a single JSON line.
pub fn write_snapshot<W: Write>(writer: &mut W, tick: usize, axes: &[FrameAxes]) -> io::Result<()> {
    serde_json::to_writer(&mut *writer, &Snapshot { tick, axes })?;
    writer.write_all(b"\n")
}

/// Owns the scene state, the optional per-tick update and the drawing surface.
///
/// Each tick runs the update on the current state and replaces it with the
/// result before anything is plotted, so a redraw never sees a partial update.
pub struct FrameDrawer<S: Scene> {
    config: DrawerConfig,
    state: S,
    update: Option<UpdateFn<S>>,
    ticks: usize,
    bounds: Bounds,
}

impl<S: Scene> FrameDrawer<S> {
    pub fn new(config: DrawerConfig, state: S) -> Self {
        let mut drawer = Self {
            config,
            state,
            update: None,
            ticks: 0,
            bounds: Bounds::around_origin(),
        };
        let axes = drawer.plot();
        drawer.fit(&axes);
        drawer
    }

    pub fn with_update(mut self, update: impl FnMut(&S) -> S + 'static) -> Self {
        self.update = Some(Box::new(update));
        self
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn into_state(self) -> S {
        self.state
    }

    pub fn ticks(&self) -> usize {
        self.ticks
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Axes of every frame in the current state.
    pub fn plot(&self) -> Vec<FrameAxes> {
        self.state
            .frames()
            .iter()
            .map(|frame| frame.axes(self.config.axis_length))
            .collect()
    }

    /// Advances the animation by one step and returns what should be drawn.
    ///
    /// Returns `None` without touching the state when there is no update
    /// function or the configured number of frames has been played.
    pub fn tick(&mut self) -> Option<Vec<FrameAxes>> {
        if self.ticks >= self.config.frame_count {
            return None;
        }
        let update = self.update.as_mut()?;
        self.state = update(&self.state);
        self.ticks += 1;

        let axes = self.plot();
        self.fit(&axes);
        Some(axes)
    }

    /// Orthographic projection onto the view plane of a camera looking at the
    /// origin from `azimuth`/`elevation`.
    pub fn project(&self, p: &Point3<f64>) -> (f64, f64) {
        let (sa, ca) = self.config.azimuth().sin_cos();
        let (se, ce) = self.config.elevation().sin_cos();
        let x = -sa * p.x + ca * p.y;
        let y = -se * ca * p.x - se * sa * p.y + ce * p.z;
        (x, y)
    }

    fn fit(&mut self, axes: &[FrameAxes]) {
        for a in axes {
            for segment in a.segments() {
                let start = self.project(&segment.start);
                let end = self.project(&segment.end);
                self.bounds.include(start);
                self.bounds.include(end);
            }
        }
    }

    fn open_export(&self) -> Option<BufWriter<File>> {
        let path = self.config.export_path.as_ref()?;
        match File::create(path) {
            Ok(file) => Some(BufWriter::new(file)),
            Err(e) => {
                warn!(path = %path, error = %e, "could not create snapshot file, export disabled");
                None
            }
        }
    }

    /// Runs the terminal viewer until `q` or `Esc` is pressed.
    pub async fn show(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.config.validate()?;
        let mut export = self.open_export();
        if let Some(writer) = export.as_mut() {
            write_snapshot(writer, 0, &self.plot())?;
        }
        info!(title = %self.config.title, frames = self.config.frame_count, "viewer started");

        // Setup terminal
        enable_raw_mode()?;
        let mut terminal = match Self::enter_terminal() {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                disable_raw_mode()?;
                return Err(e.into());
            }
        };

        let res = self.run(&mut terminal, &mut export).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        if let Some(mut writer) = export {
            writer.flush()?;
        }
        info!(ticks = self.ticks, "viewer closed");
        res
    }

    fn enter_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        Terminal::new(CrosstermBackend::new(stdout))
    }

    async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        export: &mut Option<BufWriter<File>>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut interval = tokio::time::interval(self.config.tick_interval());

        loop {
            interval.tick().await;

            // update and redraw happen back to back on this task
            if let Some(axes) = self.tick() {
                if let Some(writer) = export.as_mut() {
                    if let Err(e) = write_snapshot(writer, self.ticks, &axes) {
                        warn!(error = %e, "snapshot export failed, export disabled");
                        *export = None;
                    }
                }
            }
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::ZERO)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press
                        && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
                    {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&self, f: &mut ratatui::Frame) {
        let caption = self.state.caption();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),
                Constraint::Length(caption.len() as u16 + 3),
            ])
            .split(f.area());

        self.render_canvas(f, chunks[0]);
        self.render_caption(f, chunks[1], caption);
    }

    fn render_canvas(&self, f: &mut ratatui::Frame, area: Rect) {
        let axes = self.plot();
        let (x_bounds, y_bounds) = self.bounds.padded();

        let canvas = Canvas::default()
            .block(Block::default().borders(Borders::ALL).title(self.config.title.clone()))
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| {
                for frame_axes in &axes {
                    let labelled = [
                        (frame_axes.x, Color::Red, "x"),
                        (frame_axes.y, Color::Green, "y"),
                        (frame_axes.z, Color::Blue, "z"),
                    ];
                    for (segment, color, label) in labelled {
                        let (x1, y1) = self.project(&segment.start);
                        let (x2, y2) = self.project(&segment.end);
                        ctx.draw(&CanvasLine { x1, y1, x2, y2, color });
                        ctx.print(x2, y2, Span::styled(label, Style::default().fg(color)));
                    }
                    let (ox, oy) = self.project(&frame_axes.origin);
                    ctx.print(ox, oy, "o");
                }
            });
        f.render_widget(canvas, area);
    }

    fn render_caption(&self, f: &mut ratatui::Frame, area: Rect, caption: Vec<String>) {
        let mut lines: Vec<Line> = caption.into_iter().map(Line::from).collect();
        let progress = if self.update.is_some() {
            format!("tick {}/{}", self.ticks, self.config.frame_count)
        } else {
            "static".to_string()
        };
        lines.push(Line::from(vec![
            Span::styled(progress, Style::default().fg(Color::DarkGray)),
            Span::raw("   q: quit"),
        ]));

        let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}
