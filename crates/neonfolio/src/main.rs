use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Clear, Paragraph},
    DefaultTerminal, Frame,
};

use neonfolio_background::BackgroundAnimator;
use neonfolio_canvas::{Surface, SurfaceWidget};
use neonfolio_config::Config;
use neonfolio_core::{Rgba, ViewportState};
use neonfolio_radar::RadarChart;

/// Backing-store supersampling factor for the backdrop and the radar
/// panel, the terminal's stand-in for a device-pixel-ratio.
const PIXEL_SCALE: f32 = 2.0;

/// Radar panel size in cells (inside the border).
const RADAR_COLS: u16 = 44;
const RADAR_ROWS: u16 = 22;

fn main() -> color_eyre::Result<()> {
    env_logger::init();
    color_eyre::install()?;
    let config = Config::load()?;
    log::debug!("profile {:?}, {} skill groups", config.profile.name, config.groups.len());

    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;
    let result = App::new(config).run(terminal);
    execute!(stdout(), DisableMouseCapture)?;
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
struct App {
    /// Is the application running?
    running: bool,
    /// Animation paused?
    paused: bool,
    /// Loaded profile and skill catalog.
    config: Config,
    /// The backdrop simulation.
    animator: BackgroundAnimator,
    /// Full-viewport backdrop surface.
    backdrop: Surface,
    /// Fixed-size surface for the radar panel.
    radar: Surface,
    /// Whether the radar panel is shown.
    show_radar: bool,
    /// Currently selected skill group.
    group: usize,
    /// Group index the radar surface was last rendered for; the chart is
    /// redrawn only when this goes stale.
    rendered_group: Option<usize>,
}

impl App {
    fn new(config: Config) -> Self {
        let animator = match config.background.seed {
            Some(seed) => BackgroundAnimator::from_seed(seed, config.background.speed),
            None => BackgroundAnimator::new(config.background.speed),
        };
        Self {
            running: false,
            paused: false,
            config,
            animator,
            backdrop: Surface::new(ViewportState::default()),
            radar: Surface::new(ViewportState::new(
                RADAR_COLS as f32,
                RADAR_ROWS as f32 * 2.0,
                PIXEL_SCALE,
            )),
            show_radar: true,
            group: 0,
            rendered_group: None,
        }
    }

    /// Run the application's main loop at roughly the terminal's frame
    /// cadence. The animator's return value is its reschedule request,
    /// so tearing it down ends the loop.
    fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;

        let size = terminal.size()?;
        let viewport = viewport_for(size.width, size.height);
        self.animator.initialize(viewport);
        self.backdrop.resize(viewport);

        let start = Instant::now();
        while self.running {
            if !self.paused {
                let elapsed = start.elapsed().as_millis() as u64;
                if !self.animator.render_frame(&mut self.backdrop, elapsed) {
                    break;
                }
            }
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }

        self.animator.teardown();
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(SurfaceWidget::new(&self.backdrop), area);

        self.render_header(frame, area);
        if self.show_radar {
            self.render_radar_panel(frame, area);
        }
        self.render_help(frame, area);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        if area.height < 4 {
            return;
        }
        let header = Paragraph::new(vec![
            Line::from(self.config.profile.name.clone())
                .style(Style::new().fg(Color::Cyan).bold()),
            Line::from(self.config.profile.title.clone()).style(Style::new().dark_gray()),
        ]);
        let rect = Rect::new(area.x + 2, area.y + 1, area.width.saturating_sub(4), 2);
        frame.render_widget(header, rect);
    }

    fn render_radar_panel(&mut self, frame: &mut Frame, area: Rect) {
        let Some(group) = self.config.groups.get(self.group) else {
            return;
        };

        // Redraw the chart surface only when the selection changed.
        if self.rendered_group != Some(self.group) {
            RadarChart::new(group.accent).render(&mut self.radar, &group.skills);
            self.rendered_group = Some(self.group);
        }

        let panel_w = (RADAR_COLS + 2).min(area.width);
        let panel_h = (RADAR_ROWS + 2).min(area.height);
        if panel_w < 10 || panel_h < 6 {
            return;
        }
        let rect = Rect::new(
            area.x + (area.width - panel_w) / 2,
            area.y + (area.height - panel_h) / 2,
            panel_w,
            panel_h,
        );

        let block = Block::bordered()
            .title(format!(" {} ", group.title))
            .border_style(Style::new().fg(to_color(group.accent)));
        let inner = block.inner(rect);
        frame.render_widget(Clear, rect);
        frame.render_widget(block, rect);
        frame.render_widget(SurfaceWidget::new(&self.radar), inner);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        if area.height < 2 {
            return;
        }
        let pause_label = if self.paused { " resume" } else { " pause" };
        let help = Line::from(vec![
            "q".bold().cyan(),
            " quit  ".dark_gray(),
            "r".bold().cyan(),
            " radar  ".dark_gray(),
            "tab".bold().cyan(),
            " group  ".dark_gray(),
            "s".bold().cyan(),
            format!(" speed ({})  ", self.animator.speed().label()).dark_gray(),
            "space".bold().cyan(),
            pause_label.dark_gray(),
        ])
        .centered();
        let rect = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
        frame.render_widget(help, rect);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls with a short timeout to hold roughly 60 frames per second,
    /// then drains whatever queued up (pointer moves arrive in bursts).
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if !event::poll(Duration::from_millis(16))? {
            return Ok(());
        }
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(cols, rows) => self.on_resize(cols, rows),
                _ => {}
            }
            if !event::poll(Duration::ZERO)? {
                return Ok(());
            }
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('r')) => self.show_radar = !self.show_radar,
            (_, KeyCode::Tab) => self.cycle_group(),
            (_, KeyCode::Char('s')) => self.cycle_speed(),
            (_, KeyCode::Char(' ')) => self.paused = !self.paused,
            _ => {}
        }
    }

    /// Forward pointer motion to the animator as logical coordinates
    /// (one cell is one pixel wide and two pixels tall).
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        if matches!(
            mouse.kind,
            MouseEventKind::Moved | MouseEventKind::Drag(_)
        ) {
            self.animator
                .on_pointer_move(mouse.column as f32, mouse.row as f32 * 2.0);
        }
    }

    /// Recompute the backing stores; the simulation state carries over.
    fn on_resize(&mut self, cols: u16, rows: u16) {
        let viewport = viewport_for(cols, rows);
        self.animator.on_resize(viewport);
        self.backdrop.resize(viewport);
    }

    /// Cycle through the configured skill groups.
    fn cycle_group(&mut self) {
        if !self.config.groups.is_empty() {
            self.group = (self.group + 1) % self.config.groups.len();
        }
    }

    /// Cycle through the animation speeds.
    fn cycle_speed(&mut self) {
        self.animator.set_speed(self.animator.speed().next());
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Logical viewport for a terminal grid: one pixel per column, two per
/// row, supersampled by [`PIXEL_SCALE`].
fn viewport_for(cols: u16, rows: u16) -> ViewportState {
    ViewportState::new(cols as f32, rows as f32 * 2.0, PIXEL_SCALE)
}

fn to_color(c: Rgba) -> Color {
    let (r, g, b) = c.to_rgb8();
    Color::Rgb(r, g, b)
}
