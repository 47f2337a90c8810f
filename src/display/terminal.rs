use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::{self, stdout};
use std::time::Duration;
use tracing::warn;

use crate::color::ColorScheme;
use crate::config::Config;
use crate::geo::{GeoOrigin, GeoProjector};
use crate::map::{self, MapDocument};
use crate::plot::PointStore;
use crate::visualizer::{Field, ViewState};

pub async fn run(config: Config) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, config: Config) -> Result<()> {
    let mut store = PointStore::new(config.plot.default_bound, config.plot.padding);
    let projector = GeoProjector::new(config.geo.offset_scale);
    let mut view = ViewState::new(&config);
    let mut scheme = config.display.color_scheme;

    // The poll timeout doubles as the sweep timer, like the original
    // fixed-interval animation callback.
    let tick_rate = Duration::from_millis(config.display.tick_ms);

    loop {
        terminal.draw(|frame| {
            let area = frame.area();

            let block = ratatui::widgets::Block::default().style(Style::default().bg(Color::Reset));
            frame.render_widget(block, area);

            view.render(frame, area, &store, &scheme);
            render_hints(frame, area, &scheme);
        })?;

        view.tick();

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                match key {
                    KeyEvent {
                        code: KeyCode::Char('q'),
                        ..
                    }
                    | KeyEvent {
                        code: KeyCode::Char('c'),
                        modifiers: KeyModifiers::CONTROL,
                        ..
                    } => {
                        break;
                    }
                    KeyEvent {
                        code: KeyCode::Tab, ..
                    }
                    | KeyEvent {
                        code: KeyCode::Down,
                        ..
                    } => {
                        view.form.next();
                    }
                    KeyEvent {
                        code: KeyCode::BackTab,
                        ..
                    }
                    | KeyEvent {
                        code: KeyCode::Up, ..
                    } => {
                        view.form.prev();
                    }
                    KeyEvent {
                        code: KeyCode::Backspace,
                        ..
                    } => {
                        view.form.backspace();
                    }
                    KeyEvent {
                        code: KeyCode::Enter,
                        ..
                    } => {
                        add_point(&mut store, &mut view);
                    }
                    KeyEvent {
                        code: KeyCode::Char('c'),
                        modifiers: KeyModifiers::NONE,
                        ..
                    } => {
                        store.clear();
                        view.set_info("Cleared all points");
                    }
                    KeyEvent {
                        code: KeyCode::Char('m'),
                        ..
                    } => {
                        export_map(&config, &store, &projector, &mut view);
                    }
                    KeyEvent {
                        code: KeyCode::Char('s'),
                        ..
                    } => {
                        scheme = scheme.next();
                        view.set_info(format!("Color scheme: {}", scheme.name()));
                        if let Err(e) = Config::persist_scheme(scheme) {
                            warn!("Could not persist color scheme: {}", e);
                        }
                    }
                    KeyEvent {
                        code: KeyCode::Char(c),
                        ..
                    } => {
                        view.form.push_char(c);
                    }
                    _ => {}
                }
            }
        }
    }

    Ok(())
}

/// Validate the radius/angle fields and append a point. Both outcomes land
/// in the status line; a failure changes nothing.
fn add_point(store: &mut PointStore, view: &mut ViewState) {
    match store.add(view.form.value(Field::Angle), view.form.value(Field::Radius)) {
        Ok(point) => {
            view.set_info(format!(
                "Added point {} (r={:.2}, θ={:.1}°)",
                store.len(),
                point.radius,
                point.angle.to_degrees()
            ));
        }
        Err(e) => view.set_error(e.to_string()),
    }
}

/// Project the full point sequence around the entered origin and write the
/// map document. Any failure is reported without touching the store.
fn export_map(config: &Config, store: &PointStore, projector: &GeoProjector, view: &mut ViewState) {
    let origin = match GeoOrigin::parse(
        view.form.value(Field::Latitude),
        view.form.value(Field::Longitude),
    ) {
        Ok(origin) => origin,
        Err(e) => {
            view.set_error(e.to_string());
            return;
        }
    };

    let markers = projector.project(store.points(), origin);
    let document = MapDocument::render(origin, &markers, config.export.zoom);

    let directory = match &config.export.directory {
        Some(dir) => dir.clone(),
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                view.set_error(format!("Cannot resolve output directory: {}", e));
                return;
            }
        },
    };

    let path = directory.join(map::default_filename(chrono::Local::now()));
    match document.save(&path) {
        Ok(()) => view.set_info(format!("Map saved to {}", path.display())),
        Err(e) => view.set_error(format!("{:#}", e)),
    }
}

fn render_hints(frame: &mut Frame, area: Rect, scheme: &ColorScheme) {
    let hints = " [tab] field | [enter] add | [c]lear | [m]ap export | [s]cheme | [q]uit ";

    let (dr, dg, db) = scheme.dim_color();
    let y = area.y + area.height.saturating_sub(1);

    for (i, ch) in hints.chars().enumerate() {
        if i < area.width as usize {
            let cell = frame.buffer_mut().cell_mut((area.x + i as u16, y));
            if let Some(cell) = cell {
                cell.set_char(ch);
                cell.set_fg(Color::Rgb(dr, dg, db));
            }
        }
    }
}
