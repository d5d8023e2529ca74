//! Terminal rendering of a game snapshot.

use crate::game::{GameMode, GameView, Hitboxes, Player};
use crate::ui::game_common::{
    create_game_layout, render_banner, render_info_panel_frame, render_status_bar,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const INFO_PANEL_WIDTH: u16 = 22;

const CONTROLS: [(&str, &str); 3] = [
    ("[Space/Up/Enter]", "Flap"),
    ("[D]", "Hitboxes"),
    ("[Esc/Q]", "Quit"),
];

/// What occupies one terminal cell of the play area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Sky,
    Bird,
    Barrier,
    Ground,
}

/// Classify the world point at the center of a cell.
pub fn classify(view: &GameView<'_>, wx: f64, wy: f64) -> Cell {
    let config = view.config;
    let player = &view.run.player;

    if wx >= player.x
        && wx < player.x + config.player_width
        && wy >= player.y
        && wy < player.y + config.player_height
    {
        return Cell::Bird;
    }
    if wy >= config.floor_line {
        return Cell::Ground;
    }
    for obstacle in &view.run.obstacles {
        if wx >= obstacle.x && wx < obstacle.right_edge(config) {
            if wy < obstacle.gap_top(config) || wy >= obstacle.bottom_height {
                return Cell::Barrier;
            }
            break;
        }
    }
    Cell::Sky
}

fn in_any_hitbox(hitboxes: &Hitboxes, wx: f64, wy: f64) -> bool {
    hitboxes.player.contains_point(wx, wy)
        || hitboxes
            .obstacles
            .iter()
            .any(|o| o.top.contains_point(wx, wy) || o.bottom.contains_point(wx, wy))
}

/// Glyph for the bird depending on its tilt.
pub fn bird_glyph(player: &Player) -> &'static str {
    let tilt = player.tilt_degrees();
    if tilt >= 15.0 {
        "▲"
    } else if tilt <= -45.0 {
        "▼"
    } else {
        "►"
    }
}

/// Render the whole game screen.
pub fn render_game(frame: &mut Frame, area: Rect, view: &GameView<'_>, show_hitboxes: bool) {
    let border_color = if view.run.crashed && view.mode == GameMode::Inactive {
        Color::Red
    } else {
        Color::Cyan
    };
    let layout = create_game_layout(
        frame,
        area,
        " Flapper ",
        border_color,
        10,
        INFO_PANEL_WIDTH,
    );

    render_play_area(frame, layout.content, view, show_hitboxes);
    render_status(frame, layout.status_bar, view);
    render_info_panel(frame, layout.info_panel, view, show_hitboxes);

    if view.is_idle() {
        render_banner(
            frame,
            layout.content,
            Color::Yellow,
            "FLAPPER",
            "Fly through the gaps",
            "Press Space to start",
        );
    } else if view.mode == GameMode::Inactive {
        let message = crash_message(view);
        render_banner(
            frame,
            layout.content,
            Color::Red,
            "CRASH!",
            &message,
            "Press Space to fly again",
        );
    }
}

/// Game-over line; only a run that went above its starting best is a new best.
fn crash_message(view: &GameView<'_>) -> String {
    if view.run.new_best {
        format!("{} pipes - new best!", view.run.score)
    } else {
        format!("{} pipes", view.run.score)
    }
}

/// Play field scaled from world units to the available cells.
fn render_play_area(frame: &mut Frame, area: Rect, view: &GameView<'_>, show_hitboxes: bool) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let config = view.config;
    let cell_w = config.play_width / width as f64;
    let cell_h = config.play_height / height as f64;
    let hitboxes = show_hitboxes.then(|| view.hitboxes());
    let bird = bird_glyph(&view.run.player);

    // The sprite may be thinner than a cell; always draw its center cell.
    let player = &view.run.player;
    let bird_center = (
        ((player.x + config.player_width / 2.0) / cell_w) as usize,
        ((player.y + config.player_height / 2.0) / cell_h) as usize,
    );

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let wy = (row as f64 + 0.5) * cell_h;
        let mut spans = Vec::with_capacity(width);
        for col in 0..width {
            let wx = (col as f64 + 0.5) * cell_w;
            let mut cell = classify(view, wx, wy);
            if (col, row) == bird_center && player.y < config.floor_line {
                cell = Cell::Bird;
            }

            let (glyph, mut style) = match cell {
                Cell::Bird => (
                    bird,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Cell::Barrier => ("█", Style::default().fg(Color::Green)),
                Cell::Ground => ("▒", Style::default().fg(Color::Rgb(160, 120, 60))),
                Cell::Sky => (" ", Style::default()),
            };

            if let Some(hb) = &hitboxes {
                if in_any_hitbox(hb, wx, wy) {
                    style = style.bg(Color::Red);
                }
            }
            spans.push(Span::styled(glyph, style));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status(frame: &mut Frame, area: Rect, view: &GameView<'_>) {
    let (text, color) = match view.mode {
        GameMode::Active => (format!("Score: {}", view.run.score), Color::Green),
        GameMode::Inactive if view.run.crashed => (
            format!("Crashed with {} - best {}", view.run.score, view.high_score),
            Color::Red,
        ),
        GameMode::Inactive => ("Press Space to start!".to_string(), Color::Yellow),
    };
    render_status_bar(frame, area, &text, color, &CONTROLS);
}

fn render_info_panel(frame: &mut Frame, area: Rect, view: &GameView<'_>, show_hitboxes: bool) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let row = |name: &'static str, value: String, color: Color| {
        Line::from(vec![
            Span::styled(name, label),
            Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ])
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", view.config.preset.name()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        row(" Score: ", view.run.score.to_string(), Color::White),
        row(" Best:  ", view.high_score.to_string(), Color::Yellow),
        Line::from(""),
        row(" Speed: ", format!("{}", view.config.scroll_speed), Color::Green),
        row(" Gap:   ", format!("{}", view.config.gap), Color::Green),
        Line::from(""),
        row(
            " Hitbox:",
            if show_hitboxes { " on" } else { " off" }.to_string(),
            Color::Red,
        ),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
