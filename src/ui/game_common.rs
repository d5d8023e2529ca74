//! Shared layout pieces: outer frame, status bar, info panel, banners.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas returned by `create_game_layout`.
pub struct GameLayout {
    /// Play area, top left inside the outer border.
    pub content: Rect,
    /// Two-line status bar under the play area.
    pub status_bar: Rect,
    /// Right-hand info panel.
    pub info_panel: Rect,
}

/// Outer border plus the content / status bar / info panel split.
///
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ──────┐
/// │   [content area]                │  [info]     │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    content_min_height: u16,
    info_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(info_panel_width)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(content_min_height), Constraint::Length(2)])
        .split(h_chunks[0]);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Two-line status bar: a centered message, then `[key] action` pairs.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Info panel border; returns the inner area.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Compact banner at the bottom of `area`; the play field stays visible above it.
pub fn render_banner(
    frame: &mut Frame,
    area: Rect,
    color: Color,
    title: &str,
    message: &str,
    hint: &str,
) {
    let banner_height: u16 = 4;
    if area.height < banner_height || area.width < 8 {
        return;
    }
    let banner_area = Rect {
        x: area.x,
        y: area.y + area.height - banner_height,
        width: area.width,
        height: banner_height,
    };

    frame.render_widget(Clear, banner_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(banner_area);
    frame.render_widget(block, banner_area);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled(message, Style::default().fg(Color::White)),
        ]),
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}
