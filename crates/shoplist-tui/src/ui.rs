//! UI rendering with Ratatui.

use crate::app::{App, AppState, DialogField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use shoplist_core::DialogVisibility;

/// Main render function.
pub fn render(frame: &mut Frame, app: &App) {
    if app.state == AppState::Quit {
        return;
    }

    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    render_list(frame, app, chunks[0]);
    render_help(frame, app, chunks[1]);

    match app.controller.dialog() {
        DialogVisibility::None => {}
        DialogVisibility::Create => {
            let (title, hint) = (" Add Shopping Item ", "Enter: Add | Esc: Cancel");
            render_dialog(frame, app, title, hint, area);
        }
        DialogVisibility::Edit => {
            let (title, hint) = (" Edit Shopping Item ", "Enter: Save | Esc: Discard");
            render_dialog(frame, app, title, hint, area);
        }
    }
}

/// Render the item list.
fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let border_color = if app.in_dialog() {
        Color::DarkGray
    } else {
        Color::Cyan
    };

    let block = Block::default()
        .title(format!(" 🛒 {} ", app.config.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let items = app.controller.items();
    if items.is_empty() {
        let message = Paragraph::new("Nothing here yet. Press 'a' to add an item")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(message, centered_rect(inner.width, 1, inner));
        return;
    }

    let rows: Vec<ListItem> = items
        .iter()
        .map(|item| {
            let mut spans = Vec::new();
            if app.config.show_item_ids {
                spans.push(Span::styled(
                    format!("#{:<4}", item.id),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            spans.push(Span::styled(item.name.as_str(), Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!("  x {}", item.quantity),
                Style::default().fg(Color::Yellow),
            ));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(rows).highlight_style(
        Style::default()
            .bg(Color::Rgb(60, 60, 80))
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    // Stateful so the list scrolls to keep the selection visible
    let mut state = ListState::default().with_selected(Some(app.selected_index));
    frame.render_stateful_widget(list, inner, &mut state);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let text = if app.in_dialog() {
        "Tab: switch field | Enter: confirm | Esc: close"
    } else {
        "a: Add item | Enter/e: edit | j/k: move | q: quit"
    };
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

/// Render the create/edit dialog overlay.
fn render_dialog(frame: &mut Frame, app: &App, title: &str, hint: &str, area: Rect) {
    let dialog_width = 50.min(area.width.saturating_sub(4));
    let dialog_height = 8.min(area.height);
    let dialog_area = centered_rect(dialog_width, dialog_height, area);

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Name
            Constraint::Length(1), // Quantity
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hint
        ])
        .split(inner);

    let draft = app.controller.draft();
    render_input(frame, "Name", &draft.name, app.field == DialogField::Name, chunks[0]);
    render_input(
        frame,
        "Quantity",
        &draft.quantity,
        app.field == DialogField::Quantity,
        chunks[1],
    );

    let hint = Paragraph::new(hint)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[3]);
}

fn render_input(frame: &mut Frame, label: &str, value: &str, focused: bool, area: Rect) {
    let (marker, color) = if focused {
        ("▸ ", Color::Yellow)
    } else {
        ("  ", Color::White)
    };

    let label = format!("{:<10}", format!("{}:", label));
    let mut spans = vec![
        Span::styled(marker, Style::default().fg(color)),
        Span::styled(label, Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(color)),
    ];
    if focused {
        spans.push(Span::styled(
            "_",
            Style::default().fg(color).add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Helper to create a centered rectangle.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
