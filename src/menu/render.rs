// Menu rendering with Ratatui

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::config::KeyBindings;
use crate::game::input::key_list;

use super::state::MenuState;

const TITLE: [&str; 6] = [
    "███████╗██╗      █████╗ ██████╗ ████████╗███████╗██████╗ ███╗   ███╗",
    "██╔════╝██║     ██╔══██╗██╔══██╗╚══██╔══╝██╔════╝██╔══██╗████╗ ████║",
    "█████╗  ██║     ███████║██████╔╝   ██║   █████╗  ██████╔╝██╔████╔██║",
    "██╔══╝  ██║     ██╔══██║██╔═══╝    ██║   ██╔══╝  ██╔══██╗██║╚██╔╝██║",
    "██║     ███████╗██║  ██║██║        ██║   ███████╗██║  ██║██║ ╚═╝ ██║",
    "╚═╝     ╚══════╝╚═╝  ╚═╝╚═╝        ╚═╝   ╚══════╝╚═╝  ╚═╝╚═╝     ╚═╝",
];

/// Render the main menu
pub fn render_menu(frame: &mut Frame, menu_state: &MenuState, bindings: &KeyBindings) {
    let area = frame.area();

    let bg = Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0)));
    frame.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Title and best score
            Constraint::Min(4),    // Menu items
            Constraint::Length(3), // Controls hint
        ])
        .split(area);

    let title_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let mut title_text = vec![Line::from("")];
    title_text.extend(TITLE.iter().map(|row| Line::from(Span::styled(*row, title_style))));
    title_text.push(Line::from(""));
    title_text.push(Line::from(Span::styled(
        format!("Best: {}", menu_state.best_score),
        Style::default().fg(Color::Gray),
    )));

    let title = Paragraph::new(title_text).alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let menu_items: Vec<Line> = menu_state
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| item_line(item.display_text(), i == menu_state.selected_index))
        .collect();

    let menu = Paragraph::new(menu_items).alignment(Alignment::Center);
    frame.render_widget(menu, chunks[1]);

    let navigate = key_list(&[bindings.menu_up.as_str(), bindings.menu_down.as_str()]);
    let quit = key_list(&[bindings.quit.as_str(), bindings.menu_back.as_str()]);
    let hint = Paragraph::new(hint_line(&[
        (navigate.as_str(), "Navigate"),
        (bindings.menu_select.as_str(), "Select"),
        (quit.as_str(), "Quit"),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[2]);
}

fn item_line(text: &str, selected: bool) -> Line<'static> {
    if selected {
        Line::from(Span::styled(
            format!("> {} <", text),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(text.to_string(), Style::default().fg(Color::White)))
    }
}

/// "key: label" pairs, keys brighter than labels
fn hint_line(pairs: &[(&str, &str)]) -> Line<'static> {
    let spans: Vec<Span> = pairs
        .iter()
        .enumerate()
        .flat_map(|(i, (key, label))| {
            let gap = if i + 1 < pairs.len() { "  " } else { "" };
            [
                Span::styled(key.to_string(), Style::default().fg(Color::Gray)),
                Span::styled(format!(": {}{}", label, gap), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();
    Line::from(spans)
}
