//! Symptom selection view.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::application::Session;
use crate::tui::styles::MedicalTheme;

use super::key_hints;

/// Cursor and transient message for the symptom list.
#[derive(Debug, Default)]
pub struct QuestionnaireState {
    pub cursor: usize,
    pub message: Option<String>,
}

impl QuestionnaireState {
    /// Move the cursor down, wrapping at `len`.
    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    /// Move the cursor up, wrapping at `len`.
    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 { len - 1 } else { self.cursor - 1 };
    }
}

/// Render the questionnaire
pub fn render_questionnaire(f: &mut Frame, area: Rect, state: &QuestionnaireState, session: &Session) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(0),    // Symptom list
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(f, chunks[0]);
    render_symptom_list(f, chunks[1], state, session);
    render_footer(f, chunks[2], state, session);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(" Respira", MedicalTheme::title()),
            Span::styled(" │ ", MedicalTheme::text_muted()),
            Span::styled("Respiratory Health Check", MedicalTheme::text_secondary()),
            Span::styled("  · forward chaining", MedicalTheme::text_muted()),
        ]),
        Line::from(Span::styled(
            " Select every symptom you are experiencing, then analyze.",
            MedicalTheme::text_secondary(),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_symptom_list(f: &mut Frame, area: Rect, state: &QuestionnaireState, session: &Session) {
    let items: Vec<ListItem> = session
        .knowledge()
        .symptoms()
        .iter()
        .enumerate()
        .map(|(i, symptom)| {
            let checked = session.selected().contains(&symptom.code);
            let marker = if checked {
                Span::styled("[x] ", MedicalTheme::checked())
            } else {
                Span::styled("[ ] ", MedicalTheme::text_muted())
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>2}. ", i + 1), MedicalTheme::text_muted()),
                marker,
                Span::styled(format!("{:<4}", symptom.code), MedicalTheme::text_muted()),
                Span::styled(symptom.name.clone(), MedicalTheme::text()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(Span::styled(
                    " Symptoms (select all that apply) ",
                    MedicalTheme::subtitle(),
                ))
                .borders(Borders::ALL)
                .border_style(MedicalTheme::border_focused()),
        )
        .highlight_style(MedicalTheme::selected())
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default().with_selected(Some(state.cursor));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_footer(f: &mut Frame, area: Rect, state: &QuestionnaireState, session: &Session) {
    let count = session.selected().len();
    let mut line = vec![
        Span::styled(format!(" {count}"), MedicalTheme::title()),
        Span::styled(" selected   ", MedicalTheme::text_secondary()),
    ];

    if let Some(message) = &state.message {
        line.push(Span::styled(format!("! {message}"), MedicalTheme::warning()));
    } else {
        line.extend(
            key_hints(&[
                ("↑↓", "Move"),
                ("Space", "Toggle"),
                ("1-9", "Toggle #"),
                ("Enter", "Analyze"),
                ("R", "Clear"),
                ("Q", "Quit"),
            ])
            .spans,
        );
    }

    let footer = Paragraph::new(Line::from(line)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_wraps() {
        let mut state = QuestionnaireState::default();
        state.prev(7);
        assert_eq!(state.cursor, 6);
        state.next(7);
        assert_eq!(state.cursor, 0);
        state.next(7);
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_cursor_ignores_empty_catalog() {
        let mut state = QuestionnaireState::default();
        state.next(0);
        state.prev(0);
        assert_eq!(state.cursor, 0);
    }
}
