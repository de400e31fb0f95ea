//! Ranked results view with the optional advice panel.

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::application::Session;
use crate::domain::DiagnosisResult;
use crate::tui::styles::MedicalTheme;

use super::key_hints;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// State of the advice panel under the top result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AdviceState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A request is in flight
    Loading { started_at: Instant },
    /// Generated advice or the fallback text
    Ready(String),
}

/// Cursor over the "other possibilities" list and the advice panel.
#[derive(Debug, Default)]
pub struct ResultsState {
    /// Index into the results after the top one
    pub cursor: usize,
    /// Row whose description and treatment are unfolded
    pub expanded: Option<usize>,
    pub advice: AdviceState,
}

impl ResultsState {
    pub fn move_down(&mut self, len: usize) {
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Fold or unfold the row under the cursor.
    pub fn toggle_expanded(&mut self, len: usize) {
        if self.cursor >= len {
            return;
        }
        self.expanded = match self.expanded {
            Some(row) if row == self.cursor => None,
            _ => Some(self.cursor),
        };
    }
}

/// Render the results screen
pub fn render_results(f: &mut Frame, area: Rect, state: &ResultsState, session: &Session) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(f, chunks[0], session);

    match session.top() {
        Some(top) => render_content(f, chunks[1], state, top, &session.results()[1..], session),
        None => render_no_match(f, chunks[1]),
    }

    render_footer(f, chunks[2], state, session.top().is_some());
}

fn render_header(f: &mut Frame, area: Rect, session: &Session) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" Analysis Result", MedicalTheme::title()),
        Span::styled(" │ based on ", MedicalTheme::text_muted()),
        Span::styled(session.selected_names().join(", "), MedicalTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(header, area);
}

fn render_no_match(f: &mut Frame, area: Rect) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("No matching condition", MedicalTheme::warning())),
        Line::from(""),
        Line::from(Span::styled(
            "The selected symptoms do not fit any respiratory condition in the knowledge base.",
            MedicalTheme::text(),
        )),
        Line::from(Span::styled(
            "If you feel unwell, please consult a doctor.",
            MedicalTheme::text_secondary(),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(MedicalTheme::warning()),
    );

    f.render_widget(content, area);
}

fn render_content(
    f: &mut Frame,
    area: Rect,
    state: &ResultsState,
    top: &DiagnosisResult,
    others: &[DiagnosisResult],
    session: &Session,
) {
    let others_height = if others.is_empty() { 0 } else { 6 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(12),           // Top result
            Constraint::Min(5),               // Advice
            Constraint::Length(others_height), // Other possibilities
        ])
        .split(area);

    render_top(f, chunks[0], top, session);
    render_advice(f, chunks[1], &state.advice);
    if !others.is_empty() {
        render_others(f, chunks[2], state, others);
    }
}

fn render_top(f: &mut Frame, area: Rect, top: &DiagnosisResult, session: &Session) {
    let block = Block::default()
        .title(Span::styled(" Most likely ", MedicalTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(MedicalTheme::border_focused());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Banner
            Constraint::Length(3), // Gauge
            Constraint::Min(0),    // Details
        ])
        .split(inner);

    let strength = top.strength();
    let banner = Paragraph::new(Line::from(vec![
        Span::styled(format!(" {} ", top.disease.name), MedicalTheme::banner()),
        Span::styled(
            format!("  {strength}"),
            MedicalTheme::match_strength(strength).add_modifier(Modifier::BOLD),
        ),
    ]));
    f.render_widget(banner, chunks[0]);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(Span::styled(" Symptom match ", MedicalTheme::text_secondary()))
                .borders(Borders::ALL)
                .border_style(MedicalTheme::border()),
        )
        .gauge_style(MedicalTheme::match_strength(strength))
        .percent(top.rounded_percentage())
        .label(format!("{}%", top.rounded_percentage()));
    f.render_widget(gauge, chunks[1]);

    let matched = session
        .knowledge()
        .symptom_names(top.matched_symptoms.iter().map(String::as_str))
        .join(", ");
    let details = Paragraph::new(vec![
        Line::from(Span::styled(strength.description(), MedicalTheme::text_muted())),
        Line::from(Span::styled(top.disease.description.clone(), MedicalTheme::text())),
        Line::from(vec![
            Span::styled("Treatment: ", MedicalTheme::text_secondary()),
            Span::styled(top.disease.treatment.clone(), MedicalTheme::text()),
        ]),
        Line::from(vec![
            Span::styled("Matched: ", MedicalTheme::text_secondary()),
            Span::styled(matched, MedicalTheme::text_muted()),
        ]),
    ])
    .wrap(Wrap { trim: true });
    f.render_widget(details, chunks[2]);
}

fn render_advice(f: &mut Frame, area: Rect, advice: &AdviceState) {
    let block = Block::default()
        .title(Span::styled(" AI advice ", MedicalTheme::advice()))
        .borders(Borders::ALL)
        .border_style(MedicalTheme::advice());

    let content = match advice {
        AdviceState::Idle => Paragraph::new(Line::from(vec![
            Span::styled("[A] ", MedicalTheme::key_hint()),
            Span::styled(
                "Get AI analysis & home-care tips",
                MedicalTheme::text_secondary(),
            ),
        ])),
        AdviceState::Loading { started_at } => {
            let frame = (started_at.elapsed().as_millis() / 120) as usize % SPINNER.len();
            Paragraph::new(Line::from(vec![
                Span::styled(format!("{} ", SPINNER[frame]), MedicalTheme::advice()),
                Span::styled("Asking the assistant...", MedicalTheme::text_muted()),
            ]))
        }
        AdviceState::Ready(text) => Paragraph::new(
            text.lines()
                .map(|line| Line::from(Span::styled(line.to_string(), MedicalTheme::text())))
                .collect::<Vec<_>>(),
        )
        .wrap(Wrap { trim: false }),
    };

    f.render_widget(content.block(block), area);
}

fn render_others(f: &mut Frame, area: Rect, state: &ResultsState, others: &[DiagnosisResult]) {
    let items: Vec<ListItem> = others
        .iter()
        .enumerate()
        .map(|(i, result)| {
            let strength = result.strength();
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    format!("{:>3}% ", result.rounded_percentage()),
                    MedicalTheme::match_strength(strength),
                ),
                Span::styled(result.disease.name.clone(), MedicalTheme::text()),
                Span::styled(format!("  ({})", result.disease.code), MedicalTheme::text_muted()),
            ])];
            if state.expanded == Some(i) {
                lines.push(Line::from(Span::styled(
                    format!("      {}", result.disease.description),
                    MedicalTheme::text_secondary(),
                )));
                lines.push(Line::from(Span::styled(
                    format!("      Treatment: {}", result.disease.treatment),
                    MedicalTheme::text_secondary(),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(Span::styled(" Other possibilities ", MedicalTheme::subtitle()))
                .borders(Borders::ALL)
                .border_style(MedicalTheme::border()),
        )
        .highlight_style(MedicalTheme::selected())
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default().with_selected(Some(state.cursor));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_footer(f: &mut Frame, area: Rect, state: &ResultsState, has_top: bool) {
    let mut hints = vec![("↑↓", "Move"), ("Enter", "Details")];
    if has_top && state.advice == AdviceState::Idle {
        hints.push(("A", "AI advice"));
    }
    hints.extend([("R", "New check"), ("Q", "Quit")]);

    let footer = Paragraph::new(key_hints(&hints)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{BuiltinCatalog, JsonCatalog};
    use crate::ports::KnowledgeSource;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn session_with(codes: &[&str]) -> Session {
        let kb = BuiltinCatalog::new().load().expect("Builtin catalog should validate");
        let mut session = Session::new(Arc::new(kb));
        for code in codes {
            session.toggle(code);
        }
        session.submit();
        session
    }

    fn render_to_string(state: &ResultsState, session: &Session) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).expect("terminal");
        terminal
            .draw(|f| render_results(f, f.area(), state, session))
            .expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_top_result_and_advice_hint() {
        let session = session_with(&["B2"]);
        let screen = render_to_string(&ResultsState::default(), &session);

        assert!(screen.contains("Flu / Common Cold"));
        assert!(screen.contains("100%"));
        assert!(screen.contains("Get AI analysis"));
        assert!(screen.contains("Other possibilities"));
    }

    #[test]
    fn test_renders_match_strength_description() {
        let session = session_with(&["B1", "B4", "B6"]);
        let screen = render_to_string(&ResultsState::default(), &session);

        assert!(screen.contains("Tuberculosis (TB)"));
        assert!(screen.contains("Strong match - most characteristic symptoms reported"));
    }

    #[test]
    fn test_renders_no_match_when_nothing_scores() {
        let kb = JsonCatalog::parse(
            r#"{
                "symptoms": [
                    {"id": "s1", "code": "S1", "name": "Sneezing"},
                    {"id": "s2", "code": "S2", "name": "Hiccups"}
                ],
                "diseases": [
                    {"id": "d", "code": "D", "name": "Hay fever",
                     "requiredSymptoms": ["S1"], "description": "x", "treatment": "y"}
                ]
            }"#,
        )
        .expect("Catalog should validate");
        let mut session = Session::new(Arc::new(kb));
        session.toggle("S2");
        assert!(session.submit());

        assert!(session.results().is_empty());
        assert!(session.advice_request().is_none());

        let screen = render_to_string(&ResultsState::default(), &session);
        assert!(screen.contains("No matching condition"));
        assert!(!screen.contains("AI advice"));
        assert!(!screen.contains("Get AI analysis"));
    }

    #[test]
    fn test_renders_ready_advice() {
        let session = session_with(&["B3", "B4"]);
        let state = ResultsState {
            advice: AdviceState::Ready("Use your inhaler.".to_string()),
            ..ResultsState::default()
        };
        let screen = render_to_string(&state, &session);

        assert!(screen.contains("Asthma"));
        assert!(screen.contains("Use your inhaler."));
        assert!(!screen.contains("Get AI analysis"));
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut state = ResultsState::default();
        state.move_up();
        assert_eq!(state.cursor, 0);
        state.move_down(2);
        state.move_down(2);
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_toggle_expanded_folds_and_unfolds() {
        let mut state = ResultsState::default();
        state.toggle_expanded(0);
        assert_eq!(state.expanded, None);

        state.toggle_expanded(3);
        assert_eq!(state.expanded, Some(0));
        state.toggle_expanded(3);
        assert_eq!(state.expanded, None);
    }
}
