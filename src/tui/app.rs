//! Main TUI application state machine.
//!
//! Handles:
//! - Switching between the questionnaire and the results
//! - Input event handling
//! - Background advice requests via the worker

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use crate::adapters::{BuiltinCatalog, GeminiAdapter, JsonCatalog};
use crate::application::{load_knowledge, AdviceService, Session, View};
use crate::config::AppConfig;
use crate::ports::{AdviceProvider, KnowledgeSource};
use crate::RespiraError;

use super::ui::{
    questionnaire::{render_questionnaire, QuestionnaireState},
    render_disclaimer,
    results::{render_results, AdviceState, ResultsState},
};
use super::worker::{AdviceProgress, AdviceWorker, AdviceWorkerHandle};

/// Main application state
pub struct App<P = GeminiAdapter>
where
    P: AdviceProvider + 'static,
{
    session: Session,

    advice_service: Arc<AdviceService<P>>,

    questionnaire_state: QuestionnaireState,

    results_state: ResultsState,

    /// In-flight advice request. While set, no second request starts.
    pending_advice: Option<AdviceWorkerHandle>,

    should_quit: bool,
}

impl App<GeminiAdapter> {
    /// Create the application from configuration.
    ///
    /// Loads the JSON catalog when `knowledge_path` is set, the builtin one
    /// otherwise. A missing API key is not an error; advice requests then
    /// resolve to the fallback text.
    ///
    /// # Errors
    /// Returns error if the catalog is unreadable or inconsistent, or the
    /// HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let source: Box<dyn KnowledgeSource> = match &config.knowledge_path {
            Some(path) => Box::new(JsonCatalog::new(path)),
            None => Box::new(BuiltinCatalog::new()),
        };
        let knowledge = load_knowledge(source.as_ref())?;

        let adapter = GeminiAdapter::new(&config.advice).map_err(RespiraError::from)?;
        if !adapter.has_credential() {
            tracing::warn!("No advice API key configured; AI advice will use the fallback text");
        }

        Ok(Self::with_dependencies(
            Session::new(Arc::new(knowledge)),
            Arc::new(AdviceService::new(Arc::new(adapter))),
        ))
    }
}

impl<P> App<P>
where
    P: AdviceProvider + 'static,
{
    /// Create application with injected dependencies.
    pub fn with_dependencies(session: Session, advice_service: Arc<AdviceService<P>>) -> Self {
        Self {
            session,
            advice_service,
            questionnaire_state: QuestionnaireState::default(),
            results_state: ResultsState::default(),
            pending_advice: None,
            should_quit: false,
        }
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            self.poll_advice();

            terminal.draw(|f| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(3)])
                    .split(f.area());

                match self.session.view() {
                    View::Selecting => render_questionnaire(
                        f,
                        chunks[0],
                        &self.questionnaire_state,
                        &self.session,
                    ),
                    View::ShowingResults => {
                        render_results(f, chunks[0], &self.results_state, &self.session)
                    }
                }

                render_disclaimer(f, chunks[1]);
            })?;

            // Short poll keeps the spinner moving
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, key.modifiers);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Drain progress from the advice worker.
    fn poll_advice(&mut self) {
        while let Some(progress) = self.pending_advice.as_ref().and_then(|w| w.try_recv()) {
            match progress {
                AdviceProgress::Requesting => {}
                AdviceProgress::Complete(text) => {
                    self.results_state.advice = AdviceState::Ready(text);
                    self.pending_advice = None;
                }
            }
        }
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.session.view() {
            View::Selecting => self.handle_questionnaire_key(key),
            View::ShowingResults => self.handle_results_key(key),
        }
    }

    fn handle_questionnaire_key(&mut self, key: KeyCode) {
        let len = self.session.knowledge().symptoms().len();
        match key {
            KeyCode::Up | KeyCode::Char('k') => self.questionnaire_state.prev(len),
            KeyCode::Down | KeyCode::Char('j') => self.questionnaire_state.next(len),
            KeyCode::Char(' ') => {
                self.questionnaire_state.message = None;
                self.session.toggle_index(self.questionnaire_state.cursor);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                if self.session.toggle_index(index) {
                    self.questionnaire_state.message = None;
                    self.questionnaire_state.cursor = index;
                }
            }
            KeyCode::Enter => {
                if self.session.submit() {
                    self.questionnaire_state.message = None;
                    self.results_state = ResultsState::default();
                } else {
                    self.questionnaire_state.message =
                        Some("Select at least one symptom".to_string());
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.reset(),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyCode) {
        let others = self.session.results().len().saturating_sub(1);
        match key {
            KeyCode::Up | KeyCode::Char('k') => self.results_state.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.results_state.move_down(others),
            KeyCode::Enter => self.results_state.toggle_expanded(others),
            KeyCode::Char('a') | KeyCode::Char('A') => self.request_advice(),
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char('n') | KeyCode::Char('N')
            | KeyCode::Esc => self.reset(),
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            _ => {}
        }
    }

    /// Start an advice request for the top result.
    ///
    /// Ignored without a top result, while one is in flight, or once advice
    /// has been shown for this result set.
    fn request_advice(&mut self) {
        if self.pending_advice.is_some() || self.results_state.advice != AdviceState::Idle {
            return;
        }
        let Some((disease, names)) = self.session.advice_request() else {
            return;
        };

        self.results_state.advice = AdviceState::Loading {
            started_at: Instant::now(),
        };
        self.pending_advice = Some(AdviceWorker::spawn(
            Arc::clone(&self.advice_service),
            disease,
            names,
        ));
    }

    /// Back to an empty questionnaire. An in-flight advice result is discarded.
    fn reset(&mut self) {
        self.pending_advice = None;
        self.session.reset();
        self.questionnaire_state = QuestionnaireState::default();
        self.results_state = ResultsState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{MockProvider, FALLBACK_ADVICE};
    use crate::ports::AdviceError;
    use std::thread;

    fn app_with(provider: MockProvider) -> App<MockProvider> {
        let kb = BuiltinCatalog::new().load().expect("Builtin catalog should validate");
        App::with_dependencies(
            Session::new(Arc::new(kb)),
            Arc::new(AdviceService::new(Arc::new(provider))),
        )
    }

    fn ok_app() -> App<MockProvider> {
        app_with(MockProvider::new(|| Ok("Drink warm fluids.".to_string())))
    }

    fn press(app: &mut App<MockProvider>, key: KeyCode) {
        app.handle_key(key, KeyModifiers::NONE);
    }

    fn wait_for_advice(app: &mut App<MockProvider>) {
        while app.pending_advice.is_some() {
            app.poll_advice();
            thread::yield_now();
        }
    }

    #[test]
    fn test_enter_without_selection_shows_message() {
        let mut app = ok_app();
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.view(), View::Selecting);
        assert_eq!(
            app.questionnaire_state.message.as_deref(),
            Some("Select at least one symptom")
        );
    }

    #[test]
    fn test_space_toggles_symptom_under_cursor() {
        let mut app = ok_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.session.selected().contains("B2"));

        press(&mut app, KeyCode::Char(' '));
        assert!(app.session.selected().is_empty());
    }

    #[test]
    fn test_digit_toggle_and_submit() {
        let mut app = ok_app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.view(), View::ShowingResults);
        assert_eq!(
            app.session.top().map(|r| r.disease.code.as_str()),
            Some("P2")
        );
    }

    #[test]
    fn test_advice_request_completes() {
        let mut app = ok_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('a'));

        assert!(matches!(app.results_state.advice, AdviceState::Loading { .. }));
        wait_for_advice(&mut app);
        assert_eq!(
            app.results_state.advice,
            AdviceState::Ready("Drink warm fluids.".to_string())
        );
    }

    #[test]
    fn test_advice_failure_shows_fallback() {
        let mut app = app_with(MockProvider::new(|| Err(AdviceError::Timeout(30))));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('a'));

        wait_for_advice(&mut app);
        assert_eq!(
            app.results_state.advice,
            AdviceState::Ready(FALLBACK_ADVICE.to_string())
        );
    }

    #[test]
    fn test_second_advice_request_is_ignored_while_busy() {
        let provider = Arc::new(MockProvider::new(|| Ok("tips".to_string())));
        let kb = BuiltinCatalog::new().load().expect("Builtin catalog should validate");
        let mut app = App::with_dependencies(
            Session::new(Arc::new(kb)),
            Arc::new(AdviceService::new(Arc::clone(&provider))),
        );

        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('a'));
        wait_for_advice(&mut app);
        press(&mut app, KeyCode::Char('a'));

        assert_eq!(provider.prompts.lock().expect("prompts lock").len(), 1);
    }

    #[test]
    fn test_reset_discards_pending_advice() {
        let mut app = ok_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('r'));

        assert!(app.pending_advice.is_none());
        assert_eq!(app.results_state.advice, AdviceState::Idle);
        assert_eq!(app.session.view(), View::Selecting);
        assert!(app.session.selected().is_empty());
    }

    #[test]
    fn test_new_reports_invalid_catalog_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = AppConfig {
            knowledge_path: Some(dir.path().join("missing.json")),
            ..AppConfig::from_lookup(|_| None)
        };

        let err = App::new(&config).err().expect("Missing catalog should fail");
        assert!(err.to_string().starts_with("Knowledge base error"));
    }

    #[test]
    fn test_new_builds_without_credential() {
        let app = App::new(&AppConfig::from_lookup(|_| None)).expect("App should build");
        assert_eq!(app.session.knowledge().diseases().len(), 5);
        assert!(app.pending_advice.is_none());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = ok_app();
        app.handle_key(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(app.should_quit);

        let mut app = ok_app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
