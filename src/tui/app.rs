//! Application State
//!
//! Holds one state machine per screen and applies network completions that
//! arrive from spawned tasks over the event channel.

use crate::api::JobApi;
use crate::config::Config;
use crate::filter::{JOB_TYPES, LOCATIONS};
use crate::models::{ApiResponse, Job};
use crate::navigation::Route;
use crate::state::{CreateJobForm, DetailState, FormField, Generation, ListingState};
use crate::tui::event::AppAction;
use crate::types::ClientResult;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};
use tui_textarea::TextArea;

const SEARCH_PLACEHOLDER: &str = "Search for jobs, companies, or skills...";

/// Which control of the listing screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingFocus {
    #[default]
    Jobs,
    Search,
    Location,
    JobType,
}

impl ListingFocus {
    fn next(self) -> Self {
        match self {
            ListingFocus::Jobs => ListingFocus::Search,
            ListingFocus::Search => ListingFocus::Location,
            ListingFocus::Location => ListingFocus::JobType,
            ListingFocus::JobType => ListingFocus::Jobs,
        }
    }

    fn prev(self) -> Self {
        match self {
            ListingFocus::Jobs => ListingFocus::JobType,
            ListingFocus::Search => ListingFocus::Jobs,
            ListingFocus::Location => ListingFocus::Search,
            ListingFocus::JobType => ListingFocus::Location,
        }
    }
}

/// Completions from spawned network tasks and timers
#[derive(Debug)]
pub enum AppEvent {
    ListingLoaded {
        generation: Generation,
        result: ClientResult<ApiResponse<Vec<Job>>>,
    },
    DetailLoaded {
        generation: Generation,
        result: ClientResult<ApiResponse<Job>>,
    },
    SubmitFinished {
        generation: Generation,
        result: ClientResult<ApiResponse<Job>>,
    },
    BannerExpired(u64),
}

/// Main application state
pub struct App {
    pub config: Config,

    // UI State
    pub route: Route,
    pub show_help: bool,
    pub should_quit: bool,
    /// Email of the saved session, shown in the header
    pub account: Option<String>,

    // Listing
    pub listing: ListingState,
    pub focus: ListingFocus,
    pub search: TextArea<'static>,
    pub location_index: usize,
    pub job_type_index: usize,
    pub selected: usize,

    // Detail
    pub detail: DetailState,
    pub detail_scroll: u16,

    // Create
    pub form: CreateJobForm,
    pub form_field: usize,

    api: Arc<dyn JobApi>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl App {
    pub fn new(config: Config, api: Arc<dyn JobApi>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let banner_window = Duration::from_secs(config.ui.banner_secs);

        Self {
            config,
            route: Route::Listing,
            show_help: false,
            should_quit: false,
            account: None,
            listing: ListingState::new(),
            focus: ListingFocus::default(),
            search: new_search_input(),
            location_index: 0,
            job_type_index: 0,
            selected: 0,
            detail: DetailState::new(),
            detail_scroll: 0,
            form: CreateJobForm::new(banner_window),
            form_field: 0,
            api,
            event_rx,
            event_tx,
        }
    }

    /// Switch screens, tearing down the one being left and mounting the new one
    pub fn navigate(&mut self, route: Route) {
        info!(from = %self.route, to = %route, "Navigate");

        match &self.route {
            Route::CreateJob => self.form.reset(),
            Route::Job(_) => {
                self.detail.load("");
            }
            Route::Listing => {}
        }

        self.route = route.clone();
        match route {
            Route::Listing => self.fetch_listing(),
            Route::Job(id) => {
                self.detail_scroll = 0;
                self.fetch_detail(&id);
            }
            Route::CreateJob => {
                self.form.reset();
                self.form_field = 0;
            }
        }
    }

    /// Drain completed background work
    pub fn poll_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    pub(crate) fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ListingLoaded { generation, result } => {
                if self.listing.finish_fetch(generation, result) {
                    self.clamp_selection();
                }
            }
            AppEvent::DetailLoaded { generation, result } => {
                self.detail.finish_load(generation, result);
            }
            AppEvent::SubmitFinished { generation, result } => {
                let tx = self.event_tx.clone();
                self.form.finish_submit(generation, result, move |token| {
                    let _ = tx.send(AppEvent::BannerExpired(token));
                });
            }
            AppEvent::BannerExpired(token) => {
                self.form.expire_banner(token);
            }
        }
    }

    /// Handle a user action
    pub fn handle_action(&mut self, action: AppAction) {
        if self.show_help {
            // any key closes help
            if !matches!(action, AppAction::Tick) {
                self.show_help = false;
            }
            return;
        }

        match action {
            AppAction::Quit | AppAction::ForceQuit => self.should_quit = true,
            AppAction::ToggleHelp => self.show_help = true,
            AppAction::NewJob => self.navigate(Route::CreateJob),
            AppAction::Tick => {}
            other => match self.route.clone() {
                Route::Listing => self.handle_listing_action(other),
                Route::Job(id) => self.handle_detail_action(other, &id),
                Route::CreateJob => self.handle_form_action(other),
            },
        }
    }

    fn handle_listing_action(&mut self, action: AppAction) {
        match action {
            AppAction::Refresh => self.fetch_listing(),
            AppAction::NextField => self.focus = self.focus.next(),
            AppAction::PrevField => self.focus = self.focus.prev(),
            AppAction::Escape => {
                if self.focus == ListingFocus::Jobs {
                    self.should_quit = true;
                } else {
                    self.focus = ListingFocus::Jobs;
                }
            }
            AppAction::Up => self.selected = self.selected.saturating_sub(1),
            AppAction::Down => {
                self.selected += 1;
                self.clamp_selection();
            }
            AppAction::PageUp => self.selected = self.selected.saturating_sub(5),
            AppAction::PageDown => {
                self.selected += 5;
                self.clamp_selection();
            }
            AppAction::Left => self.cycle_selector(false),
            AppAction::Right => self.cycle_selector(true),
            AppAction::Submit => {
                if let Some(id) = self.listing.select(self.selected).map(str::to_string) {
                    self.navigate(Route::Job(id));
                }
            }
            AppAction::DeleteKey if self.focus == ListingFocus::Search => {
                self.search.delete_char();
                self.apply_search();
            }
            AppAction::Input(key) => self.handle_listing_key(key),
            _ => {}
        }
    }

    fn handle_listing_key(&mut self, key: KeyEvent) {
        if self.focus == ListingFocus::Search {
            self.search.input(key);
            self.apply_search();
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('/') => self.focus = ListingFocus::Search,
            KeyCode::Char('n') => self.navigate(Route::CreateJob),
            KeyCode::Char('r') => self.fetch_listing(),
            KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Char('j') => {
                self.selected += 1;
                self.clamp_selection();
            }
            _ => {}
        }
    }

    fn handle_detail_action(&mut self, action: AppAction, id: &str) {
        match action {
            AppAction::Escape | AppAction::DeleteKey => self.navigate(Route::Listing),
            AppAction::Refresh => self.fetch_detail(id),
            AppAction::Up => self.detail_scroll = self.detail_scroll.saturating_sub(1),
            AppAction::Down => self.detail_scroll = self.detail_scroll.saturating_add(1),
            AppAction::PageUp => self.detail_scroll = self.detail_scroll.saturating_sub(10),
            AppAction::PageDown => self.detail_scroll = self.detail_scroll.saturating_add(10),
            AppAction::Input(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Char('b') => self.navigate(Route::Listing),
                KeyCode::Char('?') => self.show_help = true,
                _ => {}
            },
            _ => {}
        }
    }

    fn handle_form_action(&mut self, action: AppAction) {
        let field = self.current_field();
        match action {
            AppAction::Escape => self.navigate(Route::Listing),
            AppAction::ResetForm => self.form.reset(),
            AppAction::Submit => self.submit_form(),
            AppAction::NextField | AppAction::Down => {
                self.form_field = (self.form_field + 1) % FormField::ALL.len();
            }
            AppAction::PrevField | AppAction::Up => {
                self.form_field = self
                    .form_field
                    .checked_sub(1)
                    .unwrap_or(FormField::ALL.len() - 1);
            }
            AppAction::Left | AppAction::Right if field.is_choice() => {
                self.form.cycle(field);
            }
            AppAction::DeleteKey if field == FormField::Education => {
                self.form.edit(field, "");
            }
            AppAction::DeleteKey if !field.is_choice() => {
                let mut value = self.form.value(field).to_string();
                value.pop();
                self.form.edit(field, value);
            }
            AppAction::Input(key) => self.handle_form_key(field, key),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, field: FormField, key: KeyEvent) {
        let KeyCode::Char(c) = key.code else {
            return;
        };
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return;
        }

        if field.is_choice() {
            if c == ' ' {
                self.form.cycle(field);
            }
            return;
        }

        let mut value = self.form.value(field).to_string();
        value.push(c);
        self.form.edit(field, value);
    }

    pub fn current_field(&self) -> FormField {
        FormField::ALL[self.form_field % FormField::ALL.len()]
    }

    fn fetch_listing(&mut self) {
        let generation = self.listing.begin_fetch();
        let api = Arc::clone(&self.api);
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let result = api.list_jobs().await;
            let _ = tx.send(AppEvent::ListingLoaded { generation, result });
        });
    }

    fn fetch_detail(&mut self, id: &str) {
        let Some(generation) = self.detail.load(id) else {
            return;
        };
        let api = Arc::clone(&self.api);
        let tx = self.event_tx.clone();
        let id = id.to_string();

        tokio::spawn(async move {
            let result = api.get_job(&id).await;
            let _ = tx.send(AppEvent::DetailLoaded { generation, result });
        });
    }

    fn submit_form(&mut self) {
        let Some((generation, draft)) = self.form.begin_submit() else {
            // jump to the first invalid field
            if let Some(field) = self.form.field_errors().keys().next() {
                if let Some(idx) = FormField::ALL.iter().position(|f| f == field) {
                    self.form_field = idx;
                }
            }
            return;
        };
        debug!(title = %draft.title, "Submitting job");

        let api = Arc::clone(&self.api);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = api.create_job(&draft).await;
            let _ = tx.send(AppEvent::SubmitFinished { generation, result });
        });
    }

    fn apply_search(&mut self) {
        let text = self.search.lines().join(" ");
        self.listing.set_search(text);
        self.selected = 0;
    }

    fn cycle_selector(&mut self, forward: bool) {
        let step = |idx: usize, len: usize| {
            if forward {
                (idx + 1) % len
            } else {
                idx.checked_sub(1).unwrap_or(len - 1)
            }
        };

        match self.focus {
            ListingFocus::Location => {
                self.location_index = step(self.location_index, LOCATIONS.len());
                self.listing.set_location(LOCATIONS[self.location_index]);
            }
            ListingFocus::JobType => {
                self.job_type_index = step(self.job_type_index, JOB_TYPES.len());
                self.listing.set_job_type(JOB_TYPES[self.job_type_index]);
            }
            _ => return,
        }
        self.selected = 0;
    }

    fn clamp_selection(&mut self) {
        let len = self.listing.visible().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

fn new_search_input() -> TextArea<'static> {
    let mut input = TextArea::default();
    input.set_cursor_line_style(ratatui::style::Style::default());
    input.set_placeholder_text(SEARCH_PLACEHOLDER);
    input
}
