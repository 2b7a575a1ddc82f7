//! Application state and navigation.
//!
//! Everything here is synchronous and takes the current [`Instant`] as an
//! argument, so the runtime owns the clock and tests can drive time.

mod input;
mod screen;
mod section;
mod toast;

pub use screen::*;
pub use section::Section;
pub use toast::{Toast, Toasts};

use std::time::Instant;

use crm_lib::{CrmError, Form, Notice, Session, Store, authenticate};
use crm_ui::{Buffer, Theme};
use log::{debug, info, warn};

use crate::config::{Config, ConfigError, StartPage};
use crate::tables::{self, PageTable};
use crate::view::{self, Hits};

/// Screens kept for `Esc`.
const HISTORY_LIMIT: usize = 32;

pub struct App {
    config: Config,
    theme: Theme,
    store: Store,
    session: Option<Session>,
    screen: Screen,
    /// Previous screens, most recent last.
    history: Vec<Screen>,
    focus: Focus,
    /// Highlighted sidebar entry.
    sidebar_cursor: usize,
    toasts: Toasts,
    /// Clickable regions of the last frame.
    hits: Hits,
    quit: bool,
}

impl App {
    pub fn new(config: Config, store: Store, now: Instant) -> Result<Self, ConfigError> {
        let theme = Theme::new(config.theme_mode()?);
        let start = config.start_page()?;

        let mut app = Self {
            config,
            theme,
            store,
            session: None,
            screen: Screen::Login(FormScreen::login()),
            history: Vec::new(),
            focus: Focus::Table,
            sidebar_cursor: 0,
            toasts: Toasts::default(),
            hits: Hits::default(),
            quit: false,
        };
        if let StartPage::Section(section) = start {
            app.screen = app.section_screen(section, now);
            app.sync_sidebar();
        }
        info!("starting on {:?}", start);
        Ok(app)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn sidebar_cursor(&self) -> usize {
        self.sidebar_cursor
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn hits(&self) -> &Hits {
        &self.hits
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn notify(&mut self, notice: Notice, now: Instant) {
        self.toasts.push(notice, now);
    }

    /// The current screen's table, built from the store.
    pub fn page_table(&self) -> Option<Box<dyn PageTable>> {
        tables::for_screen(&self.screen, &self.store)
    }

    /// Paint a frame and remember where things were drawn.
    pub fn render(&mut self, buf: &mut Buffer) {
        let hits = view::render(self, buf);
        if let Some(state) = self.screen.table_state_mut() {
            state.offset = hits.table_offset;
        }
        self.hits = hits;
    }

    /// Advance timers: finish simulated loading and expire toasts.
    /// Returns whether anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.toasts.expire(now);
        if let Screen::List(list) = &mut self.screen
            && list.loading_until.is_some_and(|until| until <= now)
        {
            debug!("{} loaded", list.section.label());
            list.loading_until = None;
            changed = true;
        }
        changed
    }

    /// When [`tick`](Self::tick) next has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        let loading = match &self.screen {
            Screen::List(list) => list.loading_until,
            _ => None,
        };
        match (loading, self.toasts.next_expiry()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn section_screen(&self, section: Section, now: Instant) -> Screen {
        match ListFilter::for_section(section) {
            None => Screen::Dashboard(DashboardScreen::default()),
            Some(filter) => {
                let delay = self.config.loading_delay();
                Screen::List(ListScreen {
                    section,
                    filter,
                    table: Default::default(),
                    loading_until: (!delay.is_zero()).then(|| now + delay),
                })
            }
        }
    }

    fn sync_sidebar(&mut self) {
        if let Some(section) = self.screen.section() {
            self.sidebar_cursor = section.index();
        }
    }

    /// Show `screen`, remembering the current one for `Esc`.
    fn navigate(&mut self, screen: Screen) {
        let previous = std::mem::replace(&mut self.screen, screen);
        if !matches!(previous, Screen::Login(_)) {
            self.history.push(previous);
            if self.history.len() > HISTORY_LIMIT {
                self.history.remove(0);
            }
        }
        self.focus = Focus::Table;
        self.sync_sidebar();
    }

    /// Open a sidebar page. List pages start loading.
    pub fn open_section(&mut self, section: Section, now: Instant) {
        debug!("open section {}", section.label());
        let screen = self.section_screen(section, now);
        self.navigate(screen);
    }

    /// Open a record's detail page; unknown ids show a notice instead.
    pub fn open_record(&mut self, record: Record, now: Instant) {
        let found = match &record {
            Record::Account(id) => self.store.account(id).map(|_| ()),
            Record::Contact(id) => self.store.contact(id).map(|_| ()),
            Record::Lead(id) => self.store.lead(id).map(|_| ()),
            Record::User(id) => self.store.user(id).map(|_| ()),
        };
        match found {
            Ok(()) => {
                debug!("open {:?}", record);
                self.navigate(Screen::Detail(DetailScreen::new(record)));
            }
            Err(e) => {
                warn!("{}", e);
                self.notify(e.notice(), now);
            }
        }
    }

    /// Open the create form of the current section, if it has one.
    pub fn open_create(&mut self) -> bool {
        let Some(kind) = self.screen.section().and_then(FormKind::for_section) else {
            return false;
        };
        if !matches!(self.screen, Screen::List(_)) {
            return false;
        }
        debug!("open create form: {}", kind.form().title());
        self.navigate(Screen::Create(FormScreen::new(kind)));
        true
    }

    /// Return to the previous screen.
    pub fn go_back(&mut self) -> bool {
        match self.history.pop() {
            Some(screen) => {
                self.screen = screen;
                self.focus = Focus::Table;
                self.sync_sidebar();
                true
            }
            None => false,
        }
    }

    pub fn sign_out(&mut self, now: Instant) {
        if let Some(session) = self.session.take() {
            info!("{} signed out", session.user.name);
        }
        self.history.clear();
        self.screen = Screen::Login(FormScreen::login());
        self.focus = Focus::Table;
        self.notify(Notice::info("Signed Out", "You have been signed out."), now);
    }

    /// Flip the status of the user on screen.
    pub fn toggle_user_status(&mut self, now: Instant) -> bool {
        let Screen::Detail(DetailScreen {
            record: Record::User(id),
            ..
        }) = &self.screen
        else {
            return false;
        };
        let result = self.store.toggle_user_status(id);
        match result {
            Ok(notice) => self.notify(notice, now),
            Err(e) => self.notify(e.notice(), now),
        }
        true
    }

    /// Submit the form on screen.
    fn submit_form(&mut self, now: Instant) {
        match &mut self.screen {
            Screen::Login(form) => {
                let FormKind::Login(login) = &form.kind else { return };
                match authenticate(login, &self.store) {
                    Ok(session) => {
                        self.toasts.push(session.notice.clone(), now);
                        self.session = Some(session);
                        self.history.clear();
                        self.screen = Screen::Dashboard(DashboardScreen::default());
                        self.focus = Focus::Table;
                        self.sync_sidebar();
                    }
                    Err(e) => {
                        form.errors = match &e {
                            CrmError::Validation(errors) => Some(errors.clone()),
                            _ => None,
                        };
                        focus_first_error(form);
                        self.toasts.push(e.notice(), now);
                    }
                }
            }
            Screen::Create(form) => match form.kind.submit(&mut self.store) {
                Some(Ok((record, notice))) => {
                    info!("created {:?}", record);
                    self.toasts.push(notice, now);
                    // The list stays underneath for Esc.
                    self.screen = Screen::Detail(DetailScreen::new(record));
                    self.focus = Focus::Table;
                }
                Some(Err(e)) => {
                    debug!("create rejected: {}", e);
                    form.errors = match &e {
                        CrmError::Validation(errors) => Some(errors.clone()),
                        _ => None,
                    };
                    focus_first_error(form);
                    self.toasts.push(e.notice(), now);
                }
                None => {}
            },
            _ => {}
        }
    }
}

fn focus_first_error(form: &mut FormScreen) {
    let Some(errors) = &form.errors else { return };
    if let Some(index) = form.kind.form().fields().iter().position(|f| errors.has(f.name)) {
        form.field = index;
    }
}
