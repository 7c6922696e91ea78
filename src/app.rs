use crate::config::Config;
use crate::event::AppEvent;
use crate::search::{LookupCommand, LookupOutcome, SearchKind, SearchRepoForm, SearchUserForm};
use crate::ui::{
    header_bar::HeaderBar,
    help_panel::HelpPanel,
    input::{self, Action, Focus},
    layout::{column, layout},
    select::{Select, SelectState},
    status_bar::StatusBar,
    theme,
};
use ratatui::{layout::Constraint, style::Style, widgets::Block, Frame};

const BODY_MAX_WIDTH: u16 = 72;

/// The mounted search screen. Switching kinds replaces it wholesale.
pub enum ActiveForm {
    User(SearchUserForm),
    Repo(SearchRepoForm),
}

impl ActiveForm {
    fn fresh(kind: SearchKind) -> Self {
        match kind {
            SearchKind::User => ActiveForm::User(SearchUserForm::new()),
            SearchKind::Repo => ActiveForm::Repo(SearchRepoForm::new()),
        }
    }

    pub fn kind(&self) -> SearchKind {
        match self {
            ActiveForm::User(_) => SearchKind::User,
            ActiveForm::Repo(_) => SearchKind::Repo,
        }
    }

    fn type_char(&mut self, c: char) {
        match self {
            ActiveForm::User(f) => f.type_char(c),
            ActiveForm::Repo(f) => f.type_char(c),
        }
    }

    fn backspace(&mut self) {
        match self {
            ActiveForm::User(f) => f.backspace(),
            ActiveForm::Repo(f) => f.backspace(),
        }
    }

    fn set_value(&mut self, value: &str) {
        match self {
            ActiveForm::User(f) => f.set_value(value),
            ActiveForm::Repo(f) => f.set_value(value),
        }
    }

    fn clear(&mut self) {
        match self {
            ActiveForm::User(f) => f.clear(),
            ActiveForm::Repo(f) => f.clear(),
        }
    }

    fn submit(&mut self) -> Option<LookupCommand> {
        let kind = self.kind();
        let (ticket, name) = match self {
            ActiveForm::User(f) => f.submit(),
            ActiveForm::Repo(f) => f.submit(),
        }?;
        Some(LookupCommand { kind, ticket, name })
    }

    pub fn is_loading(&self) -> bool {
        match self {
            ActiveForm::User(f) => f.request().is_loading(),
            ActiveForm::Repo(f) => f.request().is_loading(),
        }
    }

    #[cfg(test)]
    pub fn value(&self) -> &str {
        match self {
            ActiveForm::User(f) => f.form().value(crate::search::SEARCH_FIELD),
            ActiveForm::Repo(f) => f.form().value(crate::search::SEARCH_FIELD),
        }
    }
}

pub struct App {
    pub config: Config,
    pub select: SelectState<SearchKind>,
    pub active: ActiveForm,
    pub focus: Focus,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let kind = config.default_kind;
        let mut select = SelectState::new(
            SearchKind::ALL
                .iter()
                .map(|k| (*k, k.label().to_string())),
        );
        select.select_value(&kind);

        Self {
            config,
            select,
            active: ActiveForm::fresh(kind),
            focus: Focus::Input,
            show_help: false,
            should_quit: false,
        }
    }

    pub fn kind(&self) -> SearchKind {
        self.active.kind()
    }

    /// Mounts a fresh form when `kind` differs from the active one.
    pub fn set_kind(&mut self, kind: SearchKind) {
        self.select.select_value(&kind);
        if self.active.kind() == kind {
            return;
        }
        tracing::info!(kind = kind.label(), "switched lookup kind");
        self.active = ActiveForm::fresh(kind);
    }

    fn sync_kind_with_select(&mut self) {
        if let Some(kind) = self.select.selected().copied() {
            self.set_kind(kind);
        }
    }

    /// Prefills the field and submits, as if the user typed `query` and hit Enter.
    pub fn submit_query(&mut self, query: &str) -> Option<LookupCommand> {
        self.active.set_value(query);
        self.active.submit()
    }

    pub fn handle_event(&mut self, event: AppEvent) -> Option<LookupCommand> {
        match event {
            AppEvent::Key(key) => {
                let action = input::map_key(key, self.focus);
                self.handle_action(action)
            }
            AppEvent::Resize => None,
            AppEvent::LookupFinished(outcome) => {
                self.apply_outcome(outcome);
                None
            }
        }
    }

    fn apply_outcome(&mut self, outcome: LookupOutcome) {
        let applied = match (&mut self.active, outcome) {
            (ActiveForm::User(f), LookupOutcome::User { ticket, result }) => f.settle(ticket, result),
            (ActiveForm::Repo(f), LookupOutcome::Repo { ticket, result }) => f.settle(ticket, result),
            _ => false,
        };
        if !applied {
            tracing::debug!("lookup result arrived for an unmounted form");
        }
    }

    fn handle_action(&mut self, action: Action) -> Option<LookupCommand> {
        if self.show_help {
            match action {
                Action::Quit => self.should_quit = true,
                Action::Help | Action::ClosePopup => self.show_help = false,
                _ => {}
            }
            return None;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::ClosePopup => self.should_quit = true,
            Action::Help => self.show_help = true,
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            Action::OptionNext => {
                self.select.select_next();
                self.sync_kind_with_select();
            }
            Action::OptionPrev => {
                self.select.select_prev();
                self.sync_kind_with_select();
            }
            Action::TypeChar(c) => self.active.type_char(c),
            Action::Backspace => self.active.backspace(),
            Action::Submit => return self.active.submit(),
            Action::ClearResult => self.active.clear(),
            Action::None => {}
        }
        None
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(Style::default().bg(theme::APP_BG)), area);

        let [header, body, status] = layout(area, BODY_MAX_WIDTH);

        frame.render_widget(
            HeaderBar {
                api_base: &self.config.api_base_url,
                authenticated: self.config.has_token(),
            },
            header,
        );

        let [select_area, _, form_area] = column(
            body,
            [Constraint::Length(3), Constraint::Length(1), Constraint::Min(5)],
        );

        frame.render_widget(
            Select {
                label: "Тип поиска",
                state: &self.select,
                focused: self.focus == Focus::Select,
            },
            select_area,
        );

        let settled_at = match &self.active {
            ActiveForm::User(f) => {
                frame.render_widget(f.view(self.focus, !self.show_help), form_area);
                f.request().state().settled_at
            }
            ActiveForm::Repo(f) => {
                frame.render_widget(f.view(self.focus, !self.show_help), form_area);
                f.request().state().settled_at
            }
        };

        frame.render_widget(
            StatusBar {
                kind_label: self.kind().label(),
                is_loading: self.active.is_loading(),
                settled_at,
            },
            status,
        );

        if self.show_help {
            frame.render_widget(HelpPanel, area);
        }
    }
}
