use crate::error::LookupError;
use crate::form::{required, FormManager, Validator};
use crate::github::client::{fetch_repo, fetch_user, Transport};
use crate::github::types::{RepoResult, UserResult};
use crate::request::{Request, Ticket};
use crate::ui::{
    button::Button,
    field::Input,
    form::Form,
    input::Focus,
    layout::{column, row},
    theme, truncate_with_ellipsis,
};
use ratatui::{
    buffer::Buffer as Buf,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::Widget,
};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

pub const SEARCH_FIELD: &str = "searchValue";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    User,
    Repo,
}

impl SearchKind {
    pub const ALL: &[SearchKind] = &[SearchKind::User, SearchKind::Repo];

    pub fn label(self) -> &'static str {
        match self {
            SearchKind::User => "USER",
            SearchKind::Repo => "REPO",
        }
    }
}

/// Static description of one kind of lookup screen.
pub trait Lookup {
    type Output;

    const TITLE: &'static str;
    const FIELD_LABEL: &'static str;
    const PLACEHOLDER: &'static str;

    fn result_lines(out: &Self::Output) -> [String; 2];
}

pub struct UserLookup;

impl Lookup for UserLookup {
    type Output = UserResult;

    const TITLE: &'static str = "Поиск пользователя";
    const FIELD_LABEL: &'static str = "Имя пользователя";
    const PLACEHOLDER: &'static str = "octocat";

    fn result_lines(user: &UserResult) -> [String; 2] {
        [
            format!("ИМЯ ПОЛЬЗОВАТЕЛЯ: {}", user.display_name()),
            format!("КОЛИЧЕСТВО РЕПОЗИТОРИЕВ: {}", user.public_repos),
        ]
    }
}

pub struct RepoLookup;

impl Lookup for RepoLookup {
    type Output = RepoResult;

    const TITLE: &'static str = "Поиск репозитория";
    const FIELD_LABEL: &'static str = "Репозиторий (владелец/имя)";
    const PLACEHOLDER: &'static str = "octocat/Hello-World";

    fn result_lines(repo: &RepoResult) -> [String; 2] {
        [
            format!("НАЗВАНИЕ РЕПОЗИТОРИЯ: {}", repo.display_name()),
            format!("КОЛИЧЕСТВО ЗВЁЗД: {}", repo.stargazers_count),
        ]
    }
}

pub type SearchUserForm = SearchForm<UserLookup>;
pub type SearchRepoForm = SearchForm<RepoLookup>;

/// One text field plus the state of the lookup it drives.
pub struct SearchForm<L: Lookup> {
    form: FormManager,
    request: Request<L::Output>,
    _lookup: PhantomData<L>,
}

impl<L: Lookup> Default for SearchForm<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Lookup> SearchForm<L> {
    pub fn new() -> Self {
        let form = FormManager::new(
            [(SEARCH_FIELD, String::new())],
            [(SEARCH_FIELD, required as Validator)],
        )
        .with_on_change(|field, value| tracing::trace!(field, value, "search field changed"));

        Self {
            form,
            request: Request::new(),
            _lookup: PhantomData,
        }
    }

    #[allow(dead_code)]
    pub fn form(&self) -> &FormManager {
        &self.form
    }

    pub fn request(&self) -> &Request<L::Output> {
        &self.request
    }

    pub fn type_char(&mut self, c: char) {
        self.form.push_char(SEARCH_FIELD, c);
    }

    pub fn backspace(&mut self) {
        self.form.pop_char(SEARCH_FIELD);
    }

    pub fn set_value(&mut self, value: &str) {
        self.form.handle_change(SEARCH_FIELD, value);
    }

    /// Validates and, if the field passes, starts the request. Returns the
    /// ticket and name the caller must look up. Ignored while loading.
    pub fn submit(&mut self) -> Option<(Ticket, String)> {
        if self.request.is_loading() {
            return None;
        }

        let request = &mut self.request;
        let mut started = None;
        self.form.handle_submit(|values| {
            let name = values.get(SEARCH_FIELD).cloned().unwrap_or_default();
            started = Some((request.begin(), name));
        });
        started
    }

    pub fn settle(&mut self, ticket: Ticket, result: Result<L::Output, LookupError>) -> bool {
        self.request.settle(ticket, result)
    }

    pub fn clear(&mut self) {
        self.request.clear();
    }

    pub fn view(&self, focus: Focus, active: bool) -> SearchFormView<'_, L> {
        SearchFormView {
            search: self,
            focus: active.then_some(focus),
        }
    }
}

pub struct SearchFormView<'a, L: Lookup> {
    search: &'a SearchForm<L>,
    focus: Option<Focus>,
}

impl<'a, L: Lookup> Widget for SearchFormView<'a, L> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let frame = Form { title: L::TITLE };
        let inner = frame.inner(area);
        frame.render(area, buf);

        if inner.height < 5 || inner.width < 20 {
            return;
        }

        let [controls, _, result] = column(
            inner,
            [
                Constraint::Length(4),
                Constraint::Length(1),
                Constraint::Min(1),
            ],
        );
        let [input_area, button_area] =
            row(controls, [Constraint::Min(10), Constraint::Length(12)]);

        let loading = self.search.request.is_loading();
        Input {
            label: L::FIELD_LABEL,
            binding: self.search.form.bind(SEARCH_FIELD),
            placeholder: L::PLACEHOLDER,
            focused: self.focus == Some(Focus::Input),
        }
        .render(input_area, buf);

        Button {
            label: "Найти",
            focused: self.focus == Some(Focus::Button),
            disabled: loading,
        }
        .render(
            Rect {
                height: button_area.height.min(3),
                ..button_area
            },
            buf,
        );

        let lines = result_lines::<L>(&self.search.request);
        let max_w = result.width.saturating_sub(1) as usize;
        for (i, line) in lines.into_iter().enumerate() {
            let y = result.y + i as u16;
            if y >= result.bottom() {
                break;
            }
            let styled: Line = line
                .spans
                .into_iter()
                .map(|s| Span::styled(truncate_with_ellipsis(&s.content, max_w), s.style))
                .collect::<Vec<_>>()
                .into();
            buf.set_line(result.x + 1, y, &styled, result.width.saturating_sub(1));
        }
    }
}

/// Result area contents: loading line, error text, or the two result lines.
pub fn result_lines<L: Lookup>(request: &Request<L::Output>) -> Vec<Line<'static>> {
    if request.is_loading() {
        return vec![Line::from(Span::styled("Загрузка\u{2026}", theme::dim()))];
    }
    if let Some(err) = request.error() {
        return vec![Line::from(Span::styled(err.to_string(), theme::error()))];
    }
    match request.data() {
        Some(out) => L::result_lines(out)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, theme::result())))
            .collect(),
        None => Vec::new(),
    }
}

/// A lookup the event loop must run on behalf of the active form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupCommand {
    pub kind: SearchKind,
    pub ticket: Ticket,
    pub name: String,
}

#[derive(Debug)]
pub enum LookupOutcome {
    User {
        ticket: Ticket,
        result: Result<UserResult, LookupError>,
    },
    Repo {
        ticket: Ticket,
        result: Result<RepoResult, LookupError>,
    },
}

pub async fn perform<C>(transport: &C, cmd: LookupCommand) -> LookupOutcome
where
    C: Transport + ?Sized,
{
    let LookupCommand { kind, ticket, name } = cmd;
    tracing::info!(kind = kind.label(), %name, "lookup started");
    let outcome = match kind {
        SearchKind::User => LookupOutcome::User {
            ticket,
            result: fetch_user(transport, &name).await,
        },
        SearchKind::Repo => LookupOutcome::Repo {
            ticket,
            result: fetch_repo(transport, &name).await,
        },
    };
    match &outcome {
        LookupOutcome::User { result: Err(e), .. } | LookupOutcome::Repo { result: Err(e), .. } => {
            tracing::warn!(kind = kind.label(), %name, error = %e, "lookup failed");
        }
        _ => tracing::info!(kind = kind.label(), %name, "lookup finished"),
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::REQUIRED_MESSAGE;
    use crate::test_utils::{buffer_text, make_repo, make_user, render_to_buffer, FakeTransport};

    fn type_str<L: Lookup>(form: &mut SearchForm<L>, s: &str) {
        for c in s.chars() {
            form.type_char(c);
        }
    }

    fn lines_text<L: Lookup>(form: &SearchForm<L>) -> Vec<String> {
        result_lines::<L>(form.request())
            .iter()
            .map(|l| l.to_string())
            .collect()
    }

    #[test]
    fn empty_submit_shows_inline_error_and_starts_nothing() {
        let mut form = SearchUserForm::new();
        assert!(form.submit().is_none());
        assert!(!form.request().is_loading());
        assert_eq!(form.form().bind(SEARCH_FIELD).error, Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn valid_submit_starts_loading() {
        let mut form = SearchUserForm::new();
        type_str(&mut form, "octocat");
        let (_, name) = form.submit().unwrap();
        assert_eq!(name, "octocat");
        assert!(form.request().is_loading());
        assert_eq!(lines_text(&form), vec!["Загрузка\u{2026}".to_string()]);
    }

    #[test]
    fn submit_ignored_while_loading() {
        let mut form = SearchRepoForm::new();
        type_str(&mut form, "a/b");
        assert!(form.submit().is_some());
        assert!(form.submit().is_none());
    }

    #[test]
    fn user_result_lines_use_login_without_name() {
        let mut form = SearchUserForm::new();
        type_str(&mut form, "octocat");
        let (ticket, _) = form.submit().unwrap();
        form.settle(ticket, Ok(make_user("octocat", None, 8)));
        assert_eq!(
            lines_text(&form),
            vec![
                "ИМЯ ПОЛЬЗОВАТЕЛЯ: octocat".to_string(),
                "КОЛИЧЕСТВО РЕПОЗИТОРИЕВ: 8".to_string(),
            ]
        );
    }

    #[test]
    fn user_result_lines_prefer_display_name() {
        let lines = UserLookup::result_lines(&make_user("octocat", Some("The Octocat"), 8));
        assert_eq!(lines[0], "ИМЯ ПОЛЬЗОВАТЕЛЯ: The Octocat");
    }

    #[test]
    fn repo_result_lines() {
        let lines = RepoLookup::result_lines(&make_repo(
            "Hello-World",
            Some("octocat/Hello-World"),
            2600,
        ));
        assert_eq!(
            lines,
            [
                "НАЗВАНИЕ РЕПОЗИТОРИЯ: octocat/Hello-World".to_string(),
                "КОЛИЧЕСТВО ЗВЁЗД: 2600".to_string(),
            ]
        );
    }

    #[test]
    fn error_replaces_result_lines() {
        let mut form = SearchUserForm::new();
        type_str(&mut form, "ghost");
        let (ticket, _) = form.submit().unwrap();
        form.settle(
            ticket,
            Err(LookupError::Api {
                status: 404,
                message: "Not Found".to_string(),
            }),
        );
        assert_eq!(lines_text(&form), vec!["Not Found".to_string()]);
    }

    #[test]
    fn clear_empties_result_area() {
        let mut form = SearchUserForm::new();
        type_str(&mut form, "octocat");
        let (ticket, _) = form.submit().unwrap();
        form.settle(ticket, Ok(make_user("octocat", None, 8)));
        form.clear();
        assert!(lines_text(&form).is_empty());
        assert_eq!(form.form().value(SEARCH_FIELD), "octocat");
    }

    #[test]
    fn view_renders_result() {
        let mut form = SearchUserForm::new();
        type_str(&mut form, "octocat");
        let (ticket, _) = form.submit().unwrap();
        form.settle(ticket, Ok(make_user("octocat", None, 8)));

        let buf = render_to_buffer(60, 12, |f| {
            f.render_widget(form.view(Focus::Input, true), f.area());
        });
        let text = buffer_text(&buf);
        assert!(text.contains("ИМЯ ПОЛЬЗОВАТЕЛЯ: octocat"), "{text}");
        assert!(text.contains("КОЛИЧЕСТВО РЕПОЗИТОРИЕВ: 8"), "{text}");
    }

    #[tokio::test]
    async fn perform_routes_by_kind() {
        let transport = FakeTransport::ok(
            r#"{"name":"Hello-World","full_name":"octocat/Hello-World","stargazers_count":1}"#,
        );
        let mut form = SearchRepoForm::new();
        type_str(&mut form, "octocat/Hello-World");
        let (ticket, name) = form.submit().unwrap();

        let outcome = perform(
            &transport,
            LookupCommand {
                kind: SearchKind::Repo,
                ticket,
                name,
            },
        )
        .await;

        assert_eq!(
            transport.requested(),
            vec!["/repos/octocat/Hello-World".to_string()]
        );
        match outcome {
            LookupOutcome::Repo { ticket: t, result } => {
                assert_eq!(t, ticket);
                assert_eq!(result.unwrap().stargazers_count, 1);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }
}
