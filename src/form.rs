use std::collections::BTreeMap;

pub const REQUIRED_MESSAGE: &str = "Поле не может быть пустым";

pub type Validator = fn(&str) -> Option<String>;
pub type FormValues = BTreeMap<&'static str, String>;
type ChangeCallback = Box<dyn FnMut(&'static str, &str)>;

pub fn required(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(REQUIRED_MESSAGE.to_string())
    } else {
        None
    }
}

/// What an input needs to render one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding<'a> {
    pub value: &'a str,
    pub error: Option<&'a str>,
}

pub struct FormManager {
    values: FormValues,
    validators: BTreeMap<&'static str, Validator>,
    errors: BTreeMap<&'static str, String>,
    submitted: bool,
    on_change: Option<ChangeCallback>,
}

impl FormManager {
    pub fn new(
        initial: impl IntoIterator<Item = (&'static str, String)>,
        validators: impl IntoIterator<Item = (&'static str, Validator)>,
    ) -> Self {
        let mut form = Self {
            values: initial.into_iter().collect(),
            validators: validators.into_iter().collect(),
            errors: BTreeMap::new(),
            submitted: false,
            on_change: None,
        };
        form.validate();
        form
    }

    pub fn with_on_change(mut self, cb: impl FnMut(&'static str, &str) + 'static) -> Self {
        self.on_change = Some(Box::new(cb));
        self
    }

    #[allow(dead_code)]
    pub fn state(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    #[allow(dead_code)]
    pub fn errors(&self) -> &BTreeMap<&'static str, String> {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn bind(&self, field: &str) -> FieldBinding<'_> {
        let error = if self.submitted {
            self.errors.get(field).map(String::as_str)
        } else {
            None
        };
        FieldBinding {
            value: self.value(field),
            error,
        }
    }

    /// Stores the trimmed input and notifies the change callback.
    pub fn handle_change(&mut self, field: &'static str, raw: &str) {
        let trimmed = raw.trim();
        self.values.insert(field, trimmed.to_string());
        self.validate();
        if let Some(cb) = self.on_change.as_mut() {
            cb(field, trimmed);
        }
    }

    pub fn push_char(&mut self, field: &'static str, c: char) {
        let mut next = self.value(field).to_string();
        next.push(c);
        self.handle_change(field, &next);
    }

    pub fn pop_char(&mut self, field: &'static str) {
        let mut next = self.value(field).to_string();
        next.pop();
        self.handle_change(field, &next);
    }

    /// Validates every field and calls `on_submit` only when none fails.
    pub fn handle_submit(&mut self, on_submit: impl FnOnce(&FormValues)) -> bool {
        self.submitted = true;
        self.validate();
        if self.has_errors() {
            return false;
        }
        on_submit(&self.values);
        true
    }

    fn validate(&mut self) {
        self.errors = self
            .validators
            .iter()
            .filter_map(|(field, check)| {
                let value = self.values.get(field).map(String::as_str).unwrap_or("");
                check(value).map(|msg| (*field, msg))
            })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn search_form() -> FormManager {
        FormManager::new(
            [("searchValue", String::new())],
            [("searchValue", required as Validator)],
        )
    }

    #[test]
    fn required_accepts_non_empty() {
        for s in ["octocat", "a", "rust-lang/rust", "x y"] {
            assert_eq!(required(s), None, "{s:?}");
        }
    }

    #[test]
    fn required_rejects_blank() {
        for s in ["", " ", "\t", "  \n "] {
            assert_eq!(required(s).as_deref(), Some(REQUIRED_MESSAGE), "{s:?}");
        }
    }

    #[test]
    fn change_trims_and_notifies() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut form = search_form().with_on_change(move |field, value| {
            sink.borrow_mut().push((field, value.to_string()));
        });

        form.handle_change("searchValue", "  octocat ");
        assert_eq!(form.value("searchValue"), "octocat");
        assert_eq!(
            *seen.borrow(),
            vec![("searchValue", "octocat".to_string())]
        );
    }

    #[test]
    fn submit_with_error_skips_callback() {
        let mut form = search_form();
        let mut called = false;
        assert!(!form.handle_submit(|_| called = true));
        assert!(!called);
        assert!(form.has_errors());
        assert_eq!(form.bind("searchValue").error, Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn whitespace_only_input_still_blocks_submit() {
        let mut form = search_form();
        form.push_char("searchValue", ' ');
        let mut called = false;
        form.handle_submit(|_| called = true);
        assert!(!called);
    }

    #[test]
    fn valid_submit_passes_state() {
        let mut form = search_form();
        for c in "octocat".chars() {
            form.push_char("searchValue", c);
        }
        let mut got = None;
        assert!(form.handle_submit(|values| got = values.get("searchValue").cloned()));
        assert_eq!(got.as_deref(), Some("octocat"));
    }

    #[test]
    fn errors_hidden_until_first_submit() {
        let mut form = search_form();
        assert!(form.has_errors());
        assert_eq!(form.bind("searchValue").error, None);

        form.handle_submit(|_| {});
        form.push_char("searchValue", 'a');
        assert!(!form.has_errors());
        form.pop_char("searchValue");
        assert_eq!(form.bind("searchValue").error, Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn state_and_errors_track_every_change() {
        let mut form = search_form();
        assert_eq!(form.errors().get("searchValue").map(String::as_str), Some(REQUIRED_MESSAGE));

        form.handle_change("searchValue", " rust-lang ");
        assert_eq!(
            form.state().get("searchValue").map(String::as_str),
            Some("rust-lang")
        );
        assert!(form.errors().is_empty());
    }
}
