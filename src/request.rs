use chrono::{DateTime, Local};
use std::fmt::Display;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

pub const GENERIC_ERROR: &str = "Произошла неизвестная ошибка";

/// Loading/data/error for one lookup. Once settled exactly one of `data` and
/// `error` is set; both are empty while idle or loading.
#[derive(Debug, Clone)]
pub struct RequestState<R> {
    pub data: Option<R>,
    pub error: Option<String>,
    pub is_loading: bool,
    pub settled_at: Option<DateTime<Local>>,
}

impl<R> Default for RequestState<R> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            is_loading: false,
            settled_at: None,
        }
    }
}

static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

/// Handed out by [`Request::begin`]; only the latest ticket may settle.
/// Unique across every request in the process, so a result can never land
/// in a form that was remounted after the lookup started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

pub struct Request<R> {
    state: RequestState<R>,
    current: Option<Ticket>,
}

impl<R> Default for Request<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Request<R> {
    pub fn new() -> Self {
        Self {
            state: RequestState::default(),
            current: None,
        }
    }

    pub fn state(&self) -> &RequestState<R> {
        &self.state
    }

    pub fn data(&self) -> Option<&R> {
        self.state.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn begin(&mut self) -> Ticket {
        let ticket = Ticket(NEXT_TICKET.fetch_add(1, Ordering::Relaxed));
        self.current = Some(ticket);
        self.state.data = None;
        self.state.error = None;
        self.state.is_loading = true;
        ticket
    }

    /// Applies a finished lookup. Returns false when the ticket is stale, i.e.
    /// another lookup was started or the state was cleared in the meantime.
    ///
    /// Overlapping lookups resolve to the one started last, not the one that
    /// finishes last, and a lookup still in flight when `clear` runs never
    /// repopulates the state.
    pub fn settle<E: Display>(&mut self, ticket: Ticket, result: Result<R, E>) -> bool {
        if self.current != Some(ticket) {
            tracing::debug!(
                ticket = ticket.0,
                current = ?self.current,
                "dropping stale lookup result"
            );
            return false;
        }
        self.current = None;

        match result {
            Ok(data) => self.state.data = Some(data),
            Err(e) => self.state.error = Some(error_message(&e)),
        }
        self.state.is_loading = false;
        self.state.settled_at = Some(Local::now());
        true
    }

    #[allow(dead_code)]
    pub async fn refetch<F, E>(&mut self, lookup: F) -> bool
    where
        F: Future<Output = Result<R, E>>,
        E: Display,
    {
        let ticket = self.begin();
        let result = lookup.await;
        self.settle(ticket, result)
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.state = RequestState::default();
    }
}

pub fn error_message(e: &impl Display) -> String {
    let msg = e.to_string();
    if msg.trim().is_empty() {
        GENERIC_ERROR.to_string()
    } else {
        msg
    }
}
