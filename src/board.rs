//! Board state and the transitions driven by network results and user input.
//!
//! Everything here is plain data so the page logic can be exercised on the
//! host target; the component in `main.rs` owns the effects (requests,
//! timers, console logging) and feeds their results back as [`BoardAction`]s.

use std::rc::Rc;

use yew::Reducible;

use crate::error::{ApiError, Operation};
use crate::model::{Catalog, Confirmation};
use crate::notice::{Notice, NoticeKind};

#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Loaded(Catalog),
    Failed,
}

/// Monotonic counters handed out before an effect starts. Refresh tickets
/// order catalog responses; notice tickets order message hides.
#[derive(Debug, Default)]
pub struct Tickets {
    refresh: u64,
    notice: u64,
}

impl Tickets {
    pub fn next_refresh(&mut self) -> u64 {
        self.refresh += 1;
        self.refresh
    }

    pub fn next_notice(&mut self) -> u64 {
        self.notice += 1;
        self.notice
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    pub list: ListState,
    /// Select options after the placeholder. Survives a failed refresh.
    pub options: Vec<String>,
    pub notice: Option<Notice>,
    pub email: String,
    pub selected: String,
    applied_refresh: u64,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            list: ListState::Loading,
            options: Vec::new(),
            notice: None,
            email: String::new(),
            selected: String::new(),
            applied_refresh: 0,
        }
    }
}

#[derive(Debug)]
pub enum BoardAction {
    CatalogLoaded { ticket: u64, catalog: Option<Catalog> },
    ShowNotice(Notice),
    HideNotice(u64),
    SetEmail(String),
    SelectActivity(String),
    ResetForm,
}

impl BoardState {
    /// Applies one action; returns false when nothing changed.
    pub fn apply(&mut self, action: BoardAction) -> bool {
        match action {
            BoardAction::CatalogLoaded { ticket, catalog } => {
                if ticket <= self.applied_refresh {
                    return false;
                }
                self.applied_refresh = ticket;
                match catalog {
                    Some(catalog) => {
                        self.options = catalog.names().map(str::to_string).collect();
                        self.list = ListState::Loaded(catalog);
                    }
                    None => self.list = ListState::Failed,
                }
                true
            }
            BoardAction::ShowNotice(notice) => {
                let newer = self
                    .notice
                    .as_ref()
                    .map_or(true, |current| notice.generation > current.generation);
                if newer {
                    self.notice = Some(notice);
                }
                newer
            }
            BoardAction::HideNotice(generation) => match self.notice.as_mut() {
                Some(n) if n.generation == generation && n.visible => {
                    n.visible = false;
                    true
                }
                _ => false,
            },
            BoardAction::SetEmail(email) => {
                self.email = email;
                true
            }
            BoardAction::SelectActivity(name) => {
                self.selected = name;
                true
            }
            BoardAction::ResetForm => {
                self.email.clear();
                self.selected.clear();
                true
            }
        }
    }

    #[cfg(test)]
    pub fn catalog(&self) -> Option<&Catalog> {
        match &self.list {
            ListState::Loaded(c) => Some(c),
            _ => None,
        }
    }
}

impl Reducible for BoardState {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// What the board does once a signup or unregister call has finished.
#[derive(Debug, Clone, PartialEq)]
pub struct Settled {
    pub text: String,
    pub kind: NoticeKind,
    pub refresh: bool,
    pub clear_form: bool,
    /// Console line for failures that never produced a server reply.
    pub log: Option<String>,
}

pub fn settle(op: Operation, result: Result<Confirmation, ApiError>) -> Settled {
    match result {
        Ok(confirmation) => Settled {
            text: confirmation.message,
            kind: NoticeKind::Success,
            refresh: true,
            clear_form: op == Operation::Signup,
            log: None,
        },
        Err(ApiError::Rejected { detail, .. }) => Settled {
            text: detail.unwrap_or_else(|| op.fallback_detail().to_string()),
            kind: NoticeKind::Error,
            refresh: false,
            clear_form: false,
            log: None,
        },
        Err(err) => Settled {
            text: op.failure_text().to_string(),
            kind: NoticeKind::Error,
            refresh: false,
            clear_form: false,
            log: Some(format!("{}: {err}", op.log_label())),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(names: &[&str]) -> Catalog {
        names
            .iter()
            .map(|n| {
                (
                    n.to_string(),
                    crate::model::Activity {
                        description: String::new(),
                        schedule: String::new(),
                        max_participants: 2,
                        participants: vec![],
                    },
                )
            })
            .collect()
    }

    fn loaded(ticket: u64, names: &[&str]) -> BoardAction {
        BoardAction::CatalogLoaded {
            ticket,
            catalog: Some(catalog(names)),
        }
    }

    #[test]
    fn refresh_replaces_options_without_duplicates() {
        let mut state = BoardState::default();
        let mut tickets = Tickets::default();
        assert!(state.apply(loaded(tickets.next_refresh(), &["Chess", "Art"])));
        assert!(state.apply(loaded(tickets.next_refresh(), &["Chess", "Art"])));
        assert_eq!(state.options, ["Chess", "Art"]);
        assert_eq!(state.catalog().map(Catalog::len), Some(2));
    }

    #[test]
    fn stale_refresh_is_discarded() {
        let mut state = BoardState::default();
        let mut tickets = Tickets::default();
        let first = tickets.next_refresh();
        let second = tickets.next_refresh();

        assert!(state.apply(loaded(second, &["New"])));
        assert!(!state.apply(loaded(first, &["Old"])));
        assert_eq!(state.options, ["New"]);
    }

    #[test]
    fn failed_refresh_keeps_options() {
        let mut state = BoardState::default();
        state.apply(loaded(1, &["Chess"]));
        state.apply(BoardAction::CatalogLoaded {
            ticket: 2,
            catalog: None,
        });
        assert_eq!(state.list, ListState::Failed);
        assert_eq!(state.options, ["Chess"]);
    }

    #[test]
    fn old_hide_does_not_hide_newer_notice() {
        let mut state = BoardState::default();
        let mut tickets = Tickets::default();
        let a = tickets.next_notice();
        let b = tickets.next_notice();

        state.apply(BoardAction::ShowNotice(Notice::new(a, "first", NoticeKind::Success)));
        state.apply(BoardAction::ShowNotice(Notice::new(b, "second", NoticeKind::Error)));
        assert!(!state.apply(BoardAction::HideNotice(a)));

        let notice = state.notice.as_ref().unwrap();
        assert_eq!(notice.text, "second");
        assert!(notice.visible);

        assert!(state.apply(BoardAction::HideNotice(b)));
        assert!(!state.notice.as_ref().unwrap().visible);
    }

    #[test]
    fn reset_form_clears_fields() {
        let mut state = BoardState::default();
        state.apply(BoardAction::SetEmail("x@y.z".into()));
        state.apply(BoardAction::SelectActivity("Chess".into()));
        state.apply(BoardAction::ResetForm);
        assert_eq!(state.email, "");
        assert_eq!(state.selected, "");
    }

    #[test]
    fn reducer_keeps_rc_when_unchanged() {
        let state = Rc::new(BoardState::default());
        let same = state.clone().reduce(BoardAction::HideNotice(9));
        assert!(Rc::ptr_eq(&state, &same));
    }

    #[test]
    fn successful_signup_refreshes_once_and_clears_form() {
        let ok = Ok(Confirmation {
            message: "Signed up t@x.io for Chess Club".into(),
        });
        let s = settle(Operation::Signup, ok);
        assert_eq!(s.text, "Signed up t@x.io for Chess Club");
        assert_eq!(s.kind, NoticeKind::Success);
        assert!(s.refresh);
        assert!(s.clear_form);
        assert_eq!(s.log, None);
    }

    #[test]
    fn successful_removal_refreshes_without_touching_form() {
        let ok = Ok(Confirmation {
            message: "Unregistered".into(),
        });
        let s = settle(Operation::Unregister, ok);
        assert!(s.refresh);
        assert!(!s.clear_form);
    }

    #[test]
    fn rejected_signup_shows_server_detail() {
        let err = Err(ApiError::Rejected {
            status: 400,
            detail: Some("Already signed up".into()),
        });
        let s = settle(Operation::Signup, err);
        assert_eq!(s.text, "Already signed up");
        assert_eq!(s.kind, NoticeKind::Error);
        assert!(!s.refresh);
        assert!(!s.clear_form);
    }

    #[test]
    fn rejected_without_detail_uses_fallback() {
        let rejected = || ApiError::Rejected {
            status: 404,
            detail: None,
        };
        assert_eq!(settle(Operation::Signup, Err(rejected())).text, "An error occurred");
        assert_eq!(
            settle(Operation::Unregister, Err(rejected())).text,
            "Failed to remove participant"
        );
    }

    #[test]
    fn transport_failure_on_removal_is_logged_and_not_refreshed() {
        let err = ApiError::Transport(gloo_net::Error::GlooError("connection refused".into()));
        let s = settle(Operation::Unregister, Err(err));
        assert_eq!(s.text, "Failed to remove participant. Please try again.");
        assert_eq!(s.kind, NoticeKind::Error);
        assert!(!s.refresh);
        assert!(s.log.unwrap().starts_with("Error removing participant:"));
    }

    #[test]
    fn garbled_body_counts_as_transport_failure() {
        let decode = serde_json::from_str::<Confirmation>("<html>").unwrap_err();
        let s = settle(Operation::Signup, Err(ApiError::Decode(decode)));
        assert_eq!(s.text, "Failed to sign up. Please try again.");
        assert!(!s.refresh);
        assert!(s.log.is_some());
    }
}
