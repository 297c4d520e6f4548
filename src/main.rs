mod api;
mod board;
mod config;
mod error;
mod initials;
mod model;
mod notice;
mod view;

use std::cell::RefCell;
use std::rc::Rc;

use gloo::console::log;
use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use board::{settle, BoardAction, BoardState, Tickets};
use config::Config;
use error::Operation;
use notice::{Notice, NoticeKind, PendingHide};

/// Handles every board operation needs. Cloned into each async task
/// instead of captured piecemeal.
#[derive(Clone)]
struct Board {
    state: UseReducerHandle<BoardState>,
    tickets: Rc<RefCell<Tickets>>,
    hide_timer: Rc<PendingHide<Timeout>>,
    config: Rc<Config>,
}

impl Board {
    fn load_activities(&self) {
        let ticket = self.tickets.borrow_mut().next_refresh();
        let board = self.clone();

        spawn_local(async move {
            let catalog = match api::fetch_catalog(&board.config).await {
                Ok(c) if c.is_empty() => {
                    log!("Catalog is empty");
                    Some(c)
                }
                Ok(c) => {
                    log!(format!("Loaded {} activities", c.len()));
                    Some(c)
                }
                Err(e) => {
                    gloo::console::error!(format!("Error fetching activities: {e}"));
                    None
                }
            };
            board
                .state
                .dispatch(BoardAction::CatalogLoaded { ticket, catalog });
        });
    }

    fn show_notice(&self, text: String, kind: NoticeKind) {
        let generation = self.tickets.borrow_mut().next_notice();
        self.state
            .dispatch(BoardAction::ShowNotice(Notice::new(generation, text, kind)));

        let state = self.state.clone();
        let hide = Timeout::new(self.config.notice_ttl_ms, move || {
            state.dispatch(BoardAction::HideNotice(generation));
        });
        self.hide_timer.arm(hide);
    }

    fn mutate(&self, op: Operation, activity: String, email: String) {
        let board = self.clone();

        spawn_local(async move {
            let result = api::send_mutation(&board.config, op, &activity, &email).await;
            let settled = settle(op, result);

            if let Some(line) = settled.log {
                gloo::console::error!(line);
            }
            board.show_notice(settled.text, settled.kind);
            if settled.clear_form {
                board.state.dispatch(BoardAction::ResetForm);
            }
            if settled.refresh {
                board.load_activities();
            }
        });
    }
}

#[function_component(App)]
fn app() -> Html {
    let state = use_reducer(BoardState::default);
    let tickets = use_mut_ref(Tickets::default);
    let hide_timer = use_memo((), |_| PendingHide::<Timeout>::default());
    let config = use_memo((), |_| Config::from_build_env());
    let select_ref = use_node_ref();

    let board = Board {
        state: state.clone(),
        tickets,
        hide_timer,
        config,
    };

    // Initial load
    {
        let board = board.clone();
        use_effect_with((), move |_| {
            board.load_activities();
            || ()
        });
    }

    // Option `selected` attributes don't move a select the user already
    // touched, so push the value after every reset or refresh.
    {
        let select_ref = select_ref.clone();
        use_effect_with(
            (state.selected.clone(), state.options.clone()),
            move |(selected, _)| {
                if let Some(select) = select_ref.cast::<HtmlSelectElement>() {
                    select.set_value(selected);
                }
                || ()
            },
        );
    }

    let on_email = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(BoardAction::SetEmail(input.value()));
        })
    };

    let on_select = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            state.dispatch(BoardAction::SelectActivity(select.value()));
        })
    };

    let on_submit = {
        let board = board.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email = board.state.email.clone();
            let activity = board.state.selected.clone();
            if email.trim().is_empty() || activity.is_empty() {
                return;
            }
            board.mutate(Operation::Signup, activity, email);
        })
    };

    let on_remove = {
        let board = board.clone();
        Callback::from(move |(activity, email): (String, String)| {
            board.mutate(Operation::Unregister, activity, email);
        })
    };

    html! {
        <main>
            <section id="activities-container">
                <h3>{ "Available Activities" }</h3>
                { view::activities_list(&state, &on_remove) }
            </section>

            <section id="signup-container">
                <h3>{ "Sign Up for an Activity" }</h3>
                <form id="signup-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{ "Student Email:" }</label>
                        <input
                            type="email"
                            id="email"
                            required={true}
                            placeholder="your-email@mergington.edu"
                            value={state.email.clone()}
                            oninput={on_email}
                        />
                    </div>
                    <div class="form-group">
                        <label for="activity">{ "Select Activity:" }</label>
                        <select id="activity" required={true} ref={select_ref} onchange={on_select}>
                            { for view::select_options(&state).into_iter().map(|o| html! {
                                <option value={o.value} selected={o.selected}>{ o.label }</option>
                            }) }
                        </select>
                    </div>
                    <button type="submit">{ "Sign Up" }</button>
                </form>
                { view::message_area(&state) }
            </section>
        </main>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
