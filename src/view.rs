use yew::prelude::*;

use crate::board::{BoardState, ListState};
use crate::error::LOAD_FAILED_TEXT;
use crate::initials::get_initials;
use crate::model::Activity;

pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantRow {
    pub initials: String,
    pub id: String,
    pub title: String,
    pub aria_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardModel {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub availability: String,
    pub heading: String,
    pub rows: Vec<ParticipantRow>,
}

impl CardModel {
    pub fn build(name: &str, activity: &Activity) -> Self {
        let rows = activity
            .participants
            .iter()
            .map(|p| ParticipantRow {
                initials: get_initials(Some(p)),
                id: p.clone(),
                title: format!("Remove {p}"),
                aria_label: format!("Remove {p} from {name}"),
            })
            .collect();

        Self {
            name: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            availability: format!("{} spots left", activity.spots_left()),
            heading: format!("Participants ({}):", activity.participants.len()),
            rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Placeholder first, then one entry per activity name.
pub fn select_options(state: &BoardState) -> Vec<SelectOption> {
    let placeholder = SelectOption {
        value: String::new(),
        label: SELECT_PLACEHOLDER.to_string(),
        selected: state.selected.is_empty(),
    };
    std::iter::once(placeholder)
        .chain(state.options.iter().map(|name| SelectOption {
            value: name.clone(),
            label: name.clone(),
            selected: *name == state.selected,
        }))
        .collect()
}

fn participant_row(activity: &str, row: &ParticipantRow, on_remove: &Callback<(String, String)>) -> Html {
    let onclick = {
        let on_remove = on_remove.clone();
        let pair = (activity.to_string(), row.id.clone());
        Callback::from(move |_e: MouseEvent| on_remove.emit(pair.clone()))
    };

    html! {
        <li class="participant-item">
            <span class="avatar">{ row.initials.clone() }</span>
            <span class="participant-name">{ row.id.clone() }</span>
            <button
                type="button"
                class="delete-participant"
                title={row.title.clone()}
                aria-label={row.aria_label.clone()}
                {onclick}
            >
                { "🗑️" }
            </button>
        </li>
    }
}

pub fn activity_card(card: &CardModel, on_remove: &Callback<(String, String)>) -> Html {
    let participants = if card.rows.is_empty() {
        html! { <p class="info" style="margin-top:6px;">{ "No participants yet" }</p> }
    } else {
        html! {
            <ul class="participants-list">
                { for card.rows.iter().map(|row| participant_row(&card.name, row, on_remove)) }
            </ul>
        }
    };

    html! {
        <div class="activity-card">
            <h4>{ card.name.clone() }</h4>
            <p>{ card.description.clone() }</p>
            <p><strong>{ "Schedule:" }</strong>{ format!(" {}", card.schedule) }</p>
            <p><strong>{ "Availability:" }</strong>{ format!(" {}", card.availability) }</p>
            <div class="participants-section">
                <div class="participants-heading">{ card.heading.clone() }</div>
                { participants }
            </div>
        </div>
    }
}

pub fn activities_list(state: &BoardState, on_remove: &Callback<(String, String)>) -> Html {
    let body = match &state.list {
        ListState::Loading => html! { <p>{ "Loading activities..." }</p> },
        ListState::Failed => html! { <p>{ LOAD_FAILED_TEXT }</p> },
        ListState::Loaded(catalog) => html! {
            <>
                { for catalog.iter().map(|(name, a)| activity_card(&CardModel::build(name, a), on_remove)) }
            </>
        },
    };

    html! { <div id="activities-list">{ body }</div> }
}

pub fn message_area(state: &BoardState) -> Html {
    match &state.notice {
        Some(notice) => html! {
            <div id="message" class={notice.classes()}>{ notice.text.clone() }</div>
        },
        None => html! { <div id="message" class="hidden"></div> },
    }
}
