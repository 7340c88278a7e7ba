use crate::contact::edit_href;
use crate::{AppState, Effect, Location, Msg, NavigationKind, SEARCH_PARAM};

/// Pure update function: applies a message to state and returns any effects.
///
/// Every navigation gets a fresh sequence number. Results carrying any other
/// number than the pending one are stale and leave the state untouched, so only
/// the most recently issued request ever reaches the view.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Navigate { href } => match Location::parse(&href) {
            Ok(location) => {
                state.set_search_draft(None);
                load(&mut state, location)
            }
            Err(_) => Vec::new(),
        },
        Msg::SearchInputChanged(text) => {
            let target = state.location().with_query_param(SEARCH_PARAM, &text);
            state.set_search_draft(Some(text));
            load(&mut state, target)
        }
        Msg::NewContactSubmitted => {
            let seq = state.begin_navigation(NavigationKind::Submit, Location::default());
            vec![Effect::CreateContact { seq }]
        }
        Msg::ContactsLoaded { seq, query, result } => {
            if !state.is_latest(seq, NavigationKind::Load) {
                return (state, Vec::new());
            }
            match result {
                Ok(contacts) => state.commit_load(query, contacts),
                Err(message) => state.commit_failure(message),
            }
            Vec::new()
        }
        Msg::ContactCreated { seq, result } => {
            if !state.is_latest(seq, NavigationKind::Submit) {
                return (state, Vec::new());
            }
            match result.and_then(|id| {
                Location::parse(&edit_href(&id)).map_err(|err| format!("bad contact id {id}: {err}"))
            }) {
                // Redirect: the new contact's edit page loads like any other navigation.
                Ok(location) => load(&mut state, location),
                Err(message) => {
                    state.commit_failure(message);
                    Vec::new()
                }
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn load(state: &mut AppState, location: Location) -> Vec<Effect> {
    let query = location.query_param(SEARCH_PARAM);
    let seq = state.begin_navigation(NavigationKind::Load, location);
    vec![Effect::LoadContacts { seq, query }]
}
