use contacts_core::{update, AppState, Contact, Effect, Msg, NavigationState};
use pretty_assertions::assert_eq;

#[test]
fn new_contact_submits_then_redirects_to_edit() {
    let (state, effects) = update(AppState::new(), Msg::NewContactSubmitted);
    assert_eq!(effects, vec![Effect::CreateContact { seq: 1 }]);
    let view = state.view();
    assert_eq!(view.navigation, NavigationState::Submitting);
    assert!(!view.detail_loading);

    let (state, effects) = update(
        state,
        Msg::ContactCreated {
            seq: 1,
            result: Ok("abc123".to_string()),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::LoadContacts {
            seq: 2,
            query: None,
        }]
    );
    let pending = state.pending().expect("redirect pending");
    assert_eq!(pending.location.path(), "/contacts/abc123/edit");
    assert!(state.view().detail_loading);

    let (state, effects) = update(
        state,
        Msg::ContactsLoaded {
            seq: 2,
            query: None,
            result: Ok(vec![Contact::new("abc123")]),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.location().path(), "/contacts/abc123/edit");
    let rows = state.view().body;
    assert_eq!(rows.entries().len(), 1);
    assert_eq!(rows.entries()[0].label.text(), "No Name");
}

#[test]
fn failed_create_surfaces_error() {
    let (state, _) = update(AppState::new(), Msg::NewContactSubmitted);
    let (state, effects) = update(
        state,
        Msg::ContactCreated {
            seq: 1,
            result: Err("read-only store".to_string()),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.error(), Some("read-only store"));
    assert_eq!(state.navigation_state(), NavigationState::Idle);
}

#[test]
fn superseded_create_does_not_redirect() {
    let (state, _) = update(AppState::new(), Msg::NewContactSubmitted);
    let (state, _) = update(state, Msg::Navigate { href: "/".to_string() });
    let before = state.clone();

    let (state, effects) = update(
        state,
        Msg::ContactCreated {
            seq: 1,
            result: Ok("late".to_string()),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state, before);
}
