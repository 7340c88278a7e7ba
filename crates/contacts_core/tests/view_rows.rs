use contacts_core::{
    update, AppState, Contact, ContactLabel, ContactListBody, Effect, Msg, NO_NAME,
};
use pretty_assertions::assert_eq;

fn view_of(contacts: Vec<Contact>) -> contacts_core::ContactListView {
    let (state, effects) = update(AppState::new(), Msg::Navigate { href: "/".to_string() });
    let seq = match effects.as_slice() {
        [Effect::LoadContacts { seq, .. }] => *seq,
        other => panic!("unexpected effects {other:?}"),
    };
    let (state, _) = update(
        state,
        Msg::ContactsLoaded {
            seq,
            query: None,
            result: Ok(contacts),
        },
    );
    state.view()
}

#[test]
fn empty_list_renders_placeholder_body() {
    assert_eq!(view_of(Vec::new()).body, ContactListBody::Empty);
}

#[test]
fn one_row_per_contact_in_provider_order() {
    let view = view_of(vec![
        Contact::new("1").with_name("Ada", "Lovelace"),
        Contact::new("2").with_favorite(true),
    ]);

    let rows = view.body.entries();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, "1");
    assert_eq!(rows[0].href, "/contacts/1");
    assert_eq!(rows[0].label, ContactLabel::Named("Ada Lovelace".to_string()));
    assert!(!rows[0].favorite);
    assert_eq!(rows[1].label, ContactLabel::NoName);
    assert_eq!(rows[1].label.text(), NO_NAME);
    assert!(rows[1].favorite);
}

#[test]
fn single_name_part_has_no_stray_space() {
    let view = view_of(vec![
        Contact::new("1").with_name("Ada", ""),
        Contact::new("2").with_name("", "Turing"),
        Contact::new("3").with_name("", ""),
    ]);
    let labels: Vec<&str> = view.body.entries().iter().map(|row| row.label.text()).collect();
    assert_eq!(labels, vec!["Ada", "Turing", "No Name"]);
}

#[test]
fn whitespace_name_is_still_a_name() {
    let view = view_of(vec![Contact::new("1").with_name(" ", "")]);
    assert_eq!(
        view.body.entries()[0].label,
        ContactLabel::Named(" ".to_string())
    );
}
