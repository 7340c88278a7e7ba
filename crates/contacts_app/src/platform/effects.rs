use std::collections::VecDeque;
use std::sync::Arc;

use contacts_core::{update, AppState, Contact, Effect, Msg};
use contacts_engine::{ContactRecord, DataProvider};
use contacts_logging::{contacts_debug, contacts_error};

/// Executes core effects against the data provider and feeds the results back.
pub struct EffectRunner {
    provider: Arc<dyn DataProvider>,
}

impl EffectRunner {
    pub fn new(provider: Arc<dyn DataProvider>) -> Self {
        Self { provider }
    }

    /// Applies `msg`, then runs effects and their follow-ups until none remain.
    pub async fn settle(&self, state: AppState, msg: Msg) -> AppState {
        let (mut state, effects) = update(state, msg);
        let mut queue: VecDeque<Effect> = effects.into();
        while let Some(effect) = queue.pop_front() {
            let msg = self.run(effect).await;
            let (next, more) = update(state, msg);
            state = next;
            queue.extend(more);
        }
        state
    }

    /// Applies an action `msg` and runs it up to its redirect. The redirect's
    /// loader is left pending: it belongs to the request that follows it.
    pub async fn submit(&self, state: AppState, msg: Msg) -> AppState {
        let (mut state, effects) = update(state, msg);
        let mut queue: VecDeque<Effect> = effects.into();
        while let Some(effect) = queue.pop_front() {
            if matches!(effect, Effect::LoadContacts { .. }) {
                break;
            }
            let msg = self.run(effect).await;
            let (next, more) = update(state, msg);
            state = next;
            queue.extend(more);
        }
        state
    }

    pub async fn run(&self, effect: Effect) -> Msg {
        match effect {
            Effect::LoadContacts { seq, query } => {
                contacts_debug!("LoadContacts seq={} query={:?}", seq, query);
                let result = self
                    .provider
                    .get_contacts(query.as_deref())
                    .await
                    .map(|records| records.into_iter().map(to_contact).collect())
                    .map_err(|err| {
                        contacts_error!("LoadContacts seq={} failed: {}", seq, err);
                        err.to_string()
                    });
                Msg::ContactsLoaded { seq, query, result }
            }
            Effect::CreateContact { seq } => {
                contacts_debug!("CreateContact seq={}", seq);
                let result = self
                    .provider
                    .create_empty_contact()
                    .await
                    .map(|record| record.id)
                    .map_err(|err| {
                        contacts_error!("CreateContact seq={} failed: {}", seq, err);
                        err.to_string()
                    });
                Msg::ContactCreated { seq, result }
            }
        }
    }
}

pub fn to_contact(record: ContactRecord) -> Contact {
    Contact {
        id: record.id,
        first: record.first,
        last: record.last,
        avatar: record.avatar,
        twitter: record.twitter,
        notes: record.notes,
        favorite: record.favorite,
    }
}
