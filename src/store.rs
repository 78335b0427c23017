//! The single source of truth for the sheet's field values. One instance per
//! session; every update shallow-merges and then synchronously notifies the
//! subscribers (the session-link rewrite is registered as one at startup).

use crate::schema::{FieldKey, FormState};
use std::fmt;

pub type Subscriber = Box<dyn FnMut(&FormState)>;

pub struct FormStore {
    state: FormState,
    subscribers: Vec<Subscriber>,
}

impl FormStore {
    pub fn new(initial: FormState) -> Self {
        Self {
            state: initial,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn value_of(&self, key: FieldKey) -> &str {
        self.state.value_of(key)
    }

    /// Shallow-merge `partial` into the current state, then notify every
    /// subscriber with the post-merge state. Writing `""` clears a field
    /// without removing its key.
    pub fn update(&mut self, partial: FormState) {
        self.state.merge(partial);
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
    }

    pub fn set(&mut self, key: FieldKey, value: impl Into<String>) {
        self.update(FormState::single(key, value));
    }

    pub fn subscribe(&mut self, f: impl FnMut(&FormState) + 'static) {
        self.subscribers.push(Box::new(f));
    }
}

impl fmt::Debug for FormStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn update_merges_key_by_key() {
        let mut store = FormStore::new(FormState::default());
        store.set(FieldKey::Name, "Jane Doe");
        store.set(FieldKey::Age, "30");

        assert_eq!(store.state().get(FieldKey::Name), Some("Jane Doe"));
        assert_eq!(store.state().get(FieldKey::Age), Some("30"));
    }

    #[test]
    fn clearing_writes_an_empty_string() {
        let mut store = FormStore::new(FormState::single(FieldKey::Zip, "60601"));
        store.set(FieldKey::Zip, "");

        assert_eq!(store.state().get(FieldKey::Zip), Some(""));
        assert_eq!(store.state().get(FieldKey::Race), None);
        assert_eq!(store.value_of(FieldKey::Zip), "");
        assert_eq!(store.value_of(FieldKey::Race), "");
    }

    #[test]
    fn subscriber_sees_post_merge_state_on_every_update() {
        let seen: Rc<RefCell<Vec<FormState>>> = Rc::default();
        let seen_by_sub = Rc::clone(&seen);

        let mut store = FormStore::new(FormState::single(FieldKey::Name, "Jane Doe"));
        store.subscribe(move |state| seen_by_sub.borrow_mut().push(state.clone()));

        store.set(FieldKey::Age, "30");
        store.set(FieldKey::Age, "31");

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        // Notification carries the whole merged state, not the partial.
        assert_eq!(seen[0].get(FieldKey::Name), Some("Jane Doe"));
        assert_eq!(seen[0].get(FieldKey::Age), Some("30"));
        assert_eq!(seen[1].get(FieldKey::Age), Some("31"));
    }

    #[test]
    fn notification_runs_after_the_mutation_is_readable() {
        let observed = Rc::new(RefCell::new(String::new()));
        let observed_by_sub = Rc::clone(&observed);

        let mut store = FormStore::new(FormState::default());
        store.subscribe(move |state| {
            *observed_by_sub.borrow_mut() = state.value_of(FieldKey::Gender).to_string();
        });
        store.set(FieldKey::Gender, "F");

        assert_eq!(*observed.borrow(), "F");
    }
}
