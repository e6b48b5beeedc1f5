use std::cell::RefCell;
use std::rc::Rc;

use crate::form::field::{FormField, ListenerId};

type Subscriber = Box<dyn FnMut(&[&'static str])>;

struct FeedState {
    candidates: Vec<&'static str>,
    subscriber: Option<Subscriber>,
}

impl FeedState {
    // Typed text is not used to narrow the list: every change emits all
    // candidates.
    fn filtered(&self, _typed: &str) -> Vec<&'static str> {
        self.candidates.clone()
    }

    fn emit(&mut self, typed: &str) {
        let list = self.filtered(typed);
        if let Some(subscriber) = self.subscriber.as_mut() {
            subscriber(&list);
        }
    }
}

/// Push stream of autocomplete candidates for a choice field.
///
/// Starts with the full candidate list on every subscribe and re-emits on
/// each change of the attached field. Holds one subscriber at a time.
pub struct SuggestionFeed {
    state: Rc<RefCell<FeedState>>,
    listener: ListenerId,
}

impl SuggestionFeed {
    /// Attach a new feed to `field`.
    pub fn attach(field: &mut FormField, candidates: Vec<&'static str>) -> Self {
        let state = Rc::new(RefCell::new(FeedState {
            candidates,
            subscriber: None,
        }));

        let weak = Rc::downgrade(&state);
        let listener = field.on_change(move |value| {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().emit(value);
            }
        });

        Self { state, listener }
    }

    /// Stop listening to `field`. Call before dropping a replaced feed.
    pub fn detach(self, field: &mut FormField) {
        field.remove_listener(self.listener);
    }

    /// Subscribe, replacing any previous subscriber. Emits the full list
    /// immediately.
    pub fn subscribe(&self, subscriber: impl FnMut(&[&'static str]) + 'static) {
        let mut state = self.state.borrow_mut();
        state.subscriber = Some(Box::new(subscriber));
        state.emit("");
    }

    pub fn unsubscribe(&self) {
        self.state.borrow_mut().subscriber = None;
    }

    /// Current list without subscribing.
    pub fn current(&self) -> Vec<&'static str> {
        self.state.borrow().filtered("")
    }
}

impl std::fmt::Debug for SuggestionFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("SuggestionFeed")
            .field("candidates", &state.candidates)
            .field("subscribed", &state.subscriber.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<Vec<&'static str>>>>, impl FnMut(&[&'static str])) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        (log, move |list: &[&'static str]| sink.borrow_mut().push(list.to_vec()))
    }

    fn goal_field() -> FormField {
        FormField::new("weight goal", "(Gain|Lose|Maintain)").unwrap()
    }

    #[test]
    fn test_subscribe_starts_with_full_list() {
        let mut field = goal_field();
        let feed = SuggestionFeed::attach(&mut field, vec!["Gain", "Lose", "Maintain"]);

        let (log, sink) = recorder();
        feed.subscribe(sink);

        assert_eq!(*log.borrow(), vec![vec!["Gain", "Lose", "Maintain"]]);
    }

    #[test]
    fn test_typed_prefix_does_not_narrow_list() {
        let mut field = goal_field();
        let feed = SuggestionFeed::attach(&mut field, vec!["Gain", "Lose", "Maintain"]);
        let (log, sink) = recorder();
        feed.subscribe(sink);

        field.set_value("Lose").unwrap();

        let log = log.borrow();
        assert_eq!(log.len(), 2);
        assert_eq!(log[1], vec!["Gain", "Lose", "Maintain"]);
    }

    #[test]
    fn test_new_subscriber_replaces_old() {
        let mut field = goal_field();
        let feed = SuggestionFeed::attach(&mut field, vec!["Gain", "Lose", "Maintain"]);

        let (first, sink) = recorder();
        feed.subscribe(sink);
        let (second, sink) = recorder();
        feed.subscribe(sink);

        field.set_value("Gain").unwrap();

        assert_eq!(first.borrow().len(), 1);
        assert_eq!(second.borrow().len(), 2);
    }

    #[test]
    fn test_detach_removes_field_listener() {
        let mut field = goal_field();
        let feed = SuggestionFeed::attach(&mut field, vec!["Gain"]);
        assert_eq!(field.listener_count(), 1);

        feed.detach(&mut field);
        assert_eq!(field.listener_count(), 0);
    }

    #[test]
    fn test_dropped_feed_listener_is_inert() {
        let mut field = goal_field();
        let feed = SuggestionFeed::attach(&mut field, vec!["Gain"]);
        drop(feed);

        // The weak handle is gone; setting a value must not panic.
        field.set_value("Gain").unwrap();
    }
}
