use regex::Regex;
use tracing::debug;

use crate::error::{DashError, Result};

/// Handle returned by [`FormField::on_change`], used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&str)>;

/// A single text field validated by an anchored pattern.
///
/// Listeners are notified in registration order every time the value
/// changes, including when it is cleared.
pub struct FormField {
    label: &'static str,
    pattern: Regex,
    value: String,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl FormField {
    /// Build a field from an unanchored pattern; the whole value must match.
    pub fn new(label: &'static str, pattern: &str) -> Result<Self> {
        let anchored = format!("^(?:{})$", pattern);
        let pattern = Regex::new(&anchored)
            .map_err(|e| DashError::InvalidInput(format!("bad pattern for {}: {}", label, e)))?;

        Ok(Self {
            label,
            pattern,
            value: String::new(),
            listeners: Vec::new(),
            next_listener: 0,
        })
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Trimmed value, or `None` when the field is blank.
    pub fn present_value(&self) -> Option<&str> {
        let trimmed = self.value.trim();
        if trimmed.is_empty() { None } else { Some(trimmed) }
    }

    /// Check a candidate value without storing it. Empty values pass.
    pub fn accepts(&self, candidate: &str) -> bool {
        candidate.is_empty() || self.pattern.is_match(candidate)
    }

    /// Validate and store a new value, then notify listeners.
    ///
    /// On rejection the previous value is kept.
    pub fn set_value(&mut self, value: &str) -> Result<()> {
        if !self.accepts(value) {
            debug!(field = self.label, value, "rejected field input");
            return Err(DashError::InvalidInput(format!(
                "'{}' is not a valid {}",
                value, self.label
            )));
        }

        self.value = value.to_string();
        self.notify();
        Ok(())
    }

    /// Reset to empty and notify listeners.
    pub fn clear(&mut self) {
        self.value.clear();
        self.notify();
    }

    /// Register a change listener.
    pub fn on_change(&mut self, listener: impl FnMut(&str) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Unregister a listener. Returns false if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.value);
        }
    }
}

impl std::fmt::Debug for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormField")
            .field("label", &self.label)
            .field("pattern", &self.pattern.as_str())
            .field("value", &self.value)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Text to show for an autocomplete choice; blank shows nothing.
pub fn display_choice(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
