use crate::error::Result;
use crate::models::PostDraft;

/// Title of the add-post dialog.
pub const ADD_POST_TITLE: &str = "Add Post";

/// Width of the add-post dialog, in pixels for graphical front ends.
pub const ADD_POST_WIDTH: u16 = 600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogConfig {
    pub title: String,
    pub width: u16,
}

impl DialogConfig {
    pub fn add_post() -> Self {
        Self {
            title: ADD_POST_TITLE.to_string(),
            width: ADD_POST_WIDTH,
        }
    }
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self::add_post()
    }
}

/// A modal that produces at most one draft per `open`.
pub trait PostDialog {
    /// `Ok(None)` means the user dismissed the dialog.
    fn open(&mut self, config: &DialogConfig) -> Result<Option<PostDraft>>;
}

/// Emits a draft prepared up front, once; later opens yield nothing.
#[derive(Debug, Clone, Default)]
pub struct PresetDialog {
    draft: Option<PostDraft>,
}

impl PresetDialog {
    pub fn new(draft: PostDraft) -> Self {
        Self { draft: Some(draft) }
    }
}

impl PostDialog for PresetDialog {
    fn open(&mut self, _config: &DialogConfig) -> Result<Option<PostDraft>> {
        Ok(self.draft.take())
    }
}
