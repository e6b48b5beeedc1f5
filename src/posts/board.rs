use tracing::{info, warn};

use crate::error::{DashError, Result};
use crate::models::Post;
use crate::posts::auth::Authenticator;
use crate::posts::data_source::PostDataSource;
use crate::posts::dialog::{DialogConfig, PostDialog};
use crate::posts::source::PostSource;

/// Columns shown by the post table, in order.
pub const DISPLAYED_COLUMNS: [&str; 4] = ["date_posted", "title", "category", "delete"];

/// The post table: a source, an auth check and the bound data source.
#[derive(Debug)]
pub struct PostBoard<S, A> {
    source: S,
    auth: A,
    data_source: PostDataSource,
    dialog_config: DialogConfig,
}

impl<S: PostSource, A: Authenticator> PostBoard<S, A> {
    pub fn new(source: S, auth: A) -> Self {
        Self {
            source,
            auth,
            data_source: PostDataSource::new(),
            dialog_config: DialogConfig::add_post(),
        }
    }

    /// Override the add dialog's configuration.
    pub fn with_dialog_config(mut self, config: DialogConfig) -> Self {
        self.dialog_config = config;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn data_source(&self) -> &PostDataSource {
        &self.data_source
    }

    /// Current rows from the bound data source.
    pub fn rows(&mut self) -> Result<Vec<Post>> {
        Ok(self.data_source.connect(&self.source)?.collect())
    }

    /// Delete a post. Requires an authenticated session; otherwise the
    /// source is left untouched and `DashError::Unauthenticated` is returned.
    pub fn delete_post(&mut self, id: u64) -> Result<()> {
        if !self.auth.is_authenticated() {
            warn!(id, "delete refused, not authenticated");
            return Err(DashError::Unauthenticated);
        }

        self.source.delete_post(id)?;
        self.rebind();
        Ok(())
    }

    /// Open the add dialog and store its result, if any.
    ///
    /// Returns the stored post, or `None` when the dialog was dismissed.
    pub fn add_post(&mut self, dialog: &mut dyn PostDialog) -> Result<Option<Post>> {
        let Some(draft) = dialog.open(&self.dialog_config)? else {
            info!("add post dialog dismissed");
            return Ok(None);
        };

        let post = self.source.add_post(draft)?;
        self.rebind();
        Ok(Some(post))
    }

    fn rebind(&mut self) {
        self.data_source.disconnect();
        self.data_source = self.data_source.rebind();
    }
}
