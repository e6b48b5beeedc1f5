use crate::error::Result;
use crate::models::{Post, PostDraft};

/// The collection behind the post table.
pub trait PostSource {
    /// Fetch every post.
    fn get_data(&self) -> Result<Vec<Post>>;

    /// Append a post built from `draft`.
    fn add_post(&mut self, draft: PostDraft) -> Result<Post>;

    /// Remove the post with `id`.
    fn delete_post(&mut self, id: u64) -> Result<()>;
}
