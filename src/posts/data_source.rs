use crate::error::Result;
use crate::models::Post;
use crate::posts::source::PostSource;

/// Connect/disconnect adapter between a [`PostSource`] and a table.
///
/// A new generation is created on every rebind; a table bound to an older
/// generation should re-fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PostDataSource {
    generation: u64,
    connected: bool,
}

impl PostDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// The adapter that replaces this one after a mutation.
    pub fn rebind(&self) -> Self {
        Self {
            generation: self.generation + 1,
            connected: false,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Fetch rows from `source`. Nothing is read before this is called.
    pub fn connect<S: PostSource + ?Sized>(
        &mut self,
        source: &S,
    ) -> Result<std::vec::IntoIter<Post>> {
        let posts = source.get_data()?;
        self.connected = true;
        Ok(posts.into_iter())
    }

    pub fn disconnect(&mut self) {
        self.connected = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PostDraft;
    use chrono::Utc;

    struct FixedSource(Vec<Post>);

    impl PostSource for FixedSource {
        fn get_data(&self) -> Result<Vec<Post>> {
            Ok(self.0.clone())
        }

        fn add_post(&mut self, draft: PostDraft) -> Result<Post> {
            let post = draft.into_post(self.0.len() as u64 + 1, Utc::now());
            self.0.push(post.clone());
            Ok(post)
        }

        fn delete_post(&mut self, id: u64) -> Result<()> {
            self.0.retain(|p| p.id != id);
            Ok(())
        }
    }

    #[test]
    fn test_connect_yields_rows() {
        let mut source = FixedSource(Vec::new());
        source.add_post(PostDraft::new("a", "x", "")).unwrap();
        source.add_post(PostDraft::new("b", "y", "")).unwrap();

        let mut ds = PostDataSource::new();
        assert!(!ds.is_connected());

        let titles: Vec<String> = ds.connect(&source).unwrap().map(|p| p.title).collect();
        assert_eq!(titles, vec!["a", "b"]);
        assert!(ds.is_connected());

        ds.disconnect();
        assert!(!ds.is_connected());
    }

    #[test]
    fn test_rebind_bumps_generation() {
        let ds = PostDataSource::new();
        let next = ds.rebind();
        assert_eq!(next.generation(), ds.generation() + 1);
        assert!(!next.is_connected());
    }
}
