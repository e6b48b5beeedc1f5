use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A post row in the dashboard table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,

    pub title: String,

    pub category: String,

    #[serde(default)]
    pub body: String,

    pub date_posted: DateTime<Utc>,
}

/// Payload emitted by the add-post dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub category: String,
    pub body: String,
}

impl PostDraft {
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            body: body.into(),
        }
    }

    /// Turn the draft into a stored post.
    pub fn into_post(self, id: u64, date_posted: DateTime<Utc>) -> Post {
        Post {
            id,
            title: self.title,
            category: self.category,
            body: self.body,
            date_posted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_post_keeps_draft_fields() {
        let now = Utc::now();
        let post = PostDraft::new("Leg day", "Training", "Squats").into_post(7, now);

        assert_eq!(post.id, 7);
        assert_eq!(post.title, "Leg day");
        assert_eq!(post.category, "Training");
        assert_eq!(post.body, "Squats");
        assert_eq!(post.date_posted, now);
    }

    #[test]
    fn test_body_defaults_when_missing() {
        let json = r#"{"id": 1, "title": "Hi", "category": "General", "date_posted": "2024-03-01T12:00:00Z"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.body, "");
        assert_eq!(post.title, "Hi");
    }
}
