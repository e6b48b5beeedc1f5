use std::path::Path;

use crate::error::Result;
use crate::models::Post;

/// Write the post table to a CSV file.
pub fn write_posts_csv(posts: &[Post], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["id", "date_posted", "title", "category"])?;

    for post in posts {
        wtr.write_record([
            post.id.to_string(),
            post.date_posted.to_rfc3339(),
            post.title.clone(),
            post.category.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
