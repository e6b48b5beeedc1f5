mod auth;
mod board;
mod data_source;
mod dialog;
mod source;
mod store;

pub use auth::{Authenticator, SessionAuth, StaticAuth};
pub use board::{PostBoard, DISPLAYED_COLUMNS};
pub use data_source::PostDataSource;
pub use dialog::{DialogConfig, PostDialog, PresetDialog, ADD_POST_TITLE, ADD_POST_WIDTH};
pub use source::PostSource;
pub use store::{load_posts, save_posts, JsonPostStore};
