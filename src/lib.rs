pub mod calculator;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod form;
pub mod interface;
pub mod models;
pub mod posts;

pub use dashboard::Dashboard;
pub use error::{DashError, Result};
pub use models::{MacroInputs, MacroOutcome, MacroTargets, Post, PostDraft};
