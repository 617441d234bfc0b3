// Library interface for leetcode_fetcher
// The binary and the integration tests both go through these modules

pub mod browser;
pub mod config;
pub mod fetcher;
pub mod helpers;
pub mod logging;
pub mod models;
pub mod output;

pub use fetcher::{Fetcher, PROBLEM_DESCRIPTION_SELECTOR};
pub use models::FetchResult;
