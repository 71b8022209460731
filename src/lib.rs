pub mod analyzer;
pub mod capture;
pub mod config;
pub mod error;
pub mod feed;
pub mod model;
pub mod report;
pub mod verdict;
