pub mod config;
pub mod dashboard;
pub mod poller;
pub mod rclone_client;
pub mod readable;
pub mod render;
pub mod types;
pub mod view;

pub use types::MonitorError;
