pub mod client;
pub mod error;
pub mod types;

pub use client::{TeskertiClient, EVENTS_PATH};
pub use error::TeskertiError;
pub use types::{TeskertiApiResponse, TeskertiEvent};
