pub mod cli;
pub mod config;
pub mod detector;
pub mod error;
pub mod installer;
pub mod io;
pub mod logging;
pub mod version;

pub use error::{InstallerError, Result};
