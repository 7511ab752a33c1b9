//! game-video-retrofit - adds the shared game video widget to Flutter game screens
//!
//! Each configured Dart screen is rewritten in place by plain text
//! substitution: the widget import is added, a `_getCurrentVideoType()`
//! helper is placed above `build`, and the game area inside `build` becomes a
//! two-column row with the video on the left. Every step checks for its own
//! sentinel first, so the whole run is safe to repeat.
//!
//! # Example Usage
//!
//! ```no_run
//! use game_video_retrofit::{Driver, RealFileSystem, RetrofitConfig};
//!
//! let config = RetrofitConfig::default();
//! config.validate().expect("valid built-in configuration");
//!
//! let driver = Driver::new(config, RealFileSystem::new());
//! let summary = driver.run(|record, outcome| {
//!     println!("{}: {}", record.filename, outcome);
//! });
//! println!("{} updated", summary.updated);
//! ```
//!
//! # Project Structure
//!
//! - [`retrofit`]: pattern library, transformers and the pipeline
//! - [`processor`]: read, transform and write back one file
//! - [`driver`]: sequential run over the configured files
//! - [`config`]: base directory and game file list
//! - [`fs`]: file system seam with disk and in-memory implementations

pub mod cli;
pub mod config;
pub mod driver;
pub mod fs;
pub mod processor;
pub mod retrofit;
pub mod util;

pub use config::{ConfigError, GameGroup, RetrofitConfig};
pub use driver::{Driver, Summary};
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use processor::{FileProcessor, FileRecord, Outcome, ProcessError};
pub use retrofit::{InsertHelper, InsertImport, Pipeline, RewriteBuild, Transformer};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
