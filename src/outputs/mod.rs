//! Output generation for per-keyword tabular artifacts.
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── challenge_<keyword>.csv   # one per successful keyword
//! ├── pictures/                 # card images, named from title and date
//! └── snapshots/                # error_<step>.html diagnostics
//! ```
//!
//! The `pictures/` and `snapshots/` subtrees are written by
//! [`crate::artifacts::FsArtifactStore`]; this module owns the CSV files.

pub mod csv;
