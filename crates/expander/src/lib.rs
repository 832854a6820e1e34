//! # Longpath Expander
//!
//! Expansion of Windows 8.3 short-name path components (e.g. `PROGRA~1`) to
//! their long form.
//!
//! ## Pipeline
//!
//! ```text
//! Input path
//!     │
//!     ├──> Normalize (forward slashes, absolute)
//!     │      └─> Fast path: no `~` marker, done
//!     │
//!     ├──> Component walk (root outward)
//!     │      └─> Identity match against the parent listing
//!     │
//!     └──> Native fallback (Windows/x64)
//!            └─> Best-effort result, never an error
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use longpath_expander::ShortPathExpander;
//!
//! #[tokio::main]
//! async fn main() {
//!     let expander = ShortPathExpander::new();
//!     let long = expander.expand(r"C:\PROGRA~1\App").await;
//!     println!("{long}");
//! }
//! ```

mod error;
mod expander;
mod fs;
mod identity;
mod native;
mod normalize;

pub use error::{ExpandError, Result};
pub use expander::{ShortPathExpander, SHORT_NAME_MARKER};
pub use fs::{Filesystem, OsFilesystem};
pub use identity::EntryIdentity;
pub use normalize::{absolutize, normalize};
