//! Placeholder launcher icons for android `mipmap-<density>` resource directories.
//!
//! ```no_run
//! let written = mipmap::MipmapRes::default().generate()?;
//! assert_eq!(written.len(), 10);
//! # Ok::<(), anyhow::Error>(())
//! ```
mod density;
mod icon;
mod res;

pub use crate::density::Density;
pub use crate::icon::{Icon, PLACEHOLDER_PNG};
pub use crate::res::{MipmapRes, DEFAULT_RES, ICON_NAMES};
