//! Asset transforms and copying.

mod copy;
mod filter;
pub mod minify;

pub use copy::{copy_filtered, list_files};
pub use filter::CopyFilter;
pub use minify::minify_js;
