//! The preparation tasks, in pipeline order.
//!
//! | Task        | Gated | Output                                  |
//! |-------------|-------|-----------------------------------------|
//! | `editor`    | yes   | `assets/js/simplemde/simplemde.min.js`  |
//! | `highlight` | yes   | `assets/js/ace/{ace.js, mode-*.js}`     |
//! | `math`      | yes   | `assets/js/mathjax/**`                  |
//! | `locales`   | no    | `assets/js/i18n/<code>.json`            |
//! | `preinit`   | no    | `.build/_preinit.js`                    |
//! | `cache`     | no    | `.fusebox/` (emptied)                   |

mod cache;
mod editor;
mod highlight;
mod locales;
mod math;
mod preinit;

pub use cache::ClearCache;
pub use editor::CopyEditor;
pub use highlight::BuildHighlight;
pub use locales::BundleLocales;
pub use math::CopyMath;
pub use preinit::BundlePreinit;
