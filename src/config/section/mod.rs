//! Configuration section definitions.
//!
//! Each module corresponds to a section in `prep.toml`:
//!
//! | Module      | TOML Section  | Purpose                                  |
//! |-------------|---------------|------------------------------------------|
//! | `editor`    | `[editor]`    | Markdown editor bundle copy              |
//! | `highlight` | `[highlight]` | Highlighter core bundle and mode files   |
//! | `math`      | `[math]`      | Filtered math library copy               |
//! | `locales`   | `[locales]`   | Locale merge against the base locale     |
//! | `preinit`   | `[preinit]`   | Pre-init script concatenation            |
//! | `cache`     | `[cache]`     | Bundler cache directory to empty         |

mod cache;
mod editor;
mod highlight;
mod locales;
mod math;
mod preinit;

pub use cache::CacheConfig;
pub use editor::EditorConfig;
pub use highlight::HighlightConfig;
pub use locales::LocalesConfig;
pub use math::{ExcludeRule, FilterConfig, MathConfig};
pub use preinit::PreinitConfig;
