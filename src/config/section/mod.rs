//! Configuration section definitions.
//!
//! Each module corresponds to a section in `postmigrate.toml`:
//!
//! | Module     | TOML Section   | Purpose                                 |
//! |------------|----------------|-----------------------------------------|
//! | `paths`    | `[paths]`      | Posts, output and categories locations  |
//! | `slug`     | `[slug]`       | Slug character policy and separator     |
//! | `content`  | `[content]`    | Content rewrite settings                |
//! | `comments` | `[comments]`   | Defaults for missing comment flags      |

mod comments;
mod content;
mod paths;
mod slug;

pub use comments::CommentsConfig;
pub use content::ContentConfig;
pub use paths::PathsConfig;
pub use slug::{SlugConfig, SlugMode, SlugSeparator};
