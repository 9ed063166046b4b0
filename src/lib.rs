//! # Practice Lessons
//!
//! Small, self-contained lessons on core language features, plus one
//! profile screen that fetches a user from the GitHub API and publishes it
//! to a display binding.
//!
//! ## Patterns Covered
//!
//! 1. **Reference Counting** - Strong cycles leak, `Weak` back edges don't
//! 2. **Value vs Shared Semantics** - `Clone` copies, `Rc<RefCell<_>>` aliases
//! 3. **Delegates** - A one-method listener held through a `Weak`
//! 4. **Collection Transforms** - filter, map, fold, flatten
//! 5. **Generics** - One function over any ordered type
//! 6. **Optionals** - `if let`, `let ... else`, defaults
//! 7. **Sets** - Intersection, difference, union and friends
//! 8. **Singletons** - Initialize-once global state with `OnceLock`
//! 9. **Async Fetch** - GET, validate status, decode, publish
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin lesson_retain_cycle
//! cargo run --bin lesson_value_semantics
//! cargo run --bin lesson_delegate
//! cargo run --bin lesson_collections
//! cargo run --bin lesson_generics
//! cargo run --bin lesson_optionals
//! cargo run --bin lesson_sets
//! cargo run --bin lesson_singleton
//!
//! # Profile screen
//! cargo run --bin fetch_profile -- --user octocat
//! ```
//!
//! ## Key Dependencies
//!
//! - `tokio` / `reqwest` - Async runtime and HTTP client
//! - `serde` / `serde_json` - Decoding the profile payload
//! - `thiserror` - Error enums for the fetch flow and config
//! - `log` - Logging facade (binaries install `pretty_env_logger`)

pub mod config;
pub mod fetcher;
pub mod lessons;
pub mod profile;
pub mod screen;

pub use config::{ConfigError, FetchConfig};
pub use fetcher::{FetchError, FetchErrorKind, ProfileFetcher};
pub use profile::{Profile, ProfileError};
pub use screen::{Avatar, ProfileCard, ProfileScreen};

/// Installs `pretty_env_logger`, defaulting to `info` when `RUST_LOG` is unset.
pub fn init_logging() {
    let mut builder = pretty_env_logger::formatted_builder();
    match std::env::var("RUST_LOG") {
        Ok(filters) => builder.parse_filters(&filters),
        Err(_) => builder.filter_level(log::LevelFilter::Info),
    };
    // A second init (tests, repeated calls) is harmless.
    let _ = builder.try_init();
}
