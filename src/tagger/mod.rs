//! Tag generation strategies
//!
//! A tagger derives a fully-qualified image tag from the ambient state of
//! the working tree. Strategies implement the [Tagger] trait so callers can
//! stay independent of how the tag value is derived.

pub mod git_commit;

pub use git_commit::GitCommitTagger;

use crate::error::Result;

/// Input configuration for tag generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOptions {
    /// The base image name to qualify (e.g., "registry.io/team/myapp")
    pub image_name: String,
}

impl TagOptions {
    /// Create options for the given base image name
    pub fn new(image_name: impl Into<String>) -> Self {
        TagOptions {
            image_name: image_name.into(),
        }
    }
}

/// Common tag generation trait for abstraction
///
/// ## Determinism
///
/// Implementors must be deterministic with respect to a fixed working-tree
/// state: two calls with the same options against an unchanged tree return
/// byte-identical tags.
///
/// ## Error Handling
///
/// Failures are terminal for the call; no fallback tag is ever substituted.
pub trait Tagger: Send + Sync {
    /// Generate a fully-qualified image tag for the given options
    ///
    /// # Returns
    /// * `Ok(String)` - The composed `<image>:<tag>` string
    /// * `Err` - If any underlying query failed; no partial output exists
    fn generate_tag(&self, opts: &TagOptions) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_options_new() {
        let opts = TagOptions::new("myapp");
        assert_eq!(opts.image_name, "myapp");
    }
}
