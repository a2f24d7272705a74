use sha2::{Digest, Sha256};

use crate::error::{Result, TagError};
use crate::exec::CommandRunner;
use crate::tagger::{TagOptions, Tagger};

/// Number of hex characters kept from the diff digest. Short enough to keep
/// tags readable; 64 bits is adequate within one repository's dirty-state
/// history.
const DIGEST_LEN: usize = 16;

/// Tags an image by the git commit it was built at
///
/// A clean working tree yields `<image>:<commit>`. A dirty tree gets a
/// `-dirty-<digest>` suffix derived from hashing the `git diff` output, so
/// local iterations on the same commit still produce distinct tags.
///
/// Cleanliness is judged by `git status --porcelain` output being empty;
/// any output at all counts as dirty, including untracked files. This is a
/// coarse policy inherited from existing tag histories.
pub struct GitCommitTagger<R: CommandRunner> {
    runner: R,
    program: String,
}

impl<R: CommandRunner> GitCommitTagger<R> {
    /// Create a tagger that invokes `git`
    pub fn new(runner: R) -> Self {
        GitCommitTagger {
            runner,
            program: "git".to_string(),
        }
    }

    /// Create a tagger that invokes a specific git executable
    pub fn with_program(runner: R, program: impl Into<String>) -> Self {
        GitCommitTagger {
            runner,
            program: program.into(),
        }
    }

    /// Hash the diff output and keep the leading hex characters
    fn change_digest(diff: &[u8]) -> String {
        let sha = Sha256::digest(diff);
        let mut hex = hex::encode(sha);
        hex.truncate(DIGEST_LEN);
        hex
    }
}

impl<R: CommandRunner> Tagger for GitCommitTagger<R> {
    fn generate_tag(&self, opts: &TagOptions) -> Result<String> {
        // If the repository state is dirty, a -dirty-<digest> suffix is
        // appended so local iterations on one commit stay distinguishable.
        let status = self
            .runner
            .run(&self.program, &["status", "--porcelain"], None)
            .map_err(TagError::StatusQuery)?;

        let mut suffix = String::new();
        if !status.stdout.is_empty() {
            // Dirty tree: hash the `git diff` output for a roughly
            // content-addressable suffix.
            let diff = self
                .runner
                .run(&self.program, &["diff"], None)
                .map_err(TagError::DiffQuery)?;
            suffix = format!("dirty-{}", Self::change_digest(&diff.stdout));
        }

        let head = self
            .runner
            .run(&self.program, &["rev-parse", "HEAD"], None)
            .map_err(TagError::CommitQuery)?;

        let stdout = head.stdout_text();
        let commit = stdout.strip_suffix('\n').unwrap_or(&stdout);

        if !suffix.is_empty() {
            Ok(format!("{}:{}-{}", opts.image_name, commit, suffix))
        } else {
            Ok(format!("{}:{}", opts.image_name, commit))
        }
    }
}
