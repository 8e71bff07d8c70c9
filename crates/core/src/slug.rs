//! Filename derivation from heading titles.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use tracing::warn;

use crate::error::ConvertError;

static NON_ALNUM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Stem used when a heading has no ASCII alphanumerics at all.
const EMPTY_SLUG_FALLBACK: &str = "section";

/// Turn a heading title into a filesystem-safe slug.
///
/// Lower-cases the text, collapses every run of characters outside
/// `[a-z0-9]` into one hyphen and strips hyphens from both ends.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    NON_ALNUM_RE.replace_all(&lowered, "-").trim_matches('-').to_string()
}

/// What to do when two sections derive the same filename.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Append `-2`, `-3`, ... to later duplicates.
    #[default]
    Suffix,
    /// Abort with [`ConvertError::SlugCollision`].
    Fail,
    /// Later section replaces the earlier file.
    Overwrite,
}

impl CollisionPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Suffix => "suffix",
            Self::Fail => "fail",
            Self::Overwrite => "overwrite",
        }
    }
}

/// Hands out output stems for one split run.
#[derive(Debug)]
pub struct SlugAllocator {
    policy: CollisionPolicy,
    /// Stem -> title of the entry that claimed it.
    taken: HashMap<String, String>,
}

impl SlugAllocator {
    pub fn new(policy: CollisionPolicy) -> Self {
        Self { policy, taken: HashMap::new() }
    }

    /// Claim a stem that sections must not reuse (the main document).
    ///
    /// Stored lowercased: generated slugs are lowercase, and `Guide.qmd` and
    /// `guide.qmd` are the same file on case-insensitive filesystems.
    pub fn reserve(&mut self, stem: &str, owner: &str) {
        self.taken.insert(stem.to_lowercase(), owner.to_string());
    }

    /// Derive and claim a stem for a section titled `title`.
    pub fn allocate(&mut self, title: &str) -> Result<String, ConvertError> {
        let mut base = slugify(title);
        if base.is_empty() {
            base = EMPTY_SLUG_FALLBACK.to_string();
        }

        let Some(first) = self.taken.get(&base) else {
            self.taken.insert(base.clone(), title.to_string());
            return Ok(base);
        };

        match self.policy {
            CollisionPolicy::Overwrite => {
                warn!(
                    slug = %base,
                    first = %first,
                    second = %title,
                    "section overwrites earlier output"
                );
                Ok(base)
            }
            CollisionPolicy::Fail => Err(ConvertError::SlugCollision {
                slug: base,
                first: first.clone(),
                second: title.to_string(),
            }),
            CollisionPolicy::Suffix => {
                let mut n = 2;
                let mut candidate = format!("{base}-{n}");
                while self.taken.contains_key(&candidate) {
                    n += 1;
                    candidate = format!("{base}-{n}");
                }
                warn!(
                    slug = %base,
                    renamed = %candidate,
                    title = %title,
                    "duplicate section slug"
                );
                self.taken.insert(candidate.clone(), title.to_string());
                Ok(candidate)
            }
        }
    }
}
