//! Unique CSS class names for template stylesheets.
//!
//! Every template that ships a stylesheet scopes its rules to a class name it
//! allocates here, so two templates (or two copies of the same template built
//! for different content views) can never match each other's markup.

use std::borrow::Cow;
use std::sync::atomic::{AtomicU64, Ordering};

use once_cell::sync::Lazy;

/// Prefix used by [`ClassNameAllocator::new`].
pub const DEFAULT_CLASS_PREFIX: &str = "readium";

static GLOBAL_ALLOCATOR: Lazy<ClassNameAllocator> = Lazy::new(ClassNameAllocator::new);

/// Thread-safe source of unique class names of the form `{prefix}-{key}-{n}`.
///
/// The counter starts at 1, only ever increases, and is shared by all keys:
/// allocating `"highlight"` twice yields two distinct names.
///
/// # Example
///
/// ```rust
/// use html_decorations::ClassNameAllocator;
///
/// let classes = ClassNameAllocator::new();
/// assert_eq!(classes.allocate("highlight"), "readium-highlight-1");
/// assert_eq!(classes.allocate("highlight"), "readium-highlight-2");
/// assert_eq!(classes.allocate("sidemark"), "readium-sidemark-3");
/// ```
#[derive(Debug)]
pub struct ClassNameAllocator {
    prefix: Cow<'static, str>,
    last: AtomicU64,
}

impl ClassNameAllocator {
    /// Creates an allocator using the `readium` prefix.
    pub const fn new() -> Self {
        Self {
            prefix: Cow::Borrowed(DEFAULT_CLASS_PREFIX),
            last: AtomicU64::new(0),
        }
    }

    /// Creates an allocator with a custom prefix.
    pub fn with_prefix(prefix: impl Into<Cow<'static, str>>) -> Self {
        Self {
            prefix: prefix.into(),
            last: AtomicU64::new(0),
        }
    }

    /// Returns the process-wide allocator.
    ///
    /// It is created on first use and lives until the process exits, so class
    /// names stay unique across every registry built from it.
    pub fn global() -> &'static ClassNameAllocator {
        &GLOBAL_ALLOCATOR
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the last counter value handed out, or 0 if none.
    pub fn last(&self) -> u64 {
        self.last.load(Ordering::Acquire)
    }

    /// Allocates a fresh class name for `key`.
    pub fn allocate(&self, key: &str) -> String {
        let n = self.last.fetch_add(1, Ordering::AcqRel) + 1;
        let name = format!("{}-{}-{}", self.prefix, key, n);
        log::trace!("allocated decoration class name {name}");
        name
    }
}

impl Default for ClassNameAllocator {
    fn default() -> Self {
        Self::new()
    }
}
