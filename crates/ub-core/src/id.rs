use crate::model::ComponentKind;
use lasso::{Spur, ThreadedRodeo};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// Global string interner for component ids.
static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

/// An opaque, interned component identifier.
/// Internally a 4-byte `Spur` index, so comparison and hashing are O(1).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(Spur);

impl ComponentId {
    /// Intern a string as a ComponentId, or return the existing one.
    pub fn intern(s: &str) -> Self {
        ComponentId(INTERNER.get_or_intern(s))
    }

    /// Find an already-interned id without interning `s`.
    pub fn lookup(s: &str) -> Option<Self> {
        INTERNER.get(s).map(ComponentId)
    }

    /// Resolve back to a string slice.
    pub fn as_str(&self) -> &str {
        INTERNER.resolve(&self.0)
    }
}

impl fmt::Debug for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.as_str())
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ComponentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ComponentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ComponentId::intern(&s))
    }
}

// ─── Id generation ───────────────────────────────────────────────────────

/// Source of fresh component ids. Injected into the palette so tests and
/// hosts can control naming.
pub trait IdGenerator {
    /// Produce an id that has never been returned by this generator before.
    fn next_id(&mut self, kind: ComponentKind) -> ComponentId;
}

/// Default generator: `{kind}-{n}` with a per-generator monotonic counter.
///
/// Uniqueness does not depend on wall-clock time, so back-to-back calls in
/// the same millisecond still yield distinct ids.
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting at `n` (e.g. to continue after an imported document).
    pub fn starting_at(n: u64) -> Self {
        Self { next: n }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self, kind: ComponentKind) -> ComponentId {
        let n = self.next;
        self.next += 1;
        ComponentId::intern(&format!("{}-{n}", kind.name()))
    }
}
