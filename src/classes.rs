/// Character class groups, embedded at compile time from `data/classes.toml`.
///
/// A class is either volatile (churns faster once engagement drops), steady
/// (sticks around once engaged) or neutral. Only the first two move the score,
/// and only when the matching engagement flag is set.
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

const CLASSES_TOML: &str = include_str!("../data/classes.toml");

// ---------------------------------------------------------------------------
// TOML deserialization structs (private)
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct TomlFile {
    groups: TomlGroups,
}

#[derive(Deserialize)]
struct TomlGroups {
    #[serde(default)]
    volatile: Vec<String>,
    #[serde(default)]
    steady:   Vec<String>,
}

static GROUPS: Lazy<ClassTable> = Lazy::new(|| match toml::from_str::<TomlFile>(CLASSES_TOML) {
    Ok(file) => ClassTable {
        volatile: file.groups.volatile,
        steady:   file.groups.steady,
    },
    Err(e) => {
        tracing::error!("Failed to parse embedded class table: {}", e);
        ClassTable::default()
    }
});

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassGroup {
    Volatile,
    Steady,
    Neutral,
}

impl ClassGroup {
    /// Exact, case-sensitive lookup.
    pub fn of(class: &str) -> Self {
        let table = &*GROUPS;
        if table.volatile.iter().any(|c| c == class) {
            ClassGroup::Volatile
        } else if table.steady.iter().any(|c| c == class) {
            ClassGroup::Steady
        } else {
            ClassGroup::Neutral
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ClassTable {
    pub volatile: Vec<String>,
    pub steady:   Vec<String>,
}

/// The embedded table, for display.
pub fn list_groups() -> &'static ClassTable {
    &GROUPS
}
