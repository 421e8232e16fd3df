// crates/districtdb-core/src/tree.rs

//! # Region Tree Store
//!
//! The district list is persisted as a compressed tree: nested name → child
//! maps, except that a branch whose children are all terminal collapses to a
//! flat list of their names. `expand` walks the tree back out into full
//! path strings, emitting every intermediate level as its own candidate —
//! `서울특별시-강남구` is a selectable region in its own right, not just a
//! prefix of its towns.

use crate::common::DbStats;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Delimiter between region levels inside a full path string.
pub const PATH_SEPARATOR: char = '-';

/// One node of the compressed region tree.
///
/// `Leaves` holds terminal names with no descendants; an empty `Leaves` is a
/// terminal whose siblings kept the parent from collapsing. A key mapping to
/// a `Branch` always has at least one non-terminal descendant, otherwise the
/// branch would have been collapsed into its parent's leaf list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionNode {
    Branch(BTreeMap<String, RegionNode>),
    Leaves(Vec<String>),
}

/// The in-memory district database: a compressed region tree, immutable
/// after construction. Rebuild from source if the dataset changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistrictDb {
    root: RegionNode,
}

/// Intermediate build representation: plain nested maps, no collapsing yet.
#[derive(Default)]
struct BuildNode(BTreeMap<String, BuildNode>);

impl DistrictDb {
    /// Build a compressed tree from full path strings
    /// (`서울특별시-강남구-압구정동`, `서울특별시-강남구`, ...).
    ///
    /// Duplicate entries and entries that are prefixes of other entries are
    /// absorbed by construction. Empty components are skipped.
    ///
    /// ```
    /// use districtdb_core::DistrictDb;
    ///
    /// let db = DistrictDb::from_paths(["서울특별시-종로구-삼청동", "서울특별시-종로구"]);
    /// assert_eq!(db.expand().len(), 3);
    /// ```
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut root = BuildNode::default();
        for path in paths {
            let mut level = &mut root;
            for part in path
                .as_ref()
                .split(PATH_SEPARATOR)
                .filter(|p| !p.trim().is_empty())
            {
                level = level.0.entry(part.to_string()).or_default();
            }
        }
        DistrictDb {
            root: compress(root),
        }
    }

    /// Reconstruct every full path string held in the tree.
    ///
    /// Each non-root node contributes the path down to itself, so all
    /// prefixes of the original entries come back, intermediate levels
    /// included. Every call re-derives the list from scratch; there is no
    /// shared cursor and no cache.
    pub fn expand(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_paths(&self.root, "", &mut out);
        out
    }

    /// Per-level entry counts, for diagnostics and the CLI `stats` command.
    pub(crate) fn level_counts(&self) -> DbStats {
        let mut stats = DbStats {
            provinces: 0,
            cities: 0,
            towns: 0,
        };
        for path in self.expand() {
            match path.split(PATH_SEPARATOR).count() {
                1 => stats.provinces += 1,
                2 => stats.cities += 1,
                _ => stats.towns += 1,
            }
        }
        stats
    }
}

/// Collapse pass: a branch whose children are all childless becomes a flat
/// leaf list of their names. A childless node inside a mixed branch becomes
/// an empty leaf list, so its path survives expansion.
fn compress(node: BuildNode) -> RegionNode {
    let BuildNode(children) = node;
    if children.values().all(|child| child.0.is_empty()) {
        RegionNode::Leaves(children.into_keys().collect())
    } else {
        RegionNode::Branch(
            children
                .into_iter()
                .map(|(name, child)| (name, compress(child)))
                .collect(),
        )
    }
}

fn collect_paths(node: &RegionNode, prefix: &str, out: &mut Vec<String>) {
    if !prefix.is_empty() {
        out.push(prefix.to_string());
    }
    match node {
        RegionNode::Branch(children) => {
            for (name, child) in children {
                collect_paths(child, &join(prefix, name), out);
            }
        }
        RegionNode::Leaves(names) => {
            for name in names {
                out.push(join(prefix, name));
            }
        }
    }
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}{PATH_SEPARATOR}{name}")
    }
}

// ---------------------------------------------------------------------------
// JSON interchange (tree form)
// ---------------------------------------------------------------------------

#[cfg(feature = "json")]
mod json_form {
    use super::*;
    use crate::error::{DistrictError, Result};
    use serde_json::Value;

    impl RegionNode {
        /// Convert a JSON tree node, tolerantly: objects become branches,
        /// arrays become leaf lists (non-string elements dropped), and any
        /// other shape — `null`, numbers, strings — becomes an empty
        /// subtree. A partially corrupt dataset loses only the corrupt
        /// parts, it never fails the load.
        pub fn from_json_value(value: &Value) -> Self {
            match value {
                Value::Object(map) => RegionNode::Branch(
                    map.iter()
                        .map(|(name, child)| (name.clone(), Self::from_json_value(child)))
                        .collect(),
                ),
                Value::Array(items) => RegionNode::Leaves(
                    items
                        .iter()
                        .filter_map(|item| item.as_str().map(String::from))
                        .collect(),
                ),
                _ => RegionNode::Leaves(Vec::new()),
            }
        }

        pub fn to_json_value(&self) -> Value {
            match self {
                RegionNode::Branch(children) => Value::Object(
                    children
                        .iter()
                        .map(|(name, child)| (name.clone(), child.to_json_value()))
                        .collect(),
                ),
                RegionNode::Leaves(names) => {
                    Value::Array(names.iter().map(|name| Value::String(name.clone())).collect())
                }
            }
        }
    }

    impl DistrictDb {
        /// Interpret a parsed JSON dataset.
        ///
        /// Accepts both persisted forms: a flat array of full path strings
        /// (the uncompressed source list) or the compressed tree object.
        /// Anything else at the root is a hard error — unlike inner-node
        /// corruption, a wrong root means the wrong file.
        pub fn from_json_value(value: &Value) -> Result<Self> {
            match value {
                Value::Array(paths) => Ok(Self::from_paths(
                    paths.iter().filter_map(|entry| entry.as_str()),
                )),
                Value::Object(_) => Ok(DistrictDb {
                    root: RegionNode::from_json_value(value),
                }),
                _ => Err(DistrictError::InvalidData(
                    "dataset root must be a JSON array of paths or a tree object".into(),
                )),
            }
        }

        /// The compressed tree as a JSON value, as written by the builder.
        pub fn to_json_value(&self) -> Value {
            self.root.to_json_value()
        }
    }
}
