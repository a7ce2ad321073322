use std::{fmt, num::ParseIntError, str::FromStr};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unique key for one employee in the hierarchy.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EmployeeId(pub u64);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EmployeeId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<u64> for EmployeeId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// One entry in the input tree: an employee and their direct subordinates.
///
/// Matches the JSON shape of the employees data file, where `subordinates`
/// may be absent entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeNode {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subordinates: Vec<EmployeeNode>,
}

impl EmployeeNode {
    pub fn new(
        id: impl Into<EmployeeId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            subordinates: Vec::new(),
        }
    }

    pub fn with_subordinates(mut self, subordinates: Vec<EmployeeNode>) -> Self {
        self.subordinates = subordinates;
        self
    }
}

/// One entry in the flattened table: an employee with their resolved
/// supervisor chain and direct subordinate ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    /// Supervisor ids ordered from the root down to the immediate parent.
    /// Empty for the root.
    pub supervisors: Vec<EmployeeId>,
    /// Direct subordinate ids, in input order. Empty for leaves.
    pub subordinates: Vec<EmployeeId>,
}

impl EmployeeRecord {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// The flattened hierarchy: an order-preserving map from employee id to
/// record. Iteration order is traversal order (root first, then depth-first
/// by subordinate order). Built once by [`flatten`] and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeTable {
    records: IndexMap<EmployeeId, EmployeeRecord>,
}

impl EmployeeTable {
    pub fn get(&self, id: EmployeeId) -> Option<&EmployeeRecord> {
        self.records.get(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = &EmployeeRecord> {
        self.records.values()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlattenError {
    #[error("duplicate employee id in hierarchy: {0}")]
    DuplicateId(EmployeeId),
}

/// Flatten a rooted employee tree into an [`EmployeeTable`].
///
/// Explicit depth-first traversal with a stack, so arbitrarily deep
/// hierarchies cannot overflow the call stack. Subordinates are pushed in
/// reverse so siblings are visited in input order, which makes the table's
/// insertion order the preorder of the tree.
///
/// The input is borrowed read-only; the table owns its records. An id that
/// appears more than once in the input is rejected.
pub fn flatten(root: &EmployeeNode) -> Result<EmployeeTable, FlattenError> {
    let mut records = IndexMap::new();
    let mut stack = vec![(root, Vec::new())];

    while let Some((node, supervisors)) = stack.pop() {
        let record = EmployeeRecord {
            id: node.id,
            first_name: node.first_name.clone(),
            last_name: node.last_name.clone(),
            supervisors: supervisors.clone(),
            subordinates: node.subordinates.iter().map(|child| child.id).collect(),
        };
        if records.insert(node.id, record).is_some() {
            return Err(FlattenError::DuplicateId(node.id));
        }

        let mut child_supervisors = supervisors;
        child_supervisors.push(node.id);
        for child in node.subordinates.iter().rev() {
            stack.push((child, child_supervisors.clone()));
        }
    }

    Ok(EmployeeTable { records })
}

/// Resolve the display name for an employee id.
///
/// Returns the empty string when no id is selected or the id has no record
/// in the table. A missing name is not a failure, just nothing to display.
pub fn name_of(id: Option<EmployeeId>, table: &EmployeeTable) -> String {
    let Some(id) = id else {
        return String::new();
    };
    match table.get(id) {
        Some(record) => record.display_name(),
        None => String::new(),
    }
}
