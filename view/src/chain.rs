use std::fmt;

use orgchart_tree::{name_of, EmployeeId, EmployeeTable};
use serde::{Deserialize, Serialize};

use crate::RosterEntry;

/// The supervisor chain for one selected employee: every supervisor from the
/// root down to the immediate parent, then the employee themselves as the
/// final, distinguished entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupervisorChain {
    pub supervisors: Vec<RosterEntry>,
    /// Display name of the selected employee. Empty when nothing is selected
    /// or the id is unknown.
    pub selected: String,
}

/// Build the supervisor chain for `id`.
///
/// With no selection or an unknown id the supervisor list is empty and the
/// selected name resolves to the empty string; that still renders (as a lone
/// blank entry), it is not an error.
pub fn supervisor_chain(id: Option<EmployeeId>, table: &EmployeeTable) -> SupervisorChain {
    let supervisors = id
        .and_then(|id| table.get(id))
        .map(|record| {
            record
                .supervisors
                .iter()
                .map(|&supervisor_id| RosterEntry {
                    id: supervisor_id,
                    display_name: name_of(Some(supervisor_id), table),
                })
                .collect()
        })
        .unwrap_or_default();

    SupervisorChain {
        supervisors,
        selected: name_of(id, table),
    }
}

impl fmt::Display for SupervisorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.supervisors {
            writeln!(f, "{}", entry.display_name)?;
            writeln!(f, "  ↓")?;
        }
        write!(f, "» {}", self.selected)
    }
}
