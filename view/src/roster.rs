use orgchart_tree::{EmployeeId, EmployeeTable};
use serde::{Deserialize, Serialize};

/// One selectable row: an employee id and the name shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: EmployeeId,
    pub display_name: String,
}

/// Project the table into `(id, display name)` rows for a selection control,
/// in table (traversal) order.
pub fn roster(table: &EmployeeTable) -> Vec<RosterEntry> {
    table
        .iter()
        .map(|record| RosterEntry {
            id: record.id,
            display_name: record.display_name(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgchart_tree::{flatten, EmployeeNode};

    #[test]
    fn roster_follows_table_order() {
        let tree = EmployeeNode::new(1, "John", "Doe").with_subordinates(vec![
            EmployeeNode::new(3, "Bob", "Johnson"),
            EmployeeNode::new(2, "Jane", "Smith"),
        ]);
        let table = flatten(&tree).unwrap();

        let entries = roster(&table);
        assert_eq!(entries.len(), 3);
        assert_eq!(
            entries
                .iter()
                .map(|entry| entry.id)
                .collect::<Vec<EmployeeId>>(),
            vec![EmployeeId(1), EmployeeId(3), EmployeeId(2)]
        );
        assert_eq!(entries[0].display_name, "John Doe");
    }

    #[test]
    fn roster_of_an_empty_table_is_empty() {
        assert_eq!(roster(&EmployeeTable::default()), vec![]);
    }
}
