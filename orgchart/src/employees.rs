use std::path::{Path, PathBuf};

use orgchart_tree::{flatten, EmployeeNode, EmployeeTable, FlattenError};
use thiserror::Error;
use tokio::fs::read_to_string;
use tracing::debug;

#[derive(Error, Debug)]
pub enum EmployeesError {
    #[error("employees file not found at: {0}")]
    NotFound(PathBuf),

    #[error("failed to read employees file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse employees file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid hierarchy in employees file {path}: {source}")]
    Flatten {
        path: PathBuf,
        #[source]
        source: FlattenError,
    },
}

/// The loaded hierarchy: the source path plus the flattened table, frozen at
/// load time. The table is never mutated after this point.
#[derive(Debug, Clone)]
pub struct EmployeesConfig {
    pub path: PathBuf,
    table: EmployeeTable,
}

impl EmployeesConfig {
    /// Load and flatten the employees file. With no explicit path, falls
    /// back to `employees.json` in the current directory.
    pub async fn load(path: Option<&Path>) -> Result<Self, EmployeesError> {
        let path = match path {
            Some(path) => path.to_owned(),
            None => Self::discover_path()?,
        };
        let string = read_to_string(&path)
            .await
            .map_err(|source| EmployeesError::Read {
                path: path.clone(),
                source,
            })?;
        let root: EmployeeNode =
            serde_json::from_str(&string).map_err(|source| EmployeesError::Parse {
                path: path.clone(),
                source,
            })?;
        let table = flatten(&root).map_err(|source| EmployeesError::Flatten {
            path: path.clone(),
            source,
        })?;
        debug!(
            employees = table.len(),
            path = %path.display(),
            "loaded employee hierarchy"
        );
        Ok(EmployeesConfig { path, table })
    }

    pub fn table(&self) -> &EmployeeTable {
        &self.table
    }

    fn discover_path() -> Result<PathBuf, EmployeesError> {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let path = cwd.join("employees.json");
        if path.exists() {
            return Ok(path);
        }
        Err(EmployeesError::NotFound(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgchart_tree::EmployeeId;

    #[tokio::test]
    async fn loads_and_flattens_an_employees_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.json");
        std::fs::write(
            &path,
            r#"{
                "id": 1,
                "firstName": "John",
                "lastName": "Doe",
                "subordinates": [
                    { "id": 2, "firstName": "Jane", "lastName": "Smith" }
                ]
            }"#,
        )
        .unwrap();

        let config = EmployeesConfig::load(Some(&path)).await.unwrap();
        assert_eq!(config.table().len(), 2);
        assert_eq!(
            config.table().get(EmployeeId(2)).unwrap().supervisors,
            vec![EmployeeId(1)]
        );
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let err = EmployeesConfig::load(Some(&path)).await.unwrap_err();
        assert!(matches!(err, EmployeesError::Read { .. }));
    }

    #[tokio::test]
    async fn duplicate_ids_are_a_flatten_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.json");
        std::fs::write(
            &path,
            r#"{
                "id": 1,
                "firstName": "John",
                "lastName": "Doe",
                "subordinates": [
                    { "id": 1, "firstName": "Jane", "lastName": "Smith" }
                ]
            }"#,
        )
        .unwrap();

        let err = EmployeesConfig::load(Some(&path)).await.unwrap_err();
        assert!(matches!(
            err,
            EmployeesError::Flatten {
                source: FlattenError::DuplicateId(EmployeeId(1)),
                ..
            }
        ));
    }
}
