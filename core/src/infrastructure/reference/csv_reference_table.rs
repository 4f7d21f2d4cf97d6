use std::{collections::HashMap, fs::File, io::Read, path::Path};

use csv::{ReaderBuilder, Trim};
use tracing::{error, info, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    recommendation::{entities::ReferenceRow, ports::ReferenceTable},
};

/// Reference rows indexed by category, read from a CSV file with one header row.
#[derive(Debug, Clone, Default)]
pub struct CsvReferenceTable {
    rows: HashMap<String, ReferenceRow>,
}

impl CsvReferenceTable {
    /// Load the table from `path`. Never fails: on any read or parse error the
    /// problem is logged and an empty table is returned, so every lookup misses.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        let loaded = File::open(path)
            .map_err(|e| CoreError::ReferenceLoad(format!("{}: {}", path.display(), e)))
            .and_then(Self::from_reader);

        match loaded {
            Ok(table) => {
                info!(
                    path = %path.display(),
                    rows = table.row_count(),
                    "reference table loaded"
                );
                table
            }
            Err(e) => {
                error!(
                    path = %path.display(),
                    error = %e,
                    "reference table unavailable, category lookups will fail"
                );
                Self::default()
            }
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CoreError> {
        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
        let mut rows: HashMap<String, ReferenceRow> = HashMap::new();

        for (index, record) in reader.deserialize::<ReferenceRow>().enumerate() {
            let row = record.map_err(|e| CoreError::ReferenceLoad(e.to_string()))?;

            if rows.contains_key(&row.category) {
                // first row wins
                warn!(
                    category = %row.category,
                    record = index + 1,
                    "duplicate reference row ignored"
                );
                continue;
            }
            rows.insert(row.category.clone(), row);
        }

        Ok(Self { rows })
    }
}

impl ReferenceTable for CsvReferenceTable {
    fn find_by_category(&self, category: &str) -> Option<ReferenceRow> {
        self.rows.get(category).cloned()
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }
}
