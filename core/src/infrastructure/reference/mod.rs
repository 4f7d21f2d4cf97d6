pub mod csv_reference_table;

pub use csv_reference_table::CsvReferenceTable;
