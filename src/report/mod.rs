pub mod export;
pub mod table;

pub use export::CsvExporter;
pub use table::{format_value, TableWriter, REDUCER_WIDTH, SEPARATOR, VALUE_WIDTH};
