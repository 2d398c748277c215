pub mod options;

pub use options::CsvOptions;
