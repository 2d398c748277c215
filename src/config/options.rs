//! Options for reading and writing delimited text.
//!
//! `CsvOptions` is passed by reference to the functions in [`crate::io`].
//! The default reads and writes plain comma-separated numbers with no header.

/// Delimited-text layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field separator byte (`b','`, `b'\t'`, ...).
    pub delimiter: u8,

    /// Leading lines ignored on read.
    pub skip_rows: usize,

    /// Leading cells of every record ignored on read.
    pub skip_columns: usize,

    /// Header record written before the data, if any.
    pub header: Option<Vec<String>>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            skip_rows: 0,
            skip_columns: 0,
            header: None,
        }
    }
}

impl CsvOptions {
    /// Tab-separated defaults.
    pub fn tsv() -> Self {
        Self {
            delimiter: b'\t',
            ..Self::default()
        }
    }

    /// Skip one leading line, for files with a header row.
    pub fn with_header_row(mut self) -> Self {
        self.skip_rows += 1;
        self
    }

    /// Header record to emit on write.
    pub fn header<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header = Some(names.into_iter().map(Into::into).collect());
        self
    }
}
