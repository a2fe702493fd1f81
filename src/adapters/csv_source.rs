use crate::domain::model::Dataset;
use crate::domain::ports::{DatasetSource, Storage};
use crate::utils::error::Result;
use std::path::Path;

/// Reads a delimited placement table with a header row. `.tsv` files are
/// tab separated, everything else comma separated.
pub struct CsvDatasetSource<S: Storage> {
    storage: S,
    path: String,
}

impl<S: Storage> CsvDatasetSource<S> {
    pub fn new(storage: S, path: String) -> Self {
        Self { storage, path }
    }

    fn delimiter(&self) -> u8 {
        match Path::new(&self.path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("tsv") => b'\t',
            _ => b',',
        }
    }

    pub fn parse(bytes: &[u8], delimiter: u8) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .trim(csv::Trim::All)
            .from_reader(bytes);

        let headers = reader
            .headers()?
            .iter()
            .map(|header| header.trim_start_matches('\u{feff}').to_string())
            .collect();

        let rows = reader
            .records()
            .map(|record| record.map(|r| r.iter().map(str::to_string).collect()))
            .collect::<std::result::Result<Vec<Vec<String>>, csv::Error>>()?;

        Ok(Dataset::new(headers, rows))
    }
}

impl<S: Storage> DatasetSource for CsvDatasetSource<S> {
    fn load(&self) -> Result<Dataset> {
        tracing::debug!("Reading dataset from: {}", self.path);
        let bytes = self.storage.read_file(&self.path)?;
        let dataset = Self::parse(&bytes, self.delimiter())?;
        tracing::info!(
            rows = dataset.len(),
            columns = dataset.headers.len(),
            "📥 Loaded dataset"
        );
        Ok(dataset)
    }
}
