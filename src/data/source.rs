use polars::prelude::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{PlotError, Result};

/// SampleTable wraps a Polars DataFrame holding one column per measured
/// channel, one row per sample. All channels share the same row count.
pub struct SampleTable {
    /// Lazy frame kept around for derived queries
    #[allow(dead_code)]
    df: LazyFrame,
    /// Materialized DataFrame for immediate access
    materialized: DataFrame,
    /// Original file path
    file_path: Option<PathBuf>,
    /// Cache for numeric channel conversions (channel name -> values)
    numeric_cache: RefCell<HashMap<String, Vec<f64>>>,
}

impl std::fmt::Debug for SampleTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SampleTable")
            .field("materialized", &self.materialized)
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}

#[allow(dead_code)]
impl SampleTable {
    /// Load a table from a file (CSV or Parquet)
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| PlotError::UnsupportedFormat {
                extension: "(none)".to_string(),
            })?;

        let df = match extension.to_lowercase().as_str() {
            "parquet" => LazyFrame::scan_parquet(path, Default::default())?,
            "csv" => LazyCsvReader::new(path)
                .with_has_header(true)
                .with_infer_schema_length(Some(100))
                .finish()?,
            ext => {
                return Err(PlotError::UnsupportedFormat {
                    extension: ext.to_string(),
                });
            }
        };

        let materialized = df.clone().collect()?;

        Ok(Self {
            df,
            materialized,
            file_path: Some(path.to_path_buf()),
            numeric_cache: RefCell::new(HashMap::new()),
        })
    }

    /// Build a table from an already-collected DataFrame
    pub fn from_dataframe(df: DataFrame) -> Self {
        let lazy = df.clone().lazy();
        Self {
            df: lazy,
            materialized: df,
            file_path: None,
            numeric_cache: RefCell::new(HashMap::new()),
        }
    }

    /// Channel names, in table column order
    pub fn channel_names(&self) -> Vec<String> {
        self.materialized
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Whether the table contains a channel with this name
    pub fn has_channel(&self, name: &str) -> bool {
        self.materialized.column(name).is_ok()
    }

    /// Number of rows (samples per channel)
    pub fn height(&self) -> usize {
        self.materialized.height()
    }

    /// Number of channels
    pub fn width(&self) -> usize {
        self.materialized.width()
    }

    /// The file path this table was loaded from
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// A channel's samples as f64, cached per channel.
    /// Non-numeric cells become NaN.
    pub fn channel_values(&self, name: &str) -> Result<Vec<f64>> {
        if let Some(values) = self.numeric_cache.borrow().get(name) {
            return Ok(values.clone());
        }
        let values = self.channel_as_f64(name)?;
        self.numeric_cache
            .borrow_mut()
            .insert(name.to_string(), values.clone());
        Ok(values)
    }

    fn channel_as_f64(&self, name: &str) -> Result<Vec<f64>> {
        let series = self
            .materialized
            .column(name)
            .map(|c| c.as_materialized_series().clone())
            .map_err(|_| PlotError::UnknownChannel {
                channel: name.to_string(),
            })?;

        match series.cast(&DataType::Float64) {
            Ok(s) => Ok(s
                .f64()
                .map_err(PlotError::Polars)?
                .into_iter()
                .map(|opt| opt.unwrap_or(f64::NAN))
                .collect()),
            Err(_) => {
                // String columns: parse each cell individually
                if let Ok(str_series) = series.str() {
                    Ok(str_series
                        .into_iter()
                        .map(|opt| {
                            opt.and_then(|s| s.trim().parse::<f64>().ok())
                                .unwrap_or(f64::NAN)
                        })
                        .collect())
                } else {
                    Ok(vec![f64::NAN; series.len()])
                }
            }
        }
    }
}
