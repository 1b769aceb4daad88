//! Daily partition file management

use csv::{Terminator, Writer, WriterBuilder};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::sink::RecordSink;
use crate::app::models::{PartitionKey, Reading};
use crate::constants::{CSV_HEADER, PARTITION_FILE_EXTENSION};
use crate::{Error, Result};

/// Currently open partition file
struct OpenPartition {
    key: PartitionKey,
    path: PathBuf,
    writer: Writer<File>,
}

/// Writes readings into `<output_dir>/<YYYYMMDD>.csv`, one file per day
pub struct PartitionWriter {
    output_dir: PathBuf,
    current: Option<OpenPartition>,
    partitions_opened: usize,
    rows_written: usize,
}

impl PartitionWriter {
    /// Create a writer; no file is opened until the first reading arrives
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            current: None,
            partitions_opened: 0,
            rows_written: 0,
        }
    }

    /// Path of the file holding the given partition
    pub fn partition_path(&self, key: &PartitionKey) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", key, PARTITION_FILE_EXTENSION))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn current_partition(&self) -> Option<&PartitionKey> {
        self.current.as_ref().map(|p| &p.key)
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current.as_ref().map(|p| p.path.as_path())
    }

    /// Number of partition files opened since creation
    pub fn partitions_opened(&self) -> usize {
        self.partitions_opened
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Open (or create) the partition file, writing the header if it is empty
    fn open_partition(&self, key: PartitionKey) -> Result<OpenPartition> {
        fs::create_dir_all(&self.output_dir).map_err(|e| {
            Error::io(
                format!(
                    "Failed to create output directory {}",
                    self.output_dir.display()
                ),
                e,
            )
        })?;

        let path = self.partition_path(&key);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;

        let is_empty = file
            .metadata()
            .map_err(|e| Error::io(format!("Failed to stat {}", path.display()), e))?
            .len()
            == 0;

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::CRLF)
            .from_writer(file);
        if is_empty {
            writer
                .write_record(CSV_HEADER)
                .map_err(|e| Error::csv_writing(path.display().to_string(), e))?;
            writer
                .flush()
                .map_err(|e| Error::io(format!("Failed to flush {}", path.display()), e))?;
            debug!("Wrote header to new partition {}", path.display());
        }

        Ok(OpenPartition { key, path, writer })
    }

    fn close_current(&mut self) -> Result<()> {
        match self.current.take() {
            Some(mut partition) => Self::flush_partition(&mut partition),
            None => Ok(()),
        }
    }

    fn flush_partition(partition: &mut OpenPartition) -> Result<()> {
        partition
            .writer
            .flush()
            .map_err(|e| Error::io(format!("Failed to flush {}", partition.path.display()), e))?;
        debug!("Flushed partition {}", partition.path.display());
        Ok(())
    }

    fn append_row(partition: &mut OpenPartition, reading: &Reading) -> Result<()> {
        let row = reading.to_row();
        partition
            .writer
            .write_record(&row)
            .map_err(|e| Error::csv_writing(partition.path.display().to_string(), e))?;
        partition
            .writer
            .flush()
            .map_err(|e| Error::io(format!("Failed to flush {}", partition.path.display()), e))?;

        debug!("Row written: {}", row.join(","));
        Ok(())
    }
}

impl RecordSink for PartitionWriter {
    fn write(&mut self, reading: &Reading) -> Result<()> {
        let key = reading.partition_key();

        let mut partition = match self.current.take() {
            Some(open) if open.key == key => open,
            previous => {
                if let Some(mut old) = previous {
                    Self::flush_partition(&mut old)?;
                }
                let opened = self.open_partition(key)?;
                info!("Writing to: {}", opened.path.display());
                self.partitions_opened += 1;
                opened
            }
        };

        let result = Self::append_row(&mut partition, reading);
        self.current = Some(partition);
        result?;

        self.rows_written += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.close_current()
    }
}

impl Drop for PartitionWriter {
    fn drop(&mut self) {
        let _ = self.close_current();
    }
}
