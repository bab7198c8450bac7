//! Batched row sink.

use tracing::debug;

/// Terminator appended after every row, so that flushed batches concatenate
/// into one consistently separated file.
pub const ROW_TERMINATOR: &str = "\r\n";

/// Error type for sink operations.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// IO error on the underlying destination.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// An append-only destination for rendered batches.
pub trait RowDestination {
    /// Remove any existing destination content. Idempotent: succeeds when
    /// the destination is already absent.
    fn reset(&mut self) -> Result<(), SinkError>;

    /// Append one rendered batch, creating the destination if absent.
    fn append_batch(&mut self, text: &str) -> Result<(), SinkError>;
}

/// Accumulates rendered rows and flushes them to the destination in
/// fixed-size batches.
///
/// Rows are never reordered; each flushed batch is a complete set of
/// terminated rows. The destination is expected to be clean (reset) before
/// the first row is pushed.
pub struct BatchedSink<D: RowDestination> {
    destination: D,
    batch_size: usize,
    buffer: Vec<String>,
    rows_written: u64,
    batches_flushed: u64,
}

impl<D: RowDestination> BatchedSink<D> {
    /// Create a sink flushing every `batch_size` rows (minimum 1).
    pub fn new(destination: D, batch_size: usize) -> Self {
        Self {
            destination,
            batch_size: batch_size.max(1),
            buffer: Vec::new(),
            rows_written: 0,
            batches_flushed: 0,
        }
    }

    /// Buffer one rendered row, flushing if the batch is full.
    pub fn push(&mut self, row: String) -> Result<(), SinkError> {
        self.buffer.push(row);
        if self.buffer.len() >= self.batch_size {
            self.flush()?;
        }
        Ok(())
    }

    /// Rows flushed to the destination so far.
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// Batches flushed to the destination so far.
    pub fn batches_flushed(&self) -> u64 {
        self.batches_flushed
    }

    /// Flush any remaining rows and return the destination with the total
    /// row count.
    pub fn finish(mut self) -> Result<(D, u64), SinkError> {
        self.flush()?;
        Ok((self.destination, self.rows_written))
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        if self.buffer.is_empty() {
            return Ok(());
        }

        let mut text =
            String::with_capacity(self.buffer.iter().map(|r| r.len() + 2).sum::<usize>());
        for row in &self.buffer {
            text.push_str(row);
            text.push_str(ROW_TERMINATOR);
        }
        self.destination.append_batch(&text)?;

        self.rows_written += self.buffer.len() as u64;
        self.batches_flushed += 1;
        debug!(
            "Flushed batch {} ({} rows, {} rows total)",
            self.batches_flushed,
            self.buffer.len(),
            self.rows_written
        );
        self.buffer.clear();
        Ok(())
    }
}
