//! Append-only diagnostic log
//!
//! Error records accumulate in a local file across the process lifetime; the
//! file is written, never read back. Appends are serialized so concurrent
//! records never interleave, and each record goes out in a single write.
//! A failing log target is never surfaced to the caller.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Shared handle to the diagnostic log target.
#[derive(Debug, Clone)]
pub struct DiagnosticLog {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl DiagnosticLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Append one record with the error text and full failure detail.
    ///
    /// Infallible by contract: write failures are swallowed and reported
    /// only through tracing.
    pub async fn append(&self, summary: &str, detail: &str) {
        let record = format!(
            "\n--- ERROR {} ---\n{summary}\n{detail}\n",
            chrono::Utc::now().to_rfc3339()
        );
        let _guard = self.lock.lock().await;
        let result = async {
            let mut file = tokio::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
                .await?;
            file.write_all(record.as_bytes()).await?;
            file.flush().await
        }
        .await;
        if let Err(e) = result {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "failed to append diagnostic record"
            );
        }
    }
}
