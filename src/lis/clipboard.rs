//! "Copy ID" row action.

use tracing::debug;

use crate::error::{Error, Result};
use crate::record::Record;

/// Puts the record's id on the system clipboard.
///
/// Fails with [`Error::Clipboard`] when no clipboard is reachable or the
/// crate was built without the `clipboard-support` feature.
pub fn copy_id<R: Record>(record: &R) -> Result<()> {
    #[cfg(feature = "clipboard-support")]
    {
        use clipboard::{ClipboardContext, ClipboardProvider};
        let mut ctx: ClipboardContext = ClipboardProvider::new()
            .map_err(|e| Error::Clipboard(format!("failed to open clipboard: {e}")))?;
        ctx.set_contents(record.id().to_string())
            .map_err(|e| Error::Clipboard(format!("failed to write clipboard: {e}")))?;
        debug!(id = record.id(), "id copied");
        Ok(())
    }
    #[cfg(not(feature = "clipboard-support"))]
    {
        debug!(id = record.id(), "clipboard support not enabled");
        Err(Error::Clipboard("clipboard support not enabled".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    struct Row;

    impl Record for Row {
        fn id(&self) -> &str {
            "SMP-2024-001"
        }

        fn value(&self, _key: &str) -> Option<Value> {
            None
        }
    }

    // Headless machines have no clipboard; only the error kind is checked.
    #[test]
    fn test_copy_id_reports_clipboard_errors() {
        match copy_id(&Row) {
            Ok(()) | Err(Error::Clipboard(_)) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
}
