use thiserror::Error;

/// Convenient result alias for the interstellar library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Per-line ingestion problems are deliberately not represented here; they
/// are recoverable [`crate::ingest::IngestError`] events collected into the
/// ingest reports so a bad line never aborts a read.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a system name could not be found in the collection.
    #[error("unknown system name: {name}{}", format_suggestions(.suggestions))]
    UnknownSystem {
        name: String,
        suggestions: Vec<String>,
    },

    /// Wrapper for IO errors raised while consuming input lines.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
