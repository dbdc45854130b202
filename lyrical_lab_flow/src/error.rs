// Setup errors for the flow engine.
//
// Analysis itself never fails (unknown words and collaborator failures
// degrade to `Unknown` syllables); only building an analyzer from config can.
// Lexicon loading errors pass through unchanged.

use std::path::PathBuf;

use lyrical_lab_lexicon::LexiconError;
use thiserror::Error;

/// Failure while setting up a flow analyzer. Analysis itself cannot fail.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("I/O error reading config {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {source}")]
    ConfigJson {
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Lexicon(#[from] LexiconError),
}
