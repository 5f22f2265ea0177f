//! Shared application state

use dedupe::{MergeEngine, RecordStore};

/// State handed to every request handler.
///
/// The engine is the only collaborator; it is injected at construction so
/// tests can swap the remote store for a stub.
pub struct AppState<S: RecordStore> {
    pub engine: MergeEngine<S>,
}

impl<S: RecordStore> AppState<S> {
    pub fn new(engine: MergeEngine<S>) -> Self {
        Self { engine }
    }
}
