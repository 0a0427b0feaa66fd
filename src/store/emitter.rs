use event_emitter_rs::EventEmitter;

use super::change::StoreChange;

/// Fires store change notifications to registered listeners.
///
/// Listeners receive the JSON-encoded [`StoreChange`] and run on the
/// emitter's own threads, so they observe changes after the mutating call
/// has returned.
pub(crate) struct StoreEmitter {
    event_emitter: EventEmitter,
}

impl StoreEmitter {
    pub(crate) fn new() -> Self {
        Self {
            event_emitter: EventEmitter::new(),
        }
    }

    pub(crate) fn on<F>(&mut self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.event_emitter.on(event, listener);
    }

    pub(crate) fn emit(&mut self, change: StoreChange) {
        match serde_json::to_string(&change) {
            Ok(payload) => {
                self.event_emitter.emit(change.kind.event_name(), payload);
            }
            Err(error) => tracing::warn!(
                collection = %change.collection,
                error = %error,
                "failed to encode store change"
            ),
        }
    }
}
