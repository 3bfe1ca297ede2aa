use crate::input::events::{MapEvent, MapEventKind};
use fxhash::FxHashMap;
use std::collections::VecDeque;

/// Event listener callback type
type EventCallback = Box<dyn Fn(&MapEvent) + Send + Sync>;

/// Handle returned by [`EventManager::on`], used to remove the listener again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Event management system for the map
#[derive(Default)]
pub struct EventManager {
    /// Event listeners by event kind
    listeners: FxHashMap<MapEventKind, Vec<(ListenerId, EventCallback)>>,
    /// Event queue for processing
    event_queue: VecDeque<MapEvent>,
    next_id: u64,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event listener
    pub fn on<F>(&mut self, kind: MapEventKind, callback: F) -> ListenerId
    where
        F: Fn(&MapEvent) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners
            .entry(kind)
            .or_default()
            .push((id, Box::new(callback)));
        id
    }

    /// Remove a listener; returns whether it was registered
    pub fn off(&mut self, id: ListenerId) -> bool {
        let mut removed = false;
        for callbacks in self.listeners.values_mut() {
            let before = callbacks.len();
            callbacks.retain(|(listener, _)| *listener != id);
            removed |= callbacks.len() != before;
        }
        removed
    }

    /// Emit an event to the queue
    pub fn emit(&mut self, event: MapEvent) {
        self.event_queue.push_back(event);
    }

    /// Process all queued events
    pub fn process_events(&mut self) -> Vec<MapEvent> {
        let events: Vec<_> = self.event_queue.drain(..).collect();

        for event in &events {
            if let Some(callbacks) = self.listeners.get(&event.kind()) {
                for (_, callback) in callbacks {
                    callback(event);
                }
            }
        }

        events
    }

    /// Get number of pending events
    pub fn pending_events(&self) -> usize {
        self.event_queue.len()
    }

    /// Number of registered listeners across all kinds
    pub fn listener_count(&self) -> usize {
        self.listeners.values().map(Vec::len).sum()
    }
}
