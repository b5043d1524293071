//! Reducer-style state transitions.
//!
//! State that the user edits over time (the invoice form session) is evolved
//! only through explicit commands and the events they produce:
//!
//! - **Decision logic**: `handle(&self, cmd)` returns events.
//! - **State mutation**: `apply(&mut self, event)` evolves state.

/// A fact produced by an aggregate.
///
/// Events are immutable; treat them as a record of what happened.
pub trait Event: Clone + core::fmt::Debug {
    /// Stable event name/type identifier (e.g. "invoicing.session.field_edited").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;
}

/// Aggregate execution semantics (pure, deterministic).
///
/// Aggregates must not perform IO or side effects.
pub trait Aggregate {
    type Command: Clone + core::fmt::Debug;
    type Event: Event;
    type Error: core::fmt::Debug;

    /// Evolve in-memory state from a single event.
    ///
    /// Implementations bump `version()` by exactly one per applied event.
    fn apply(&mut self, event: &Self::Event);

    /// Decide which events to emit given the current state and a command.
    ///
    /// This must not mutate state. State evolution is done through `apply`.
    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error>;

    /// Number of events applied so far.
    fn version(&self) -> u64;

    /// Handle a command and apply every resulting event, in order.
    fn execute(&mut self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        let events = self.handle(command)?;
        for event in &events {
            self.apply(event);
        }
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum CounterEvent {
        Added(i64),
    }

    impl Event for CounterEvent {
        fn event_type(&self) -> &'static str {
            "test.counter.added"
        }

        fn version(&self) -> u32 {
            1
        }
    }

    #[derive(Debug, Default)]
    struct Counter {
        total: i64,
        version: u64,
    }

    impl Aggregate for Counter {
        type Command = i64;
        type Event = CounterEvent;
        type Error = String;

        fn apply(&mut self, event: &Self::Event) {
            match event {
                CounterEvent::Added(n) => self.total += n,
            }
            self.version += 1;
        }

        fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
            if *command == 0 {
                return Err("nothing to add".to_string());
            }
            Ok(vec![CounterEvent::Added(*command)])
        }

        fn version(&self) -> u64 {
            self.version
        }
    }

    #[test]
    fn execute_applies_every_emitted_event() {
        let mut counter = Counter::default();
        counter.execute(&3).unwrap();
        counter.execute(&4).unwrap();
        assert_eq!(counter.total, 7);
        assert_eq!(counter.version(), 2);
    }

    #[test]
    fn rejected_command_leaves_state_untouched() {
        let mut counter = Counter::default();
        assert!(counter.execute(&0).is_err());
        assert_eq!(counter.total, 0);
        assert_eq!(counter.version(), 0);
    }
}
