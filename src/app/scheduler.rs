//! Deadline-basierter Timer für Animations- und Play-Ticks.
//!
//! Der Host fragt den Timer pro Frame ab und plant seinen nächsten
//! Repaint über `time_until_due`, statt aktiv zu warten.

use std::time::{Duration, Instant};

/// Einmaliger Timer; nach dem Auslösen muss er neu gestartet werden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickScheduler {
    deadline: Option<Instant>,
}

impl TickScheduler {
    /// Erstellt einen inaktiven Timer.
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Startet (bzw. ersetzt) den Timer mit Fälligkeit `now + delay`.
    pub fn start(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Deaktiviert den Timer.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_active(&self) -> bool {
        self.deadline.is_some()
    }

    /// Gibt `true` zurück, wenn der Timer aktiv und fällig ist.
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Löst den Timer aus, falls er fällig ist, und deaktiviert ihn.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.deadline = None;
            true
        } else {
            false
        }
    }

    /// Restzeit bis zur Fälligkeit (`None` = inaktiv, `ZERO` = überfällig).
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
