//! Count-up animation for statistic counters.

use crate::dom::{DocumentPort, DomError};
use crate::widgets::Intersection;
use std::time::Duration;
use tokio::time::Instant;

const COUNTED: &str = "counted";
const TARGET_ATTR: &str = "data-counter-target";
pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);

/// Parse a counter target, keeping only digits and dots.
///
/// `"500+"` gives 500 and `"98.5%"` gives 98.5. Text with no number in it
/// gives `None`.
pub fn parse_target(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse().ok()
}

/// One running counter.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    pub id: String,
    target: f64,
    original: String,
    started: Instant,
}

impl CounterAnimation {
    pub fn new(id: impl Into<String>, target: f64, original: impl Into<String>, started: Instant) -> Self {
        Self {
            id: id.into(),
            target,
            original: original.into(),
            started,
        }
    }

    /// Ease-out cubic progress, floored to a whole number.
    pub fn value_at(&self, elapsed: Duration) -> u64 {
        let p = (elapsed.as_secs_f64() / COUNTER_DURATION.as_secs_f64()).min(1.0);
        let eased = 1.0 - (1.0 - p).powi(3);
        (self.target * eased).floor() as u64
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.duration_since(self.started) >= COUNTER_DURATION
    }

    /// Text to show at `now`. The final frame restores the original text.
    pub fn frame(&self, now: Instant) -> String {
        if self.is_finished(now) {
            self.original.clone()
        } else {
            self.value_at(now.duration_since(self.started)).to_string()
        }
    }
}

/// Starts counters on first intersection and drives their frames.
#[derive(Clone, Debug, Default)]
pub struct CounterTracker {
    running: Vec<CounterAnimation>,
}

impl CounterTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn running(&self) -> &[CounterAnimation] {
        &self.running
    }

    /// Start counters for intersecting elements not yet marked `counted`.
    pub fn observe<P: DocumentPort + ?Sized>(
        &mut self,
        port: &mut P,
        entries: &[Intersection],
        now: Instant,
    ) -> Result<usize, DomError> {
        let mut started = 0;
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            if port.has_class(&entry.id, COUNTED)? {
                continue;
            }
            let original = port.text(&entry.id)?;
            let raw = port.attribute(&entry.id, TARGET_ATTR)?.unwrap_or_default();
            let Some(target) = parse_target(&raw) else {
                tracing::warn!(counter = %entry.id, raw = %raw, "counter target is not a number");
                continue;
            };
            port.add_class(&entry.id, COUNTED)?;
            port.set_text(&entry.id, "0")?;
            self.running
                .push(CounterAnimation::new(entry.id.clone(), target, original, now));
            started += 1;
        }
        Ok(started)
    }

    /// Render every running counter at `now`, dropping finished ones.
    pub fn tick<P: DocumentPort + ?Sized>(&mut self, port: &mut P, now: Instant) -> Result<(), DomError> {
        for counter in &self.running {
            port.set_text(&counter.id, &counter.frame(now))?;
        }
        self.running.retain(|c| !c.is_finished(now));
        Ok(())
    }
}
