//! Input adapter: terminal key events normalized into intents
//!
//! Key presses arrive asynchronously from the host terminal; the simulation
//! consumes input only at tick boundaries. The adapter maps events onto the
//! two logical intents and buffers them in a bounded queue, decoupling input
//! latency from tick cadence.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::consts::INTENT_QUEUE_CAP;
use crate::sim::Intent;

/// Map a key event to a logical intent, if it carries one
///
/// Space and Up jump; Enter and `r` start or restart. The state machine
/// applies the dual mapping for intents that arrive in the "wrong" phase,
/// so the adapter stays context-free.
pub fn map_key(key: &KeyEvent) -> Option<Intent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up => Some(Intent::Jump),
        KeyCode::Enter | KeyCode::Char('r') => Some(Intent::StartOrRestart),
        _ => None,
    }
}

/// Bounded FIFO of intents awaiting the next tick
#[derive(Debug, Default)]
pub struct IntentQueue {
    pending: Vec<Intent>,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an intent; once the buffer is full further intents are dropped
    pub fn push(&mut self, intent: Intent) {
        if self.pending.len() >= INTENT_QUEUE_CAP {
            log::warn!("intent queue full, dropping {:?}", intent);
            return;
        }
        self.pending.push(intent);
    }

    /// Queue the intent for a key event, if it maps to one
    pub fn push_key(&mut self, key: &KeyEvent) {
        if let Some(intent) = map_key(key) {
            self.push(intent);
        }
    }

    /// Take everything queued since the last tick, in arrival order
    pub fn drain(&mut self) -> Vec<Intent> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(map_key(&press(KeyCode::Char(' '))), Some(Intent::Jump));
        assert_eq!(map_key(&press(KeyCode::Up)), Some(Intent::Jump));
        assert_eq!(
            map_key(&press(KeyCode::Enter)),
            Some(Intent::StartOrRestart)
        );
        assert_eq!(
            map_key(&press(KeyCode::Char('r'))),
            Some(Intent::StartOrRestart)
        );
        assert_eq!(map_key(&press(KeyCode::Char('x'))), None);
        assert_eq!(map_key(&press(KeyCode::Down)), None);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut release = press(KeyCode::Char(' '));
        release.kind = KeyEventKind::Release;
        assert_eq!(map_key(&release), None);
    }

    #[test]
    fn test_drain_preserves_arrival_order() {
        let mut queue = IntentQueue::new();
        queue.push(Intent::StartOrRestart);
        queue.push(Intent::Jump);
        queue.push(Intent::Jump);

        assert_eq!(
            queue.drain(),
            vec![Intent::StartOrRestart, Intent::Jump, Intent::Jump]
        );
        assert!(queue.is_empty());
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_queue_is_bounded() {
        let mut queue = IntentQueue::new();
        for _ in 0..(INTENT_QUEUE_CAP + 10) {
            queue.push(Intent::Jump);
        }
        assert_eq!(queue.drain().len(), INTENT_QUEUE_CAP);
    }
}
