//! Transient reward popups.
//!
//! Floating "+N CM" readouts keyed by unique ids. Each is an independent
//! countdown advanced by the session tick; overlapping popups coexist and
//! self-remove after a fixed lifetime.

/// Popup lifetime in ticks (~1.5 s at 60 frames per second).
pub const POPUP_LIFETIME_TICKS: u32 = 90;

/// One floating reward readout.
#[derive(Debug, Clone)]
pub struct RewardPopup {
    /// Unique id, never reused within a session.
    pub id: u64,
    /// Final credited amount.
    pub amount: u64,
    /// Screen x coordinate the catch happened at.
    pub x: f64,
    /// Screen y coordinate the catch happened at.
    pub y: f64,
    /// Attached lore-snippet preview, when the catch unlocked one.
    pub lore_snippet: Option<String>,
    remaining: u32,
}

/// The set of live popups.
#[derive(Debug, Default)]
pub struct PopupTray {
    popups: Vec<RewardPopup>,
    next_id: u64,
}

impl PopupTray {
    /// An empty tray.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a popup; returns its id.
    pub fn spawn(&mut self, amount: u64, x: f64, y: f64, lore_snippet: Option<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.popups.push(RewardPopup {
            id,
            amount,
            x,
            y,
            lore_snippet,
            remaining: POPUP_LIFETIME_TICKS,
        });
        id
    }

    /// Age every popup by one tick, removing the expired.
    pub fn tick(&mut self) {
        for popup in &mut self.popups {
            popup.remaining = popup.remaining.saturating_sub(1);
        }
        self.popups.retain(|p| p.remaining > 0);
    }

    /// Live popups, oldest first.
    pub fn active(&self) -> &[RewardPopup] {
        &self.popups
    }
}
