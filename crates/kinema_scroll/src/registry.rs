//! Scroll-trigger registry
//!
//! Bindings associate a named document region, a viewport-relative trigger
//! window, and a reveal timeline. As the virtual scroll position moves, the
//! registry classifies each region against its window and drives the bound
//! timeline through an explicit play-state machine.

use crate::driver::ScrollObserver;
use kinema_animation::RevealTimeline;
use kinema_core::{Document, Rect, Viewport};
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::sync::{Arc, Mutex};
use std::time::Duration;

new_key_type! {
    /// Stable id for a registered trigger binding.
    pub struct BindingId;
}

/// Trigger thresholds as fractions of the viewport height.
///
/// `start` is the line the region's top edge must cross to enter
/// (0.8 reads "when the top reaches 80% down the viewport"); `end` is the
/// line the region's bottom edge crosses to leave below.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerWindow {
    pub start: f32,
    pub end: f32,
}

impl TriggerWindow {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Start-threshold-only window: the binding never "leaves below".
    pub fn from_start(start: f32) -> Self {
        Self { start, end: 0.0 }
    }
}

/// What a crossing does to the bound timeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TriggerAction {
    Play,
    Reverse,
    #[default]
    None,
}

/// Action per crossing direction, in scroll-forward order:
/// enter, leave, enter-back, leave-back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: TriggerAction,
    pub on_leave: TriggerAction,
    pub on_enter_back: TriggerAction,
    pub on_leave_back: TriggerAction,
}

impl ToggleActions {
    pub const fn new(
        on_enter: TriggerAction,
        on_leave: TriggerAction,
        on_enter_back: TriggerAction,
        on_leave_back: TriggerAction,
    ) -> Self {
        Self {
            on_enter,
            on_leave,
            on_enter_back,
            on_leave_back,
        }
    }

    /// The one-directional reveal policy: entering from above plays,
    /// leaving upward reverses, crossings below are ignored.
    pub const fn reveal() -> Self {
        Self::new(
            TriggerAction::Play,
            TriggerAction::None,
            TriggerAction::None,
            TriggerAction::Reverse,
        )
    }
}

impl Default for ToggleActions {
    fn default() -> Self {
        Self::reveal()
    }
}

/// Playback lifecycle of a binding's timeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayState {
    #[default]
    NotPlayed,
    Playing,
    Played,
    Reversing,
}

/// Where a region sits relative to its trigger window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Zone {
    /// Region top has not yet reached the start line (below the fold).
    Before,
    /// Inside the window.
    Inside,
    /// Region bottom has risen past the end line.
    After,
}

/// A (region, window, timeline) association.
#[derive(Clone, Debug)]
pub struct TriggerBinding {
    region: String,
    window: TriggerWindow,
    actions: ToggleActions,
    timeline: RevealTimeline,
    state: PlayState,
    prev_zone: Zone,
}

impl TriggerBinding {
    pub fn new(region: impl Into<String>, window: TriggerWindow, timeline: RevealTimeline) -> Self {
        Self {
            region: region.into(),
            window,
            actions: ToggleActions::reveal(),
            timeline,
            state: PlayState::NotPlayed,
            // Evaluation starts as if scrolled to the very top.
            prev_zone: Zone::Before,
        }
    }

    pub fn with_actions(mut self, actions: ToggleActions) -> Self {
        self.actions = actions;
        self
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn timeline(&self) -> &RevealTimeline {
        &self.timeline
    }

    fn classify(&self, bounds: Rect, position: f32, viewport: Viewport) -> Zone {
        let start_line = viewport.line_at(position, self.window.start);
        if bounds.top() > start_line {
            return Zone::Before;
        }
        let end_line = viewport.line_at(position, self.window.end);
        if bounds.bottom() <= end_line {
            return Zone::After;
        }
        Zone::Inside
    }

    /// Action for a zone change, resolved from final membership only.
    ///
    /// A jump spanning the whole window in one frame lands on the far
    /// zone's crossing (one transition, no intermediate playback).
    fn crossing_action(&self, from: Zone, to: Zone) -> TriggerAction {
        match (from, to) {
            (Zone::Before, Zone::Inside) => self.actions.on_enter,
            (Zone::Inside, Zone::After) | (Zone::Before, Zone::After) => self.actions.on_leave,
            (Zone::After, Zone::Inside) => self.actions.on_enter_back,
            (Zone::Inside, Zone::Before) | (Zone::After, Zone::Before) => {
                self.actions.on_leave_back
            }
            _ => TriggerAction::None,
        }
    }

    /// Apply an action through the play-state machine. Returns true when
    /// the action actually changed playback.
    fn apply(&mut self, action: TriggerAction) -> bool {
        match (action, self.state) {
            (TriggerAction::Play, PlayState::NotPlayed | PlayState::Reversing) => {
                self.timeline.play();
                self.state = PlayState::Playing;
                true
            }
            (TriggerAction::Reverse, PlayState::Playing | PlayState::Played) => {
                self.timeline.reverse();
                self.state = PlayState::Reversing;
                true
            }
            _ => false,
        }
    }

    /// Advance the timeline and settle the play state at its bounds.
    fn tick(&mut self, dt_ms: f32) {
        self.timeline.tick(dt_ms);
        match self.state {
            PlayState::Playing if self.timeline.at_end() => self.state = PlayState::Played,
            PlayState::Reversing if self.timeline.at_start() => self.state = PlayState::NotPlayed,
            _ => {}
        }
    }
}

/// A playback transition fired during evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriggerEvent {
    pub binding: BindingId,
    pub action: TriggerAction,
}

/// The set of live bindings, evaluated against each frame's position.
pub struct TriggerRegistry {
    bindings: SlotMap<BindingId, TriggerBinding>,
    document: Arc<Mutex<Document>>,
    viewport: Viewport,
}

impl TriggerRegistry {
    pub fn new(document: Arc<Mutex<Document>>, viewport: Viewport) -> Self {
        Self {
            bindings: SlotMap::with_key(),
            document,
            viewport,
        }
    }

    /// Store a binding; it participates from the next evaluation.
    pub fn register(&mut self, binding: TriggerBinding) -> BindingId {
        let id = self.bindings.insert(binding);
        tracing::debug!(?id, region = self.bindings[id].region(), "trigger registered");
        id
    }

    /// Remove a binding, halting its timeline before it is discarded so no
    /// orphaned animation keeps running. Unknown ids are a no-op.
    pub fn unregister(&mut self, id: BindingId) {
        if let Some(mut binding) = self.bindings.remove(id) {
            binding.timeline.halt();
            tracing::debug!(?id, region = binding.region(), "trigger unregistered");
        }
    }

    pub fn binding(&self, id: BindingId) -> Option<&TriggerBinding> {
        self.bindings.get(id)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Update the viewport (host resize). Takes effect on the next
    /// evaluation; a resize-induced crossing fires like a scroll one.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Re-evaluate every binding against a scroll position.
    ///
    /// At most one transition fires per binding, resolved from the final
    /// membership state only. Bindings whose region is not mounted are
    /// inert. Returns the fired events for callers that observe playback.
    pub fn evaluate(&mut self, position: f32) -> SmallVec<[TriggerEvent; 4]> {
        let mut events = SmallVec::new();
        let document = self.document.lock().unwrap();

        for (id, binding) in self.bindings.iter_mut() {
            let Some(region) = document.region(binding.region()) else {
                continue;
            };

            let zone = binding.classify(region.bounds, position, self.viewport);
            if zone != binding.prev_zone {
                let action = binding.crossing_action(binding.prev_zone, zone);
                binding.prev_zone = zone;
                if binding.apply(action) {
                    tracing::trace!(?id, ?action, ?zone, "trigger fired");
                    events.push(TriggerEvent {
                        binding: id,
                        action,
                    });
                }
            }
        }

        events
    }

    /// Advance all running timelines by `dt_ms`.
    pub fn tick(&mut self, dt_ms: f32) {
        for (_, binding) in self.bindings.iter_mut() {
            binding.tick(dt_ms);
        }
    }

    /// True while any bound timeline is mid-flight.
    pub fn has_active_animations(&self) -> bool {
        self.bindings.iter().any(|(_, b)| b.timeline.is_running())
    }
}

impl ScrollObserver for TriggerRegistry {
    fn on_frame(&mut self, position: f32, dt: Duration) {
        let _ = self.evaluate(position);
        self.tick(dt.as_secs_f32() * 1000.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinema_animation::RevealPreset;
    use kinema_core::Region;

    fn setup() -> (Arc<Mutex<Document>>, TriggerRegistry) {
        let mut doc = Document::new();
        // region occupying 1600..2400 in a 4000px-tall page
        doc.insert_region("cards", Region::new(Rect::new(0.0, 1600.0, 1280.0, 800.0)));
        let doc = Arc::new(Mutex::new(doc));
        let registry = TriggerRegistry::new(Arc::clone(&doc), Viewport::new(1280.0, 800.0));
        (doc, registry)
    }

    fn reveal_binding() -> TriggerBinding {
        TriggerBinding::new(
            "cards",
            TriggerWindow::new(0.8, 0.2),
            RevealPreset::fade_up(400, 50.0),
        )
    }

    #[test]
    fn enter_from_above_plays_forward() {
        let (_doc, mut registry) = setup();
        let id = registry.register(reveal_binding());

        // above the start threshold: nothing
        assert!(registry.evaluate(900.0).is_empty());
        assert_eq!(registry.binding(id).unwrap().state(), PlayState::NotPlayed);

        // top (1600) crosses the 80% line: 1600 <= pos + 640 => pos >= 960
        let events = registry.evaluate(1000.0);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].action, TriggerAction::Play);
        assert_eq!(registry.binding(id).unwrap().state(), PlayState::Playing);
    }

    #[test]
    fn leaving_upward_reverses() {
        let (_doc, mut registry) = setup();
        let id = registry.register(reveal_binding());

        registry.evaluate(1000.0);
        registry.tick(1000.0); // play to completion
        assert_eq!(registry.binding(id).unwrap().state(), PlayState::Played);

        let events = registry.evaluate(900.0);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].action, TriggerAction::Reverse);
        assert_eq!(registry.binding(id).unwrap().state(), PlayState::Reversing);

        registry.tick(1000.0);
        assert_eq!(registry.binding(id).unwrap().state(), PlayState::NotPlayed);
    }

    #[test]
    fn crossings_below_are_ignored() {
        let (_doc, mut registry) = setup();
        let id = registry.register(reveal_binding());

        registry.evaluate(1000.0); // enter: play
        registry.tick(1000.0);

        // bottom (2400) above the 20% line: 2400 <= pos + 160 => pos >= 2240
        let events = registry.evaluate(2300.0);
        assert!(events.is_empty());
        assert_eq!(registry.binding(id).unwrap().state(), PlayState::Played);

        // coming back inside from below is also a no-op
        let events = registry.evaluate(1500.0);
        assert!(events.is_empty());
    }

    #[test]
    fn whole_window_jump_fires_single_transition() {
        let (_doc, mut registry) = setup();
        registry.register(reveal_binding());

        // 0 -> past-the-end in one frame: final membership is After, which
        // maps to the (ignored) leave action - exactly zero playback events
        // and no intermediate play
        let events = registry.evaluate(3000.0);
        assert!(events.is_empty());

        // jump straight back above the start: leave-back reverses nothing
        // (timeline never played), so still no event
        let events = registry.evaluate(0.0);
        assert!(events.is_empty());
    }

    #[test]
    fn missing_region_is_inert() {
        let (_doc, mut registry) = setup();
        let id = registry.register(TriggerBinding::new(
            "not-mounted-yet",
            TriggerWindow::from_start(0.8),
            RevealPreset::fade_in(300),
        ));

        assert!(registry.evaluate(2000.0).is_empty());
        assert_eq!(registry.binding(id).unwrap().state(), PlayState::NotPlayed);
    }

    #[test]
    fn unregister_halts_the_timeline() {
        let (_doc, mut registry) = setup();
        let id = registry.register(reveal_binding());

        registry.evaluate(1000.0);
        assert!(registry.has_active_animations());

        registry.unregister(id);
        assert!(registry.is_empty());
        assert!(!registry.has_active_animations());
        // unknown id: no-op
        registry.unregister(id);
    }
}
