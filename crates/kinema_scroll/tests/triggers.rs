//! Full-pipeline trigger behavior: swept scroll positions against real
//! bindings, with and without the smooth-scroll driver in front.

use kinema_animation::RevealPreset;
use kinema_core::{Document, Rect, Region, Viewport};
use kinema_scroll::{
    PlayState, ScrollObserver, SmoothScroll, SmoothScrollConfig, TriggerAction, TriggerBinding,
    TriggerRegistry, TriggerWindow,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const VIEWPORT: Viewport = Viewport {
    width: 1280.0,
    height: 800.0,
};

fn page_document() -> Arc<Mutex<Document>> {
    let mut doc = Document::new();
    doc.insert_region(
        "projects-section",
        Region::new(Rect::new(0.0, 1600.0, 1280.0, 800.0)),
    );
    Arc::new(Mutex::new(doc))
}

#[test]
fn sweep_down_and_back_plays_once_and_reverses_once() {
    let doc = page_document();
    let mut registry = TriggerRegistry::new(doc, VIEWPORT);
    registry.register(TriggerBinding::new(
        "projects-section",
        TriggerWindow::new(0.8, 0.2),
        RevealPreset::fade_up(400, 50.0),
    ));

    let mut plays = 0;
    let mut reverses = 0;
    let mut last_action = TriggerAction::None;

    // 0 -> 3200 (max scroll) in 32px steps, then back down to 0
    let sweep: Vec<f32> = (0..=100)
        .map(|i| i as f32 * 32.0)
        .chain((0..=100).rev().map(|i| i as f32 * 32.0))
        .collect();

    for position in sweep {
        for event in registry.evaluate(position) {
            match event.action {
                TriggerAction::Play => {
                    assert_ne!(last_action, TriggerAction::Play, "two plays without reverse");
                    plays += 1;
                }
                TriggerAction::Reverse => {
                    assert_ne!(last_action, TriggerAction::Reverse, "double reverse");
                    reverses += 1;
                }
                TriggerAction::None => {}
            }
            last_action = event.action;
        }
        registry.tick(16.0);
    }

    assert_eq!(plays, 1);
    assert_eq!(reverses, 1);
}

#[test]
fn instantaneous_jump_produces_at_most_one_transition_per_frame() {
    let doc = page_document();
    let mut registry = TriggerRegistry::new(doc, VIEWPORT);
    registry.register(TriggerBinding::new(
        "projects-section",
        TriggerWindow::new(0.8, 0.2),
        RevealPreset::fade_up(400, 50.0),
    ));

    // each evaluation may fire at most one event per binding, however far
    // the position jumped
    for position in [3000.0, 0.0, 1500.0, 0.0] {
        let events = registry.evaluate(position);
        assert!(events.len() <= 1, "thrash at position {position}");
    }
}

#[test]
fn driver_feeds_registry_through_project_reveal_scenario() {
    let doc = page_document();
    let registry = Arc::new(Mutex::new(TriggerRegistry::new(Arc::clone(&doc), VIEWPORT)));
    let id = registry.lock().unwrap().register(TriggerBinding::new(
        "projects-section",
        TriggerWindow::new(0.8, 0.2),
        RevealPreset::fade_up(400, 50.0).staggered(3, 200),
    ));

    let driver = SmoothScroll::new(SmoothScrollConfig {
        duration_secs: 0.3,
        ..Default::default()
    });
    driver.add_observer(registry.clone());

    // scroll down to the middle of the projects section
    driver.set_raw_position(1400.0);
    for _ in 0..60 {
        driver.step(Duration::from_millis(16));
    }
    {
        let reg = registry.lock().unwrap();
        let binding = reg.binding(id).unwrap();
        assert_eq!(binding.state(), PlayState::Played);
        assert!(binding.timeline().at_end());
    }

    // back to the top: the reveal reverses fully
    driver.set_raw_position(0.0);
    for _ in 0..120 {
        driver.step(Duration::from_millis(16));
    }
    {
        let reg = registry.lock().unwrap();
        let binding = reg.binding(id).unwrap();
        assert_eq!(binding.state(), PlayState::NotPlayed);
        assert!(binding.timeline().at_start());
    }
}

#[test]
fn late_mounted_region_starts_firing_once_present() {
    let doc = Arc::new(Mutex::new(Document::new()));
    let mut registry = TriggerRegistry::new(Arc::clone(&doc), VIEWPORT);
    let id = registry.register(TriggerBinding::new(
        "skills",
        TriggerWindow::from_start(0.8),
        RevealPreset::scale_fade(400, 0.8),
    ));

    // not mounted: inert
    assert!(registry.evaluate(1000.0).is_empty());

    doc.lock().unwrap().insert_region(
        "skills",
        Region::new(Rect::new(0.0, 1200.0, 1280.0, 400.0)),
    );

    let events = registry.evaluate(1000.0);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].action, TriggerAction::Play);
    assert_eq!(registry.binding(id).unwrap().state(), PlayState::Playing);
}

struct CountingObserver {
    frames: usize,
}

impl ScrollObserver for CountingObserver {
    fn on_frame(&mut self, _position: f32, _dt: Duration) {
        self.frames += 1;
    }
}

#[test]
fn started_driver_notifies_until_stopped() {
    let driver = SmoothScroll::new(SmoothScrollConfig::default());
    let counter = Arc::new(Mutex::new(CountingObserver { frames: 0 }));
    driver.add_observer(counter.clone());

    let mut handle = driver.start().expect("frame scheduling available");
    std::thread::sleep(Duration::from_millis(50));
    handle.stop();

    let seen = counter.lock().unwrap().frames;
    assert!(seen > 0, "driver never ticked");

    std::thread::sleep(Duration::from_millis(50));
    assert_eq!(counter.lock().unwrap().frames, seen);
}
