//! Portfolio wiring
//!
//! Assembles the page: document plus theme controller plus smooth-scroll
//! driver plus trigger registry. The hero headline reveals on load without
//! any trigger; the project cards and skill grid reveal on scroll with the
//! one-directional policy (entering plays, leaving upward reverses).

use crate::navbar::{Navbar, NavLink};
use crate::page::{self, regions};
use kinema_animation::RevealPreset;
use kinema_core::{Document, Viewport};
use kinema_scroll::{
    BindingId, PlayState, ScrollError, ScrollHandle, ScrollObserver, SmoothScroll,
    SmoothScrollConfig, TriggerBinding, TriggerRegistry, TriggerWindow,
};
use kinema_theme::{KeyValueStore, ThemeController, ThemeMode};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Hero headline: rises 100px over one second on load.
const HERO_RISE: f32 = 100.0;
const HERO_MS: u32 = 1000;

/// Scroll reveals: cards rise 50px, skills scale from 0.8.
const CARD_RISE: f32 = 50.0;
const REVEAL_MS: u32 = 600;
const CARD_STAGGER_MS: u32 = 200;
const SKILL_STAGGER_MS: u32 = 100;

/// Load-time reveal: a timeline ticked by the frame loop but indifferent
/// to the scroll position.
struct HeroReveal {
    timeline: kinema_animation::RevealTimeline,
}

impl ScrollObserver for HeroReveal {
    fn on_frame(&mut self, _position: f32, dt: Duration) {
        self.timeline.tick(dt.as_secs_f32() * 1000.0);
    }
}

impl ScrollObserver for Navbar {
    fn on_frame(&mut self, position: f32, _dt: Duration) {
        self.on_scroll(position);
    }
}

/// The assembled page.
pub struct Portfolio<S: KeyValueStore> {
    document: Arc<Mutex<Document>>,
    viewport: Viewport,
    theme: ThemeController<S>,
    navbar: Arc<Mutex<Navbar>>,
    driver: SmoothScroll,
    registry: Arc<Mutex<TriggerRegistry>>,
    hero: Arc<Mutex<HeroReveal>>,
    cards: BindingId,
    skills: BindingId,
}

impl<S: KeyValueStore> Portfolio<S> {
    /// Build and mount the page.
    ///
    /// The stored theme preference (if any) is applied to the document
    /// marker before the first frame, and the hero reveal starts playing
    /// immediately.
    pub fn new(store: S, config: SmoothScrollConfig, viewport: Viewport) -> Self {
        let mut document = Document::new();
        page::mount(&mut document, viewport);

        let mut theme = ThemeController::new(store);
        theme.apply(&mut document);

        let document = Arc::new(Mutex::new(document));
        let driver = SmoothScroll::new(config);

        let mut registry = TriggerRegistry::new(Arc::clone(&document), viewport);
        let cards = registry.register(
            TriggerBinding::new(
                regions::PROJECT_CARDS,
                TriggerWindow::new(0.8, 0.2),
                RevealPreset::fade_up(REVEAL_MS, CARD_RISE)
                    .staggered(page::PROJECT_CARD_COUNT, CARD_STAGGER_MS),
            ),
        );
        let skills = registry.register(
            TriggerBinding::new(
                regions::SKILLS,
                TriggerWindow::from_start(0.8),
                RevealPreset::scale_fade(REVEAL_MS, 0.8)
                    .staggered(page::SKILL_ITEM_COUNT, SKILL_STAGGER_MS),
            ),
        );
        let registry = Arc::new(Mutex::new(registry));

        let mut hero_timeline = RevealPreset::fade_up(HERO_MS, HERO_RISE);
        hero_timeline.play();
        let hero = Arc::new(Mutex::new(HeroReveal {
            timeline: hero_timeline,
        }));

        let navbar = Arc::new(Mutex::new(Navbar::new()));

        driver.add_observer(registry.clone());
        driver.add_observer(navbar.clone());
        driver.add_observer(hero.clone());

        Self {
            document,
            viewport,
            theme,
            navbar,
            driver,
            registry,
            hero,
            cards,
            skills,
        }
    }

    // ========== Theme ==========

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.mode()
    }

    /// Flip the theme from the navbar toggle; the marker and the stored
    /// preference both update.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        let mut doc = self.document.lock().unwrap();
        let mode = self.theme.toggle(&mut doc);
        tracing::info!(%mode, "theme toggled");
        mode
    }

    /// The marker value styling resolves against.
    pub fn theme_marker(&self) -> Option<String> {
        self.document
            .lock()
            .unwrap()
            .attribute(kinema_theme::THEME_ATTRIBUTE)
            .map(str::to_owned)
    }

    // ========== Scrolling ==========

    /// Begin frame delivery. Without frame scheduling the page still
    /// themes and navigates; only smooth scrolling is lost.
    pub fn start(&self) -> Result<ScrollHandle, ScrollError> {
        self.driver.start()
    }

    /// Advance one frame manually (headless hosts and tests).
    pub fn step(&self, dt: Duration) {
        self.driver.step(dt);
    }

    /// Feed a raw wheel/touch offset, clamped to the page bounds.
    pub fn scroll_to(&self, offset: f32) {
        self.driver
            .set_raw_position(offset.clamp(0.0, page::max_scroll(self.viewport)));
    }

    /// Follow a navbar link: closes the mobile menu and retargets the
    /// scroll at the section anchor.
    pub fn navigate(&self, link: NavLink) {
        let target = self.navbar.lock().unwrap().navigate(link);
        tracing::debug!(?link, target, "navigating");
        self.scroll_to(target);
    }

    pub fn position(&self) -> f32 {
        self.driver.position()
    }

    pub fn is_settled(&self) -> bool {
        self.driver.is_settled()
    }

    // ========== State access ==========

    pub fn navbar(&self) -> Arc<Mutex<Navbar>> {
        self.navbar.clone()
    }

    pub fn document(&self) -> Arc<Mutex<Document>> {
        self.document.clone()
    }

    pub fn cards_state(&self) -> PlayState {
        self.binding_state(self.cards)
    }

    pub fn skills_state(&self) -> PlayState {
        self.binding_state(self.skills)
    }

    fn binding_state(&self, id: BindingId) -> PlayState {
        self.registry
            .lock()
            .unwrap()
            .binding(id)
            .map(|b| b.state())
            .unwrap_or_default()
    }

    pub fn hero_done(&self) -> bool {
        self.hero.lock().unwrap().timeline.at_end()
    }

    /// True while the hero or any scroll reveal is mid-flight.
    pub fn is_animating(&self) -> bool {
        self.hero.lock().unwrap().timeline.is_running()
            || self.registry.lock().unwrap().has_active_animations()
    }
}
