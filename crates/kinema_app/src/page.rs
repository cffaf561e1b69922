//! Page layout
//!
//! The portfolio is a single column of four full-height sections. The view
//! layer owns region creation; everything downstream (theme marker, trigger
//! bindings) looks regions up by name and tolerates absence.

use crate::navbar::NavLink;
use kinema_core::{Document, Rect, Region, Viewport};

pub const NAVBAR_HEIGHT: f32 = 80.0;
pub const SECTION_HEIGHT: f32 = 800.0;
pub const PAGE_HEIGHT: f32 = SECTION_HEIGHT * 4.0;

/// Region names the reveal wiring binds against.
pub mod regions {
    pub const NAVBAR: &str = "navbar";
    pub const MOBILE_MENU: &str = "mobile-menu";
    pub const HERO: &str = "hero";
    pub const HERO_TITLE: &str = "hero-title";
    pub const ABOUT: &str = "about";
    pub const SKILLS: &str = "skills";
    pub const PROJECTS: &str = "projects";
    pub const PROJECT_CARDS: &str = "project-cards";
    pub const CONTACT: &str = "contact";
}

pub const PROJECT_CARD_COUNT: usize = 3;
pub const SKILL_ITEM_COUNT: usize = 5;

/// Scroll offsets of the four sections, in page order.
pub fn section_tops() -> [(&'static str, f32); 4] {
    [
        (regions::HERO, 0.0),
        (regions::ABOUT, SECTION_HEIGHT),
        (regions::PROJECTS, SECTION_HEIGHT * 2.0),
        (regions::CONTACT, SECTION_HEIGHT * 3.0),
    ]
}

/// Furthest the page can scroll in the given viewport.
pub fn max_scroll(viewport: Viewport) -> f32 {
    (PAGE_HEIGHT - viewport.height).max(0.0)
}

/// Mount every page region into the document.
///
/// Sections span the full page width; the inner blocks (hero title, skill
/// grid, project card row) sit inset within their section. Geometry is
/// static - the page has no reflow.
pub fn mount(document: &mut Document, viewport: Viewport) {
    let w = viewport.width;
    let inset = w * 0.125;
    let inner_w = w - inset * 2.0;

    document.insert_region(regions::NAVBAR, Region::new(Rect::new(0.0, 0.0, w, NAVBAR_HEIGHT)));

    // Link anchors on the right of the bar; the mobile menu drops down
    // below it. Both are inert - no bindings attach to them.
    let link_w = 120.0;
    let links_left = w - link_w * NavLink::ALL.len() as f32;
    for (i, link) in NavLink::ALL.iter().enumerate() {
        document.insert_region(
            link.region_name(),
            Region::new(Rect::new(links_left + link_w * i as f32, 0.0, link_w, NAVBAR_HEIGHT)),
        );
    }
    document.insert_region(
        regions::MOBILE_MENU,
        Region::new(Rect::new(0.0, NAVBAR_HEIGHT, w, 240.0)),
    );

    for (name, top) in section_tops() {
        document.insert_region(name, Region::new(Rect::new(0.0, top, w, SECTION_HEIGHT)));
    }

    // Hero headline, vertically centered in the first section.
    document.insert_region(
        regions::HERO_TITLE,
        Region::new(Rect::new(inset, 280.0, inner_w, 160.0)),
    );

    // Skill grid in the lower half of the about section.
    let skills_top = SECTION_HEIGHT + 440.0;
    document.insert_region(
        regions::SKILLS,
        Region::new(Rect::new(inset, skills_top, inner_w, 240.0)),
    );
    let skill_w = inner_w / SKILL_ITEM_COUNT as f32;
    for i in 0..SKILL_ITEM_COUNT {
        document.insert_region(
            skill_item_name(i),
            Region::new(Rect::new(inset + skill_w * i as f32, skills_top, skill_w, 240.0)),
        );
    }

    // Project card row, centered in the projects section.
    let cards_top = SECTION_HEIGHT * 2.0 + 160.0;
    document.insert_region(
        regions::PROJECT_CARDS,
        Region::new(Rect::new(inset, cards_top, inner_w, 480.0)),
    );
    let card_w = inner_w / PROJECT_CARD_COUNT as f32;
    for i in 0..PROJECT_CARD_COUNT {
        document.insert_region(
            project_card_name(i),
            Region::new(Rect::new(inset + card_w * i as f32, cards_top, card_w, 480.0)),
        );
    }
}

pub fn project_card_name(index: usize) -> String {
    format!("project-card-{}", index + 1)
}

pub fn skill_item_name(index: usize) -> String {
    format!("skill-item-{}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mounts_all_regions() {
        let mut doc = Document::new();
        mount(&mut doc, Viewport::default());

        for (name, _) in section_tops() {
            assert!(doc.region(name).is_some(), "missing section {name}");
        }
        assert!(doc.region(regions::NAVBAR).is_some());
        assert!(doc.region(regions::MOBILE_MENU).is_some());
        for link in NavLink::ALL {
            assert!(doc.region(&link.region_name()).is_some(), "missing {link:?} anchor");
        }
        assert!(doc.region(regions::HERO_TITLE).is_some());
        assert!(doc.region(regions::PROJECT_CARDS).is_some());
        assert!(doc.region(regions::SKILLS).is_some());
        for i in 0..PROJECT_CARD_COUNT {
            assert!(doc.region(&project_card_name(i)).is_some());
        }
        for i in 0..SKILL_ITEM_COUNT {
            assert!(doc.region(&skill_item_name(i)).is_some());
        }
    }

    #[test]
    fn sections_tile_the_page() {
        let tops = section_tops();
        for pair in tops.windows(2) {
            assert_eq!(pair[0].1 + SECTION_HEIGHT, pair[1].1);
        }
        assert_eq!(tops[3].1 + SECTION_HEIGHT, PAGE_HEIGHT);
    }

    #[test]
    fn max_scroll_never_negative() {
        assert_eq!(max_scroll(Viewport::new(1280.0, 800.0)), 2400.0);
        assert_eq!(max_scroll(Viewport::new(1280.0, 4000.0)), 0.0);
    }
}
