use super::section::Section;

/// Vertical offset past which the navigation bar switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 50.0;
/// Distance from the top of the viewport at which a section counts as current:
/// the nav bar height (64px) plus a small margin.
pub const SPY_LINE: f64 = 80.0;
// tolerance for sub-pixel scroll heights when detecting the end of the page
const BOTTOM_SLACK: f64 = 2.0;
// a clicked section has arrived once its top sits between this far above the viewport and the spy line
const ARRIVAL_SLACK: f64 = 2.0;

/// Scroll position snapshot taken from the window on each scroll event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    pub fn at_bottom(&self) -> bool {
        self.offset + self.viewport_height >= self.document_height - BOTTOM_SLACK
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavState {
    active: Section,
    menu_open: bool,
    scrolled: bool,
    /// Section a nav click is scrolling towards. Scroll-spy holds off until it arrives.
    target: Option<Section>,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Make `section` current and close the mobile menu.
    pub fn activate(&mut self, section: Section) {
        self.active = section;
        self.menu_open = false;
        self.target = Some(section);
    }

    pub fn scroll_target(&self) -> Option<Section> {
        self.target
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Recompute the scrolled flag. Returns whether it changed.
    pub fn observe_scroll(&mut self, offset: f64) -> bool {
        let scrolled = offset > SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// Scroll-spy: update the active section from the sections' top edges,
    /// measured relative to the viewport. Returns whether the active section changed.
    ///
    /// While a nav click is still scrolling, the clicked section stays active
    /// until its top edge settles under the nav bar or the page bottoms out.
    pub fn spy(&mut self, metrics: &ScrollMetrics, tops: &[(Section, f64)]) -> bool {
        if let Some(target) = self.target {
            let arrived = metrics.at_bottom()
                || metrics.offset <= 0.0
                || tops
                    .iter()
                    .any(|(s, top)| *s == target && (-ARRIVAL_SLACK..=SPY_LINE).contains(top));
            if arrived {
                self.target = None;
            }
            return false;
        }
        let current = if metrics.at_bottom() {
            tops.last().map(|(s, _)| *s)
        } else {
            tops.iter()
                .filter(|(_, top)| *top <= SPY_LINE)
                .map(|(s, _)| *s)
                .last()
        };
        match current {
            Some(section) if section != self.active => {
                self.active = section;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(offset: f64) -> ScrollMetrics {
        ScrollMetrics {
            offset,
            viewport_height: 800.0,
            document_height: 4000.0,
        }
    }

    // section tops relative to the viewport, for sections laid out at 0/1000/2000/3000
    fn tops(offset: f64) -> Vec<(Section, f64)> {
        Section::ALL
            .iter()
            .enumerate()
            .map(|(i, s)| (*s, i as f64 * 1000.0 - offset))
            .collect()
    }

    #[test]
    fn test_activate_closes_menu() {
        for section in Section::ALL {
            for open in [false, true] {
                let mut nav = NavState::new();
                if open {
                    nav.toggle_menu();
                }
                nav.activate(section);
                assert_eq!(nav.active(), section);
                assert!(!nav.menu_open());
            }
        }
    }

    #[test]
    fn test_toggle_menu() {
        let mut nav = NavState::new();
        assert!(!nav.menu_open());
        nav.toggle_menu();
        assert!(nav.menu_open());
        nav.toggle_menu();
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_scroll_threshold_boundaries() {
        let mut nav = NavState::new();
        assert!(!nav.observe_scroll(49.0));
        assert!(!nav.scrolled());
        assert!(!nav.observe_scroll(50.0));
        assert!(!nav.scrolled());
        assert!(nav.observe_scroll(51.0));
        assert!(nav.scrolled());
        // no change reported on repeated ticks
        assert!(!nav.observe_scroll(300.0));
        assert!(nav.observe_scroll(0.0));
        assert!(!nav.scrolled());
    }

    #[test]
    fn test_spy_follows_sections() {
        let mut nav = NavState::new();
        assert!(!nav.spy(&metrics(0.0), &tops(0.0)));
        assert_eq!(nav.active(), Section::Home);

        assert!(nav.spy(&metrics(1000.0), &tops(1000.0)));
        assert_eq!(nav.active(), Section::Projects);

        // skills top at 90px is still below the spy line
        assert!(!nav.spy(&metrics(1910.0), &tops(1910.0)));
        assert_eq!(nav.active(), Section::Projects);

        assert!(nav.spy(&metrics(1930.0), &tops(1930.0)));
        assert_eq!(nav.active(), Section::Skills);
    }

    #[test]
    fn test_spy_bottom_of_page_selects_last() {
        let mut nav = NavState::new();
        // contact top sits 200px below the line but the page cannot scroll further
        let m = metrics(3200.0);
        assert!(m.at_bottom());
        let mut t = tops(3200.0);
        t[3].1 = 280.0;
        assert!(nav.spy(&m, &t));
        assert_eq!(nav.active(), Section::Contact);
    }

    #[test]
    fn test_spy_waits_for_clicked_section() {
        let mut nav = NavState::new();
        nav.activate(Section::Projects);
        // first tick of the smooth scroll, home is still under the nav bar
        assert!(!nav.spy(&metrics(60.0), &tops(60.0)));
        assert_eq!(nav.active(), Section::Projects);
        assert_eq!(nav.scroll_target(), Some(Section::Projects));

        // scrolling down to projects never passes through another section
        assert!(!nav.spy(&metrics(500.0), &tops(500.0)));
        assert_eq!(nav.active(), Section::Projects);

        // projects lands 64px down, under the bar
        assert!(!nav.spy(&metrics(936.0), &tops(936.0)));
        assert_eq!(nav.active(), Section::Projects);
        assert_eq!(nav.scroll_target(), None);

        // from here on the spy follows the user again
        assert!(nav.spy(&metrics(1950.0), &tops(1950.0)));
        assert_eq!(nav.active(), Section::Skills);
    }

    #[test]
    fn test_spy_keeps_clicked_section_at_page_bottom() {
        let mut nav = NavState::new();
        nav.activate(Section::Skills);
        // tall viewport: skills reaches the bar exactly when the page bottoms out
        let m = ScrollMetrics {
            offset: 1936.0,
            viewport_height: 2064.0,
            document_height: 4000.0,
        };
        assert!(m.at_bottom());
        let t = tops(1936.0);
        assert_eq!(t[2], (Section::Skills, 64.0));
        assert!(!nav.spy(&m, &t));
        assert_eq!(nav.active(), Section::Skills);
        assert_eq!(nav.scroll_target(), None);
    }

    #[test]
    fn test_spy_waits_for_clicked_section_scrolling_up() {
        let mut nav = NavState::new();
        assert!(nav.spy(&metrics(3000.0), &tops(3000.0)));
        assert_eq!(nav.active(), Section::Contact);

        nav.activate(Section::Projects);
        // skills goes under the bar on the way up
        assert!(!nav.spy(&metrics(2500.0), &tops(2500.0)));
        assert!(!nav.spy(&metrics(1500.0), &tops(1500.0)));
        assert_eq!(nav.active(), Section::Projects);
        assert!(!nav.spy(&metrics(936.0), &tops(936.0)));
        assert_eq!(nav.scroll_target(), None);
    }

    #[test]
    fn test_later_click_replaces_target() {
        let mut nav = NavState::new();
        nav.activate(Section::Contact);
        nav.activate(Section::Home);
        assert_eq!(nav.scroll_target(), Some(Section::Home));
        // home at the top of the document
        assert!(!nav.spy(&metrics(0.0), &tops(0.0)));
        assert_eq!(nav.active(), Section::Home);
        assert_eq!(nav.scroll_target(), None);
    }
}
