//! Timed "scroll to continue" hint shown until the user starts pressing.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HintView {
    Hidden,
    Icon,
    Arrow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HintStyle {
    #[default]
    Scroll,
    /// Touch screens and pens scroll by swiping up.
    Swipe,
}

impl HintStyle {
    pub fn label(self) -> &'static str {
        match self {
            HintStyle::Scroll => "↓  scroll  ↓",
            HintStyle::Swipe => "↑  swipe  ↑",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ScrollHint {
    view: HintView,
    since: f64,
    style: HintStyle,
    icon_delay_sec: f64,
    idle_delay_sec: f64,
}

impl ScrollHint {
    pub fn new(now_sec: f64, style: HintStyle, icon_delay_sec: f64, idle_delay_sec: f64) -> Self {
        Self {
            view: HintView::Hidden,
            since: now_sec,
            style,
            icon_delay_sec,
            idle_delay_sec,
        }
    }

    #[inline]
    pub fn view(&self) -> HintView {
        self.view
    }

    #[inline]
    pub fn style(&self) -> HintStyle {
        self.style
    }

    /// Switches to the swipe wording; returns whether it changed.
    pub fn prefer_swipe(&mut self) -> bool {
        let changed = self.style != HintStyle::Swipe;
        self.style = HintStyle::Swipe;
        changed
    }

    /// Returns the new view when it changed this frame.
    pub fn advance(
        &mut self,
        now_sec: f64,
        pressure: f32,
        threshold: f32,
        fade_active: bool,
    ) -> Option<HintView> {
        let prev = self.view;
        let waited = now_sec - self.since;
        match self.view {
            HintView::Hidden if waited >= self.icon_delay_sec => {
                // never pop up over the fade, just wait another round
                if !fade_active {
                    self.view = HintView::Icon;
                }
                self.since = now_sec;
            }
            HintView::Hidden => {}
            HintView::Icon | HintView::Arrow if pressure >= threshold => self.hide(now_sec),
            HintView::Icon if waited >= self.idle_delay_sec => self.view = HintView::Arrow,
            HintView::Icon | HintView::Arrow => {}
        }
        (self.view != prev).then_some(self.view)
    }

    /// Hides the hint after a click and restarts the wait.
    pub fn dismiss(&mut self, now_sec: f64) -> Option<HintView> {
        let prev = self.view;
        self.hide(now_sec);
        (self.view != prev).then_some(self.view)
    }

    fn hide(&mut self, now_sec: f64) {
        self.view = HintView::Hidden;
        self.since = now_sec;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_then_arrow_then_hidden_at_threshold() {
        let mut hint = ScrollHint::new(0.0, HintStyle::Scroll, 3.0, 6.0);
        assert_eq!(hint.advance(1.0, 0.0, 0.9, false), None);
        assert_eq!(hint.advance(3.0, 0.0, 0.9, false), Some(HintView::Icon));
        assert_eq!(hint.advance(8.0, 0.0, 0.9, false), None);
        assert_eq!(hint.advance(9.0, 0.0, 0.9, false), Some(HintView::Arrow));
        assert_eq!(hint.advance(9.5, 0.95, 0.9, false), Some(HintView::Hidden));
        assert_eq!(hint.advance(12.5, 0.0, 0.9, false), Some(HintView::Icon));
    }

    #[test]
    fn fade_postpones_icon() {
        let mut hint = ScrollHint::new(0.0, HintStyle::Scroll, 3.0, 6.0);
        assert_eq!(hint.advance(3.0, 1.0, 0.9, true), None);
        assert_eq!(hint.advance(5.0, 0.0, 0.9, false), None);
        assert_eq!(hint.advance(6.0, 0.0, 0.9, false), Some(HintView::Icon));
    }

    #[test]
    fn swipe_style_switches_once() {
        let mut hint = ScrollHint::new(0.0, HintStyle::Scroll, 3.0, 6.0);
        assert!(hint.prefer_swipe());
        assert!(!hint.prefer_swipe());
        assert_eq!(hint.style().label(), "↑  swipe  ↑");
    }
}
