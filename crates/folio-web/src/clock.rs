//! Analog clock view
//!
//! Samples the local time on a fixed interval and rotates the three hands.
//! The [`Interval`] is owned by the view, so dropping the view stops it.

use folio_desktop::{ClockHands, ClockTime, FolioResult, Hand, TimeSource};
use gloo::timers::callback::Interval;
use web_sys::{Document, HtmlElement};

use crate::dom::{self, set_style};

/// Local time from the JavaScript `Date`
pub(crate) struct BrowserClock;

impl TimeSource for BrowserClock {
    fn now(&self) -> ClockTime {
        let date = js_sys::Date::new_0();
        ClockTime {
            hours: date.get_hours(),
            minutes: date.get_minutes(),
            seconds: date.get_seconds(),
        }
    }
}

struct HandElements {
    hour: HtmlElement,
    minute: HtmlElement,
    second: HtmlElement,
}

impl HandElements {
    fn apply(&self, hands: &ClockHands, transition_ms: u32) -> FolioResult<()> {
        for (el, hand) in [
            (&self.hour, &hands.hour),
            (&self.minute, &hands.minute),
            (&self.second, &hands.second),
        ] {
            apply_hand(el, hand, transition_ms)?;
        }
        Ok(())
    }
}

fn apply_hand(el: &HtmlElement, hand: &Hand, transition_ms: u32) -> FolioResult<()> {
    set_style(el, "transition", &hand.transition_css(transition_ms))?;
    set_style(el, "transform", &hand.transform_css())
}

pub(crate) struct ClockView {
    pub(crate) root: HtmlElement,
    _interval: Interval,
}

impl ClockView {
    pub(crate) fn mount(doc: &Document, tick_ms: u32, transition_ms: u32) -> FolioResult<Self> {
        let root = dom::element(doc, "div", "clock")?;
        let face = dom::element(doc, "div", "clock-face")?;
        let hands = HandElements {
            hour: dom::element(doc, "div", "hand hour-hand")?,
            minute: dom::element(doc, "div", "hand minute-hand")?,
            second: dom::element(doc, "div", "hand second-hand")?,
        };
        dom::append(&face, &hands.hour)?;
        dom::append(&face, &hands.minute)?;
        dom::append(&face, &hands.second)?;
        dom::append(&face, &*dom::element(doc, "div", "center-dot")?)?;
        dom::append(&root, &face)?;

        // First sample lands immediately without sweeping in from twelve
        let initial = ClockHands::sample(&BrowserClock);
        hands.apply(&initial, 0)?;

        let interval = Interval::new(tick_ms, move || {
            let sample = ClockHands::sample(&BrowserClock);
            if let Err(err) = hands.apply(&sample, transition_ms) {
                crate::log(&format!("[clock] {}", err));
            }
        });

        Ok(Self {
            root,
            _interval: interval,
        })
    }
}
