//! Scene text templates.
//!
//! Scene text may embed `{depth}`, `{distance}`, `{shark}` and `{event}`.
//! Values come from the draw that led into the scene; anything missing is
//! drawn fresh from the scene's declared [`Slot`]s on entry.

use rand::Rng;

use crate::branch::{ReefEvent, Shark, sample_reef_event, sample_shark};
use crate::scene::Slot;

/// Values available to a scene's template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    /// Dive depth in feet.
    pub depth: Option<u32>,
    /// Drift distance in miles.
    pub distance: Option<u32>,
    /// Shark species.
    pub shark: Option<Shark>,
    /// Reef event.
    pub event: Option<ReefEvent>,
}

impl Bindings {
    /// Draw a value for `slot` unless one is already bound.
    ///
    /// An empty range leaves the value unbound.
    pub fn fill<R: Rng + ?Sized>(&mut self, slot: &Slot, rng: &mut R) {
        match slot {
            Slot::Depth(range) => {
                if self.depth.is_none() && !range.is_empty() {
                    self.depth = Some(rng.random_range(range.clone()));
                }
            }
            Slot::Distance(range) => {
                if self.distance.is_none() && !range.is_empty() {
                    self.distance = Some(rng.random_range(range.clone()));
                }
            }
            Slot::Shark => {
                if self.shark.is_none() {
                    self.shark = Some(sample_shark(rng));
                }
            }
            Slot::ReefEvent => {
                if self.event.is_none() {
                    self.event = Some(sample_reef_event(rng));
                }
            }
        }
    }

    /// Text substituted for a placeholder, if bound.
    pub fn value(&self, key: &str) -> Option<String> {
        match key {
            "depth" => self.depth.map(|d| d.to_string()),
            "distance" => self.distance.map(|d| d.to_string()),
            "shark" => self.shark.map(|s| s.label().to_string()),
            "event" => self.event.map(|e| e.description().to_string()),
            _ => None,
        }
    }
}

/// Names of all `{placeholder}`s in a template, in order of appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                found.push(&after[..close]);
                rest = &after[close + 1..];
            }
            None => break,
        }
    }
    found
}

/// Substitute bound values into a template.
///
/// Unbound placeholders are left in place verbatim.
pub fn render(template: &str, bindings: &Bindings) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            rest = &rest[open..];
            break;
        };
        let key = &after[..close];
        match bindings.value(key) {
            Some(value) => out.push_str(&value),
            None => {
                out.push('{');
                out.push_str(key);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}
