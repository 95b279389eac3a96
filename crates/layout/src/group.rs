//! Zone-tagged object groups scheduled as a single unit.

use crate::config::LayoutConfig;
use crate::objects::Positionable;
use quire_types::Zone;

/// An ordered batch of `(zone, object)` pairs plus a break policy.
///
/// With `allows_breaks == false` the group is atomic: a composer that cannot
/// fit the group's full extent in the remaining space moves the whole group to
/// the next page. With `allows_breaks == true` members may land on different
/// pages. Members keep their insertion order.
#[derive(Debug, Default)]
pub struct ContainerGroup {
    members: Vec<(Zone, Box<dyn Positionable>)>,
    allows_breaks: bool,
}

impl ContainerGroup {
    pub fn new(allows_breaks: bool) -> Self {
        Self {
            members: Vec::new(),
            allows_breaks,
        }
    }

    pub fn atomic() -> Self {
        Self::new(false)
    }

    pub fn breakable() -> Self {
        Self::new(true)
    }

    pub fn allows_breaks(&self) -> bool {
        self.allows_breaks
    }

    pub fn push(&mut self, zone: Zone, object: impl Positionable + 'static) {
        self.members.push((zone, Box::new(object)));
    }

    pub fn push_boxed(&mut self, zone: Zone, object: Box<dyn Positionable>) {
        self.members.push((zone, object));
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, zone: Zone, object: impl Positionable + 'static) -> Self {
        self.push(zone, object);
        self
    }

    pub fn members(&self) -> &[(Zone, Box<dyn Positionable>)] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// A new, empty group with the same break policy. Members are not copied.
    pub fn copy(&self) -> Self {
        Self::new(self.allows_breaks)
    }

    /// Height of the members that flow in the content column, stacked.
    ///
    /// Header and footer members are excluded; they are placed in the page
    /// bands and never compete for body space.
    pub fn flow_extent(&self, available_width: f32, config: &LayoutConfig) -> f32 {
        self.members
            .iter()
            .filter(|(zone, _)| !is_band(zone))
            .map(|(_, obj)| obj.measure(available_width, config).height)
            .sum()
    }
}

pub(crate) fn is_band(zone: &Zone) -> bool {
    *zone == Zone::HEADER || *zone == Zone::FOOTER
}
