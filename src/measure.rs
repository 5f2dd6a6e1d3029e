//! Width measurement for layout negotiation.
//!
//! The rendered width is carried explicitly on
//! [`RenderOutput`](crate::RenderOutput) rather than cached inside the
//! tree, so measurement is a pure function of a render result and the
//! space a host is offering. A host that has not rendered yet measures
//! with a width of 0.

use crate::render::RenderOutput;

/// A layout-negotiation answer: the width range this content wants within
/// some available space.
///
/// Tree output is not elastic — it wants exactly the width it rendered at,
/// capped by what is available — so `minimum` and `maximum` always match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Measurement {
    /// Narrowest acceptable width in cells.
    pub minimum: usize,
    /// Widest useful width in cells.
    pub maximum: usize,
}

impl Measurement {
    /// Measure a rendered width against the available space.
    #[must_use]
    pub fn of(rendered_width: usize, max_available: usize) -> Self {
        let width = rendered_width.min(max_available);
        Self {
            minimum: width,
            maximum: width,
        }
    }
}

impl RenderOutput {
    /// Measure this output against the available space.
    #[must_use]
    pub fn measure(&self, max_available: usize) -> Measurement {
        Measurement::of(self.width, max_available)
    }
}
