//! The render engine: iterative, guide-decorated tree traversal.
//!
//! Traversal is pre-order, left-to-right, and non-recursive: pending work
//! lives in an explicit stack of sibling queues (one queue per open depth,
//! so memory is bounded by depth, not breadth) with a parallel stack of
//! guide roles, one per open level. Guide entries move through three phases
//! per level: the inherited default, then `Fork`/`End` once last-sibling
//! status is known, then `Continue`/`Space` once the owning node's first
//! line is out. Prefixes are resolved glyph-by-glyph at emission time so
//! every line observes the current phase.

use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log};
use crate::guide::GuidePart;
use crate::segment::{Segment, segments_width};
use crate::tree::Tree;
use crate::unicode::display_width;

/// The result of one render call: a flat decorated segment sequence with
/// embedded line breaks, and the maximum rendered line width in cells.
#[derive(Clone, Debug)]
pub struct RenderOutput {
    /// Decorated segments; each rendered line ends with [`Segment::line`].
    pub segments: Vec<Segment>,
    /// Max over emitted lines of prefix width + content width.
    pub width: usize,
}

impl RenderOutput {
    /// The rendered lines, split on line-break segments.
    #[must_use]
    pub fn lines(&self) -> Vec<&[Segment]> {
        let mut parts: Vec<&[Segment]> = self
            .segments
            .split(|seg| seg.is_line_break())
            .collect();
        if parts.last().is_some_and(|part| part.is_empty()) {
            parts.pop();
        }
        parts
    }

    /// The output as unstyled text, line breaks included.
    #[must_use]
    pub fn plain(&self) -> String {
        self.segments.iter().map(|seg| seg.text.as_str()).collect()
    }
}

/// Bit-set over arena indices for the per-call visited check.
struct VisitSet {
    bits: Vec<u64>,
}

impl VisitSet {
    fn new(capacity: usize) -> Self {
        Self {
            bits: vec![0; capacity.div_ceil(64)],
        }
    }

    /// Mark an index, returning false if it was already marked.
    fn insert(&mut self, index: usize) -> bool {
        let mask = 1u64 << (index % 64);
        let slot = &mut self.bits[index / 64];
        if *slot & mask != 0 {
            return false;
        }
        *slot |= mask;
        true
    }
}

impl Tree {
    /// Render the tree to decorated, wrapped lines within `max_width` cells.
    ///
    /// Fails with [`Error::StructuralCycle`] if any node is reachable
    /// through more than one path; nothing is emitted for the offending
    /// node and no partial output is returned. Every other input — empty
    /// children, collapsed nodes, zero width, arbitrarily deep nesting —
    /// renders deterministically.
    pub fn render(&self, max_width: usize) -> Result<RenderOutput> {
        let mut segments: Vec<Segment> = Vec::new();
        let mut widest = 0usize;
        let mut visited = VisitSet::new(self.node_count());

        // One guide entry per open level. Entry 0 belongs to the synthetic
        // root; drawable prefixes start at `skip`.
        let mut levels: Vec<GuidePart> = vec![GuidePart::Continue];
        let mut frontier = vec![VecDeque::from([self.root()])];
        let skip = if self.hide_root { 2 } else { 1 };

        while let Some(mut queue) = frontier.pop() {
            let Some(current) = queue.pop_front() else {
                // Level exhausted: close it and re-open the ancestor's
                // branch for any siblings still queued there.
                levels.pop();
                if let Some(trailing) = levels.last_mut() {
                    *trailing = GuidePart::Fork;
                }
                continue;
            };
            let is_last = queue.is_empty();

            if !visited.insert(current.index()) {
                emit_log(
                    LogLevel::Error,
                    &format!("render aborted: node {current} reached through more than one path"),
                );
                return Err(Error::StructuralCycle { node: current });
            }
            frontier.push(queue);

            if is_last {
                *levels.last_mut().expect("one level per open queue") = GuidePart::End;
            }

            let node = self.node(current);
            let prefix_width: usize = levels
                .iter()
                .skip(skip)
                .map(|&part| display_width(self.guides.resolve(part, self.ascii_only)))
                .sum();
            let budget = max_width.saturating_sub(prefix_width);
            let lines = node.content().render_lines(budget);

            let at_root = levels.len() == 1;
            if !(self.hide_root && at_root) {
                for (index, line) in lines.iter().enumerate() {
                    let mut line_width = 0usize;
                    for &part in levels.iter().skip(skip) {
                        let glyph = self.guides.resolve(part, self.ascii_only);
                        line_width += display_width(glyph);
                        segments.push(Segment::new(glyph, self.guide_style));
                    }
                    line_width += segments_width(line);
                    segments.extend(line.iter().cloned());
                    segments.push(Segment::line());
                    widest = widest.max(line_width);

                    // The branch glyph appears on the node's first line
                    // only; continuation lines get the open guide.
                    if index == 0 && levels.len() > skip {
                        let open = if is_last {
                            GuidePart::Space
                        } else {
                            GuidePart::Continue
                        };
                        *levels.last_mut().expect("one level per open queue") = open;
                    }
                }
            }

            if node.expanded && !node.children().is_empty() {
                // Also transition here so descendants of zero-line content
                // still render under the open guide.
                let open = if is_last {
                    GuidePart::Space
                } else {
                    GuidePart::Continue
                };
                *levels.last_mut().expect("one level per open queue") = open;
                levels.push(if node.children().len() == 1 {
                    GuidePart::End
                } else {
                    GuidePart::Fork
                });
                frontier.push(node.children().iter().copied().collect());
            }
        }

        emit_log(
            LogLevel::Debug,
            &format!(
                "render complete: width {widest}, {count} segments",
                count = segments.len()
            ),
        );
        Ok(RenderOutput {
            segments,
            width: widest,
        })
    }
}
