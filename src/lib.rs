//! `treeguide` - Tree guide rendering for terminal layouts
//!
//! Renders a hierarchical node structure as decorated, line-wrapped text for
//! a character-grid display, drawing branch guides ("├──", "└──", …) in
//! front of each node's possibly multi-line content. This is a pure layout
//! component: it emits styled segments and a measured width, and never
//! touches a terminal.
//!
//! # Examples
//!
//! ```
//! use treeguide::Tree;
//!
//! let mut tree = Tree::new("A");
//! let root = tree.root();
//! tree.add(root, "B");
//! let c = tree.add(root, "C");
//! tree.add(c, "D");
//!
//! let output = tree.render(80)?;
//! assert_eq!(output.plain(), "A\n├── B\n└── C\n    └── D\n");
//! # Ok::<(), treeguide::Error>(())
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::module_name_repetitions)] // Allow GuidePart, NodeId etc
#![allow(clippy::must_use_candidate)] // Accessors are obvious
#![allow(clippy::missing_errors_doc)] // Errors documented on the error type
#![allow(clippy::cast_possible_truncation)] // Intentional arena index casts
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod color;
pub mod content;
pub mod error;
pub mod event;
pub mod guide;
pub mod measure;
pub mod render;
pub mod segment;
pub mod style;
pub mod tree;
pub mod unicode;

// Re-export core types at crate root
pub use color::Rgba;
pub use content::{Content, Text};
pub use error::{Error, Result};
pub use event::{LogLevel, emit_log, set_log_callback};
pub use guide::{GuidePart, GuideSet};
pub use measure::Measurement;
pub use render::RenderOutput;
pub use segment::Segment;
pub use style::{Style, TextAttributes};
pub use tree::{Node, NodeId, Tree};
pub use unicode::{WidthMethod, display_width, set_width_method};
