//! Tree structure: an index-based node arena plus render configuration.

use crate::content::Content;
use crate::guide::GuideSet;
use crate::style::Style;

/// Stable handle to a node in a [`Tree`]'s arena.
///
/// Ids are assigned at creation and never reused; they are only meaningful
/// for the tree that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Arena index of this node.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single node: content, ordered children, and an expand flag.
#[derive(Debug)]
pub struct Node {
    content: Box<dyn Content>,
    children: Vec<NodeId>,
    /// Whether children are rendered. Collapsed nodes still render their
    /// own content.
    pub expanded: bool,
}

impl Node {
    fn new(content: Box<dyn Content>) -> Self {
        Self {
            content,
            children: Vec::new(),
            expanded: true,
        }
    }

    /// The node's renderable content.
    #[must_use]
    pub fn content(&self) -> &dyn Content {
        self.content.as_ref()
    }

    /// Replace the node's content.
    pub fn set_content(&mut self, content: impl Content + 'static) {
        self.content = Box::new(content);
    }

    /// Child ids in insertion order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Mutable child list.
    ///
    /// The list is not validated; splicing in an id that is already a child
    /// elsewhere creates shared structure, which [`Tree::render`] reports
    /// as [`Error::StructuralCycle`](crate::Error::StructuralCycle).
    pub fn children_mut(&mut self) -> &mut Vec<NodeId> {
        &mut self.children
    }
}

/// A renderable tree: one owning arena with a synthetic root node, plus the
/// guide configuration applied when rendering.
///
/// Structure is built up-front with [`add`](Self::add) (and, for shared or
/// cyclic structure, [`attach`](Self::attach)); rendering takes `&self` and
/// never mutates the tree.
///
/// # Examples
///
/// ```
/// use treeguide::Tree;
///
/// let mut tree = Tree::new("services");
/// let root = tree.root();
/// let api = tree.add(root, "api");
/// tree.add(api, "auth");
/// tree.add(root, "worker");
///
/// tree.ascii_only = true;
/// let output = tree.render(40)?;
/// assert_eq!(
///     output.plain(),
///     "services\n+-- api\n|   `-- auth\n`-- worker\n",
/// );
/// # Ok::<(), treeguide::Error>(())
/// ```
#[derive(Debug)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
    /// Glyph table for guide decorations.
    pub guides: GuideSet,
    /// Style applied uniformly to every guide glyph.
    pub guide_style: Style,
    /// Restrict guide glyphs to the ASCII-safe table.
    pub ascii_only: bool,
    /// Suppress the root node's own lines and its level of guides.
    pub hide_root: bool,
}

impl Tree {
    /// Create a tree whose root holds the given content.
    #[must_use]
    pub fn new(content: impl Content + 'static) -> Self {
        Self {
            nodes: vec![Node::new(Box::new(content))],
            root: NodeId(0),
            guides: GuideSet::default(),
            guide_style: Style::NONE,
            ascii_only: false,
            hide_root: false,
        }
    }

    /// The synthetic root node's id.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Create a new node and append it to `parent`'s children.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not issued by this tree.
    pub fn add(&mut self, parent: NodeId, content: impl Content + 'static) -> NodeId {
        debug_assert!(self.nodes.len() <= u32::MAX as usize);
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(Box::new(content)));
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Append an existing node to `parent`'s children.
    ///
    /// No validation happens here: attaching a node that is already a child
    /// of another parent (or an ancestor of `parent`) creates shared or
    /// cyclic structure, which is detected at render time and reported as
    /// [`Error::StructuralCycle`](crate::Error::StructuralCycle).
    ///
    /// # Panics
    ///
    /// Panics if either id was not issued by this tree.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) {
        assert!(child.index() < self.nodes.len(), "foreign child id");
        self.nodes[parent.index()].children.push(child);
    }

    /// Borrow a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Mutably borrow a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this tree.
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Number of nodes in the arena, including the root.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_and_order() {
        let mut tree = Tree::new("root");
        let root = tree.root();
        let a = tree.add(root, "a");
        let b = tree.add(root, "b");
        tree.add(a, "a1");

        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.node(root).children(), &[a, b]);
        assert_eq!(tree.node(a).children().len(), 1);
        assert!(tree.node(b).children().is_empty());
    }

    #[test]
    fn test_expanded_default_true() {
        let mut tree = Tree::new("root");
        let root = tree.root();
        let child = tree.add(root, "child");
        assert!(tree.node(child).expanded);

        tree.node_mut(child).expanded = false;
        assert!(!tree.node(child).expanded);
    }

    #[test]
    fn test_attach_shares_node() {
        let mut tree = Tree::new("root");
        let root = tree.root();
        let a = tree.add(root, "a");
        let b = tree.add(root, "b");
        // Not validated at insertion time.
        tree.attach(b, a);
        assert_eq!(tree.node(b).children(), &[a]);
    }

    #[test]
    fn test_set_content() {
        let mut tree = Tree::new("before");
        let root = tree.root();
        tree.node_mut(root).set_content("after");
        let lines = tree.node(root).content().render_lines(10);
        assert_eq!(lines[0][0].text, "after");
    }

    #[test]
    fn test_node_id_display() {
        let mut tree = Tree::new("root");
        let child = tree.add(tree.root(), "c");
        assert_eq!(child.to_string(), "#1");
    }
}
