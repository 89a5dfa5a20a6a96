//! SceneGraph: the normalized node hierarchy every reader produces.

pub mod camera;
pub mod transform;

pub use camera::*;
pub use transform::*;

use glam::Mat4;
use serde::Serialize;

/// A decoded scene hierarchy with a single root.
///
/// Nodes live in an arena; children are referenced by index. The graph is
/// built once by a reader and not modified afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
    root: usize,
}

impl SceneGraph {
    /// Create a graph containing only `root`.
    pub fn new(root: SceneNode) -> Self {
        Self {
            nodes: vec![root],
            root: 0,
        }
    }

    /// Add a child node to a parent and return its index.
    ///
    /// Panics if `parent` is not a node of this graph.
    pub fn add_child(&mut self, parent: usize, node: SceneNode) -> usize {
        let index = self.nodes.len();
        self.nodes.push(node);
        self.nodes[parent].children.push(index);
        index
    }

    /// Index of the root node.
    pub fn root(&self) -> usize {
        self.root
    }

    /// Get a node by index.
    pub fn node(&self, index: usize) -> Option<&SceneNode> {
        self.nodes.get(index)
    }

    /// Get the root node.
    pub fn root_node(&self) -> &SceneNode {
        &self.nodes[self.root]
    }

    /// Get the total number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate over all nodes in pre-order with their world transforms.
    pub fn traverse(&self) -> SceneTraverser<'_> {
        SceneTraverser::new(self)
    }
}

/// A node in the scene graph.
#[derive(Debug, Clone, Serialize)]
pub struct SceneNode {
    /// Node name, empty when the source gave none.
    pub name: String,
    /// Normalized node type.
    pub kind: NodeKind,
    /// Type tag as written in the source document.
    pub source_type: String,
    /// Local transform relative to the parent.
    pub transform: Transform,
    /// Child node indices, in source order.
    pub children: Vec<usize>,
}

impl SceneNode {
    /// Create a node of the given kind with an identity transform.
    pub fn new(kind: NodeKind, source_type: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            kind,
            source_type: source_type.into(),
            transform: Transform::IDENTITY,
            children: Vec::new(),
        }
    }

    /// Set the name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the local transform.
    pub fn transformed(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Camera parameters, if this node is a camera.
    pub fn camera(&self) -> Option<&CameraParams> {
        match &self.kind {
            NodeKind::Camera(params) => Some(params),
            _ => None,
        }
    }

    /// Whether this node is a camera.
    pub fn is_camera(&self) -> bool {
        self.camera().is_some()
    }
}

/// Normalized node type.
///
/// Source types without a dedicated variant become [`NodeKind::Generic`];
/// the original tag is kept in [`SceneNode::source_type`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeKind {
    Scene,
    Group,
    Mesh,
    Light,
    Camera(CameraParams),
    Generic,
}

/// Pre-order iterator over a [`SceneGraph`].
///
/// Yields each node with its index and world transform: root first, then
/// children left-to-right, recursively.
pub struct SceneTraverser<'a> {
    graph: &'a SceneGraph,
    stack: Vec<(usize, Mat4)>,
}

impl<'a> SceneTraverser<'a> {
    fn new(graph: &'a SceneGraph) -> Self {
        Self {
            graph,
            stack: vec![(graph.root, Mat4::IDENTITY)],
        }
    }
}

impl<'a> Iterator for SceneTraverser<'a> {
    type Item = (usize, &'a SceneNode, Mat4);

    fn next(&mut self) -> Option<Self::Item> {
        let (idx, parent_transform) = self.stack.pop()?;
        let node = &self.graph.nodes[idx];
        let world_transform = parent_transform * node.transform.matrix();

        // Push children in reverse order so they're processed left-to-right
        for &child_idx in node.children.iter().rev() {
            self.stack.push((child_idx, world_transform));
        }

        Some((idx, node, world_transform))
    }
}
