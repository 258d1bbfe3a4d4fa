//! Arena-backed group tree.
//!
//! Every group directory of the catalog becomes a [`GroupNode`] stored in a
//! flat `Vec` and addressed by [`GroupId`]. Nodes keep their parent id and a
//! precomputed relative path, so walking back up the tree is never needed.

use std::collections::HashMap;

/// Index of a node inside a [`GroupTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(usize);

impl GroupId {
    /// The synthetic root of every tree.
    pub const ROOT: GroupId = GroupId(0);

    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One group level of the catalog, or the synthetic root.
#[derive(Debug, Clone)]
pub struct GroupNode {
    /// Directory name of the group. Empty for the root.
    pub name: String,
    /// Leaf image names found directly under this group, in discovery order.
    pub images: Vec<String>,
    /// Child groups, in discovery order.
    pub children: Vec<GroupId>,
    /// Whether this group's own segment appears in its images' raw values.
    pub provides_namespace: bool,
    /// True only for the tree's single root.
    pub is_root: bool,
    parent: Option<GroupId>,
    path: String,
    child_index: HashMap<String, GroupId>,
}

impl GroupNode {
    fn new(name: &str, parent: Option<GroupId>, path: String, provides_namespace: bool) -> Self {
        Self {
            name: name.to_string(),
            images: Vec::new(),
            children: Vec::new(),
            provides_namespace,
            is_root: parent.is_none(),
            parent,
            path,
            child_index: HashMap::new(),
        }
    }

    /// Name used when printing the tree.
    pub fn display_name(&self) -> &str {
        if self.is_root {
            "<Root>"
        } else {
            &self.name
        }
    }
}

/// The catalog as a tree of groups.
///
/// Built once by the collector and read-only afterwards. Storage order follows
/// discovery; anything that renders the tree goes through the sorted accessors.
#[derive(Debug, Clone)]
pub struct GroupTree {
    nodes: Vec<GroupNode>,
}

impl Default for GroupTree {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupTree {
    /// Create a tree holding only the synthetic root.
    pub fn new() -> Self {
        Self {
            nodes: vec![GroupNode::new("", None, String::new(), true)],
        }
    }

    pub fn root(&self) -> &GroupNode {
        &self.nodes[GroupId::ROOT.0]
    }

    pub fn node(&self, id: GroupId) -> &GroupNode {
        &self.nodes[id.0]
    }

    /// Parent of a node, `None` for the root.
    pub fn parent(&self, id: GroupId) -> Option<GroupId> {
        self.nodes[id.0].parent
    }

    /// Slash-joined path from the catalog root, e.g. `Icons/Navigation`.
    pub fn path(&self, id: GroupId) -> &str {
        &self.nodes[id.0].path
    }

    /// Look up a direct child by name.
    pub fn child_named(&self, parent: GroupId, name: &str) -> Option<GroupId> {
        self.nodes[parent.0].child_index.get(name).copied()
    }

    /// Return the child called `name`, creating it if needed.
    ///
    /// `provides_namespace` is only applied when the child is created; an
    /// existing child keeps the flag it was first given.
    pub fn child_or_insert(
        &mut self,
        parent: GroupId,
        name: &str,
        provides_namespace: bool,
    ) -> GroupId {
        if let Some(existing) = self.child_named(parent, name) {
            return existing;
        }

        let id = GroupId(self.nodes.len());
        let path = match self.path(parent) {
            "" => name.to_string(),
            prefix => format!("{}/{}", prefix, name),
        };
        self.nodes
            .push(GroupNode::new(name, Some(parent), path, provides_namespace));

        let parent_node = &mut self.nodes[parent.0];
        parent_node.children.push(id);
        parent_node.child_index.insert(name.to_string(), id);
        id
    }

    /// Add a leaf image to a group. Returns false if it was already present.
    pub fn push_image(&mut self, id: GroupId, image: &str) -> bool {
        let images = &mut self.nodes[id.0].images;
        if images.iter().any(|existing| existing == image) {
            return false;
        }
        images.push(image.to_string());
        true
    }

    /// Children of a node ordered by name.
    pub fn sorted_children(&self, id: GroupId) -> Vec<GroupId> {
        let mut children = self.nodes[id.0].children.clone();
        children.sort_by(|a, b| self.nodes[a.0].name.cmp(&self.nodes[b.0].name));
        children
    }

    /// Images of a node ordered by name.
    pub fn sorted_images(&self, id: GroupId) -> Vec<&str> {
        let mut images: Vec<&str> = self.nodes[id.0].images.iter().map(String::as_str).collect();
        images.sort_unstable();
        images
    }

    /// All non-root groups in pre-order, siblings sorted by name.
    pub fn iter_pre_order(&self) -> Vec<GroupId> {
        let mut order = Vec::with_capacity(self.nodes.len().saturating_sub(1));
        self.visit_pre_order(GroupId::ROOT, &mut order);
        order
    }

    fn visit_pre_order(&self, id: GroupId, order: &mut Vec<GroupId>) {
        for child in self.sorted_children(id) {
            order.push(child);
            self.visit_pre_order(child, order);
        }
    }

    /// Number of groups, excluding the root.
    pub fn group_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Number of images across every group.
    pub fn image_count(&self) -> usize {
        self.nodes.iter().map(|n| n.images.len()).sum()
    }

    /// True when no image was collected.
    pub fn is_empty(&self) -> bool {
        self.image_count() == 0
    }
}
