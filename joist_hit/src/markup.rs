// Copyright 2025 the Joist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A retained mirror of rendered element markup.
//!
//! [`MarkupTree`] keeps just enough of the rendered scene to answer "which
//! element owns this node": tags, attributes, and parent links. Nodes are
//! addressed by generational [`NodeId`]s, so a handle kept across a re-render
//! never aliases a different node.
//!
//! Resolution ascends from the target towards the root and stops at the first
//! node that carries [`attr::ELEMENT_ROOT`] or has the [`SURFACE_TAG`] tag.
//! The walk is bounded by [`MAX_ASCENT`] so that a cyclic or runaway parent
//! chain cannot hang the event loop.

use hashbrown::HashMap;

use crate::element::{ElementKind, ElementRef};
use crate::lookup::{ElementLookup, HitError};

/// Attribute names written by the renderer on element roots.
pub mod attr {
    /// Marks a node as an element root.
    pub const ELEMENT_ROOT: &str = "data-element-root";
    /// Element kind.
    pub const PROTOTYPE: &str = "data-prototype";
    /// Owning layer id.
    pub const LAYER: &str = "data-layer";
    /// Element id.
    pub const ID: &str = "data-id";
    /// Optional sub-part name.
    pub const PART: &str = "data-part";
    /// `"true"` when selected.
    pub const SELECTED: &str = "data-selected";
}

/// Tag of the drawing surface node. Ascent stops here.
pub const SURFACE_TAG: &str = "svg";

/// Maximum number of parent links followed while resolving a node.
pub const MAX_ASCENT: usize = 512;

/// Handle of a node in a [`MarkupTree`].
///
/// A slot index plus a generation. Removing a node bumps its slot's
/// generation, which turns every outstanding handle to it stale.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(u32, u32);

impl NodeId {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Node {
    tag: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attributes: HashMap<String, String>,
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Arena of markup nodes rooted at a drawing surface.
#[derive(Clone, Debug)]
pub struct MarkupTree {
    slots: Vec<Slot>,
    free: Vec<u32>,
    root: NodeId,
}

impl Default for MarkupTree {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupTree {
    /// Creates a tree holding only the drawing surface.
    #[must_use]
    pub fn new() -> Self {
        let mut tree = Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: NodeId(0, 0),
        };
        tree.root = tree.insert(None, SURFACE_TAG);
        tree
    }

    /// The drawing surface node.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Inserts a node with `tag` under `parent`.
    ///
    /// `None`, or a parent that is no longer alive, creates a detached node.
    pub fn insert(&mut self, parent: Option<NodeId>, tag: &str) -> NodeId {
        let parent = parent.filter(|p| self.is_alive(*p));
        let node = Node {
            tag: tag.to_owned(),
            parent,
            children: Vec::new(),
            attributes: HashMap::new(),
        };
        let id = if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.node = Some(node);
            NodeId(idx, slot.generation)
        } else {
            let idx = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
            self.slots.push(Slot {
                generation: 1,
                node: Some(node),
            });
            NodeId(idx, 1)
        };
        if let Some(parent) = parent.and_then(|p| self.node_mut(p)) {
            parent.children.push(id);
        }
        id
    }

    /// Removes `id` and its whole subtree. Removing the surface is refused.
    ///
    /// Returns `false` when nothing was removed.
    pub fn remove(&mut self, id: NodeId) -> bool {
        if id == self.root || !self.is_alive(id) {
            return false;
        }
        if let Some(parent) = self.node(id).and_then(|n| n.parent)
            && let Some(parent) = self.node_mut(parent)
        {
            parent.children.retain(|c| *c != id);
        }
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.slots.get_mut(next.idx()).and_then(|s| s.node.take()) {
                stack.extend(node.children);
                self.free.push(next.0);
            }
        }
        true
    }

    /// `true` if `id` refers to a live node.
    #[must_use]
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Number of live nodes, including the surface.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.node.is_some()).count()
    }

    /// Never true: the surface is always present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Parent of `id`, if it has one.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.parent
    }

    /// Tag of `id`.
    #[must_use]
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.tag.as_str())
    }

    /// Children of `id` in insertion order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Sets an attribute. Returns `false` if `id` is dead.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: impl Into<String>) -> bool {
        match self.node_mut(id) {
            Some(node) => {
                node.attributes.insert(name.to_owned(), value.into());
                true
            }
            None => false,
        }
    }

    /// Removes an attribute, returning its old value.
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Option<String> {
        self.node_mut(id)?.attributes.remove(name)
    }

    /// Reads an attribute.
    #[must_use]
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id)?.attributes.get(name).map(String::as_str)
    }

    /// Turns `id` into an element root describing `element`.
    ///
    /// Writes the marker and every identity attribute; a stale `data-part`
    /// is cleared when `element` has no part.
    pub fn mark_element(&mut self, id: NodeId, element: &ElementRef) -> bool {
        let Some(node) = self.node_mut(id) else {
            return false;
        };
        let attrs = &mut node.attributes;
        attrs.insert(attr::ELEMENT_ROOT.to_owned(), String::new());
        attrs.insert(attr::PROTOTYPE.to_owned(), element.kind.as_str().to_owned());
        attrs.insert(attr::LAYER.to_owned(), element.layer_id.clone());
        attrs.insert(attr::ID.to_owned(), element.element_id.clone());
        attrs.insert(attr::SELECTED.to_owned(), element.selected.to_string());
        match &element.part {
            Some(part) => {
                attrs.insert(attr::PART.to_owned(), part.clone());
            }
            None => {
                attrs.remove(attr::PART);
            }
        }
        true
    }

    /// Finds the element root owning `id`.
    ///
    /// Returns `None` when the walk reaches the surface, a node without a
    /// parent, a dead node, or exceeds [`MAX_ASCENT`] steps.
    #[must_use]
    pub fn element_root(&self, id: NodeId) -> Option<NodeId> {
        let mut current = id;
        for _ in 0..=MAX_ASCENT {
            let node = self.node(current)?;
            if node.attributes.contains_key(attr::ELEMENT_ROOT) {
                return Some(current);
            }
            if node.tag == SURFACE_TAG {
                return None;
            }
            current = node.parent?;
        }
        tracing::debug!(?id, "element ascent exceeded {MAX_ASCENT} steps");
        None
    }

    fn read_element(&self, root: NodeId) -> Result<ElementRef, HitError> {
        let required = |name: &'static str| {
            self.attribute(root, name)
                .ok_or(HitError::MissingAttribute { attribute: name })
        };
        let kind = ElementKind::parse(required(attr::PROTOTYPE)?);
        let layer_id = required(attr::LAYER)?.to_owned();
        let element_id = required(attr::ID)?.to_owned();
        Ok(ElementRef {
            kind,
            layer_id,
            element_id,
            part: self.attribute(root, attr::PART).map(str::to_owned),
            selected: self.attribute(root, attr::SELECTED) == Some("true"),
        })
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        let slot = self.slots.get(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        slot.node.as_ref()
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        slot.node.as_mut()
    }
}

impl ElementLookup for MarkupTree {
    type Handle = NodeId;

    fn resolve(&self, handle: NodeId) -> Result<Option<ElementRef>, HitError> {
        self.element_root(handle)
            .map(|root| self.read_element(root))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_tree() -> (MarkupTree, NodeId, NodeId) {
        let mut tree = MarkupTree::new();
        let layer = tree.insert(Some(tree.root()), "g");
        let line = tree.insert(Some(layer), "g");
        tree.mark_element(line, &ElementRef::new(ElementKind::Lines, "layer-1", "wall-7"));
        let stroke = tree.insert(Some(line), "path");
        (tree, line, stroke)
    }

    #[test]
    fn resolves_from_a_descendant() {
        let (tree, _, stroke) = line_tree();
        let hit = tree.resolve(stroke).unwrap().unwrap();
        assert_eq!(hit, ElementRef::new(ElementKind::Lines, "layer-1", "wall-7"));
    }

    #[test]
    fn surface_and_plain_groups_resolve_to_none() {
        let (mut tree, _, _) = line_tree();
        let backdrop = tree.insert(Some(tree.root()), "rect");
        assert_eq!(tree.resolve(tree.root()), Ok(None));
        assert_eq!(tree.resolve(backdrop), Ok(None));
    }

    #[test]
    fn detached_nodes_resolve_to_none() {
        let mut tree = MarkupTree::new();
        let orphan = tree.insert(None, "circle");
        assert_eq!(tree.parent(orphan), None);
        assert_eq!(tree.resolve(orphan), Ok(None));
    }

    #[test]
    fn stale_handles_resolve_to_none() {
        let (mut tree, line, stroke) = line_tree();
        assert!(tree.remove(line));
        assert!(!tree.is_alive(stroke));
        assert_eq!(tree.resolve(stroke), Ok(None));

        // Slot reuse must not resurrect the old handle.
        let fresh = tree.insert(Some(tree.root()), "path");
        assert_ne!(fresh, stroke);
        assert_eq!(tree.resolve(stroke), Ok(None));
    }

    #[test]
    fn missing_identity_attribute_is_an_error() {
        let (mut tree, line, stroke) = line_tree();
        tree.remove_attribute(line, attr::LAYER);
        assert_eq!(
            tree.resolve(stroke),
            Err(HitError::MissingAttribute {
                attribute: attr::LAYER
            })
        );
    }

    #[test]
    fn missing_selected_reads_as_unselected() {
        let (mut tree, line, stroke) = line_tree();
        tree.set_attribute(line, attr::SELECTED, "true");
        assert!(tree.resolve(stroke).unwrap().unwrap().selected);
        tree.remove_attribute(line, attr::SELECTED);
        assert!(!tree.resolve(stroke).unwrap().unwrap().selected);
        tree.set_attribute(line, attr::SELECTED, "yes");
        assert!(!tree.resolve(stroke).unwrap().unwrap().selected);
    }

    #[test]
    fn remarking_clears_stale_part() {
        let (mut tree, line, stroke) = line_tree();
        let item =
            ElementRef::new(ElementKind::Items, "layer-1", "sofa").with_part("rotation-anchor");
        tree.mark_element(line, &item);
        assert!(tree.resolve(stroke).unwrap().unwrap().is_rotation_anchor());

        tree.mark_element(line, &ElementRef::new(ElementKind::Items, "layer-1", "sofa"));
        assert_eq!(tree.attribute(line, attr::PART), None);
    }

    #[test]
    fn remove_refuses_the_surface_and_detaches_children() {
        let (mut tree, line, _) = line_tree();
        assert!(!tree.remove(tree.root()));
        let layer = tree.parent(line).unwrap();
        assert_eq!(tree.children(layer), &[line]);
        tree.remove(line);
        assert!(tree.children(layer).is_empty());
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn ascent_is_bounded() {
        let mut tree = MarkupTree::new();
        // A chain deeper than the bound that never reaches the surface.
        let mut node = tree.insert(None, "g");
        for _ in 0..(MAX_ASCENT + 8) {
            node = tree.insert(Some(node), "g");
        }
        assert_eq!(tree.element_root(node), None);
    }
}
