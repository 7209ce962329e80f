// Copyright 2025 the Joist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Joist Hit: which scene element is under the pointer.
//!
//! ## Overview
//!
//! The renderer draws every scene primitive (wall line, hole, item, vertex,
//! area) as a small subtree of markup. The outermost node of that subtree,
//! the **element root**, carries the element's identity as attributes:
//!
//! | attribute           | meaning                                   |
//! |---------------------|-------------------------------------------|
//! | `data-element-root` | marker; present on element roots only     |
//! | `data-prototype`    | element kind (`lines`, `holes`, ...)      |
//! | `data-layer`        | owning layer id                           |
//! | `data-id`           | element id                                |
//! | `data-part`         | optional sub-part, e.g. `rotation-anchor` |
//! | `data-selected`     | `"true"` when the element is selected     |
//!
//! A pointer event targets some leaf inside that subtree. Resolving it means
//! walking up the ancestry until an element root (an [`ElementRef`]) or the
//! drawing surface (nothing) is reached.
//!
//! ## Layering
//!
//! [`ElementLookup`] is the capability the viewer's dispatcher depends on. It
//! is implemented here by [`MarkupTree`], a small arena that mirrors rendered
//! markup. Hosts with their own retained tree implement [`ElementLookup`]
//! directly; tests can implement it over a fixed table of hits.
//!
//! ```rust
//! use joist_hit::{ElementKind, ElementLookup, ElementRef, MarkupTree};
//!
//! let mut tree = MarkupTree::new();
//! let group = tree.insert(Some(tree.root()), "g");
//! tree.mark_element(
//!     group,
//!     &ElementRef::new(ElementKind::Items, "layer-1", "chair").selected(true),
//! );
//! let handle = tree.insert(Some(group), "polygon");
//!
//! let hit = tree.resolve(handle).unwrap().unwrap();
//! assert_eq!(hit.kind, ElementKind::Items);
//! assert_eq!(hit.element_id, "chair");
//! assert!(hit.selected);
//!
//! // The bare surface resolves to nothing.
//! assert_eq!(tree.resolve(tree.root()).unwrap(), None);
//! ```

mod element;
mod lookup;
pub mod markup;

pub use element::{ElementKind, ElementRef, ROTATION_ANCHOR};
pub use lookup::{ElementLookup, HitError};
pub use markup::{MarkupTree, NodeId};
