// Copyright 2025 the Joist Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::element::ElementRef;

/// Malformed element markup.
///
/// Raised only when an element root was found but cannot be read. It means
/// the renderer emitted bad markup; callers should abandon the event rather
/// than guess.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HitError {
    /// An element root lacks one of its identity attributes.
    #[error("element root is missing required attribute `{attribute}`")]
    MissingAttribute {
        /// Name of the missing attribute.
        attribute: &'static str,
    },
}

/// Resolves a low-level hit handle (typically the node an event targeted)
/// to the scene element it belongs to.
///
/// Implementations return:
/// - `Ok(Some(..))` when the handle lies inside an element root,
/// - `Ok(None)` when it does not (bare surface, detached or dead node),
/// - `Err(..)` when an element root was found but is malformed.
pub trait ElementLookup {
    /// The handle type produced by the host's own hit testing.
    type Handle;

    /// Resolves `handle` to a scene element.
    fn resolve(&self, handle: Self::Handle) -> Result<Option<ElementRef>, HitError>;
}

impl<L: ElementLookup + ?Sized> ElementLookup for &L {
    type Handle = L::Handle;

    fn resolve(&self, handle: Self::Handle) -> Result<Option<ElementRef>, HitError> {
        (**self).resolve(handle)
    }
}
