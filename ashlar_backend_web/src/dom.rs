// Copyright 2026 the Ashlar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM host contract.
//!
//! [`DomGeometrySource`] reads container and item geometry from live
//! `getBoundingClientRect()` calls; [`DomStyleApplier`] writes computed
//! positions as inline CSS. Items are the container's element children in
//! DOM order, so the index-based contract maps directly onto
//! `children().item(i)`.

use alloc::format;

use ashlar_core::backend::{GeometrySource, StyleApplier};
use kurbo::{Point, Size};
use wasm_bindgen::JsCast as _;
use web_sys::HtmlElement;

const TRANSITION: &str = "top 0.2s ease, left 0.2s ease";

fn child(container: &HtmlElement, index: usize) -> Option<HtmlElement> {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "DOM child lists are indexed by u32"
    )]
    let idx = index as u32;
    container
        .children()
        .item(idx)
        .map(|el| el.unchecked_into())
}

/// Reads grid geometry from a container element and its children.
pub struct DomGeometrySource {
    container: HtmlElement,
}

impl core::fmt::Debug for DomGeometrySource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomGeometrySource")
            .field("container", &"HtmlElement")
            .finish()
    }
}

impl DomGeometrySource {
    /// Creates a source reading from `container` and its element children.
    #[must_use]
    pub fn new(container: HtmlElement) -> Self {
        Self { container }
    }
}

impl GeometrySource for DomGeometrySource {
    fn container_attached(&self) -> bool {
        self.container.is_connected()
    }

    fn container_width(&self) -> f64 {
        self.container.get_bounding_client_rect().width()
    }

    fn item_count(&self) -> usize {
        self.container.children().length() as usize
    }

    fn item_size(&self, index: usize) -> Size {
        child(&self.container, index).map_or(Size::ZERO, |el| {
            let rect = el.get_bounding_client_rect();
            Size::new(rect.width(), rect.height())
        })
    }
}

/// Writes computed layout as inline CSS on a container element and its
/// children.
///
/// Style writes are fire-and-forget: a detached element rejects the write
/// and the next layout pass repeats it anyway.
pub struct DomStyleApplier {
    container: HtmlElement,
}

impl core::fmt::Debug for DomStyleApplier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomStyleApplier")
            .field("container", &"HtmlElement")
            .finish()
    }
}

impl DomStyleApplier {
    /// Creates an applier writing to `container` and its element children.
    #[must_use]
    pub fn new(container: HtmlElement) -> Self {
        Self { container }
    }
}

impl StyleApplier for DomStyleApplier {
    fn set_container_positioning(&mut self) {
        let _ = self.container.style().set_property("position", "relative");
    }

    fn set_container_height(&mut self, height: f64) {
        let _ = self
            .container
            .style()
            .set_property("height", &format!("{height}px"));
    }

    fn set_item_positioning(&mut self, index: usize) {
        if let Some(el) = child(&self.container, index) {
            let _ = el.style().set_property("position", "absolute");
        }
    }

    fn set_item_position(&mut self, index: usize, origin: Point) {
        if let Some(el) = child(&self.container, index) {
            let s = el.style();
            let _ = s.set_property("left", &format!("{}px", origin.x));
            let _ = s.set_property("top", &format!("{}px", origin.y));
        }
    }

    fn set_item_max_width(&mut self, index: usize, width: f64) {
        if let Some(el) = child(&self.container, index) {
            let _ = el.style().set_property("max-width", &format!("{width}px"));
        }
    }

    fn set_item_transition(&mut self, index: usize, enabled: bool) {
        if let Some(el) = child(&self.container, index) {
            if enabled {
                let _ = el.style().set_property("transition", TRANSITION);
            } else {
                let _ = el.style().remove_property("transition");
            }
        }
    }
}
