// Copyright 2026 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=glissade_transform --heading-base-level=0

//! Glissade Transform: viewport transform primitives for pan/zoom surfaces.
//!
//! This crate provides the small, headless geometric core shared by every
//! Glissade interaction strategy:
//! - [`ViewTransform`]: a uniform scale + translation mapping document space
//!   onto a viewport.
//! - [`ScaleBounds`]: a strictly positive, normalized zoom range.
//! - [`zoom_about`]: the focal-point-preserving zoom construction, kept as a
//!   single pure function so that every temporal strategy (instant, physics,
//!   smooth) applies exactly the same math per frame.
//!
//! It does **not** own any scheduling, gesture handling, or rendering.
//! Callers are expected to:
//! - Keep the canonical [`ViewTransform`] in their controller/state layer.
//! - Clamp proposed scales through [`ScaleBounds`] before constructing a new
//!   transform.
//! - Drive per-frame updates at a higher layer (see `glissade_interaction`).
//!
//! ## Minimal example
//!
//! ```rust
//! use glissade_transform::{ScaleBounds, ViewTransform, zoom_about};
//! use kurbo::Point;
//!
//! let bounds = ScaleBounds::new(1.0, 5.0);
//! let current = ViewTransform::IDENTITY;
//!
//! // Zoom in 2x about the center of an 800x600 viewport.
//! let focal = Point::new(400.0, 300.0);
//! let new_scale = bounds.clamp(current.scale() * 2.0);
//! let zoomed = zoom_about(current, focal, new_scale);
//!
//! assert_eq!(zoomed.scale(), 2.0);
//! // The document point that was under the focal point still projects there.
//! let anchor = current.view_to_doc(focal);
//! let projected = zoomed.doc_to_view(anchor);
//! assert!((projected.x - focal.x).abs() < 1e-6);
//! assert!((projected.y - focal.y).abs() < 1e-6);
//! ```
//!
//! ## Design notes
//!
//! - The transform is axis-aligned with a **uniform** scale; rotation is
//!   intentionally left out and can be added later as a backwards-compatible
//!   extension.
//! - Translation is expressed in viewport (scaled) units and is not
//!   constrained here; pan bounds are a layout concern for higher layers.
//! - Scale is kept strictly positive structurally: [`ScaleBounds`] never
//!   produces a non-positive value, so the divisions in coordinate
//!   conversion and [`zoom_about`] cannot degenerate.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod transform;
mod zoom;

pub use bounds::ScaleBounds;
pub use transform::ViewTransform;
pub use zoom::zoom_about;
