//! # sketchpad
//!
//! A minimal freehand drawing widget for the browser, compiled to
//! WebAssembly. The host page hands it a `<canvas>` element and forwards
//! pointer and control events; the widget turns pointer samples into chains
//! of stroked segments with circular end caps, tracks brush size and color,
//! and erases the canvas on request. The host JavaScript layer is responsible
//! only for wiring DOM events to the exported [`widget::Painter`] and for
//! reflecting the brush size it returns onto the size display.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`widget`] | Wasm-exported [`widget::Painter`] bound to a canvas element |
//! | [`painter`] | Browser-free [`painter::PainterCore`] event logic |
//! | [`surface`] | The [`surface::Surface`] drawing abstraction |
//! | [`render`] | Canvas-2D-backed surface implementation |
//! | [`brush`] | Brush size (clamped) and color state |
//! | [`session`] | `Idle` / `Active` stroke state machine |
//! | [`geom`] | Surface-local [`geom::Point`] |
//! | [`consts`] | Brush size bounds, step, and defaults |

pub mod brush;
pub mod consts;
pub mod geom;
pub mod painter;
pub mod render;
pub mod session;
pub mod surface;
pub mod widget;
