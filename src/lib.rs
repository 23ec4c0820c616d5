// ============================================================================
// DOM UTILS - Helpers de manipulación DOM para apps WASM (Rust puro)
// ============================================================================
// Capa fina sobre web-sys: clases, eventos con delegación, estilos
// computados, medición de scrollbar y clonado de vnodes. Sin estado global:
// lo que necesita estado (scroll) vive en un servicio que el caller posee.
//
// Inicialización de logging sugerida en la app que consume el crate:
//
//   console_error_panic_hook::set_once();
//   wasm_logger::init(wasm_logger::Config::default());
// ============================================================================

pub mod builder;
pub mod element;
pub mod events;
pub mod scroll;
pub mod style;
pub mod vnode;

pub use builder::*;
pub use element::*;
pub use events::*;
pub use scroll::*;
pub use style::*;
pub use vnode::*;
