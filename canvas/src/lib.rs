//! Stage state and input engine for the sandplay canvas.
//!
//! The heart of this crate is [`doc::ItemStore`], the single source of truth
//! for the items placed on the stage. Everything else is built on its public
//! interface: the engine maps gestures and panel buttons onto store
//! mutations, hit-testing finds the item under the pointer, and the scene
//! builder turns a snapshot into draw primitives for whatever surface the
//! host renders with.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`doc`] | Item types, the sparse patch type, and the item store |
//! | [`notify`] | Synchronous change listeners |
//! | [`engine`] | Stage session: selection, palette adds, pointer gestures |
//! | [`input`] | UI state and the drag gesture state machine |
//! | [`hit`] | Hit-testing against item outlines |
//! | [`render`] | Scene building from a snapshot |
//! | [`stage`] | Points and stage size |
//! | [`consts`] | Palettes, shape geometry, styling and input constants |

pub mod consts;
pub mod doc;
pub mod engine;
pub mod hit;
pub mod input;
pub mod notify;
pub mod render;
pub mod stage;
