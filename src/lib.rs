//! Data layer of a small OpenGL toolkit.
//!
//! The centre of the crate is [`ser`], a length-prefixed binary format for
//! arrays of `f32`, `u32` and 2/3/4-component vectors, together with the
//! buffer handles that make ownership of serialized bytes explicit. Around it
//! sit the GL-free resource types that feed a renderer: [`color::Color`],
//! [`atlas::AtlasLayout`] and [`mesh::Mesh`], plus whole-file reads and writes
//! in [`io`].
//!
//! Nothing here talks to a GL context.

pub mod atlas;
pub mod color;
pub mod config;
pub mod error;
pub mod io;
pub mod mesh;
pub mod ser;
pub mod utils;
pub mod vector;

pub use color::Color;
pub use config::{FormatConfig, Framing};
pub use error::{Error, ErrorKind, Result};
pub use mesh::Mesh;
pub use ser::{BufferSlot, ByteBuffer, Element, ElementKind};
pub use vector::{Vec2, Vec3, Vec4};
