//! Pipeline stages for image-folder-to-PDF conversion.
//!
//! Each submodule implements exactly one step and is tested on its own.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ decode ──▶ layout ──▶ assemble
//! (list)    (codec)    (geometry) (printpdf)
//! ```
//!
//! 1. [`input`]    — list the folder, sort by name, filter by extension
//! 2. [`decode`]   — open one file in a scoped handle and decode it
//! 3. [`layout`]   — size the page and place the image on it
//! 4. [`assemble`] — append pages to the document and serialise it

pub mod assemble;
pub mod decode;
pub mod input;
pub mod layout;
