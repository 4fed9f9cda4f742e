//! High-level decoding facade.
//!
//! Core API: `decode(buffer, &password, &format)?` for an owned wallet buffer.
//! Variants: `decode_in_place` for caller-owned buffers, `decode_reader` for any `Read`.
//! Building block: `decrypt_cbc_in_place` (AES-128-CBC, no padding removal).

pub(crate) mod cbc;
pub(crate) mod decrypt;

pub use cbc::decrypt_cbc_in_place;
pub use decrypt::{decode, decode_in_place, decode_reader};
