//! # gomun-session
//!
//! The client's session record: one JSON value under the `gomun:user` key of
//! a key/value [`Storage`], standing in for browser local storage.
//!
//! Reads never fail. Anything that is not a complete session with a usable
//! `expiresAt` reads as "no session".

pub mod error;
pub mod storage;
pub mod store;

pub use error::SessionError;
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{STORAGE_KEY, SessionState, SessionStore, is_expired, is_expired_at};
