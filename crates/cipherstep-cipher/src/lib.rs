//! Classical ciphers used by the visualizer.
//!
//! Both ciphers are pure, total functions over `&str`. They are pedagogical
//! and offer no security.
//!
//! ```
//! use cipherstep_cipher::{columnar, shift};
//!
//! assert_eq!(shift::encrypt("HELLO", 3), "KHOOR");
//! assert_eq!(columnar::encrypt("HELLO", 3), "HLEOLX");
//! assert_eq!(columnar::decrypt("HLEOLX", 3), "HELLO");
//! ```

pub mod columnar;
pub mod shift;
