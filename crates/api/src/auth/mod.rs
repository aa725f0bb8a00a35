//! Authentication primitives (password hashing).

pub mod password;
