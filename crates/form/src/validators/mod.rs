//! Built-in validators
//!
//! | Name       | Type                  | Options           |
//! |------------|-----------------------|-------------------|
//! | `isEmpty`  | [`NotEmpty`]          | `BaseOptions`     |
//! | `email`    | [`Email`]             | `BaseOptions`     |
//! | `password` | [`Password`]          | `PasswordOptions` |
//! | `equal`    | [`Equal`]             | `EqualOptions`    |
//! | `image`    | [`ImageValidator`]    | `ImageOptions`    |
//!
//! All of them run as [`Handler`](crate::handler::Handler)s inside the
//! engine, but the synchronous ones can also be called directly:
//!
//! ```rust,ignore
//! use nebula_form::prelude::*;
//!
//! let verdict = email().validate(&Value::from("a@b.com"), &ValidatorOptions::email());
//! assert!(verdict.is_valid());
//! ```

pub mod content;
pub mod image;

pub use content::{Email, Equal, NotEmpty, Password, email, equal, not_empty, password};
pub use image::ImageValidator;

/// Registry names of the built-in validators.
pub mod names {
    pub const IS_EMPTY: &str = "isEmpty";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const EQUAL: &str = "equal";
    pub const IMAGE: &str = "image";
}
