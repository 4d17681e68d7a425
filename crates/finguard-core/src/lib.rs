#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]

mod helper;

pub mod error;
pub mod extension;
pub mod sanitizer;
pub mod state;
pub mod validation;

pub use helper::{mask_account_number, mask_card_number};

#[doc(no_inline)]
pub use serde_json::json;

/// A JSON value.
pub type JsonValue = serde_json::Value;

/// A JSON key-value type.
pub type Map = serde_json::Map<String, JsonValue>;

/// A 128 bit representation of a fixed-precision decimal number.
pub type Decimal = rust_decimal::Decimal;

/// A value which is initialized on the first access.
pub type LazyLock<T> = std::sync::LazyLock<T>;

/// An allocation-optimized string.
pub type SharedString = std::borrow::Cow<'static, str>;
