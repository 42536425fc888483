//! Theme-conditional class composition.
//!
//! The central type is [`ClassSet`]: an ordered list of [`ClassPair`]s,
//! each holding a base class and an optional dark-mode counterpart. A set
//! resolves against a [`ColorMode`](crate::theme::ColorMode) into the flat
//! class string an element carries in that mode:
//!
//! ```rust
//! use duotone::{ClassSet, ColorMode};
//!
//! let classes = ClassSet::new()
//!     .add_adaptive("bg-white", "bg-black")
//!     .add_adaptive("text-black", "text-white");
//!
//! assert_eq!(classes.resolve(ColorMode::Light), "bg-white text-black");
//! assert_eq!(classes.resolve(ColorMode::Dark), "bg-white bg-black text-black text-white");
//! ```
//!
//! Sets can also be written in the conventional `dark:`-prefixed string
//! form ([`ClassSet::parse`], [`ClassSet::to_string`]) or loaded in bulk
//! from YAML ([`ClassSheet`]).

mod convention;
mod error;
mod pair;
mod set;
mod sheet;

pub use convention::{is_dark_token, split_dark_token, DARK_PREFIX};
pub use error::{ClassSetError, SheetError};
pub use pair::ClassPair;
pub use set::ClassSet;
pub use sheet::ClassSheet;
