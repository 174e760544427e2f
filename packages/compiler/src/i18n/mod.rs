//! Internationalization
//!
//! Message model, `i18n:attributes` parsing, placeholder interpolation and
//! translation dispatch for the template compiler.

pub mod attributes;
pub mod interpolate;
pub mod message;
pub mod translate;

pub use attributes::{is_i18n_attribute, parse_attributes, I18N_ATTRIBUTES};
pub use interpolate::{interpolate, NAME_PATTERN};
pub use message::{Mapping, Message, TranslatableMessage};
pub use translate::{fast_translate, simple_translate, TranslationCatalog};
