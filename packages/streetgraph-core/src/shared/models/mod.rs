//! Shared models

mod envelope;
mod feature;

pub use envelope::Envelope;
pub use feature::{render_attribute, Attributes, Feature, RawFeature};
