//! Computed styles.

mod computed;

pub use computed::ComputedStyle;
