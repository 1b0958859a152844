//! End-to-end checks of the price pipeline against the bundled model artifact.

mod pricing;
