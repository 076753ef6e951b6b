//! Wire formats spoken with the provider.

pub mod xml;
