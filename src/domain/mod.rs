//! Domain types for the PaymentCreate exchange and the ports through which the
//! adapter talks to the shop (orders, settings, notices) and to the provider.

pub mod document;
pub mod lifetime;
pub mod merchant;
pub mod money;
pub mod order;
pub mod ports;
pub mod response;
