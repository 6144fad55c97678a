//! Kuroi Eats Cart
//!
//! Shopping cart for the Kuroi Eats restaurant site: an ordered list of line items kept in a
//! [`store::CartStore`], mirrored to a single key-value slot and projected into a
//! [`view::CartView`] after every change.

pub mod cart;
pub mod contact;
pub mod faq;
pub mod items;
pub mod menu;
pub mod notices;
pub mod observer;
pub mod prelude;
pub mod pricing;
pub mod receipt;
pub mod storage;
pub mod store;
pub mod view;
