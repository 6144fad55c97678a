//! Kuroi Eats Cart prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError},
    contact::{ContactError, ContactField, ContactForm},
    faq::FaqAccordion,
    items::LineItem,
    menu::{Dish, Menu, MenuError, MenuSection},
    notices::Notice,
    observer::{CartEvent, CartObserver, NoopObserver},
    pricing::{format_price, total_price},
    receipt::Receipt,
    storage::{CartStorage, FileStorage, MemoryStorage, StorageError},
    store::{CartStore, CheckoutError, PersistenceError, STORAGE_KEY},
    view::{CartLineView, CartView, RenderError},
};
