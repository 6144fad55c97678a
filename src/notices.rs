//! Notices
//!
//! Short messages shown in a toast after a user action.

use std::{fmt, time::Duration};

/// How long a toast stays fully visible.
pub const DISMISS_AFTER: Duration = Duration::from_millis(2_000);

/// Length of the slide-out transition before the toast is removed.
pub const EXIT_TRANSITION: Duration = Duration::from_millis(300);

/// A transient user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A unit of the named dish was added.
    ItemAdded(String),

    /// The named dish was removed.
    ItemRemoved(String),

    /// Checkout was attempted with nothing in the cart.
    EmptyCart,

    /// The contact form was accepted.
    MessageSent,

    /// The contact form has blank fields.
    MissingFields,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::ItemAdded(name) => write!(f, "{name} added to cart!"),
            Notice::ItemRemoved(name) => write!(f, "{name} removed from cart!"),
            Notice::EmptyCart => f.write_str("Your cart is empty!"),
            Notice::MessageSent => f.write_str("Message sent successfully!"),
            Notice::MissingFields => f.write_str("Please fill in all fields!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Notice::ItemAdded("Ramen".to_string()).to_string(),
            "Ramen added to cart!"
        );
        assert_eq!(
            Notice::ItemRemoved("Gyoza".to_string()).to_string(),
            "Gyoza removed from cart!"
        );
        assert_eq!(Notice::EmptyCart.to_string(), "Your cart is empty!");
        assert_eq!(Notice::MessageSent.to_string(), "Message sent successfully!");
        assert_eq!(Notice::MissingFields.to_string(), "Please fill in all fields!");
    }

    #[test]
    fn toast_lifetime() {
        assert_eq!(DISMISS_AFTER + EXIT_TRANSITION, Duration::from_millis(2_300));
    }
}
