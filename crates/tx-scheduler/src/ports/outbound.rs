//! Outbound Ports (Driven Ports / SPI)

use crate::domain::value_objects::{Nonce, Sender};
use std::collections::HashMap;

/// Account nonce lookup
///
/// Returns the next nonce the chain currently accepts for `sender`. Must be
/// pure and read-only; the scheduler calls it once per distinct sender of a
/// batch.
pub trait NonceProvider {
    fn get_nonce(&self, sender: &Sender) -> Nonce;
}

/// Senders missing from the map are treated as fresh accounts (nonce 0).
impl NonceProvider for HashMap<Sender, Nonce> {
    fn get_nonce(&self, sender: &Sender) -> Nonce {
        self.get(sender).copied().unwrap_or_default()
    }
}

impl<P: NonceProvider + ?Sized> NonceProvider for &P {
    fn get_nonce(&self, sender: &Sender) -> Nonce {
        (**self).get_nonce(sender)
    }
}
