//! Opaque object handles.
//!
//! The wizard controller hands step content back to its embedding
//! application as an [`ObjectId`] and never looks inside it. The handle is
//! a stable slotmap key: cheap to copy, comparable, and convertible to a
//! raw `u64` for interop with whatever widget or component store the host
//! application keeps.

use slotmap::new_key_type;

new_key_type! {
    /// A unique, stable identifier for an object owned by the host
    /// application.
    ///
    /// `ObjectId`s are opaque to this crate. They are produced and resolved
    /// by the embedding application (typically a widget registry); the
    /// wizard only stores and returns them.
    pub struct ObjectId;
}

impl ObjectId {
    /// Convert the ObjectId to a raw u64 value.
    ///
    /// Useful for interop with external systems that need a numeric ID.
    /// The raw value can be converted back using [`ObjectId::from_raw`].
    #[inline]
    pub fn as_raw(self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }

    /// Create an ObjectId from a raw u64 value.
    ///
    /// Note: this does not check that the handle refers to a live object
    /// in the host application's store.
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        Self::from(slotmap::KeyData::from_ffi(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn test_raw_round_trip() {
        let mut store: SlotMap<ObjectId, &str> = SlotMap::with_key();
        let id = store.insert("content");

        let raw = id.as_raw();
        assert_eq!(ObjectId::from_raw(raw), id);
        assert_eq!(store.get(ObjectId::from_raw(raw)), Some(&"content"));
    }

    #[test]
    fn test_ids_are_distinct() {
        let mut store: SlotMap<ObjectId, ()> = SlotMap::with_key();
        let a = store.insert(());
        let b = store.insert(());
        assert_ne!(a, b);
    }
}
