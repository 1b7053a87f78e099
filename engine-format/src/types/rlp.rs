//! Canonical RLP encoding for the client types that take part in hashing.

use alloy_rlp::{BufMut, Encodable, Header};

use super::{AccessListItem, Data, FixedSizeData, Quantity, UInt};

/// A nullable address, encoded as the empty string when absent.
pub(crate) struct OptionalBytes<'a>(pub Option<&'a [u8]>);

impl Encodable for OptionalBytes<'_> {
    fn encode(&self, out: &mut dyn BufMut) {
        self.0.unwrap_or_default().encode(out)
    }

    fn length(&self) -> usize {
        self.0.unwrap_or_default().length()
    }
}

impl<const N: usize> Encodable for FixedSizeData<N> {
    fn encode(&self, out: &mut dyn BufMut) {
        self.as_slice().encode(out)
    }

    fn length(&self) -> usize {
        self.as_slice().length()
    }
}

impl Encodable for Data {
    fn encode(&self, out: &mut dyn BufMut) {
        self.as_ref().encode(out)
    }

    fn length(&self) -> usize {
        self.as_ref().length()
    }
}

impl Encodable for Quantity {
    fn encode(&self, out: &mut dyn BufMut) {
        self.minimal_bytes().encode(out)
    }

    fn length(&self) -> usize {
        self.minimal_bytes().length()
    }
}

impl Encodable for UInt {
    fn encode(&self, out: &mut dyn BufMut) {
        (**self).encode(out)
    }

    fn length(&self) -> usize {
        (**self).length()
    }
}

impl Encodable for AccessListItem {
    fn encode(&self, out: &mut dyn BufMut) {
        Header {
            list: true,
            payload_length: self.payload_length(),
        }
        .encode(out);
        self.address.encode(out);
        encode_list(&self.storage_keys, out);
    }

    fn length(&self) -> usize {
        let payload_length = self.payload_length();
        payload_length + alloy_rlp::length_of_length(payload_length)
    }
}

impl AccessListItem {
    fn payload_length(&self) -> usize {
        self.address.length() + list_length(&self.storage_keys)
    }
}

/// A homogeneous RLP list.
pub(crate) struct List<'a, T>(pub &'a [T]);

impl<T: Encodable> Encodable for List<'_, T> {
    fn encode(&self, out: &mut dyn BufMut) {
        encode_list(self.0, out)
    }

    fn length(&self) -> usize {
        list_length(self.0)
    }
}

fn encode_list<T: Encodable>(items: &[T], out: &mut dyn BufMut) {
    let payload_length = items.iter().map(Encodable::length).sum();
    Header {
        list: true,
        payload_length,
    }
    .encode(out);
    for item in items {
        item.encode(out);
    }
}

fn list_length<T: Encodable>(items: &[T]) -> usize {
    let payload_length: usize = items.iter().map(Encodable::length).sum();
    payload_length + alloy_rlp::length_of_length(payload_length)
}

/// Encodes heterogeneous fields as one RLP list.
pub(crate) fn encode_fields(fields: &[&dyn Encodable]) -> Vec<u8> {
    let payload_length: usize = fields.iter().map(|f| f.length()).sum();
    let mut out = Vec::with_capacity(payload_length + alloy_rlp::length_of_length(payload_length));
    Header {
        list: true,
        payload_length,
    }
    .encode(&mut out);
    for field in fields {
        field.encode(&mut out);
    }
    out
}
