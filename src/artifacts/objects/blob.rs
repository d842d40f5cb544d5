//! File blob object
//!
//! A blob is the raw content of one tracked file at one point in time. The
//! serialized form is exactly the content bytes, so a blob's ID equals the
//! digest of the file content and re-adding an unchanged file is a no-op.

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use bytes::Bytes;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        Ok(self.content.clone())
    }
}

impl Unpackable for Blob {
    fn deserialize(bytes: Bytes) -> anyhow::Result<Self> {
        Ok(Self::new(bytes))
    }
}

impl Object for Blob {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blob_id_is_digest_of_content() {
        // sha1("hello") is a fixed point; identical content must always
        // yield the identical ID
        let blob = Blob::new(Bytes::from_static(b"hello"));
        assert_eq!(
            blob.object_id().unwrap().as_ref(),
            "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d"
        );
    }

    #[test]
    fn identical_content_yields_identical_id() {
        let first = Blob::new(Bytes::from_static(b"same bytes"));
        let second = Blob::new(Bytes::from_static(b"same bytes"));
        assert_eq!(first.object_id().unwrap(), second.object_id().unwrap());
    }

    #[test]
    fn serialization_round_trips() {
        let blob = Blob::new(Bytes::from_static(b"round trip me"));
        let bytes = blob.serialize().unwrap();
        assert_eq!(Blob::deserialize(bytes).unwrap(), blob);
    }
}
