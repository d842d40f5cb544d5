//! Content-addressed object database.
//!
//! Append-only key/value storage keyed by the SHA-1 of an object's
//! serialized form. Objects are zlib-compressed and live in fan-out
//! directories (`ab/cdef...`). There is no update or delete: once written,
//! an object is immutable, and storing identical content again is a no-op.

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::JotError;
use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, new)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Serialize an object, write it under its digest unless already
    /// present, and return the digest.
    ///
    /// The write is complete-or-absent: content goes to a temporary file in
    /// the objects area which is atomically renamed into place, so a crash
    /// can never leave a partially written object readable under its digest.
    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        let object_content = object.serialize()?;
        let object_id = object.object_id()?;
        let object_path = self.path.join(object_id.to_path());

        if object_path.exists() {
            log::debug!("object {} already stored", object_id);
            return Ok(object_id);
        }

        let object_dir = object_path
            .parent()
            .context(format!("invalid object path {}", object_path.display()))?;
        std::fs::create_dir_all(object_dir).context(format!(
            "unable to create object directory {}",
            object_dir.display()
        ))?;

        self.write_object(&object_path, object_content)?;
        log::info!("stored object {}", object_id);

        Ok(object_id)
    }

    /// Read back the exact bytes stored under a digest.
    ///
    /// A digest with no stored entry fails with
    /// [`JotError::ObjectNotFound`], which callers must keep distinct from
    /// plain I/O failures: a missing object reached through a ref or a
    /// parent link means the history is broken.
    pub fn load(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        let object_content = match std::fs::read(&object_path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(JotError::ObjectNotFound(object_id.clone()).into());
            }
            Err(err) => {
                return Err(err).context(format!(
                    "unable to read object file {}",
                    object_path.display()
                ));
            }
        };

        Self::decompress(object_content.into())
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).exists()
    }

    /// Load and decode a commit record.
    pub fn parse_commit(&self, object_id: &ObjectId) -> anyhow::Result<Commit> {
        let bytes = self.load(object_id)?;
        Commit::deserialize(bytes)
            .with_context(|| format!("object {} is not a valid commit", object_id))
    }

    fn write_object(&self, object_path: &PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let object_content = Self::compress(object_content)?;

        let mut temp_file = tempfile::NamedTempFile::new_in(&self.path).context(format!(
            "unable to create temporary object file in {}",
            self.path.display()
        ))?;
        temp_file.write_all(&object_content).context(format!(
            "unable to write object file {}",
            object_path.display()
        ))?;

        // the rename is what makes the write atomic
        temp_file.persist(object_path).context(format!(
            "unable to rename object file into {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn compress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(&data)
            .context("unable to compress object content")?;

        encoder
            .finish()
            .map(|compressed_content| compressed_content.into())
            .context("unable to finish compressing object content")
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("unable to decompress object content")?;

        Ok(decompressed_content.into())
    }
}
