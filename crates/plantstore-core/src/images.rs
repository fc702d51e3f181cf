//! Image lifecycle rules.
//!
//! Decides which reference a freshly uploaded image gets, and which
//! previously stored file stops being referenced (becomes stale) when a
//! record's image is replaced or the record is deleted. Stale files are
//! removed by the service only after the store write succeeded.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

use crate::domain::{ImageRef, Plant, UploadedImage};

/// Public path prefix under which uploaded images are served.
pub const UPLOADS_PREFIX: &str = "/uploads";

const FALLBACK_FILE_NAME: &str = "image";

/// Outcome of an image change on update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageTransition {
    /// Reference to store on the record. `None` leaves the record's image untouched.
    pub new_ref: Option<ImageRef>,
    /// Previously referenced file that should be removed after the write.
    pub stale_ref: Option<ImageRef>,
}

/// Issues unique image references for uploads.
///
/// References look like `/uploads/<millis>_<sanitized name>`. The millisecond
/// stamp is strictly increasing per namer, so two uploads of the same file
/// name within one millisecond still get distinct references.
#[derive(Debug, Default)]
pub struct ImageNamer {
    last_stamp: AtomicI64,
}

impl ImageNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reference for a newly created record's image, if one was uploaded.
    pub fn resolve_new_image(&self, upload: Option<&UploadedImage>) -> Option<ImageRef> {
        upload.map(|image| self.reference_for(&image.original_name))
    }

    /// Image transition for an update of a record whose current image is `existing`.
    pub fn resolve_updated_image(
        &self,
        existing: Option<&ImageRef>,
        upload: Option<&UploadedImage>,
    ) -> ImageTransition {
        match upload {
            None => ImageTransition::default(),
            Some(image) => ImageTransition {
                new_ref: Some(self.reference_for(&image.original_name)),
                stale_ref: existing.cloned(),
            },
        }
    }

    fn reference_for(&self, original_name: &str) -> ImageRef {
        let stamp = self.next_stamp(Utc::now().timestamp_millis());
        ImageRef::new(format!(
            "{UPLOADS_PREFIX}/{stamp}_{}",
            sanitize_filename(original_name)
        ))
    }

    fn next_stamp(&self, now_millis: i64) -> i64 {
        let mut last = self.last_stamp.load(Ordering::Relaxed);
        loop {
            let candidate = now_millis.max(last + 1);
            match self.last_stamp.compare_exchange_weak(
                last,
                candidate,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(actual) => last = actual,
            }
        }
    }
}

/// The file that becomes stale when `plant` is deleted.
pub fn stale_on_delete(plant: &Plant) -> Option<ImageRef> {
    plant.image_ref.clone()
}

/// Make a client-supplied filename safe to store.
///
/// Keeps only the final path component and replaces each run of whitespace
/// with a single underscore.
pub fn sanitize_filename(original: &str) -> String {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    let mut out = String::with_capacity(base.len());
    let mut in_whitespace = false;
    for ch in base.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
        } else {
            out.push(ch);
            in_whitespace = false;
        }
    }

    if out.is_empty() || out == "." || out == ".." {
        FALLBACK_FILE_NAME.to_string()
    } else {
        out
    }
}
