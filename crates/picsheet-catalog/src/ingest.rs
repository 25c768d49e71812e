//! All-or-nothing batch assembly.
//!
//! A batch is the set of files submitted in one selection. Every file is
//! probed and given a preview, and only a fully successful batch is
//! handed back for committing. On the first failure, any previews
//! already minted for the batch are released and nothing is returned.

use crate::probe::probe;
use crate::types::{ImageEntry, IngestError, PreviewHandle, ProbedImage};

/// A file as delivered by the front end: its name and raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Original file name.
    pub name: String,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    /// Pair a name with its bytes.
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// Probe every file of a batch and mint a preview for each.
///
/// `mint` is called once per file, in selection order, only after every
/// file in the batch has probed successfully.
///
/// # Errors
///
/// Returns the first probe error, or the first error returned by `mint`.
/// In the latter case previews minted earlier in the batch are released
/// before returning.
pub fn assemble_batch<P, F>(
    files: Vec<SelectedFile>,
    mut mint: F,
) -> Result<Vec<ImageEntry<P>>, IngestError>
where
    P: PreviewHandle,
    F: FnMut(&ProbedImage) -> Result<P, IngestError>,
{
    let probed = files
        .into_iter()
        .map(|file| probe(file.name, file.bytes))
        .collect::<Result<Vec<_>, _>>()?;

    let mut entries = Vec::with_capacity(probed.len());
    for image in probed {
        match mint(&image) {
            Ok(preview) => entries.push(ImageEntry::new(image, preview)),
            Err(e) => {
                for entry in entries {
                    entry.release();
                }
                return Err(e);
            }
        }
    }
    Ok(entries)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::probe::tests::png;
    use crate::types::{Dimensions, NoPreview};

    /// Preview that records its release in a shared log.
    struct Tracked {
        name: String,
        released: Rc<RefCell<Vec<String>>>,
    }

    impl PreviewHandle for Tracked {
        fn release(self) {
            self.released.borrow_mut().push(self.name);
        }
    }

    #[test]
    fn successful_batch_keeps_selection_order() {
        let files = vec![
            SelectedFile::new("a.png", png(100, 50)),
            SelectedFile::new("b.png", png(50, 100)),
        ];
        let entries = assemble_batch(files, |_| Ok(NoPreview)).unwrap();
        let names: Vec<_> = entries.iter().map(ImageEntry::name).collect();
        assert_eq!(names, ["a.png", "b.png"]);
        assert_eq!(entries[0].dimensions(), Dimensions::new(100, 50));
        assert_eq!(entries[1].dimensions(), Dimensions::new(50, 100));
    }

    #[test]
    fn one_bad_file_fails_the_whole_batch_without_minting() {
        let minted = RefCell::new(0);
        let files = vec![
            SelectedFile::new("a.png", png(4, 4)),
            SelectedFile::new("broken.png", vec![1, 2, 3]),
            SelectedFile::new("c.png", png(4, 4)),
        ];
        let result = assemble_batch(files, |_| {
            *minted.borrow_mut() += 1;
            Ok(NoPreview)
        });
        assert!(matches!(result, Err(IngestError::ImageDecode { ref name, .. }) if name == "broken.png"));
        assert_eq!(*minted.borrow(), 0);
    }

    #[test]
    fn mint_failure_releases_previews_already_minted() {
        let released = Rc::new(RefCell::new(Vec::new()));
        let files = vec![
            SelectedFile::new("a.png", png(4, 4)),
            SelectedFile::new("b.png", png(4, 4)),
            SelectedFile::new("c.png", png(4, 4)),
        ];
        let result = assemble_batch(files, |image| {
            if image.name == "c.png" {
                return Err(IngestError::Preview {
                    name: image.name.clone(),
                    reason: "blob refused".to_owned(),
                });
            }
            Ok(Tracked {
                name: image.name.clone(),
                released: Rc::clone(&released),
            })
        });
        assert!(matches!(result, Err(IngestError::Preview { .. })));
        assert_eq!(*released.borrow(), ["a.png", "b.png"]);
    }

    #[test]
    fn empty_batch_is_empty() {
        let entries = assemble_batch::<NoPreview, _>(Vec::new(), |_| Ok(NoPreview)).unwrap();
        assert!(entries.is_empty());
    }
}
