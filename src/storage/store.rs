use super::codec::{DocumentFormat, parse_document, render_document};
use crate::{
    config::{BookshelfConfig, IdMode, StoreSettings},
    error::{BookshelfError, Result},
    model::Document,
    validation,
};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tempfile::NamedTempFile;

const ID_ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Documents deleted by [`DocumentStore::remove_where`], in collection order.
#[derive(Debug)]
pub struct Removal<D> {
    pub removed: Vec<D>,
}

impl<D> Removal<D> {
    pub fn deleted_count(&self) -> usize {
        self.removed.len()
    }

    pub fn into_first(self) -> Option<D> {
        self.removed.into_iter().next()
    }
}

/// Flat-file document store.
///
/// Each collection is a directory under the store root and each document is
/// one file named `<id>.<ext>`. Collection order is creation time, ties
/// broken by ID. Writes go through a temp file and rename, and write
/// operations are serialized by a store-wide lock. Reads take no lock.
pub struct DocumentStore {
    root: PathBuf,
    id_length: usize,
    id_mode: IdMode,
    format: DocumentFormat,
    write_lock: Mutex<()>,
}

impl DocumentStore {
    /// Open the store configured for the project at `project_root`.
    pub fn open(config: &BookshelfConfig, project_root: &Path) -> Result<Self> {
        Self::open_at(config.data_path(project_root), &config.store)
    }

    pub fn open_at(root: PathBuf, settings: &StoreSettings) -> Result<Self> {
        if settings.id_length == 0 {
            return Err(BookshelfError::Config(
                "id_length must be at least 1".to_string(),
            ));
        }
        std::fs::create_dir_all(&root)?;
        tracing::info!(
            root = %root.display(),
            format = %settings.format,
            "Opened document store"
        );
        Ok(Self {
            root,
            id_length: settings.id_length,
            id_mode: settings.id_mode,
            format: settings.format,
            write_lock: Mutex::new(()),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn generate_id(&self) -> Result<String> {
        match self.id_mode {
            IdMode::Random => Ok(nanoid::format(
                nanoid::rngs::default,
                &ID_ALPHABET,
                self.id_length,
            )),
            IdMode::Sequential => self.next_sequential_id(),
        }
    }

    fn next_sequential_id(&self) -> Result<String> {
        let _guard = self.lock();
        let counter_path = self.root.join(".id");

        let current = if counter_path.exists() {
            let content = std::fs::read_to_string(&counter_path)?;
            content.trim().parse::<u64>().map_err(|e| {
                BookshelfError::Storage(format!(
                    "Corrupt id counter {}: {}",
                    counter_path.display(),
                    e
                ))
            })?
        } else {
            0
        };

        let next = current + 1;
        self.atomic_write(&counter_path, &next.to_string())?;

        Ok(format!("{:0>width$}", next, width = self.id_length))
    }

    /// Persist a new document. Fails if a document with the same ID exists.
    pub fn insert<D: Document>(&self, doc: &D) -> Result<PathBuf> {
        validation::validate_id(doc.id())?;
        let _guard = self.lock();

        if let Some(existing) = self.locate::<D>(doc.id()) {
            return Err(BookshelfError::Storage(format!(
                "Document already exists: {}",
                existing.display()
            )));
        }

        let collection = self.collection_path::<D>();
        std::fs::create_dir_all(&collection)?;

        let file_path = collection.join(format!("{}.{}", doc.id(), self.format.extension()));
        let content = render_document(doc, self.format)?;
        self.atomic_write(&file_path, &content)?;

        tracing::debug!(collection = D::COLLECTION, id = %doc.id(), "Inserted document");
        Ok(file_path)
    }

    /// Look up a document by ID. IDs that cannot name a document resolve to
    /// `None`, the same as IDs that were never issued.
    pub fn find_by_id<D: Document>(&self, id: &str) -> Result<Option<D>> {
        if let Err(e) = validation::validate_id(id) {
            tracing::debug!(collection = D::COLLECTION, id = %id, error = %e, "Rejected lookup");
            return Ok(None);
        }

        let Some(path) = self.locate::<D>(id) else {
            return Ok(None);
        };
        let doc = self.read_document(&path)?;
        Ok(Some(doc))
    }

    pub fn find_all<D: Document>(&self) -> Result<Vec<D>> {
        Ok(self
            .load_collection::<D>()?
            .into_iter()
            .map(|(_, doc)| doc)
            .collect())
    }

    pub fn find_where<D, F>(&self, predicate: F) -> Result<Vec<D>>
    where
        D: Document,
        F: Fn(&D) -> bool,
    {
        Ok(self
            .load_collection::<D>()?
            .into_iter()
            .map(|(_, doc)| doc)
            .filter(|doc| predicate(doc))
            .collect())
    }

    /// Delete every document matching `predicate`, all or nothing.
    ///
    /// Matches are first renamed to hidden staging names that collection
    /// scans and ID lookups skip. If any rename fails, the staged files are
    /// moved back and no document is removed. Only then are they deleted.
    pub fn remove_where<D, F>(&self, predicate: F) -> Result<Removal<D>>
    where
        D: Document,
        F: Fn(&D) -> bool,
    {
        let _guard = self.lock();
        let mut staged: Vec<(PathBuf, PathBuf)> = Vec::new();
        let mut removed = Vec::new();

        for (path, doc) in self.load_collection::<D>()? {
            if !predicate(&doc) {
                continue;
            }
            let staging = staging_path(&path)?;
            if let Err(e) = std::fs::rename(&path, &staging) {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to stage document for removal, restoring"
                );
                restore_staged(&staged);
                return Err(BookshelfError::Storage(format!(
                    "Failed to remove {}: {}",
                    path.display(),
                    e
                )));
            }
            staged.push((path, staging));
            removed.push(doc);
        }

        for (_, staging) in &staged {
            if let Err(e) = std::fs::remove_file(staging) {
                tracing::warn!(
                    path = %staging.display(),
                    error = %e,
                    "Failed to delete staged document"
                );
            }
        }

        tracing::debug!(
            collection = D::COLLECTION,
            count = removed.len(),
            "Removed documents"
        );
        Ok(Removal { removed })
    }

    /// Apply `apply` to the first document (in collection order) matching
    /// `predicate` and persist it. Later matches are left untouched.
    ///
    /// The document keeps its ID and its file's original encoding.
    pub fn update_first_where<D, F, U>(&self, predicate: F, apply: U) -> Result<Option<D>>
    where
        D: Document,
        F: Fn(&D) -> bool,
        U: FnOnce(&mut D),
    {
        let _guard = self.lock();

        let Some((path, mut doc)) = self
            .load_collection::<D>()?
            .into_iter()
            .find(|(_, doc)| predicate(doc))
        else {
            return Ok(None);
        };

        let id = doc.id().to_string();
        apply(&mut doc);
        if doc.id() != id {
            return Err(BookshelfError::Storage(format!(
                "Document ID cannot change on update ({} -> {})",
                id,
                doc.id()
            )));
        }
        doc.touch();

        let format = DocumentFormat::from_path(&path).unwrap_or(self.format);
        let content = render_document(&doc, format)?;
        self.atomic_write(&path, &content)?;

        tracing::debug!(collection = D::COLLECTION, id = %id, "Updated document");
        Ok(Some(doc))
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        // The guarded value is `()`, so a poisoned lock carries no broken state.
        self.write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn collection_path<D: Document>(&self) -> PathBuf {
        self.root.join(D::COLLECTION)
    }

    fn locate<D: Document>(&self, id: &str) -> Option<PathBuf> {
        let collection = self.collection_path::<D>();
        DocumentFormat::ALL
            .iter()
            .map(|format| collection.join(format!("{}.{}", id, format.extension())))
            .find(|path| path.is_file())
    }

    fn read_document<D: Document>(&self, path: &Path) -> Result<D> {
        let format = DocumentFormat::from_path(path).ok_or_else(|| {
            BookshelfError::Parse(format!("Unknown document format: {}", path.display()))
        })?;
        let content = std::fs::read_to_string(path)?;
        parse_document(&content, format)
    }

    fn load_collection<D: Document>(&self) -> Result<Vec<(PathBuf, D)>> {
        let collection = self.collection_path::<D>();
        if !collection.exists() {
            return Ok(Vec::new());
        }

        let mut docs = Vec::new();
        for entry in std::fs::read_dir(&collection)? {
            let entry = entry?;
            let path = entry.path();

            if !path.is_file() || DocumentFormat::from_path(&path).is_none() {
                continue;
            }

            match self.read_document::<D>(&path) {
                Ok(doc) => docs.push((path, doc)),
                Err(e) => tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to load document"
                ),
            }
        }

        docs.sort_by(|(_, a), (_, b)| {
            a.created()
                .cmp(&b.created())
                .then_with(|| a.id().cmp(b.id()))
        });
        Ok(docs)
    }

    /// Atomically write content to a file using temp file + rename
    fn atomic_write(&self, target_path: &Path, content: &str) -> Result<()> {
        let target_dir = target_path.parent().ok_or_else(|| {
            BookshelfError::Storage("Target path has no parent directory".to_string())
        })?;

        let mut temp_file = NamedTempFile::new_in(target_dir)
            .map_err(|e| BookshelfError::Storage(format!("Failed to create temp file: {}", e)))?;

        use std::io::Write;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| BookshelfError::Storage(format!("Failed to write to temp file: {}", e)))?;

        temp_file
            .as_file()
            .sync_all()
            .map_err(|e| BookshelfError::Storage(format!("Failed to sync temp file: {}", e)))?;

        temp_file
            .persist(target_path)
            .map_err(|e| BookshelfError::Storage(format!("Failed to persist temp file: {}", e)))?;

        Ok(())
    }
}

/// Hidden name a document is moved to while a removal is in progress:
/// `notes/ab12.yml` becomes `notes/.ab12.yml.removing`.
fn staging_path(path: &Path) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| BookshelfError::Storage("Path has no filename".to_string()))?;
    Ok(path.with_file_name(format!(".{}.removing", file_name.to_string_lossy())))
}

fn restore_staged(staged: &[(PathBuf, PathBuf)]) {
    for (original, staging) in staged.iter().rev() {
        if let Err(e) = std::fs::rename(staging, original) {
            tracing::error!(
                path = %original.display(),
                staging = %staging.display(),
                error = %e,
                "Failed to restore staged document"
            );
        }
    }
}
