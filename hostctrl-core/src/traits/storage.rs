//! File storage trait

use heapless::{String, Vec};

/// Maximum number of files reported by one listing
pub const MAX_FILES: usize = 16;

/// Maximum file name length
pub const MAX_FILENAME_LEN: usize = 32;

/// A printable file name
pub type FileName = String<MAX_FILENAME_LEN>;

/// Result of a file listing
pub type FileList = Vec<FileName, MAX_FILES>;

/// Trait for the file storage (SD card)
pub trait FileStore {
    /// List printable files
    ///
    /// Returns `None` if the storage cannot be read. An empty name marks
    /// the end of the listing; entries after it are not reported.
    fn list_files(&mut self) -> Option<FileList>;
}
