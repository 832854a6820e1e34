use std::fs::Metadata;

/// Filesystem identity of a directory entry: a (device id, inode number)
/// pair. Short names cannot be mapped to long names by string transformation,
/// so expansion correlates a short entry with its long-named sibling by
/// identity instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryIdentity {
    pub device: u64,
    pub inode: u64,
}

impl EntryIdentity {
    /// Sentinel meaning "the filesystem reported no identity".
    pub const UNAVAILABLE: Self = Self {
        device: 0,
        inode: 0,
    };

    pub fn new(device: u64, inode: u64) -> Self {
        Self { device, inode }
    }

    /// An all-zero pair carries no information and must never match anything.
    pub fn is_unavailable(self) -> bool {
        self.device == 0 && self.inode == 0
    }

    /// Exact identity match; unavailable identities match nothing.
    pub fn matches(self, other: Self) -> bool {
        !self.is_unavailable() && !other.is_unavailable() && self == other
    }

    pub(crate) fn from_metadata(meta: &Metadata) -> Self {
        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;
            Self::new(meta.dev(), meta.ino())
        }
        // Stable Rust exposes no device/inode pair on other platforms; the
        // caller treats this the same as a filesystem that reports zeros.
        #[cfg(not(unix))]
        {
            let _ = meta;
            Self::UNAVAILABLE
        }
    }
}
