mod entry;

pub use entry::{EntryMetadata, EntryType, ObjectHandle, ResolvedEntry};
