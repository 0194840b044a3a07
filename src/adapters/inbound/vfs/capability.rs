/// Capabilities advertised by the provider, mirroring the generic
/// virtual-filesystem capability vocabulary the adapter translates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    GetType,
    ReadContent,
    AppendContent,
    Uri,
    Attributes,
    RandomAccessRead,
    DirectoryReadContent,
    ListChildren,
    LastModified,
    GetLastModified,
    Create,
    Delete,
}

/// Everything the provider supports. `Create` covers folder creation too,
/// which is a no-op against flat storage.
pub const CAPABILITIES: &[Capability] = &[
    Capability::GetType,
    Capability::ReadContent,
    Capability::AppendContent,
    Capability::Uri,
    Capability::Attributes,
    Capability::RandomAccessRead,
    Capability::DirectoryReadContent,
    Capability::ListChildren,
    Capability::LastModified,
    Capability::GetLastModified,
    Capability::Create,
    Capability::Delete,
];
