mod file_system_service_impl;
mod write_session;

pub use file_system_service_impl::FileSystemServiceImpl;
pub use write_session::WriteSession;
