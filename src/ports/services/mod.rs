mod file_system_service;

pub use file_system_service::FileSystemService;
