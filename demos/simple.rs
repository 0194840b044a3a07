//! Walk through the provider surface against the in-memory backend.

use std::io::Write as _;

use s3vfs::{EntryType, create_in_memory_fs};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let services = create_in_memory_fs();
    let fs = &services.file_system;

    // Buffered write: nothing reaches storage until close.
    let mut file = fs.resolve("s3://local/demo-bucket/docs/hello.txt")?;
    let mut session = file.open_output().await?;
    session.write_all(b"hello from s3vfs")?;
    session.close().await?;

    println!("type: {:?}", file.file_type().await?);
    println!("size: {}", file.content_size().await?);
    println!("content: {}", String::from_utf8_lossy(&file.content().await?));

    // The parent path has no object of its own but lists as a folder.
    let mut folder = fs.resolve("s3://local/demo-bucket/docs")?;
    assert_eq!(folder.file_type().await?, EntryType::Folder);
    for child in folder.children().await? {
        println!("child: {child}");
    }

    Ok(())
}
