use std::io::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use s3vfs::{EntryType, S3FileProvider, StaticAuthenticator};

#[derive(Parser, Debug)]
#[command(name = "s3vfs")]
#[command(about = "Filesystem-style access to S3 objects through s3:// URIs", long_about = None)]
struct Cli {
    /// S3 access key id
    #[arg(long, env = "S3_ACCESS_KEY")]
    access_key: String,

    /// S3 secret access key
    #[arg(long, env = "S3_SECRET_KEY")]
    secret_key: String,

    /// S3-compatible endpoint URL
    #[arg(long, env = "S3_ENDPOINT")]
    endpoint: Option<String>,

    /// S3 region
    #[arg(long, env = "S3_REGION")]
    region: Option<String>,

    /// Allow plain-http endpoints (local MinIO etc.)
    #[arg(long, env = "S3_ALLOW_HTTP", default_value = "false")]
    allow_http: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the type, size and last-modified time of a URI
    Stat {
        /// Object or folder URI (s3://host/container/key)
        uri: String,
    },

    /// List the children of a folder URI
    List {
        /// Folder URI
        uri: String,
    },

    /// Download an object to a local file or stdout
    Get {
        /// Object URI
        uri: String,
        /// Output file path; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Upload a local file to an object URI
    Put {
        /// Object URI
        uri: String,
        /// Local file to upload
        file: PathBuf,
    },

    /// Delete an object
    Delete {
        /// Object URI
        uri: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut provider = S3FileProvider::new();
    if let Some(endpoint) = &cli.endpoint {
        provider.set_endpoint(endpoint);
    }
    if let Some(region) = &cli.region {
        provider.set_region(region);
    }
    provider.set_allow_http(cli.allow_http);

    let auth = StaticAuthenticator::new(&cli.access_key, &cli.secret_key);
    let fs = provider.create_file_system(&auth);

    match cli.command {
        Commands::Stat { uri } => {
            let mut file = fs.resolve(&uri)?;
            let entry_type = file.file_type().await?;
            println!("type: {entry_type:?}");
            if entry_type == EntryType::File {
                println!("size: {}", file.content_size().await?);
                println!("last-modified: {}", file.last_modified().await?);
            }
        }
        Commands::List { uri } => {
            let mut file = fs.resolve(&uri)?;
            for child in file.children().await? {
                println!("{child}");
            }
        }
        Commands::Get { uri, output } => {
            let mut file = fs.resolve(&uri)?;
            let content = file
                .content()
                .await
                .with_context(|| format!("failed to read '{uri}'"))?;
            match output {
                Some(path) => tokio::fs::write(&path, &content)
                    .await
                    .with_context(|| format!("failed to write '{}'", path.display()))?,
                None => std::io::stdout().write_all(&content)?,
            }
        }
        Commands::Put { uri, file: local } => {
            let data = tokio::fs::read(&local)
                .await
                .with_context(|| format!("failed to read '{}'", local.display()))?;

            let mut file = fs.resolve(&uri)?;
            let mut session = file.open_output().await?;
            session.write_all(&data)?;
            session.close().await?;

            info!(uri = %uri, bytes = data.len(), "uploaded");
        }
        Commands::Delete { uri } => {
            let mut file = fs.resolve(&uri)?;
            file.delete().await?;
            info!(uri = %uri, "deleted");
        }
    }

    Ok(())
}
