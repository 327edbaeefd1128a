use std::path::PathBuf;

pub use clap::Parser;

#[derive(Debug, Clone, clap::Parser)]
#[command(version, about = "Movie catalog REST server")]
pub struct ServerConfig {
    #[arg(
        short,
        long,
        default_value_t = 3000,
        env = "MCAT_LISTEN_PORT",
        help = "Port to listen on"
    )]
    pub port: u16,
    #[arg(
        short,
        long,
        default_value = "127.0.0.1",
        env = "MCAT_LISTEN_ADDRESS",
        help = "Address to listen on"
    )]
    pub listen_address: String,

    #[arg(
        long,
        env = "MCAT_DATABASE_URL",
        help = "Database URL e.g. sqlite://file.db, default is sqlite://[data-dir]/mcat.db, where data-dir is set by --data-dir"
    )]
    database_url: Option<String>,

    #[arg(
        long,
        env = "MCAT_DATA_DIR",
        help = "Data directory (database), default is system default like ~/.local/share/mcat",
        default_value_t = default_data_dir()
    )]
    data_dir: String,

    #[arg(
        long,
        env = "MCAT_SEED_FILE",
        help = "SQL file executed on startup, e.g. to load genres and directors"
    )]
    pub seed_file: Option<PathBuf>,

    #[arg(long, env = "MCAT_CORS", help = "Enable permissive CORS")]
    pub cors: bool,
}

fn default_data_dir() -> String {
    dirs::data_dir()
        .map(|p| p.join("mcat"))
        .unwrap_or_else(|| PathBuf::from("mcat"))
        .to_string_lossy()
        .to_string()
}

impl ServerConfig {
    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }

    pub fn database_url(&self) -> String {
        self.database_url
            .clone()
            .unwrap_or_else(|| format!("sqlite://{}/mcat.db", self.data_dir))
    }
}
