use tracing::warn;

pub struct Config {
    pub data_dir: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let data_dir = std::env::var("PURCHASES_DATA_DIR").ok();
        if data_dir.is_none() {
            warn!("PURCHASES_DATA_DIR not set, snapshots will not survive a restart");
        }
        Self { data_dir }
    }
}
