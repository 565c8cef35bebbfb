use crate::probe::poi::{DEFAULT_ADDRESS, DEFAULT_COUNT, DEFAULT_LAT, DEFAULT_LNG};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// API key sent as the `key` query parameter [env: GEMINI_API_KEY]
    #[arg(long)]
    pub api_key: Option<String>,

    /// Model to probe
    #[arg(short, long)]
    pub model: Option<String>,

    /// API root, without the `/v1beta` path
    #[arg(long)]
    pub base_url: Option<String>,

    /// Prompt text for the reachability probe
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Ask for points of interest around ADDRESS instead of the plain probe
    #[arg(long, value_name = "ADDRESS", num_args = 0..=1, default_missing_value = DEFAULT_ADDRESS)]
    pub poi: Option<String>,

    /// Longitude of the POI search center
    #[arg(long, default_value_t = DEFAULT_LNG, allow_negative_numbers = true)]
    pub lng: f64,

    /// Latitude of the POI search center
    #[arg(long, default_value_t = DEFAULT_LAT, allow_negative_numbers = true)]
    pub lat: f64,

    /// How many points of interest to ask for
    #[arg(long, default_value_t = DEFAULT_COUNT)]
    pub count: u32,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
