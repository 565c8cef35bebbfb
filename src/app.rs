use crate::cli::Args;
use crate::config::{Config, ProbeSettings};
use crate::display;
use crate::gemini::{ContentGenerator, GeminiClient};
use crate::probe::poi::{PoiQuery, run_poi};
use crate::probe::run_ping;
use std::io::{self, Write};
use tracing::{debug, warn};

pub struct Application {
    pub args: Args,
    pub config: Config,
}

impl Application {
    pub fn new(args: Args, config: Config) -> Self {
        Self { args, config }
    }

    /// Resolve settings, build the client and run exactly one probe.
    ///
    /// Probe failures are printed, never returned; the only error that leaves
    /// this function is a failed write to `out`.
    pub async fn run<W: Write>(&self, env_api_key: Option<String>, out: &mut W) -> io::Result<()> {
        let settings = match ProbeSettings::resolve(&self.args, env_api_key, self.config.clone()) {
            Ok(settings) => settings,
            Err(err) => {
                warn!(error = ?err, "could not resolve settings");
                return display::write_error(out, &err);
            }
        };
        debug!(model = %settings.model, base_url = %settings.base_url, "resolved settings");

        let client = match GeminiClient::new(
            settings.base_url.clone(),
            settings.api_key.clone(),
            settings.model.clone(),
        ) {
            Ok(client) => client,
            Err(err) => return display::write_error(out, &err),
        };

        self.run_with(&client, &settings, out).await
    }

    async fn run_with<G, W>(
        &self,
        generator: &G,
        settings: &ProbeSettings,
        out: &mut W,
    ) -> io::Result<()>
    where
        G: ContentGenerator + ?Sized,
        W: Write,
    {
        match &self.args.poi {
            Some(address) => {
                let query = PoiQuery {
                    address: address.clone(),
                    lng: self.args.lng,
                    lat: self.args.lat,
                    count: self.args.count,
                };
                run_poi(generator, &query, out).await
            }
            None => run_ping(generator, &settings.prompt, out).await,
        }
    }
}
