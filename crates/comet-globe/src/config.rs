use clap::Parser;

/// `comet_globe` - near-Earth comets scattered around a spinning Earth.
///
/// Fetches the comet list once at startup, places one marker per comet and
/// lets you inspect markers by clicking them or narrow them down with the
/// altitude filter panel.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// URL of the JSON comet dataset.
    ///
    /// A single unauthenticated GET is issued against it; there is no retry.
    #[arg(long, env = "NEO_ENDPOINT", default_value = neo_catalog::DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Seed for marker placement. Random if omitted.
    #[arg(long, env = "NEO_SEED")]
    pub seed: Option<u64>,

    /// Initial window width in logical pixels.
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Initial window height in logical pixels.
    #[arg(long, default_value_t = 720)]
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = Config::try_parse_from(["comet_globe"]).unwrap();
        assert_eq!(cfg.width, 1280);
        assert_eq!(cfg.height, 720);
        // NEO_* may be set in the environment; only check the flags win.
        let cfg = Config::try_parse_from(["comet_globe", "--endpoint", "http://localhost/x.json", "--seed", "7"]).unwrap();
        assert_eq!(cfg.endpoint, "http://localhost/x.json");
        assert_eq!(cfg.seed, Some(7));
    }
}
