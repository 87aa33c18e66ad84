use std::path::PathBuf;

use clap::Parser;

/// tabdeck: a tabbed dock of counter widgets driven from the console.
#[derive(Parser, Debug)]
#[command(name = "tabdeck", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level or filter directive (e.g. debug, tabdeck=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Read commands from a file instead of stdin.
    #[arg(long)]
    pub script: Option<PathBuf>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments() {
        let args = Args::try_parse_from(["tabdeck"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
        assert!(args.script.is_none());
    }

    #[test]
    fn all_arguments() {
        let args = Args::try_parse_from([
            "tabdeck",
            "--config",
            "/tmp/tabdeck.toml",
            "--log-level",
            "debug",
            "--script",
            "demo.txt",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/tabdeck.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.script, Some(PathBuf::from("demo.txt")));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["tabdeck", "--theme", "dark"]).is_err());
    }
}
