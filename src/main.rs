//! Small inspector for metadata values: classifies untyped strings or runs
//! them through the coercion gate when a declared type is given.
//!
//! Usage:
//! `metaleaf <content>` classifies the string,
//! `metaleaf <type> <content>` coerces it against the declared type.
//!
//! Settings are read from an optional `metaleaf` config file and from
//! `METALEAF_*` environment variables.

use serde::Deserialize;
use tracing::error;
use tracing_subscriber::EnvFilter;

use metaleaf::classify::classify;
use metaleaf::value::Value;

#[derive(Debug, Deserialize)]
struct Settings {
    #[serde(default = "default_log_filter")]
    log_filter: String,
}
fn default_log_filter() -> String {
    String::from("info")
}
impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
        }
    }
}

fn load_settings() -> Settings {
    let loaded = config::Config::builder()
        .add_source(config::File::with_name("metaleaf").required(false))
        .add_source(config::Environment::with_prefix("METALEAF"))
        .build()
        .and_then(|c| c.try_deserialize::<Settings>());
    match loaded {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("could not read settings ({e}), using defaults");
            Settings::default()
        }
    }
}

fn main() {
    let settings = load_settings();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [content] => {
            println!("{} -> {:?}", content, classify(content));
        }
        [declared_type, content] => match Value::new(content.as_str(), declared_type) {
            Ok(value) => {
                println!(
                    "{}::<{}> = {:?}",
                    value, // rendered canonical literal
                    value.kind(),
                    value.content()
                );
            }
            Err(e) => {
                error!(%e, "value rejected");
                std::process::exit(1);
            }
        },
        _ => {
            eprintln!("usage: metaleaf [<type>] <content>");
            std::process::exit(2);
        }
    }
}
