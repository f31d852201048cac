use clap::{Parser, Subcommand};
use zonemap::{app, config::AppConfiguration, model::ZoneCliError};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct ZonemapArguments {
    #[command(subcommand)]
    app: App,
}

#[derive(Subcommand)]
pub enum App {
    /// parse the owner roster into the zone list document
    Roster {
        #[arg(long, help = "path to the roster text file")]
        roster_file: String,
        #[arg(long, help = "output path for the zone list document")]
        output_file: String,
    },
    /// compute zone boundaries and write the feature collection
    Boundaries {
        #[arg(long, help = "path to file with zonemap run parameters")]
        configuration_file: Option<String>,
    },
    /// serve the output directory for visual inspection
    Serve {
        #[arg(long, help = "directory containing map.html and the feature collection")]
        directory: String,
        #[arg(long, default_value_t = 8000, help = "port to serve on")]
        port: u16,
    },
}

pub fn run(app: &App) -> Result<(), ZoneCliError> {
    env_logger::init();
    match app {
        App::Roster {
            roster_file,
            output_file,
        } => app::roster::run(roster_file, output_file),
        App::Boundaries { configuration_file } => {
            let conf = match configuration_file {
                None => Ok(AppConfiguration::default()),
                Some(f) => {
                    log::info!("reading zonemap configuration from {f}");
                    AppConfiguration::try_from(f)
                }
            }?;
            app::boundaries::run(&conf)
        }
        App::Serve { directory, port } => app::serve::run(directory, *port),
    }
}

fn main() {
    let args = ZonemapArguments::parse();
    match run(&args.app) {
        Ok(_) => {}
        Err(e) => {
            log::error!("zonemap failed: {e}");
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
