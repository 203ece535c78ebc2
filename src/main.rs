#[macro_use]
extern crate clap;
extern crate sdl2;

mod app;
mod config;
mod error;
mod plot;
mod view;
mod wav;

use std::process;

use tracing_subscriber::EnvFilter;

use config::Config;

fn init_logging(verbose: bool) {
    let default = if verbose { "wavplot=debug" } else { "wavplot=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    let parser_yaml = load_yaml!("args.yml");
    let parser = clap::App::from_yaml(parser_yaml);
    let matches = parser.get_matches();

    let config = match Config::from_matches(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };
    init_logging(config.verbose);
    let profile = config.profile;

    hprof::start_frame();
    // The app and its window are dropped before exiting.
    let result = app::App::new(config).run();
    hprof::end_frame();

    if profile {
        hprof::profiler().print_timing();
    }

    match result {
        Ok(()) => (),
        Err(e) if e.is_silent() => tracing::info!("{}, nothing to plot", e),
        Err(e) => {
            app::report(&e);
            process::exit(1);
        }
    }
}
