mod app;
mod catalog;
mod config;
mod error;
mod logging;
mod mpris;
mod player;
mod runtime;
mod ui;

fn main() {
    if let Err(e) = runtime::run() {
        eprintln!("rondo: {e}");
        std::process::exit(1);
    }
}
