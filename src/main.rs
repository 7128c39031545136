use std::error::Error;

mod app;
mod config;
mod game;
mod io;
mod ui;

fn main() -> Result<(), Box<dyn Error>> {
    app::run()
}
