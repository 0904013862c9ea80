mod app;
mod config;
mod error;
mod library;
mod logging;
mod panel;
mod runtime;
#[cfg(test)]
mod testing;
mod transport;
mod ui;
mod visualizer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
