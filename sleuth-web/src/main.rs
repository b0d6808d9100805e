use dioxus::prelude::*;
use sleuth_web::App;
use tracing::info;

fn main() {
    dioxus::logger::initialize_default();
    info!("starting sleuth web frontend");
    launch(App);
}
