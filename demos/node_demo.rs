use std::path::Path;

use flower_log::init;
use flower_log::record::Level;

fn main() {
    init::configure("node-1", Some(Path::new("run.log")), None).expect("logging setup failed");

    flower_log::log!(Level::Info, "node started");
    flower_log::log!(Level::Debug, "local epochs: {}", 5);
    flower_log::log!(Level::Warning, "round {} slower than expected", 3);
    flower_log::log!(Level::Error, "failed: {}", "timeout");
}
