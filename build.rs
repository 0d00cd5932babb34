use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=config.toml");

    // Get the output directory from cargo
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set by cargo");

    // Copy config.toml next to the built binary
    let config_path = Path::new("config.toml");
    if !config_path.exists() {
        return;
    }
    let Some(target_dir) = Path::new(&out_dir).ancestors().nth(3) else {
        return;
    };

    fs::copy(config_path, target_dir.join("config.toml")).expect("Failed to copy config.toml");
}
