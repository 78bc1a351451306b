use std::env;
use std::fs;
use std::path::Path;

// Files the binary expects to find next to itself at runtime.
const RUNTIME_FILES: [&str; 2] = ["config.toml", "segments.json"];

fn main() {
    // Get the output directory from cargo
    let out_dir = env::var("OUT_DIR").unwrap();

    // OUT_DIR is target/<profile>/build/<pkg>/out
    let target_dir = Path::new(&out_dir)
        .parent()
        .and_then(Path::parent)
        .and_then(Path::parent)
        .unwrap();

    for name in RUNTIME_FILES {
        println!("cargo:rerun-if-changed={}", name);
        let src = Path::new(name);
        if src.exists() {
            fs::copy(src, target_dir.join(name)).unwrap();
        }
    }
}
