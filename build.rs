use std::path::Path;
use std::{env, fs};

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .nth(3)
        .expect("OUT_DIR sits three levels below the profile directory");

    fs::create_dir_all(target_dir).expect("Failed to create target directory");

    let profile = env::var("PROFILE").expect("PROFILE is set by cargo");
    let source_file = format!("medalboard.{}.toml", profile);

    fs::copy(&source_file, target_dir.join("medalboard.toml"))
        .unwrap_or_else(|e| panic!("Failed to copy {}: {}", source_file, e));

    println!("cargo:rerun-if-changed={}", source_file);
}
