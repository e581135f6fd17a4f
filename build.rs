//! Generates `cbridge.h` with cbindgen.
//!
//! The header is always written to `OUT_DIR`. Set `CBRIDGE_INCLUDE_DIR` to
//! also place a copy where a C build expects to find it.

use std::env;
use std::path::PathBuf;

const HEADER: &str = "cbridge.h";

fn main() {
    let crate_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set"));
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));

    let config = cbindgen::Config::from_file(crate_dir.join("cbindgen.toml"))
        .expect("cbindgen.toml is missing or invalid");

    let bindings = cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_config(config)
        .with_language(cbindgen::Language::C)
        .generate()
        .expect("Unable to generate C bindings");

    bindings.write_to_file(out_dir.join(HEADER));

    if let Some(include_dir) = env::var_os("CBRIDGE_INCLUDE_DIR") {
        let include_dir = PathBuf::from(include_dir);
        std::fs::create_dir_all(&include_dir)
            .unwrap_or_else(|e| panic!("cannot create {}: {e}", include_dir.display()));
        bindings.write_to_file(include_dir.join(HEADER));
    }

    println!("cargo:rerun-if-changed=src/");
    println!("cargo:rerun-if-changed=cbindgen.toml");
    println!("cargo:rerun-if-env-changed=CBRIDGE_INCLUDE_DIR");
}
