use chrono::Datelike;

fn main() {
    // footer copyright year, read through env!
    println!("cargo:rustc-env=BUILD_YEAR={}", chrono::Utc::now().year());
    println!("cargo:rerun-if-changed=build.rs");
}
