fn main() {
    // Stamp the build so the footer can show a copyright year
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // The catalog is embedded at compile time
    println!("cargo:rerun-if-changed=data/projects.json");
    println!("cargo:rerun-if-changed=build.rs");
}
