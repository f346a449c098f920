fn main() {
    // Stamp the deploy date shown in the page footer
    let deployed_at = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={deployed_at}");

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/content.rs");
}
