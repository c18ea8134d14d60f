// File: crates/chart-core/build.rs
// Summary: Link the Windows system libraries Skia's font manager needs for headless rendering.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    #[cfg(target_os = "windows")]
    {
        // Skia's DirectWrite font manager reads the registry (RegOpenKeyExW, ...).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
