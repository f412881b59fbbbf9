// build.rs
use std::process::Command;

fn main() {
    // Tell cargo to rerun build script if CSS modules change
    println!("cargo:rerun-if-changed=src/components/button/button.module.css");
    println!("cargo:rerun-if-changed=Cargo.toml");

    // Bundle the CSS modules with the stylance CLI using [package.metadata.stylance].
    // The class-name constants come from the proc macro, so a missing CLI only
    // means the stylesheet bundle is not refreshed.
    match Command::new("stylance").arg(".").status() {
        Ok(status) if status.success() => {}
        Ok(status) => println!("cargo:warning=stylance exited with {status}"),
        Err(err) => println!("cargo:warning=stylance not available ({err}), skipping CSS bundle"),
    }
}
