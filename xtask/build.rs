use std::process::Command;

fn main() {
    // XTASK_VERSION wins when set by the caller; local builds use git describe.
    if let Ok(version) = std::env::var("XTASK_VERSION") {
        println!("cargo:rustc-env=XTASK_VERSION={version}");
    } else if let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        && output.status.success()
    {
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        println!("cargo:rustc-env=XTASK_VERSION={version}");
    }

    println!("cargo:rerun-if-changed=../.git/HEAD");
    println!("cargo:rerun-if-changed=../.git/refs/");
    println!("cargo:rerun-if-env-changed=XTASK_VERSION");
}
