use shadow_rs::{BuildPattern, ShadowBuilder};
use std::process::Command;

fn main() -> shadow_rs::SdResult<()> {
    ShadowBuilder::builder().build_pattern(BuildPattern::RealTime).build()?;

    // Subject line of the commit the binary was built from, shown by --version
    if let Ok(output) = Command::new("git").args(["log", "-1", "--pretty=%s"]).output()
        && let Ok(subject) = String::from_utf8(output.stdout)
    {
        println!("cargo:rustc-env=SEARCHBOX_COMMIT_SUBJECT={}", subject.trim());
    }

    if let Ok(ref_name) = std::env::var("GITHUB_REF_NAME") {
        println!("cargo:rustc-env=GITHUB_REF_NAME={}", ref_name);
    }

    Ok(())
}
