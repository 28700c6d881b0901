use anyhow::Context;
use serde::Deserialize;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

/// Crates that must stay free of infrastructure, and what they may not pull in.
const RULES: &[(&str, &[&str])] = &[
    (
        "grimroll-domain",
        &[
            "axum",
            "dashmap",
            "grimroll-engine",
            "grimroll-shared",
            "rand",
            "sqlx",
            "tokio",
            "tower",
            "tower-http",
            "tracing-subscriber",
        ],
    ),
    (
        "grimroll-shared",
        &["axum", "grimroll-domain", "grimroll-engine", "sqlx", "tokio"],
    ),
];

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    /// `None` for normal dependencies, `"dev"` or `"build"` otherwise.
    kind: Option<String>,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;

    let violations = violations(&metadata);
    if violations.is_empty() {
        println!("arch-check: ok");
        return Ok(());
    }

    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("{} architecture violation(s)", violations.len())
}

fn violations(metadata: &Metadata) -> Vec<String> {
    let mut found = Vec::new();
    for (crate_name, forbidden) in RULES {
        let Some(package) = metadata.packages.iter().find(|p| p.name == *crate_name) else {
            found.push(format!("{crate_name} is missing from the workspace"));
            continue;
        };

        for dep in package.dependencies.iter().filter(|d| d.kind.is_none()) {
            if forbidden.contains(&dep.name.as_str()) {
                found.push(format!("{crate_name} must not depend on {}", dep.name));
            }
        }
    }
    found
}
