use std::process::{Command, Stdio};

use anyhow::{Context, Result};

pub const ACCOUNT_ENV: &str = "AWS_PROFILE";
pub const NON_INTERACTIVE_ENV: &str = "TG_NON_INTERACTIVE";
pub const PROVIDER_CACHE_ENV: &str = "TG_PROVIDER_CACHE";

/// Child invocation assembled from the CLI arguments and the derived
/// environment overrides. Everything not listed in `env` is inherited
/// from the parent process.
#[derive(Debug, Clone)]
pub struct LaunchSpec {
    pub program: String,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
}

/// Environment overrides for the child. The account variable is always
/// present; the two Terragrunt toggles are gated by their own flags.
pub fn env_overrides(
    account_name: &str,
    non_interactive: bool,
    provider_cache: bool,
) -> Vec<(String, String)> {
    let mut env = vec![(ACCOUNT_ENV.to_string(), account_name.to_string())];
    if non_interactive {
        env.push((NON_INTERACTIVE_ENV.to_string(), "true".to_string()));
    }
    if provider_cache {
        env.push((PROVIDER_CACHE_ENV.to_string(), "true".to_string()));
    }
    env
}

/// Run the child with inherited standard streams and return its exit
/// code once it terminates. A child killed without a code maps to 1.
pub fn run(spec: &LaunchSpec) -> Result<i32> {
    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args)
        .envs(spec.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    for (key, value) in &spec.env {
        log::debug!("child env: {key}={value}");
    }
    log::debug!("executing: {} {}", spec.program, spec.args.join(" "));

    let status = cmd
        .status()
        .with_context(|| format!("launching `{}`", spec.program))?;

    Ok(status.code().unwrap_or(1))
}
