use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// `locals` block of an account file. Attributes other than
/// `account_name` are accepted and discarded.
#[derive(Debug, Clone, Deserialize)]
pub struct Locals {
    pub account_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountConfig {
    pub locals: Locals,
}

/// Read and parse an account file, returning its `locals.account_name`.
pub fn account_name_from_file(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading account file at {}", path.display()))?;
    let config = parse_account_str(&content)
        .with_context(|| format!("parsing account file at {}", path.display()))?;

    if config.locals.account_name.is_empty() {
        bail!("account_name in {} is empty", path.display());
    }
    Ok(config.locals.account_name)
}

pub(crate) fn parse_account_str(content: &str) -> Result<AccountConfig> {
    Ok(hcl::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn parses_account_name_from_locals_block() {
        let parsed = parse_account_str(r#"locals { account_name = "acme" }"#).expect("hcl parse");
        assert_eq!(parsed.locals.account_name, "acme");
    }

    #[test]
    fn extra_attributes_and_blocks_are_discarded() {
        let hcl = r#"
locals {
  account_name = "acme"
  region       = "eu-west-1"
  retries      = 3
}

remote_state {
  backend = "s3"
}
"#;
        let parsed = parse_account_str(hcl).expect("hcl parse");
        assert_eq!(parsed.locals.account_name, "acme");
    }

    #[test]
    fn missing_account_name_is_a_parse_error() {
        let err = parse_account_str(r#"locals { region = "eu-west-1" }"#)
            .expect_err("account_name is required");
        assert!(err.to_string().contains("account_name"));
    }

    #[test]
    fn non_string_account_name_is_a_parse_error() {
        assert!(parse_account_str("locals { account_name = 42 }").is_err());
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        assert!(parse_account_str("locals { account_name = ").is_err());
    }

    #[test]
    fn file_read_reports_the_path() {
        let tmp = tempdir().expect("tempdir");
        let missing = tmp.path().join("account.hcl");

        let err = account_name_from_file(&missing).expect_err("no such file");
        assert!(format!("{err:#}").contains("account.hcl"));
    }

    #[test]
    fn empty_account_name_is_rejected() {
        let tmp = tempdir().expect("tempdir");
        let path = tmp.path().join("account.hcl");
        std::fs::write(&path, r#"locals { account_name = "" }"#).expect("write account.hcl");

        let err = account_name_from_file(&path).expect_err("empty name");
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn well_formed_file_round_trips_through_the_filesystem() {
        let tmp = tempdir().expect("tempdir");
        let path = tmp.path().join("account.hcl");
        std::fs::write(&path, r#"locals { account_name = "payments-prod" }"#)
            .expect("write account.hcl");

        let name = account_name_from_file(&path).expect("account name");
        assert_eq!(name, "payments-prod");
    }
}
