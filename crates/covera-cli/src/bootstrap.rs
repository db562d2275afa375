use std::path::Path;

use anyhow::Context;
use covera_config::CoveraConfig;

/// Load `.env` files, then the layered configuration.
///
/// A project-local `.covera/.env` is applied first; values it sets win over
/// the workspace `.env` that `load_with_dotenv` picks up afterwards.
pub fn load_config() -> anyhow::Result<CoveraConfig> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    load_dotenv(&cwd)?;

    let config =
        CoveraConfig::load_with_dotenv().context("failed to load covera configuration")?;
    tracing::debug!(
        default_knowledge = %config.general.default_knowledge,
        default_valid_days = config.freshness.default_valid_days,
        strict = config.validation.strict,
        "configuration loaded"
    );
    Ok(config)
}

fn load_dotenv(cwd: &Path) -> anyhow::Result<()> {
    let project_env = cwd.join(".covera").join(".env");
    if project_env.exists() {
        dotenvy::from_path(&project_env)
            .with_context(|| format!("failed to load dotenv file at {}", project_env.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::load_dotenv;

    #[test]
    fn project_dotenv_is_loaded_first() {
        let dir = tempfile::tempdir().expect("tempdir should create");
        std::fs::create_dir_all(dir.path().join(".covera")).expect(".covera should create");
        std::fs::write(
            dir.path().join(".covera").join(".env"),
            "COVERA_BOOTSTRAP_TEST_MARKER=project\n",
        )
        .expect(".env should write");

        load_dotenv(dir.path()).expect("dotenv should load");
        assert_eq!(
            std::env::var("COVERA_BOOTSTRAP_TEST_MARKER").as_deref(),
            Ok("project")
        );
    }

    #[test]
    fn missing_project_dotenv_is_not_an_error() {
        let dir = tempfile::tempdir().expect("tempdir should create");
        assert!(load_dotenv(dir.path()).is_ok());
    }
}
