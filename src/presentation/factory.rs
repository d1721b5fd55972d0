//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.

use std::path::PathBuf;

use crate::application::GroupDiffUseCase;
use crate::config::Config;
use crate::domain::value_objects::FieldPath;
use crate::error::TariffResult;
use crate::infrastructure::JsonFormRepository;

pub fn create_group_diff_use_case() -> GroupDiffUseCase {
    GroupDiffUseCase::new()
}

/// Repository for `form` plus the field path to edit.
///
/// `field` wins over `ranges.field` from the config.
pub fn create_range_form(
    form: impl Into<PathBuf>,
    field: Option<&str>,
    config: &Config,
) -> TariffResult<(JsonFormRepository, FieldPath)> {
    let path = FieldPath::parse(field.unwrap_or(&config.ranges.field))?;
    Ok((JsonFormRepository::new(form), path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_flag_overrides_config() {
        let config = Config::default();
        let (_, path) = create_range_form("form.json", Some("plan.tiers"), &config).unwrap();
        assert_eq!(path.to_string(), "plan.tiers");

        let (repo, path) = create_range_form("form.json", None, &config).unwrap();
        assert_eq!(path.to_string(), "properties.graduatedRanges");
        assert_eq!(repo.path(), std::path::Path::new("form.json"));
    }

    #[test]
    fn invalid_field_is_rejected() {
        let config = Config::default();
        assert!(create_range_form("form.json", Some("a..b"), &config).is_err());
    }
}
