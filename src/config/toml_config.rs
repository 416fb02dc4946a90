use crate::core::{OutputFormat, RosterProvider, Student};
use crate::domain::model::DEFAULT_FAVORITE_NUMBERS;
use crate::utils::error::{Result, StudentError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    pub roster: RosterSection,
    #[serde(default)]
    pub students: Vec<StudentEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSection {
    pub name: String,
    pub output_format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentEntry {
    pub name: String,
    pub age: i32,
    pub male: bool,
    pub favorite_numbers: Option<Vec<i32>>,
}

impl StudentEntry {
    pub fn to_student(&self) -> Student {
        let numbers = self
            .favorite_numbers
            .clone()
            .unwrap_or_else(|| DEFAULT_FAVORITE_NUMBERS.to_vec());
        Student::with_favorite_numbers(self.name.clone(), self.age, self.male, numbers)
    }
}

impl RosterConfig {
    /// 從 TOML 檔案載入名冊
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析名冊
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut table: toml::Table =
            toml::from_str(content).map_err(|e| StudentError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;

        let re = env_var_pattern()?;
        for (_, value) in table.iter_mut() {
            substitute_env_vars(value, &re);
        }

        toml::Value::Table(table)
            .try_into()
            .map_err(|e: toml::de::Error| StudentError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })
    }

    /// Checks the roster layout. Student names and ages are taken as-is.
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_list("students", &self.students)?;

        if let Some(format) = &self.roster.output_format {
            validation::validate_one_of("roster.output_format", format, &OutputFormat::names())?;
        }

        Ok(())
    }
}

impl RosterProvider for RosterConfig {
    fn students(&self) -> Vec<Student> {
        self.students.iter().map(StudentEntry::to_student).collect()
    }

    fn output_format(&self) -> OutputFormat {
        self.roster
            .output_format
            .as_deref()
            .and_then(OutputFormat::parse)
            .unwrap_or_default()
    }
}

fn env_var_pattern() -> Result<regex::Regex> {
    regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| StudentError::ConfigValidationError {
        field: "env_substitution".to_string(),
        message: e.to_string(),
    })
}

/// 只替換字串值中的環境變數 (例如 ${STUDENT_NAME})
fn substitute_env_vars(value: &mut toml::Value, re: &regex::Regex) {
    match value {
        toml::Value::String(text) => {
            let replaced = re.replace_all(text.as_str(), |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            });
            *text = replaced.into_owned();
        }
        toml::Value::Array(items) => {
            for item in items.iter_mut() {
                substitute_env_vars(item, re);
            }
        }
        toml::Value::Table(table) => {
            for (_, item) in table.iter_mut() {
                substitute_env_vars(item, re);
            }
        }
        _ => {}
    }
}

impl Validate for RosterConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
