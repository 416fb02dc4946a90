use crate::config::RosterConfig;
use crate::core::roster::{render, RosterEngine};
use crate::core::simulate::render_simulation;
use crate::core::{OutputFormat, RosterProvider, Student};
use crate::domain::model::DEFAULT_FAVORITE_NUMBERS;
use crate::utils::error::{Result, StudentError};
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "student-ex")]
#[command(about = "Build students and report their favorite numbers")]
pub struct CliConfig {
    #[arg(long, help = "Student name; without it the demo student is simulated")]
    pub name: Option<String>,

    #[arg(long, allow_negative_numbers = true)]
    pub age: Option<i32>,

    #[arg(long)]
    pub male: bool,

    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub favorite_numbers: Vec<i32>,

    #[arg(short, long, help = "Load a roster from a TOML file")]
    pub config: Option<String>,

    #[arg(long, help = "Print JSON instead of text")]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// The student described by the command-line flags, if a name was given.
    pub fn student(&self) -> Option<Student> {
        let name = self.name.as_ref()?;
        let numbers = if self.favorite_numbers.is_empty() {
            DEFAULT_FAVORITE_NUMBERS.to_vec()
        } else {
            self.favorite_numbers.clone()
        };
        Some(Student::with_favorite_numbers(
            name.clone(),
            self.age.unwrap_or_default(),
            self.male,
            numbers,
        ))
    }

    /// `--json` wins over the roster's own `output_format`.
    pub fn resolve_format(&self, roster: &RosterConfig) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            roster.output_format()
        }
    }

    /// Runs whichever mode the flags select (roster file, one student, or the demo)
    /// and returns the rendered output.
    pub fn render_output(&self) -> Result<String> {
        if let Some(path) = &self.config {
            tracing::info!("📁 Loading roster from: {}", path);
            let roster = RosterConfig::from_file(path)?;
            roster.validate()?;

            let format = self.resolve_format(&roster);
            let summaries = RosterEngine::new(roster).run();
            return render(&summaries, format);
        }

        if self.name.is_some() {
            return RosterEngine::new(self.clone()).run_and_render();
        }

        tracing::info!("No student given, simulating the demo student");
        render_simulation(self.output_format())
    }

    fn first_student_flag(&self) -> Option<(&'static str, String)> {
        if let Some(age) = self.age {
            return Some(("age", age.to_string()));
        }
        if self.male {
            return Some(("male", "true".to_string()));
        }
        if !self.favorite_numbers.is_empty() {
            let numbers = self
                .favorite_numbers
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(",");
            return Some(("favorite_numbers", numbers));
        }
        None
    }
}

impl RosterProvider for CliConfig {
    fn students(&self) -> Vec<Student> {
        self.student().into_iter().collect()
    }

    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
            if let Some(name) = &self.name {
                return Err(StudentError::InvalidConfigValueError {
                    field: "name".to_string(),
                    value: name.clone(),
                    reason: "--name cannot be combined with --config".to_string(),
                });
            }
        }

        if self.config.is_some() || self.name.is_none() {
            if let Some((field, value)) = self.first_student_flag() {
                return Err(StudentError::InvalidConfigValueError {
                    reason: format!(
                        "--{} only applies together with --name and without --config",
                        field.replace('_', "-")
                    ),
                    field: field.to_string(),
                    value,
                });
            }
        }

        if self.name.is_some() && self.age.is_none() {
            return Err(StudentError::MissingConfigError {
                field: "age".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_student() {
        let config =
            CliConfig::try_parse_from(["student-ex", "--name", "bob", "--age", "10", "--male"])
                .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.students(), vec![Student::new("bob", 10, true)]);
        assert_eq!(config.output_format(), OutputFormat::Text);
    }

    #[test]
    fn test_parse_custom_numbers_and_negative_age() {
        let config = CliConfig::try_parse_from([
            "student-ex",
            "--name",
            "",
            "--age",
            "-4",
            "--favorite-numbers",
            "3,1,2",
            "--json",
        ])
        .unwrap();

        let student = config.student().unwrap();
        assert_eq!(student.name(), "");
        assert_eq!(student.age(), -4);
        assert!(!student.is_male());
        assert_eq!(student.favorite_numbers(), &[3, 1, 2]);
        assert!(!student.likes_blue());
        assert_eq!(config.output_format(), OutputFormat::Json);
    }

    #[test]
    fn test_no_name_means_no_students() {
        let config = CliConfig::try_parse_from(["student-ex"]).unwrap();
        assert!(config.validate().is_ok());
        assert!(config.students().is_empty());
    }

    #[test]
    fn test_name_without_age_rejected() {
        let config = CliConfig::try_parse_from(["student-ex", "--name", "bob"]).unwrap();
        assert!(matches!(
            config.validate(),
            Err(StudentError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_name_with_config_rejected() {
        let config = CliConfig::try_parse_from([
            "student-ex",
            "--name",
            "bob",
            "--age",
            "10",
            "--config",
            "roster.toml",
        ])
        .unwrap();
        assert!(config.validate().is_err());
    }

    fn parse(args: &[&str]) -> CliConfig {
        let mut argv = vec!["student-ex"];
        argv.extend_from_slice(args);
        CliConfig::try_parse_from(argv).unwrap()
    }

    fn assert_rejects_field(args: &[&str], expected: &str) {
        match parse(args).validate() {
            Err(StudentError::InvalidConfigValueError { field, .. }) => {
                assert_eq!(field, expected)
            }
            other => panic!("expected {} rejected for {:?}, got {:?}", expected, args, other),
        }
    }

    #[test]
    fn test_student_flags_without_name_rejected() {
        assert_rejects_field(&["--age", "10"], "age");
        assert_rejects_field(&["--male"], "male");
        assert_rejects_field(&["--favorite-numbers", "1,3"], "favorite_numbers");
    }

    #[test]
    fn test_student_flags_with_config_rejected() {
        assert_rejects_field(&["--config", "roster.toml", "--age", "10"], "age");
        assert_rejects_field(&["--config", "roster.toml", "--male"], "male");
        assert_rejects_field(
            &["--config", "roster.toml", "--favorite-numbers", "8"],
            "favorite_numbers",
        );
    }

    #[test]
    fn test_config_with_json_only_is_valid() {
        assert!(parse(&["--config", "roster.toml", "--json"]).validate().is_ok());
    }

    fn roster_with_format(format: Option<&str>) -> RosterConfig {
        let format_line = format
            .map(|f| format!("output_format = \"{}\"", f))
            .unwrap_or_default();
        let toml_content = format!(
            "[roster]\nname = \"r\"\n{}\n\n[[students]]\nname = \"bob\"\nage = 10\nmale = true\n",
            format_line
        );
        RosterConfig::from_toml_str(&toml_content).unwrap()
    }

    #[test]
    fn test_resolve_format_json_flag_wins() {
        let cli = parse(&["--config", "roster.toml", "--json"]);
        assert_eq!(cli.resolve_format(&roster_with_format(Some("text"))), OutputFormat::Json);
        assert_eq!(cli.resolve_format(&roster_with_format(None)), OutputFormat::Json);
    }

    #[test]
    fn test_resolve_format_falls_back_to_roster() {
        let cli = parse(&["--config", "roster.toml"]);
        assert_eq!(cli.resolve_format(&roster_with_format(Some("json"))), OutputFormat::Json);
        assert_eq!(cli.resolve_format(&roster_with_format(Some("text"))), OutputFormat::Text);
        assert_eq!(cli.resolve_format(&roster_with_format(None)), OutputFormat::Text);
    }

    #[test]
    fn test_render_output_simulates_without_name() {
        assert_eq!(parse(&[]).render_output().unwrap(), "2 4 6 8");
        assert_eq!(parse(&["--json"]).render_output().unwrap(), "[2,4,6,8]");
    }

    #[test]
    fn test_render_output_single_student() {
        let output = parse(&["--name", "amy", "--age", "11", "--favorite-numbers", "1,3"])
            .render_output()
            .unwrap();
        assert_eq!(
            output,
            "amy (age 11, female) favorite numbers: [1, 3], likes blue: no"
        );
    }
}
