use crate::domain::model::Student;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [Self::Text, Self::Json];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.as_str() == value)
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|format| format.as_str()).collect()
    }
}

pub trait RosterProvider {
    fn students(&self) -> Vec<Student>;
    fn output_format(&self) -> OutputFormat;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_every_name() {
        for format in OutputFormat::ALL {
            assert_eq!(OutputFormat::parse(format.as_str()), Some(format));
        }
        assert_eq!(OutputFormat::names(), vec!["text", "json"]);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(OutputFormat::parse("xml"), None);
        assert_eq!(OutputFormat::parse("JSON"), None);
    }
}
