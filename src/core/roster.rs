use crate::core::{OutputFormat, RosterProvider, StudentSummary};
use crate::utils::error::Result;

pub struct RosterEngine<P: RosterProvider> {
    provider: P,
}

impl<P: RosterProvider> RosterEngine<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn output_format(&self) -> OutputFormat {
        self.provider.output_format()
    }

    pub fn run(&self) -> Vec<StudentSummary> {
        let students = self.provider.students();
        tracing::info!("Loaded {} students", students.len());

        students
            .iter()
            .map(|student| {
                let summary = student.summary();
                tracing::debug!(
                    name = %summary.name,
                    age = summary.age,
                    likes_blue = summary.likes_blue,
                    "Summarized student"
                );
                summary
            })
            .collect()
    }

    pub fn run_and_render(&self) -> Result<String> {
        let summaries = self.run();
        render(&summaries, self.output_format())
    }
}

pub fn render(summaries: &[StudentSummary], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summaries)?),
        OutputFormat::Text => Ok(summaries
            .iter()
            .map(render_line)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn render_line(summary: &StudentSummary) -> String {
    let numbers = summary
        .favorite_numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{} (age {}, {}) favorite numbers: [{}], likes blue: {}",
        summary.name,
        summary.age,
        if summary.is_male { "male" } else { "female" },
        numbers,
        if summary.likes_blue { "yes" } else { "no" }
    )
}
