use crate::core::OutputFormat;
use crate::domain::model::Student;
use crate::utils::error::Result;

/// Builds the demo student ("bob", 10, male) and returns its favorite numbers.
pub fn simulate_student() -> Vec<i32> {
    let student = Student::new("bob", 10, true);
    tracing::debug!("Simulated student: {:?}", student);
    student.favorite_numbers().to_vec()
}

/// Simulated numbers as a compact JSON array or a space-separated line.
pub fn render_simulation(format: OutputFormat) -> Result<String> {
    let numbers = simulate_student();
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(&numbers)?),
        OutputFormat::Text => Ok(numbers
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(" ")),
    }
}
