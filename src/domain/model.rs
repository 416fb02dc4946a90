use serde::{Deserialize, Serialize};

/// Favorite numbers every student gets when none are supplied.
pub const DEFAULT_FAVORITE_NUMBERS: [i32; 4] = [2, 4, 6, 8];

/// The number that makes a student like blue.
const BLUE_NUMBER: i32 = 8;

/// A student. Fields are fixed at construction and only readable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student {
    name: String,
    age: i32,
    is_male: bool,
    favorite_numbers: Vec<i32>,
}

impl Student {
    /// Builds a student with [`DEFAULT_FAVORITE_NUMBERS`].
    pub fn new(name: impl Into<String>, age: i32, is_male: bool) -> Self {
        Self::with_favorite_numbers(name, age, is_male, DEFAULT_FAVORITE_NUMBERS.to_vec())
    }

    /// Builds a student with an explicit favorite-numbers list, kept in the given order.
    pub fn with_favorite_numbers(
        name: impl Into<String>,
        age: i32,
        is_male: bool,
        favorite_numbers: Vec<i32>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            is_male,
            favorite_numbers,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn is_male(&self) -> bool {
        self.is_male
    }

    pub fn favorite_numbers(&self) -> &[i32] {
        &self.favorite_numbers
    }

    /// True exactly when 8 is among the favorite numbers.
    pub fn likes_blue(&self) -> bool {
        self.favorite_numbers.contains(&BLUE_NUMBER)
    }

    pub fn summary(&self) -> StudentSummary {
        StudentSummary::from(self)
    }
}

/// Flat snapshot of a student, including the derived `likes_blue` flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub name: String,
    pub age: i32,
    pub is_male: bool,
    pub favorite_numbers: Vec<i32>,
    pub likes_blue: bool,
}

impl From<&Student> for StudentSummary {
    fn from(student: &Student) -> Self {
        Self {
            name: student.name().to_string(),
            age: student.age(),
            is_male: student.is_male(),
            favorite_numbers: student.favorite_numbers().to_vec(),
            likes_blue: student.likes_blue(),
        }
    }
}
