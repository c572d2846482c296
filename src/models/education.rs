use clap::ValueEnum;

/// Current level of study. Stored in the `records` table by label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EducationLevel {
    /// School (Class 1–10)
    SchoolPrimary,
    /// School (Class 11–12)
    SchoolSecondary,
    Undergraduate,
    Postgraduate,
    Phd,
    Other,
}

impl EducationLevel {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EducationLevel::SchoolPrimary => "School (Class 1–10)",
            EducationLevel::SchoolSecondary => "School (Class 11–12)",
            EducationLevel::Undergraduate => "Undergraduate",
            EducationLevel::Postgraduate => "Postgraduate",
            EducationLevel::Phd => "PhD",
            EducationLevel::Other => "Other",
        }
    }
}
