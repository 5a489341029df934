//! Member generation.

use crate::script::SqlRow;

/// Generated member ready for the `members` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMember {
    pub name: String,
    pub phone_number: String,
    pub login: String,
    pub password: String,
}

impl SqlRow for GeneratedMember {
    const TABLE: &'static str = "members";
    const COLUMNS: &'static [&'static str] = &["name", "phone_number", "login", "password"];

    fn values(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.phone_number.clone(),
            self.login.clone(),
            self.password.clone(),
        ]
    }
}

/// Generates members numbered from 1, every field derived from the number.
#[derive(Debug, Clone, Default)]
pub struct MemberGenerator;

impl MemberGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, i: usize) -> GeneratedMember {
        GeneratedMember {
            name: format!("name{i}"),
            phone_number: format!("phone_number{i}"),
            login: format!("login{i}"),
            password: format!("password{i}"),
        }
    }

    /// Generates members `1..=count`.
    pub fn generate_batch(&self, count: usize) -> Vec<GeneratedMember> {
        (1..=count).map(|i| self.generate(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_member() {
        let member = MemberGenerator::new().generate(3);
        assert_eq!(
            member.values(),
            ["name3", "phone_number3", "login3", "password3"]
        );
    }

    #[test]
    fn test_generate_batch_starts_at_one() {
        let members = MemberGenerator::new().generate_batch(10);
        assert_eq!(members.len(), 10);
        assert_eq!(members[0].login, "login1");
        assert_eq!(members[9].login, "login10");
    }
}
