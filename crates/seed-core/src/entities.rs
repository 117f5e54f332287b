//! The five seeded entities.
//!
//! Every entity is write-once: the generator builds it, the loader writes
//! it, nothing updates it afterwards.

use crate::record::Record;
use crate::values::SeedValue;
use serde::Serialize;
use std::fmt;

/// Role of a seeded user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
}

impl Role {
    /// All roles, in the order the generator picks from.
    pub const ALL: [Role; 2] = [Role::Student, Role::Teacher];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user account. `username` and `email` are unique across a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

impl Record for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &[
        "username",
        "email",
        "password",
        "first_name",
        "last_name",
        "role",
    ];

    fn values(&self) -> Vec<SeedValue> {
        vec![
            self.username.as_str().into(),
            self.email.as_str().into(),
            self.password.as_str().into(),
            self.first_name.as_str().into(),
            self.last_name.as_str().into(),
            self.role.as_str().into(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct School {
    pub name: String,
    pub address: String,
    pub city: String,
}

impl Record for School {
    const TABLE: &'static str = "schools";
    const COLUMNS: &'static [&'static str] = &["name", "address", "city"];

    fn values(&self) -> Vec<SeedValue> {
        vec![
            self.name.as_str().into(),
            self.address.as_str().into(),
            self.city.as_str().into(),
        ]
    }
}

/// A class belonging to a school. `year` is in `1..=12`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Class {
    pub school_id: u64,
    pub name: String,
    pub year: u8,
}

impl Record for Class {
    const TABLE: &'static str = "classes";
    const COLUMNS: &'static [&'static str] = &["school_id", "name", "year"];

    fn values(&self) -> Vec<SeedValue> {
        vec![
            self.school_id.into(),
            self.name.as_str().into(),
            self.year.into(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subject {
    pub name: String,
}

impl Record for Subject {
    const TABLE: &'static str = "subjects";
    const COLUMNS: &'static [&'static str] = &["name"];

    fn values(&self) -> Vec<SeedValue> {
        vec![self.name.as_str().into()]
    }
}

/// An assignment. The three ids are drawn from the referenced ranges
/// without an existence check; `due_date` is `YYYY-MM-DD HH:MM:SS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub title: String,
    pub description: String,
    pub creator_id: u64,
    pub class_id: u64,
    pub subject_id: u64,
    pub due_date: String,
}

impl Record for Assignment {
    const TABLE: &'static str = "assignments";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "description",
        "creator_id",
        "class_id",
        "subject_id",
        "due_date",
    ];

    fn values(&self) -> Vec<SeedValue> {
        vec![
            self.title.as_str().into(),
            self.description.as_str().into(),
            self.creator_id.into(),
            self.class_id.into(),
            self.subject_id.into(),
            self.due_date.as_str().into(),
        ]
    }
}

/// Identifies one entity pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Users,
    Schools,
    Classes,
    Subjects,
    Assignments,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Users,
        EntityKind::Schools,
        EntityKind::Classes,
        EntityKind::Subjects,
        EntityKind::Assignments,
    ];

    /// Table the entity is written to.
    pub fn table(&self) -> &'static str {
        match self {
            EntityKind::Users => User::TABLE,
            EntityKind::Schools => School::TABLE,
            EntityKind::Classes => Class::TABLE,
            EntityKind::Subjects => Subject::TABLE,
            EntityKind::Assignments => Assignment::TABLE,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            username: "mari_tamm_1".to_string(),
            email: "mari.tamm.1@example.org".to_string(),
            password: "secret".to_string(),
            first_name: "Mari".to_string(),
            last_name: "Tamm".to_string(),
            role: Role::Teacher,
        }
    }

    #[test]
    fn test_values_align_with_columns() {
        assert_eq!(sample_user().values().len(), User::COLUMNS.len());

        let class = Class {
            school_id: 2,
            name: "S2-Y5-C1".to_string(),
            year: 5,
        };
        assert_eq!(
            class.values(),
            vec![SeedValue::Int(2), SeedValue::from("S2-Y5-C1"), SeedValue::Int(5)]
        );

        let assignment = Assignment {
            title: "Read chapter one #1".to_string(),
            description: "Lorem ipsum.".to_string(),
            creator_id: 10,
            class_id: 4,
            subject_id: 5,
            due_date: "2026-11-01 08:30:00".to_string(),
        };
        assert_eq!(assignment.values().len(), Assignment::COLUMNS.len());
        assert_eq!(assignment.values()[2], SeedValue::Int(10));
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_value(sample_user()).unwrap();
        assert_eq!(json["role"], "teacher");
        assert_eq!(Role::Student.to_string(), "student");
    }

    #[test]
    fn test_entity_kind_tables() {
        let tables: Vec<&str> = EntityKind::ALL.iter().map(|k| k.table()).collect();
        assert_eq!(
            tables,
            vec!["users", "schools", "classes", "subjects", "assignments"]
        );
    }
}
