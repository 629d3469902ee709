//! Student and class bookkeeping
//!
//! Knows nothing about the graph beyond storing location ids; schedule
//! queries that need travel times live in [`crate::schedule`].

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;
use tracing::debug;

use crate::error::{CompassError, Result};
use crate::graph::LocationId;

/// Required length of a student id (UFID)
pub const STUDENT_ID_LEN: usize = 8;

/// A class offering from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassInfo {
    pub code: String,
    pub location: LocationId,
    /// Minutes after midnight
    pub start: u32,
    /// Minutes after midnight
    pub end: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub name: String,
    pub id: String,
    pub residence: LocationId,
    pub classes: BTreeSet<String>,
}

/// Registry of enrolled students and the class catalog
#[derive(Debug, Clone, Default)]
pub struct StudentRegistry {
    students: HashMap<String, Student>,
    catalog: HashMap<String, ClassInfo>,
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}

fn is_valid_id(id: &str) -> bool {
    id.len() == STUDENT_ID_LEN && id.bytes().all(|b| b.is_ascii_digit())
}

impl StudentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a catalog entry
    pub fn add_class(&mut self, code: impl Into<String>, location: LocationId, start: u32, end: u32) {
        let code = code.into();
        self.catalog.insert(
            code.clone(),
            ClassInfo {
                code,
                location,
                start,
                end,
            },
        );
    }

    pub fn class_exists(&self, code: &str) -> bool {
        self.catalog.contains_key(code)
    }

    pub fn class_info(&self, code: &str) -> Option<&ClassInfo> {
        self.catalog.get(code)
    }

    pub fn class_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    pub fn student(&self, id: &str) -> Option<&Student> {
        self.students.get(id)
    }

    /// Enroll a new student.
    ///
    /// Names are ASCII letters and spaces; ids are exactly eight digits and
    /// unique; every class code must already be in the catalog.
    pub fn insert_student<S: AsRef<str>>(
        &mut self,
        name: &str,
        id: &str,
        residence: LocationId,
        codes: &[S],
    ) -> Result<()> {
        if !is_valid_name(name) {
            return Err(CompassError::invalid_value("student name", name));
        }
        if !is_valid_id(id) {
            return Err(CompassError::invalid_value("student id", id));
        }
        if self.students.contains_key(id) {
            return Err(CompassError::already_exists("student", id));
        }
        let codes: Vec<&str> = codes.iter().map(AsRef::as_ref).collect();
        if let Some(unknown) = codes.iter().find(|code| !self.class_exists(code)) {
            return Err(CompassError::not_found("class", unknown));
        }

        let student = Student {
            name: name.to_string(),
            id: id.to_string(),
            residence,
            classes: codes.iter().map(|code| code.to_string()).collect(),
        };
        debug!(id, classes = student.classes.len(), "insert_student");
        self.students.insert(id.to_string(), student);
        Ok(())
    }

    pub fn remove_student(&mut self, id: &str) -> Result<()> {
        self.students
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| CompassError::not_found("student", id))
    }

    /// Drop one class; a student left with no classes is removed entirely
    pub fn drop_class(&mut self, id: &str, code: &str) -> Result<()> {
        let student = self
            .students
            .get_mut(id)
            .ok_or_else(|| CompassError::not_found("student", id))?;
        if !student.classes.remove(code) {
            return Err(CompassError::not_found("enrolled class", code));
        }
        if student.classes.is_empty() {
            debug!(id, "drop_class: last class dropped, removing student");
            self.students.remove(id);
        }
        Ok(())
    }

    /// Swap `from` for `to` in a student's schedule
    pub fn replace_class(&mut self, id: &str, from: &str, to: &str) -> Result<()> {
        if !self.class_exists(to) {
            return Err(CompassError::not_found("class", to));
        }
        let student = self
            .students
            .get_mut(id)
            .ok_or_else(|| CompassError::not_found("student", id))?;
        if !student.classes.contains(from) {
            return Err(CompassError::not_found("enrolled class", from));
        }
        if student.classes.contains(to) {
            return Err(CompassError::already_exists("enrolled class", to));
        }

        student.classes.remove(from);
        student.classes.insert(to.to_string());
        Ok(())
    }

    /// Remove `code` from every student, returning how many were enrolled.
    ///
    /// Students left with no classes are removed.
    pub fn remove_class_from_all(&mut self, code: &str) -> usize {
        let mut affected = 0;
        for student in self.students.values_mut() {
            if student.classes.remove(code) {
                affected += 1;
            }
        }
        self.students.retain(|_, student| !student.classes.is_empty());
        debug!(code, affected, "remove_class_from_all");
        affected
    }

    /// A student's class codes in alphabetical order (empty if unknown)
    pub fn sorted_classes(&self, id: &str) -> Vec<String> {
        self.students
            .get(id)
            .map(|student| student.classes.iter().cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> StudentRegistry {
        let mut sm = StudentRegistry::new();
        sm.add_class("COP3530", 14, 640, 690);
        sm.add_class("COP3502", 23, 575, 625);
        sm.add_class("CDA3101", 14, 705, 755);
        sm
    }

    #[test]
    fn test_validates_student_id() {
        let mut sm = registry();
        assert!(sm.insert_student("John Doe", "12345678", 1, &["COP3530"]).is_ok());
        assert!(sm.insert_student("Jane Doe", "1234567", 1, &["COP3530"]).is_err());
        assert!(sm.insert_student("Jack Doe", "123456789", 1, &["COP3530"]).is_err());
        assert!(sm.insert_student("Jill Doe", "1234567A", 1, &["COP3530"]).is_err());
    }

    #[test]
    fn test_validates_name() {
        let mut sm = registry();
        assert!(sm.insert_student("John Doe", "12345678", 1, &["COP3530"]).is_ok());
        assert!(sm.insert_student("John123", "87654321", 1, &["COP3530"]).is_err());
        assert!(sm.insert_student("John-Doe", "11111111", 1, &["COP3530"]).is_err());
        assert!(sm.insert_student("", "22222222", 1, &["COP3530"]).is_err());
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let mut sm = registry();
        sm.insert_student("John Doe", "12345678", 1, &["COP3530"]).unwrap();
        let err = sm
            .insert_student("Jane Doe", "12345678", 1, &["COP3502"])
            .unwrap_err();
        assert!(matches!(err, CompassError::AlreadyExists { .. }));
    }

    #[test]
    fn test_rejects_unknown_class() {
        let mut sm = registry();
        assert!(sm.insert_student("Alice", "12345678", 1, &["FAKE101"]).is_err());
        assert_eq!(sm.student_count(), 0);
    }

    #[test]
    fn test_drop_last_class_removes_student() {
        let mut sm = registry();
        sm.insert_student("John Doe", "12345678", 1, &["COP3530"]).unwrap();

        sm.drop_class("12345678", "COP3530").unwrap();
        assert!(sm.student("12345678").is_none());
    }

    #[test]
    fn test_drop_class_keeps_student_with_remaining_classes() {
        let mut sm = registry();
        sm.insert_student("John Doe", "12345678", 1, &["COP3530", "COP3502"])
            .unwrap();

        sm.drop_class("12345678", "COP3530").unwrap();
        let student = sm.student("12345678").unwrap();
        assert_eq!(student.classes.len(), 1);
        assert!(student.classes.contains("COP3502"));
        assert!(sm.drop_class("12345678", "COP3530").is_err());
    }

    #[test]
    fn test_replace_class_conditions() {
        let mut sm = registry();
        sm.insert_student("John Doe", "12345678", 1, &["COP3530", "COP3502"])
            .unwrap();

        assert!(sm.replace_class("12345678", "COP3530", "CDA3101").is_ok());
        // already enrolled in target
        assert!(sm.replace_class("12345678", "CDA3101", "COP3502").is_err());
        // not enrolled in source
        assert!(sm.replace_class("12345678", "COP3530", "COP3502").is_err());
        // unknown target
        assert!(sm.replace_class("12345678", "COP3502", "FAKE999").is_err());
        assert!(sm.replace_class("00000000", "COP3502", "COP3530").is_err());
    }

    #[test]
    fn test_remove_class_from_all_counts() {
        let mut sm = registry();
        sm.insert_student("Student A", "11111111", 1, &["COP3530", "COP3502"])
            .unwrap();
        sm.insert_student("Student B", "22222222", 1, &["COP3530"])
            .unwrap();
        sm.insert_student("Student C", "33333333", 1, &["COP3502"])
            .unwrap();

        assert_eq!(sm.remove_class_from_all("COP3530"), 2);
        assert!(sm.student("22222222").is_none());
        assert_eq!(sm.student("11111111").unwrap().classes.len(), 1);
        assert!(sm.student("33333333").is_some());
    }

    #[test]
    fn test_sorted_classes_alphabetical() {
        let mut sm = registry();
        sm.add_class("MAC2311", 18, 575, 625);
        sm.insert_student("John Doe", "12345678", 1, &["MAC2311", "CDA3101", "COP3530"])
            .unwrap();

        assert_eq!(
            sm.sorted_classes("12345678"),
            vec!["CDA3101", "COP3530", "MAC2311"]
        );
        assert!(sm.sorted_classes("99999999").is_empty());
    }

    #[test]
    fn test_remove_student() {
        let mut sm = registry();
        sm.insert_student("John Doe", "12345678", 1, &["COP3530"]).unwrap();
        assert!(sm.remove_student("12345678").is_ok());
        assert!(sm.remove_student("12345678").is_err());
    }
}
