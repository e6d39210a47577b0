//! Static career-fit tables: departments, course lists per semester,
//! declarable experiences, and certification tiers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Year1Fall,
    Year1Spring,
    Year2Fall,
    Year2Spring,
    Year3Fall,
    Year3Spring,
    Year4Fall,
    Year4Spring,
    Extended,
}

impl Grade {
    pub const ALL: [Grade; 9] = [
        Grade::Year1Fall,
        Grade::Year1Spring,
        Grade::Year2Fall,
        Grade::Year2Spring,
        Grade::Year3Fall,
        Grade::Year3Spring,
        Grade::Year4Fall,
        Grade::Year4Spring,
        Grade::Extended,
    ];

    /// First- and second-year students get the exploration action plan.
    pub fn is_early(&self) -> bool {
        matches!(
            self,
            Grade::Year1Fall | Grade::Year1Spring | Grade::Year2Fall | Grade::Year2Spring
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseKind {
    Required,
    Elective,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Course {
    pub name: &'static str,
    pub kind: CourseKind,
}

const fn req(name: &'static str) -> Course {
    Course {
        name,
        kind: CourseKind::Required,
    }
}

const fn opt(name: &'static str) -> Course {
    Course {
        name,
        kind: CourseKind::Elective,
    }
}

#[derive(Debug, Serialize)]
pub struct Department {
    pub key: &'static str,
    pub name: &'static str,
    /// Holland codes characteristic of the department.
    pub holland: &'static [&'static str],
    pub careers: &'static [&'static str],
    #[serde(skip)]
    pub courses: &'static [(Grade, &'static [Course])],
}

impl Department {
    /// Courses listed for a semester; empty when none are defined.
    pub fn courses_for(&self, grade: Grade) -> &'static [Course] {
        self.courses
            .iter()
            .find(|(g, _)| *g == grade)
            .map(|(_, c)| *c)
            .unwrap_or(&[])
    }
}

pub static DEPARTMENTS: &[Department] = &[
    Department {
        key: "cs",
        name: "Computer Science (CS)",
        holland: &["R", "I", "C"],
        careers: &["Software Engineer", "AI Engineer"],
        courses: &[
            (Grade::Year1Fall, &[req("Calculus I"), req("Introduction to Programming"), opt("Digital Literacy")]),
            (Grade::Year1Spring, &[req("Calculus II"), req("Discrete Mathematics"), opt("Web Basics")]),
            (Grade::Year2Fall, &[req("Data Structures"), req("Digital Logic"), opt("Linux Administration")]),
            (Grade::Year2Spring, &[req("Algorithms"), req("Computer Organization"), opt("Mobile Development")]),
            (Grade::Year3Fall, &[req("Operating Systems"), req("Database Systems"), opt("Machine Learning")]),
            (Grade::Year3Spring, &[req("Computer Networks"), req("Software Engineering"), opt("Cloud Computing")]),
            (Grade::Year4Fall, &[req("Capstone Project I"), opt("Distributed Systems"), opt("Computer Vision")]),
            (Grade::Year4Spring, &[req("Capstone Project II"), opt("Compilers")]),
        ],
    },
    Department {
        key: "im",
        name: "Information Management (IM)",
        holland: &["E", "C", "I"],
        careers: &["Project Manager", "Systems Analyst"],
        courses: &[
            (Grade::Year1Fall, &[req("Introduction to Management"), req("Introduction to Programming"), opt("Economics")]),
            (Grade::Year1Spring, &[req("Accounting"), req("Statistics"), opt("Business Communication")]),
            (Grade::Year2Fall, &[req("Data Structures"), req("Organizational Behavior"), opt("Marketing")]),
            (Grade::Year2Spring, &[req("Database Management"), req("Systems Analysis and Design"), opt("E-Commerce")]),
            (Grade::Year3Fall, &[req("Management Information Systems"), req("Operations Management"), opt("Data Mining")]),
            (Grade::Year3Spring, &[req("Project Management"), req("Information Security"), opt("ERP Practice")]),
            (Grade::Year4Fall, &[req("Capstone Project I"), opt("Business Analytics"), opt("IT Governance")]),
            (Grade::Year4Spring, &[req("Capstone Project II"), opt("Digital Transformation")]),
        ],
    },
    Department {
        key: "comm",
        name: "Communication & Media (Comm)",
        holland: &["A", "S", "E"],
        careers: &["UI/UX Designer", "Digital Marketer"],
        courses: &[
            (Grade::Year1Fall, &[req("Introduction to Communication"), req("Design Fundamentals"), opt("Photography")]),
            (Grade::Year1Spring, &[req("Visual Communication"), req("Media Writing"), opt("Drawing")]),
            (Grade::Year2Fall, &[req("Interaction Design"), req("Video Production"), opt("Typography")]),
            (Grade::Year2Spring, &[req("User Research"), req("Web Design"), opt("Motion Graphics")]),
            (Grade::Year3Fall, &[req("UX Design"), req("Digital Marketing"), opt("Game Design")]),
            (Grade::Year3Spring, &[req("Brand Strategy"), req("Media Analytics"), opt("3D Modelling")]),
            (Grade::Year4Fall, &[req("Capstone Project I"), opt("Content Strategy"), opt("Service Design")]),
            (Grade::Year4Spring, &[req("Capstone Project II"), opt("Portfolio Studio")]),
        ],
    },
];

pub fn department(key: &str) -> Option<&'static Department> {
    DEPARTMENTS.iter().find(|d| d.key == key)
}

/// Declarable experiences: key and label.
pub const EXPERIENCES: &[(&str, &str)] = &[
    ("internship", "Internship"),
    ("capstone", "Capstone or research project"),
    ("club_lead", "Student club officer"),
    ("club", "Student club member"),
    ("competition", "Competition or hackathon"),
    ("part_time", "Part-time job"),
    ("volunteer", "Volunteer work"),
];

pub fn is_known_experience(key: &str) -> bool {
    EXPERIENCES.iter().any(|(k, _)| *k == key)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CertificationTier {
    A,
    B,
    C,
}

/// Certification tiers with example credentials.
pub const CERTIFICATIONS: &[(CertificationTier, &str)] = &[
    (CertificationTier::A, "Professional cloud or security certification (e.g. AWS Solutions Architect, CISSP)"),
    (CertificationTier::B, "Associate-level certification (e.g. Azure Fundamentals, TOEIC 750+)"),
    (CertificationTier::C, "Introductory or office-skills certificate"),
];

pub const HOLLAND_CODES: [&str; 6] = ["R", "I", "A", "S", "E", "C"];
