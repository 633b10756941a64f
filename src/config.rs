use crate::model::{Group, Roster, Student, StudentId};
use eyre::{Result, WrapErr, bail, eyre};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::info;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub students: Vec<StudentConfig>,
    #[serde(default)]
    pub groups: Vec<GroupConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StudentConfig {
    /// Name used by groups to refer to this student.
    pub key: String,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    #[serde(default)]
    pub passed_session: bool,
    #[serde(default)]
    pub grades: BTreeMap<String, i32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupConfig {
    pub name: String,
    pub specialization: String,
    pub course: u32,
    #[serde(default)]
    pub students: Vec<String>,
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(file_name)
            .wrap_err_with(|| format!("cannot read configuration file {}", file_name.display()))?;
        let config = Config::parse(&content)
            .wrap_err_with(|| format!("cannot load configuration file {}", file_name.display()))?;
        info!(
            file = %file_name.display(),
            students = config.students.len(),
            groups = config.groups.len(),
            "configuration loaded"
        );
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Config> {
        Ok(toml::from_str(content)?)
    }

    /// The five students of the demonstration, gathered in a single group.
    pub fn demo() -> Config {
        let student = |key: &str, first_name: &str, last_name: &str, age, maths, physics| {
            StudentConfig {
                key: key.to_owned(),
                first_name: first_name.to_owned(),
                last_name: last_name.to_owned(),
                age,
                passed_session: false,
                grades: BTreeMap::from([
                    ("Математика".to_owned(), maths),
                    ("Физика".to_owned(), physics),
                ]),
            }
        };
        let students = vec![
            student("ivanov", "Иван", "Иванов", 20, 80, 90),
            student("petrov", "Петр", "Петров", 21, 85, 95),
            student("sidorova", "Анна", "Сидорова", 19, 90, 80),
            student("kuznetsova", "Мария", "Кузнецова", 22, 95, 85),
            student("novikov", "Алексей", "Новиков", 20, 85, 90),
        ];
        let groups = vec![GroupConfig {
            name: "ИВТ-21".to_owned(),
            specialization: "Информатика".to_owned(),
            course: 2,
            students: students.iter().map(|s| s.key.clone()).collect(),
        }];
        Config { students, groups }
    }

    /// Register every student then every group in a new roster.
    pub fn build(&self) -> Result<Roster> {
        let mut roster = Roster::new();
        let mut keys: HashMap<&str, StudentId> = HashMap::new();
        for s in &self.students {
            let mut student = Student::new(&s.first_name, &s.last_name, s.age);
            student.passed_session = s.passed_session;
            for (subject, &grade) in &s.grades {
                student.add_grade(subject, grade);
            }
            let id = roster.add_student(student);
            if keys.insert(&s.key, id).is_some() {
                bail!("duplicate student key {}", s.key);
            }
        }
        for g in &self.groups {
            let members = g
                .students
                .iter()
                .map(|k| {
                    keys.get(k.as_str())
                        .copied()
                        .ok_or_else(|| eyre!("group {} refers to unknown student {}", g.name, k))
                })
                .collect::<Result<Vec<_>>>()?;
            roster
                .add_group(Group::new(&g.name, &g.specialization, g.course).with_students(&members))
                .wrap_err_with(|| format!("cannot register group {}", g.name))?;
        }
        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[students]]
key = "ivanov"
first_name = "Иван"
last_name = "Иванов"
age = 20
passed_session = true
grades = { "Математика" = 80, "Физика" = 90 }

[[students]]
key = "petrova"
first_name = "Анна"
last_name = "Петрова"
age = 19

[[groups]]
name = "ИВТ-21"
specialization = "Информатика"
course = 2
students = ["petrova", "ivanov"]

[[groups]]
name = "ПМ-11"
specialization = "Математика"
course = 1
"#;

    #[test]
    fn test_build() {
        let roster = Config::parse(SAMPLE).unwrap().build().unwrap();
        assert_eq!(roster.all_students().len(), 2);
        let groups = roster.all_groups();
        assert_eq!(groups.len(), 2);
        let ivt = roster.group(groups[0]).unwrap();
        assert_eq!(ivt.course, 2);
        assert_eq!(ivt.students(), &[StudentId(1), StudentId(0)]);
        let ivanov = roster.student(StudentId(0)).unwrap();
        assert!(ivanov.passed_session);
        assert_eq!(ivanov.average_grade(), 85.0);
        assert!(!roster.student(StudentId(1)).unwrap().passed_session);
        assert!(roster.group(groups[1]).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_student_key() {
        let config = Config::parse(
            r#"
[[groups]]
name = "ИВТ-21"
specialization = "Информатика"
course = 2
students = ["nobody"]
"#,
        )
        .unwrap();
        let err = config.build().unwrap_err();
        assert!(err.to_string().contains("unknown student nobody"));
    }

    #[test]
    fn test_duplicate_student_key() {
        let config = Config::parse(
            r#"
[[students]]
key = "a"
first_name = "Иван"
last_name = "Иванов"
age = 20

[[students]]
key = "a"
first_name = "Пётр"
last_name = "Петров"
age = 21
"#,
        )
        .unwrap();
        assert!(config.build().is_err());
    }

    #[test]
    fn test_unknown_field() {
        assert!(Config::parse("[[groups]]\nname = \"x\"\nspecialization = \"y\"\ncourse = 1\nsize = 3\n").is_err());
    }

    #[test]
    fn test_demo() {
        let roster = Config::demo().build().unwrap();
        assert_eq!(roster.all_students().len(), 5);
        let group = roster.all_groups()[0];
        assert_eq!(roster.group(group).unwrap().len(), 5);
        assert_eq!(roster.student_at(group, 1).unwrap().average_grade(), 90.0);
    }
}
