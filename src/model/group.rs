use super::StudentId;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct GroupId(pub usize);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named group. Members are held by id: cloning a group copies its
/// member list but the students themselves stay shared in the roster.
#[derive(Clone, Debug, Default)]
pub struct Group {
    pub name: String,
    pub specialization: String,
    pub course: u32,
    students: Vec<StudentId>,
}

#[allow(dead_code)]
impl Group {
    pub fn new(name: impl Into<String>, specialization: impl Into<String>, course: u32) -> Group {
        Group {
            name: name.into(),
            specialization: specialization.into(),
            course,
            students: Vec::new(),
        }
    }

    pub fn from_students(students: &[StudentId]) -> Group {
        Group {
            students: students.to_vec(),
            ..Group::default()
        }
    }

    pub fn with_students(mut self, students: &[StudentId]) -> Group {
        self.students = students.to_vec();
        self
    }

    pub fn students(&self) -> &[StudentId] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn position_of(&self, student: StudentId) -> Option<usize> {
        self.students.iter().position(|&s| s == student)
    }

    pub fn position_where<F>(&self, condition: F) -> Option<usize>
    where
        F: Fn(StudentId) -> bool,
    {
        self.students.iter().position(|&s| condition(s))
    }

    // The following accessors expect indices to have been checked by the roster.

    pub(super) fn at(&self, index: usize) -> StudentId {
        self.students[index]
    }

    pub(super) fn replace(&mut self, index: usize, student: StudentId) {
        self.students[index] = student;
    }

    pub(super) fn push(&mut self, student: StudentId) {
        self.students.push(student);
    }

    pub(super) fn remove(&mut self, index: usize) -> StudentId {
        self.students.remove(index)
    }

    pub(super) fn retain<F>(&mut self, condition: F)
    where
        F: FnMut(&StudentId) -> bool,
    {
        self.students.retain(condition);
    }
}

impl From<Vec<StudentId>> for Group {
    fn from(students: Vec<StudentId>) -> Group {
        Group {
            students,
            ..Group::default()
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({}), {} курс:",
            self.name, self.specialization, self.course
        )
    }
}

#[test]
fn test_constructors() {
    let ids = [StudentId(3), StudentId(1)];
    let g = Group::from_students(&ids);
    assert_eq!(g.students(), &ids);
    assert_eq!(g.name, "");
    assert_eq!(g.course, 0);

    let g = Group::from(vec![StudentId(2)]);
    assert_eq!(g.students(), &[StudentId(2)]);

    let g = Group::new("ИВТ-21", "Информатика", 2).with_students(&ids);
    assert_eq!(g.to_string(), "ИВТ-21 (Информатика), 2 курс:");
    assert_eq!(g.len(), 2);
    assert_eq!(g.position_of(StudentId(1)), Some(1));
    assert_eq!(g.position_of(StudentId(2)), None);
}

#[test]
fn test_clone_copies_member_list() {
    let mut g = Group::new("ИВТ-21", "Информатика", 2).with_students(&[StudentId(0)]);
    let copy = g.clone();
    g.push(StudentId(1));
    g.name = "ИВТ-22".into();
    assert_eq!(copy.students(), &[StudentId(0)]);
    assert_eq!(copy.name, "ИВТ-21");
    assert_eq!(g.len(), 2);
}
