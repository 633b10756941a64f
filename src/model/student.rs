use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct StudentId(pub usize);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A student and their grades.
///
/// Equality and `PartialOrd` only look at the average grade: two different
/// students with the same average compare as equal. Use
/// [`Student::cmp_by_average_then_name`] when a total order is needed.
#[derive(Clone, Debug)]
pub struct Student {
    first_name: String,
    last_name: String,
    age: u32,
    pub passed_session: bool,
    pub grades: HashMap<String, i32>,
}

#[allow(dead_code)]
impl Student {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, age: u32) -> Student {
        Student {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            passed_session: false,
            grades: HashMap::new(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Record a grade, replacing any previous grade for the same subject.
    pub fn add_grade(&mut self, subject: impl Into<String>, grade: i32) {
        self.grades.insert(subject.into(), grade);
    }

    pub fn average_grade(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        let sum = self.grades.values().map(|&g| i64::from(g)).sum::<i64>();
        sum as f64 / self.grades.len() as f64
    }

    pub fn eq_by_average(&self, other: &Student) -> bool {
        self.average_grade() == other.average_grade()
    }

    /// `false` when `other` is absent.
    pub fn is_greater_than(&self, other: Option<&Student>) -> bool {
        other.is_some_and(|o| self.average_grade() > o.average_grade())
    }

    /// `false` when `other` is absent.
    pub fn is_less_than(&self, other: Option<&Student>) -> bool {
        other.is_some_and(|o| self.average_grade() < o.average_grade())
    }

    /// Total order: average grade, then last name, then first name.
    pub fn cmp_by_average_then_name(&self, other: &Student) -> Ordering {
        self.average_grade()
            .total_cmp(&other.average_grade())
            .then_with(|| self.last_name.cmp(&other.last_name))
            .then_with(|| self.first_name.cmp(&other.first_name))
    }

    /// Like [`Student::cmp_by_average_then_name`], an absent student sorting last.
    pub fn compare_to(&self, other: Option<&Student>) -> Ordering {
        other.map_or(Ordering::Greater, |o| self.cmp_by_average_then_name(o))
    }

    /// Average rounded to two decimals, halves away from zero.
    pub fn rounded_average(&self) -> f64 {
        (self.average_grade() * 100.0).round() / 100.0
    }

    pub fn cmp_by_name(&self, other: &Student) -> Ordering {
        self.last_name
            .cmp(&other.last_name)
            .then_with(|| self.first_name.cmp(&other.first_name))
    }
}

/// Ties are `Equal`, so a stable sort keeps them in their original order.
pub fn by_average_only(a: &Student, b: &Student) -> Ordering {
    a.average_grade().total_cmp(&b.average_grade())
}

pub fn by_average_then_name(a: &Student, b: &Student) -> Ordering {
    a.cmp_by_average_then_name(b)
}

impl PartialEq for Student {
    fn eq(&self, other: &Student) -> bool {
        self.eq_by_average(other)
    }
}

// Averages are never NaN: an empty mapping yields 0.0.
impl Eq for Student {}

impl Hash for Student {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // 0.0 and -0.0 are equal and must hash alike.
        let average = self.average_grade() + 0.0;
        average.to_bits().hash(state);
    }
}

impl PartialOrd for Student {
    fn partial_cmp(&self, other: &Student) -> Option<Ordering> {
        self.average_grade().partial_cmp(&other.average_grade())
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {}, возраст: {}, средний балл: {:.2}",
            self.last_name,
            self.first_name,
            self.age,
            self.rounded_average()
        )
    }
}
