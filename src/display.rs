use crate::error::Result;
use crate::model::{GroupId, Roster, Student, by_average_only, by_average_then_name};
use clap::ValueEnum;
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Average grade only, ties keep their registration order
    #[default]
    Average,
    /// Average grade, then last name, then first name
    AverageThenName,
}

impl SortOrder {
    fn comparator(self) -> fn(&Student, &Student) -> Ordering {
        match self {
            SortOrder::Average => by_average_only,
            SortOrder::AverageThenName => by_average_then_name,
        }
    }
}

/// Every student of the roster, lowest average first.
pub fn ranking(roster: &Roster, order: SortOrder) -> Result<Vec<&Student>> {
    let mut students = roster
        .all_students()
        .into_iter()
        .map(|s| roster.student(s))
        .collect::<Result<Vec<_>>>()?;
    let compare = order.comparator();
    students.sort_by(|a, b| compare(a, b));
    Ok(students)
}

pub fn display_ranking(roster: &Roster, order: SortOrder) -> Result<()> {
    for student in ranking(roster, order)? {
        println!("{student}");
    }
    Ok(())
}

pub fn show_all_students(roster: &Roster, group: GroupId) -> Result<()> {
    for line in roster.listing(group)? {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_demo_ranking_by_average() {
        let roster = Config::demo().build().unwrap();
        let students = ranking(&roster, SortOrder::Average).unwrap();
        assert_eq!(students.len(), 5);
        assert!(
            students
                .windows(2)
                .all(|w| w[0].average_grade() <= w[1].average_grade())
        );
        // Equal averages (85 twice, 90 twice) carry no order between them.
        let averages = students.iter().map(|s| s.average_grade()).collect::<Vec<_>>();
        assert_eq!(averages, vec![85.0, 85.0, 87.5, 90.0, 90.0]);
    }

    #[test]
    fn test_demo_ranking_by_average_then_name() {
        let roster = Config::demo().build().unwrap();
        let names = ranking(&roster, SortOrder::AverageThenName)
            .unwrap()
            .into_iter()
            .map(|s| s.last_name())
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec!["Иванов", "Сидорова", "Новиков", "Кузнецова", "Петров"]
        );
    }
}
