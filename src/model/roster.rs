use super::*;
use crate::error::{Result, RosterError};
use tracing::{debug, info};

/// Owner of every student and group. Groups refer to students by id so a
/// student may belong to several groups at once.
#[derive(Debug, Default)]
pub struct Roster {
    students: Vec<Student>,
    groups: Vec<Group>,
}

#[allow(dead_code)]
impl Roster {
    pub fn new() -> Roster {
        Roster::default()
    }

    pub fn add_student(&mut self, student: Student) -> StudentId {
        let id = StudentId(self.students.len());
        debug!(%id, %student, "registering student");
        self.students.push(student);
        id
    }

    pub fn add_group(&mut self, group: Group) -> Result<GroupId> {
        self.check_members(&group)?;
        let id = GroupId(self.groups.len());
        debug!(group = %group.name, members = group.len(), "registering group");
        self.groups.push(group);
        Ok(id)
    }

    /// Register a copy of a group: same metadata and members, the students
    /// themselves being shared.
    pub fn copy_group(&mut self, group: GroupId) -> Result<GroupId> {
        let copy = self.group(group)?.clone();
        self.add_group(copy)
    }

    pub fn student(&self, StudentId(student): StudentId) -> Result<&Student> {
        self.students
            .get(student)
            .ok_or(RosterError::MissingArgument { argument: "student" })
    }

    pub fn student_mut(&mut self, StudentId(student): StudentId) -> Result<&mut Student> {
        self.students
            .get_mut(student)
            .ok_or(RosterError::MissingArgument { argument: "student" })
    }

    pub fn group(&self, GroupId(group): GroupId) -> Result<&Group> {
        self.groups
            .get(group)
            .ok_or(RosterError::MissingArgument { argument: "group" })
    }

    // Kept private: every member id stored in a group must resolve.
    fn group_mut(&mut self, GroupId(group): GroupId) -> Result<&mut Group> {
        self.groups
            .get_mut(group)
            .ok_or(RosterError::MissingArgument { argument: "group" })
    }

    pub fn set_name(&mut self, group: GroupId, name: impl Into<String>) -> Result<()> {
        self.group_mut(group)?.name = name.into();
        Ok(())
    }

    pub fn set_specialization(
        &mut self,
        group: GroupId,
        specialization: impl Into<String>,
    ) -> Result<()> {
        self.group_mut(group)?.specialization = specialization.into();
        Ok(())
    }

    pub fn set_course(&mut self, group: GroupId, course: u32) -> Result<()> {
        self.group_mut(group)?.course = course;
        Ok(())
    }

    pub fn all_students(&self) -> Vec<StudentId> {
        (0..self.students.len()).map(StudentId).collect()
    }

    pub fn all_groups(&self) -> Vec<GroupId> {
        (0..self.groups.len()).map(GroupId).collect()
    }

    fn check_student(&self, student: StudentId, argument: &'static str) -> Result<()> {
        self.student(student)
            .map(|_| ())
            .map_err(|_| RosterError::MissingArgument { argument })
    }

    fn check_members(&self, group: &Group) -> Result<()> {
        group
            .students()
            .iter()
            .try_for_each(|&s| self.check_student(s, "student"))
    }

    fn check_index(&self, group: GroupId, index: usize) -> Result<()> {
        let len = self.group(group)?.len();
        if index < len {
            Ok(())
        } else {
            Err(RosterError::IndexOutOfRange { index, len })
        }
    }

    /// Position of the first member whose average grade equals the one of
    /// `student`. This may be a different student than `student` itself.
    fn position_by_average(&self, group: GroupId, student: StudentId) -> Result<usize> {
        let wanted = self.student(student)?;
        self.group(group)?
            .position_where(|s| self.students[s.0] == *wanted)
            .ok_or(RosterError::NotFound { student, group })
    }

    fn position_by_id(&self, group: GroupId, student: StudentId) -> Result<usize> {
        self.group(group)?
            .position_of(student)
            .ok_or(RosterError::NotFound { student, group })
    }

    pub fn get(&self, group: GroupId, index: usize) -> Result<StudentId> {
        self.check_index(group, index)?;
        Ok(self.group(group)?.at(index))
    }

    pub fn student_at(&self, group: GroupId, index: usize) -> Result<&Student> {
        self.student(self.get(group, index)?)
    }

    pub fn set(&mut self, group: GroupId, index: usize, student: StudentId) -> Result<()> {
        self.check_index(group, index)?;
        self.check_student(student, "student")?;
        debug!(group = group.0, index, %student, "replacing student");
        self.group_mut(group)?.replace(index, student);
        Ok(())
    }

    /// Append `student` at the end of `group`.
    pub fn add_to_group(&mut self, group: GroupId, student: StudentId) -> Result<()> {
        self.check_student(student, "student")?;
        debug!(group = group.0, %student, "adding student to group");
        self.group_mut(group)?.push(student);
        Ok(())
    }

    /// Replace the first member equal by average grade to `old` with `new`.
    pub fn edit_student(&mut self, group: GroupId, old: StudentId, new: StudentId) -> Result<()> {
        self.check_student(old, "old student")?;
        self.check_student(new, "new student")?;
        let index = self.position_by_average(group, old)?;
        debug!(group = group.0, index, %old, %new, "editing student");
        self.group_mut(group)?.replace(index, new);
        Ok(())
    }

    /// Replace `old` itself with `new`.
    pub fn edit_student_by_id(
        &mut self,
        group: GroupId,
        old: StudentId,
        new: StudentId,
    ) -> Result<()> {
        self.check_student(old, "old student")?;
        self.check_student(new, "new student")?;
        let index = self.position_by_id(group, old)?;
        debug!(group = group.0, index, %old, %new, "editing student");
        self.group_mut(group)?.replace(index, new);
        Ok(())
    }

    pub fn remove_student_by_index(&mut self, group: GroupId, index: usize) -> Result<StudentId> {
        self.check_index(group, index)?;
        let removed = self.group_mut(group)?.remove(index);
        debug!(group = group.0, index, student = %removed, "removed student");
        Ok(removed)
    }

    /// Move the first member of `from` equal by average grade to `student`
    /// to the end of `to`. Returns the id that actually moved.
    pub fn transfer_student(
        &mut self,
        from: GroupId,
        student: StudentId,
        to: GroupId,
    ) -> Result<StudentId> {
        self.check_student(student, "student")?;
        self.group(to)?;
        let index = self.position_by_average(from, student)?;
        Ok(self.move_member(from, index, to))
    }

    /// Move `student` itself from `from` to the end of `to`.
    pub fn transfer_student_by_id(
        &mut self,
        from: GroupId,
        student: StudentId,
        to: GroupId,
    ) -> Result<StudentId> {
        self.check_student(student, "student")?;
        self.group(to)?;
        let index = self.position_by_id(from, student)?;
        Ok(self.move_member(from, index, to))
    }

    // Both groups and the index have been validated.
    fn move_member(&mut self, from: GroupId, index: usize, to: GroupId) -> StudentId {
        let moved = self.groups[from.0].remove(index);
        self.groups[to.0].push(moved);
        debug!(
            from = %self.groups[from.0].name,
            to = %self.groups[to.0].name,
            student = %self.students[moved.0],
            "transferred student"
        );
        moved
    }

    /// Remove every member which has not passed the session. Returns the
    /// number of members removed.
    pub fn expel_all_failed_students(&mut self, group: GroupId) -> Result<usize> {
        let students = &self.students;
        let g = self
            .groups
            .get_mut(group.0)
            .ok_or(RosterError::MissingArgument { argument: "group" })?;
        let before = g.len();
        g.retain(|s| students[s.0].passed_session);
        let expelled = before - g.len();
        info!(group = %g.name, expelled, remaining = g.len(), "expelled failed students");
        Ok(expelled)
    }

    /// Members of `group` ordered by last name then first name, without
    /// touching the stored order.
    pub fn students_by_name(&self, group: GroupId) -> Result<Vec<&Student>> {
        let mut students = self
            .group(group)?
            .students()
            .iter()
            .map(|s| &self.students[s.0])
            .collect::<Vec<_>>();
        students.sort_by(|a, b| a.cmp_by_name(b));
        Ok(students)
    }

    /// Header line followed by one ranked line per member, ordered by name.
    pub fn listing(&self, group: GroupId) -> Result<Vec<String>> {
        let header = self.group(group)?.to_string();
        Ok(std::iter::once(header)
            .chain(
                self.students_by_name(group)?
                    .into_iter()
                    .zip(1..)
                    .map(|(s, rank)| format!("{rank}. {s}")),
            )
            .collect())
    }
}
