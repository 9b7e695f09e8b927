//! Anti-adjacency sequencing
//!
//! Students are grouped by subject, each group is shuffled on its own, and
//! the groups are merged round-robin so consecutive positions draw from
//! different subjects while more than one group still has members left.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::domain::student::Student;

/// Students sharing one subject tag
#[derive(Debug, Clone)]
pub struct SubjectGroup<'a> {
    subject: &'a str,
    students: Vec<&'a Student>,
}

impl<'a> SubjectGroup<'a> {
    pub fn subject(&self) -> &'a str {
        self.subject
    }

    pub fn students(&self) -> &[&'a Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

/// Partitions students by subject; groups keep the order of first occurrence
pub fn group_by_subject<'a, I>(students: I) -> Vec<SubjectGroup<'a>>
where
    I: IntoIterator<Item = &'a Student>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut groups: Vec<SubjectGroup<'a>> = Vec::new();

    for student in students {
        let subject = student.subject();
        let slot = *index.entry(subject).or_insert_with(|| {
            groups.push(SubjectGroup {
                subject,
                students: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].students.push(student);
    }

    groups
}

/// Round-robin merge: round `i` takes the `i`-th member of every group that
/// still has one, in group order
pub fn interleave<'a>(groups: &[SubjectGroup<'a>]) -> Vec<&'a Student> {
    let rounds = groups.iter().map(SubjectGroup::len).max().unwrap_or(0);
    let total = groups.iter().map(SubjectGroup::len).sum();
    let mut sequence = Vec::with_capacity(total);

    for round in 0..rounds {
        for group in groups {
            if let Some(student) = group.students.get(round) {
                sequence.push(*student);
            }
        }
    }

    sequence
}

/// Groups, shuffles each group with `rng`, and interleaves
pub fn sequence<'a, I, R>(students: I, rng: &mut R) -> Vec<&'a Student>
where
    I: IntoIterator<Item = &'a Student>,
    R: Rng + ?Sized,
{
    let mut groups = group_by_subject(students);

    for group in &mut groups {
        group.students.shuffle(rng);
    }

    debug!(
        groups = groups.len(),
        largest = groups.iter().map(SubjectGroup::len).max().unwrap_or(0),
        "Interleaving subject groups"
    );

    interleave(&groups)
}
