//! Lazy views over a validated person list.
//!
//! Every function here takes a slice and hands back a fresh iterator:
//! elements are produced one pull at a time, the consumer can stop early,
//! and calling the function again restarts from scratch.
//!
//! The three filter variants are deliberately independent formulations of
//! the same `age > 32 && country != "France"` condition; they must yield
//! identical ordered output.

use crate::domain::model::Person;

/// Stable sort by age ascending, ties broken by country ascending.
/// Returns a new list; the input is left untouched.
pub fn sorted_by_age_then_country(persons: &[Person]) -> Vec<Person> {
    let mut sorted = persons.to_vec();
    sorted.sort_by(|a, b| {
        a.age()
            .cmp(&b.age())
            .then_with(|| a.country().cmp(b.country()))
    });
    sorted
}

/// Hand-rolled iterator with the condition spelled out in `next`.
pub struct FilteredPersons<'a> {
    inner: std::slice::Iter<'a, Person>,
}

impl<'a> Iterator for FilteredPersons<'a> {
    type Item = &'a Person;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let person = self.inner.next()?;
            if person.age() > 32 && person.country() != "France" {
                return Some(person);
            }
        }
    }
}

/// Variant 1: explicit iterator state machine.
pub fn filter_explicit(persons: &[Person]) -> FilteredPersons<'_> {
    FilteredPersons {
        inner: persons.iter(),
    }
}

/// Variant 2: `filter` combinator with a closure predicate.
pub fn filter_combinator(persons: &[Person]) -> impl Iterator<Item = &Person> {
    persons
        .iter()
        .filter(|person| person.age() > 32 && person.country() != "France")
}

/// Variant 3: predicate plus a flattening combinator over one-element
/// repetitions, mirroring a `SelectMany(Repeat(item, 1))` formulation.
pub fn filter_flattening(persons: &[Person]) -> impl Iterator<Item = &Person> {
    persons
        .iter()
        .filter(|person| person.age() > 32 && person.country() != "France")
        .flat_map(|person| std::iter::repeat(person).take(1))
}

/// Maps each person to a display line: trimmed full name left-justified in a
/// 19-character field, then the age.
pub fn display_lines(persons: &[Person]) -> impl Iterator<Item = String> + '_ {
    persons.iter().map(|person| {
        let full_name = format!("{} {}", person.first_name().trim(), person.sur_name());
        format!("{:<19} ({} years)", full_name, person.age())
    })
}

/// Groups by country, deferring all work until the first pull.
///
/// Group order follows the first occurrence of each country in the input;
/// members keep their input relative order.
pub struct CountryGroups<'a> {
    persons: &'a [Person],
    groups: Option<std::vec::IntoIter<(String, Vec<&'a Person>)>>,
}

impl<'a> Iterator for CountryGroups<'a> {
    type Item = (String, Vec<&'a Person>);

    fn next(&mut self) -> Option<Self::Item> {
        let persons = self.persons;
        self.groups
            .get_or_insert_with(|| {
                let mut groups: Vec<(String, Vec<&'a Person>)> = Vec::new();
                for person in persons {
                    match groups
                        .iter_mut()
                        .find(|(country, _)| country == person.country())
                    {
                        Some((_, members)) => members.push(person),
                        None => groups.push((person.country().to_string(), vec![person])),
                    }
                }
                groups.into_iter()
            })
            .next()
    }
}

pub fn group_by_country(persons: &[Person]) -> CountryGroups<'_> {
    CountryGroups {
        persons,
        groups: None,
    }
}

/// Splits the list into consecutive pages of `page_size`; the last page may
/// be shorter. Lazy: page N+1 is not touched until requested. A page size of
/// zero is treated as one.
pub fn paginate(persons: &[Person], page_size: usize) -> std::slice::Chunks<'_, Person> {
    persons.chunks(page_size.max(1))
}
