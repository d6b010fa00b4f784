use crate::domain::model::{Person, RawRecord};

/// Pads with spaces on the right, then truncates to exactly `len` characters.
pub fn fixed_width(message: &str, len: usize) -> String {
    message
        .chars()
        .chain(std::iter::repeat(' '))
        .take(len)
        .collect()
}

fn format_line(
    name: &str,
    gender: &str,
    country: &str,
    code: &str,
    age: u32,
    date: &str,
    with_details: bool,
) -> String {
    let mut line = format!(
        "Person: {} [{}], {} Age: {:>3}",
        fixed_width(name, 16),
        gender,
        fixed_width(country, 8),
        age
    );
    if with_details {
        line.push_str(&format!(", Code: {}, BirthDate: {}.", code, date));
    }
    line
}

pub fn format_person(person: &Person, with_details: bool) -> String {
    format_line(
        &format!("{} {}", person.first_name(), person.sur_name()),
        &person.gender().to_string(),
        person.country(),
        person.post_code(),
        person.age(),
        person.birth_date(),
        with_details,
    )
}

pub fn format_raw_record(record: &RawRecord) -> String {
    format_line(
        &format!("{} {}", record.first_name, record.sur_name),
        &record.gender_code,
        &record.country,
        &record.post_code,
        record.age,
        &record.birth_date,
        true,
    )
}

pub fn print_person_list(header: &str, persons: &[Person], with_details: bool) {
    println!("\n{}   (Rows count:{} )", header, persons.len());
    for person in persons {
        println!("   {}", format_person(person, with_details));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width_pads_short_input() {
        assert_eq!(fixed_width("USA", 8), "USA     ");
    }

    #[test]
    fn test_fixed_width_truncates_long_input() {
        assert_eq!(fixed_width("Michael Schumacher", 16), "Michael Schumach");
    }

    #[test]
    fn test_format_person_with_details() {
        let record = RawRecord::new("Steffi", "Graf", "F", "Germany", "32-471", 56, "1969-06-14");
        let person = Person::from_record(&record).unwrap();
        assert_eq!(
            format_person(&person, true),
            "Person: Steffi Graf      [F], Germany  Age:  56, Code: 32-471, BirthDate: 1969-06-14."
        );
    }

    #[test]
    fn test_format_person_without_details() {
        let record = RawRecord::new("Steffi", "Graf", "F", "Germany", "32-471", 56, "1969-06-14");
        let person = Person::from_record(&record).unwrap();
        assert_eq!(
            format_person(&person, false),
            "Person: Steffi Graf      [F], Germany  Age:  56"
        );
    }
}
