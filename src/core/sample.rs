use crate::domain::model::RawRecord;
use crate::utils::error::Result;

/// The fixed example data set: 23 raw rows, five of them intentionally
/// invalid (a digit in a name, two malformed post codes, an age over the
/// limit, two malformed dates). Leading and trailing spaces in the name
/// fields are part of the data.
///
/// Returns `Result` so a failure while assembling the raw list surfaces as
/// a `SourceError`; the caller treats that as "list is empty" and stops.
pub fn sample_records() -> Result<Vec<RawRecord>> {
    Ok(vec![
        RawRecord::new("Irena ", "Szewinska", "F", "Poland", "00-432", 60, "1965-12-11"),
        RawRecord::new(" Ewa", "  Swoboda", "F", "Poland", "15-432", 25, "2000-07-08"),
        RawRecord::new(" Iga", "  Swiatek", "F", "Poland", "00-432", 31, "1994-48-01"),
        RawRecord::new("Serena", "  Wiliams", "F", "USA", "21-432", 44, "1981-01-14"),
        RawRecord::new("  Mark", "    Twain", "M", "USA", "00-432", 120, "1905-03-24"),
        RawRecord::new("   Tom", "   Pid7ck", "M", "GB", "22-432y", 27, "2000-12-01"),
        RawRecord::new("Marita", "     Koch", "F", "Germany", "32-471", 45, "20FR-07-09"),
        RawRecord::new("Thomas", "   Ceccon", "M", "Italy", "WN-432", 29, "1996-05-05"),
        RawRecord::new("Javier", "Sotomayor", "M", "Cuba", "74-832", 42, "1983-07-04"),
        RawRecord::new("Zhang ", "   Lin   ", "M", "China", "32-471", 33, "1992-11-15"),
        RawRecord::new("Michael", "Schumacher", "M", "Germany", "63-556", 56, "1969-01-03"),
        RawRecord::new("Martin", "Schmitt", "M", "Germany", "32-471", 47, "1978-07-09"),
        RawRecord::new("Steffi", "Graf", "F", "Germany", "32-471", 56, "1969-06-14"),
        RawRecord::new("Boris", " Becker", "M", "Germany", "32-471", 58, "1967-11-22"),
        RawRecord::new("Erik ", " Zabel", "M", "Germany", "32-471", 55, "1970-07-07"),
        RawRecord::new("Jan", "Ullrich", "M", "Germany", "32-471", 52, "1973-12-02"),
        RawRecord::new("Magda", " Neuner", "F", "Germany", "32-471", 38, "1987-02-09"),
        RawRecord::new("Thibaut", " Pinot", "M", "France", "05-332", 35, "1990-05-29"),
        RawRecord::new("Julian", "Alaphilippe", "M", "France", "05-332", 32, "1992-06-11"),
        RawRecord::new("Romain", "Bardet", "M", "France", "05-332", 35, "1990-11-09"),
        RawRecord::new("Brigitte", "Bardot", "F", "France", "05-332", 91, "1934-09-28"),
        RawRecord::new("Raquel", "Welch", "F", "USA", "05-332", 85, "1940-09-05"),
        RawRecord::new("Monica", "Belucci", "F", "Italy", "05-332", 61, "1964-09-30"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_has_23_rows() {
        assert_eq!(sample_records().unwrap().len(), 23);
    }
}
