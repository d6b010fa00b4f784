use person_roster::core::{builder, sample, sequence};
use person_roster::utils::{logger, printer};

fn main() -> anyhow::Result<()> {
    logger::init_cli_logger(false);

    println!("Hello, program is starting ...\n");
    println!("Checking the correctness of the input data at record construction:\n");

    let records = match sample::sample_records() {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Failed to assemble the raw record list: {}", e);
            println!("PersonList is empty. End of work ...");
            return Ok(());
        }
    };

    let persons = builder::build_person_list(&records);
    if persons.is_empty() {
        println!("PersonList is empty. End of work ...");
        return Ok(());
    }

    let persons = sequence::sorted_by_age_then_country(&persons);

    printer::print_person_list("Correct list (sorted by age, then country):", &persons, true);

    println!("\n1) Explicit iterator: age > 32 and country != 'France'");
    for person in sequence::filter_explicit(&persons) {
        println!("   {}", printer::format_person(person, true));
    }

    println!("\n2) Filter combinator: age > 32 and country != 'France'");
    for person in sequence::filter_combinator(&persons) {
        println!("   {}", printer::format_person(person, true));
    }

    println!("\n3) Flattening combinator: age > 32 and country != 'France'");
    for person in sequence::filter_flattening(&persons) {
        println!("   {}", printer::format_person(person, true));
    }

    println!("\n4) Mapping to display lines:");
    for line in sequence::display_lines(&persons) {
        println!("   {}", line);
    }

    println!("\n5) Grouping by country:");
    for (country, members) in sequence::group_by_country(&persons) {
        println!("\nCountry: {}:", country);
        for person in members {
            println!("   {}", printer::format_person(person, true));
        }
    }

    let page_size = 4;
    println!("\n6) Pagination, lazy pages of {}:", page_size);
    for (i, page) in sequence::paginate(&persons, page_size).enumerate() {
        println!("\n Page {}:", i + 1);
        for person in page {
            println!("     {}", printer::format_person(person, true));
        }
    }

    Ok(())
}
