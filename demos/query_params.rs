/// `QueryParameterSet` usage example
use qparams::{Options, ParamValue, QueryParameterSet, Update};

fn main() -> Result<(), qparams::Error> {
    // Build from mappings
    let mut params = QueryParameterSet::new();
    params.update([("page", "2"), ("sort", "name")]);
    println!("Built: {params}"); // ?page=2&sort=name
    println!();

    // Falsy values remove keys
    params.update([("page", ParamValue::Null)]);
    println!("After removing page: {params}"); // ?sort=name
    println!();

    // Sequences apply first to last
    params.apply(Update::sequence([
        Update::mapping([("limit", "10")]),
        Update::mapping([("limit", "25")]),
    ]));
    println!("After sequence: {params}"); // ?sort=name&limit=25
    println!();

    // Merge an existing query string
    params.update_from_str("sort=date&q=rust")?;
    println!("After merge: {params}"); // ?sort=date&limit=25&q=rust
    println!();

    // Opt into percent-encoding
    let mut encoded = QueryParameterSet::with_options(Options::new().encode(true));
    encoded.update([("q", "fish & chips"), ("city", "Zürich")]);
    println!("Encoded: {encoded}"); // ?q=fish+%26+chips&city=Z%C3%BCrich
    println!();

    println!("All parameters:");
    for (key, value) in &params {
        println!("  {key} = {value}");
    }

    Ok(())
}
