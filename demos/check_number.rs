use idnum::{au, cusip, fr, gb};

fn main() {
    // Per-scheme validation with error reporting
    println!("=== Australian Business Numbers ===\n");

    let abns = [
        "83 914 571 673",
        "51 824 753 556",
        "99 999 999 999", // bad checksum
        "8391457167",     // too short
    ];
    for abn in &abns {
        match au::abn::validate(abn) {
            Ok(canonical) => println!("  {abn} => valid ({})", au::abn::format(&canonical)),
            Err(e) => println!("  {abn} => INVALID: {e}"),
        }
    }

    println!("\n=== French SIREN → TVA ===\n");

    for siren in ["443 121 975", "404 833 048", "404 833 047"] {
        match fr::siren::to_tva(siren) {
            Ok(tva) => println!("  SIREN {siren} => TVA FR {tva}"),
            Err(e) => println!("  SIREN {siren} => INVALID: {e}"),
        }
    }

    println!("\n=== Securities: SEDOL and CUSIP to ISIN ===\n");

    match gb::sedol::to_isin("B15KXQ8") {
        Ok(isin) => println!("  SEDOL B15KXQ8 => {isin}"),
        Err(e) => println!("  SEDOL B15KXQ8 => INVALID: {e}"),
    }
    match cusip::to_isin("91324PAE2") {
        Ok(isin) => println!("  CUSIP 91324PAE2 => {isin}"),
        Err(e) => println!("  CUSIP 91324PAE2 => INVALID: {e}"),
    }
}
