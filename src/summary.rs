use std::io::Write;

use crate::bank::Bank;

/// Writes one CSV row per account, in insertion order.
pub fn write_summary<W: Write>(bank: &Bank, writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    for account in bank.accounts() {
        wtr.serialize(account)?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_of_default_bank() {
        let mut out = Vec::new();

        write_summary(&Bank::new(), &mut out).unwrap();

        let contents = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "account,holder,balance,interest_rate");
        assert_eq!(lines[1], "100,Default User 100,100.0,3.0");
    }
}
