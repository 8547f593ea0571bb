mod data;
mod error;
mod eval;

use std::io::{self, Write};

use anyhow::Context;

use eval::compose::fun;
use eval::lookup::TableDir;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    print!("Input x y z: ");
    io::stdout().flush().context("flushing prompt")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("reading input line")?;

    let Some((x, y, z)) = parse_inputs(&line) else {
        println!("Unknown error");
        return Ok(());
    };

    // Tables live in the working directory, one fixed file name per
    // domain region.
    let tables = TableDir::new(".");

    match fun(&tables, x, y, z) {
        Ok(value) => println!("fun = {value}"),
        // Unrecovered failures (domain, malformed table) end the
        // computation with a message and no numeric result.
        Err(err) => println!("{err}"),
    }

    Ok(())
}

/// Parse exactly three whitespace-separated reals from one input line.
fn parse_inputs(line: &str) -> Option<(f64, f64, f64)> {
    let mut nums = line.split_whitespace().map(str::parse::<f64>);
    let x = nums.next()?.ok()?;
    let y = nums.next()?.ok()?;
    let z = nums.next()?.ok()?;
    Some((x, y, z))
}

#[cfg(test)]
mod tests {
    use super::parse_inputs;

    #[test]
    fn parses_three_reals() {
        assert_eq!(parse_inputs("2 0.5 3\n"), Some((2.0, 0.5, 3.0)));
        assert_eq!(parse_inputs("  -1.5\t0  7e-2 \n"), Some((-1.5, 0.0, 0.07)));
    }

    #[test]
    fn rejects_short_or_malformed_lines() {
        assert_eq!(parse_inputs("1 2\n"), None);
        assert_eq!(parse_inputs("a b c\n"), None);
        assert_eq!(parse_inputs(""), None);
    }
}
