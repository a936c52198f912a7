// Numbered-choice prompt

use anyhow::{bail, Result};
use std::io::{BufRead, Write};

use crate::library::Kiss;

/// Print the numbered kiss listing, one per line.
pub fn show_kisses<W: Write>(out: &mut W, kisses: &[Kiss]) -> Result<()> {
    for (i, kiss) in kisses.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, kiss.name)?;
    }
    Ok(())
}

/// Ask for a 1-based choice until a valid one arrives. Out-of-range and
/// non-numeric answers are reported on `err` and re-prompted; end of
/// input aborts.
pub fn choose_kiss<'a, R, O, E>(
    input: &mut R,
    out: &mut O,
    err: &mut E,
    kisses: &'a [Kiss],
    prompt: &str,
) -> Result<&'a Kiss>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    loop {
        write!(out, "{}: ", prompt)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("No kiss chosen");
        }
        let answer = line.trim();

        match answer.parse::<usize>() {
            Ok(value) if value >= 1 && value <= kisses.len() => return Ok(&kisses[value - 1]),
            _ => writeln!(err, "Error: {} is not a valid choice", answer)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn kisses(names: &[&str]) -> Vec<Kiss> {
        names
            .iter()
            .map(|name| {
                let json = serde_json::json!({
                    "id": format!("id-{}", name),
                    "description": format!("kiss {}", name),
                    "git_pull_url": "https://gist.github.com/x.git",
                    "git_push_url": "https://gist.github.com/x.git",
                    "html_url": "https://gist.github.com/x",
                    "created_at": "2014-01-01T12:00:00Z",
                    "updated_at": "2014-01-01T12:00:00Z",
                    "files": {}
                });
                Kiss::from_gist(&serde_json::from_value(json).unwrap()).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_show_kisses_numbers_from_one() {
        let mut out = Vec::new();
        show_kisses(&mut out, &kisses(&["backup", "deploy"])).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1. backup\n2. deploy\n");
    }

    #[test]
    fn test_valid_choice_is_returned() {
        let candidates = kisses(&["backup", "deploy"]);
        let mut input = Cursor::new("2\n");
        let (mut out, mut err) = (Vec::new(), Vec::new());

        let chosen = choose_kiss(&mut input, &mut out, &mut err, &candidates, "Choose").unwrap();
        assert_eq!(chosen.name, "deploy");
        assert!(err.is_empty());
    }

    #[test]
    fn test_invalid_choices_reprompt() {
        let candidates = kisses(&["backup", "deploy"]);
        let mut input = Cursor::new("0\n3\nnope\n1\n");
        let (mut out, mut err) = (Vec::new(), Vec::new());

        let chosen = choose_kiss(&mut input, &mut out, &mut err, &candidates, "Choose").unwrap();
        assert_eq!(chosen.name, "backup");

        let errors = String::from_utf8(err).unwrap();
        assert!(errors.contains("Error: 0 is not a valid choice"));
        assert!(errors.contains("Error: 3 is not a valid choice"));
        assert!(errors.contains("Error: nope is not a valid choice"));
    }

    #[test]
    fn test_end_of_input_aborts() {
        let candidates = kisses(&["backup"]);
        let mut input = Cursor::new("");
        let (mut out, mut err) = (Vec::new(), Vec::new());

        let result = choose_kiss(&mut input, &mut out, &mut err, &candidates, "Choose");
        assert!(result.is_err());
    }
}
