use crate::error::{AppError, AppResult, FormatError};
use crate::models::Participant;
use std::path::Path;

const NAME_CAPTION: &str = "Employee_Name";
const EMAIL_CAPTION: &str = "Employee_EmailID";

/// Parse alternating name/email lines into participants
///
/// Lines are trimmed and blank lines skipped. Input order is kept. An odd
/// number of lines means the last name has no email and is rejected.
pub fn parse_roster(text: &str) -> AppResult<Vec<Participant>> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() % 2 != 0 {
        let name = lines.last().copied().unwrap_or_default().to_string();
        return Err(FormatError::MissingEmail { name }.into());
    }

    Ok(lines
        .chunks_exact(2)
        .map(|pair| Participant::new(pair[0], pair[1]))
        .collect())
}

/// Read a roster file, dropping a leading `Employee_Name`/`Employee_EmailID` caption pair
pub fn load_roster(path: &Path) -> AppResult<Vec<Participant>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

    let participants = parse_roster(strip_caption(&content))?;
    tracing::debug!(
        "loaded {} participants from {}",
        participants.len(),
        path.display()
    );
    Ok(participants)
}

fn strip_caption(content: &str) -> &str {
    let mut rest = content;
    let mut captions = [NAME_CAPTION, EMAIL_CAPTION].into_iter();
    let mut expected = captions.next();

    while let Some(caption) = expected {
        let (line, tail) = match rest.split_once('\n') {
            Some((line, tail)) => (line, tail),
            None => (rest, ""),
        };
        if line.trim().is_empty() {
            if tail.is_empty() {
                return content;
            }
            rest = tail;
            continue;
        }
        if !line.trim().eq_ignore_ascii_case(caption) {
            return content;
        }
        rest = tail;
        expected = captions.next();
    }
    rest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_lines_in_order() {
        let roster = parse_roster("Ann\na@x.com\nBob\nb@x.com").unwrap();
        assert_eq!(
            roster,
            vec![
                Participant::new("Ann", "a@x.com"),
                Participant::new("Bob", "b@x.com"),
            ]
        );
    }

    #[test]
    fn trims_and_skips_blank_lines() {
        let roster = parse_roster("\n  Ann  \n\n a@x.com\r\n\n").unwrap();
        assert_eq!(roster, vec![Participant::new("Ann", "a@x.com")]);
    }

    #[test]
    fn odd_line_count_is_a_format_error() {
        let err = parse_roster("Ann\na@x.com\nBob").unwrap_err();
        match err {
            AppError::Format(FormatError::MissingEmail { name }) => assert_eq!(name, "Bob"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_input_gives_empty_roster() {
        assert!(parse_roster("").unwrap().is_empty());
        assert!(parse_roster("  \n \n").unwrap().is_empty());
    }

    #[test]
    fn duplicates_pass_through() {
        let roster = parse_roster("Ann\na@x.com\nAnn\na@x.com").unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0], roster[1]);
    }

    #[test]
    fn caption_pair_is_stripped() {
        let text = "\nEmployee_Name\nemployee_emailid\nAnn\na@x.com\n";
        assert_eq!(parse_roster(strip_caption(text)).unwrap().len(), 1);
    }

    #[test]
    fn partial_caption_is_kept() {
        let text = "Employee_Name\nAnn\na@x.com\nBob";
        assert_eq!(strip_caption(text), text);
    }
}
