use crate::engine::State;
use crate::error::ParseError;

/// Parses one row of nine tile values into a `State`.
///
/// Values may be separated by commas, whitespace, or both. `line` is the 1-based
/// line number used in error messages.
///
/// # Returns
/// * `Ok(State)` if the row holds a permutation of `0..=8`.
/// * `Err(ParseError::BadNumber)` if a token is not a non-negative integer below 256.
/// * `Err(ParseError::InvalidRow)` if the values do not form a valid board.
///
/// # Examples
/// ```
/// use eight_puzzle_bench::utils::parse_row;
/// let state = parse_row("1, 2, 3, 4, 5, 6, 7, 0, 8", 1).unwrap();
/// assert_eq!(state.blank_index(), 7);
/// assert!(parse_row("1,2,3", 4).is_err());
/// ```
pub fn parse_row(row: &str, line: usize) -> Result<State, ParseError> {
    let values = row
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<u8>().map_err(|_| ParseError::BadNumber {
                line,
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    State::try_from(values.as_slice()).map_err(|source| ParseError::InvalidRow { line, source })
}

/// Parses a whole instance file, one board per line.
///
/// Blank lines are ignored. If the first non-blank line contains anything other
/// than numbers it is treated as a column header (as in a CSV export) and
/// skipped; a non-numeric line anywhere else is an error.
///
/// # Examples
/// ```
/// use eight_puzzle_bench::utils::parse_instances;
/// let text = "a,b,c,d,e,f,g,h,i\n1,2,3,4,5,6,7,8,0\n\n1,2,3,4,5,6,7,0,8\n";
/// let states = parse_instances(text).unwrap();
/// assert_eq!(states.len(), 2);
/// ```
pub fn parse_instances(text: &str) -> Result<Vec<State>, ParseError> {
    let mut states = Vec::new();
    let mut seen_data = false;

    for (i, row) in text.lines().enumerate() {
        let row = row.trim();
        if row.is_empty() {
            continue;
        }
        if !seen_data && is_header(row) {
            seen_data = true;
            continue;
        }
        seen_data = true;
        states.push(parse_row(row, i + 1)?);
    }
    Ok(states)
}

fn is_header(row: &str) -> bool {
    row.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .any(|token| token.parse::<i64>().is_err())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GOAL;
    use crate::error::InvalidStateError;

    #[test]
    fn test_parse_row_separators() {
        assert_eq!(parse_row("1,2,3,4,5,6,7,8,0", 1).unwrap(), GOAL);
        assert_eq!(parse_row("1 2 3 4 5 6 7 8 0", 1).unwrap(), GOAL);
        assert_eq!(parse_row(" 1, 2,3\t4 5 6 7 8 0 ", 1).unwrap(), GOAL);
    }

    #[test]
    fn test_parse_row_bad_number() {
        let err = parse_row("1,2,3,4,x,6,7,8,0", 3).unwrap_err();
        assert!(matches!(err, ParseError::BadNumber { line: 3, ref token } if token == "x"));
        assert_eq!(err.to_string(), "line 3: 'x' is not a tile value");
    }

    #[test]
    fn test_parse_row_invalid_board() {
        let err = parse_row("1,2,3,4,5,6,7,8", 2).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidRow { line: 2, source: InvalidStateError::WrongLength(8) }
        ));

        let err = parse_row("1,2,3,4,5,6,7,8,9", 5).unwrap_err();
        assert_eq!(err.to_string(), "line 5: tile value 9 is outside 0..=8");
    }

    #[test]
    fn test_parse_instances_skips_header_and_blank_lines() {
        let text = "c0,c1,c2,c3,c4,c5,c6,c7,c8\n\n1,2,3,4,5,6,7,8,0\n1,2,3,4,5,6,7,0,8\n\n";
        let states = parse_instances(text).unwrap();
        assert_eq!(states.len(), 2);
        assert_eq!(states[0], GOAL);
    }

    #[test]
    fn test_parse_instances_without_header() {
        let states = parse_instances("1 2 3 4 5 6 7 8 0\n").unwrap();
        assert_eq!(states, vec![GOAL]);
    }

    #[test]
    fn test_parse_instances_reports_line_of_late_garbage() {
        let text = "1,2,3,4,5,6,7,8,0\nnot,a,board\n";
        let err = parse_instances(text).unwrap_err();
        assert!(matches!(err, ParseError::BadNumber { line: 2, .. }));
    }

    #[test]
    fn test_parse_instances_empty_input() {
        assert!(parse_instances("").unwrap().is_empty());
    }
}
