use unidecode::unidecode;

/// Turns user input into the form airport codes are stored in:
/// ASCII, no surrounding whitespace, uppercase.
pub fn normalize_airport_code(input: &str) -> String {
    unidecode(input).trim().to_uppercase()
}
