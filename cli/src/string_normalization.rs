use unidecode::unidecode;

pub fn clean_str(input: &str) -> String {
    unidecode(input) // Convert Unicode to ASCII
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Splits an underscore-separated field, cleaning each item and dropping blanks.
pub fn split_list(field: &str) -> Vec<String> {
    field
        .split('_')
        .map(clean_str)
        .filter(|item| !item.is_empty())
        .collect()
}
