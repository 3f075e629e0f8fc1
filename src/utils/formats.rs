use crate::core::SquareSettings;

/// File name suffixes the compositor handles, with the settings each one maps to.
///
/// Matching is case-sensitive and exact; the first matching row wins.
pub const SUFFIX_TABLE: &[(&str, SquareSettings)] = &[
    (".jpeg", SquareSettings::JPEG),
    (".jpg", SquareSettings::JPEG),
    (".webp", SquareSettings::WEBP),
];

/// Get compositor settings from a file name suffix
pub fn settings_for_file(file_name: &str) -> Option<SquareSettings> {
    SUFFIX_TABLE
        .iter()
        .find(|(suffix, _)| file_name.ends_with(suffix))
        .map(|(_, settings)| *settings)
}
