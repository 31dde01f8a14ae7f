use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Поле формы с исходным файлом A
pub const FIELD_FILE_A: &str = "file_a";
/// Поле формы с файлом B, сравниваемым с A
pub const FIELD_FILE_B: &str = "file_b";
/// Поле формы с именем ключевой колонки
pub const FIELD_KEY_COLUMN: &str = "key_column";
/// Дополнительное поле запроса `/download`
pub const FIELD_DOWNLOAD_TYPE: &str = "download_type";

/// Категория строк для выгрузки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DownloadType {
    /// Строки B, ключей которых нет в A
    NewRows,
    /// Строки A, ключей которых нет в B
    NonExistingRows,
}

impl DownloadType {
    pub const ALL: [DownloadType; 2] = [DownloadType::NewRows, DownloadType::NonExistingRows];

    /// Value sent in the `download_type` form field
    pub fn as_form_value(&self) -> &'static str {
        match self {
            DownloadType::NewRows => "new_rows",
            DownloadType::NonExistingRows => "non_existing_rows",
        }
    }

    /// Name of the file offered to the user
    pub fn file_name(&self) -> &'static str {
        match self {
            DownloadType::NewRows => "new_rows.xlsx",
            DownloadType::NonExistingRows => "non_existing_rows.xlsx",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DownloadType::NewRows => "Download new rows",
            DownloadType::NonExistingRows => "Download non-existing rows",
        }
    }
}

impl fmt::Display for DownloadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_form_value())
    }
}

impl FromStr for DownloadType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new_rows" => Ok(DownloadType::NewRows),
            "non_existing_rows" => Ok(DownloadType::NonExistingRows),
            other => anyhow::bail!("unknown download type: {other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_values() {
        assert_eq!(DownloadType::NewRows.as_form_value(), "new_rows");
        assert_eq!(
            DownloadType::NonExistingRows.as_form_value(),
            "non_existing_rows"
        );
    }

    #[test]
    fn test_file_names() {
        assert_eq!(DownloadType::NewRows.file_name(), "new_rows.xlsx");
        assert_eq!(
            DownloadType::NonExistingRows.file_name(),
            "non_existing_rows.xlsx"
        );
    }

    #[test]
    fn test_from_str() {
        for kind in DownloadType::ALL {
            let parsed: DownloadType = kind.as_form_value().parse().unwrap();
            assert_eq!(parsed, kind);
        }
        assert!("all_rows".parse::<DownloadType>().is_err());
        assert!("NEW_ROWS".parse::<DownloadType>().is_err());
        assert!("".parse::<DownloadType>().is_err());
    }

    #[test]
    fn test_serde_uses_form_values() {
        let json = serde_json::to_string(&DownloadType::NonExistingRows).unwrap();
        assert_eq!(json, "\"non_existing_rows\"");
        let back: DownloadType = serde_json::from_str("\"new_rows\"").unwrap();
        assert_eq!(back, DownloadType::NewRows);
    }
}
