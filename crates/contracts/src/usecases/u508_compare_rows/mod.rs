pub mod request;
pub mod response;

pub use request::{DownloadType, FIELD_DOWNLOAD_TYPE, FIELD_FILE_A, FIELD_FILE_B, FIELD_KEY_COLUMN};
pub use response::{ErrorBody, ProcessReply, RowCounts};

use crate::usecases::common::UseCaseMetadata;

/// Загрузка двух файлов и подсчёт строк
pub const PROCESS_PATH: &str = "/process";
/// Лента серверных логов
pub const LOGS_PATH: &str = "/logs";
/// Выгрузка одной из двух категорий строк в xlsx
pub const DOWNLOAD_PATH: &str = "/download";

/// MIME type of the spreadsheet returned by `/download`
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub struct CompareRows;

impl UseCaseMetadata for CompareRows {
    fn usecase_index() -> &'static str {
        "u508"
    }

    fn usecase_name() -> &'static str {
        "compare_rows"
    }

    fn display_name() -> &'static str {
        "Compare spreadsheets"
    }

    fn description() -> &'static str {
        "Сравнение двух Excel-файлов по ключевой колонке и выгрузка новых и отсутствующих строк"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(CompareRows::full_name(), "u508_compare_rows");
    }
}
