//! 分号分隔导出
//!
//! 导出的是当前过滤+排序视图的时点快照。带 UTF-8 BOM，
//! 所有字段加引号，列集合与原前端导出保持一致（土耳其语表头）。

use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};
use thiserror::Error;
use voi_domain::LineItem;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV buffer error: {0}")]
    Io(#[from] std::io::Error),
}

/// UTF-8 字节序标记，保证电子表格程序正确识别编码
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

pub const EXPORT_HEADERS: [&str; 11] = [
    "Satıcı No",
    "Satıcı Adı",
    "Şirket Kodu",
    "Belge No",
    "Belge Türü",
    "Kayıt Tarihi",
    "Vade Tarihi",
    "Tutar",
    "Para Birimi",
    "Gecikme (Gün)",
    "Durum",
];

/// 导出状态标签：原导出按逾期天数而非到期日判定
pub fn status_label(item: &LineItem) -> &'static str {
    if item.is_cleared {
        "Temizlendi"
    } else if item.arrears_in_days > 0 {
        "Gecikmiş"
    } else {
        "Açık"
    }
}

/// 把行集合写成分号分隔文本
pub fn export_csv(rows: &[LineItem]) -> Result<Vec<u8>, ExportError> {
    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .quote_style(QuoteStyle::Always)
        .from_writer(UTF8_BOM.to_vec());

    writer.write_record(EXPORT_HEADERS)?;
    for item in rows {
        writer.write_record([
            item.supplier.as_str(),
            item.supplier_name.as_str(),
            item.company_code.as_str(),
            item.accounting_document.as_str(),
            item.accounting_document_type.as_str(),
            item.posting_date.as_str(),
            item.net_due_date.as_str(),
            &item.amount_in_company_code_currency.to_string(),
            item.company_code_currency.as_str(),
            &item.arrears_in_days.to_string(),
            status_label(item),
        ])?;
    }

    Ok(writer.into_inner().map_err(|e| e.into_error())?)
}

/// 导出文件名：日期为紧凑数字形式
pub fn export_filename(today: NaiveDate) -> String {
    format!("satici_kalemleri_{}.csv", today.format("%Y%m%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use csv::ReaderBuilder;

    fn item(supplier: &str, amount: f64, arrears: i64, cleared: bool) -> LineItem {
        LineItem {
            supplier: supplier.to_string(),
            supplier_name: "Anadolu Tedarik A.S.".to_string(),
            company_code: "1000".to_string(),
            accounting_document: "5100000123".to_string(),
            accounting_document_type: "KR".to_string(),
            posting_date: "2025-06-01".to_string(),
            net_due_date: "2025-06-10".to_string(),
            amount_in_company_code_currency: amount,
            company_code_currency: "TRY".to_string(),
            arrears_in_days: arrears,
            is_cleared: cleared,
            ..Default::default()
        }
    }

    #[test]
    fn test_export_starts_with_bom() {
        let bytes = export_csv(&[]).unwrap();
        assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);
    }

    #[test]
    fn test_export_round_trip() {
        let rows = vec![
            item("2007", 1250.75, 5, false),
            item("2007", 300.0, 0, true),
            item("3010", 75.5, 0, false),
        ];
        let bytes = export_csv(&rows).unwrap();

        // 去掉 BOM 后重新解析
        let mut reader = ReaderBuilder::new()
            .delimiter(b';')
            .from_reader(&bytes[3..]);
        let parsed: Vec<csv::StringRecord> =
            reader.records().collect::<Result<_, _>>().unwrap();

        assert_eq!(parsed.len(), rows.len());
        for (record, row) in parsed.iter().zip(&rows) {
            assert_eq!(
                record[7],
                row.amount_in_company_code_currency.to_string(),
                "amount column must survive the round trip"
            );
            assert_eq!(record[10], *status_label(row));
        }
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(status_label(&item("2007", 0.0, 0, true)), "Temizlendi");
        assert_eq!(status_label(&item("2007", 0.0, 5, false)), "Gecikmiş");
        assert_eq!(status_label(&item("2007", 0.0, 0, false)), "Açık");
    }

    #[test]
    fn test_export_filename_compact_date() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(export_filename(date), "satici_kalemleri_20250615.csv");
    }

    #[test]
    fn test_header_row() {
        let bytes = export_csv(&[]).unwrap();
        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        assert!(text.starts_with("\"Satıcı No\";\"Satıcı Adı\""));
    }
}
