//! Test to trigger ts-rs bindings export
//! Run with: cargo test export_bindings

#[cfg(test)]
mod tests {
    use crate::shared::settings::ConverterSettings;
    use crate::shared::types::*;
    use ts_rs::TS;

    #[test]
    fn export_bindings() {
        // This test triggers ts-rs to export TypeScript bindings
        // The bindings are written under the ts-rs export directory

        // Request / response payloads
        ConvertUnitsRequest::export().expect("Failed to export ConvertUnitsRequest");
        ConvertUnitsResponse::export().expect("Failed to export ConvertUnitsResponse");
        GetUnitsResponse::export().expect("Failed to export GetUnitsResponse");
        CategoryDTO::export().expect("Failed to export CategoryDTO");
        HistoryEntryDTO::export().expect("Failed to export HistoryEntryDTO");
        ExportHistoryResponse::export().expect("Failed to export ExportHistoryResponse");

        // Settings
        ConverterSettings::export().expect("Failed to export ConverterSettings");
    }

    #[test]
    fn request_declares_optional_value() {
        let decl = ConvertUnitsRequest::decl();
        assert!(decl.contains("value: number | null"));
    }
}
