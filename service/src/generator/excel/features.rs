use bitflags::bitflags;

bitflags! {
    /// Excel generation features to enable.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    pub struct ExcelFeatures: u8 {
        /// Bold, shaded header row.
        const FORMAT_HEADERS = 0b0001;
        /// Add enum dropdown validation.
        const ADD_VALIDATION = 0b0010;
        /// Freeze header rows.
        const FREEZE_HEADERS = 0b0100;
        /// Add an autofilter over the header row.
        const ADD_FILTERS = 0b1000;

        /// All features enabled.
        const ALL = Self::FORMAT_HEADERS.bits()
                  | Self::ADD_VALIDATION.bits()
                  | Self::FREEZE_HEADERS.bits()
                  | Self::ADD_FILTERS.bits();

        /// Default set: everything but the autofilter.
        const STANDARD = Self::FORMAT_HEADERS.bits()
                       | Self::ADD_VALIDATION.bits()
                       | Self::FREEZE_HEADERS.bits();

        /// No features (plain header row, no dropdowns).
        const NONE = 0b0000;
    }
}

impl Default for ExcelFeatures {
    fn default() -> Self {
        Self::STANDARD
    }
}
