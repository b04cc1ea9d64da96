use crate::theme::Theme;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub print: bool,
    pub clipboard: bool,
    pub save: bool,
    pub quick: bool,
    pub length: Option<usize>,
    pub digits: Option<bool>,
    pub symbols: Option<bool>,
    pub delay_ms: Option<u64>,
    pub seed: Option<u64>,
    pub theme: Option<Theme>,
}

impl CliFlags {
    /// Whether any flag changes a stored preference.
    pub fn has_preferences(&self) -> bool {
        self.quick
            || self.length.is_some()
            || self.digits.is_some()
            || self.symbols.is_some()
            || self.delay_ms.is_some()
            || self.theme.is_some()
    }
}
