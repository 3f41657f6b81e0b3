//! Menu labels

/// Fixed strings shown by the custom command menus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationSet {
    pub cancel: String,
    pub custom_command_title: String,
    pub running_custom_command_status: String,
    pub bulk_command_title: String,
    pub running_bulk_command_status: String,
    pub unknown_internal_function_error: String,
}

impl TranslationSet {
    /// English labels
    pub fn english() -> Self {
        Self {
            cancel: "Cancel".to_string(),
            custom_command_title: "Custom Command:".to_string(),
            running_custom_command_status: "running custom command".to_string(),
            bulk_command_title: "Bulk Command:".to_string(),
            running_bulk_command_status: "running bulk command".to_string(),
            unknown_internal_function_error: "Unknown internal function:".to_string(),
        }
    }

    /// Error panel text for a config entry naming a missing function
    pub fn unknown_internal_function(&self, name: &str) -> String {
        format!("{} {}", self.unknown_internal_function_error, name)
    }
}

impl Default for TranslationSet {
    fn default() -> Self {
        Self::english()
    }
}
