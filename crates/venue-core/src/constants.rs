//! Application constants and display defaults
//!
//! Centralized location for user-facing strings and directory names

/// Form copy shown around the inputs
pub mod form {
    /// Heading above the list of locations
    pub const HEADING: &str = "Locations";

    /// Help text shown by the info tooltip
    pub const TOOLTIP_TEXT: &str = "This is a helpful tooltip.";

    /// Label of the append button
    pub const ADD_LOCATION_LABEL: &str = "Add New Location";

    /// Banner shown after a successful save
    pub const SUBMITTED_MESSAGE: &str = "Form submitted!";

    /// Hint rendered under the alternative name input
    pub const ALT_NAME_HINT: &str = "Example: Gym 1, Gym 2, Gym 3. Leave blank if not using.";

    /// Trigger text of the state picker with nothing selected
    pub const STATE_PLACEHOLDER: &str = "Pick your state";

    /// Trigger text of the country picker with nothing selected
    pub const COUNTRY_PLACEHOLDER: &str = "Select a country";
}

/// Configuration locations
pub mod config {
    /// Config directory name (under the home directory)
    pub const CONFIG_DIR_NAME: &str = ".venues";

    /// Config file name inside the config directory
    pub const CONFIG_FILE_NAME: &str = "config.toml";

    /// Log file name inside the logs directory
    pub const LOG_FILE_NAME: &str = "venues.log";

    /// Default theme name
    pub const DEFAULT_THEME: &str = "venues";
}
