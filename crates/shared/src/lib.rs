/// Static shop configuration
pub struct Config {
    pub name: &'static str,
    pub tagline: &'static str,

    /// Spreadsheet web-app endpoint; answers GET with the snapshot and accepts POSTed transactions
    pub endpoint: &'static str,
    /// Currency symbol used on amount labels and dashboard figures
    pub currency: &'static str,

    pub features: Features,
    pub staff: &'static [StaffEntry],
}

/// Capability flags - one build covers every shop setup
pub struct Features {
    /// Analytics dashboard view
    pub dashboard: bool,
    /// PIN screen in front of the app
    pub staff_gate: bool,
    /// Inventory valuation cards on the dashboard
    pub valuation: bool,
}

/// One PIN → display name pair.
///
/// The PIN table ships to the browser in plain text. It keeps casual
/// visitors off the form and tags rows with who logged them; it is not
/// access control.
pub struct StaffEntry {
    pub pin: &'static str,
    pub name: &'static str,
}

pub static CONFIG: Config = Config {
    name: "Stockbook",
    tagline: "sales & expense log",

    endpoint: "https://script.google.com/macros/s/YOUR_DEPLOYMENT_ID/exec",
    currency: "₦",

    features: Features {
        dashboard: true,
        staff_gate: true,
        valuation: true,
    },

    // Staff PINs - keep them short, they are typed on a phone keypad
    staff: &[
        StaffEntry { pin: "1234", name: "Admin" },
        StaffEntry { pin: "2580", name: "Front Desk" },
        StaffEntry { pin: "0007", name: "Warehouse" },
    ],
};
