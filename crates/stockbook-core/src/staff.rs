//! PIN gate in front of the app
//!
//! Not a security boundary. The PIN table is compiled into the client and
//! the endpoint never sees a PIN, only the display name stamped on each row.
//! It exists so rows say who logged them and so a passer-by cannot tap
//! through the form.

use shared::StaffEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffIdentity {
    pub name: String,
}

/// Look a PIN up in the static table
pub fn authenticate(table: &[StaffEntry], pin: &str) -> Option<StaffIdentity> {
    let pin = pin.trim();
    table.iter().find(|entry| entry.pin == pin).map(|entry| StaffIdentity {
        name: entry.name.to_string(),
    })
}

/// Who is using the app this session. Lasts until the page reloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Gate disabled; rows carry no staff name
    Open,
    /// Waiting for a PIN; `rejected` after a wrong attempt
    Locked { rejected: bool },
    Staff(StaffIdentity),
}

impl Access {
    pub fn new(gate_enabled: bool) -> Self {
        if gate_enabled {
            Access::Locked { rejected: false }
        } else {
            Access::Open
        }
    }

    pub fn is_granted(&self) -> bool {
        !matches!(self, Access::Locked { .. })
    }

    pub fn staff_name(&self) -> Option<&str> {
        match self {
            Access::Staff(identity) => Some(&identity.name),
            _ => None,
        }
    }

    /// Try a PIN. Once granted, further attempts change nothing.
    pub fn enter_pin(self, table: &[StaffEntry], pin: &str) -> Self {
        match self {
            Access::Locked { .. } => match authenticate(table, pin) {
                Some(identity) => {
                    log::info!("Staff session started for {}", identity.name);
                    Access::Staff(identity)
                }
                None => Access::Locked { rejected: true },
            },
            granted => granted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[StaffEntry] = &[
        StaffEntry { pin: "1234", name: "Ada" },
        StaffEntry { pin: "0007", name: "Bayo" },
    ];

    #[test]
    fn test_authenticate() {
        assert_eq!(authenticate(TABLE, "0007"), Some(StaffIdentity { name: "Bayo".into() }));
        assert_eq!(authenticate(TABLE, " 1234 "), Some(StaffIdentity { name: "Ada".into() }));
        assert_eq!(authenticate(TABLE, "7"), None);
        assert_eq!(authenticate(TABLE, ""), None);
    }

    #[test]
    fn test_gate_flow() {
        let access = Access::new(true);
        assert!(!access.is_granted());

        let access = access.enter_pin(TABLE, "9999");
        assert_eq!(access, Access::Locked { rejected: true });

        let access = access.enter_pin(TABLE, "1234");
        assert!(access.is_granted());
        assert_eq!(access.staff_name(), Some("Ada"));

        // A later wrong PIN does not log the user out
        let access = access.enter_pin(TABLE, "0000");
        assert_eq!(access.staff_name(), Some("Ada"));
    }

    #[test]
    fn test_disabled_gate_is_open_without_identity() {
        let access = Access::new(false);
        assert!(access.is_granted());
        assert_eq!(access.staff_name(), None);
    }
}
